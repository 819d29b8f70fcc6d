//! PagesScrollView 组件 - 横向分页滚动容器
//!
//! 每个内容页占一个页宽的槽位，总内容宽度 = 页宽 × 页数。
//! 拖拽释放后按释放速度或拖拽距离吸附到目标页。

use super::component::{Component, ComponentId, Style};
use crate::{Canvas, Paint, PaintStyle, Rect};

/// 吸附动画时长（秒）
const SNAP_DURATION: f32 = 0.3;
/// 释放速度超过该值（像素/秒）时翻页
const FLING_VELOCITY: f32 = 300.0;

/// PagesScrollView - 横向分页滚动
pub struct PagesScrollView {
    id: ComponentId,
    style: Style,
    pages: Vec<Box<dyn Component>>,
    page_width: f32,
    scroll_x: f32,
    // 拖拽状态
    is_dragging: bool,
    drag_start_x: f32,
    drag_start_scroll: f32,
    // (position, timestamp_ms)
    velocity_samples: Vec<(f32, u64)>,
    // 吸附动画
    is_snapping: bool,
    snap_timer: f32,
    snap_from: f32,
    snap_to: f32,
}

impl PagesScrollView {
    /// 创建分页滚动容器，每页的 frame 被重设为自己的槽位
    pub fn new(frame: Rect, mut pages: Vec<Box<dyn Component>>) -> Self {
        let page_width = frame.width;
        for (i, page) in pages.iter_mut().enumerate() {
            page.style_mut().set_frame(i as f32 * page_width, 0.0, page_width, frame.height);
        }

        let mut style = Style::default();
        style.set_frame(frame.x, frame.y, frame.width, frame.height);

        Self {
            id: ComponentId::new(),
            style,
            pages,
            page_width,
            scroll_x: 0.0,
            is_dragging: false,
            drag_start_x: 0.0,
            drag_start_scroll: 0.0,
            velocity_samples: Vec::with_capacity(10),
            is_snapping: false,
            snap_timer: 0.0,
            snap_from: 0.0,
            snap_to: 0.0,
        }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn page_width(&self) -> f32 {
        self.page_width
    }

    /// 总内容宽度 = 页宽 × 页数
    pub fn content_width(&self) -> f32 {
        self.page_width * self.pages.len() as f32
    }

    fn max_scroll(&self) -> f32 {
        (self.content_width() - self.page_width).max(0.0)
    }

    pub fn scroll_x(&self) -> f32 {
        self.scroll_x
    }

    /// 当前页 = 距离滚动位置最近的页
    pub fn current_page(&self) -> usize {
        if self.page_width <= 0.0 || self.pages.is_empty() {
            return 0;
        }
        let page = (self.scroll_x / self.page_width).round() as i64;
        page.clamp(0, self.pages.len() as i64 - 1) as usize
    }

    /// 滚动到指定页，越界索引被钳制
    pub fn scroll_to_page(&mut self, index: usize, animated: bool) {
        if self.pages.is_empty() {
            return;
        }
        let index = index.min(self.pages.len() - 1);
        let target = (index as f32 * self.page_width).min(self.max_scroll());
        if animated {
            self.start_snap(target);
        } else {
            self.is_snapping = false;
            self.scroll_x = target;
        }
    }

    pub fn begin_drag(&mut self, x: f32, timestamp: u64) {
        self.is_dragging = true;
        self.is_snapping = false;
        self.drag_start_x = x;
        self.drag_start_scroll = self.scroll_x;
        self.velocity_samples.clear();
        self.velocity_samples.push((x, timestamp));
    }

    pub fn update_drag(&mut self, x: f32, timestamp: u64) {
        if !self.is_dragging { return; }
        let delta = self.drag_start_x - x;
        let mut new_pos = self.drag_start_scroll + delta;
        // 越界时施加橡皮筋阻尼
        if new_pos < 0.0 {
            new_pos = -Self::rubber_band(-new_pos, self.page_width);
        } else if new_pos > self.max_scroll() {
            let overshoot = new_pos - self.max_scroll();
            new_pos = self.max_scroll() + Self::rubber_band(overshoot, self.page_width);
        }
        self.scroll_x = new_pos;
        self.velocity_samples.push((x, timestamp));
        // Keep samples from last 100ms
        self.velocity_samples.retain(|(_, t)| timestamp >= *t && timestamp - *t < 100);
    }

    /// 结束拖拽，返回是否需要继续驱动动画
    pub fn end_drag(&mut self) -> bool {
        if !self.is_dragging { return false; }
        self.is_dragging = false;

        if self.pages.is_empty() || self.page_width <= 0.0 {
            return false;
        }

        let velocity = self.release_velocity();
        let start_page = (self.drag_start_scroll / self.page_width).round() as i64;
        let dragged = self.scroll_x - self.drag_start_scroll;

        // 快速轻扫翻一页，否则吸附到最近的页
        let target_page = if velocity > FLING_VELOCITY && dragged > 0.0 {
            start_page + 1
        } else if velocity < -FLING_VELOCITY && dragged < 0.0 {
            start_page - 1
        } else {
            (self.scroll_x / self.page_width).round() as i64
        };

        let target_page = target_page.clamp(0, self.pages.len() as i64 - 1) as usize;
        self.scroll_to_page(target_page, true);
        self.is_snapping
    }

    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    pub fn is_animating(&self) -> bool {
        self.is_snapping
    }

    /// 推进吸附动画，返回是否还在动画中
    pub fn update(&mut self, dt: f32) -> bool {
        if !self.is_snapping {
            return false;
        }
        self.snap_timer += dt;
        if self.snap_timer >= SNAP_DURATION {
            self.scroll_x = self.snap_to;
            self.is_snapping = false;
            return false;
        }
        let t = self.snap_timer / SNAP_DURATION;
        let ease = 1.0 - (1.0 - t).powi(3);
        self.scroll_x = self.snap_from + (self.snap_to - self.snap_from) * ease;
        true
    }

    fn start_snap(&mut self, target: f32) {
        if (target - self.scroll_x).abs() < 0.5 {
            self.scroll_x = target;
            self.is_snapping = false;
            return;
        }
        self.is_snapping = true;
        self.snap_timer = 0.0;
        self.snap_from = self.scroll_x;
        self.snap_to = target;
    }

    fn release_velocity(&self) -> f32 {
        if self.velocity_samples.len() < 2 { return 0.0; }
        let first = self.velocity_samples.first().unwrap();
        let last = self.velocity_samples.last().unwrap();
        // timestamp is in ms, convert to seconds
        let dt = (last.1.saturating_sub(first.1)) as f32 / 1000.0;
        if dt < 0.001 { return 0.0; }
        (first.0 - last.0) / dt
    }

    fn rubber_band(offset: f32, dimension: f32) -> f32 {
        let c = 0.55;
        let x = offset.abs() / dimension.max(1.0);
        (1.0 - (1.0 / (x * c + 1.0))) * dimension
    }
}

impl Component for PagesScrollView {
    fn id(&self) -> ComponentId {
        self.id
    }

    fn style(&self) -> &Style {
        &self.style
    }

    fn style_mut(&mut self) -> &mut Style {
        &mut self.style
    }

    fn render(&self, canvas: &mut Canvas) {
        if !self.style.visible {
            return;
        }
        let bounds = self.style.bounds();

        if let Some(bg) = self.style.background_color {
            let paint = Paint::new()
                .with_color(bg.with_opacity(self.style.opacity))
                .with_style(PaintStyle::Fill);
            canvas.draw_rect(&bounds, &paint);
        }

        canvas.save();
        canvas.clip_rect(bounds);
        canvas.translate(bounds.x - self.scroll_x, bounds.y);

        for page in &self.pages {
            if !page.style().visible {
                continue;
            }
            // 只渲染可见范围内的页
            let page_bounds = page.style().bounds();
            if page_bounds.right() >= self.scroll_x
                && page_bounds.x <= self.scroll_x + bounds.width
            {
                page.render(canvas);
            }
        }

        canvas.restore();
    }

    fn type_name(&self) -> &'static str {
        "PagesScrollView"
    }
}
