//! PageControl 组件 - 分页指示点

use super::component::{Component, ComponentId, Style};
use crate::{Canvas, Color, Paint, PaintStyle};

/// PageControl - 一排指示点，多于一页时才显示
pub struct PageControl {
    id: ComponentId,
    style: Style,
    count: usize,
    current: usize,
    dot_size: f32,
    dot_gap: f32,
    dot_color: Color,
    active_color: Color,
}

impl PageControl {
    pub fn new(count: usize) -> Self {
        let mut style = Style::default();
        // 单页或空页不显示指示器
        style.visible = count > 1;
        Self {
            id: ComponentId::new(),
            style,
            count,
            current: 0,
            dot_size: 8.0,
            dot_gap: 8.0,
            // rgba(0,0,0,0.3) 与纯黑，微信 swiper 的默认指示点配色
            dot_color: Color::new(0, 0, 0, 76),
            active_color: Color::from_hex(0x000000),
        }
    }

    pub fn with_frame(mut self, x: f32, y: f32, width: f32, height: f32) -> Self {
        self.style.set_frame(x, y, width, height);
        self
    }

    /// 指示点配色，供调用方在借出的子视图上调整样式
    pub fn set_colors(&mut self, dot_color: Color, active_color: Color) {
        self.dot_color = dot_color;
        self.active_color = active_color;
    }

    pub fn set_dot_metrics(&mut self, size: f32, gap: f32) {
        self.dot_size = size.max(1.0);
        self.dot_gap = gap.max(0.0);
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn current(&self) -> usize {
        self.current
    }

    /// 设置当前页，越界值被钳制
    pub fn set_current(&mut self, index: usize) {
        self.current = index.min(self.count.saturating_sub(1));
    }
}

impl Component for PageControl {
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
        if !self.style.visible || self.count <= 1 {
            return;
        }

        let bounds = self.style.bounds();
        let total_width = self.count as f32 * self.dot_size
            + (self.count - 1) as f32 * self.dot_gap;
        let start_x = bounds.x + (bounds.width - total_width) / 2.0;
        let dot_y = bounds.y + (bounds.height - self.dot_size) / 2.0;

        for i in 0..self.count {
            let dot_x = start_x + i as f32 * (self.dot_size + self.dot_gap);
            let color = if i == self.current { self.active_color } else { self.dot_color };
            let paint = Paint::new()
                .with_color(color.with_opacity(self.style.opacity))
                .with_style(PaintStyle::Fill)
                .with_anti_alias(true);
            canvas.draw_circle(
                dot_x + self.dot_size / 2.0,
                dot_y + self.dot_size / 2.0,
                self.dot_size / 2.0,
                &paint,
            );
        }
    }

    fn type_name(&self) -> &'static str {
        "PageControl"
    }
}
