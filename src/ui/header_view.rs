//! HeaderView 组件 - 可伸缩头部视图
//!
//! 顶部的装饰性头部：背景图随宿主容器的滚动偏移量缩放/模糊，
//! 可选的横向分页内容区在可见区域内保持垂直居中，
//! 多于一页时自动创建分页指示点。
//!
//! 配置在构造时固定，运行期状态只通过 `offset_did_update`
//! 由宿主容器的滚动回调驱动。

use super::component::{Component, ComponentId, Style};
use super::image_view::ImageView;
use super::page_control::PageControl;
use super::pages_scroll_view::PagesScrollView;
use crate::effects::StretchEffect;
use crate::pixmap::Pixmap;
use crate::{Canvas, Point, Rect, Size};
use std::sync::Arc;

/// 指示点区域高度
const PAGE_CONTROL_HEIGHT: f32 = 20.0;
/// 指示点区域距头部底边的距离
const PAGE_CONTROL_BOTTOM_INSET: f32 = 8.0;

/// HeaderView - 可伸缩头部
pub struct HeaderView {
    id: ComponentId,
    style: Style,
    size: Size,
    background_view: ImageView,
    pages_view: PagesScrollView,
    page_control: PageControl,
    effect: StretchEffect,
    last_offset: Point,
}

impl HeaderView {
    /// 创建头部视图
    ///
    /// 背景图是必需项：空图片或零面积尺寸返回 Err。
    /// pages 可以为空；多于一页时指示点可见且数量等于页数。
    pub fn new(
        size: Size,
        background: Arc<Pixmap>,
        pages: Vec<Box<dyn Component>>,
    ) -> Result<Self, String> {
        if size.is_empty() {
            return Err("header size must be non-empty".to_string());
        }
        if background.is_empty() {
            return Err("background image is required".to_string());
        }

        let mut style = Style::default();
        style.set_frame(0.0, 0.0, size.width, size.height);

        let page_count = pages.len();
        let background_view = ImageView::new(background)
            .with_frame(0.0, 0.0, size.width, size.height);
        let pages_view = PagesScrollView::new(
            Rect::new(0.0, 0.0, size.width, size.height),
            pages,
        );
        let page_control = PageControl::new(page_count).with_frame(
            0.0,
            size.height - PAGE_CONTROL_BOTTOM_INSET - PAGE_CONTROL_HEIGHT,
            size.width,
            PAGE_CONTROL_HEIGHT,
        );

        Ok(Self {
            id: ComponentId::new(),
            style,
            size,
            background_view,
            pages_view,
            page_control,
            effect: StretchEffect::new(size.height),
            last_offset: Point::default(),
        })
    }

    /// 宿主容器的偏移量更新回调
    ///
    /// 只使用 Y 分量：上拉（y < 0）放大背景，下滚（y > 0）模糊背景，
    /// 同时调整分页区位置使其在可见头部区域内保持垂直居中。
    pub fn offset_did_update(&mut self, new_offset: Point) {
        self.last_offset = new_offset;
        let y = new_offset.y;

        self.background_view.set_zoom(self.effect.zoom_for(y));
        self.background_view.set_blur_radius(self.effect.blur_for(y));

        // 可见头部区域的中心随偏移移动 y/2，分页区跟随
        let pages_height = self.pages_view.style().height;
        let center_y = self.size.height / 2.0 + y / 2.0;
        self.pages_view.style_mut().y = center_y - pages_height / 2.0;

        self.sync_page_control();
    }

    /// 推进分页吸附动画，返回是否需要重绘
    pub fn update(&mut self, dt: f32) -> bool {
        let animating = self.pages_view.update(dt);
        self.sync_page_control();
        animating
    }

    fn sync_page_control(&mut self) {
        self.page_control.set_current(self.pages_view.current_page());
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn last_offset(&self) -> Point {
        self.last_offset
    }

    pub fn effect(&self) -> &StretchEffect {
        &self.effect
    }

    pub fn effect_mut(&mut self) -> &mut StretchEffect {
        &mut self.effect
    }

    // 子视图只借出引用，所有权始终归头部视图

    pub fn background_view(&self) -> &ImageView {
        &self.background_view
    }

    pub fn background_view_mut(&mut self) -> &mut ImageView {
        &mut self.background_view
    }

    pub fn pages_view(&self) -> &PagesScrollView {
        &self.pages_view
    }

    pub fn pages_view_mut(&mut self) -> &mut PagesScrollView {
        &mut self.pages_view
    }

    pub fn page_control(&self) -> &PageControl {
        &self.page_control
    }

    pub fn page_control_mut(&mut self) -> &mut PageControl {
        &mut self.page_control
    }
}

impl Component for HeaderView {
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

        canvas.save();
        canvas.translate(self.style.x, self.style.y);

        // 背景不裁剪，放大后可越出头部区域（对应过度滚动露出的空间）
        self.background_view.render(canvas);
        self.pages_view.render(canvas);
        self.page_control.render(canvas);

        canvas.restore();
    }

    fn type_name(&self) -> &'static str {
        "HeaderView"
    }
}
