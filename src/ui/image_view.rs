//! ImageView 组件 - 背景图片视图
//!
//! 除了按内容模式绘制图片，还承载头部的两个视觉量：
//! 缩放系数（底边固定、水平居中地放大，放大部分向上扩展）
//! 和模糊半径（对图片覆盖的画布区域做盒式模糊）。

use super::component::{Component, ComponentId, Style};
use crate::pixmap::Pixmap;
use crate::{Canvas, ContentMode, Paint, PaintStyle, Rect};
use std::sync::Arc;

/// ImageView - 图片组件
pub struct ImageView {
    id: ComponentId,
    style: Style,
    pixmap: Arc<Pixmap>,
    mode: ContentMode,
    zoom: f32,
    blur_radius: f32,
}

impl ImageView {
    pub fn new(pixmap: Arc<Pixmap>) -> Self {
        Self {
            id: ComponentId::new(),
            style: Style::default(),
            pixmap,
            mode: ContentMode::AspectFill,
            zoom: 1.0,
            blur_radius: 0.0,
        }
    }

    pub fn with_frame(mut self, x: f32, y: f32, width: f32, height: f32) -> Self {
        self.style.set_frame(x, y, width, height);
        self
    }

    pub fn with_mode(mut self, mode: ContentMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn pixmap(&self) -> &Arc<Pixmap> {
        &self.pixmap
    }

    pub fn mode(&self) -> ContentMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: ContentMode) {
        self.mode = mode;
    }

    /// 缩放系数，下限 1.0
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom.max(1.0);
    }

    /// 模糊半径（像素），下限 0
    pub fn blur_radius(&self) -> f32 {
        self.blur_radius
    }

    pub fn set_blur_radius(&mut self, radius: f32) {
        self.blur_radius = radius.max(0.0);
    }
}

impl Component for ImageView {
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
        let bounds = self.style.bounds();

        if let Some(bg) = self.style.background_color {
            let paint = Paint::new()
                .with_color(bg.with_opacity(self.style.opacity))
                .with_style(PaintStyle::Fill);
            canvas.draw_rect(&bounds, &paint);
        }

        if self.pixmap.is_empty() {
            return;
        }

        // 底边固定、水平居中：放大部分向上越出 frame，
        // 正好盖住宿主容器过度滚动时露出的空间
        let scaled_w = bounds.width * self.zoom;
        let scaled_h = bounds.height * self.zoom;
        let dest = Rect::new(
            bounds.x - (scaled_w - bounds.width) / 2.0,
            bounds.bottom() - scaled_h,
            scaled_w,
            scaled_h,
        );
        canvas.draw_image(
            self.pixmap.data(),
            self.pixmap.width(),
            self.pixmap.height(),
            &dest,
            self.mode,
        );

        if self.blur_radius >= 0.5 {
            canvas.blur_rect(&dest, self.blur_radius);
        }
    }

    fn type_name(&self) -> &'static str {
        "ImageView"
    }
}
