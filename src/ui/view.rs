//! View 组件 - 基础色块容器

use crate::{Paint, PaintStyle, Color};
use super::component::{Component, ComponentId, Style};
use crate::Canvas;

/// View - 纯色背景的基础组件，常用作占位页面
pub struct View {
    id: ComponentId,
    style: Style,
}

impl View {
    pub fn new() -> Self {
        Self {
            id: ComponentId::new(),
            style: Style::default(),
        }
    }

    pub fn with_frame(mut self, x: f32, y: f32, width: f32, height: f32) -> Self {
        self.style.set_frame(x, y, width, height);
        self
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.style.background_color = Some(color);
        self
    }
}

impl Default for View {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for View {
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
        if let Some(bg) = self.style.background_color {
            let paint = Paint::new()
                .with_color(bg.with_opacity(self.style.opacity))
                .with_style(PaintStyle::Fill);
            canvas.draw_rect(&self.style.bounds(), &paint);
        }
    }

    fn type_name(&self) -> &'static str {
        "View"
    }
}
