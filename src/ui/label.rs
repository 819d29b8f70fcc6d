//! Label 组件 - 单行文本

use super::component::{Component, ComponentId, Style};
use crate::text::TextRenderer;
use crate::{Canvas, Color, Paint};
use std::sync::Arc;

/// Label - 在 frame 内居中绘制单行文本，常用作头部内容页
pub struct Label {
    id: ComponentId,
    style: Style,
    text: String,
    font_size: f32,
    text_color: Color,
    renderer: Arc<TextRenderer>,
}

impl Label {
    pub fn new(text: &str, renderer: Arc<TextRenderer>) -> Self {
        Self {
            id: ComponentId::new(),
            style: Style::default(),
            text: text.to_string(),
            font_size: 16.0,
            text_color: Color::WHITE,
            renderer,
        }
    }

    pub fn with_frame(mut self, x: f32, y: f32, width: f32, height: f32) -> Self {
        self.style.set_frame(x, y, width, height);
        self
    }

    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Component for Label {
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
            let paint = Paint::new().with_color(bg.with_opacity(self.style.opacity));
            canvas.draw_rect(&bounds, &paint);
        }

        let text_width = self.renderer.measure_text(&self.text, self.font_size);
        let text_height = self.renderer.measure_height(self.font_size);
        let x = bounds.x + (bounds.width - text_width) / 2.0;
        // draw_text 的 y 是基线位置
        let baseline = bounds.y + (bounds.height + text_height) / 2.0;

        let paint = Paint::new().with_color(self.text_color.with_opacity(self.style.opacity));
        self.renderer.draw_text(canvas, &self.text, x, baseline, self.font_size, &paint);
    }

    fn type_name(&self) -> &'static str {
        "Label"
    }
}
