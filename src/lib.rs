//! Header Render - 可伸缩头部视图渲染引擎
//! 背景图随宿主容器的滚动偏移缩放/模糊，支持横向分页内容与指示点

mod canvas;
mod color;
mod effects;
mod geometry;
mod paint;
mod pixmap;
pub mod text;

pub use canvas::{Canvas, ContentMode};
pub use color::Color;
pub use effects::StretchEffect;
pub use geometry::{Point, Rect, Size};
pub use paint::{Paint, PaintStyle};
pub use pixmap::Pixmap;
pub use text::TextRenderer;

// UI 组件系统
pub mod ui;

// FFI 导出
mod ffi;
pub use ffi::*;

// 单元测试
#[cfg(test)]
mod tests;
