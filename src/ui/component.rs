//! 组件基础定义

use crate::{Canvas, Color, Rect};
use std::sync::atomic::{AtomicU64, Ordering};

static COMPONENT_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// 组件 ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComponentId(pub u64);

impl ComponentId {
    pub fn new() -> Self {
        Self(COMPONENT_ID_COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl Default for ComponentId {
    fn default() -> Self {
        Self::new()
    }
}

/// 组件样式 - 基于 frame 的布局
#[derive(Debug, Clone)]
pub struct Style {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub background_color: Option<Color>,
    pub opacity: f32,
    pub visible: bool,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
            background_color: None,
            opacity: 1.0,
            visible: true,
        }
    }
}

impl Style {
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn set_frame(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.x = x;
        self.y = y;
        self.width = width;
        self.height = height;
    }
}

/// 组件 trait
///
/// 渲染坐标相对于父组件；父组件渲染子组件前负责
/// 平移画布坐标系（及需要时设置裁剪区域）。
pub trait Component {
    fn id(&self) -> ComponentId;
    fn style(&self) -> &Style;
    fn style_mut(&mut self) -> &mut Style;

    /// 渲染组件
    fn render(&self, canvas: &mut Canvas);

    /// 组件类型名
    fn type_name(&self) -> &'static str {
        "Component"
    }
}
