//! 伸缩头部视觉效果 - 偏移量到缩放/模糊的映射

/// 头部背景的伸缩效果参数
///
/// 容器上报的纵向偏移量驱动两个视觉量：
/// - 上拉过度滚动（y < 0）时背景放大，永不小于原始尺寸
/// - 向下滚走（y > 0）时背景逐渐模糊，封顶于 `max_blur`
#[derive(Debug, Clone)]
pub struct StretchEffect {
    /// 模糊半径上限（像素）
    pub max_blur: f32,
    /// 模糊从 0 线性爬升到上限所需的滚动距离
    pub blur_distance: f32,
    /// 过度滚动该距离时背景放大一倍
    pub zoom_distance: f32,
}

impl StretchEffect {
    pub const DEFAULT_MAX_BLUR: f32 = 12.0;

    /// 以头部高度为基准距离创建效果参数
    pub fn new(header_height: f32) -> Self {
        let distance = header_height.max(1.0);
        Self {
            max_blur: Self::DEFAULT_MAX_BLUR,
            blur_distance: distance,
            zoom_distance: distance,
        }
    }

    pub fn with_max_blur(mut self, max_blur: f32) -> Self {
        self.max_blur = max_blur.max(0.0);
        self
    }

    pub fn with_blur_distance(mut self, distance: f32) -> Self {
        self.blur_distance = distance.max(1.0);
        self
    }

    pub fn with_zoom_distance(mut self, distance: f32) -> Self {
        self.zoom_distance = distance.max(1.0);
        self
    }

    /// 偏移量对应的缩放系数，下限 1.0
    pub fn zoom_for(&self, offset_y: f32) -> f32 {
        if offset_y < 0.0 {
            1.0 + (-offset_y) / self.zoom_distance
        } else {
            1.0
        }
    }

    /// 偏移量对应的模糊半径，范围 [0, max_blur]
    pub fn blur_for(&self, offset_y: f32) -> f32 {
        if offset_y > 0.0 {
            (offset_y / self.blur_distance).min(1.0) * self.max_blur
        } else {
            0.0
        }
    }
}
