//! 头部视图单元测试
//! 覆盖构造契约、偏移量更新与子视图状态

use crate::ui::{Component, HeaderView, View};
use crate::{Canvas, Color, ContentMode, Pixmap, Point, Size};
use std::sync::Arc;

/// 创建测试用的纯色背景图
fn test_background(width: u32, height: u32) -> Arc<Pixmap> {
    let data = vec![128u8; (width * height * 4) as usize];
    Arc::new(Pixmap::from_rgba(data, width, height).unwrap())
}

/// 创建 n 个色块页
fn test_pages(n: usize) -> Vec<Box<dyn Component>> {
    (0..n)
        .map(|i| {
            Box::new(View::new().with_background(Color::rgb(50 * i as u8, 100, 150)))
                as Box<dyn Component>
        })
        .collect()
}

/// 构造：尺寸 (320,200)、背景图、3 页 → 指示点 3 个，内容宽 960
#[test]
fn test_construction_with_three_pages() {
    let header = HeaderView::new(
        Size::new(320.0, 200.0),
        test_background(64, 40),
        test_pages(3),
    )
    .unwrap();

    assert_eq!(header.page_control().count(), 3);
    assert!(header.page_control().style().visible);
    assert_eq!(header.pages_view().page_count(), 3);
    assert_eq!(header.pages_view().content_width(), 960.0);
    assert_eq!(header.size(), Size::new(320.0, 200.0));
}

/// 构造：0 页或 1 页时不显示指示点
#[test]
fn test_no_page_control_for_single_page() {
    let header = HeaderView::new(
        Size::new(320.0, 200.0),
        test_background(8, 8),
        test_pages(0),
    )
    .unwrap();
    assert!(!header.page_control().style().visible);

    let header = HeaderView::new(
        Size::new(320.0, 200.0),
        test_background(8, 8),
        test_pages(1),
    )
    .unwrap();
    assert!(!header.page_control().style().visible);
    assert_eq!(header.page_control().count(), 1);
}

/// 构造：零面积尺寸被拒绝
#[test]
fn test_construction_rejects_empty_size() {
    let result = HeaderView::new(
        Size::new(0.0, 200.0),
        test_background(8, 8),
        test_pages(2),
    );
    assert!(result.is_err());

    let result = HeaderView::new(
        Size::new(320.0, 0.0),
        test_background(8, 8),
        Vec::new(),
    );
    assert!(result.is_err());
}

/// 上拉过度滚动：缩放增大，模糊保持 0
#[test]
fn test_overscroll_zooms_without_blur() {
    let mut header = HeaderView::new(
        Size::new(320.0, 200.0),
        test_background(8, 8),
        test_pages(2),
    )
    .unwrap();

    header.offset_did_update(Point::new(0.0, -50.0));

    assert!(header.background_view().zoom() > 1.0);
    assert_eq!(header.background_view().blur_radius(), 0.0);
    assert_eq!(header.last_offset(), Point::new(0.0, -50.0));
}

/// 向下滚走：缩放保持 1.0，模糊增大
#[test]
fn test_scroll_away_blurs_without_zoom() {
    let mut header = HeaderView::new(
        Size::new(320.0, 200.0),
        test_background(8, 8),
        test_pages(2),
    )
    .unwrap();

    header.offset_did_update(Point::new(0.0, 50.0));

    assert_eq!(header.background_view().zoom(), 1.0);
    assert!(header.background_view().blur_radius() > 0.0);
}

/// 偏移归零后回到静止状态，过程完全可逆
#[test]
fn test_returns_to_rest_state() {
    let mut header = HeaderView::new(
        Size::new(320.0, 200.0),
        test_background(8, 8),
        test_pages(2),
    )
    .unwrap();

    header.offset_did_update(Point::new(0.0, -120.0));
    header.offset_did_update(Point::new(0.0, 80.0));
    header.offset_did_update(Point::new(0.0, 0.0));

    assert_eq!(header.background_view().zoom(), 1.0);
    assert_eq!(header.background_view().blur_radius(), 0.0);
    assert_eq!(header.pages_view().style().y, 0.0);
}

/// 分页区垂直中心跟随可见区域中心移动 y/2
#[test]
fn test_pages_recentering() {
    let mut header = HeaderView::new(
        Size::new(320.0, 200.0),
        test_background(8, 8),
        test_pages(3),
    )
    .unwrap();

    header.offset_did_update(Point::new(0.0, -50.0));
    assert_eq!(header.pages_view().style().y, -25.0);

    header.offset_did_update(Point::new(0.0, 60.0));
    assert_eq!(header.pages_view().style().y, 30.0);
}

/// 偏移更新只使用 Y 分量
#[test]
fn test_offset_x_component_ignored() {
    let mut header = HeaderView::new(
        Size::new(320.0, 200.0),
        test_background(8, 8),
        test_pages(2),
    )
    .unwrap();

    header.offset_did_update(Point::new(9999.0, 0.0));

    assert_eq!(header.background_view().zoom(), 1.0);
    assert_eq!(header.background_view().blur_radius(), 0.0);
    assert_eq!(header.pages_view().style().y, 0.0);
}

/// 指示点的当前页跟随分页滚动位置
#[test]
fn test_page_control_follows_scroll() {
    let mut header = HeaderView::new(
        Size::new(320.0, 200.0),
        test_background(8, 8),
        test_pages(3),
    )
    .unwrap();

    header.pages_view_mut().scroll_to_page(2, false);
    header.update(1.0 / 60.0);

    assert_eq!(header.pages_view().current_page(), 2);
    assert_eq!(header.page_control().current(), 2);
}

/// 效果参数可调，调整后影响后续偏移更新
#[test]
fn test_effect_tuning() {
    let mut header = HeaderView::new(
        Size::new(320.0, 200.0),
        test_background(8, 8),
        test_pages(2),
    )
    .unwrap();

    assert_eq!(header.effect().max_blur, crate::StretchEffect::DEFAULT_MAX_BLUR);
    header.effect_mut().max_blur = 4.0;

    header.offset_did_update(Point::new(0.0, 1000.0));
    assert_eq!(header.background_view().blur_radius(), 4.0);
}

/// 借出的子视图可变引用可用于调整样式
#[test]
fn test_child_view_styling() {
    let mut header = HeaderView::new(
        Size::new(320.0, 200.0),
        test_background(8, 8),
        test_pages(3),
    )
    .unwrap();

    header.background_view_mut().set_mode(ContentMode::AspectFit);
    assert_eq!(header.background_view().mode(), ContentMode::AspectFit);

    header.page_control_mut().set_colors(Color::WHITE, Color::rgb(255, 0, 0));
    header.page_control_mut().set_dot_metrics(6.0, 4.0);
    header.page_control_mut().set_current(99);
    // 当前页钳制到最后一页
    assert_eq!(header.page_control().current(), 2);
}

/// 渲染不会 panic，且把背景图画进了画布
#[test]
fn test_render_draws_background() {
    let mut header = HeaderView::new(
        Size::new(320.0, 200.0),
        test_background(8, 8),
        Vec::new(),
    )
    .unwrap();
    header.offset_did_update(Point::new(0.0, -30.0));

    let mut canvas = Canvas::new(320, 200);
    canvas.clear(Color::WHITE);
    header.render(&mut canvas);

    // 背景图是 RGBA(128,128,128,128)，混合在白底上必然偏灰
    let center = canvas.get_pixel(160, 100);
    assert!(center.r < 255);
    assert_eq!(center.r, center.g);
    assert_eq!(center.g, center.b);
}
