//! 画布单元测试
//! 覆盖像素读写、裁剪、变换、图片绘制与区域模糊

use crate::{Canvas, Color, ContentMode, Paint, PaintStyle, Rect};

/// 新画布全透明，clear 后为指定颜色
#[test]
fn test_clear_and_get_pixel() {
    let mut canvas = Canvas::new(8, 8);
    assert_eq!(canvas.get_pixel(3, 3), Color::TRANSPARENT);

    canvas.clear(Color::rgb(10, 20, 30));
    assert_eq!(canvas.get_pixel(0, 0), Color::rgb(10, 20, 30));
    assert_eq!(canvas.get_pixel(7, 7), Color::rgb(10, 20, 30));
    // 越界读取返回透明
    assert_eq!(canvas.get_pixel(8, 0), Color::TRANSPARENT);
}

/// 不透明像素直接覆盖，半透明像素按 alpha 混合
#[test]
fn test_set_pixel_blending() {
    let mut canvas = Canvas::new(4, 4);
    canvas.clear(Color::WHITE);

    canvas.set_pixel(1, 1, Color::rgb(255, 0, 0));
    assert_eq!(canvas.get_pixel(1, 1), Color::rgb(255, 0, 0));

    // alpha=128 的黑色混在白底上是中灰
    canvas.set_pixel(2, 2, Color::new(0, 0, 0, 128));
    let blended = canvas.get_pixel(2, 2);
    assert!(blended.r > 120 && blended.r < 135);
    assert_eq!(blended.a, 255);

    // 越界写入被忽略
    canvas.set_pixel(-1, 0, Color::BLACK);
    canvas.set_pixel(0, 100, Color::BLACK);
}

/// 裁剪区域外的写入被丢弃，restore 后恢复
#[test]
fn test_clip_rect() {
    let mut canvas = Canvas::new(8, 8);
    canvas.clear(Color::WHITE);

    canvas.save();
    canvas.clip_rect(Rect::new(2.0, 2.0, 3.0, 3.0));
    canvas.set_pixel(0, 0, Color::BLACK);
    canvas.set_pixel(3, 3, Color::BLACK);
    canvas.restore();

    assert_eq!(canvas.get_pixel(0, 0), Color::WHITE);
    assert_eq!(canvas.get_pixel(3, 3), Color::BLACK);

    // restore 后不再裁剪
    canvas.set_pixel(0, 0, Color::BLACK);
    assert_eq!(canvas.get_pixel(0, 0), Color::BLACK);

    // reset_clip 直接清除裁剪
    canvas.clip_rect(Rect::new(0.0, 0.0, 1.0, 1.0));
    canvas.reset_clip();
    canvas.set_pixel(5, 5, Color::BLACK);
    assert_eq!(canvas.get_pixel(5, 5), Color::BLACK);
}

/// 平移影响绘制位置，save/restore 成对还原
#[test]
fn test_translate() {
    let mut canvas = Canvas::new(8, 8);
    canvas.clear(Color::WHITE);

    canvas.save();
    canvas.translate(2.0, 2.0);
    let paint = Paint::new().with_color(Color::BLACK).with_style(PaintStyle::Fill);
    canvas.draw_rect(&Rect::new(0.0, 0.0, 1.0, 1.0), &paint);
    canvas.restore();

    assert_eq!(canvas.get_pixel(2, 2), Color::BLACK);
    assert_eq!(canvas.get_pixel(0, 0), Color::WHITE);
}

/// 填充矩形覆盖且仅覆盖目标区域
#[test]
fn test_fill_rect_bounds() {
    let mut canvas = Canvas::new(8, 8);
    canvas.clear(Color::WHITE);

    let paint = Paint::new().with_color(Color::BLACK).with_style(PaintStyle::Fill);
    canvas.draw_rect(&Rect::new(2.0, 2.0, 3.0, 2.0), &paint);

    assert_eq!(canvas.get_pixel(2, 2), Color::BLACK);
    assert_eq!(canvas.get_pixel(4, 3), Color::BLACK);
    assert_eq!(canvas.get_pixel(1, 2), Color::WHITE);
    assert_eq!(canvas.get_pixel(2, 4), Color::WHITE);
}

/// 描边矩形只画边框，内部保持原样
#[test]
fn test_stroke_rect() {
    let mut canvas = Canvas::new(10, 10);
    canvas.clear(Color::WHITE);

    let paint = Paint::new()
        .with_color(Color::BLACK)
        .with_style(PaintStyle::Stroke)
        .with_stroke_width(1.0);
    canvas.draw_rect(&Rect::new(1.0, 1.0, 8.0, 8.0), &paint);

    assert_eq!(canvas.get_pixel(1, 1), Color::BLACK);
    assert_eq!(canvas.get_pixel(5, 1), Color::BLACK);
    assert_eq!(canvas.get_pixel(5, 5), Color::WHITE);
}

/// 实心圆覆盖圆心，不碰外接矩形的角
#[test]
fn test_fill_circle() {
    let mut canvas = Canvas::new(16, 16);
    canvas.clear(Color::WHITE);

    let paint = Paint::new()
        .with_color(Color::BLACK)
        .with_style(PaintStyle::Fill)
        .with_anti_alias(false);
    canvas.draw_circle(8.0, 8.0, 5.0, &paint);

    assert_eq!(canvas.get_pixel(8, 8), Color::BLACK);
    assert_eq!(canvas.get_pixel(0, 0), Color::WHITE);
    assert_eq!(canvas.get_pixel(3, 3), Color::WHITE);
}

/// 线段画在两端点之间
#[test]
fn test_draw_line() {
    let mut canvas = Canvas::new(8, 8);
    canvas.clear(Color::WHITE);

    let paint = Paint::new().with_color(Color::BLACK);
    canvas.draw_line(1.0, 4.0, 6.0, 4.0, &paint);

    assert_eq!(canvas.get_pixel(1, 4), Color::BLACK);
    assert_eq!(canvas.get_pixel(6, 4), Color::BLACK);
    assert_eq!(canvas.get_pixel(4, 2), Color::WHITE);
}

/// 1x1 图片以 ScaleToFill 铺满目标区域
#[test]
fn test_draw_image_scale_to_fill() {
    let mut canvas = Canvas::new(8, 8);
    canvas.clear(Color::WHITE);

    let red = [255u8, 0, 0, 255];
    canvas.draw_image(&red, 1, 1, &Rect::new(2.0, 2.0, 4.0, 4.0), ContentMode::ScaleToFill);

    assert_eq!(canvas.get_pixel(2, 2), Color::rgb(255, 0, 0));
    assert_eq!(canvas.get_pixel(5, 5), Color::rgb(255, 0, 0));
    assert_eq!(canvas.get_pixel(1, 1), Color::WHITE);
    assert_eq!(canvas.get_pixel(6, 6), Color::WHITE);
}

/// AspectFit 的留白区域不被绘制
#[test]
fn test_draw_image_aspect_fit_letterbox() {
    let mut canvas = Canvas::new(8, 8);
    canvas.clear(Color::WHITE);

    // 2x1 的图片放进 4x4 区域：上下各留 1 像素空白
    let img = [0u8, 0, 255, 255, 0, 0, 255, 255];
    canvas.draw_image(&img, 2, 1, &Rect::new(0.0, 0.0, 4.0, 4.0), ContentMode::AspectFit);

    assert_eq!(canvas.get_pixel(1, 0), Color::WHITE);
    assert_eq!(canvas.get_pixel(1, 2), Color::rgb(0, 0, 255));
    assert_eq!(canvas.get_pixel(1, 3), Color::WHITE);
}

/// 无效图片数据被忽略
#[test]
fn test_draw_image_rejects_bad_data() {
    let mut canvas = Canvas::new(4, 4);
    canvas.clear(Color::WHITE);

    // 数据长度不足
    canvas.draw_image(&[1, 2, 3], 2, 2, &Rect::new(0.0, 0.0, 4.0, 4.0), ContentMode::ScaleToFill);
    assert_eq!(canvas.get_pixel(0, 0), Color::WHITE);
}

/// 均匀色块模糊后保持不变
#[test]
fn test_blur_preserves_uniform_region() {
    let mut canvas = Canvas::new(16, 16);
    canvas.clear(Color::rgb(100, 150, 200));

    canvas.blur_rect(&Rect::new(2.0, 2.0, 12.0, 12.0), 3.0);

    assert_eq!(canvas.get_pixel(8, 8), Color::rgb(100, 150, 200));
    assert_eq!(canvas.get_pixel(2, 2), Color::rgb(100, 150, 200));
}

/// 模糊不会写出目标区域，且确实混合了区域内的颜色
#[test]
fn test_blur_stays_inside_rect() {
    let mut canvas = Canvas::new(16, 16);
    canvas.clear(Color::WHITE);
    let paint = Paint::new().with_color(Color::BLACK).with_style(PaintStyle::Fill);
    canvas.draw_rect(&Rect::new(6.0, 6.0, 4.0, 4.0), &paint);

    canvas.blur_rect(&Rect::new(4.0, 4.0, 8.0, 8.0), 2.0);

    // 区域外原样保留
    assert_eq!(canvas.get_pixel(0, 0), Color::WHITE);
    assert_eq!(canvas.get_pixel(15, 15), Color::WHITE);
    // 黑白边界被平均成灰
    let edge = canvas.get_pixel(6, 8);
    assert!(edge.r > 0 && edge.r < 255);

    // 半径过小或区域不相交时不做任何事
    canvas.blur_rect(&Rect::new(0.0, 0.0, 4.0, 4.0), 0.2);
    canvas.blur_rect(&Rect::new(100.0, 100.0, 4.0, 4.0), 3.0);
    assert_eq!(canvas.get_pixel(0, 0), Color::WHITE);
}

/// to_rgba 导出长度与内容正确
#[test]
fn test_to_rgba_roundtrip() {
    let mut canvas = Canvas::new(2, 2);
    canvas.clear(Color::new(1, 2, 3, 4));

    let data = canvas.to_rgba();
    assert_eq!(data.len(), 16);
    assert_eq!(&data[0..4], &[1, 2, 3, 4]);
}
