//! 图片数据单元测试
//! 覆盖 RGBA 构造校验、解码与全局缓存

use crate::Pixmap;
use std::sync::Arc;

/// RGBA 构造：尺寸与数据长度必须匹配
#[test]
fn test_from_rgba_validation() {
    let ok = Pixmap::from_rgba(vec![0u8; 4 * 2 * 3], 2, 3);
    assert!(ok.is_ok());
    let pixmap = ok.unwrap();
    assert_eq!(pixmap.width(), 2);
    assert_eq!(pixmap.height(), 3);
    assert!(!pixmap.is_empty());

    // 零尺寸被拒绝
    assert!(Pixmap::from_rgba(Vec::new(), 0, 0).is_err());
    // 长度不匹配被拒绝
    assert!(Pixmap::from_rgba(vec![0u8; 10], 2, 3).is_err());
}

/// 解码无效字节返回 Err 而不是 panic
#[test]
fn test_decode_rejects_garbage() {
    assert!(Pixmap::decode(&[0u8, 1, 2, 3]).is_err());
    assert!(Pixmap::decode(&[]).is_err());
}

/// PNG 编码再解码保持尺寸
#[test]
fn test_decode_png_roundtrip() {
    use crate::{Canvas, Color};

    let tmp = std::env::temp_dir().join("header_render_pixmap_test.png");
    let path = tmp.to_string_lossy().to_string();

    let mut canvas = Canvas::new(6, 4);
    canvas.clear(Color::rgb(200, 100, 50));
    canvas.save_png(&path).unwrap();

    let pixmap = Pixmap::from_file(&path).unwrap();
    assert_eq!(pixmap.width(), 6);
    assert_eq!(pixmap.height(), 4);
    assert_eq!(&pixmap.data()[0..4], &[200, 100, 50, 255]);

    std::fs::remove_file(&path).ok();
}

/// 相同 src 的重复加载命中缓存，返回同一份数据
#[test]
fn test_load_hits_cache() {
    use crate::{Canvas, Color};

    let tmp = std::env::temp_dir().join("header_render_cache_test.png");
    let path = tmp.to_string_lossy().to_string();

    let mut canvas = Canvas::new(3, 3);
    canvas.clear(Color::WHITE);
    canvas.save_png(&path).unwrap();

    let first = Pixmap::load(&path).unwrap();
    // 删除文件后仍可命中缓存
    std::fs::remove_file(&path).ok();
    let second = Pixmap::load(&path).unwrap();

    assert!(Arc::ptr_eq(&first, &second));
}

/// 不存在的文件返回带路径的错误
#[test]
fn test_missing_file_error() {
    let err = Pixmap::from_file("/nonexistent/header_render_missing.png");
    assert!(err.is_err());
    assert!(err.unwrap_err().contains("header_render_missing.png"));
}
