//! FFI 接口 - C/C++ 绑定
//!
//! 供原生宿主嵌入头部视图：创建/销毁、上报滚动偏移、
//! 驱动动画、渲染到画布并读回像素。

use crate::ui::{Component, HeaderView, View};
use crate::{Canvas, Color, Pixmap, Point, Size};
use std::ffi::CStr;
use std::os::raw::c_char;
use std::sync::Arc;

/// 创建画布
#[no_mangle]
pub extern "C" fn hr_canvas_new(width: u32, height: u32) -> *mut Canvas {
    Box::into_raw(Box::new(Canvas::new(width, height)))
}

/// 销毁画布
#[no_mangle]
pub extern "C" fn hr_canvas_free(canvas: *mut Canvas) {
    if !canvas.is_null() {
        unsafe { drop(Box::from_raw(canvas)); }
    }
}

/// 清空画布
#[no_mangle]
pub extern "C" fn hr_canvas_clear(canvas: *mut Canvas, r: u8, g: u8, b: u8, a: u8) {
    if let Some(canvas) = unsafe { canvas.as_mut() } {
        canvas.clear(Color::new(r, g, b, a));
    }
}

/// 获取画布宽度
#[no_mangle]
pub extern "C" fn hr_canvas_width(canvas: *const Canvas) -> u32 {
    unsafe { canvas.as_ref().map(|c| c.width()).unwrap_or(0) }
}

/// 获取画布高度
#[no_mangle]
pub extern "C" fn hr_canvas_height(canvas: *const Canvas) -> u32 {
    unsafe { canvas.as_ref().map(|c| c.height()).unwrap_or(0) }
}

/// 获取像素数据（RGBA）
#[no_mangle]
pub extern "C" fn hr_canvas_get_pixels(canvas: *const Canvas, out: *mut u8, len: usize) -> usize {
    if canvas.is_null() || out.is_null() {
        return 0;
    }
    if let Some(canvas) = unsafe { canvas.as_ref() } {
        let data = canvas.to_rgba();
        let copy_len = data.len().min(len);
        unsafe {
            std::ptr::copy_nonoverlapping(data.as_ptr(), out, copy_len);
        }
        copy_len
    } else {
        0
    }
}

/// 保存为 PNG
#[no_mangle]
pub extern "C" fn hr_canvas_save_png(canvas: *const Canvas, path: *const c_char) -> bool {
    if let (Some(canvas), Some(path_cstr)) = (
        unsafe { canvas.as_ref() },
        unsafe { path.as_ref() }
    ) {
        let path_str = unsafe { CStr::from_ptr(path_cstr) };
        if let Ok(path) = path_str.to_str() {
            return canvas.save_png(path).is_ok();
        }
    }
    false
}

/// 创建头部视图
///
/// bg_data: 背景图 RGBA 数据，长度 bg_w * bg_h * 4
/// page_colors: 每页的 0xAARRGGBB 色值，可为 NULL（无分页）
///
/// 失败返回 NULL（背景数据无效或尺寸为空）。
#[no_mangle]
pub extern "C" fn hr_header_new(
    width: f32,
    height: f32,
    bg_data: *const u8,
    bg_w: u32,
    bg_h: u32,
    page_colors: *const u32,
    page_count: usize,
) -> *mut HeaderView {
    if bg_data.is_null() {
        return std::ptr::null_mut();
    }
    let len = (bg_w as usize) * (bg_h as usize) * 4;
    let data = unsafe { std::slice::from_raw_parts(bg_data, len) };

    let background = match Pixmap::from_rgba(data.to_vec(), bg_w, bg_h) {
        Ok(p) => Arc::new(p),
        Err(_) => return std::ptr::null_mut(),
    };

    let mut pages: Vec<Box<dyn Component>> = Vec::new();
    if !page_colors.is_null() && page_count > 0 {
        let colors = unsafe { std::slice::from_raw_parts(page_colors, page_count) };
        for argb in colors {
            let color = Color::new(
                ((argb >> 16) & 0xFF) as u8,
                ((argb >> 8) & 0xFF) as u8,
                (argb & 0xFF) as u8,
                ((argb >> 24) & 0xFF) as u8,
            );
            pages.push(Box::new(View::new().with_background(color)));
        }
    }

    match HeaderView::new(Size::new(width, height), background, pages) {
        Ok(header) => Box::into_raw(Box::new(header)),
        Err(_) => std::ptr::null_mut(),
    }
}

/// 销毁头部视图
#[no_mangle]
pub extern "C" fn hr_header_free(header: *mut HeaderView) {
    if !header.is_null() {
        unsafe { drop(Box::from_raw(header)); }
    }
}

/// 上报宿主容器的滚动偏移
#[no_mangle]
pub extern "C" fn hr_header_offset_did_update(header: *mut HeaderView, x: f32, y: f32) {
    if let Some(header) = unsafe { header.as_mut() } {
        header.offset_did_update(Point::new(x, y));
    }
}

/// 设置头部在画布中的位置
#[no_mangle]
pub extern "C" fn hr_header_set_position(header: *mut HeaderView, x: f32, y: f32) {
    if let Some(header) = unsafe { header.as_mut() } {
        header.style_mut().x = x;
        header.style_mut().y = y;
    }
}

/// 推进动画，返回是否需要重绘
#[no_mangle]
pub extern "C" fn hr_header_update(header: *mut HeaderView, dt: f32) -> bool {
    if let Some(header) = unsafe { header.as_mut() } {
        header.update(dt)
    } else {
        false
    }
}

/// 渲染头部视图到画布
#[no_mangle]
pub extern "C" fn hr_header_render(header: *const HeaderView, canvas: *mut Canvas) {
    if let (Some(header), Some(canvas)) = (
        unsafe { header.as_ref() },
        unsafe { canvas.as_mut() }
    ) {
        header.render(canvas);
    }
}

/// 页数
#[no_mangle]
pub extern "C" fn hr_header_page_count(header: *const HeaderView) -> usize {
    unsafe { header.as_ref().map(|h| h.pages_view().page_count()).unwrap_or(0) }
}

/// 当前页
#[no_mangle]
pub extern "C" fn hr_header_current_page(header: *const HeaderView) -> usize {
    unsafe { header.as_ref().map(|h| h.pages_view().current_page()).unwrap_or(0) }
}

/// 滚动到指定页
#[no_mangle]
pub extern "C" fn hr_header_scroll_to_page(header: *mut HeaderView, index: usize, animated: bool) {
    if let Some(header) = unsafe { header.as_mut() } {
        header.pages_view_mut().scroll_to_page(index, animated);
    }
}
