//! Canvas 画布模块 - 核心渲染接口

use crate::{Color, Paint, PaintStyle, Rect};

/// 图片内容缩放模式
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ContentMode {
    /// 拉伸填满，不保持纵横比
    ScaleToFill,
    /// 保持纵横比，完整显示，可能留白
    AspectFit,
    /// 保持纵横比，填满区域，可能裁剪
    AspectFill,
}

/// 画布状态
#[derive(Clone)]
struct CanvasState {
    clip_rect: Option<Rect>,
    translation: (f32, f32),
}

/// 画布 - 主要渲染接口
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
    clip_rect: Option<Rect>,
    translation: (f32, f32),
    state_stack: Vec<CanvasState>,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::TRANSPARENT; (width * height) as usize],
            clip_rect: None,
            translation: (0.0, 0.0),
            state_stack: Vec::new(),
        }
    }

    pub fn width(&self) -> u32 { self.width }
    pub fn height(&self) -> u32 { self.height }

    /// 获取像素数据引用
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// 保存当前状态（裁剪区域和变换）
    pub fn save(&mut self) {
        self.state_stack.push(CanvasState {
            clip_rect: self.clip_rect,
            translation: self.translation,
        });
    }

    /// 恢复上一次保存的状态
    pub fn restore(&mut self) {
        if let Some(state) = self.state_stack.pop() {
            self.clip_rect = state.clip_rect;
            self.translation = state.translation;
        }
    }

    /// 平移坐标系
    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.translation.0 += dx;
        self.translation.1 += dy;
    }

    /// 清空画布
    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// 设置裁剪区域（当前坐标系，与已有裁剪区域求交）
    pub fn clip_rect(&mut self, rect: Rect) {
        let rect = Rect::new(
            rect.x + self.translation.0,
            rect.y + self.translation.1,
            rect.width,
            rect.height,
        );
        if let Some(current) = self.clip_rect {
            self.clip_rect = Some(
                current
                    .intersection(&rect)
                    .unwrap_or(Rect::new(0.0, 0.0, 0.0, 0.0)),
            );
        } else {
            self.clip_rect = Some(rect);
        }
    }

    /// 重置裁剪区域
    pub fn reset_clip(&mut self) {
        self.clip_rect = None;
    }

    /// 获取像素
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Color {
        if x < self.width && y < self.height {
            self.pixels[(y * self.width + x) as usize]
        } else {
            Color::TRANSPARENT
        }
    }

    /// 设置像素（带 alpha 混合）
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }

        // 检查裁剪区域
        if let Some(clip) = &self.clip_rect {
            if x < clip.x as i32 || x >= clip.right() as i32 ||
               y < clip.y as i32 || y >= clip.bottom() as i32 {
                return;
            }
        }

        let idx = (y as u32 * self.width + x as u32) as usize;
        if color.a == 255 {
            self.pixels[idx] = color;
        } else if color.a > 0 {
            self.pixels[idx] = color.blend(&self.pixels[idx]);
        }
    }

    /// 设置像素（带抗锯齿 coverage）
    fn set_pixel_aa(&mut self, x: i32, y: i32, color: Color, coverage: f32) {
        if coverage <= 0.0 { return; }
        let a = (color.a as f32 * coverage.min(1.0)) as u8;
        self.set_pixel(x, y, Color::new(color.r, color.g, color.b, a));
    }

    /// 绘制矩形
    pub fn draw_rect(&mut self, rect: &Rect, paint: &Paint) {
        match paint.style {
            PaintStyle::Fill => self.fill_rect(rect, &paint.color),
            PaintStyle::Stroke => self.stroke_rect(rect, paint),
            PaintStyle::FillAndStroke => {
                self.fill_rect(rect, &paint.color);
                self.stroke_rect(rect, paint);
            }
        }
    }

    fn fill_rect(&mut self, rect: &Rect, color: &Color) {
        let tx = self.translation.0;
        let ty = self.translation.1;

        let x0 = (rect.x + tx).max(0.0) as i32;
        let y0 = (rect.y + ty).max(0.0) as i32;
        let x1 = (rect.right() + tx).min(self.width as f32) as i32;
        let y1 = (rect.bottom() + ty).min(self.height as f32) as i32;

        for y in y0..y1 {
            for x in x0..x1 {
                self.set_pixel(x, y, *color);
            }
        }
    }

    fn stroke_rect(&mut self, rect: &Rect, paint: &Paint) {
        let w = paint.stroke_width;
        // 上边
        self.fill_rect(&Rect::new(rect.x, rect.y, rect.width, w), &paint.color);
        // 下边
        self.fill_rect(&Rect::new(rect.x, rect.bottom() - w, rect.width, w), &paint.color);
        // 左边
        self.fill_rect(&Rect::new(rect.x, rect.y, w, rect.height), &paint.color);
        // 右边
        self.fill_rect(&Rect::new(rect.right() - w, rect.y, w, rect.height), &paint.color);
    }

    /// 绘制圆形
    pub fn draw_circle(&mut self, cx: f32, cy: f32, radius: f32, paint: &Paint) {
        match paint.style {
            PaintStyle::Fill => self.fill_circle(cx, cy, radius, paint),
            PaintStyle::Stroke => self.stroke_circle(cx, cy, radius, paint),
            PaintStyle::FillAndStroke => {
                self.fill_circle(cx, cy, radius, paint);
                self.stroke_circle(cx, cy, radius, paint);
            }
        }
    }

    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, paint: &Paint) {
        let cx = cx + self.translation.0;
        let cy = cy + self.translation.1;

        let r2 = radius * radius;
        let x0 = (cx - radius - 1.0).max(0.0) as i32;
        let y0 = (cy - radius - 1.0).max(0.0) as i32;
        let x1 = (cx + radius + 1.0).min(self.width as f32) as i32;
        let y1 = (cy + radius + 1.0).min(self.height as f32) as i32;

        for y in y0..y1 {
            for x in x0..x1 {
                let dx = x as f32 + 0.5 - cx;
                let dy = y as f32 + 0.5 - cy;
                let d2 = dx * dx + dy * dy;

                if paint.anti_alias {
                    let d = d2.sqrt();
                    if d <= radius + 0.5 {
                        let coverage = (radius + 0.5 - d).min(1.0);
                        self.set_pixel_aa(x, y, paint.color, coverage);
                    }
                } else if d2 <= r2 {
                    self.set_pixel(x, y, paint.color);
                }
            }
        }
    }

    fn stroke_circle(&mut self, cx: f32, cy: f32, radius: f32, paint: &Paint) {
        let cx = cx + self.translation.0;
        let cy = cy + self.translation.1;

        let inner = radius - paint.stroke_width / 2.0;
        let outer = radius + paint.stroke_width / 2.0;

        let x0 = (cx - outer - 1.0).max(0.0) as i32;
        let y0 = (cy - outer - 1.0).max(0.0) as i32;
        let x1 = (cx + outer + 1.0).min(self.width as f32) as i32;
        let y1 = (cy + outer + 1.0).min(self.height as f32) as i32;

        for y in y0..y1 {
            for x in x0..x1 {
                let dx = x as f32 + 0.5 - cx;
                let dy = y as f32 + 0.5 - cy;
                let d = (dx * dx + dy * dy).sqrt();

                if d >= inner - 0.5 && d <= outer + 0.5 {
                    let coverage = if paint.anti_alias {
                        (outer + 0.5 - d).min(d - inner + 0.5).min(1.0)
                    } else {
                        1.0
                    };
                    self.set_pixel_aa(x, y, paint.color, coverage);
                }
            }
        }
    }

    /// 绘制线段 (Bresenham)
    pub fn draw_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, paint: &Paint) {
        let mut x0 = (x0 + self.translation.0) as i32;
        let mut y0 = (y0 + self.translation.1) as i32;
        let x1 = (x1 + self.translation.0) as i32;
        let y1 = (y1 + self.translation.1) as i32;

        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.set_pixel(x0, y0, paint.color);
            if x0 == x1 && y0 == y1 { break; }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    /// 绘制图片数据（RGBA 格式，双线性插值采样）
    /// img_data: RGBA 像素数据
    /// img_w, img_h: 图片原始尺寸
    /// dest: 目标绘制区域
    /// mode: 内容缩放模式
    pub fn draw_image(
        &mut self,
        img_data: &[u8],
        img_w: u32,
        img_h: u32,
        dest: &Rect,
        mode: ContentMode,
    ) {
        if img_w == 0 || img_h == 0 || img_data.len() < (img_w * img_h * 4) as usize {
            return;
        }

        let x = dest.x + self.translation.0;
        let y = dest.y + self.translation.1;
        let w = dest.width;
        let h = dest.height;

        // 计算缩放和偏移（目标区域内的内容定位）
        let (scale_x, scale_y, offset_x, offset_y) = match mode {
            ContentMode::AspectFit => {
                let scale = (w / img_w as f32).min(h / img_h as f32);
                let ox = (w - img_w as f32 * scale) / 2.0;
                let oy = (h - img_h as f32 * scale) / 2.0;
                (scale, scale, ox, oy)
            }
            ContentMode::AspectFill => {
                let scale = (w / img_w as f32).max(h / img_h as f32);
                let ox = (w - img_w as f32 * scale) / 2.0;
                let oy = (h - img_h as f32 * scale) / 2.0;
                (scale, scale, ox, oy)
            }
            ContentMode::ScaleToFill => (w / img_w as f32, h / img_h as f32, 0.0, 0.0),
        };

        let dest_x0 = x.max(0.0) as i32;
        let dest_y0 = y.max(0.0) as i32;
        let dest_x1 = (x + w).min(self.width as f32) as i32;
        let dest_y1 = (y + h).min(self.height as f32) as i32;

        let sample = |sx: u32, sy: u32| -> (f32, f32, f32, f32) {
            let sx = sx.min(img_w - 1);
            let sy = sy.min(img_h - 1);
            let idx = ((sy * img_w + sx) * 4) as usize;
            (
                img_data[idx] as f32,
                img_data[idx + 1] as f32,
                img_data[idx + 2] as f32,
                img_data[idx + 3] as f32,
            )
        };
        let lerp = |a: f32, b: f32, t: f32| a + (b - a) * t;

        for dest_y in dest_y0..dest_y1 {
            for dest_x in dest_x0..dest_x1 {
                // 目标像素映射回源图片坐标
                let local_x = (dest_x as f32 - x - offset_x) / scale_x;
                let local_y = (dest_y as f32 - y - offset_y) / scale_y;

                if local_x < 0.0 || local_y < 0.0 ||
                   local_x >= img_w as f32 || local_y >= img_h as f32 {
                    continue;
                }

                // 双线性插值
                let src_x = local_x.floor() as u32;
                let src_y = local_y.floor() as u32;
                let fx = local_x - src_x as f32;
                let fy = local_y - src_y as f32;

                let c00 = sample(src_x, src_y);
                let c10 = sample(src_x + 1, src_y);
                let c01 = sample(src_x, src_y + 1);
                let c11 = sample(src_x + 1, src_y + 1);

                let r = lerp(lerp(c00.0, c10.0, fx), lerp(c01.0, c11.0, fx), fy) as u8;
                let g = lerp(lerp(c00.1, c10.1, fx), lerp(c01.1, c11.1, fx), fy) as u8;
                let b = lerp(lerp(c00.2, c10.2, fx), lerp(c01.2, c11.2, fx), fy) as u8;
                let a = lerp(lerp(c00.3, c10.3, fx), lerp(c01.3, c11.3, fx), fy) as u8;

                self.set_pixel(dest_x, dest_y, Color::new(r, g, b, a));
            }
        }
    }

    /// 对矩形区域做两遍盒式模糊
    /// 区域受当前变换和裁剪限制，不会写出区域外的像素
    pub fn blur_rect(&mut self, rect: &Rect, radius: f32) {
        let r = radius.round() as i32;
        if r < 1 {
            return;
        }

        // 应用变换并限制在画布和裁剪区域内
        let device = Rect::new(
            rect.x + self.translation.0,
            rect.y + self.translation.1,
            rect.width,
            rect.height,
        );
        let bounds = Rect::new(0.0, 0.0, self.width as f32, self.height as f32);
        let mut region = match device.intersection(&bounds) {
            Some(r) => r,
            None => return,
        };
        if let Some(clip) = self.clip_rect {
            region = match region.intersection(&clip) {
                Some(r) => r,
                None => return,
            };
        }

        let rx0 = region.x as i32;
        let ry0 = region.y as i32;
        let rw = region.width as i32;
        let rh = region.height as i32;
        if rw <= 0 || rh <= 0 {
            return;
        }

        // 采样不越过区域边界，模糊是自包含的
        let read = |buf: &[Color], px: i32, py: i32| -> Color {
            let px = px.clamp(0, rw - 1);
            let py = py.clamp(0, rh - 1);
            buf[(py * rw + px) as usize]
        };

        let mut src = vec![Color::TRANSPARENT; (rw * rh) as usize];
        for yy in 0..rh {
            for xx in 0..rw {
                let idx = ((ry0 + yy) as u32 * self.width + (rx0 + xx) as u32) as usize;
                src[(yy * rw + xx) as usize] = self.pixels[idx];
            }
        }

        // 水平方向
        let mut tmp = vec![Color::TRANSPARENT; (rw * rh) as usize];
        let window = (2 * r + 1) as u32;
        for yy in 0..rh {
            for xx in 0..rw {
                let (mut sr, mut sg, mut sb, mut sa) = (0u32, 0u32, 0u32, 0u32);
                for k in -r..=r {
                    let c = read(&src, xx + k, yy);
                    sr += c.r as u32;
                    sg += c.g as u32;
                    sb += c.b as u32;
                    sa += c.a as u32;
                }
                tmp[(yy * rw + xx) as usize] = Color::new(
                    (sr / window) as u8,
                    (sg / window) as u8,
                    (sb / window) as u8,
                    (sa / window) as u8,
                );
            }
        }

        // 垂直方向，结果写回画布
        for yy in 0..rh {
            for xx in 0..rw {
                let (mut sr, mut sg, mut sb, mut sa) = (0u32, 0u32, 0u32, 0u32);
                for k in -r..=r {
                    let c = read(&tmp, xx, yy + k);
                    sr += c.r as u32;
                    sg += c.g as u32;
                    sb += c.b as u32;
                    sa += c.a as u32;
                }
                let idx = ((ry0 + yy) as u32 * self.width + (rx0 + xx) as u32) as usize;
                self.pixels[idx] = Color::new(
                    (sr / window) as u8,
                    (sg / window) as u8,
                    (sb / window) as u8,
                    (sa / window) as u8,
                );
            }
        }
    }

    /// 导出为 RGBA 字节数组
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity((self.width * self.height * 4) as usize);
        for pixel in &self.pixels {
            data.push(pixel.r);
            data.push(pixel.g);
            data.push(pixel.b);
            data.push(pixel.a);
        }
        data
    }

    /// 保存为 PNG
    pub fn save_png(&self, path: &str) -> Result<(), String> {
        use image::{ImageBuffer, Rgba};

        let img: ImageBuffer<Rgba<u8>, Vec<u8>> = ImageBuffer::from_raw(
            self.width,
            self.height,
            self.to_rgba()
        ).ok_or("Failed to create image buffer")?;

        img.save(path).map_err(|e| e.to_string())
    }
}
