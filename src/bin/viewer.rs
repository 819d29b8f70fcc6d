//! 头部视图演示窗口
//!
//! 鼠标滚轮/触控板模拟宿主容器的滚动偏移（顶部过度滚动带橡皮筋阻尼），
//! 在头部区域横向拖拽翻页，左右方向键切换页面，Esc 退出。

use header_render::ui::{Component, HeaderView, Label, View};
use header_render::{Canvas, Color, Paint, PaintStyle, Pixmap, Point, Rect, Size, TextRenderer};
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Instant;
use winit::application::ApplicationHandler;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowAttributes, WindowId};

/// 逻辑视口尺寸
const LOGICAL_WIDTH: u32 = 375;
const LOGICAL_HEIGHT: u32 = 667;
/// 头部高度
const HEADER_HEIGHT: f32 = 240.0;
/// 演示列表行高与行数
const ROW_HEIGHT: f32 = 56.0;
const ROW_COUNT: usize = 24;
/// 顶部过度滚动的最大原始累计量
const MAX_OVERSCROLL: f32 = 400.0;

struct ViewerApp {
    window: Option<Arc<Window>>,
    surface: Option<softbuffer::Surface<Arc<Window>, Arc<Window>>>,
    canvas: Canvas,
    header: HeaderView,
    /// 容器偏移：正值 = 向下滚走，负值 = 顶部过度滚动（已施加阻尼）
    offset_y: f32,
    /// 过度滚动的原始累计量（阻尼前）
    raw_overscroll: f32,
    mouse_pos: (f32, f32),
    dragging_pages: bool,
    scale_factor: f64,
    last_frame: Instant,
}

impl ViewerApp {
    fn new() -> Result<Self, String> {
        let background = match std::env::args().nth(1) {
            Some(path) => Pixmap::load(&path)?,
            None => Arc::new(synthesize_background(750, 480)),
        };

        // 有系统字体时用文本页，否则退化为色块页
        let pages: Vec<Box<dyn Component>> = match TextRenderer::load_system_font() {
            Ok(renderer) => {
                let renderer = Arc::new(renderer);
                println!("✅ System font loaded");
                ["Sunrise Valley", "Lakeside Dusk", "City Lights"]
                    .iter()
                    .map(|title| {
                        Box::new(
                            Label::new(title, renderer.clone())
                                .with_font_size(22.0)
                                .with_text_color(Color::WHITE),
                        ) as Box<dyn Component>
                    })
                    .collect()
            }
            Err(_) => {
                println!("⚠️ No system font, falling back to color pages");
                [0x2C3E50u32, 0x16A085, 0x8E44AD]
                    .iter()
                    .map(|hex| {
                        Box::new(
                            View::new().with_background(Color::from_hex(*hex).with_opacity(0.35)),
                        ) as Box<dyn Component>
                    })
                    .collect()
            }
        };

        let mut header = HeaderView::new(
            Size::new(LOGICAL_WIDTH as f32, HEADER_HEIGHT),
            background,
            pages,
        )?;
        // 深色背景图上用浅色指示点
        header
            .page_control_mut()
            .set_colors(Color::new(255, 255, 255, 120), Color::WHITE);

        Ok(Self {
            window: None,
            surface: None,
            canvas: Canvas::new(LOGICAL_WIDTH, LOGICAL_HEIGHT),
            header,
            offset_y: 0.0,
            raw_overscroll: 0.0,
            mouse_pos: (0.0, 0.0),
            dragging_pages: false,
            scale_factor: 1.0,
            last_frame: Instant::now(),
        })
    }

    fn max_scroll(&self) -> f32 {
        let content_height = HEADER_HEIGHT + ROW_COUNT as f32 * ROW_HEIGHT;
        (content_height - LOGICAL_HEIGHT as f32).max(0.0)
    }

    /// 滚轮/触控板输入，delta 为逻辑像素
    fn handle_scroll(&mut self, delta: f32) {
        if delta.abs() < 0.1 {
            return;
        }

        if self.offset_y <= 0.0 && (self.raw_overscroll > 0.0 || delta < 0.0) {
            // 顶部过度滚动：累计原始量并施加橡皮筋阻尼
            self.raw_overscroll = (self.raw_overscroll - delta).clamp(0.0, MAX_OVERSCROLL);
            if self.raw_overscroll > 0.0 {
                self.offset_y = -rubber_band(self.raw_overscroll, LOGICAL_HEIGHT as f32);
            } else {
                self.offset_y = 0.0;
            }
        } else {
            self.offset_y = (self.offset_y + delta).clamp(0.0, self.max_scroll());
        }

        self.header.offset_did_update(Point::new(0.0, self.offset_y));
    }

    fn render(&mut self) {
        self.canvas.clear(Color::from_hex(0xF5F5F5));

        // 列表内容从头部下缘开始，随偏移移动
        let content_top = HEADER_HEIGHT - self.offset_y;
        let row_paint = Paint::new().with_color(Color::WHITE).with_style(PaintStyle::Fill);
        let separator_paint = Paint::new().with_color(Color::from_hex(0xE5E5E5));
        let avatar_paint = Paint::new()
            .with_color(Color::from_hex(0xD0D0D0))
            .with_style(PaintStyle::Fill)
            .with_anti_alias(true);

        for i in 0..ROW_COUNT {
            let row_y = content_top + i as f32 * ROW_HEIGHT;
            if row_y + ROW_HEIGHT < 0.0 || row_y > LOGICAL_HEIGHT as f32 {
                continue;
            }
            self.canvas.draw_rect(
                &Rect::new(0.0, row_y, LOGICAL_WIDTH as f32, ROW_HEIGHT),
                &row_paint,
            );
            self.canvas.draw_circle(32.0, row_y + ROW_HEIGHT / 2.0, 16.0, &avatar_paint);
            self.canvas.draw_line(
                64.0,
                row_y + ROW_HEIGHT - 1.0,
                LOGICAL_WIDTH as f32,
                row_y + ROW_HEIGHT - 1.0,
                &separator_paint,
            );
        }

        // 头部随内容移动：过度滚动时下移（放大的背景向上盖住露出的空间），
        // 向下滚走时整体上移
        self.header.style_mut().y = -self.offset_y;
        self.header.render(&mut self.canvas);
    }

    fn present(&mut self) {
        let (window, surface) = match (&self.window, &mut self.surface) {
            (Some(w), Some(s)) => (w, s),
            _ => return,
        };

        let size = window.inner_size();
        let (Some(win_width), Some(win_height)) =
            (NonZeroU32::new(size.width), NonZeroU32::new(size.height))
        else {
            return;
        };
        if surface.resize(win_width, win_height).is_err() {
            return;
        }

        if let Ok(mut buffer) = surface.buffer_mut() {
            let sf = self.scale_factor as f32;
            let pixels = self.canvas.pixels();
            let cw = self.canvas.width();
            let ch = self.canvas.height();

            // 最近邻映射到物理像素，softbuffer 期望 0RGB
            for py in 0..size.height {
                let cy = ((py as f32 / sf) as u32).min(ch - 1);
                for px in 0..size.width {
                    let cx = ((px as f32 / sf) as u32).min(cw - 1);
                    let c = pixels[(cy * cw + cx) as usize];
                    buffer[(py * size.width + px) as usize] =
                        ((c.r as u32) << 16) | ((c.g as u32) << 8) | (c.b as u32);
                }
            }
            buffer.present().ok();
        }
    }

    fn request_redraw(&self) {
        if let Some(w) = &self.window {
            w.request_redraw();
        }
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window_attrs = WindowAttributes::default()
                .with_title("Expandable Header")
                .with_inner_size(winit::dpi::LogicalSize::new(LOGICAL_WIDTH, LOGICAL_HEIGHT))
                .with_resizable(false);

            let window = Arc::new(event_loop.create_window(window_attrs).unwrap());
            self.scale_factor = window.scale_factor();

            let context = softbuffer::Context::new(window.clone()).unwrap();
            let surface = softbuffer::Surface::new(&context, window.clone()).unwrap();

            self.window = Some(window);
            self.surface = Some(surface);

            self.render();
            self.present();

            println!("\n🎮 Ready! 滚轮滚动列表，头部区域横向拖拽翻页\n");
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.scale_factor = scale_factor;
                self.request_redraw();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed {
                    match event.physical_key {
                        PhysicalKey::Code(KeyCode::Escape) => event_loop.exit(),
                        PhysicalKey::Code(KeyCode::ArrowLeft) => {
                            let current = self.header.pages_view().current_page();
                            if current > 0 {
                                self.header.pages_view_mut().scroll_to_page(current - 1, true);
                            }
                            self.request_redraw();
                        }
                        PhysicalKey::Code(KeyCode::ArrowRight) => {
                            let current = self.header.pages_view().current_page();
                            self.header.pages_view_mut().scroll_to_page(current + 1, true);
                            self.request_redraw();
                        }
                        _ => {}
                    }
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                let x = position.x as f32 / self.scale_factor as f32;
                let y = position.y as f32 / self.scale_factor as f32;
                self.mouse_pos = (x, y);

                if self.dragging_pages {
                    self.header.pages_view_mut().update_drag(x, now_ms());
                    self.request_redraw();
                }
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let delta_y = match delta {
                    MouseScrollDelta::LineDelta(_, y) => -y * 20.0,
                    // 触控板：直接使用物理像素值，提高响应速度
                    MouseScrollDelta::PixelDelta(pos) => -pos.y as f32 / self.scale_factor as f32,
                };
                self.handle_scroll(delta_y);
                self.request_redraw();
            }

            WindowEvent::MouseInput { state, button: MouseButton::Left, .. } => match state {
                ElementState::Pressed => {
                    // 头部可见区域内才开始翻页拖拽
                    let header_area = Rect::new(
                        0.0,
                        0.0,
                        LOGICAL_WIDTH as f32,
                        HEADER_HEIGHT - self.offset_y,
                    );
                    if header_area.contains(&Point::new(self.mouse_pos.0, self.mouse_pos.1)) {
                        self.dragging_pages = true;
                        self.header.pages_view_mut().begin_drag(self.mouse_pos.0, now_ms());
                    }
                }
                ElementState::Released => {
                    if self.dragging_pages {
                        self.dragging_pages = false;
                        self.header.pages_view_mut().end_drag();
                        self.request_redraw();
                    }
                }
            },

            WindowEvent::RedrawRequested => {
                let now = Instant::now();
                let dt = now.duration_since(self.last_frame).as_secs_f32();
                self.last_frame = now;

                let animating = self.header.update(dt);
                self.render();
                self.present();

                if animating || self.dragging_pages {
                    self.request_redraw();
                }
            }

            _ => {}
        }
    }
}

fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

fn rubber_band(offset: f32, dimension: f32) -> f32 {
    let c = 0.55;
    let x = offset.abs() / dimension;
    (1.0 - (1.0 / (x * c + 1.0))) * dimension
}

/// 生成演示用背景图：渐变天空 + 太阳 + 山形
fn synthesize_background(width: u32, height: u32) -> Pixmap {
    let mut canvas = Canvas::new(width, height);

    // 天空渐变
    for y in 0..height {
        let t = y as f32 / height as f32;
        let r = (40.0 + 180.0 * t) as u8;
        let g = (90.0 + 110.0 * t) as u8;
        let b = (160.0 + 60.0 * t) as u8;
        let paint = Paint::new().with_color(Color::rgb(r, g, b)).with_style(PaintStyle::Fill);
        canvas.draw_rect(
            &Rect::new(0.0, y as f32, width as f32, 1.0),
            &paint,
        );
    }

    // 太阳
    let sun_paint = Paint::new()
        .with_color(Color::rgb(255, 225, 160))
        .with_style(PaintStyle::Fill)
        .with_anti_alias(true);
    canvas.draw_circle(width as f32 * 0.72, height as f32 * 0.28, width as f32 * 0.08, &sun_paint);

    // 山形（叠两层三角）
    let w = width as f32;
    let h = height as f32;
    let far = Paint::new().with_color(Color::rgb(60, 80, 110)).with_style(PaintStyle::Fill);
    let near = Paint::new().with_color(Color::rgb(40, 55, 80)).with_style(PaintStyle::Fill);
    draw_mountain(&mut canvas, w * 0.05, w * 0.65, h, h * 0.35, &far);
    draw_mountain(&mut canvas, w * 0.4, w * 1.05, h, h * 0.5, &near);

    Pixmap::from_rgba(canvas.to_rgba(), width, height)
        .expect("synthesized background dimensions are valid")
}

/// 用逐行矩形画一个等腰三角形山
fn draw_mountain(canvas: &mut Canvas, left: f32, right: f32, base_y: f32, peak_y: f32, paint: &Paint) {
    let peak_x = (left + right) / 2.0;
    let rows = (base_y - peak_y).max(1.0) as i32;
    for i in 0..rows {
        let t = i as f32 / rows as f32;
        let y = peak_y + (base_y - peak_y) * t;
        let half = (peak_x - left) * t;
        canvas.draw_rect(
            &Rect::new(peak_x - half, y, half * 2.0, 1.5),
            paint,
        );
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🚀 Header Render - Expandable Header Demo\n");
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);
    let mut app = ViewerApp::new()?;
    event_loop.run_app(&mut app)?;
    Ok(())
}
