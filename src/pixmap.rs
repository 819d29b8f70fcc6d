//! 图片数据模块 - 解码后的 RGBA 像素图与全局缓存
//!
//! src 支持网络 URL（http/https）和本地路径，
//! 解码结果进入进程级缓存，重复加载不会再次解码。

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::io::Read;
use std::sync::{Arc, Mutex};

/// 解码后的 RGBA 图片
#[derive(Debug, Clone)]
pub struct Pixmap {
    data: Vec<u8>,
    width: u32,
    height: u32,
}

/// 全局图片缓存
static PIXMAP_CACHE: Lazy<Mutex<HashMap<String, Arc<Pixmap>>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

impl Pixmap {
    /// 从 RGBA 数据创建
    pub fn from_rgba(data: Vec<u8>, width: u32, height: u32) -> Result<Self, String> {
        if width == 0 || height == 0 {
            return Err("pixmap dimensions must be non-zero".to_string());
        }
        if data.len() != (width * height * 4) as usize {
            return Err(format!(
                "pixmap data length {} does not match {}x{} RGBA",
                data.len(), width, height
            ));
        }
        Ok(Self { data, width, height })
    }

    /// 解码图片字节数据（PNG/JPEG 等）
    pub fn decode(bytes: &[u8]) -> Result<Self, String> {
        use image::GenericImageView;

        let img = image::load_from_memory(bytes).map_err(|e| e.to_string())?;
        let (width, height) = img.dimensions();
        let rgba = img.to_rgba8();
        Self::from_rgba(rgba.into_raw(), width, height)
    }

    /// 从本地文件加载
    pub fn from_file(path: &str) -> Result<Self, String> {
        let bytes = std::fs::read(path).map_err(|e| format!("{}: {}", path, e))?;
        Self::decode(&bytes)
    }

    /// 从网络 URL 加载
    pub fn from_url(url: &str) -> Result<Self, String> {
        let response = ureq::get(url)
            .timeout(std::time::Duration::from_secs(10))
            .call()
            .map_err(|e| e.to_string())?;

        let mut bytes = Vec::new();
        response
            .into_reader()
            .take(10 * 1024 * 1024)
            .read_to_end(&mut bytes)
            .map_err(|e| e.to_string())?;

        Self::decode(&bytes)
    }

    /// 按 src 加载（网络或本地），结果进入全局缓存
    pub fn load(src: &str) -> Result<Arc<Pixmap>, String> {
        if let Ok(cache) = PIXMAP_CACHE.lock() {
            if let Some(cached) = cache.get(src) {
                return Ok(cached.clone());
            }
        }

        let pixmap = if src.starts_with("http://") || src.starts_with("https://") {
            Self::from_url(src)?
        } else {
            Self::from_file(src)?
        };

        let pixmap = Arc::new(pixmap);
        if let Ok(mut cache) = PIXMAP_CACHE.lock() {
            cache.insert(src.to_string(), pixmap.clone());
        }
        Ok(pixmap)
    }

    pub fn width(&self) -> u32 { self.width }
    pub fn height(&self) -> u32 { self.height }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.data.is_empty()
    }
}
