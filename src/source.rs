use anyhow::Context;

use crate::foundation::{
    error::{BlendoverError, BlendoverResult},
    math::mul_div255_u8,
};

/// Pixel format negotiated with frame sources. The compositor always
/// requests premultiplied RGBA8.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum PixelFormat {
    #[default]
    Rgba8Premul,
}

/// One frame buffer: flat premultiplied RGBA8, row-major, no padding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
    pub premultiplied: bool,
}

impl FrameRGBA {
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> BlendoverResult<Self> {
        let expected = width as usize * height as usize * 4;
        if data.len() != expected {
            return Err(BlendoverError::validation(format!(
                "frame byte length {} does not match {width}x{height} rgba8",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
            premultiplied: true,
        })
    }

    /// A single-color frame; handy for fixtures and fills.
    pub fn solid(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let mut data = vec![0u8; width as usize * height as usize * 4];
        for px in data.chunks_exact_mut(4) {
            px.copy_from_slice(&rgba);
        }
        Self {
            width,
            height,
            data,
            premultiplied: true,
        }
    }
}

/// A request for one frame buffer at a given size.
///
/// `progressive` asks for a non-field-aware (deinterlaced) image and `exact`
/// suppresses padding and aspect normalization, so the source delivers the
/// full stored resolution scaled to exactly the requested size. Sources may
/// still return a different size than requested.
#[derive(Clone, Copy, Debug)]
pub struct FetchRequest {
    pub format: PixelFormat,
    pub width: u32,
    pub height: u32,
    /// The caller intends to mutate (and keep) the returned buffer.
    pub writable: bool,
    pub progressive: bool,
    pub exact: bool,
}

/// Upstream producer of frame buffers.
///
/// A fetch that fails aborts the composite for that frame; there is no
/// retry at this layer. A stuck fetch blocks the calling thread, per the
/// producer's own contract.
pub trait FrameSource {
    fn fetch(&mut self, req: &FetchRequest) -> BlendoverResult<FrameRGBA>;
}

/// Serves a fixed in-memory frame, ignoring the requested size.
pub struct BufferSource {
    frame: FrameRGBA,
}

impl BufferSource {
    pub fn new(frame: FrameRGBA) -> Self {
        Self { frame }
    }
}

impl FrameSource for BufferSource {
    fn fetch(&mut self, _req: &FetchRequest) -> BlendoverResult<FrameRGBA> {
        Ok(self.frame.clone())
    }
}

/// Decodes an encoded image once and serves fetches at the requested size.
pub struct ImageFileSource {
    width: u32,
    height: u32,
    /// Straight (non-premultiplied) RGBA8; premultiplied per fetch after
    /// any resize so resampling happens on straight color.
    rgba8: Vec<u8>,
}

impl ImageFileSource {
    pub fn from_bytes(bytes: &[u8]) -> BlendoverResult<Self> {
        let decoded = image::load_from_memory(bytes).context("decode image from memory")?;
        let rgba = decoded.to_rgba8();
        let (width, height) = rgba.dimensions();
        Ok(Self {
            width,
            height,
            rgba8: rgba.into_raw(),
        })
    }

    pub fn from_path(path: impl AsRef<std::path::Path>) -> BlendoverResult<Self> {
        let bytes = std::fs::read(path.as_ref())
            .with_context(|| format!("read image file {}", path.as_ref().display()))?;
        Self::from_bytes(&bytes)
    }

    pub fn native_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

impl FrameSource for ImageFileSource {
    fn fetch(&mut self, req: &FetchRequest) -> BlendoverResult<FrameRGBA> {
        if req.width == 0 || req.height == 0 {
            return Err(BlendoverError::fetch("requested size must be non-zero"));
        }

        let mut data = if req.width == self.width && req.height == self.height {
            self.rgba8.clone()
        } else {
            let img = image::RgbaImage::from_raw(self.width, self.height, self.rgba8.clone())
                .ok_or_else(|| BlendoverError::fetch("stored image bytes are inconsistent"))?;
            let filter = if req.exact {
                image::imageops::FilterType::Nearest
            } else {
                image::imageops::FilterType::Triangle
            };
            image::imageops::resize(&img, req.width, req.height, filter).into_raw()
        };

        premultiply_rgba8_in_place(&mut data);
        FrameRGBA::new(req.width, req.height, data)
    }
}

pub(crate) fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3];
        if a == 255 {
            continue;
        }
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = mul_div255_u8(px[0], a);
        px[1] = mul_div255_u8(px[1], a);
        px[2] = mul_div255_u8(px[2], a);
    }
}
