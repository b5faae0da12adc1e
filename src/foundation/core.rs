use crate::foundation::error::{BlendoverError, BlendoverResult};

pub use kurbo::{Affine, Vec2};

/// Output frame size in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> BlendoverResult<Self> {
        if width == 0 || height == 0 {
            return Err(BlendoverError::validation("Canvas width/height must be > 0"));
        }
        Ok(Self { width, height })
    }

    /// Byte length of an RGBA8 buffer covering this canvas.
    pub fn byte_len(self) -> usize {
        self.width as usize * self.height as usize * 4
    }
}
