use crate::foundation::error::{BlendoverError, BlendoverResult};

/// Composition mode used when blending the upper frame over the lower frame.
///
/// A closed enumeration; the integer codes exist only for property-store
/// boundaries that configure the mode numerically. Any mode other than
/// [`CompositeMode::SourceOver`] forces the full-blend path.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum CompositeMode {
    #[default]
    SourceOver,
    Plus,
    Multiply,
    Screen,
    Overlay,
    Darken,
    Lighten,
    HardLight,
    Difference,
    Exclusion,
}

impl CompositeMode {
    /// All modes, in code order.
    pub fn all() -> &'static [CompositeMode] {
        &[
            Self::SourceOver,
            Self::Plus,
            Self::Multiply,
            Self::Screen,
            Self::Overlay,
            Self::Darken,
            Self::Lighten,
            Self::HardLight,
            Self::Difference,
            Self::Exclusion,
        ]
    }

    /// Stable integer selector for this mode.
    pub fn code(self) -> i32 {
        match self {
            Self::SourceOver => 0,
            Self::Plus => 1,
            Self::Multiply => 2,
            Self::Screen => 3,
            Self::Overlay => 4,
            Self::Darken => 5,
            Self::Lighten => 6,
            Self::HardLight => 7,
            Self::Difference => 8,
            Self::Exclusion => 9,
        }
    }

    /// Resolve an integer selector; unknown codes are a validation error.
    pub fn from_code(code: i32) -> BlendoverResult<Self> {
        match code {
            0 => Ok(Self::SourceOver),
            1 => Ok(Self::Plus),
            2 => Ok(Self::Multiply),
            3 => Ok(Self::Screen),
            4 => Ok(Self::Overlay),
            5 => Ok(Self::Darken),
            6 => Ok(Self::Lighten),
            7 => Ok(Self::HardLight),
            8 => Ok(Self::Difference),
            9 => Ok(Self::Exclusion),
            other => Err(BlendoverError::validation(format!(
                "unknown composite mode code {other}"
            ))),
        }
    }
}

/// Resampling quality for the transform render, from the rescale hint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Interp {
    #[default]
    Nearest,
    Bilinear,
    Bicubic,
}

impl Interp {
    /// Map a rescale hint string; anything not requesting smooth resampling
    /// degrades to nearest-neighbor.
    pub fn from_hint(hint: &str) -> Self {
        match hint.trim().to_ascii_lowercase().as_str() {
            "bilinear" => Self::Bilinear,
            "bicubic" | "hyper" => Self::Bicubic,
            _ => Self::Nearest,
        }
    }
}
