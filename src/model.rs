use crate::{
    animation::anim::{Anim, Lerp},
    foundation::error::BlendoverResult,
    modes::{CompositeMode, Interp},
};

/// Placement rectangle for the upper frame: destination offset, target
/// size, and intrinsic opacity. All animated together as one value.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RectF {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    /// Opacity in `[0, 1]`; clamped at resolve time.
    pub o: f64,
}

impl RectF {
    pub fn new(x: f64, y: f64, w: f64, h: f64, o: f64) -> Self {
        Self { x, y, w, h, o }
    }
}

impl Lerp for RectF {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            x: f64::lerp(&a.x, &b.x, t),
            y: f64::lerp(&a.y, &b.y, t),
            w: f64::lerp(&a.w, &b.w, t),
            h: f64::lerp(&a.h, &b.h, t),
            o: f64::lerp(&a.o, &b.o, t),
        }
    }
}

/// Per-transition configuration, read fresh at every frame.
///
/// `None` for `rect` or `rotation` means the parameter is not configured:
/// the upper frame keeps its native placement and full opacity, and no
/// rotation is concatenated.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct TransitionParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rect: Option<Anim<RectF>>,
    /// Rotation about the origin, in degrees.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<Anim<f64>>,
    /// Scale each axis independently instead of uniform min-ratio fitting.
    #[serde(default)]
    pub distort: bool,
    #[serde(default)]
    pub compositing: CompositeMode,
    #[serde(default)]
    pub interp: Interp,
}

impl TransitionParams {
    pub fn validate(&self) -> BlendoverResult<()> {
        if let Some(rect) = &self.rect {
            rect.validate()?;
        }
        if let Some(rotation) = &self.rotation {
            rotation.validate()?;
        }
        Ok(())
    }
}
