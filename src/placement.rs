use crate::{
    animation::anim::SampleCtx,
    foundation::{
        core::{Affine, Canvas, Vec2},
        error::BlendoverResult,
    },
    model::TransitionParams,
};

const EPSILON: f64 = 1e-6;

/// Resolved geometry and opacity for the upper frame at one instant.
///
/// The transform is built translate-first, so rotation and scale act inside
/// the placed rectangle. Scale is concatenated last, once the actually
/// fetched upper size is known, via [`Placement::apply_scale`].
#[derive(Clone, Copy, Debug)]
pub struct Placement {
    pub transform: Affine,
    /// Size the upper frame should be fetched at.
    pub target_width: u32,
    pub target_height: u32,
    /// Global opacity in `[0, 1]`.
    pub opacity: f64,
    /// A rotation parameter is configured (any angle, including zero).
    pub rotated: bool,
    /// A rect parameter is configured.
    pub rect_configured: bool,
}

/// Resolve the animated parameters at `position` of `length` into a
/// concrete placement. Absent parameters default: native canvas size,
/// identity translation, opacity 1.0. Pure; no side effects.
#[tracing::instrument(skip(params))]
pub fn resolve_placement(
    params: &TransitionParams,
    position: u64,
    length: u64,
    canvas: Canvas,
) -> BlendoverResult<Placement> {
    let ctx = SampleCtx { position, length };

    let mut transform = Affine::IDENTITY;
    let mut target_width = canvas.width;
    let mut target_height = canvas.height;
    let mut opacity = 1.0;

    let rect_configured = params.rect.is_some();
    if let Some(rect) = &params.rect {
        let r = rect.sample(ctx)?;
        transform = Affine::translate(Vec2::new(r.x, r.y));
        target_width = r.w.max(0.0) as u32;
        target_height = r.h.max(0.0) as u32;
        opacity = r.o.clamp(0.0, 1.0);
    }

    let mut rotated = false;
    if let Some(rotation) = &params.rotation {
        let degrees = rotation.sample(ctx)?;
        transform = transform * Affine::rotate(degrees.to_radians());
        rotated = true;
    }

    Ok(Placement {
        transform,
        target_width,
        target_height,
        opacity,
        rotated,
        rect_configured,
    })
}

impl Placement {
    /// Concatenate the rect-fitting scale once the upper frame's fetched
    /// size is known: per-axis when distorting, uniform min-ratio otherwise.
    /// No-op without a configured rect or with a degenerate fetched size.
    pub fn apply_scale(&mut self, fetched_width: u32, fetched_height: u32, distort: bool) {
        if !self.rect_configured || fetched_width == 0 || fetched_height == 0 {
            return;
        }
        let sx = f64::from(self.target_width) / f64::from(fetched_width);
        let sy = f64::from(self.target_height) / f64::from(fetched_height);
        if distort {
            self.transform = self.transform * Affine::scale_non_uniform(sx, sy);
        } else {
            self.transform = self.transform * Affine::scale(sx.min(sy));
        }
    }

    /// The transform's linear part departs from identity scale.
    pub fn scales(&self) -> bool {
        let c = self.transform.as_coeffs();
        (c[0] - 1.0).abs() > EPSILON || (c[3] - 1.0).abs() > EPSILON
    }

    /// The transform moves the origin.
    pub fn translates(&self) -> bool {
        let c = self.transform.as_coeffs();
        c[4].abs() > EPSILON || c[5].abs() > EPSILON
    }
}

#[cfg(test)]
#[path = "../tests/unit/placement.rs"]
mod tests;
