use crate::{
    foundation::{
        core::Canvas,
        error::{BlendoverError, BlendoverResult},
    },
    model::TransitionParams,
    modes::CompositeMode,
    placement::{Placement, resolve_placement},
    render::{composite, painter},
    source::{FetchRequest, FrameRGBA, FrameSource, PixelFormat},
};

/// Composites an upper (foreground) frame over a lower (background) frame
/// for one instant of a transition.
///
/// Each [`BlendTransition::composite_frame`] call resolves the animated
/// parameters fresh, fetches the upper frame, and then takes one of two
/// paths: when nothing forces blending, the upper buffer passes through
/// unchanged and the output adopts its size; otherwise the upper frame is
/// rendered through the resolved transform onto a copy of the lower frame.
#[derive(Debug)]
pub struct BlendTransition {
    params: TransitionParams,
}

impl BlendTransition {
    /// Validates parameters and performs the one-time painter setup;
    /// either failure is a constructor error.
    pub fn new(params: TransitionParams) -> BlendoverResult<Self> {
        params.validate()?;
        painter::ensure_initialized()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &TransitionParams {
        &self.params
    }

    /// Compute the composited output for `position` of `length`.
    ///
    /// Bypass returns the upper buffer as fetched, so the reported output
    /// size follows the upper frame even when it differs from `canvas`.
    /// The full-blend output is always canvas-sized. A fetch failure from
    /// either source aborts with no output.
    #[tracing::instrument(skip(self, lower, upper))]
    pub fn composite_frame(
        &self,
        lower: &mut dyn FrameSource,
        upper: &mut dyn FrameSource,
        position: u64,
        length: u64,
        canvas: Canvas,
    ) -> BlendoverResult<FrameRGBA> {
        if length == 0 {
            return Err(BlendoverError::validation("transition length must be > 0"));
        }

        let mut placement = resolve_placement(&self.params, position, length, canvas)?;

        let upper_frame = upper.fetch(&FetchRequest {
            format: PixelFormat::Rgba8Premul,
            width: placement.target_width,
            height: placement.target_height,
            writable: false,
            progressive: true,
            exact: true,
        })?;

        // The fitting scale depends on the size the fetch actually returned.
        placement.apply_scale(upper_frame.width, upper_frame.height, self.params.distort);

        if !needs_blend(&placement, self.params.compositing, &upper_frame, canvas) {
            tracing::debug!(
                width = upper_frame.width,
                height = upper_frame.height,
                "bypass: upper frame passes through"
            );
            return Ok(upper_frame);
        }

        let mut out = lower.fetch(&FetchRequest {
            format: PixelFormat::Rgba8Premul,
            width: canvas.width,
            height: canvas.height,
            writable: true,
            progressive: false,
            exact: false,
        })?;

        // Blend at whatever size the lower fetch delivered.
        let target = Canvas {
            width: out.width,
            height: out.height,
        };
        let staging = painter::transform_image(
            &upper_frame,
            placement.transform,
            target,
            self.params.interp,
        )?;
        composite::blend_in_place(
            &mut out.data,
            &staging,
            placement.opacity as f32,
            self.params.compositing,
        )?;
        tracing::debug!(
            mode = ?self.params.compositing,
            opacity = placement.opacity,
            "full blend"
        );
        Ok(out)
    }
}

/// Decide whether the upper frame must be blended over the lower frame.
///
/// Signals are checked in a fixed precedence order, first hit wins:
/// rotation, then rect transform/opacity, then a non-default composition
/// mode, then an upper frame smaller than the canvas, and only then a scan
/// of the upper buffer for a non-opaque alpha value. The scan stops at the
/// first hit; reordering these checks would change which frames take the
/// cheap path.
pub fn needs_blend(
    placement: &Placement,
    mode: CompositeMode,
    upper: &FrameRGBA,
    canvas: Canvas,
) -> bool {
    if placement.rotated {
        return true;
    }
    if placement.rect_configured
        && (placement.opacity < 1.0 || placement.scales() || placement.translates())
    {
        return true;
    }
    if mode != CompositeMode::SourceOver {
        return true;
    }
    if upper.width < canvas.width || upper.height < canvas.height {
        return true;
    }
    upper.data.chunks_exact(4).any(|px| px[3] < 255)
}

#[cfg(test)]
#[path = "../tests/unit/transition.rs"]
mod tests;
