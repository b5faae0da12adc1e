//! Blendover composites an upper (foreground) video frame over a lower
//! (background) frame for one instant of a transition effect.
//!
//! The pipeline per frame:
//!
//! 1. **Resolve**: animated parameters (`rect`, `rotation`, opacity) at the
//!    current position become a concrete affine placement
//!    ([`resolve_placement`]).
//! 2. **Decide**: structural signals, then a short-circuit alpha scan,
//!    determine whether blending is needed at all ([`needs_blend`]).
//! 3. **Composite**: either the upper frame passes through unchanged (the
//!    bypass path, with its size propagated to the output) or it is
//!    rendered through the placement transform onto a copy of the lower
//!    frame with a selectable composition mode
//!    ([`BlendTransition::composite_frame`]).
//!
//! Buffers are premultiplied RGBA8 end-to-end. Frame retrieval stays
//! behind the [`FrameSource`] trait; everything in one invocation is
//! synchronous and owns its locals, so independent invocations can run on
//! independent threads without locking.
#![forbid(unsafe_code)]

mod animation;
mod foundation;
mod model;
mod modes;
mod placement;
mod render;
mod source;
mod transition;

pub use animation::anim::{Anim, InterpMode, Keyframe, Lerp, SampleCtx};
pub use animation::ease::Ease;
pub use foundation::core::{Affine, Canvas, Vec2};
pub use foundation::error::{BlendoverError, BlendoverResult};
pub use model::{RectF, TransitionParams};
pub use modes::{CompositeMode, Interp};
pub use placement::{Placement, resolve_placement};
pub use render::composite::{PremulRgba8, blend_in_place, blend_px};
pub use render::painter::ensure_initialized;
pub use source::{
    BufferSource, FetchRequest, FrameRGBA, FrameSource, ImageFileSource, PixelFormat,
};
pub use transition::{BlendTransition, needs_blend};
