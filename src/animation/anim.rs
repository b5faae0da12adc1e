use crate::{
    animation::ease::Ease,
    foundation::error::{BlendoverError, BlendoverResult},
};

/// Sampling context: the current position within a transition and the
/// transition's total length in frames.
#[derive(Clone, Copy, Debug)]
pub struct SampleCtx {
    pub position: u64,
    pub length: u64, // > 0
}

pub trait Lerp: Sized {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

/// A parameter animated over the lifetime of a transition.
///
/// Keyframe positions are frames; a negative position counts back from the
/// transition length, so `-1` is the last frame regardless of duration.
/// Between keys the value is held or linearly interpolated, with the easing
/// of the earlier key applied toward the next. Outside the keyed range the
/// nearest key's value is used.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Anim<T> {
    pub keys: Vec<Keyframe<T>>,
    pub mode: InterpMode,
    /// Value when no keys exist.
    pub default: Option<T>,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Keyframe<T> {
    pub position: i64,
    pub value: T,
    /// Ease applied toward the next key.
    pub ease: Ease,
}

#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub enum InterpMode {
    Hold,
    Linear,
}

fn resolve_position(position: i64, length: u64) -> u64 {
    if position < 0 {
        (length as i64 + position).max(0) as u64
    } else {
        position as u64
    }
}

impl<T> Anim<T>
where
    T: Lerp + Clone,
{
    pub fn constant(value: T) -> Self {
        Self {
            keys: vec![Keyframe {
                position: 0,
                value,
                ease: Ease::Linear,
            }],
            mode: InterpMode::Hold,
            default: None,
        }
    }

    pub fn validate(&self) -> BlendoverResult<()> {
        if self.keys.is_empty() && self.default.is_none() {
            return Err(BlendoverError::animation(
                "Anim must have at least one key or a default value",
            ));
        }
        Ok(())
    }

    pub fn sample(&self, ctx: SampleCtx) -> BlendoverResult<T> {
        if ctx.length == 0 {
            return Err(BlendoverError::animation("sample length must be > 0"));
        }
        if self.keys.is_empty() {
            return self
                .default
                .clone()
                .ok_or_else(|| BlendoverError::animation("Anim has no keys and no default"));
        }

        // Keyframe positions resolve against the length at sample time, so
        // the bracketing pair is found by scan rather than binary search.
        let pos = ctx.position;
        let mut prev: Option<(u64, &Keyframe<T>)> = None;
        let mut next: Option<(u64, &Keyframe<T>)> = None;
        for key in &self.keys {
            let at = resolve_position(key.position, ctx.length);
            if at <= pos {
                if prev.is_none_or(|(p, _)| at >= p) {
                    prev = Some((at, key));
                }
            } else if next.is_none_or(|(n, _)| at < n) {
                next = Some((at, key));
            }
        }

        match (prev, next) {
            (Some((_, key)), None) => Ok(key.value.clone()),
            (None, Some((_, key))) => Ok(key.value.clone()),
            (Some((at_a, a)), Some((at_b, b))) => {
                if matches!(self.mode, InterpMode::Hold) || at_b == at_a {
                    return Ok(a.value.clone());
                }
                let t = ((pos - at_a) as f64) / ((at_b - at_a) as f64);
                Ok(T::lerp(&a.value, &b.value, a.ease.apply(t)))
            }
            (None, None) => Err(BlendoverError::animation("Anim has no keys and no default")),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/anim.rs"]
mod tests;
