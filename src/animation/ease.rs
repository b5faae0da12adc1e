/// Easing curve applied from one keyframe toward the next.
///
/// `Smooth` is the smoothstep curve used by smooth keyframes; the quad and
/// cubic families accelerate in, decelerate out, or both.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    Linear,
    Smooth,
    InQuad,
    OutQuad,
    InOutQuad,
    InCubic,
    OutCubic,
    InOutCubic,
}

impl Ease {
    /// Remap a normalized progress value; input and output stay in `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::Smooth => t * t * (3.0 - 2.0 * t),
            Self::InQuad => accel(t, 2),
            Self::OutQuad => decel(t, 2),
            Self::InOutQuad => accel_decel(t, 2),
            Self::InCubic => accel(t, 3),
            Self::OutCubic => decel(t, 3),
            Self::InOutCubic => accel_decel(t, 3),
        }
    }
}

fn accel(t: f64, power: i32) -> f64 {
    t.powi(power)
}

fn decel(t: f64, power: i32) -> f64 {
    1.0 - (1.0 - t).powi(power)
}

fn accel_decel(t: f64, power: i32) -> f64 {
    if t < 0.5 {
        accel(2.0 * t, power) / 2.0
    } else {
        0.5 + decel(2.0 * t - 1.0, power) / 2.0
    }
}
