use crate::{
    foundation::{
        error::{BlendoverError, BlendoverResult},
        math::mul_div255,
    },
    modes::CompositeMode,
};

pub type PremulRgba8 = [u8; 4];

/// Blend one source pixel over a destination pixel with a global opacity
/// and composition mode. Both pixels are premultiplied RGBA8; the global
/// opacity scales all four source channels before the mode math.
pub fn blend_px(
    dst: PremulRgba8,
    src: PremulRgba8,
    opacity: f32,
    mode: CompositeMode,
) -> PremulRgba8 {
    let opacity = opacity.clamp(0.0, 1.0);
    if opacity <= 0.0 || src[3] == 0 {
        return dst;
    }

    let op = ((opacity * 255.0).round() as i32).clamp(0, 255);
    let s: [i32; 4] = [
        mul_div255(i32::from(src[0]), op),
        mul_div255(i32::from(src[1]), op),
        mul_div255(i32::from(src[2]), op),
        mul_div255(i32::from(src[3]), op),
    ];
    let d: [i32; 4] = [
        i32::from(dst[0]),
        i32::from(dst[1]),
        i32::from(dst[2]),
        i32::from(dst[3]),
    ];

    let sa = s[3];
    let da = d[3];
    if sa == 0 {
        return dst;
    }
    let isa = 255 - sa;
    let ida = 255 - da;

    let alpha = if matches!(mode, CompositeMode::Plus) {
        sa + da
    } else {
        sa + mul_div255(da, isa)
    };

    let mut out = [0u8; 4];
    out[3] = clamp_u8(alpha);
    for i in 0..3 {
        let (s, d) = (s[i], d[i]);
        // Lift terms carry the uncovered parts of source and destination.
        let lift = mul_div255(s, ida) + mul_div255(d, isa);
        let co = match mode {
            CompositeMode::SourceOver => s + mul_div255(d, isa),
            CompositeMode::Plus => s + d,
            CompositeMode::Multiply => mul_div255(s, d) + lift,
            CompositeMode::Screen => s + d - mul_div255(s, d),
            CompositeMode::Overlay => {
                if 2 * d <= da {
                    2 * mul_div255(s, d) + lift
                } else {
                    mul_div255(sa, da) - 2 * mul_div255(da - d, sa - s) + lift
                }
            }
            CompositeMode::Darken => mul_div255(s, da).min(mul_div255(d, sa)) + lift,
            CompositeMode::Lighten => mul_div255(s, da).max(mul_div255(d, sa)) + lift,
            CompositeMode::HardLight => {
                if 2 * s <= sa {
                    2 * mul_div255(s, d) + lift
                } else {
                    mul_div255(sa, da) - 2 * mul_div255(da - d, sa - s) + lift
                }
            }
            CompositeMode::Difference => s + d - 2 * mul_div255(s, da).min(mul_div255(d, sa)),
            CompositeMode::Exclusion => s + d - 2 * mul_div255(s, d),
        };
        out[i] = clamp_u8(co);
    }
    out
}

/// Blend `src` over `dst` in place, pixel by pixel. Both buffers must be
/// equal-length premultiplied RGBA8.
pub fn blend_in_place(
    dst: &mut [u8],
    src: &[u8],
    opacity: f32,
    mode: CompositeMode,
) -> BlendoverResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(BlendoverError::render(
            "blend_in_place expects equal-length rgba8 buffers",
        ));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let out = blend_px([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]], opacity, mode);
        d.copy_from_slice(&out);
    }
    Ok(())
}

fn clamp_u8(v: i32) -> u8 {
    v.clamp(0, 255) as u8
}
