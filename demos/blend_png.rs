use std::fs;
use std::path::Path;

use blendover::{
    Anim, BlendTransition, BufferSource, Canvas, Ease, FrameRGBA, InterpMode, Keyframe, RectF,
    TransitionParams,
};

fn unpremultiply_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((px[0] as u16 * 255 + a / 2) / a).min(255) as u8;
        px[1] = ((px[1] as u16 * 255 + a / 2) / a).min(255) as u8;
        px[2] = ((px[2] as u16 * 255 + a / 2) / a).min(255) as u8;
    }
}

fn checkerboard(width: u32, height: u32, cell: u32) -> anyhow::Result<FrameRGBA> {
    let mut data = Vec::with_capacity(width as usize * height as usize * 4);
    for y in 0..height {
        for x in 0..width {
            let odd = ((x / cell) + (y / cell)) % 2 == 1;
            data.extend_from_slice(if odd { &[64, 64, 64, 255] } else { &[24, 24, 24, 255] });
        }
    }
    Ok(FrameRGBA::new(width, height, data)?)
}

fn main() -> anyhow::Result<()> {
    // The upper frame slides in from the left while fading up.
    let params = TransitionParams {
        rect: Some(Anim {
            keys: vec![
                Keyframe {
                    position: 0,
                    value: RectF::new(-160.0, 60.0, 160.0, 120.0, 0.0),
                    ease: Ease::OutQuad,
                },
                Keyframe {
                    position: -1,
                    value: RectF::new(80.0, 60.0, 160.0, 120.0, 1.0),
                    ease: Ease::Linear,
                },
            ],
            mode: InterpMode::Linear,
            default: None,
        }),
        ..TransitionParams::default()
    };
    let transition = BlendTransition::new(params)?;

    let out_dir = Path::new("target/demos");
    fs::create_dir_all(out_dir)?;

    let length = 48;
    for (tag, position) in [("start", 0), ("mid", 24), ("end", 47)] {
        let mut lower = BufferSource::new(checkerboard(320, 240, 16)?);
        let mut upper = BufferSource::new(FrameRGBA::solid(160, 120, [20, 90, 200, 255]));
        let frame = transition.composite_frame(
            &mut lower,
            &mut upper,
            position,
            length,
            Canvas::new(320, 240)?,
        )?;

        let mut straight = frame.data;
        unpremultiply_in_place(&mut straight);
        let img = image::RgbaImage::from_raw(frame.width, frame.height, straight)
            .ok_or_else(|| anyhow::anyhow!("invalid rgba buffer size"))?;
        let out_path = out_dir.join(format!("blend_{tag}.png"));
        img.save(&out_path)?;
        eprintln!("wrote {}", out_path.display());
    }
    Ok(())
}
