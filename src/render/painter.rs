use std::sync::{Arc, OnceLock};

use crate::{
    foundation::{
        core::{Affine, Canvas},
        error::{BlendoverError, BlendoverResult},
    },
    modes::Interp,
    source::FrameRGBA,
};

static PAINTER_PROBE: OnceLock<()> = OnceLock::new();

/// One-time process-wide painter setup. Idempotent; repeated calls are
/// no-ops. Invoked at transition construction so an unusable raster
/// pipeline fails there instead of mid-frame.
pub fn ensure_initialized() -> BlendoverResult<()> {
    PAINTER_PROBE.get_or_init(|| {
        // 1x1 probe render
        let mut pixmap = vello_cpu::Pixmap::new(1, 1);
        let mut ctx = vello_cpu::RenderContext::new(1, 1);
        ctx.flush();
        ctx.render_to_pixmap(&mut pixmap);
    });
    Ok(())
}

/// Render `src` through `transform` into a transparent canvas-sized
/// staging surface and return its premultiplied RGBA8 bytes. Sampling
/// quality follows the interp hint; nearest-neighbor when no smoothing
/// was requested.
pub(crate) fn transform_image(
    src: &FrameRGBA,
    transform: Affine,
    canvas: Canvas,
    interp: Interp,
) -> BlendoverResult<Vec<u8>> {
    ensure_initialized()?;

    let width: u16 = canvas
        .width
        .try_into()
        .map_err(|_| BlendoverError::render("canvas width exceeds u16"))?;
    let height: u16 = canvas
        .height
        .try_into()
        .map_err(|_| BlendoverError::render("canvas height exceeds u16"))?;

    let paint = image_paint(src, interp)?;

    let mut pixmap = vello_cpu::Pixmap::new(width, height);
    let mut ctx = vello_cpu::RenderContext::new(width, height);
    ctx.set_transform(to_cpu_affine(transform));
    ctx.set_paint(paint);
    ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
        0.0,
        0.0,
        f64::from(src.width),
        f64::from(src.height),
    ));
    ctx.flush();
    ctx.render_to_pixmap(&mut pixmap);

    Ok(pixmap.data_as_u8_slice().to_vec())
}

fn image_paint(src: &FrameRGBA, interp: Interp) -> BlendoverResult<vello_cpu::Image> {
    let width: u16 = src
        .width
        .try_into()
        .map_err(|_| BlendoverError::render("upper frame width exceeds u16"))?;
    let height: u16 = src
        .height
        .try_into()
        .map_err(|_| BlendoverError::render("upper frame height exceeds u16"))?;
    if src.data.len() != src.width as usize * src.height as usize * 4 {
        return Err(BlendoverError::render("upper frame byte length mismatch"));
    }

    let mut may_have_opacities = false;
    let mut pixels = Vec::with_capacity(src.width as usize * src.height as usize);
    for px in src.data.chunks_exact(4) {
        may_have_opacities |= px[3] != 255;
        pixels.push(vello_cpu::peniko::color::PremulRgba8::from_u8_array([
            px[0], px[1], px[2], px[3],
        ]));
    }
    let pixmap =
        vello_cpu::Pixmap::from_parts_with_opacity(pixels, width, height, may_have_opacities);

    let quality = match interp {
        Interp::Nearest => vello_cpu::peniko::ImageQuality::Low,
        Interp::Bilinear => vello_cpu::peniko::ImageQuality::Medium,
        Interp::Bicubic => vello_cpu::peniko::ImageQuality::High,
    };
    let sampler = vello_cpu::peniko::ImageSampler {
        quality,
        ..Default::default()
    };

    Ok(vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
        sampler,
    })
}

fn to_cpu_affine(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}
