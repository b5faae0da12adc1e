use super::*;
use crate::{
    animation::anim::{Anim, InterpMode, Keyframe},
    animation::ease::Ease,
    model::RectF,
};

fn canvas() -> Canvas {
    Canvas::new(640, 480).unwrap()
}

fn rect_params(x: f64, y: f64, w: f64, h: f64, o: f64) -> TransitionParams {
    TransitionParams {
        rect: Some(Anim::constant(RectF::new(x, y, w, h, o))),
        ..TransitionParams::default()
    }
}

#[test]
fn absent_parameters_default_to_native_placement() {
    let p = resolve_placement(&TransitionParams::default(), 0, 10, canvas()).unwrap();
    assert_eq!(p.transform, Affine::IDENTITY);
    assert_eq!((p.target_width, p.target_height), (640, 480));
    assert_eq!(p.opacity, 1.0);
    assert!(!p.rotated);
    assert!(!p.rect_configured);
    assert!(!p.scales());
    assert!(!p.translates());
}

#[test]
fn rect_sets_translation_target_and_opacity() {
    let p = resolve_placement(&rect_params(8.0, -4.0, 320.0, 240.0, 0.5), 0, 10, canvas()).unwrap();
    assert_eq!((p.target_width, p.target_height), (320, 240));
    assert_eq!(p.opacity, 0.5);
    assert!(p.rect_configured);
    assert!(p.translates());
    let c = p.transform.as_coeffs();
    assert_eq!((c[4], c[5]), (8.0, -4.0));
}

#[test]
fn rect_opacity_is_clamped() {
    let p = resolve_placement(&rect_params(0.0, 0.0, 64.0, 64.0, 1.5), 0, 10, canvas()).unwrap();
    assert_eq!(p.opacity, 1.0);
}

#[test]
fn rotation_marks_placement_even_at_zero_degrees() {
    let params = TransitionParams {
        rotation: Some(Anim::constant(0.0)),
        ..TransitionParams::default()
    };
    let p = resolve_placement(&params, 0, 10, canvas()).unwrap();
    assert!(p.rotated);
    assert_eq!(p.transform, Affine::IDENTITY);
}

#[test]
fn rotation_concatenates_after_translation() {
    let params = TransitionParams {
        rect: Some(Anim::constant(RectF::new(10.0, 20.0, 640.0, 480.0, 1.0))),
        rotation: Some(Anim::constant(90.0)),
        ..TransitionParams::default()
    };
    let p = resolve_placement(&params, 0, 10, canvas()).unwrap();
    let expected =
        Affine::translate(Vec2::new(10.0, 20.0)) * Affine::rotate(90f64.to_radians());
    let (got, want) = (p.transform.as_coeffs(), expected.as_coeffs());
    for i in 0..6 {
        assert!((got[i] - want[i]).abs() < 1e-12);
    }
}

#[test]
fn uniform_scale_uses_min_ratio() {
    let mut p =
        resolve_placement(&rect_params(0.0, 0.0, 100.0, 50.0, 1.0), 0, 10, canvas()).unwrap();
    p.apply_scale(200, 200, false);
    let c = p.transform.as_coeffs();
    assert_eq!((c[0], c[3]), (0.25, 0.25));
    assert!(p.scales());
}

#[test]
fn distort_scales_each_axis() {
    let mut p =
        resolve_placement(&rect_params(0.0, 0.0, 100.0, 50.0, 1.0), 0, 10, canvas()).unwrap();
    p.apply_scale(200, 200, true);
    let c = p.transform.as_coeffs();
    assert_eq!((c[0], c[3]), (0.5, 0.25));
}

#[test]
fn exact_fetch_size_leaves_identity_scale() {
    let mut p =
        resolve_placement(&rect_params(0.0, 0.0, 100.0, 50.0, 1.0), 0, 10, canvas()).unwrap();
    p.apply_scale(100, 50, false);
    assert!(!p.scales());
    assert!(!p.translates());
}

#[test]
fn scale_is_a_noop_without_rect_or_with_degenerate_size() {
    let mut p = resolve_placement(&TransitionParams::default(), 0, 10, canvas()).unwrap();
    p.apply_scale(320, 240, true);
    assert_eq!(p.transform, Affine::IDENTITY);

    let mut p =
        resolve_placement(&rect_params(0.0, 0.0, 100.0, 50.0, 1.0), 0, 10, canvas()).unwrap();
    p.apply_scale(0, 50, false);
    assert!(!p.scales());
}

#[test]
fn animated_rect_moves_across_the_transition() {
    let anim = Anim {
        keys: vec![
            Keyframe {
                position: 0,
                value: RectF::new(0.0, 0.0, 64.0, 64.0, 1.0),
                ease: Ease::Linear,
            },
            Keyframe {
                position: -1,
                value: RectF::new(100.0, 0.0, 64.0, 64.0, 0.0),
                ease: Ease::Linear,
            },
        ],
        mode: InterpMode::Linear,
        default: None,
    };
    let params = TransitionParams {
        rect: Some(anim),
        ..TransitionParams::default()
    };
    let p = resolve_placement(&params, 50, 101, canvas()).unwrap();
    let c = p.transform.as_coeffs();
    assert_eq!(c[4], 50.0);
    assert_eq!(p.opacity, 0.5);
}
