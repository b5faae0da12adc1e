use super::*;

fn ctx(position: u64, length: u64) -> SampleCtx {
    SampleCtx { position, length }
}

fn keyed(keys: Vec<(i64, f64)>, mode: InterpMode) -> Anim<f64> {
    Anim {
        keys: keys
            .into_iter()
            .map(|(position, value)| Keyframe {
                position,
                value,
                ease: Ease::Linear,
            })
            .collect(),
        mode,
        default: None,
    }
}

#[test]
fn constant_holds_everywhere() {
    let anim = Anim::constant(7.5);
    assert_eq!(anim.sample(ctx(0, 100)).unwrap(), 7.5);
    assert_eq!(anim.sample(ctx(99, 100)).unwrap(), 7.5);
}

#[test]
fn hold_keeps_earlier_key_between_keys() {
    let anim = keyed(vec![(0, 1.0), (10, 3.0)], InterpMode::Hold);
    assert_eq!(anim.sample(ctx(5, 100)).unwrap(), 1.0);
    assert_eq!(anim.sample(ctx(10, 100)).unwrap(), 3.0);
}

#[test]
fn linear_interpolates_between_keys() {
    let anim = keyed(vec![(0, 0.0), (10, 10.0)], InterpMode::Linear);
    assert_eq!(anim.sample(ctx(5, 100)).unwrap(), 5.0);
}

#[test]
fn ends_are_clamped_outside_keyed_range() {
    let anim = keyed(vec![(10, 1.0), (20, 2.0)], InterpMode::Linear);
    assert_eq!(anim.sample(ctx(0, 100)).unwrap(), 1.0);
    assert_eq!(anim.sample(ctx(90, 100)).unwrap(), 2.0);
}

#[test]
fn negative_positions_resolve_from_the_end() {
    // Keys at frame 0 and at the last frame of the transition.
    let anim = keyed(vec![(0, 0.0), (-1, 100.0)], InterpMode::Linear);
    assert_eq!(anim.sample(ctx(0, 101)).unwrap(), 0.0);
    assert_eq!(anim.sample(ctx(100, 101)).unwrap(), 100.0);
    assert_eq!(anim.sample(ctx(50, 101)).unwrap(), 50.0);
}

#[test]
fn ease_applies_toward_next_key() {
    let anim = Anim {
        keys: vec![
            Keyframe {
                position: 0,
                value: 0.0,
                ease: Ease::InQuad,
            },
            Keyframe {
                position: 10,
                value: 10.0,
                ease: Ease::Linear,
            },
        ],
        mode: InterpMode::Linear,
        default: None,
    };
    // InQuad at t=0.5 is 0.25.
    assert_eq!(anim.sample(ctx(5, 100)).unwrap(), 2.5);
}

#[test]
fn default_serves_when_keyless() {
    let anim = Anim::<f64> {
        keys: vec![],
        mode: InterpMode::Linear,
        default: Some(4.0),
    };
    assert!(anim.validate().is_ok());
    assert_eq!(anim.sample(ctx(3, 10)).unwrap(), 4.0);
}

#[test]
fn keyless_without_default_is_rejected() {
    let anim = Anim::<f64> {
        keys: vec![],
        mode: InterpMode::Linear,
        default: None,
    };
    assert!(anim.validate().is_err());
    assert!(anim.sample(ctx(0, 10)).is_err());
}

#[test]
fn zero_length_is_rejected() {
    let anim = Anim::constant(1.0);
    assert!(anim.sample(ctx(0, 0)).is_err());
}
