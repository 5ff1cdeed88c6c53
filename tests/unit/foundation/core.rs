use super::*;

#[test]
fn visual_state_get_set_cover_every_property() {
    let props = [
        Property::XPercent,
        Property::YPercent,
        Property::Y,
        Property::Rotation,
        Property::Scale,
        Property::Opacity,
        Property::Blur,
        Property::Contrast,
        Property::Saturation,
    ];
    let mut s = VisualState::default();
    for (i, p) in props.iter().enumerate() {
        s.set(*p, i as f64 + 0.5);
    }
    for (i, p) in props.iter().enumerate() {
        assert_eq!(s.get(*p), i as f64 + 0.5);
    }
}

#[test]
fn default_state_is_identity() {
    let s = VisualState::default();
    assert_eq!(s.scale, 1.0);
    assert_eq!(s.opacity, 1.0);
    assert_eq!(s.contrast, 1.0);
    assert_eq!(s.saturation, 1.0);
    assert_eq!(s.offset(), Vec2::ZERO);
}

#[test]
fn bounds_validate_rejects_inverted_and_nan() {
    assert!(Bounds::new(0.0, 1.0).validate("x").is_ok());
    assert!(Bounds::exactly(2.0).validate("x").is_ok());
    assert!(Bounds::new(1.0, 0.0).validate("x").is_err());
    assert!(Bounds::new(f64::NAN, 0.0).validate("x").is_err());
}

#[test]
fn bounds_lerp_stays_inside() {
    let b = Bounds::new(-50.0, 50.0);
    assert_eq!(b.lerp(0.0), -50.0);
    assert_eq!(b.lerp(0.5), 0.0);
    assert!(b.contains(b.lerp(0.999)));
}
