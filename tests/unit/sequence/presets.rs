use super::*;

#[test]
fn every_named_preset_resolves_and_validates() {
    for name in names() {
        let cfg = by_name(name).unwrap();
        assert_eq!(cfg.name, *name);
        cfg.validate().unwrap();
    }
}

#[test]
fn unknown_preset_is_a_config_error() {
    let err = by_name("vanilla").unwrap_err();
    assert!(matches!(err, BurstlineError::Config(_)));
    assert!(err.to_string().contains("cocoa"));
}

#[test]
fn presets_differ_in_distance_multiplier() {
    let m: Vec<f64> = names()
        .iter()
        .map(|n| by_name(n).unwrap().explosion.distance_multiplier)
        .collect();
    assert_eq!(m, vec![2.5, 2.0, 3.0]);
}

#[test]
fn particle_sizes_stay_within_one_to_eight_px() {
    for name in names() {
        let p = by_name(name).unwrap().particles;
        assert!(p.size.min >= 1.0 && p.size.max <= 8.0, "{name}");
    }
}
