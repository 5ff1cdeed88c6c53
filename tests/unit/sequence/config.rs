use super::*;
use crate::foundation::core::Bounds;
use crate::sequence::presets;

#[test]
fn json_round_trip_preserves_preset() {
    let cfg = presets::cocoa();
    let json = cfg.to_json_pretty().unwrap();
    let back = SequenceConfig::from_json_str(&json).unwrap();
    assert_eq!(back, cfg);
}

#[test]
fn timing_is_flattened_and_accepts_web_curve_names() {
    let mut v = serde_json::to_value(presets::ember()).unwrap();
    assert!(v["explosion"].get("timing").is_none());
    v["explosion"]["ease"] = serde_json::json!("power3.out");
    let cfg: SequenceConfig = serde_json::from_value(v).unwrap();
    assert_eq!(cfg.explosion.timing.ease, Ease::OutQuart);
}

#[test]
fn missing_ease_defaults_to_out_quad() {
    let mut v = serde_json::to_value(presets::cocoa()).unwrap();
    v["fade"].as_object_mut().unwrap().remove("ease");
    let cfg: SequenceConfig = serde_json::from_value(v).unwrap();
    assert_eq!(cfg.fade.timing.ease, Ease::OutQuad);
}

#[test]
fn final_caption_before_reveal_midpoint_is_rejected() {
    let mut cfg = presets::cocoa();
    cfg.final_caption.timing.start = cfg.hero.reveal.timing.midpoint() - 0.01;
    let err = cfg.validate().unwrap_err();
    assert!(err.to_string().contains("midpoint"));

    cfg.final_caption.timing.start = cfg.hero.reveal.timing.midpoint();
    cfg.validate().unwrap();
}

#[test]
fn fade_before_reveal_is_rejected() {
    let mut cfg = presets::cocoa();
    cfg.fade.timing.start = cfg.hero.reveal.timing.start - 0.5;
    assert!(cfg.validate().is_err());
}

#[test]
fn drift_must_follow_explosion() {
    let mut cfg = presets::cocoa();
    if let Some(d) = cfg.drift.as_mut() {
        d.timing.start = 0.0;
    }
    assert!(cfg.validate().is_err());
}

#[test]
fn zero_duration_and_bad_anticipation_are_rejected() {
    let mut cfg = presets::citrus();
    cfg.explosion.timing.duration = 0.0;
    assert!(cfg.validate().is_err());

    let mut cfg = presets::citrus();
    cfg.anticipation.scale = 1.2;
    assert!(cfg.validate().is_err());
}

#[test]
fn anticipation_must_contract_below_hero_rest() {
    let mut cfg = presets::ember();
    cfg.anticipation.scale = cfg.hero.rest_scale;
    let err = cfg.validate().unwrap_err();
    assert!(err.to_string().contains("rest scale"));

    for cfg in [presets::cocoa(), presets::ember(), presets::citrus()] {
        assert!(cfg.anticipation.scale < cfg.hero.rest_scale, "{}", cfg.name);
    }
}

#[test]
fn explosion_before_anticipation_is_rejected() {
    let mut cfg = presets::cocoa();
    cfg.anticipation.timing.start = 2.0;
    assert!(cfg.validate().is_err());

    cfg.anticipation.timing.start = cfg.explosion.timing.start;
    cfg.validate().unwrap();
}

#[test]
fn hero_reveal_must_be_the_longest_phase() {
    let mut cfg = presets::cocoa();
    cfg.hero.reveal.timing.duration = 1.0;
    let err = cfg.validate().unwrap_err();
    assert!(err.to_string().contains("longest"));

    let mut cfg = presets::citrus();
    cfg.particles.duration = Bounds::new(1.0, cfg.hero.reveal.timing.duration + 0.5);
    assert!(cfg.validate().is_err());
}

#[test]
fn depth_blur_amount_respects_threshold() {
    let d = DepthBlur {
        factor: 10.0,
        threshold: 2.0,
    };
    assert_eq!(d.amount(1.0), None);
    assert_eq!(d.amount(0.8), None);
    assert!((d.amount(1.3).unwrap() - 3.0).abs() < 1e-9);
}

#[test]
fn unreadable_path_is_a_config_error() {
    let err = SequenceConfig::from_json_path(Path::new("does/not/exist.json")).unwrap_err();
    assert!(matches!(err, BurstlineError::Config(_)));
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = SequenceConfig::from_json_str("{\"name\": 3}").unwrap_err();
    assert!(matches!(err, BurstlineError::Serde(_)));
}
