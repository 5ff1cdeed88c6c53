use super::*;
use crate::foundation::core::Role;
use crate::foundation::rng::{Rng64, ScriptedRandom};
use crate::surface::HeadlessSurface;

fn config(count: usize) -> ParticleConfig {
    ParticleConfig {
        count,
        size: Bounds::new(1.0, 8.0),
        velocity: Bounds::new(50.0, 250.0),
        duration: Bounds::new(1.0, 3.0),
        start_opacity: 0.8,
        start_scale: Bounds::new(0.0, 0.5),
        ease: Ease::OutExpo,
        color: "#ffd700".to_owned(),
        blur: 1.0,
    }
}

#[test]
fn generates_exact_count_with_sizes_in_bounds() {
    let mut surface = HeadlessSurface::new();
    let container = surface.add(Role::ParticleContainer);
    let cfg = config(40);
    let particles = generate_particles(&mut surface, container, &cfg, &mut Rng64::new(3));

    assert_eq!(particles.len(), 40);
    assert_eq!(surface.count(Role::Particle), 40);
    assert_eq!(surface.children(container).len(), 40);
    for p in &particles {
        assert!(cfg.size.contains(p.style.width));
        assert!(cfg.size.contains(p.style.height));
    }
}

#[test]
fn particles_start_invisible_and_centered() {
    let mut surface = HeadlessSurface::new();
    let container = surface.add(Role::ParticleContainer);
    let cfg = config(3);
    let particles = generate_particles(&mut surface, container, &cfg, &mut Rng64::new(9));
    for p in particles {
        let st = surface.state(p.id).unwrap();
        assert_eq!(st.opacity, 0.0);
        assert_eq!(st.offset(), Vec2::ZERO);
        assert_eq!(st.scale, 1.0);
        assert_eq!(st.rotation, 0.0);
    }
}

#[test]
fn scripted_source_pins_sizes() {
    let mut surface = HeadlessSurface::new();
    let container = surface.add(Role::ParticleContainer);
    let mut rng = ScriptedRandom::new(vec![0.0, 0.5]);
    let particles = generate_particles(&mut surface, container, &config(1), &mut rng);
    assert_eq!(particles[0].style.width, 1.0);
    assert_eq!(particles[0].style.height, 4.5);
    assert_eq!(rng.draws(), 2);
}

#[test]
fn zero_count_creates_nothing() {
    let mut surface = HeadlessSurface::new();
    let container = surface.add(Role::ParticleContainer);
    let particles = generate_particles(&mut surface, container, &config(0), &mut Rng64::new(1));
    assert!(particles.is_empty());
    assert_eq!(surface.count(Role::Particle), 0);
}

#[test]
fn burst_distance_and_duration_stay_in_bounds() {
    let cfg = config(0);
    let mut rng = Rng64::new(11);
    for _ in 0..500 {
        let b = Burst::sample(&cfg, &mut rng);
        let dist = b.destination.hypot();
        assert!(dist >= cfg.velocity.min - 1e-9 && dist <= cfg.velocity.max + 1e-9);
        assert!(cfg.duration.contains(b.duration));
        assert!(cfg.start_scale.contains(b.start_scale));
    }
}

#[test]
fn validate_rejects_bad_ranges() {
    let mut cfg = config(1);
    assert!(cfg.validate().is_ok());
    cfg.size = Bounds::new(-1.0, 2.0);
    assert!(cfg.validate().is_err());

    let mut cfg = config(1);
    cfg.duration = Bounds::new(0.0, 1.0);
    assert!(cfg.validate().is_err());

    let mut cfg = config(1);
    cfg.start_opacity = 1.5;
    assert!(cfg.validate().is_err());
}
