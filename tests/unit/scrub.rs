use std::collections::BTreeMap;

use super::*;
use crate::animation::descriptor::{Phase, TweenDescriptor};
use crate::animation::ease::Ease;
use crate::foundation::core::{ElementId, Property, Role, VisualState};
use crate::surface::HeadlessSurface;

fn driver_for(surface: &mut HeadlessSurface) -> (ScrubDriver, ElementId) {
    let id = surface.add(Role::Hero);
    let tl = Timeline::new(
        BTreeMap::from([(id, VisualState::default())]),
        vec![
            TweenDescriptor::new(Phase::HeroReveal, vec![id], 0.0, 4.0)
                .ease(Ease::Linear)
                .to(Property::Scale, 2.0),
        ],
    )
    .unwrap();
    (ScrubDriver::new(tl), id)
}

#[test]
fn clamp_progress_handles_out_of_range_and_nan() {
    assert_eq!(clamp_progress(-0.5), 0.0);
    assert_eq!(clamp_progress(1.5), 1.0);
    assert_eq!(clamp_progress(f64::NAN), 0.0);
    assert_eq!(clamp_progress(0.25), 0.25);
}

#[test]
fn binding_maps_container_scroll_range() {
    let b = ScrollBinding::for_container(100.0, 3000.0, 1000.0).unwrap();
    assert_eq!(b.start_px, 100.0);
    assert_eq!(b.end_px, 2100.0);
    assert_eq!(b.progress(0.0), 0.0);
    assert_eq!(b.progress(1100.0), 0.5);
    assert_eq!(b.progress(9999.0), 1.0);
}

#[test]
fn binding_with_empty_range_is_a_step() {
    let b = ScrollBinding::new(50.0, 50.0).unwrap();
    assert_eq!(b.progress(49.0), 0.0);
    assert_eq!(b.progress(50.0), 1.0);
    assert!(ScrollBinding::new(f64::NAN, 1.0).is_err());
}

#[test]
fn progress_maps_linearly_onto_time() {
    let mut surface = HeadlessSurface::new();
    let (driver, id) = driver_for(&mut surface);
    assert_eq!(driver.time_for(0.25), 1.0);
    assert_eq!(driver.set_scroll_progress(&mut surface, 0.5), 0.5);
    assert_eq!(surface.state(id).unwrap().scale, 1.5);
}

#[test]
fn repeated_progress_is_idempotent() {
    let mut surface = HeadlessSurface::new();
    let (driver, id) = driver_for(&mut surface);
    driver.set_scroll_progress(&mut surface, 0.3);
    let first = *surface.state(id).unwrap();
    for _ in 0..5 {
        driver.set_scroll_progress(&mut surface, 0.3);
    }
    assert_eq!(*surface.state(id).unwrap(), first);
}

#[test]
fn scrubbing_back_and_forth_depends_only_on_progress() {
    let mut a = HeadlessSurface::new();
    let (driver_a, id_a) = driver_for(&mut a);
    for p in [0.0, 0.9, 0.1, 1.0, 0.4] {
        driver_a.set_scroll_progress(&mut a, p);
    }

    let mut b = HeadlessSurface::new();
    let (driver_b, id_b) = driver_for(&mut b);
    driver_b.set_scroll_progress(&mut b, 0.4);

    assert_eq!(a.state(id_a), b.state(id_b));
}

#[test]
fn out_of_range_progress_is_clamped() {
    let mut surface = HeadlessSurface::new();
    let (driver, id) = driver_for(&mut surface);
    assert_eq!(driver.set_scroll_progress(&mut surface, 7.0), 1.0);
    assert_eq!(surface.state(id).unwrap().scale, 2.0);
    assert_eq!(driver.set_scroll_progress(&mut surface, -1.0), 0.0);
    assert_eq!(surface.state(id).unwrap().scale, 1.0);
}

#[test]
fn smoother_converges_without_overshoot() {
    let mut s = ScrubSmoother::new(1.0, 0.0);
    s.set_target(1.0);
    let mut last = 0.0;
    for _ in 0..240 {
        let v = s.tick(1.0 / 60.0);
        assert!(v >= last && v <= 1.0);
        last = v;
    }
    assert!(s.is_settled());
    assert_eq!(s.current(), 1.0);
}

#[test]
fn smoother_lags_behind_target() {
    let mut s = ScrubSmoother::new(1.0, 0.0);
    s.set_target(1.0);
    let v = s.tick(0.1);
    assert!(v > 0.0 && v < 1.0);
    assert_eq!(s.target(), 1.0);
}

#[test]
fn zero_lag_smoother_passes_through() {
    let mut s = ScrubSmoother::new(0.0, 0.2);
    s.set_target(0.8);
    assert_eq!(s.current(), 0.8);
    assert_eq!(s.tick(0.016), 0.8);
}
