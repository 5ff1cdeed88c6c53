use super::*;
use crate::foundation::core::Property;

#[test]
fn with_stage_creates_full_cast() {
    let s = HeadlessSurface::with_stage(6);
    assert_eq!(s.count(Role::Ingredient), 6);
    for role in [
        Role::Hero,
        Role::IntroCaption,
        Role::FinalCaption,
        Role::ParticleContainer,
        Role::Preloader,
    ] {
        assert_eq!(s.count(role), 1, "{role:?}");
        assert!(s.query_one(role).is_some());
    }
    assert_eq!(s.count(Role::Particle), 0);
}

#[test]
fn with_roles_omits_missing_singletons() {
    let s = HeadlessSurface::with_roles(2, &[Role::IntroCaption]);
    assert!(s.query_one(Role::Hero).is_none());
    assert!(s.query_one(Role::IntroCaption).is_some());
    assert_eq!(s.query_all(Role::Ingredient).len(), 2);
}

#[test]
fn particles_are_parented_to_container() {
    let mut s = HeadlessSurface::new();
    let c = s.add(Role::ParticleContainer);
    let style = ParticleStyle {
        width: 2.0,
        height: 3.0,
        color: "#ffd700".to_owned(),
    };
    let p = s.create_particle(c, style.clone());
    assert_eq!(s.children(c), vec![p]);
    assert_eq!(s.get(p).unwrap().style.as_ref(), Some(&style));
    assert_eq!(s.query_all(Role::Particle), vec![p]);
}

#[test]
fn apply_and_remove_ignore_unknown_ids() {
    let mut s = HeadlessSurface::new();
    let a = s.add(Role::Hero);
    let st = VisualState::default().with(Property::Scale, 2.0);
    s.apply(a, &st);
    s.apply(ElementId(999), &st);
    assert_eq!(s.state(a), Some(&st));
    assert_eq!(s.apply_count(), 1);
    s.remove(ElementId(999));
    s.remove(a);
    assert!(s.get(a).is_none());
}
