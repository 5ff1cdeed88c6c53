use super::*;
use crate::foundation::rng::{Rng64, ScriptedRandom};
use crate::sequence::presets;

#[test]
fn fixed_entries_are_returned_literally() {
    let table = presets::cocoa().destinations;
    let expected = [
        DestinationSpec::new(-60.0, -40.0, -60.0, 1.2),
        DestinationSpec::new(60.0, -50.0, 60.0, 0.8),
        DestinationSpec::new(-70.0, 10.0, -120.0, 1.1),
        DestinationSpec::new(75.0, 20.0, 90.0, 0.9),
        DestinationSpec::new(-40.0, 60.0, -160.0, 1.3),
        DestinationSpec::new(50.0, 55.0, 140.0, 1.0),
    ];
    assert_eq!(table.len(), expected.len());
    let mut rng = ScriptedRandom::new(vec![0.3]);
    for (i, e) in expected.iter().enumerate() {
        assert_eq!(table.destination_for(i, &mut rng), *e);
        assert_eq!(table.destination_for(i, &mut rng), *e);
    }
    // The fixed path never touches the random source.
    assert_eq!(rng.draws(), 0);
}

#[test]
fn fallback_stays_within_bounds_across_calls() {
    for table in [
        presets::cocoa().destinations,
        presets::ember().destinations,
        presets::citrus().destinations,
    ] {
        let mut rng = Rng64::new(5);
        for i in table.len()..table.len() + 200 {
            let spec = table.destination_for(i, &mut rng);
            assert!(table.fallback.contains(&spec), "{spec:?}");
        }
    }
}

#[test]
fn fallback_is_resampled_per_call() {
    let table = presets::cocoa().destinations;
    let mut rng = Rng64::new(17);
    let a = table.destination_for(99, &mut rng);
    let b = table.destination_for(99, &mut rng);
    assert_ne!(a, b);
}

#[test]
fn fallback_follows_injected_samples() {
    let table = presets::cocoa().destinations;
    let mut rng = ScriptedRandom::new(vec![0.0, 0.5, 0.25, 0.9]);
    let spec = table.destination_for(6, &mut rng);
    assert_eq!(spec, DestinationSpec::new(-50.0, 0.0, 90.0, 1.0));
}

#[test]
fn validate_rejects_non_finite_entries() {
    let mut table = presets::cocoa().destinations;
    assert!(table.validate().is_ok());
    table.entries.push(DestinationSpec::new(f64::INFINITY, 0.0, 0.0, 1.0));
    assert!(table.validate().is_err());
}
