//! Property tests: soundness, completeness, determinism and earliest-sighting.

use proptest::prelude::*;
use sincecheck_core::{
    check_since_tags, compute_first_appearance, Element, ElementKey, ElementKind, Snapshot,
    ValidationOptions, Version, VersionSeries,
};
use std::collections::BTreeSet;

const PATHS: [&str; 6] = ["a.A", "a.B", "a.C", "b.D", "b.E", "c.F"];

/// presence[v][p]: whether PATHS[p] exists at analyzed version v + 1
/// tags[p]: declared tag on the verify snapshot (index into 1..=verify, or none)
fn scenario() -> impl Strategy<Value = (Vec<Vec<bool>>, Vec<bool>, Vec<Option<u64>>)> {
    (1usize..5).prop_flat_map(|versions| {
        (
            prop::collection::vec(prop::collection::vec(any::<bool>(), PATHS.len()), versions),
            prop::collection::vec(any::<bool>(), PATHS.len()),
            prop::collection::vec(
                prop::option::of(1u64..=(versions as u64 + 1)),
                PATHS.len(),
            ),
        )
    })
}

fn v(n: u64) -> Version {
    Version::parse(&n.to_string()).unwrap()
}

fn build(version: u64, present: &[bool], tags: Option<&[Option<u64>]>) -> Snapshot {
    let mut builder = Snapshot::builder("m", v(version));
    for (i, path) in PATHS.iter().enumerate() {
        if present[i] {
            let mut element = Element::new(ElementKind::Class, *path);
            if let Some(Some(tag)) = tags.map(|t| t[i]) {
                element = element.with_since(tag.to_string());
            }
            builder.push(element);
        }
    }
    builder.build().unwrap()
}

proptest! {
    #[test]
    fn prop_one_diagnostic_per_mismatch((presence, verify_presence, tags) in scenario()) {
        let versions = presence.len() as u64;
        let verify_version = versions + 1;
        let snapshots: Vec<Snapshot> = presence
            .iter()
            .enumerate()
            .map(|(i, present)| build(i as u64 + 1, present, None))
            .collect();
        let verify = build(verify_version, &verify_presence, Some(tags.as_slice()));
        let tokens: Vec<String> = (1..=versions).map(|n| n.to_string()).collect();
        let series = VersionSeries::parse(&tokens, Some(verify_version.to_string().as_str())).unwrap();

        let diagnostics =
            check_since_tags(&series, &snapshots, &verify, &ValidationOptions::default()).unwrap();

        let mut expected_paths = BTreeSet::new();
        for (p, path) in PATHS.iter().enumerate() {
            if !verify_presence[p] {
                continue;
            }
            let expected = presence
                .iter()
                .position(|present| present[p])
                .map(|i| i as u64 + 1)
                .unwrap_or(verify_version);
            if tags[p] != Some(expected) {
                expected_paths.insert(path.to_string());
            }
        }

        let reported: Vec<String> = diagnostics.iter().map(|d| d.element_path.clone()).collect();
        let reported_set: BTreeSet<String> = reported.iter().cloned().collect();
        prop_assert_eq!(reported.len(), reported_set.len());
        prop_assert_eq!(reported_set, expected_paths);

        let mut sorted = reported.clone();
        sorted.sort();
        prop_assert_eq!(&sorted, &reported);

        let again =
            check_since_tags(&series, &snapshots, &verify, &ValidationOptions::default()).unwrap();
        prop_assert_eq!(diagnostics, again);
    }

    #[test]
    fn prop_first_appearance_is_earliest_presence(presence in prop::collection::vec(
        prop::collection::vec(any::<bool>(), PATHS.len()), 1..6)
    ) {
        let snapshots: Vec<Snapshot> = presence
            .iter()
            .enumerate()
            .map(|(i, present)| build(i as u64 + 1, present, None))
            .collect();
        let first = compute_first_appearance(&snapshots).unwrap();

        for (p, path) in PATHS.iter().enumerate() {
            let key = ElementKey::new(ElementKind::Class, *path);
            let earliest = presence.iter().position(|present| present[p]).map(|i| v(i as u64 + 1));
            prop_assert_eq!(first.get(&key).cloned(), earliest);
        }
    }
}
