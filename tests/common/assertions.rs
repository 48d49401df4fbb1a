//! Custom assertions for integration tests
//!
//! Provides helpers for validating search paths against the dataset and
//! for parsing CLI output.

use std::collections::HashSet;

use degrees_engine::{DatasetIndex, PathStep, PersonId};
use serde_json::Value;

/// Assert that output is valid JSON and return parsed value
pub fn assert_valid_json(output: &str, context: &str) -> Value {
    serde_json::from_str(output).unwrap_or_else(|e| {
        panic!(
            "Expected valid JSON ({}): {}\nOutput:\n{}",
            context, e, output
        )
    })
}

/// Assert that `path` is a cycle-free chain of shared movies from `source`
/// to `target`
pub fn assert_valid_path(
    index: &DatasetIndex,
    source: &PersonId,
    target: &PersonId,
    path: &[PathStep],
) {
    assert!(!path.is_empty(), "path from {} to {} is empty", source, target);
    assert_eq!(
        &path.last().unwrap().person_id,
        target,
        "path does not end at target: {:?}",
        path
    );

    let mut seen: HashSet<&PersonId> = HashSet::from([source]);
    let mut previous = source;
    for step in path {
        let movie = index
            .movie(&step.movie_id)
            .unwrap_or_else(|| panic!("unknown movie {} in path", step.movie_id));
        assert!(
            movie.star_ids.contains(previous) && movie.star_ids.contains(&step.person_id),
            "{} and {} do not share movie {}",
            previous,
            step.person_id,
            step.movie_id
        );
        assert!(
            seen.insert(&step.person_id),
            "person {} repeats in path {:?}",
            step.person_id,
            path
        );
        previous = &step.person_id;
    }
}

/// Assert that stdout contains the given line
pub fn assert_has_line(output: &str, line: &str) {
    assert!(
        output.lines().any(|l| l == line),
        "Expected line '{}' in output:\n{}",
        line,
        output
    );
}
