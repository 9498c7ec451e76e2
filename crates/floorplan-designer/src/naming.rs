//! Area naming
//!
//! Pure helpers that read plan state and never touch it.

use std::collections::HashSet;

use crate::model::Plan;

const AREA_NAME_PREFIX: &str = "Area";

fn taken_names(plan: &Plan) -> HashSet<&str> {
    plan.areas.iter().map(|a| a.name.as_str()).collect()
}

/// `"Area N"` with the smallest `N >= 1` no area already uses.
pub fn next_area_name(plan: &Plan) -> String {
    let taken = taken_names(plan);
    (1..)
        .map(|n| format!("{} {}", AREA_NAME_PREFIX, n))
        .find(|name| !taken.contains(name.as_str()))
        .unwrap_or_else(|| AREA_NAME_PREFIX.to_string())
}

/// `n` fresh sequential names, none clashing with the plan or each other.
pub fn next_area_names(plan: &Plan, n: usize) -> Vec<String> {
    let taken = taken_names(plan);
    (1..)
        .map(|i| format!("{} {}", AREA_NAME_PREFIX, i))
        .filter(|name| !taken.contains(name.as_str()))
        .take(n)
        .collect()
}

/// `desired` if free, otherwise `desired (2)`, `desired (3)`, ...
pub fn unique_name(plan: &Plan, desired: &str) -> String {
    let taken = taken_names(plan);
    if !taken.contains(desired) {
        return desired.to_string();
    }
    (2..)
        .map(|n| format!("{} ({})", desired, n))
        .find(|name| !taken.contains(name.as_str()))
        .unwrap_or_else(|| desired.to_string())
}

/// Deterministic names for the pieces of a divided area: `base-1`, `base-2`, ...
pub fn partition_names(base: &str, count: usize) -> Vec<String> {
    (1..=count).map(|i| format!("{}-{}", base, i)).collect()
}
