//! Drill-target extraction.
//!
//! Which parts of a result can be interactively drilled into is derived
//! entirely from the result descriptor: every attribute and every measure is
//! a candidate target. Descriptors that repeat a `local_id` across
//! dimensions contribute a single target.
//!
//! Two entry points exist because the initializer's degraded error branches
//! differ in where a descriptor is still available: a (possibly partial)
//! data view, or the bare execution result.

use std::collections::HashSet;

use gridflow_core::traits::ExecutionView;
use gridflow_core::types::{AvailableDrillTargets, DataView, ResultDescriptor};

/// Compute the drill targets for a page of data.
#[must_use]
pub fn available_drill_targets(view: &DataView) -> AvailableDrillTargets {
    targets_from_descriptor(&view.descriptor)
}

/// Compute the drill targets directly from an execution result.
///
/// Used when no data view is available, e.g. after an "unexpected response"
/// failure while reading the first page.
#[must_use]
pub fn available_drill_targets_from_result(result: &dyn ExecutionView) -> AvailableDrillTargets {
    targets_from_descriptor(result.descriptor())
}

fn targets_from_descriptor(descriptor: &ResultDescriptor) -> AvailableDrillTargets {
    let mut seen: HashSet<&str> = HashSet::new();
    let attributes = descriptor
        .attributes
        .iter()
        .filter(|a| seen.insert(a.local_id.as_str()))
        .cloned()
        .collect();

    seen.clear();
    let measures = descriptor
        .measures
        .iter()
        .filter(|m| seen.insert(m.local_id.as_str()))
        .cloned()
        .collect();

    AvailableDrillTargets {
        attributes,
        measures,
    }
}
