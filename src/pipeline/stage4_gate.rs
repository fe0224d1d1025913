use std::collections::BTreeSet;

use crate::pipeline::stage3_intervals::ConditionTrialSets;
use crate::pipeline::stage5_metric::MeasuredRow;

/// Plain intersection; any empty input, or no input at all, gives the empty set.
pub fn intersect(sets: &[&BTreeSet<String>]) -> BTreeSet<String> {
    let Some((first, rest)) = sets.split_first() else {
        return BTreeSet::new();
    };
    if sets.iter().any(|s| s.is_empty()) {
        return BTreeSet::new();
    }
    first
        .iter()
        .filter(|id| rest.iter().all(|s| s.contains(*id)))
        .cloned()
        .collect()
}

pub fn qualifying_trial_ids(sets: &ConditionTrialSets) -> BTreeSet<String> {
    intersect(&[&sets.moisture, &sets.temperature, &sets.duration])
}

/// Keeps rows whose trial survived every operating-condition filter. Rows
/// without a matching operating-condition record never survive.
pub fn retain_trials<'a>(
    rows: Vec<MeasuredRow<'a>>,
    trial_ids: &BTreeSet<String>,
) -> Vec<MeasuredRow<'a>> {
    if trial_ids.is_empty() {
        return Vec::new();
    }
    rows.into_iter()
        .filter(|m| trial_ids.contains(&m.row.trial_id))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_gate.rs"]
mod tests;
