use std::collections::BTreeSet;

use crate::model::buckets::{IntervalBucket, buckets_for, find_bucket};
use crate::model::columns::ConditionColumn;
use crate::model::rows::OperatingConditionRow;
use crate::model::selection::Selection;
use crate::pipeline::stage1_request::QueryParams;

fn covers_dictionary(labels: &[String], buckets: &[IntervalBucket]) -> bool {
    buckets
        .iter()
        .all(|b| labels.iter().any(|l| l == b.label))
}

/// Trial IDs whose `column` value falls in any selected bucket. An
/// unrestricted selection, or one naming every bucket, yields every trial in
/// `rows` regardless of its value.
pub fn classify_to_trial_ids(
    column: ConditionColumn,
    selection: &Selection,
    rows: &[OperatingConditionRow],
    buckets: &'static [IntervalBucket],
) -> BTreeSet<String> {
    let labels = match selection {
        Selection::Unrestricted => return all_trial_ids(rows),
        Selection::Specific(labels) => labels,
    };
    if covers_dictionary(labels, buckets) {
        return all_trial_ids(rows);
    }

    let selected: Vec<&IntervalBucket> = labels
        .iter()
        .filter_map(|label| find_bucket(buckets, label))
        .collect();

    let mut ids = BTreeSet::new();
    for row in rows {
        let Some(value) = row.value(column) else {
            continue;
        };
        if selected.iter().any(|b| b.contains(value)) {
            ids.insert(row.trial_id.clone());
        }
    }
    ids
}

pub fn all_trial_ids(rows: &[OperatingConditionRow]) -> BTreeSet<String> {
    rows.iter().map(|row| row.trial_id.clone()).collect()
}

#[derive(Debug, Clone)]
pub struct ConditionTrialSets {
    pub temperature: BTreeSet<String>,
    pub moisture: BTreeSet<String>,
    pub duration: BTreeSet<String>,
}

pub fn classify_conditions(
    rows: &[OperatingConditionRow],
    params: &QueryParams,
) -> ConditionTrialSets {
    let classify = |column: ConditionColumn| {
        classify_to_trial_ids(
            column,
            params.condition_selection(column),
            rows,
            buckets_for(column),
        )
    };
    let sets = ConditionTrialSets {
        temperature: classify(ConditionColumn::Temperature),
        moisture: classify(ConditionColumn::Moisture),
        duration: classify(ConditionColumn::Duration),
    };
    tracing::debug!(
        temperature = sets.temperature.len(),
        moisture = sets.moisture.len(),
        duration = sets.duration.len(),
        "operating condition trial sets"
    );
    sets
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_intervals.rs"]
mod tests;
