use std::collections::BTreeSet;

use crate::model::columns::TrialColumn;
use crate::model::rows::TrialRow;
use crate::model::selection::Selection;
use crate::model::summary::Suppression;
use crate::model::thresholds::PrivacyThresholds;
use crate::pipeline::stage1_request::QueryParams;

pub fn filter_by_column<'a>(
    rows: &[&'a TrialRow],
    column: TrialColumn,
    selection: &Selection,
) -> Vec<&'a TrialRow> {
    if selection.is_unrestricted() {
        return rows.to_vec();
    }
    rows.iter()
        .copied()
        .filter(|row| selection.admits(row.field(column)))
        .collect()
}

pub fn distinct_trial_ids<'a>(rows: &[&'a TrialRow]) -> BTreeSet<&'a str> {
    rows.iter().map(|row| row.trial_id.as_str()).collect()
}

/// Test Method, Timepoint and Technology: the slice the trial-count gate sees.
pub fn filter_trial_facets<'a>(rows: &[&'a TrialRow], params: &QueryParams) -> Vec<&'a TrialRow> {
    let rows = filter_by_column(
        rows,
        TrialColumn::TestMethod,
        &Selection::single(&params.test_method),
    );
    let rows = filter_by_column(
        &rows,
        TrialColumn::Timepoint,
        &Selection::single(&params.timepoint),
    );
    filter_by_column(&rows, TrialColumn::Technology, &params.technologies)
}

pub fn check_technology_trials(
    rows: &[&TrialRow],
    test_method: &str,
    thresholds: &PrivacyThresholds,
) -> Result<usize, Suppression> {
    let n_trials = distinct_trial_ids(rows).len();
    let required = thresholds.technology_trials_for(test_method);
    if n_trials < required && thresholds.technology_gate_applies(test_method) {
        tracing::debug!(n_trials, required, "technology slice below trial threshold");
        return Err(Suppression::InsufficientTrials);
    }
    Ok(n_trials)
}

/// Material Class II/III, Item Format and Item Brand.
pub fn filter_item_facets<'a>(rows: &[&'a TrialRow], params: &QueryParams) -> Vec<&'a TrialRow> {
    let rows = filter_by_column(rows, TrialColumn::MaterialClassII, &params.materials);
    let rows = filter_by_column(
        &rows,
        TrialColumn::MaterialClassIII,
        &params.specific_materials,
    );
    let rows = filter_by_column(&rows, TrialColumn::ItemFormat, &params.formats);
    filter_by_column(&rows, TrialColumn::ItemBrand, &params.brands)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_facets.rs"]
mod tests;
