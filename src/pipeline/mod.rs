pub mod operating_conditions;
pub mod options;
pub mod stage1_request;
pub mod stage2_facets;
pub mod stage3_intervals;
pub mod stage4_gate;
pub mod stage5_metric;
pub mod stage6_summary;

use crate::model::rows::{Dataset, TrialRow};
use crate::model::summary::{QueryOutcome, Suppression};
use crate::model::thresholds::PrivacyThresholds;
use stage1_request::QueryParams;
use stage2_facets::{check_technology_trials, filter_item_facets, filter_trial_facets};
use stage3_intervals::classify_conditions;
use stage4_gate::{qualifying_trial_ids, retain_trials};
use stage5_metric::{MetricTransform, has_measurement, transform_rows};
use stage6_summary::run_stage6;

/// Runs every stage after normalization. Suppressions come back as a
/// message outcome, never alongside data.
pub fn run_query(
    dataset: &Dataset,
    params: &QueryParams,
    thresholds: &PrivacyThresholds,
) -> QueryOutcome {
    match summarize(dataset, params, thresholds) {
        Ok(outcome) => outcome,
        Err(reason) => {
            tracing::info!(?reason, "result suppressed");
            QueryOutcome::suppressed(reason)
        }
    }
}

fn summarize(
    dataset: &Dataset,
    params: &QueryParams,
    thresholds: &PrivacyThresholds,
) -> Result<QueryOutcome, Suppression> {
    let rows: Vec<&TrialRow> = dataset
        .trials
        .iter()
        .filter(|row| has_measurement(row, params.display_col))
        .collect();
    tracing::debug!(rows = rows.len(), "rows with a measurement");

    let rows = filter_trial_facets(&rows, params);
    let n_trials = check_technology_trials(&rows, &params.test_method, thresholds)?;
    tracing::debug!(rows = rows.len(), trials = n_trials, "after trial facets");

    let rows = filter_item_facets(&rows, params);
    tracing::debug!(rows = rows.len(), "after item facets");

    let transform = MetricTransform {
        column: params.display_col,
        uncap_results: params.uncap_results,
        display_residuals: params.display_residuals,
    };
    let measured = transform_rows(&rows, &transform);

    let sets = classify_conditions(&dataset.conditions, params);
    let trial_ids = qualifying_trial_ids(&sets);
    let measured = retain_trials(measured, &trial_ids);
    tracing::debug!(
        rows = measured.len(),
        qualifying_trials = trial_ids.len(),
        "after operating conditions"
    );

    let out = run_stage6(&measured, params.agg_col, thresholds)?;
    Ok(QueryOutcome::Data {
        data: out.groups,
        num_trials: out.num_trials,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/tests.rs"]
mod tests;
