use serde::Serialize;

use crate::model::summary::QueryOutcome;
use crate::pipeline::operating_conditions::ConditionsTable;
use crate::pipeline::options::FilterOptions;

fn to_json<T: Serialize>(value: &T) -> std::io::Result<String> {
    serde_json::to_string_pretty(value).map_err(std::io::Error::other)
}

/// `{"data": [...], "numTrials": n}` or `{"message": "..."}`.
pub fn render_outcome_json(outcome: &QueryOutcome) -> std::io::Result<String> {
    to_json(outcome)
}

pub fn render_options_json(options: &FilterOptions) -> std::io::Result<String> {
    to_json(options)
}

/// One object per record, keys in column order.
pub fn render_conditions_json(table: &ConditionsTable) -> std::io::Result<String> {
    to_json(table)
}
