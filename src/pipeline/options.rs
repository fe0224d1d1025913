use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::model::buckets::buckets_for;
use crate::model::columns::{ConditionColumn, TrialColumn};
use crate::model::rows::TrialRow;

pub const OPTION_COLUMNS: &[TrialColumn] = &[
    TrialColumn::MaterialClassI,
    TrialColumn::MaterialClassII,
    TrialColumn::MaterialClassIII,
    TrialColumn::TestMethod,
    TrialColumn::Technology,
    TrialColumn::ItemBrand,
    TrialColumn::ItemFormat,
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterOptions {
    pub columns: BTreeMap<&'static str, Vec<String>>,
    pub buckets: BTreeMap<&'static str, Vec<&'static str>>,
}

/// Positive controls sort last; everything else case-insensitively.
pub fn compare_option(a: &str, b: &str) -> Ordering {
    let a_pos = a.starts_with("Pos");
    let b_pos = b.starts_with("Pos");
    match (a_pos, b_pos) {
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        _ => a
            .to_lowercase()
            .cmp(&b.to_lowercase())
            .then_with(|| a.cmp(b)),
    }
}

pub fn unique_values(rows: &[TrialRow], column: TrialColumn) -> Vec<String> {
    let distinct: BTreeSet<&str> = rows.iter().map(|row| row.field(column)).collect();
    let mut values: Vec<String> = distinct.into_iter().map(str::to_string).collect();
    values.sort_by(|a, b| compare_option(a, b));
    values
}

pub fn list_options(rows: &[TrialRow]) -> FilterOptions {
    let columns = OPTION_COLUMNS
        .iter()
        .map(|&column| (column.header(), unique_values(rows, column)))
        .collect();
    let buckets = [
        ConditionColumn::Temperature,
        ConditionColumn::Moisture,
        ConditionColumn::Duration,
    ]
    .into_iter()
    .map(|column| {
        let labels = buckets_for(column).iter().map(|b| b.label).collect();
        (column.header(), labels)
    })
    .collect();
    FilterOptions { columns, buckets }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/options.rs"]
mod tests;
