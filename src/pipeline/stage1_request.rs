use std::collections::BTreeMap;

use crate::error::{Halt, RequestError};
use crate::model::buckets::{buckets_for, find_bucket};
use crate::model::columns::{AggColumn, ConditionColumn, DisplayColumn};
use crate::model::selection::{ALL_SENTINEL, Selection};
use crate::model::summary::Suppression;

/// The incoming filter selection, wire keys to raw values.
pub type RawRequest = BTreeMap<String, String>;

pub const DEFAULT_TEST_METHOD: &str = "Mesh Bag";
pub const DEFAULT_TIMEPOINT: &str = "Final";

#[derive(Debug, Clone, PartialEq)]
pub struct QueryParams {
    pub agg_col: AggColumn,
    pub display_col: DisplayColumn,
    pub uncap_results: bool,
    pub display_residuals: bool,
    pub test_method: String,
    pub timepoint: String,
    pub technologies: Selection,
    pub materials: Selection,
    pub specific_materials: Selection,
    pub formats: Selection,
    pub brands: Selection,
    pub temperature: Selection,
    pub moisture: Selection,
    pub trial_durations: Selection,
}

impl QueryParams {
    pub fn condition_selection(&self, column: ConditionColumn) -> &Selection {
        match column {
            ConditionColumn::Temperature => &self.temperature,
            ConditionColumn::Moisture => &self.moisture,
            ConditionColumn::Duration => &self.trial_durations,
        }
    }
}

/// Splits a comma-joined value; an absent or empty value is an empty list.
pub fn split_list(raw: Option<&str>) -> Vec<String> {
    match raw {
        Some(s) if !s.is_empty() => s.split(',').map(str::to_string).collect(),
        _ => Vec::new(),
    }
}

fn non_empty<'a>(raw: &'a RawRequest, key: &str) -> Option<&'a str> {
    raw.get(key).map(String::as_str).filter(|s| !s.is_empty())
}

fn flag(raw: &RawRequest, key: &str) -> bool {
    raw.get(key).is_some_and(|v| v == "true")
}

pub fn normalize_request(raw: &RawRequest) -> Result<QueryParams, Halt> {
    let technologies = split_list(raw.get("technologies").map(String::as_str));
    let materials = split_list(raw.get("materials").map(String::as_str));
    let specific_materials = split_list(raw.get("specificMaterials").map(String::as_str));
    let formats = split_list(raw.get("formats").map(String::as_str));
    let brands = split_list(raw.get("brands").map(String::as_str));
    let temperature = split_list(raw.get("temperature").map(String::as_str));
    let moisture = split_list(raw.get("moisture").map(String::as_str));
    let trial_durations = split_list(raw.get("trialdurations").map(String::as_str));

    let incomplete = [
        &technologies,
        &materials,
        &specific_materials,
        &brands,
        &formats,
        &temperature,
        &moisture,
        &trial_durations,
    ]
    .iter()
    .any(|list| list.is_empty());
    if incomplete {
        return Err(Suppression::IncompleteSelection.into());
    }

    let agg_col = match non_empty(raw, "aggcol") {
        Some(v) => AggColumn::parse(v)?,
        None => AggColumn::default(),
    };
    let display_col = match non_empty(raw, "displaycol") {
        Some(v) => DisplayColumn::parse(v)?,
        None => DisplayColumn::default(),
    };

    Ok(QueryParams {
        agg_col,
        display_col,
        uncap_results: flag(raw, "uncapresults"),
        display_residuals: flag(raw, "displayresiduals"),
        test_method: non_empty(raw, "testmethod")
            .unwrap_or(DEFAULT_TEST_METHOD)
            .to_string(),
        timepoint: non_empty(raw, "timepoint")
            .unwrap_or(DEFAULT_TIMEPOINT)
            .to_string(),
        technologies: Selection::from_values(technologies),
        materials: Selection::from_values(materials),
        specific_materials: Selection::from_values(specific_materials),
        formats: Selection::from_values(formats),
        brands: Selection::from_values(brands),
        temperature: bucket_selection(ConditionColumn::Temperature, temperature)?,
        moisture: bucket_selection(ConditionColumn::Moisture, moisture)?,
        trial_durations: bucket_selection(ConditionColumn::Duration, trial_durations)?,
    })
}

fn dimension_name(column: ConditionColumn) -> &'static str {
    match column {
        ConditionColumn::Temperature => "temperature",
        ConditionColumn::Moisture => "moisture",
        ConditionColumn::Duration => "trial duration",
    }
}

/// Resolves bucket labels against the fixed dictionary. Selecting every
/// label, or the `All` sentinel, lifts the restriction.
pub fn bucket_selection(
    column: ConditionColumn,
    labels: Vec<String>,
) -> Result<Selection, RequestError> {
    if labels.iter().any(|l| l == ALL_SENTINEL) {
        return Ok(Selection::Unrestricted);
    }
    let buckets = buckets_for(column);
    for label in &labels {
        if find_bucket(buckets, label).is_none() {
            return Err(RequestError::UnknownBucket {
                dimension: dimension_name(column),
                label: label.clone(),
            });
        }
    }
    if buckets
        .iter()
        .all(|b| labels.iter().any(|l| l == b.label))
    {
        return Ok(Selection::Unrestricted);
    }
    Ok(Selection::Specific(labels))
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_request.rs"]
mod tests;
