use std::collections::{BTreeSet, HashMap};

use crate::model::columns::AggColumn;
use crate::model::palette::{class_color, class_rank};
use crate::model::summary::{GroupSummary, Suppression};
use crate::model::thresholds::PrivacyThresholds;
use crate::pipeline::stage5_metric::MeasuredRow;
use crate::stats::box_stats;

#[derive(Debug, Clone)]
pub struct Stage6Output {
    pub groups: Vec<GroupSummary>,
    pub num_trials: usize,
}

pub fn check_data_floor(n_rows: usize, thresholds: &PrivacyThresholds) -> Result<(), Suppression> {
    if n_rows < thresholds.min_rows {
        return Err(Suppression::InsufficientData);
    }
    Ok(())
}

/// Groups by the aggregation column in order of first appearance.
pub fn group_rows<'a>(
    rows: &[MeasuredRow<'a>],
    agg_col: AggColumn,
) -> Vec<(String, Vec<MeasuredRow<'a>>)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(String, Vec<MeasuredRow<'a>>)> = Vec::new();
    for m in rows {
        let key = m.row.field(agg_col.column());
        match index.get(key) {
            Some(&idx) => groups[idx].1.push(*m),
            None => {
                index.insert(key, groups.len());
                groups.push((key.to_string(), vec![*m]));
            }
        }
    }
    groups
}

/// `Material Class I` comes from the group's first row.
pub fn summarize_group(key: &str, rows: &[MeasuredRow<'_>]) -> Option<GroupSummary> {
    let first = rows.first()?;
    let values: Vec<f64> = rows.iter().map(|m| m.value).collect();
    let stats = box_stats(&values)?;
    let material_class_i = first.row.material_class_i.clone();
    Some(GroupSummary {
        group_key: key.to_string(),
        count: rows.len(),
        color: class_color(&material_class_i).to_string(),
        material_class_i,
        lowerfence: stats.lowerfence,
        q1: stats.q1,
        median: stats.median,
        mean: stats.mean,
        q3: stats.q3,
        upperfence: stats.upperfence,
        max: stats.max,
        min: stats.min,
        outliers: stats.outliers,
    })
}

pub fn sort_by_class(groups: &mut [GroupSummary]) {
    groups.sort_by_key(|g| class_rank(&g.material_class_i));
}

pub fn run_stage6(
    rows: &[MeasuredRow<'_>],
    agg_col: AggColumn,
    thresholds: &PrivacyThresholds,
) -> Result<Stage6Output, Suppression> {
    check_data_floor(rows.len(), thresholds)?;

    let num_trials = rows
        .iter()
        .map(|m| m.row.trial_id.as_str())
        .collect::<BTreeSet<_>>()
        .len();

    let mut groups: Vec<GroupSummary> = group_rows(rows, agg_col)
        .iter()
        .filter_map(|(key, members)| summarize_group(key, members))
        .collect();
    sort_by_class(&mut groups);

    Ok(Stage6Output { groups, num_trials })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage6_summary.rs"]
mod tests;
