use crate::model::columns::DisplayColumn;
use crate::model::rows::TrialRow;

/// A source row paired with its displayed metric. The source row is never
/// modified.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasuredRow<'a> {
    pub row: &'a TrialRow,
    pub value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricTransform {
    pub column: DisplayColumn,
    pub uncap_results: bool,
    pub display_residuals: bool,
}

impl MetricTransform {
    /// Caps on the residuals scale, then converts to disintegration.
    pub fn apply(&self, residual: f64) -> f64 {
        let mut v = residual;
        if !self.uncap_results && v > 1.0 {
            v = 1.0;
        }
        if !self.display_residuals {
            v = 1.0 - v;
            if v < 0.0 {
                v = 0.0;
            }
        }
        v
    }

    pub fn measure<'a>(&self, row: &'a TrialRow) -> Option<MeasuredRow<'a>> {
        let residual = row.measurement(self.column)?;
        Some(MeasuredRow {
            row,
            value: self.apply(residual),
        })
    }
}

pub fn has_measurement(row: &TrialRow, column: DisplayColumn) -> bool {
    row.measurement(column).is_some()
}

/// Rows with no measurement in the chosen column are dropped, not zeroed.
pub fn transform_rows<'a>(
    rows: &[&'a TrialRow],
    transform: &MetricTransform,
) -> Vec<MeasuredRow<'a>> {
    rows.iter().filter_map(|&row| transform.measure(row)).collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_metric.rs"]
mod tests;
