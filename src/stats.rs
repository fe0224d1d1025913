use std::cmp::Ordering;

pub fn sort_ascending(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    sorted
}

/// Linear-interpolation quantile over ascending values (R type 7).
pub fn quantile_sorted(sorted: &[f64], p: f64) -> f64 {
    let n = sorted.len();
    if n == 0 {
        return f64::NAN;
    }
    if p <= 0.0 || n < 2 {
        return sorted[0];
    }
    if p >= 1.0 {
        return sorted[n - 1];
    }
    let h = p * (n - 1) as f64;
    let lo = h.floor() as usize;
    let hi = h.ceil() as usize;
    sorted[lo] + (h - lo as f64) * (sorted[hi] - sorted[lo])
}

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Half-way cases round toward positive infinity.
pub fn round3(v: f64) -> f64 {
    (v * 1000.0 + 0.5).floor() / 1000.0
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoxStats {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub mean: f64,
    pub q3: f64,
    pub max: f64,
    pub lowerfence: f64,
    pub upperfence: f64,
    pub outliers: Vec<f64>,
}

/// Five-number summary with Tukey fences clipped to the observed range.
/// Returns `None` for an empty slice.
pub fn box_stats(values: &[f64]) -> Option<BoxStats> {
    if values.is_empty() {
        return None;
    }
    let sorted = sort_ascending(values);
    let min = sorted[0];
    let max = sorted[sorted.len() - 1];
    let q1 = quantile_sorted(&sorted, 0.25);
    let q3 = quantile_sorted(&sorted, 0.75);
    let iqr = q3 - q1;
    let upperfence = (q3 + 1.5 * iqr).min(max);
    let lowerfence = (q1 - 1.5 * iqr).max(min);
    let outliers = sorted
        .iter()
        .copied()
        .filter(|&v| v > upperfence || v < lowerfence)
        .collect();

    Some(BoxStats {
        min,
        q1,
        median: round3(quantile_sorted(&sorted, 0.5)),
        mean: round3(mean(&sorted)),
        q3,
        max,
        lowerfence,
        upperfence,
        outliers,
    })
}

#[cfg(test)]
#[path = "../tests/src_inline/stats.rs"]
mod tests;
