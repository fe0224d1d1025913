use crate::model::columns::ConditionColumn;

/// A named range over one operating-condition measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntervalBucket {
    pub label: &'static str,
    pub low: f64,
    pub high: f64,
    pub inclusive: bool,
}

impl IntervalBucket {
    const fn new(label: &'static str, low: f64, high: f64, inclusive: bool) -> Self {
        Self {
            label,
            low,
            high,
            inclusive,
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        if self.inclusive {
            value >= self.low && value <= self.high
        } else {
            value > self.low && value < self.high
        }
    }
}

const TEMPERATURE_BUCKETS: &[IntervalBucket] = &[
    IntervalBucket::new("<140F", f64::NEG_INFINITY, 140.0, false),
    IntervalBucket::new("140-150F", 140.0, 150.0, true),
    IntervalBucket::new("150-160F", 150.0, 160.0, true),
    IntervalBucket::new(">160F", 160.0, f64::INFINITY, false),
];

const MOISTURE_BUCKETS: &[IntervalBucket] = &[
    IntervalBucket::new("<40%", f64::NEG_INFINITY, 0.4, false),
    IntervalBucket::new("40-45%", 0.4, 0.45, true),
    IntervalBucket::new("45-50%", 0.45, 0.5, true),
    IntervalBucket::new("50-55%", 0.5, 0.55, true),
    IntervalBucket::new("55-60%", 0.55, 0.6, true),
    IntervalBucket::new(">60%", 0.6, f64::INFINITY, false),
];

// Day counts overlap at 59 and 89; a trial on a boundary lands in both buckets.
const DURATION_BUCKETS: &[IntervalBucket] = &[
    IntervalBucket::new("40-59 Days", 40.0, 59.0, true),
    IntervalBucket::new("60-90 Days", 59.0, 89.0, true),
    IntervalBucket::new("90+ Days", 89.0, f64::INFINITY, false),
];

pub fn buckets_for(column: ConditionColumn) -> &'static [IntervalBucket] {
    match column {
        ConditionColumn::Temperature => TEMPERATURE_BUCKETS,
        ConditionColumn::Moisture => MOISTURE_BUCKETS,
        ConditionColumn::Duration => DURATION_BUCKETS,
    }
}

pub fn find_bucket(buckets: &'static [IntervalBucket], label: &str) -> Option<&'static IntervalBucket> {
    buckets.iter().find(|b| b.label == label)
}
