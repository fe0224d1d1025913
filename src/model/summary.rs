use serde::Serialize;

/// Box-plot statistics for one value of the aggregation column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupSummary {
    #[serde(rename = "aggCol")]
    pub group_key: String,
    pub count: usize,
    #[serde(rename = "Material Class I")]
    pub material_class_i: String,
    pub lowerfence: f64,
    pub q1: f64,
    pub median: f64,
    pub mean: f64,
    pub q3: f64,
    pub upperfence: f64,
    pub max: f64,
    pub min: f64,
    pub outliers: Vec<f64>,
    pub color: String,
}

/// Expected reasons to withhold a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suppression {
    IncompleteSelection,
    InsufficientTrials,
    InsufficientData,
}

impl Suppression {
    pub fn message(self) -> &'static str {
        match self {
            Suppression::IncompleteSelection => {
                "\u{201d}None\u{201d} is selected for at least one filtering criteria. Please ensure you have at least one option selected for each filter."
            }
            Suppression::InsufficientTrials => {
                "There are not enough trials for the selected technology. Please select more options."
            }
            Suppression::InsufficientData => {
                "There is not enough data for the selected options. Please select more options."
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum QueryOutcome {
    Data {
        data: Vec<GroupSummary>,
        #[serde(rename = "numTrials")]
        num_trials: usize,
    },
    Message {
        message: String,
    },
}

impl QueryOutcome {
    pub fn suppressed(reason: Suppression) -> Self {
        QueryOutcome::Message {
            message: reason.message().to_string(),
        }
    }
}
