use crate::error::RequestError;

pub const TRIAL_ID: &str = "Trial ID";

/// Categorical columns of the per-item trial table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TrialColumn {
    TestMethod,
    Timepoint,
    Technology,
    MaterialClassI,
    MaterialClassII,
    MaterialClassIII,
    ItemFormat,
    ItemBrand,
}

impl TrialColumn {
    pub fn header(self) -> &'static str {
        match self {
            TrialColumn::TestMethod => "Test Method",
            TrialColumn::Timepoint => "Timepoint",
            TrialColumn::Technology => "Technology",
            TrialColumn::MaterialClassI => "Material Class I",
            TrialColumn::MaterialClassII => "Material Class II",
            TrialColumn::MaterialClassIII => "Material Class III",
            TrialColumn::ItemFormat => "Item Format",
            TrialColumn::ItemBrand => "Item Brand",
        }
    }
}

pub fn trial_column_order() -> &'static [TrialColumn] {
    &[
        TrialColumn::TestMethod,
        TrialColumn::Timepoint,
        TrialColumn::Technology,
        TrialColumn::MaterialClassI,
        TrialColumn::MaterialClassII,
        TrialColumn::MaterialClassIII,
        TrialColumn::ItemFormat,
        TrialColumn::ItemBrand,
    ]
}

/// Columns a result may be grouped by. Every one of them sits at or below
/// `Material Class I` in the material hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AggColumn {
    #[default]
    MaterialClassI,
    MaterialClassII,
    MaterialClassIII,
    ItemFormat,
}

impl AggColumn {
    pub fn parse(value: &str) -> Result<Self, RequestError> {
        match value {
            "Material Class I" => Ok(AggColumn::MaterialClassI),
            "Material Class II" => Ok(AggColumn::MaterialClassII),
            "Material Class III" => Ok(AggColumn::MaterialClassIII),
            "Item Format" => Ok(AggColumn::ItemFormat),
            other => Err(RequestError::UnsupportedValue {
                key: "aggcol",
                value: other.to_string(),
            }),
        }
    }

    pub fn column(self) -> TrialColumn {
        match self {
            AggColumn::MaterialClassI => TrialColumn::MaterialClassI,
            AggColumn::MaterialClassII => TrialColumn::MaterialClassII,
            AggColumn::MaterialClassIII => TrialColumn::MaterialClassIII,
            AggColumn::ItemFormat => TrialColumn::ItemFormat,
        }
    }
}

/// The two residual measurements a trial row may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayColumn {
    #[default]
    ResidualsMass,
    ResidualsArea,
}

impl DisplayColumn {
    pub fn parse(value: &str) -> Result<Self, RequestError> {
        match value {
            "% Residuals (Mass)" => Ok(DisplayColumn::ResidualsMass),
            "% Residuals (Area)" => Ok(DisplayColumn::ResidualsArea),
            other => Err(RequestError::UnsupportedValue {
                key: "displaycol",
                value: other.to_string(),
            }),
        }
    }

    pub fn header(self) -> &'static str {
        match self {
            DisplayColumn::ResidualsMass => "% Residuals (Mass)",
            DisplayColumn::ResidualsArea => "% Residuals (Area)",
        }
    }
}

/// Numeric columns of the per-trial operating-condition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConditionColumn {
    Temperature,
    Moisture,
    Duration,
}

impl ConditionColumn {
    pub fn header(self) -> &'static str {
        match self {
            ConditionColumn::Temperature => "Average Temperature (F)",
            ConditionColumn::Moisture => "Average % Moisture (In Field)",
            ConditionColumn::Duration => "Trial Duration",
        }
    }
}
