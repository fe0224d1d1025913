use crate::model::columns::{ConditionColumn, DisplayColumn, TrialColumn};

/// One measurement of one item in one trial.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrialRow {
    pub trial_id: String,
    pub test_method: String,
    pub timepoint: String,
    pub technology: String,
    pub material_class_i: String,
    pub material_class_ii: String,
    pub material_class_iii: String,
    pub item_format: String,
    pub item_brand: String,
    pub residuals_mass: Option<f64>,
    pub residuals_area: Option<f64>,
}

impl TrialRow {
    pub fn field(&self, column: TrialColumn) -> &str {
        match column {
            TrialColumn::TestMethod => &self.test_method,
            TrialColumn::Timepoint => &self.timepoint,
            TrialColumn::Technology => &self.technology,
            TrialColumn::MaterialClassI => &self.material_class_i,
            TrialColumn::MaterialClassII => &self.material_class_ii,
            TrialColumn::MaterialClassIII => &self.material_class_iii,
            TrialColumn::ItemFormat => &self.item_format,
            TrialColumn::ItemBrand => &self.item_brand,
        }
    }

    pub fn measurement(&self, column: DisplayColumn) -> Option<f64> {
        match column {
            DisplayColumn::ResidualsMass => self.residuals_mass,
            DisplayColumn::ResidualsArea => self.residuals_area,
        }
    }
}

/// Averaged operating conditions of one trial.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OperatingConditionRow {
    pub trial_id: String,
    pub avg_temperature_f: Option<f64>,
    pub avg_moisture: Option<f64>,
    pub trial_duration_days: Option<f64>,
}

impl OperatingConditionRow {
    pub fn value(&self, column: ConditionColumn) -> Option<f64> {
        match column {
            ConditionColumn::Temperature => self.avg_temperature_f,
            ConditionColumn::Moisture => self.avg_moisture,
            ConditionColumn::Duration => self.trial_duration_days,
        }
    }
}

/// Both source tables, loaded once and only ever read afterwards.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub trials: Vec<TrialRow>,
    pub conditions: Vec<OperatingConditionRow>,
}
