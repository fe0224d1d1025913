pub const BULK_DOSE: &str = "Bulk Dose";

/// Minimum sample sizes below which a slice is withheld.
#[derive(Debug, Clone)]
pub struct PrivacyThresholds {
    pub min_technology_trials: usize,
    pub min_technology_trials_bulk_dose: usize,
    pub min_rows: usize,
}

impl PrivacyThresholds {
    pub fn default_v1() -> Self {
        Self {
            min_technology_trials: 3,
            min_technology_trials_bulk_dose: 1,
            min_rows: 1,
        }
    }

    pub fn technology_trials_for(&self, test_method: &str) -> usize {
        if test_method == BULK_DOSE {
            self.min_technology_trials_bulk_dose
        } else {
            self.min_technology_trials
        }
    }

    pub fn technology_gate_applies(&self, test_method: &str) -> bool {
        test_method != BULK_DOSE
    }
}

impl Default for PrivacyThresholds {
    fn default() -> Self {
        Self::default_v1()
    }
}
