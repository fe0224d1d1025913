use crate::input::InputError;
use crate::input::csv::CsvTable;
use crate::model::columns::{
    ConditionColumn, DisplayColumn, TRIAL_ID, TrialColumn, trial_column_order,
};
use crate::model::rows::{OperatingConditionRow, TrialRow};

pub const TRIALS_TABLE: &str = "trials";
pub const CONDITIONS_TABLE: &str = "operating conditions";

/// Empty, unparseable or non-finite cells decode to `None`.
pub fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

struct NumericColumn {
    header: &'static str,
    idx: Option<usize>,
    unparseable: usize,
}

impl NumericColumn {
    fn locate(table: &CsvTable, header: &'static str) -> Self {
        let idx = table.column_index(header);
        if idx.is_none() {
            tracing::warn!(column = header, "numeric column absent; values treated as missing");
        }
        Self {
            header,
            idx,
            unparseable: 0,
        }
    }

    fn read(&mut self, record: &[String]) -> Option<f64> {
        let raw = record.get(self.idx?)?;
        let value = parse_number(raw);
        if value.is_none() && !raw.trim().is_empty() {
            self.unparseable += 1;
        }
        value
    }

    fn report(&self, table: &str) {
        if self.unparseable > 0 {
            tracing::warn!(
                table,
                column = self.header,
                count = self.unparseable,
                "unparseable numeric values treated as missing"
            );
        }
    }
}

pub fn decode_trials(table: &CsvTable) -> Result<Vec<TrialRow>, InputError> {
    let id_idx = table.require_column(TRIAL_ID, TRIALS_TABLE)?;
    let mut categorical = Vec::with_capacity(trial_column_order().len());
    for &column in trial_column_order() {
        categorical.push((column, table.require_column(column.header(), TRIALS_TABLE)?));
    }
    let mut mass = NumericColumn::locate(table, DisplayColumn::ResidualsMass.header());
    let mut area = NumericColumn::locate(table, DisplayColumn::ResidualsArea.header());

    let mut rows = Vec::with_capacity(table.rows.len());
    for record in &table.rows {
        let trial_id = record[id_idx].trim();
        if trial_id.is_empty() {
            tracing::warn!("trial row without trial id; skipping");
            continue;
        }
        let mut row = TrialRow {
            trial_id: trial_id.to_string(),
            residuals_mass: mass.read(record),
            residuals_area: area.read(record),
            ..TrialRow::default()
        };
        for &(column, idx) in &categorical {
            let value = record[idx].trim().to_string();
            match column {
                TrialColumn::TestMethod => row.test_method = value,
                TrialColumn::Timepoint => row.timepoint = value,
                TrialColumn::Technology => row.technology = value,
                TrialColumn::MaterialClassI => row.material_class_i = value,
                TrialColumn::MaterialClassII => row.material_class_ii = value,
                TrialColumn::MaterialClassIII => row.material_class_iii = value,
                TrialColumn::ItemFormat => row.item_format = value,
                TrialColumn::ItemBrand => row.item_brand = value,
            }
        }
        rows.push(row);
    }

    mass.report(TRIALS_TABLE);
    area.report(TRIALS_TABLE);
    Ok(rows)
}

pub fn decode_conditions(table: &CsvTable) -> Result<Vec<OperatingConditionRow>, InputError> {
    let id_idx = table.require_column(TRIAL_ID, CONDITIONS_TABLE)?;
    let mut temperature = NumericColumn::locate(table, ConditionColumn::Temperature.header());
    let mut moisture = NumericColumn::locate(table, ConditionColumn::Moisture.header());
    let mut duration = NumericColumn::locate(table, ConditionColumn::Duration.header());

    let mut rows = Vec::with_capacity(table.rows.len());
    for record in &table.rows {
        let trial_id = record[id_idx].trim();
        if trial_id.is_empty() {
            tracing::warn!("operating condition row without trial id; skipping");
            continue;
        }
        rows.push(OperatingConditionRow {
            trial_id: trial_id.to_string(),
            avg_temperature_f: temperature.read(record),
            avg_moisture: moisture.read(record),
            trial_duration_days: duration.read(record),
        });
    }

    temperature.report(CONDITIONS_TABLE);
    moisture.report(CONDITIONS_TABLE);
    duration.report(CONDITIONS_TABLE);
    Ok(rows)
}
