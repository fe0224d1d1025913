use std::path::{Path, PathBuf};

use thiserror::Error;

pub mod csv;
pub mod tables;

use csv::{CsvTable, read_csv};
use tables::{decode_conditions, decode_trials};

use crate::model::rows::Dataset;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("missing input: {0}")]
    MissingInput(String),
    #[error("missing column {column:?} in {table} table")]
    MissingColumn { table: String, column: String },
    #[error("parse error: {0}")]
    Parse(String),
}

/// Where the two source tables live and which variant to read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetSource {
    pub data_dir: PathBuf,
    pub version_id: String,
    pub use_test_data: bool,
}

impl DatasetSource {
    fn file_name(&self, stem: &str) -> String {
        let suffix = if self.use_test_data { "_test" } else { "" };
        format!("{stem}{}{suffix}.csv", self.version_id)
    }

    pub fn trials_file_name(&self) -> String {
        self.file_name("all_trials_processed")
    }

    pub fn conditions_file_name(&self) -> String {
        self.file_name("operating_conditions_avg")
    }

    pub fn full_conditions_file_name(&self) -> String {
        self.file_name("operating_conditions_full")
    }

    pub fn trials_path(&self) -> Result<PathBuf, InputError> {
        resolve_table_path(&self.data_dir, &self.trials_file_name())
    }

    pub fn conditions_path(&self) -> Result<PathBuf, InputError> {
        resolve_table_path(&self.data_dir, &self.conditions_file_name())
    }

    pub fn full_conditions_path(&self) -> Result<PathBuf, InputError> {
        resolve_table_path(&self.data_dir, &self.full_conditions_file_name())
    }
}

/// Prefers `<name>`, falls back to `<name>.gz`.
pub fn resolve_table_path(dir: &Path, name: &str) -> Result<PathBuf, InputError> {
    let plain = dir.join(name);
    if plain.exists() {
        return Ok(plain);
    }
    let gz = dir.join(format!("{name}.gz"));
    if gz.exists() {
        return Ok(gz);
    }
    Err(InputError::MissingInput(format!(
        "{} (or .gz) not found",
        plain.display()
    )))
}

pub fn load_dataset(source: &DatasetSource) -> Result<Dataset, InputError> {
    let trials_path = source.trials_path()?;
    let conditions_path = source.conditions_path()?;

    let trials = decode_trials(&read_csv(&trials_path)?)?;
    let conditions = decode_conditions(&read_csv(&conditions_path)?)?;

    tracing::info!(
        trials = trials.len(),
        conditions = conditions.len(),
        test_data = source.use_test_data,
        "loaded dataset from {}",
        source.data_dir.display()
    );

    Ok(Dataset { trials, conditions })
}

/// The per-trial operating-conditions table, read as raw text cells.
pub fn load_full_conditions(source: &DatasetSource) -> Result<CsvTable, InputError> {
    let path = source.full_conditions_path()?;
    let table = read_csv(&path)?;
    tracing::info!(
        columns = table.columns.len(),
        rows = table.rows.len(),
        "loaded operating conditions from {}",
        path.display()
    );
    Ok(table)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
