use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::input::csv::CsvTable;
use crate::model::trial_names::anonymized_trial_column;

/// The full operating-conditions table with facility-derived trial columns
/// renamed. Serializes as an array of objects keyed by column, in column order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionsTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

struct RecordView<'a> {
    columns: &'a [String],
    values: &'a [String],
}

impl Serialize for RecordView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (column, value) in self.columns.iter().zip(self.values) {
            map.serialize_entry(column, value)?;
        }
        map.end()
    }
}

impl Serialize for ConditionsTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.rows.iter().map(|values| RecordView {
            columns: &self.columns,
            values,
        }))
    }
}

/// Columns that rename to the same name share one slot: the first keeps its
/// position and the last one's value wins.
pub fn anonymize_columns(table: CsvTable) -> ConditionsTable {
    let mut columns: Vec<String> = Vec::with_capacity(table.columns.len());
    let mut slots = Vec::with_capacity(table.columns.len());
    for name in &table.columns {
        let renamed = anonymized_trial_column(name);
        let slot = match columns.iter().position(|c| *c == renamed) {
            Some(existing) => {
                tracing::warn!(
                    column = %name,
                    renamed = %renamed,
                    "renamed trial column collides; later values win"
                );
                existing
            }
            None => {
                columns.push(renamed);
                columns.len() - 1
            }
        };
        slots.push(slot);
    }

    let rows = table
        .rows
        .into_iter()
        .map(|record| {
            let mut out = vec![String::new(); columns.len()];
            for (value, &slot) in record.into_iter().zip(&slots) {
                out[slot] = value;
            }
            out
        })
        .collect();

    tracing::debug!(columns = columns.len(), "operating conditions columns renamed");
    ConditionsTable { columns, rows }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/operating_conditions.rs"]
mod tests;
