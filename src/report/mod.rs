pub mod json;
pub mod text;

use std::io::Write;

use clap::ValueEnum;

use crate::model::summary::QueryOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Text,
}

pub fn format_f64_3(v: f64) -> String {
    format!("{:.3}", v)
}

pub fn write_outcome<W: Write>(
    out: &mut W,
    outcome: &QueryOutcome,
    format: OutputFormat,
) -> std::io::Result<()> {
    let rendered = match format {
        OutputFormat::Json => json::render_outcome_json(outcome)?,
        OutputFormat::Text => text::render_outcome_text(outcome),
    };
    out.write_all(rendered.as_bytes())?;
    if !rendered.ends_with('\n') {
        out.write_all(b"\n")?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
