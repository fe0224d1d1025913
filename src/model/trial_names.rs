/// Facility code prefixes of trial column names and the technology each one
/// is published under.
pub const TECHNOLOGY_PREFIXES: &[(&str, &str)] = &[
    ("IV", "In-Vessel"),
    ("CASP", "Aerated Static Pile"),
    ("WR", "Windrow"),
    ("EASP", "Aerated Static Pile"),
    ("ASP", "Aerated Static Pile"),
    ("AD", "Anaerobic Digestion"),
];

pub fn technology_for_prefix(prefix: &str) -> Option<&'static str> {
    TECHNOLOGY_PREFIXES
        .iter()
        .find(|(code, _)| *code == prefix)
        .map(|(_, technology)| *technology)
}

fn uppercase_prefix(column: &str) -> &str {
    let end = column
        .bytes()
        .position(|b| !b.is_ascii_uppercase())
        .unwrap_or(column.len());
    &column[..end]
}

// First run of three ASCII digits anywhere in the name.
fn trial_number(column: &str) -> Option<&str> {
    column
        .as_bytes()
        .windows(3)
        .position(|w| w.iter().all(u8::is_ascii_digit))
        .map(|i| &column[i..i + 3])
}

/// `IV-004 Lot B` becomes `In-Vessel - 004`. Unknown prefixes are kept as
/// they are; names without an uppercase prefix or a three digit number are
/// returned unchanged.
pub fn anonymized_trial_column(column: &str) -> String {
    let prefix = uppercase_prefix(column);
    if prefix.is_empty() {
        return column.to_string();
    }
    let Some(number) = trial_number(column) else {
        return column.to_string();
    };
    let technology = technology_for_prefix(prefix).unwrap_or(prefix);
    format!("{technology} - {number}")
}
