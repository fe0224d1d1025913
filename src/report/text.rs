use crate::model::summary::{GroupSummary, QueryOutcome};
use crate::report::format_f64_3;

pub fn render_outcome_text(outcome: &QueryOutcome) -> String {
    match outcome {
        QueryOutcome::Message { message } => format!("Suppressed: {message}\n"),
        QueryOutcome::Data { data, num_trials } => render_groups(data, *num_trials),
    }
}

fn render_groups(groups: &[GroupSummary], num_trials: usize) -> String {
    let mut out = String::new();
    out.push_str("Field Trial Results\n");
    out.push_str("===================\n\n");
    out.push_str(&format!("Trials: {num_trials}\n"));
    out.push_str(&format!("Groups: {}\n\n", groups.len()));

    if groups.is_empty() {
        out.push_str("No groups for the selected options.\n");
        return out;
    }

    let key_width = groups
        .iter()
        .map(|g| g.group_key.chars().count())
        .max()
        .unwrap_or(0)
        .max("group".len());

    out.push_str(&format!(
        "{:<key_width$}  {:>5}  {:>7}  {:>7}  {:>7}  {:>7}  {:>7}  {:>7}  {:>8}  {}\n",
        "group", "n", "min", "q1", "median", "mean", "q3", "max", "outliers", "class"
    ));
    for g in groups {
        out.push_str(&format!(
            "{:<key_width$}  {:>5}  {:>7}  {:>7}  {:>7}  {:>7}  {:>7}  {:>7}  {:>8}  {}\n",
            g.group_key,
            g.count,
            format_f64_3(g.min),
            format_f64_3(g.q1),
            format_f64_3(g.median),
            format_f64_3(g.mean),
            format_f64_3(g.q3),
            format_f64_3(g.max),
            g.outliers.len(),
            g.material_class_i
        ));
    }

    out.push_str("\nWhiskers\n");
    for g in groups {
        out.push_str(&format!(
            "{}: [{}, {}]",
            g.group_key,
            format_f64_3(g.lowerfence),
            format_f64_3(g.upperfence)
        ));
        if !g.outliers.is_empty() {
            let values: Vec<String> = g.outliers.iter().map(|v| format_f64_3(*v)).collect();
            out.push_str(&format!(" outliers {}", values.join(", ")));
        }
        out.push('\n');
    }
    out
}
