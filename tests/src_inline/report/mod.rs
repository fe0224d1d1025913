use super::*;
use crate::model::summary::{GroupSummary, Suppression};

fn sample_outcome() -> QueryOutcome {
    QueryOutcome::Data {
        data: vec![GroupSummary {
            group_key: "Paper".to_string(),
            count: 4,
            material_class_i: "Fiber".to_string(),
            lowerfence: 0.1,
            q1: 0.2,
            median: 0.3,
            mean: 0.35,
            q3: 0.4,
            upperfence: 0.7,
            max: 0.9,
            min: 0.1,
            outliers: vec![0.9],
            color: "#298FC2".to_string(),
        }],
        num_trials: 3,
    }
}

#[test]
fn test_json_success_shape() {
    let json = json::render_outcome_json(&sample_outcome()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["numTrials"], 3);
    assert!(value.get("message").is_none());
    let group = &value["data"][0];
    assert_eq!(group["aggCol"], "Paper");
    assert_eq!(group["Material Class I"], "Fiber");
    assert_eq!(group["lowerfence"], 0.1);
    assert_eq!(group["outliers"][0], 0.9);
    assert_eq!(group["color"], "#298FC2");
}

#[test]
fn test_json_message_shape() {
    let outcome = QueryOutcome::suppressed(Suppression::InsufficientData);
    let json = json::render_outcome_json(&outcome).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert!(value.get("data").is_none());
    assert_eq!(
        value["message"],
        "There is not enough data for the selected options. Please select more options."
    );
}

#[test]
fn test_text_report() {
    let text = text::render_outcome_text(&sample_outcome());
    assert!(text.contains("Trials: 3"));
    assert!(text.contains("Paper"));
    assert!(text.contains("0.350"));
    assert!(text.contains("outliers 0.900"));

    let suppressed = text::render_outcome_text(&QueryOutcome::suppressed(
        Suppression::InsufficientTrials,
    ));
    assert!(suppressed.starts_with("Suppressed: There are not enough trials"));
}

#[test]
fn test_write_outcome_appends_newline() {
    let mut buf = Vec::new();
    write_outcome(&mut buf, &sample_outcome(), OutputFormat::Json).unwrap();
    let out = String::from_utf8(buf).unwrap();
    assert!(out.starts_with('{'));
    assert!(out.ends_with("}\n"));
}
