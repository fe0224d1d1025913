use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use flate2::Compression;
use flate2::write::GzEncoder;

use super::csv::parse_csv;
use super::tables::{decode_conditions, decode_trials, parse_number};
use super::*;

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("compost_residuals_test_{}_{}", std::process::id(), id));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_file(path: &Path, contents: &str) {
    let mut f = BufWriter::new(File::create(path).unwrap());
    f.write_all(contents.as_bytes()).unwrap();
}

fn write_gz(path: &Path, contents: &str) {
    let mut encoder = GzEncoder::new(File::create(path).unwrap(), Compression::default());
    encoder.write_all(contents.as_bytes()).unwrap();
    encoder.finish().unwrap();
}

const TRIALS_CSV: &str = "\
Trial ID,Test Method,Timepoint,Technology,Material Class I,Material Class II,Material Class III,Item Format,Item Brand,% Residuals (Mass),% Residuals (Area)
T1,Mesh Bag,Final,Windrow,Fiber,Paper,Uncoated Paper,Bag,Brand A,0.25,0.3
T2,Mesh Bag,Final,Windrow,Biopolymer,PLA,Rigid PLA,Cup,\"Brand, B\",1.4,
T3,Bulk Dose,Final,In-Vessel,Fiber,Paper,Coated Paper,Plate,Brand C,n/a,0.1
";

const CONDITIONS_CSV: &str = "\
Trial ID,Average Temperature (F),Average % Moisture (In Field),Trial Duration
T1,145.5,0.48,60
T2,,0.52,45
T3,hot,0.61,95
";

fn source(dir: &Path, version_id: &str, use_test_data: bool) -> DatasetSource {
    DatasetSource {
        data_dir: dir.to_path_buf(),
        version_id: version_id.to_string(),
        use_test_data,
    }
}

#[test]
fn test_file_names_follow_version_and_variant() {
    let dir = PathBuf::from("data");
    assert_eq!(
        source(&dir, "", false).trials_file_name(),
        "all_trials_processed.csv"
    );
    assert_eq!(
        source(&dir, "_v2", true).trials_file_name(),
        "all_trials_processed_v2_test.csv"
    );
    assert_eq!(
        source(&dir, "_v2", false).conditions_file_name(),
        "operating_conditions_avg_v2.csv"
    );
    assert_eq!(
        source(&dir, "_v2", true).full_conditions_file_name(),
        "operating_conditions_full_v2_test.csv"
    );
}

#[test]
fn test_parse_number() {
    assert_eq!(parse_number(" 0.5 "), Some(0.5));
    assert_eq!(parse_number("140"), Some(140.0));
    assert_eq!(parse_number(""), None);
    assert_eq!(parse_number("n/a"), None);
    assert_eq!(parse_number("NaN"), None);
    assert_eq!(parse_number("inf"), None);
    assert_eq!(parse_number("+infinity"), None);
    assert_eq!(parse_number("-inf"), None);
    assert_eq!(parse_number("1e400"), None);
}

#[test]
fn test_decode_trials() {
    let table = parse_csv(TRIALS_CSV.as_bytes()).unwrap();
    let rows = decode_trials(&table).unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].trial_id, "T1");
    assert_eq!(rows[0].material_class_iii, "Uncoated Paper");
    assert_eq!(rows[0].residuals_mass, Some(0.25));
    assert_eq!(rows[1].item_brand, "Brand, B");
    assert_eq!(rows[1].residuals_mass, Some(1.4));
    assert_eq!(rows[1].residuals_area, None);
    assert_eq!(rows[2].test_method, "Bulk Dose");
    assert_eq!(rows[2].residuals_mass, None);
    assert_eq!(rows[2].residuals_area, Some(0.1));
}

#[test]
fn test_decode_trials_requires_categorical_columns() {
    let table = parse_csv("Trial ID,Technology\nT1,Windrow\n".as_bytes()).unwrap();
    let err = decode_trials(&table).unwrap_err();
    assert!(matches!(err, InputError::MissingColumn { .. }));
}

#[test]
fn test_decode_conditions_keeps_unparseable_as_missing() {
    let table = parse_csv(CONDITIONS_CSV.as_bytes()).unwrap();
    let rows = decode_conditions(&table).unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].avg_temperature_f, Some(145.5));
    assert_eq!(rows[1].avg_temperature_f, None);
    assert_eq!(rows[2].avg_temperature_f, None);
    assert_eq!(rows[2].avg_moisture, Some(0.61));
    assert_eq!(rows[2].trial_duration_days, Some(95.0));
}

#[test]
fn test_decode_conditions_skips_rows_without_id() {
    let text = "Trial ID,Trial Duration\n,50\nT9,70\n";
    let rows = decode_conditions(&parse_csv(text.as_bytes()).unwrap()).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].trial_id, "T9");
    assert_eq!(rows[0].avg_moisture, None);
}

#[test]
fn test_decode_trials_skips_rows_without_id() {
    let text = "\
Trial ID,Test Method,Timepoint,Technology,Material Class I,Material Class II,Material Class III,Item Format,Item Brand,% Residuals (Mass)
 ,Mesh Bag,Final,Windrow,Fiber,Paper,Uncoated Paper,Bag,Brand A,0.4
T7,Mesh Bag,Final,Windrow,Fiber,Paper,Uncoated Paper,Bag,Brand A,0.2
";
    let rows = decode_trials(&parse_csv(text.as_bytes()).unwrap()).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].trial_id, "T7");
    assert_eq!(rows[0].residuals_area, None);
}

#[test]
fn test_load_dataset_plain_and_gz() {
    let dir = make_temp_dir();
    write_file(&dir.join("all_trials_processed_test.csv"), TRIALS_CSV);
    write_gz(&dir.join("operating_conditions_avg_test.csv.gz"), CONDITIONS_CSV);

    let dataset = load_dataset(&source(&dir, "", true)).unwrap();
    assert_eq!(dataset.trials.len(), 3);
    assert_eq!(dataset.conditions.len(), 3);
    assert_eq!(dataset.conditions[0].trial_id, "T1");
}

#[test]
fn test_load_dataset_missing_file() {
    let dir = make_temp_dir();
    write_file(&dir.join("all_trials_processed.csv"), TRIALS_CSV);
    let err = load_dataset(&source(&dir, "", false)).unwrap_err();
    assert!(matches!(err, InputError::MissingInput(_)));
}

#[test]
fn test_resolve_table_path_prefers_plain() {
    let dir = make_temp_dir();
    write_file(&dir.join("t.csv"), "a\n");
    write_gz(&dir.join("t.csv.gz"), "a\n");
    assert_eq!(resolve_table_path(&dir, "t.csv").unwrap(), dir.join("t.csv"));
}

#[test]
fn test_load_full_conditions_gz() {
    let dir = make_temp_dir();
    write_gz(
        &dir.join("operating_conditions_full.csv.gz"),
        "Metric,IV-004\nDuration,60\n",
    );
    let table = load_full_conditions(&source(&dir, "", false)).unwrap();
    assert_eq!(table.columns, vec!["Metric", "IV-004"]);
    assert_eq!(table.rows, vec![vec!["Duration", "60"]]);
}
