use super::*;

#[test]
fn test_parse_csv_header_and_rows() {
    let text = "Trial ID,Technology,% Residuals (Mass)\nT1,Windrow,0.2\nT2,In-Vessel,\n";
    let table = parse_csv(text.as_bytes()).unwrap();
    assert_eq!(table.columns, vec!["Trial ID", "Technology", "% Residuals (Mass)"]);
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.rows[0], vec!["T1", "Windrow", "0.2"]);
    assert_eq!(table.rows[1][2], "");
    assert_eq!(table.column_index("Technology"), Some(1));
}

#[test]
fn test_parse_csv_quoted_fields() {
    let text = "a,b,c\r\n\"x, y\",\"say \"\"hi\"\"\",3\r\n\"multi\nline\",2,\r\n";
    let table = parse_csv(text.as_bytes()).unwrap();
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.rows[0][0], "x, y");
    assert_eq!(table.rows[0][1], "say \"hi\"");
    assert_eq!(table.rows[1][0], "multi\nline");
    assert_eq!(table.rows[1][2], "");
}

#[test]
fn test_parse_csv_pads_short_rows_and_skips_blank_lines() {
    let text = "\u{feff}a,b,c\n1\n\n4,5,6,7\n";
    let table = parse_csv(text.as_bytes()).unwrap();
    assert_eq!(table.columns[0], "a");
    assert_eq!(table.rows, vec![vec!["1", "", ""], vec!["4", "5", "6"]]);
}

#[test]
fn test_parse_csv_errors() {
    assert!(matches!(parse_csv("".as_bytes()), Err(InputError::Parse(_))));
    assert!(matches!(
        parse_csv("a,b\n\"open,1\n".as_bytes()),
        Err(InputError::Parse(_))
    ));
}

#[test]
fn test_require_column_reports_table() {
    let table = parse_csv("a,b\n1,2\n".as_bytes()).unwrap();
    let err = table.require_column("Trial ID", "trials").unwrap_err();
    assert_eq!(err.to_string(), "missing column \"Trial ID\" in trials table");
}

#[test]
fn test_parse_csv_inner_quote_is_literal() {
    let text = "Trial ID,Item Format,x\nT1,9\" Plate,1\nT2,Cup,2\nT3,\"12\"\" Bowl\",3\n";
    let table = parse_csv(text.as_bytes()).unwrap();
    assert_eq!(table.rows.len(), 3);
    assert_eq!(table.rows[0], vec!["T1", "9\" Plate", "1"]);
    assert_eq!(table.rows[1][1], "Cup");
    assert_eq!(table.rows[2][1], "12\" Bowl");
}
