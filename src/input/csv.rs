use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::input::InputError;

pub fn open_maybe_gz(path: &Path) -> Result<Box<dyn BufRead>, InputError> {
    let file = File::open(path)?;
    if path.extension().is_some_and(|ext| ext == "gz") {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Header plus records of a comma-separated table.
#[derive(Debug, Clone)]
pub struct CsvTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn require_column(&self, name: &str, table: &str) -> Result<usize, InputError> {
        self.column_index(name)
            .ok_or_else(|| InputError::MissingColumn {
                table: table.to_string(),
                column: name.to_string(),
            })
    }
}

pub fn read_csv(path: &Path) -> Result<CsvTable, InputError> {
    let reader = open_maybe_gz(path)?;
    parse_csv(reader)
}

pub fn parse_csv<R: BufRead>(mut reader: R) -> Result<CsvTable, InputError> {
    let mut buf = String::new();
    let mut line_no = 0usize;

    let header = match next_record(&mut reader, &mut buf, &mut line_no)? {
        Some(cols) => cols,
        None => return Err(InputError::Parse("csv file is empty".to_string())),
    };
    let mut columns: Vec<String> = header.into_iter().map(|c| c.trim().to_string()).collect();
    if let Some(first) = columns.first_mut() {
        if let Some(stripped) = first.strip_prefix('\u{feff}') {
            *first = stripped.to_string();
        }
    }

    let mut rows = Vec::new();
    while let Some(mut fields) = next_record(&mut reader, &mut buf, &mut line_no)? {
        if fields.len() == 1 && fields[0].is_empty() {
            continue;
        }
        if fields.len() > columns.len() {
            tracing::warn!(
                line = line_no,
                extra = fields.len() - columns.len(),
                "csv record has more fields than header; extra fields dropped"
            );
        }
        fields.resize(columns.len(), String::new());
        rows.push(fields);
    }

    Ok(CsvTable { columns, rows })
}

// A record may span several physical lines when a quoted field holds a newline.
// A quote opens a quoted field only as the field's first character; elsewhere
// it is literal.
fn next_record<R: BufRead>(
    reader: &mut R,
    buf: &mut String,
    line_no: &mut usize,
) -> Result<Option<Vec<String>>, InputError> {
    let start_line = *line_no + 1;
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut field_start = true;
    let mut read_any = false;

    loop {
        buf.clear();
        let read = reader.read_line(buf)?;
        if read == 0 {
            if in_quotes {
                return Err(InputError::Parse(format!(
                    "unterminated quoted field starting at line {start_line}"
                )));
            }
            if !read_any {
                return Ok(None);
            }
            fields.push(std::mem::take(&mut field));
            return Ok(Some(fields));
        }
        read_any = true;
        *line_no += 1;

        let line = buf.as_str();
        let line = line.strip_suffix('\n').unwrap_or(line);
        let line = line.strip_suffix('\r').unwrap_or(line);
        let mut chars = line.chars().peekable();
        while let Some(c) = chars.next() {
            if in_quotes {
                if c == '"' {
                    if chars.peek() == Some(&'"') {
                        field.push('"');
                        chars.next();
                    } else {
                        in_quotes = false;
                    }
                } else {
                    field.push(c);
                }
            } else {
                match c {
                    '"' if field_start => in_quotes = true,
                    ',' => {
                        fields.push(std::mem::take(&mut field));
                        field_start = true;
                        continue;
                    }
                    _ => field.push(c),
                }
            }
            field_start = false;
        }

        if in_quotes {
            field.push('\n');
            continue;
        }
        fields.push(std::mem::take(&mut field));
        return Ok(Some(fields));
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/csv.rs"]
mod tests;
