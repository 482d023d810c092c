//! Parse headerless, tab-separated medal text into a `MedalTable`.
//!
//! Every line must carry exactly ten fields, bound positionally to
//! [`Column::ALL`]. Parsing is all-or-nothing: the first malformed line
//! aborts the load.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use csv::StringRecord;
use log::{debug, info};

use crate::data::{Column, MedalTable, Record};
use crate::error::MedalstatError;
use crate::Result;

use super::options::LoadOptions;

/// Age tokens treated as missing rather than malformed.
const MISSING_TOKENS: [&str; 4] = ["na", "n/a", "nan", "null"];

/// Load a medal file from disk.
pub fn load_file(path: impl AsRef<Path>, options: &LoadOptions) -> Result<MedalTable> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| MedalstatError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let table = parse_reader(file, options)?;
    info!("loaded {} records from {}", table.len(), path.display());
    Ok(table)
}

/// Parse an in-memory upload.
pub fn parse_str(text: &str, options: &LoadOptions) -> Result<MedalTable> {
    parse_reader(text.as_bytes(), options)
}

/// Parse medal records from any byte stream.
pub fn parse_reader<R: Read>(reader: R, options: &LoadOptions) -> Result<MedalTable> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(false)
        // Column count is checked per line below so errors can name the line.
        .flexible(true)
        .from_reader(reader);

    let mut records = Vec::new();
    for result in reader.records() {
        let row = result?;
        let line = row.position().map(|p| p.line()).unwrap_or(0);
        records.push(bind_record(&row, line)?);
    }

    if records.is_empty() {
        return Err(MedalstatError::EmptyInput);
    }

    debug!("parsed {} records", records.len());
    Ok(MedalTable::new(records))
}

/// Bind one delimited line to the fixed schema.
fn bind_record(row: &StringRecord, line: u64) -> Result<Record> {
    if row.len() != Column::ALL.len() {
        return Err(MedalstatError::ColumnCount {
            line,
            found: row.len(),
        });
    }

    let text = |column: Column| row.get(column.index()).unwrap_or_default();

    Ok(Record {
        athlete: text(Column::Athlete).to_string(),
        age: parse_age(text(Column::Age), line)?,
        country: text(Column::Country).to_string(),
        year: parse_number(text(Column::Year), Column::Year, line)?,
        date: text(Column::Date).to_string(),
        sport: text(Column::Sport).to_string(),
        gold: parse_number(text(Column::Gold), Column::Gold, line)?,
        silver: parse_number(text(Column::Silver), Column::Silver, line)?,
        bronze: parse_number(text(Column::Bronze), Column::Bronze, line)?,
        total: parse_number(text(Column::Total), Column::Total, line)?,
    })
}

fn parse_number<T: FromStr>(value: &str, column: Column, line: u64) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| MedalstatError::InvalidNumber {
            line,
            column: column.name(),
            value: value.to_string(),
        })
}

fn parse_age(value: &str, line: u64) -> Result<Option<u32>> {
    let trimmed = value.trim();
    if trimmed.is_empty()
        || MISSING_TOKENS
            .iter()
            .any(|token| trimmed.eq_ignore_ascii_case(token))
    {
        return Ok(None);
    }
    parse_number(trimmed, Column::Age, line).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const TWO_ROWS: &str = "A\t20\tUSA\t2000\t-\tSwimming\t1\t0\t0\t1\n\
                            B\t22\tUSA\t2000\t-\tAthletics\t0\t1\t0\t1\n";

    #[test]
    fn test_parse_binds_columns_in_order() {
        let table = parse_str(TWO_ROWS, &LoadOptions::default()).unwrap();
        assert_eq!(table.len(), 2);

        let first = &table.records()[0];
        assert_eq!(first.athlete, "A");
        assert_eq!(first.age, Some(20));
        assert_eq!(first.country, "USA");
        assert_eq!(first.year, 2000);
        assert_eq!(first.date, "-");
        assert_eq!(first.sport, "Swimming");
        assert_eq!(
            (first.gold, first.silver, first.bronze, first.total),
            (1, 0, 0, 1)
        );
        assert_eq!(table.records()[1].sport, "Athletics");
    }

    #[test]
    fn test_first_line_is_data() {
        let text = "Athlete\tAge\tCountry\tYear\tDate\tSport\tGold\tSilver\tBronze\tTotal\n";
        let err = parse_str(text, &LoadOptions::default()).unwrap_err();
        // A header line is rejected because "Age" is not a number
        assert!(matches!(
            err,
            MedalstatError::InvalidNumber {
                line: 1,
                column: "Age",
                ..
            }
        ));
    }

    #[test]
    fn test_nine_fields_rejected() {
        let text = "A\t20\tUSA\t2000\t-\tSwimming\t1\t0\t0\n";
        let err = parse_str(text, &LoadOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            MedalstatError::ColumnCount { line: 1, found: 9 }
        ));
        assert!(err.is_parse_error());
    }

    #[test]
    fn test_eleven_fields_rejected_on_later_line() {
        let text = format!("{TWO_ROWS}C\t20\tUSA\t2000\t-\tSwimming\t1\t0\t0\t1\textra\n");
        let err = parse_str(&text, &LoadOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            MedalstatError::ColumnCount { line: 3, found: 11 }
        ));
    }

    #[test]
    fn test_non_numeric_medal_rejected() {
        let text = "A\t20\tUSA\t2000\t-\tSwimming\tone\t0\t0\t1\n";
        let err = parse_str(text, &LoadOptions::default()).unwrap_err();
        match err {
            MedalstatError::InvalidNumber { column, value, .. } => {
                assert_eq!(column, "Gold");
                assert_eq!(value, "one");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_negative_medal_rejected() {
        let text = "A\t20\tUSA\t2000\t-\tSwimming\t-1\t0\t0\t1\n";
        let err = parse_str(text, &LoadOptions::default()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "line 1: column 'Gold' value '-1' is not a non-negative integer"
        );
    }

    #[test]
    fn test_oversized_medal_count_rejected() {
        let text = "A\t20\tUSA\t2000\t-\tSwimming\t1\t0\t9999999999\t1\n";
        let err = parse_str(text, &LoadOptions::default()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "line 1: column 'Bronze' value '9999999999' is not a non-negative integer"
        );
    }

    #[test]
    fn test_missing_age_tokens() {
        let text = "A\t\tUSA\t2000\t-\tSwimming\t1\t0\t0\t1\n\
                    B\tNaN\tUSA\t2000\t-\tSwimming\t1\t0\t0\t1\n\
                    C\tNA\tUSA\t2000\t-\tSwimming\t1\t0\t0\t1\n";
        let table = parse_str(text, &LoadOptions::default()).unwrap();
        assert!(table.iter().all(|r| r.age.is_none()));
    }

    #[test]
    fn test_whitespace_around_numbers() {
        let text = "A\t 20 \tUSA\t2000 \t-\tSwimming\t 1\t0\t0\t1\n";
        let table = parse_str(text, &LoadOptions::default()).unwrap();
        assert_eq!(table.records()[0].age, Some(20));
        assert_eq!(table.records()[0].gold, 1);
    }

    #[test]
    fn test_blank_lines_skipped() {
        let text = format!("\n{TWO_ROWS}\n\n");
        let table = parse_str(&text, &LoadOptions::default()).unwrap();
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_empty_input_rejected() {
        let err = parse_str("", &LoadOptions::default()).unwrap_err();
        assert!(matches!(err, MedalstatError::EmptyInput));
    }

    #[test]
    fn test_custom_delimiter() {
        let text = "A;20;USA;2000;-;Swimming;1;0;0;1\n";
        let table = parse_str(text, &LoadOptions::new().delimiter(b';')).unwrap();
        assert_eq!(table.records()[0].country, "USA");
    }

    #[test]
    fn test_total_mismatch_tolerated() {
        let text = "A\t20\tUSA\t2000\t-\tSwimming\t1\t1\t1\t7\n";
        let table = parse_str(text, &LoadOptions::default()).unwrap();
        assert_eq!(table.records()[0].total, 7);
    }

    #[test]
    fn test_load_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("medals.tsv");
        fs::write(&path, TWO_ROWS).unwrap();

        let table = load_file(&path, &LoadOptions::default()).unwrap();
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_file("/nonexistent/medals.tsv", &LoadOptions::default()).unwrap_err();
        assert!(matches!(err, MedalstatError::FileRead { .. }));
        assert!(err.hint().is_some());
    }
}
