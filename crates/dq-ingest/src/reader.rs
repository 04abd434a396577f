//! CSV file reading with a single header row.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use std::time::Instant;

use polars::prelude::{CsvParseOptions, CsvReadOptions, DataFrame, NullValues, SerReader};

use crate::error::{InputError, Result};

/// Field values read as null in every column, in addition to empty fields.
///
/// Matches the missing-value markers common spreadsheet and dataframe
/// exports write (`NA`, `N/A`, `null`, `NaN`, `#N/A`, ...). Matching is exact
/// and case-sensitive.
pub const NULL_TOKENS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Maximum file size for CSV loading (500 MB default).
pub const MAX_CSV_FILE_SIZE: u64 = 500 * 1024 * 1024;

/// Check file size before loading.
pub fn check_file_size(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| InputError::io(path, e))?;

    if metadata.len() > max_size {
        return Err(InputError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }

    Ok(())
}

/// Reject UTF-16 input, which Polars would silently misparse.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = File::open(path).map_err(|e| InputError::io(path, e))?;

    let mut buffer = [0u8; 4];
    let bytes_read = file
        .read(&mut buffer)
        .map_err(|e| InputError::io(path, e))?;

    if bytes_read >= 2 {
        if buffer[0..2] == [0xFF, 0xFE] {
            return Err(InputError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 LE",
            });
        }
        if buffer[0..2] == [0xFE, 0xFF] {
            return Err(InputError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 BE",
            });
        }
    }

    Ok(())
}

/// Read and check the header row.
///
/// Column names are returned as written (a UTF-8 BOM is stripped). Blank and
/// repeated names are rejected.
pub fn read_header(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path).map_err(|e| InputError::io(path, e))?;
    let mut line = String::new();
    BufReader::new(file)
        .read_line(&mut line)
        .map_err(|e| InputError::io(path, e))?;

    let line = line.strip_prefix('\u{feff}').unwrap_or(&line);
    if line.trim().is_empty() {
        return Err(InputError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }

    let mut reader = ::csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(line.as_bytes());
    let record = match reader.records().next() {
        Some(Ok(record)) => record,
        Some(Err(e)) => {
            return Err(InputError::InvalidHeader {
                path: path.to_path_buf(),
                message: e.to_string(),
            });
        }
        None => {
            return Err(InputError::EmptyCsv {
                path: path.to_path_buf(),
            });
        }
    };

    let mut seen = HashSet::new();
    let mut columns = Vec::with_capacity(record.len());
    for (idx, name) in record.iter().enumerate() {
        if name.trim().is_empty() {
            return Err(InputError::EmptyColumnName {
                path: path.to_path_buf(),
                position: idx + 1,
            });
        }
        if !seen.insert(name) {
            return Err(InputError::DuplicateColumn {
                path: path.to_path_buf(),
                column: name.to_string(),
            });
        }
        columns.push(name.to_string());
    }

    Ok(columns)
}

/// Load a CSV file with a header row into a `DataFrame`.
///
/// Column types are inferred from the whole file. Empty fields and
/// [`NULL_TOKENS`] become nulls; rows whose fields are all empty are kept. A header-only file yields a
/// frame with zero rows.
pub fn read_dataset(path: &Path) -> Result<DataFrame> {
    let start = Instant::now();
    check_file_size(path, MAX_CSV_FILE_SIZE)?;
    validate_encoding(path)?;
    let columns = read_header(path)?;

    let mut df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(None)
        .with_parse_options(null_aware_parse_options())
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| csv_parse(path, &e))?
        .finish()
        .map_err(|e| csv_parse(path, &e))?;

    if df.width() != columns.len() {
        return Err(InputError::CsvParse {
            path: path.to_path_buf(),
            message: format!(
                "header declares {} columns but {} were parsed",
                columns.len(),
                df.width()
            ),
        });
    }

    // Keep the header spelling (BOM stripped) rather than Polars' own.
    for (current, expected) in df.get_column_names_owned().into_iter().zip(&columns) {
        if current.as_str() != expected {
            df.rename(current.as_str(), expected.as_str().into())
                .map_err(|e| csv_parse(path, &e))?;
        }
    }

    if df.width() > 500 {
        tracing::warn!(
            path = %path.display(),
            columns = df.width(),
            "dataset has more than 500 columns - may impact performance"
        );
    }

    tracing::debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        duration_ms = start.elapsed().as_millis(),
        "loaded dataset"
    );

    Ok(df)
}

fn null_aware_parse_options() -> CsvParseOptions {
    let tokens = NULL_TOKENS.iter().map(|token| (*token).into()).collect();
    CsvParseOptions::default().with_null_values(Some(NullValues::AllColumns(tokens)))
}

fn csv_parse(path: &Path, error: &impl std::fmt::Display) -> InputError {
    InputError::CsvParse {
        path: path.to_path_buf(),
        message: error.to_string(),
    }
}
