use std::io::Write;

use polars::prelude::DataType;
use tempfile::NamedTempFile;

use dq_ingest::{InputError, read_dataset};

fn create_temp_csv(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    write!(file, "{}", content).expect("write csv");
    file
}

#[test]
fn reads_rows_in_source_order() {
    let file = create_temp_csv("customer_id,email\n3,c@d.com\n1,a@b.com\n2,x@y.org\n");
    let df = read_dataset(file.path()).expect("read dataset");

    assert_eq!(df.height(), 3);
    assert_eq!(df.width(), 2);
    let ids = df.column("customer_id").expect("customer_id");
    assert_eq!(ids.dtype(), &DataType::Int64);
    assert_eq!(ids.get(0).expect("row 0").to_string(), "3");
    assert_eq!(ids.get(2).expect("row 2").to_string(), "2");
}

#[test]
fn empty_fields_become_nulls() {
    let file = create_temp_csv("id,email,country_code\n1,,DE\n2,b@c.com,\n");
    let df = read_dataset(file.path()).expect("read dataset");

    assert_eq!(df.column("email").expect("email").null_count(), 1);
    assert_eq!(
        df.column("country_code").expect("country_code").null_count(),
        1
    );
    assert_eq!(df.column("id").expect("id").null_count(), 0);
}

#[test]
fn keeps_fully_empty_rows() {
    let file = create_temp_csv("id,email\n1,a@b.com\n,\n2,c@d.com\n");
    let df = read_dataset(file.path()).expect("read dataset");

    assert_eq!(df.height(), 3);
    assert_eq!(df.column("id").expect("id").null_count(), 1);
    assert_eq!(df.column("email").expect("email").null_count(), 1);
}

#[test]
fn header_only_file_has_zero_rows() {
    let file = create_temp_csv("id,email\n");
    let df = read_dataset(file.path()).expect("read dataset");

    assert_eq!(df.height(), 0);
    assert_eq!(df.width(), 2);
}

#[test]
fn strips_bom_from_first_column() {
    let file = create_temp_csv("\u{feff}id,email\n1,a@b.com\n");
    let df = read_dataset(file.path()).expect("read dataset");

    assert!(df.column("id").is_ok());
}

#[test]
fn missing_file_is_input_error() {
    let result = read_dataset(std::path::Path::new("/nonexistent/dq/customers.csv"));
    assert!(matches!(result, Err(InputError::FileNotFound { .. })));
}

#[test]
fn empty_file_is_input_error() {
    let file = create_temp_csv("");
    let result = read_dataset(file.path());
    assert!(matches!(result, Err(InputError::EmptyCsv { .. })));
}

#[test]
fn missing_value_markers_become_nulls() {
    let file = create_temp_csv(
        "id,email,country_code\n\
         1,a@b.com,NA\n\
         2,null,DE\n\
         3,c@d.com,N/A\n\
         4,NULL,<NA>\n\
         5,None,#N/A\n\
         6,NaN,n/a\n",
    );
    let df = read_dataset(file.path()).expect("read dataset");

    assert_eq!(df.height(), 6);
    assert_eq!(df.column("id").expect("id").null_count(), 0);
    assert_eq!(df.column("email").expect("email").null_count(), 4);
    assert_eq!(
        df.column("country_code").expect("country_code").null_count(),
        5
    );
}

#[test]
fn null_markers_match_exactly() {
    let file = create_temp_csv("status\nNa\n none\nnull\n");
    let df = read_dataset(file.path()).expect("read dataset");

    assert_eq!(df.column("status").expect("status").null_count(), 1);
}
