//! Dataset ingestion for data quality assessment.
//!
//! Loads a comma-separated file with a header row into a Polars `DataFrame`
//! and provides the cell helpers shared by profiling and rule evaluation.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use dq_ingest::read_dataset;
//!
//! let df = read_dataset(Path::new("data/customers.csv"))?;
//! println!("{} rows", df.height());
//! ```

mod cells;
mod reader;
mod error;

// === Error Types ===
pub use error::{InputError, Result};

// === CSV Reading ===
pub use reader::{
    MAX_CSV_FILE_SIZE, NULL_TOKENS, check_file_size, read_dataset, read_header, validate_encoding,
};

// === Cell Helpers ===
pub use cells::{CellKey, cell_key, cell_text, is_scalar_dtype};
