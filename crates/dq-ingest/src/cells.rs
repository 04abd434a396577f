//! Polars `AnyValue` helpers for row-level comparison and text checks.

use polars::prelude::{AnyValue, DataType};

/// Token a null cell takes when checked as text.
pub const NULL_TEXT: &str = "nan";

/// Hashable, comparable form of a single cell.
///
/// Nulls compare equal to each other. Floats compare by value with `-0.0`
/// folded into `0.0` and every NaN folded into one key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CellKey {
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(u64),
    Text(String),
    Other(String),
}

/// Converts a cell into its [`CellKey`].
pub fn cell_key(value: AnyValue<'_>) -> CellKey {
    match value {
        AnyValue::Null => CellKey::Null,
        AnyValue::Boolean(b) => CellKey::Bool(b),
        AnyValue::Int8(v) => CellKey::Int(i64::from(v)),
        AnyValue::Int16(v) => CellKey::Int(i64::from(v)),
        AnyValue::Int32(v) => CellKey::Int(i64::from(v)),
        AnyValue::Int64(v) => CellKey::Int(v),
        AnyValue::UInt8(v) => CellKey::UInt(u64::from(v)),
        AnyValue::UInt16(v) => CellKey::UInt(u64::from(v)),
        AnyValue::UInt32(v) => CellKey::UInt(u64::from(v)),
        AnyValue::UInt64(v) => CellKey::UInt(v),
        AnyValue::Float32(v) => float_key(f64::from(v)),
        AnyValue::Float64(v) => float_key(v),
        AnyValue::String(s) => CellKey::Text(s.to_string()),
        AnyValue::StringOwned(s) => CellKey::Text(s.to_string()),
        other => CellKey::Other(other.to_string()),
    }
}

fn float_key(v: f64) -> CellKey {
    if v.is_nan() {
        CellKey::Float(f64::NAN.to_bits())
    } else if v == 0.0 {
        CellKey::Float(0.0f64.to_bits())
    } else {
        CellKey::Float(v.to_bits())
    }
}

/// Converts a cell to the text a pattern check sees.
///
/// Nulls become [`NULL_TEXT`], so they are checked like any other value.
/// Floats always carry a fractional part (`1.0`), booleans are `True`/`False`.
pub fn cell_text(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => NULL_TEXT.to_string(),
        AnyValue::Boolean(b) => if b { "True" } else { "False" }.to_string(),
        AnyValue::Int8(v) => v.to_string(),
        AnyValue::Int16(v) => v.to_string(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::UInt8(v) => v.to_string(),
        AnyValue::UInt16(v) => v.to_string(),
        AnyValue::UInt32(v) => v.to_string(),
        AnyValue::UInt64(v) => v.to_string(),
        AnyValue::Float32(v) => format_float(f64::from(v)),
        AnyValue::Float64(v) => format_float(v),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        other => other.to_string(),
    }
}

fn format_float(v: f64) -> String {
    if v.is_nan() {
        return NULL_TEXT.to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    let s = format!("{v}");
    if s.contains('.') || s.contains('e') {
        s
    } else {
        format!("{s}.0")
    }
}

/// True for column types whose cells can be compared and rendered as text.
pub fn is_scalar_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Boolean
            | DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64
            | DataType::String
            | DataType::Null
    )
}
