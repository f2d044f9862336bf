//! JSON number handling for decimal quantities
//!
//! Rents, areas and bids are held as `Decimal` for exact comparison. On the
//! wire they stay plain JSON numbers: integral values are written as integers
//! (`100`, not `100.0`) so the source documents round-trip, anything with a
//! fractional part is written as a float.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serializer;

/// `serialize_with` target for `Decimal` fields
pub fn serialize<S: Serializer>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
    if value.fract().is_zero() {
        if let Some(int) = value.to_i64() {
            return serializer.serialize_i64(int);
        }
    }
    serializer.serialize_f64(value.to_f64().unwrap_or_default())
}

/// Same encoding as [`serialize`], for bodies built with `serde_json::json!`
pub fn to_json(value: Decimal) -> serde_json::Value {
    serialize(&value, serde_json::value::Serializer).unwrap_or(serde_json::Value::Null)
}
