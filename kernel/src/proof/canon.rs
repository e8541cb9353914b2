//! Canonical JSON bytes: the one serialization used before hashing.
//!
//! Every digest computed over a structured summary goes through
//! [`canonical_json_bytes`], so two runs that produce the same logical value
//! always produce the same bytes.
//!
//! # Rules
//!
//! 1. Object keys are emitted in lexicographic byte order, at every depth.
//! 2. Compact form, no whitespace.
//! 3. Strings use `serde_json`'s RFC 8259 escaping.
//! 4. Numbers must be integers. Floats are rejected so formatting can never
//!    drift between platforms.

/// Error type for canonical JSON serialization.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CanonError {
    /// A JSON number was not an integer.
    #[error("non-integer number in canonical JSON: {raw}")]
    NonIntegerNumber { raw: String },
}

/// Produce canonical JSON bytes from a `serde_json::Value`.
///
/// # Errors
///
/// Returns [`CanonError::NonIntegerNumber`] if any number in `value` is not
/// representable as `i64` or `u64`.
pub fn canonical_json_bytes(value: &serde_json::Value) -> Result<Vec<u8>, CanonError> {
    let mut buf = Vec::new();
    write_value(&mut buf, value)?;
    Ok(buf)
}

fn write_value(buf: &mut Vec<u8>, value: &serde_json::Value) -> Result<(), CanonError> {
    use serde_json::Value;

    match value {
        Value::Null | Value::Bool(_) | Value::String(_) => write_scalar(buf, value),
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                write_scalar(buf, value);
            } else {
                return Err(CanonError::NonIntegerNumber { raw: n.to_string() });
            }
        }
        Value::Array(items) => {
            buf.push(b'[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    buf.push(b',');
                }
                write_value(buf, item)?;
            }
            buf.push(b']');
        }
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_by(|a, b| a.0.as_bytes().cmp(b.0.as_bytes()));

            buf.push(b'{');
            for (i, (key, item)) in entries.into_iter().enumerate() {
                if i > 0 {
                    buf.push(b',');
                }
                write_key(buf, key);
                buf.push(b':');
                write_value(buf, item)?;
            }
            buf.push(b'}');
        }
    }
    Ok(())
}

// Writing into a Vec cannot fail and scalars always serialize.
fn write_scalar(buf: &mut Vec<u8>, value: &serde_json::Value) {
    let _ = serde_json::to_writer(&mut *buf, value);
}

fn write_key(buf: &mut Vec<u8>, key: &str) {
    let _ = serde_json::to_writer(&mut *buf, key);
}
