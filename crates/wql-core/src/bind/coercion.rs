//! The closed coercion table from source value categories onto field kinds.

use crate::{
    error::{MismatchReason, ParseError},
    model::FieldKind,
    types::Timestamp,
    value::Value,
};

///
/// Coerced
///
/// A source value converted to a destination kind, before any narrowing
/// to the field's own width.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Coerced {
    Bool(bool),
    Int(i64),
    Text(String),
    Timestamp(Timestamp),
    Uint(u64),
}

///
/// Coercion
///
/// Table outcome for one (value, field) pair.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Coercion {
    /// Write this value into the field.
    Assign(Coerced),
    /// Leave the field at its current value; not a mismatch.
    Leave,
    /// Non-fatal mismatch for this field.
    Mismatch(MismatchReason),
}

/// Coerce one source value onto a field of `kind`.
///
/// Malformed integer and datetime text is a hard [`ParseError`]; every
/// other failure is a [`Coercion::Mismatch`]. Text bound to a kind with no
/// text rule is left alone.
#[allow(clippy::cast_sign_loss)]
pub fn coerce(value: Value, kind: FieldKind, optional: bool) -> Result<Coercion, ParseError> {
    let coercion = match value {
        Value::Int(v) => match kind {
            FieldKind::Int => Coercion::Assign(Coerced::Int(v)),
            FieldKind::Uint => Coercion::Assign(Coerced::Uint(v as u64)),
            _ => Coercion::Mismatch(MismatchReason::NotInteger),
        },

        Value::Text(text) => match kind {
            FieldKind::Text => Coercion::Assign(Coerced::Text(text)),
            FieldKind::Int => Coercion::Assign(Coerced::Int(parse_int(text)?)),
            FieldKind::Uint => Coercion::Assign(Coerced::Uint(parse_int(text)? as u64)),
            FieldKind::Timestamp => {
                Coercion::Assign(Coerced::Timestamp(Timestamp::parse_datetime(&text)?))
            }
            FieldKind::Bool | FieldKind::Unsupported => Coercion::Leave,
        },

        Value::Bool(v) => match kind {
            FieldKind::Bool => Coercion::Assign(Coerced::Bool(v)),
            _ => Coercion::Mismatch(MismatchReason::NotBoolean),
        },

        Value::Null if optional => Coercion::Leave,
        Value::Null => Coercion::Mismatch(MismatchReason::UnsupportedCategory),
    };

    Ok(coercion)
}

fn parse_int(text: String) -> Result<i64, ParseError> {
    text.parse::<i64>()
        .map_err(|source| ParseError::Integer {
            value: text,
            source,
        })
}
