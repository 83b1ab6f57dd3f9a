use std::{fmt, num::ParseIntError};
use thiserror::Error as ThisError;

///
/// QueryError
///
/// Outcome of a failed query. Every variant except `FieldMismatch` is fatal
/// and stops iteration at the point it was raised.
///

#[derive(Debug, ThisError)]
pub enum QueryError {
    #[error("wql: invalid entity type")]
    InvalidEntityType,

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    FieldMismatch(#[from] FieldMismatch),
}

impl QueryError {
    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::InvalidEntityType => ErrorClass::Shape,
            Self::Session(_) => ErrorClass::Transport,
            Self::Parse(_) => ErrorClass::Parse,
            Self::FieldMismatch(_) => ErrorClass::FieldMismatch,
        }
    }

    /// False only for field mismatches, which are reported after every
    /// record has been appended.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        !matches!(self, Self::FieldMismatch(_))
    }

    #[must_use]
    pub const fn as_field_mismatch(&self) -> Option<&FieldMismatch> {
        match self {
            Self::FieldMismatch(err) => Some(err),
            _ => None,
        }
    }
}

///
/// ErrorClass
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorClass {
    /// Destination container is not a binding target.
    Shape,
    /// Connecting, executing, or fetching from the source failed.
    Transport,
    /// A text value failed its declared parse rule.
    Parse,
    /// Non-fatal per-field binding failure.
    FieldMismatch,
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Shape => "shape",
            Self::Transport => "transport",
            Self::Parse => "parse",
            Self::FieldMismatch => "field_mismatch",
        };

        f.write_str(label)
    }
}

///
/// SessionError
///
/// Failure reported by the session layer. Propagated verbatim.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("wql: {kind}: {message}")]
pub struct SessionError {
    pub kind: SessionErrorKind,
    pub message: String,
}

impl SessionError {
    pub fn new(kind: SessionErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn connect(message: impl Into<String>) -> Self {
        Self::new(SessionErrorKind::Connect, message)
    }

    pub fn execute(message: impl Into<String>) -> Self {
        Self::new(SessionErrorKind::Execute, message)
    }

    pub fn fetch(message: impl Into<String>) -> Self {
        Self::new(SessionErrorKind::Fetch, message)
    }

    pub fn property(message: impl Into<String>) -> Self {
        Self::new(SessionErrorKind::Property, message)
    }

    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::new(SessionErrorKind::Unsupported, message)
    }
}

///
/// SessionErrorKind
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SessionErrorKind {
    Connect,
    Execute,
    Fetch,
    Property,
    Unsupported,
}

impl fmt::Display for SessionErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Connect => "connect failed",
            Self::Execute => "execute failed",
            Self::Fetch => "fetch failed",
            Self::Property => "property read failed",
            Self::Unsupported => "unsupported operation",
        };

        f.write_str(label)
    }
}

///
/// PropertyError
///
/// Named-property lookup failure. `Missing` is a field mismatch for the
/// binder; `Session` aborts the query.
///

#[derive(Debug, ThisError)]
pub enum PropertyError {
    #[error("no such property: {name}")]
    Missing { name: String },

    #[error(transparent)]
    Session(#[from] SessionError),
}

impl PropertyError {
    pub fn missing(name: impl Into<String>) -> Self {
        Self::Missing { name: name.into() }
    }
}

///
/// ParseError
///
/// Source text that matched a coercion rule by shape but not by content.
///

#[derive(Debug, ThisError)]
pub enum ParseError {
    #[error("wql: cannot parse {value:?} as a base-10 integer: {source}")]
    Integer {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("wql: cannot parse {value:?} as a datetime: {reason}")]
    Timestamp { value: String, reason: String },
}

impl ParseError {
    pub(crate) fn timestamp(value: &str, reason: impl Into<String>) -> Self {
        Self::Timestamp {
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

///
/// FieldMismatch
///
/// A field that could not be loaded from its source property. The record
/// it belongs to is still appended to the destination.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("wql: cannot load field {field:?} into a {record:?}: {reason}")]
pub struct FieldMismatch {
    pub record: String,
    pub field: String,
    pub reason: MismatchReason,
}

impl FieldMismatch {
    pub fn new(record: impl Into<String>, field: impl Into<String>, reason: MismatchReason) -> Self {
        Self {
            record: record.into(),
            field: field.into(),
            reason,
        }
    }
}

///
/// MismatchReason
///

#[remain::sorted]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum MismatchReason {
    NoSuchProperty,
    NotBoolean,
    NotInteger,
    NotSettable,
    UnsupportedCategory,
}

impl MismatchReason {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NoSuchProperty => "no such source property",
            Self::NotBoolean => "not a boolean field",
            Self::NotInteger => "not an integer-compatible field",
            Self::NotSettable => "not settable",
            Self::UnsupportedCategory => "unsupported source value category",
        }
    }
}

impl fmt::Display for MismatchReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
