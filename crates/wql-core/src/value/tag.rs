use crate::value::Value;

///
/// ValueTag
///
/// Source value category as reported by the remote data model.
/// Diagnostic label only; coercion matches on `Value` itself.
///

#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ValueTag {
    Bool = 1,
    Int = 2,
    Null = 3,
    Text = 4,
}

impl ValueTag {
    /// Stable human-readable category label for diagnostics.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Bool => "Bool",
            Self::Int => "Int",
            Self::Null => "Null",
            Self::Text => "Text",
        }
    }
}

impl std::fmt::Display for ValueTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Source category tag for a value.
#[must_use]
pub const fn tag_of(value: &Value) -> ValueTag {
    match value {
        Value::Bool(_) => ValueTag::Bool,
        Value::Int(_) => ValueTag::Int,
        Value::Null => ValueTag::Null,
        Value::Text(_) => ValueTag::Text,
    }
}
