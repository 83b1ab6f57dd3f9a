///
/// FieldModel
/// Runtime field metadata used by the binder and query synthesis.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FieldModel {
    /// Source property name this field binds from.
    pub name: &'static str,
    /// Coercion routing for the (unwrapped) field type.
    pub kind: FieldKind,
    /// Field is an `Option<_>`; a null source value leaves it `None`.
    pub optional: bool,
    /// Field is `pub`. Non-public fields are reported, never written.
    pub settable: bool,
}

impl FieldModel {
    #[must_use]
    pub const fn new(name: &'static str, kind: FieldKind, optional: bool, settable: bool) -> Self {
        Self {
            name,
            kind,
            optional,
            settable,
        }
    }
}

///
/// FieldKind
///
/// Destination kind as seen by the coercion table. Integer width lives on
/// the Rust type; narrowing happens when the coerced value is assigned.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum FieldKind {
    Bool,
    Int,
    Text,
    Timestamp,
    Uint,

    /// Any field type outside the coercion table (floats, collections, ...).
    Unsupported,
}

impl FieldKind {
    #[must_use]
    pub const fn is_integer(self) -> bool {
        matches!(self, Self::Int | Self::Uint)
    }
}
