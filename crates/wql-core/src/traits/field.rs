use crate::{bind::Coerced, model::FieldKind, types::Timestamp};
use time::OffsetDateTime;

///
/// FieldType
///
/// Maps a Rust field type onto the coercion table and builds it back from
/// a coerced source value.
///

pub trait FieldType: Sized {
    const KIND: FieldKind;

    /// `Option<_>` wrappers; null source values leave these unset.
    const OPTIONAL: bool = false;

    /// Build a field value from a coerced value of this type's kind.
    /// Returns `None` for a value of any other kind.
    fn from_coerced(value: Coerced) -> Option<Self>;

    /// Overwrite `slot`, leaving it untouched if `value` does not fit.
    fn assign(slot: &mut Self, value: Coerced) {
        if let Some(value) = Self::from_coerced(value) {
            *slot = value;
        }
    }
}

// Integer widths take the coerced 64-bit value with native truncation.
macro_rules! impl_field_type_int {
    ($kind:ident, $variant:ident: $($ty:ty),* $(,)?) => {
        $(
            impl FieldType for $ty {
                const KIND: FieldKind = FieldKind::$kind;

                #[allow(
                    clippy::cast_lossless,
                    clippy::cast_possible_truncation,
                    clippy::cast_possible_wrap,
                    clippy::cast_sign_loss,
                    clippy::unnecessary_cast
                )]
                fn from_coerced(value: Coerced) -> Option<Self> {
                    match value {
                        Coerced::$variant(v) => Some(v as Self),
                        _ => None,
                    }
                }
            }
        )*
    };
}

impl_field_type_int!(Int, Int: i8, i16, i32, i64, i128, isize);
impl_field_type_int!(Uint, Uint: u8, u16, u32, u64, u128, usize);

// Types outside the coercion table: they accept nothing.
macro_rules! impl_field_type_unsupported {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FieldType for $ty {
                const KIND: FieldKind = FieldKind::Unsupported;

                fn from_coerced(_: Coerced) -> Option<Self> {
                    None
                }
            }
        )*
    };
}

impl_field_type_unsupported!(f32, f64, char);

impl<T> FieldType for Vec<T> {
    const KIND: FieldKind = FieldKind::Unsupported;

    fn from_coerced(_: Coerced) -> Option<Self> {
        None
    }
}

impl FieldType for bool {
    const KIND: FieldKind = FieldKind::Bool;

    fn from_coerced(value: Coerced) -> Option<Self> {
        match value {
            Coerced::Bool(v) => Some(v),
            _ => None,
        }
    }
}

impl FieldType for String {
    const KIND: FieldKind = FieldKind::Text;

    fn from_coerced(value: Coerced) -> Option<Self> {
        match value {
            Coerced::Text(v) => Some(v),
            _ => None,
        }
    }
}

impl FieldType for Timestamp {
    const KIND: FieldKind = FieldKind::Timestamp;

    fn from_coerced(value: Coerced) -> Option<Self> {
        match value {
            Coerced::Timestamp(v) => Some(v),
            _ => None,
        }
    }
}

impl FieldType for OffsetDateTime {
    const KIND: FieldKind = FieldKind::Timestamp;

    fn from_coerced(value: Coerced) -> Option<Self> {
        Timestamp::from_coerced(value).map(Timestamp::get)
    }
}

impl<T: FieldType> FieldType for Option<T> {
    const KIND: FieldKind = T::KIND;
    const OPTIONAL: bool = true;

    fn from_coerced(value: Coerced) -> Option<Self> {
        T::from_coerced(value).map(Some)
    }
}
