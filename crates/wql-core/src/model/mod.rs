//! Runtime record model definitions.
//!
//! These are the static, derive-generated descriptors the binder walks in
//! place of runtime reflection. Declaration order is preserved and is the
//! order `create_query` lists columns in.
pub mod field;
pub mod record;

pub use field::{FieldKind, FieldModel};
pub use record::RecordModel;
