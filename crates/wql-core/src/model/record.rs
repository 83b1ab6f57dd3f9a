use crate::model::field::FieldModel;

///
/// RecordModel
/// Macro-generated runtime model for one destination record type.
///

#[derive(Debug, Eq, PartialEq)]
pub struct RecordModel {
    /// Source class name, used after `FROM` and in mismatch reports.
    pub name: &'static str,
    /// Ordered field list (declaration order).
    pub fields: &'static [FieldModel],
}

impl RecordModel {
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldModel> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Field names in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|field| field.name)
    }
}
