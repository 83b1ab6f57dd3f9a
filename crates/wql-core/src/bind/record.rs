use crate::{
    bind::{
        PropertySource,
        coercion::{Coercion, coerce},
    },
    error::{FieldMismatch, MismatchReason, PropertyError, QueryError},
    traits::Record,
};

///
/// BindReport
///
/// Field mismatches observed while binding one record, in field order.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct BindReport {
    mismatches: Vec<FieldMismatch>,
}

impl BindReport {
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.mismatches.is_empty()
    }

    #[must_use]
    pub fn mismatches(&self) -> &[FieldMismatch] {
        &self.mismatches
    }

    /// The mismatch surfaced for this record: the last one observed.
    #[must_use]
    pub fn last(&self) -> Option<&FieldMismatch> {
        self.mismatches.last()
    }

    #[must_use]
    pub fn into_last(self) -> Option<FieldMismatch> {
        self.mismatches.into_iter().next_back()
    }

    fn record(&mut self, mismatch: FieldMismatch) {
        tracing::trace!(
            record = %mismatch.record,
            field = %mismatch.field,
            reason = %mismatch.reason,
            "field mismatch"
        );
        self.mismatches.push(mismatch);
    }
}

/// Bind one source record into `dst`.
///
/// Every declared field is visited in order. Unsettable fields, absent
/// properties, and table mismatches are collected in the report and the
/// walk continues; parse failures and session failures abort immediately.
pub fn bind_record<R, S>(source: &S, dst: &mut R) -> Result<BindReport, QueryError>
where
    R: Record,
    S: PropertySource + ?Sized,
{
    let model = R::MODEL;
    let mut report = BindReport::default();

    for (index, field) in model.fields.iter().enumerate() {
        let mismatch = |reason| FieldMismatch::new(model.name, field.name, reason);

        if !field.settable {
            report.record(mismatch(MismatchReason::NotSettable));
            continue;
        }

        let value = match source.property(field.name) {
            Ok(value) => value,
            Err(PropertyError::Missing { .. }) => {
                report.record(mismatch(MismatchReason::NoSuchProperty));
                continue;
            }
            Err(PropertyError::Session(err)) => return Err(err.into()),
        };

        match coerce(value, field.kind, field.optional)? {
            Coercion::Assign(value) => dst.assign(index, value),
            Coercion::Leave => {}
            Coercion::Mismatch(reason) => report.record(mismatch(reason)),
        }
    }

    Ok(report)
}
