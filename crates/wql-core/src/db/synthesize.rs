use crate::traits::QueryTarget;

/// Build a query selecting every field of `T` in declaration order.
///
/// `T` is a record, a pointer to one, or a sequence of either. `predicate`
/// is appended verbatim after a single space; callers supply a leading
/// `WHERE` themselves. Returns an empty string when `T` does not resolve
/// to a record type.
#[must_use]
pub fn create_query<T>(predicate: &str) -> String
where
    T: QueryTarget + ?Sized,
{
    let Some(model) = T::record_model() else {
        return String::new();
    };

    let fields = model.field_names().collect::<Vec<_>>().join(", ");

    format!("SELECT {fields} FROM {} {predicate}", model.name)
}

/// [`create_query`] with `T` inferred from a destination value.
#[must_use]
pub fn create_query_for<T>(_target: &T, predicate: &str) -> String
where
    T: QueryTarget + ?Sized,
{
    create_query::<T>(predicate)
}
