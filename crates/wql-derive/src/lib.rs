use proc_macro::TokenStream;

mod attrs;
mod record;

/// Derive `Record`, `Element`, and `QueryTarget` for a struct with named
/// fields.
///
/// Container attributes, all optional:
/// - `#[record(name = "Win32_Process")]` sets the source class name
///   (defaults to the struct name)
/// - `#[record(rename_all = "PascalCase")]` derives property names from field
///   names (`PascalCase`, `camelCase`, or `snake_case`)
///
/// Field attribute `#[record(rename = "...")]` sets one property name.
/// Only `pub` fields are written; others are reported as not settable.
#[proc_macro_derive(Record, attributes(record))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    record::derive_record(input.into()).into()
}
