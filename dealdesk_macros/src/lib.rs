mod attr;
mod facet;
mod record;

use proc_macro::TokenStream;

// ============================================================================
// #[derive(Record)] derive macro
// ============================================================================

/// Derive macro for the `Record` trait.
///
/// # Usage
///
/// ```ignore
/// #[derive(Clone, Serialize, Deserialize, Record)]
/// #[record(collection = "leads")]
/// struct Lead {
///     #[record(id)]
///     pub id: String,
///     #[record(search, required)]
///     pub name: String,
///     #[record(search)]
///     pub company: String,
///     #[record(facet)]
///     pub status: LeadStatus,
///     #[record(facet = "type")]
///     pub kind: LeadKind,
/// }
/// ```
///
/// - `#[record(collection = "...")]` sets the collection name.
///   If omitted, defaults to snake_case struct name + "s".
/// - `#[record(id)]` marks the field used as the unique identifier.
///   If omitted, defaults to a field named `id`.
/// - `#[record(search)]` adds the field to the free-text search set.
/// - `#[record(facet)]` exposes the field as a categorical filter, named after
///   the field unless `facet = "..."` gives a name. The field type must
///   implement `Facet`.
/// - `#[record(required)]` reports the field from `missing_required` when blank.
#[proc_macro_derive(Record, attributes(record))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    record::derive_record(input)
}

// ============================================================================
// #[derive(Facet)] derive macro
// ============================================================================

/// Derive macro for the `Facet` trait on fieldless enums.
///
/// ```ignore
/// #[derive(Clone, Copy, Debug, PartialEq, Eq, Facet)]
/// enum RequestStatus {
///     New,
///     #[facet(rename = "In Progress")]
///     InProgress,
///     Resolved,
/// }
/// ```
///
/// Each variant's label is its name unless `rename` is given. Labels are
/// listed in `VALUES` in declaration order. A `Display` impl writing the
/// label is generated alongside.
#[proc_macro_derive(Facet, attributes(facet))]
pub fn derive_facet(input: TokenStream) -> TokenStream {
    facet::derive_facet(input)
}
