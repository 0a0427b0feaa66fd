//! Records - the shape contract shared by every entity type.
//!
//! A record carries an immutable id, a fixed set of searchable text fields
//! and a fixed set of categorical fields ("facets") whose legal labels are
//! known per type.
//!
//! ## Example
//!
//! ```ignore
//! use dealdesk::{Facet, Record};
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq, Facet)]
//! enum Status {
//!     Open,
//!     #[facet(rename = "On Hold")]
//!     OnHold,
//! }
//!
//! #[derive(Clone, Debug, Record)]
//! #[record(collection = "tickets")]
//! struct Ticket {
//!     #[record(id)]
//!     id: String,
//!     #[record(search, required)]
//!     title: String,
//!     #[record(facet)]
//!     status: Status,
//! }
//!
//! assert_eq!(ticket.facet("status"), Some("On Hold"));
//! ```

mod field;

pub use field::{RequiredField, SearchField};

use thiserror::Error;

/// Trait for entity types held by an [`EntityStore`](crate::EntityStore).
pub trait Record: Clone + Send + Sync + 'static {
    /// The collection name for this record type (e.g., "leads", "requests").
    const COLLECTION: &'static str;

    /// Returns the unique identifier for this record.
    fn id(&self) -> &str;

    /// Values of the searchable text fields, in declaration order.
    fn search_text(&self) -> Vec<&str>;

    /// Current label of the named facet, or `None` if the type has no such facet.
    fn facet(&self, name: &str) -> Option<&'static str>;

    /// Assign a facet from its label.
    fn set_facet(&mut self, name: &str, value: &str) -> Result<(), FacetError>;

    /// Names of every facet this type exposes.
    fn facet_names() -> &'static [&'static str];

    /// Legal labels of the named facet, in declaration order.
    fn facet_values(name: &str) -> Option<&'static [&'static str]>;

    /// Names of required fields that are currently blank.
    fn missing_required(&self) -> Vec<&'static str> {
        Vec::new()
    }
}

/// A categorical value with a fixed label set.
pub trait Facet: Sized + 'static {
    /// Every legal label, in declaration order.
    const VALUES: &'static [&'static str];

    fn as_str(&self) -> &'static str;

    /// Exact label match.
    fn parse(value: &str) -> Option<Self>;
}

/// Error type for facet access.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FacetError {
    /// The record type has no facet with this name.
    #[error("{collection} has no facet named {facet}")]
    UnknownFacet {
        collection: &'static str,
        facet: String,
    },
    /// The label is not legal for this facet.
    #[error("{value:?} is not a legal value for facet {facet}")]
    InvalidValue { facet: String, value: String },
}
