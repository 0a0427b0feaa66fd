use thiserror::Error;

use crate::record::FacetError;

/// Error type for entity store operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A record was offered without an id.
    #[error("{collection} record has an empty id")]
    EmptyId { collection: &'static str },
    /// The id is already held by another record in this store.
    #[error("duplicate id {collection}:{id}")]
    DuplicateId { collection: &'static str, id: String },
    /// No record with this id (only under `MissingIdPolicy::Reject`, or on select).
    #[error("record not found: {collection}:{id}")]
    NotFound { collection: &'static str, id: String },
    /// A patch or draft tried to change a record's id.
    #[error("id of {collection}:{id} is immutable (attempted {attempted})")]
    IdChanged {
        collection: &'static str,
        id: String,
        attempted: String,
    },
    /// Required fields are blank.
    #[error("{collection} record is missing required fields: {}", .fields.join(", "))]
    Validation {
        collection: &'static str,
        fields: Vec<&'static str>,
    },
    /// The record's current state does not allow this action.
    #[error("{collection}:{id} refused the action: {reason}")]
    Refused {
        collection: &'static str,
        id: String,
        reason: String,
    },
    #[error(transparent)]
    Facet(#[from] FacetError),
}
