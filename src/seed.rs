//! Seed data - the static initial contents of a store, as JSON.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::record::Record;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("malformed seed for {collection}: {source}")]
    Json {
        collection: &'static str,
        source: serde_json::Error,
    },
}

/// Parse a JSON array of records.
pub fn from_json<R>(json: &str) -> Result<Vec<R>, SeedError>
where
    R: Record + DeserializeOwned,
{
    serde_json::from_str(json).map_err(|source| SeedError::Json {
        collection: R::COLLECTION,
        source,
    })
}

/// Parse a JSON object mapping scope names (companies) to record arrays.
pub fn scoped_from_json<R>(json: &str) -> Result<BTreeMap<String, Vec<R>>, SeedError>
where
    R: Record + DeserializeOwned,
{
    serde_json::from_str(json).map_err(|source| SeedError::Json {
        collection: R::COLLECTION,
        source,
    })
}
