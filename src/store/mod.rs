//! Entity Store - the ordered in-memory collection owned by one view.
//!
//! Records are kept most-recent-first: seeds keep their given order and
//! `add` prepends. Every write is keyed by id and validated before it
//! touches the collection, so a failed write leaves the store unchanged.
//!
//! ## Example
//!
//! ```ignore
//! use dealdesk::{EntityStore, Query};
//!
//! let mut store = EntityStore::create(crm::lead::seed()?)?;
//! store.add(new_lead)?;
//! store.update_facet_by_id("lead-2", "status", "Qualified")?;
//! store.remove_by_id("lead-7")?;
//!
//! let fresh = store.filter(&Query::new().facet("status", "New"));
//! ```

mod change;
#[cfg(feature = "emitter")]
mod emitter;
mod error;
mod patch;

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::query::Query;
use crate::record::Record;

pub use change::{ChangeKind, StoreChange};
#[cfg(feature = "emitter")]
use emitter::StoreEmitter;
pub use error::StoreError;
pub use patch::{Patch, Replace};

/// What update/remove do when the id is not in the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingIdPolicy {
    /// No-op, reported as `Ok(false)`.
    #[default]
    Ignore,
    /// Fail with `StoreError::NotFound`.
    Reject,
}

/// In-memory ordered collection of records of one type.
pub struct EntityStore<R: Record> {
    records: Vec<R>,
    policy: MissingIdPolicy,
    #[cfg(feature = "emitter")]
    emitter: StoreEmitter,
}

impl<R: Record> Default for EntityStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record + fmt::Debug> fmt::Debug for EntityStore<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntityStore")
            .field("collection", &R::COLLECTION)
            .field("policy", &self.policy)
            .field("records", &self.records)
            .finish()
    }
}

impl<R: Record> EntityStore<R> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            policy: MissingIdPolicy::default(),
            #[cfg(feature = "emitter")]
            emitter: StoreEmitter::new(),
        }
    }

    /// Create a store from seed data, keeping the seed's order.
    pub fn create(seed: Vec<R>) -> Result<Self, StoreError> {
        check_ids(&seed)?;
        let mut store = Self::new();
        store.records = seed;
        tracing::debug!(collection = R::COLLECTION, len = store.records.len(), "store created");
        Ok(store)
    }

    /// Set the missing-id policy.
    pub fn with_policy(mut self, policy: MissingIdPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> MissingIdPolicy {
        self.policy
    }

    pub fn set_policy(&mut self, policy: MissingIdPolicy) {
        self.policy = policy;
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in store order.
    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.records.iter()
    }

    pub fn get(&self, id: &str) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|r| r.id() == id)
    }

    /// Records matching the query, in store order.
    pub fn filter(&self, query: &Query) -> Vec<&R> {
        query.filter(self.records.iter())
    }

    /// Number of records matching the query.
    pub fn count(&self, query: &Query) -> usize {
        self.records.iter().filter(|r| query.matches(*r)).count()
    }

    /// Add a new record at the front. The id must be new to this store.
    pub fn add(&mut self, record: R) -> Result<(), StoreError> {
        let id = record.id();
        if id.is_empty() {
            return Err(StoreError::EmptyId {
                collection: R::COLLECTION,
            });
        }
        if self.contains(id) {
            return Err(StoreError::DuplicateId {
                collection: R::COLLECTION,
                id: id.to_string(),
            });
        }
        validate(&record)?;

        let id = id.to_string();
        self.records.insert(0, record);
        tracing::debug!(collection = R::COLLECTION, id = %id, "record added");
        self.notify(ChangeKind::Added, Some(id));
        Ok(())
    }

    /// Apply a patch to the record with this id.
    ///
    /// The patch is checked against the stored record, then runs on a copy.
    /// The copy replaces the stored record only if its id is unchanged and
    /// its required fields are filled. Returns `Ok(false)` for an absent id
    /// under `MissingIdPolicy::Ignore`.
    pub fn update_by_id<P>(&mut self, id: &str, patch: &P) -> Result<bool, StoreError>
    where
        P: Patch<R> + ?Sized,
    {
        self.write_by_id(id, |record| {
            if let Err(reason) = patch.check(record) {
                tracing::debug!(collection = R::COLLECTION, id = %id, %reason, "patch refused");
                return Err(StoreError::Refused {
                    collection: R::COLLECTION,
                    id: id.to_string(),
                    reason,
                });
            }
            patch.apply(record);
            Ok(())
        })
    }

    /// Assign a facet (status, priority, ...) on the record with this id.
    pub fn update_facet_by_id(
        &mut self,
        id: &str,
        facet: &str,
        value: &str,
    ) -> Result<bool, StoreError> {
        self.write_by_id(id, |record| Ok(record.set_facet(facet, value)?))
    }

    /// Remove the record with this id.
    pub fn remove_by_id(&mut self, id: &str) -> Result<bool, StoreError> {
        let Some(index) = self.position(id) else {
            return self.missing(id);
        };
        self.records.remove(index);
        tracing::debug!(collection = R::COLLECTION, id = %id, "record removed");
        self.notify(ChangeKind::Removed, Some(id.to_string()));
        Ok(true)
    }

    /// Swap the whole collection, as when the current scope changes.
    /// On error the previous contents remain.
    pub fn replace_all(&mut self, records: Vec<R>) -> Result<(), StoreError> {
        check_ids(&records)?;
        self.records = records;
        tracing::debug!(collection = R::COLLECTION, len = self.records.len(), "store replaced");
        self.notify(ChangeKind::Replaced, None);
        Ok(())
    }

    /// Register a listener for `added`, `updated`, `removed` or `replaced`.
    #[cfg(feature = "emitter")]
    pub fn on<F>(&mut self, event: &str, listener: F)
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        self.emitter.on(event, listener);
    }

    fn write_by_id<F>(&mut self, id: &str, write: F) -> Result<bool, StoreError>
    where
        F: FnOnce(&mut R) -> Result<(), StoreError>,
    {
        let Some(index) = self.position(id) else {
            return self.missing(id);
        };

        let mut next = self.records[index].clone();
        write(&mut next)?;
        if next.id() != id {
            return Err(StoreError::IdChanged {
                collection: R::COLLECTION,
                id: id.to_string(),
                attempted: next.id().to_string(),
            });
        }
        validate(&next)?;

        self.records[index] = next;
        tracing::debug!(collection = R::COLLECTION, id = %id, "record updated");
        self.notify(ChangeKind::Updated, Some(id.to_string()));
        Ok(true)
    }

    fn missing(&self, id: &str) -> Result<bool, StoreError> {
        match self.policy {
            MissingIdPolicy::Ignore => {
                tracing::debug!(collection = R::COLLECTION, id = %id, "id not in store; skipped");
                Ok(false)
            }
            MissingIdPolicy::Reject => Err(StoreError::NotFound {
                collection: R::COLLECTION,
                id: id.to_string(),
            }),
        }
    }

    #[cfg(feature = "emitter")]
    fn notify(&mut self, kind: ChangeKind, id: Option<String>) {
        let len = self.records.len();
        self.emitter.emit(StoreChange {
            collection: R::COLLECTION.to_string(),
            kind,
            id,
            len,
        });
    }

    #[cfg(not(feature = "emitter"))]
    fn notify(&mut self, _kind: ChangeKind, _id: Option<String>) {}
}

impl<'a, R: Record> IntoIterator for &'a EntityStore<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

fn check_ids<R: Record>(records: &[R]) -> Result<(), StoreError> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        let id = record.id();
        if id.is_empty() {
            return Err(StoreError::EmptyId {
                collection: R::COLLECTION,
            });
        }
        if !seen.insert(id) {
            return Err(StoreError::DuplicateId {
                collection: R::COLLECTION,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

fn validate<R: Record>(record: &R) -> Result<(), StoreError> {
    let fields = record.missing_required();
    if fields.is_empty() {
        Ok(())
    } else {
        Err(StoreError::Validation {
            collection: R::COLLECTION,
            fields,
        })
    }
}
