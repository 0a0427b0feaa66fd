//! Derived summary counters ("12 Pending", "38% qualified", pipeline value).
//!
//! Nothing here is stored. Every value is recomputed from the live store,
//! so a counter can never disagree with the list it summarizes.

use serde::Serialize;

use crate::query::Query;
use crate::record::Record;
use crate::store::EntityStore;

/// Count of records carrying one facet label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub value: &'static str,
    pub count: usize,
}

/// Number of records matching the query.
pub fn count<R: Record>(store: &EntityStore<R>, query: &Query) -> usize {
    store.count(query)
}

/// Number of records satisfying an arbitrary predicate.
pub fn count_where<R, F>(store: &EntityStore<R>, predicate: F) -> usize
where
    R: Record,
    F: Fn(&R) -> bool,
{
    store.iter().filter(|r| predicate(*r)).count()
}

/// One count per legal label of `facet`, zeros included, in declaration order.
pub fn tally<R: Record>(store: &EntityStore<R>, facet: &str) -> Vec<Tally> {
    let Some(values) = R::facet_values(facet) else {
        return Vec::new();
    };
    values
        .iter()
        .map(|&value| Tally {
            value,
            count: count_where(store, |r| r.facet(facet) == Some(value)),
        })
        .collect()
}

/// Percentage (0-100) of records matching the query; 0 for an empty store.
pub fn share<R: Record>(store: &EntityStore<R>, query: &Query) -> f64 {
    if store.is_empty() {
        return 0.0;
    }
    count(store, query) as f64 * 100.0 / store.len() as f64
}

/// Sum of a numeric field over the records matching the query.
pub fn sum_by<R, F>(store: &EntityStore<R>, query: &Query, value: F) -> u64
where
    R: Record,
    F: Fn(&R) -> u64,
{
    store
        .iter()
        .filter(|r| query.matches(*r))
        .map(value)
        .fold(0, u64::saturating_add)
}
