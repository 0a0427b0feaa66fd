//! Entity-list integration tests on a record type defined outside the crate.
//!
//! Covers the store, the query layer, the summary counters and the
//! selection surface against one shared task fixture.

mod support;

mod query;
mod summary;
mod surface;
