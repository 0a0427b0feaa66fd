//! Query Layer - pure filtering of a store by text and facet constraints.
//!
//! A record is visible when the text matches ANY of its searchable fields
//! (case-insensitive substring) AND every facet constraint matches exactly.
//! The sentinel [`ALL`] lifts the constraint for that facet. Output keeps
//! the input order.
//!
//! ## Example
//!
//! ```ignore
//! let query = Query::new()
//!     .text("inv")
//!     .facet("status", "New")
//!     .facet("priority", ALL);
//!
//! let visible = query.filter(store.iter());
//! ```

mod group;

pub use group::{group_by, Group};

use serde::{Deserialize, Serialize};

use crate::record::Record;
use crate::store::EntityStore;

/// Facet value meaning "no constraint".
pub const ALL: &str = "All";

/// An exact-equality constraint on one facet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetConstraint {
    pub facet: String,
    pub value: String,
}

/// Current search/filter inputs of a list view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    #[serde(default)]
    text: String,
    #[serde(default)]
    facets: Vec<FacetConstraint>,
}

impl Query {
    /// A query with no constraints.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.set_text(text);
        self
    }

    pub fn facet(mut self, facet: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_facet(facet, value);
        self
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Constrain a facet, replacing any earlier value. `ALL` clears it.
    pub fn set_facet(&mut self, facet: impl Into<String>, value: impl Into<String>) {
        let facet = facet.into();
        let value = value.into();
        self.facets.retain(|c| c.facet != facet);
        if value != ALL {
            self.facets.push(FacetConstraint { facet, value });
        }
    }

    /// Drop every constraint.
    pub fn clear(&mut self) {
        self.text.clear();
        self.facets.clear();
    }

    pub fn search_text(&self) -> &str {
        &self.text
    }

    pub fn constraints(&self) -> &[FacetConstraint] {
        &self.facets
    }

    /// Active value for a facet, or `ALL` when unconstrained.
    pub fn facet_value(&self, facet: &str) -> &str {
        self.facets
            .iter()
            .find(|c| c.facet == facet)
            .map(|c| c.value.as_str())
            .unwrap_or(ALL)
    }

    pub fn is_unconstrained(&self) -> bool {
        self.text.is_empty() && self.facets.is_empty()
    }

    pub fn matches<R: Record>(&self, record: &R) -> bool {
        Matcher::new(self).matches(record)
    }

    /// Matching records, in input order.
    pub fn filter<'a, R, I>(&self, records: I) -> Vec<&'a R>
    where
        R: Record,
        I: IntoIterator<Item = &'a R>,
    {
        let matcher = Matcher::new(self);
        records.into_iter().filter(|r| matcher.matches(*r)).collect()
    }
}

/// Records of `store` matching `query`, in store order.
pub fn filter<'a, R: Record>(store: &'a EntityStore<R>, query: &Query) -> Vec<&'a R> {
    query.filter(store.iter())
}

// Query with the needle lowercased once per filter pass.
struct Matcher<'q> {
    needle: Option<String>,
    facets: &'q [FacetConstraint],
}

impl<'q> Matcher<'q> {
    fn new(query: &'q Query) -> Self {
        let needle = (!query.text.is_empty()).then(|| query.text.to_lowercase());
        Self {
            needle,
            facets: &query.facets,
        }
    }

    fn matches<R: Record>(&self, record: &R) -> bool {
        self.matches_text(record) && self.matches_facets(record)
    }

    fn matches_text<R: Record>(&self, record: &R) -> bool {
        let Some(needle) = &self.needle else {
            return true;
        };
        record
            .search_text()
            .iter()
            .any(|field| field.to_lowercase().contains(needle.as_str()))
    }

    fn matches_facets<R: Record>(&self, record: &R) -> bool {
        self.facets
            .iter()
            .all(|c| record.facet(&c.facet) == Some(c.value.as_str()))
    }
}
