//! Views - one store, one query and one surface, owned together.
//!
//! A view is the unit of ownership: its store is never shared with another
//! view. Everything a list screen shows is derived on demand from the three
//! parts, so the list, the counters and the detail surface always agree.
//!
//! ## Example
//!
//! ```ignore
//! let mut leads = View::from_seed(crm::lead::seed()?, &Config::default())?;
//! leads.set_facet("status", "New");
//! assert_eq!(leads.visible().len(), 3);
//!
//! leads.select_visible(0)?;
//! leads.act(LeadPatch::Status(LeadStatus::Contacted))?;
//! ```

mod scoped;

pub use scoped::{ScopeError, ScopedView};

use crate::config::{Config, SurfaceConfig};
use crate::query::{group_by, Group, Query};
use crate::record::Record;
use crate::store::{EntityStore, Patch, StoreError};
use crate::summary::{self, Tally};
use crate::surface::{Surface, SurfaceError};

pub struct View<R: Record> {
    store: EntityStore<R>,
    query: Query,
    surface: Surface<R>,
}

impl<R: Record + std::fmt::Debug> std::fmt::Debug for View<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("View")
            .field("store", &self.store)
            .field("query", &self.query)
            .field("surface", &self.surface)
            .finish()
    }
}

impl<R: Record> View<R> {
    pub fn new(store: EntityStore<R>, surface: SurfaceConfig) -> Self {
        Self {
            store,
            query: Query::new(),
            surface: Surface::new(surface),
        }
    }

    /// Build a view over seed data with the policy and surface from `config`.
    pub fn from_seed(seed: Vec<R>, config: &Config) -> Result<Self, StoreError> {
        let store = EntityStore::create(seed)?.with_policy(config.missing_id);
        Ok(Self::new(store, config.surface))
    }

    pub fn store(&self) -> &EntityStore<R> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut EntityStore<R> {
        &mut self.store
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    pub fn query_mut(&mut self) -> &mut Query {
        &mut self.query
    }

    pub fn surface(&self) -> &Surface<R> {
        &self.surface
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.query.set_text(text);
    }

    pub fn set_facet(&mut self, facet: impl Into<String>, value: impl Into<String>) {
        self.query.set_facet(facet, value);
    }

    /// The list as currently filtered.
    pub fn visible(&self) -> Vec<&R> {
        self.store.filter(&self.query)
    }

    /// The filtered list split into board columns.
    pub fn board(&self, facet: &str) -> Vec<Group<'_, R>> {
        group_by(self.visible(), facet)
    }

    pub fn count(&self, query: &Query) -> usize {
        summary::count(&self.store, query)
    }

    pub fn tally(&self, facet: &str) -> Vec<Tally> {
        summary::tally(&self.store, facet)
    }

    pub fn selected(&self) -> Option<&R> {
        self.surface.selected(&self.store)
    }

    pub fn select(&mut self, id: &str) -> Result<(), SurfaceError> {
        self.surface.select(&self.store, id)
    }

    /// Row click on the `index`-th visible record.
    pub fn select_visible(&mut self, index: usize) -> Result<(), SurfaceError> {
        let id = {
            let visible = self.visible();
            visible
                .get(index)
                .map(|r| r.id().to_string())
                .ok_or(SurfaceError::NoSuchRow {
                    index,
                    len: visible.len(),
                })?
        };
        self.surface.select(&self.store, &id)
    }

    pub fn edit(&mut self) -> Result<(), SurfaceError> {
        self.surface.edit(&self.store)
    }

    pub fn compose(&mut self, draft: R) -> Result<(), SurfaceError> {
        self.surface.compose(draft)
    }

    pub fn draft_mut(&mut self) -> Option<&mut R> {
        self.surface.draft_mut()
    }

    pub fn close(&mut self) -> Result<(), SurfaceError> {
        self.surface.close()
    }

    pub fn save(&mut self) -> Result<(), SurfaceError> {
        self.surface.save(&mut self.store)
    }

    pub fn act<P>(&mut self, patch: P) -> Result<(), SurfaceError>
    where
        P: Patch<R> + 'static,
    {
        self.surface.act(&mut self.store, patch)
    }

    pub fn request_remove(&mut self) -> Result<(), SurfaceError> {
        self.surface.request_remove()
    }

    pub fn confirm(&mut self) -> Result<(), SurfaceError> {
        self.surface.confirm(&mut self.store)
    }

    pub fn poll(&mut self) -> Result<bool, SurfaceError> {
        self.surface.poll(&mut self.store)
    }

    pub fn poll_at(&mut self, now: std::time::Instant) -> Result<bool, SurfaceError> {
        self.surface.poll_at(&mut self.store, now)
    }
}
