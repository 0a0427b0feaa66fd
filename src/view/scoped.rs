use std::collections::BTreeMap;

use thiserror::Error;

use super::View;
use crate::config::Config;
use crate::record::Record;
use crate::store::StoreError;
use crate::surface::SurfaceError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScopeError {
    #[error("unknown scope {0:?}")]
    Unknown(String),
    #[error(transparent)]
    Surface(#[from] SurfaceError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// A view whose whole collection belongs to the current scope (company).
///
/// Each scope owns its records independently. Switching stashes the current
/// records under the current scope and swaps in the target's, so edits made
/// under one company are still there when the user switches back.
pub struct ScopedView<R: Record> {
    scopes: BTreeMap<String, Vec<R>>,
    current: String,
    view: View<R>,
}

impl<R: Record> ScopedView<R> {
    pub fn new(
        mut scopes: BTreeMap<String, Vec<R>>,
        initial: &str,
        config: &Config,
    ) -> Result<Self, ScopeError> {
        let seed = scopes
            .remove(initial)
            .ok_or_else(|| ScopeError::Unknown(initial.to_string()))?;
        for (scope, records) in &scopes {
            if let Err(err) = crate::store::EntityStore::create(records.clone()) {
                tracing::debug!(scope = %scope, error = %err, "rejected scoped seed");
                return Err(err.into());
            }
        }
        let view = View::from_seed(seed, config)?;
        Ok(Self {
            scopes,
            current: initial.to_string(),
            view,
        })
    }

    /// Name of the current scope.
    pub fn current(&self) -> &str {
        &self.current
    }

    /// Every scope name, sorted.
    pub fn scopes(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .scopes
            .keys()
            .map(String::as_str)
            .chain(std::iter::once(self.current.as_str()))
            .collect();
        names.sort_unstable();
        names
    }

    pub fn view(&self) -> &View<R> {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut View<R> {
        &mut self.view
    }

    /// Make `scope` current. The detail surface closes; the query is kept.
    pub fn switch(&mut self, scope: &str) -> Result<(), ScopeError> {
        if scope == self.current {
            return Ok(());
        }
        if !self.scopes.contains_key(scope) {
            return Err(ScopeError::Unknown(scope.to_string()));
        }
        self.view.close()?;

        let incoming = self.scopes.remove(scope).unwrap_or_default();
        let outgoing = self.view.store().records().to_vec();
        if let Err(err) = self.view.store_mut().replace_all(incoming.clone()) {
            self.scopes.insert(scope.to_string(), incoming);
            return Err(err.into());
        }

        let previous = std::mem::replace(&mut self.current, scope.to_string());
        tracing::debug!(
            collection = R::COLLECTION,
            from = %previous,
            to = %scope,
            len = self.view.store().len(),
            "scope switched"
        );
        self.scopes.insert(previous, outgoing);
        Ok(())
    }
}
