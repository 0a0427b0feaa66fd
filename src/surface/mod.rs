//! Selection / Detail-Action Surface - the selected-record slot and its actions.
//!
//! The surface is a small state machine owned by a view:
//!
//! ```text
//!   Idle --select--> Viewing --edit--> Editing --save--> (resume)
//!     |                 |  \--act--------------------> (resume)
//!     |                 \--request_remove--> Confirming --confirm--> Idle
//!     \--compose--> Creating --save--> (resume)
//! ```
//!
//! `close` returns any state to `Idle`. After a successful write a modal
//! surface resumes at `Idle` and a drawer stays on `Viewing` the same record.
//! With a configured latency, writes park in `Pending` until [`Surface::poll`]
//! finds them due; nothing else is accepted while pending.

mod error;
mod state;

pub use error::SurfaceError;
pub use state::{ActionKind, Pending, SurfaceState};

use std::time::Instant;

use state::Action;

use crate::config::{SurfaceConfig, SurfaceMode};
use crate::record::Record;
use crate::store::{EntityStore, Patch, Replace, StoreError};

pub struct Surface<R: Record> {
    state: SurfaceState<R>,
    config: SurfaceConfig,
}

impl<R: Record + std::fmt::Debug> std::fmt::Debug for Surface<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Surface")
            .field("state", &self.state)
            .field("config", &self.config)
            .finish()
    }
}

impl<R: Record> Default for Surface<R> {
    fn default() -> Self {
        Self::new(SurfaceConfig::default())
    }
}

impl<R: Record> Surface<R> {
    pub fn new(config: SurfaceConfig) -> Self {
        Self {
            state: SurfaceState::Idle,
            config,
        }
    }

    pub fn config(&self) -> &SurfaceConfig {
        &self.config
    }

    pub fn state(&self) -> &SurfaceState<R> {
        &self.state
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, SurfaceState::Idle)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, SurfaceState::Pending(_))
    }

    pub fn pending(&self) -> Option<&Pending<R>> {
        match &self.state {
            SurfaceState::Pending(pending) => Some(pending),
            _ => None,
        }
    }

    /// Id of the record the surface is showing, if any.
    pub fn selected_id(&self) -> Option<&str> {
        self.state.id()
    }

    /// The selected record, looked up fresh in `store`.
    pub fn selected<'s>(&self, store: &'s EntityStore<R>) -> Option<&'s R> {
        self.selected_id().and_then(|id| store.get(id))
    }

    /// Form contents while editing or creating.
    pub fn draft(&self) -> Option<&R> {
        match &self.state {
            SurfaceState::Editing { draft, .. } | SurfaceState::Creating { draft } => Some(draft),
            _ => None,
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut R> {
        match &mut self.state {
            SurfaceState::Editing { draft, .. } | SurfaceState::Creating { draft } => Some(draft),
            _ => None,
        }
    }

    /// Show a record. Replaces whatever the surface held before.
    pub fn select(&mut self, store: &EntityStore<R>, id: &str) -> Result<(), SurfaceError> {
        self.ensure_not_pending()?;
        if !store.contains(id) {
            return Err(not_found::<R>(id).into());
        }
        self.transition(SurfaceState::Viewing { id: id.to_string() });
        Ok(())
    }

    /// Open the edit form, pre-filled from the viewed record.
    pub fn edit(&mut self, store: &EntityStore<R>) -> Result<(), SurfaceError> {
        let id = match &self.state {
            SurfaceState::Viewing { id } => id,
            SurfaceState::Pending(_) => return Err(SurfaceError::Busy),
            _ => return Err(self.invalid("edit")),
        };
        let draft = store.get(id).cloned().ok_or_else(|| not_found::<R>(id))?;
        let id = id.clone();
        self.transition(SurfaceState::Editing { id, draft });
        Ok(())
    }

    /// Open the creation form with a new record carrying a fresh id.
    pub fn compose(&mut self, draft: R) -> Result<(), SurfaceError> {
        self.ensure_not_pending()?;
        self.transition(SurfaceState::Creating { draft });
        Ok(())
    }

    /// Cancel, backdrop click or close icon.
    pub fn close(&mut self) -> Result<(), SurfaceError> {
        self.ensure_not_pending()?;
        self.transition(SurfaceState::Idle);
        Ok(())
    }

    /// Submit the edit or creation form.
    ///
    /// Required fields are checked before anything is submitted; a failed
    /// check or write leaves the form open with its draft.
    pub fn save(&mut self, store: &mut EntityStore<R>) -> Result<(), SurfaceError> {
        let action = match &self.state {
            SurfaceState::Editing { id, draft } => Action::Save {
                id: id.clone(),
                draft: draft.clone(),
            },
            SurfaceState::Creating { draft } => Action::Create {
                draft: draft.clone(),
            },
            SurfaceState::Pending(_) => return Err(SurfaceError::Busy),
            _ => return Err(self.invalid("save")),
        };
        if let Some(draft) = action.draft() {
            let fields = draft.missing_required();
            if !fields.is_empty() {
                return Err(StoreError::Validation {
                    collection: R::COLLECTION,
                    fields,
                }
                .into());
            }
        }
        self.submit(store, action)
    }

    /// Run an action (status change, approve, reply, ...) on the viewed record.
    pub fn act<P>(&mut self, store: &mut EntityStore<R>, patch: P) -> Result<(), SurfaceError>
    where
        P: Patch<R> + 'static,
    {
        let id = match &self.state {
            SurfaceState::Viewing { id } => id.clone(),
            SurfaceState::Pending(_) => return Err(SurfaceError::Busy),
            _ => return Err(self.invalid("act")),
        };
        self.submit(
            store,
            Action::Patch {
                id,
                patch: Box::new(patch),
            },
        )
    }

    /// Ask for confirmation before removing the viewed record.
    pub fn request_remove(&mut self) -> Result<(), SurfaceError> {
        let id = match &self.state {
            SurfaceState::Viewing { id } => id.clone(),
            SurfaceState::Pending(_) => return Err(SurfaceError::Busy),
            _ => return Err(self.invalid("request_remove")),
        };
        self.transition(SurfaceState::Confirming { id });
        Ok(())
    }

    /// Confirm a requested removal.
    pub fn confirm(&mut self, store: &mut EntityStore<R>) -> Result<(), SurfaceError> {
        let id = match &self.state {
            SurfaceState::Confirming { id } => id.clone(),
            SurfaceState::Pending(_) => return Err(SurfaceError::Busy),
            _ => return Err(self.invalid("confirm")),
        };
        self.submit(store, Action::Remove { id })
    }

    /// Apply a pending action if it is due. Returns whether one was applied.
    pub fn poll(&mut self, store: &mut EntityStore<R>) -> Result<bool, SurfaceError> {
        self.poll_at(store, Instant::now())
    }

    /// [`Surface::poll`] against an explicit clock reading.
    ///
    /// If the write fails the surface falls back to the state the action was
    /// submitted from (form with its draft, or the viewed record).
    pub fn poll_at(
        &mut self,
        store: &mut EntityStore<R>,
        now: Instant,
    ) -> Result<bool, SurfaceError> {
        let state = std::mem::replace(&mut self.state, SurfaceState::Idle);
        let pending = match state {
            SurfaceState::Pending(pending) if now >= pending.due => pending,
            other => {
                self.state = other;
                return Ok(false);
            }
        };

        match self.apply(store, &pending.action) {
            Ok(next) => {
                self.state = SurfaceState::Pending(pending);
                self.transition(next);
                Ok(true)
            }
            Err(err) => {
                tracing::warn!(
                    collection = R::COLLECTION,
                    action = pending.kind().as_str(),
                    error = %err,
                    "pending action failed"
                );
                self.state = pending.action.fallback();
                Err(err.into())
            }
        }
    }

    fn submit(
        &mut self,
        store: &mut EntityStore<R>,
        action: Action<R>,
    ) -> Result<(), SurfaceError> {
        let latency = self.config.latency();
        if latency.is_zero() {
            let next = self.apply(store, &action)?;
            self.transition(next);
        } else {
            self.transition(SurfaceState::Pending(Pending {
                action,
                due: Instant::now() + latency,
            }));
        }
        Ok(())
    }

    fn apply(
        &self,
        store: &mut EntityStore<R>,
        action: &Action<R>,
    ) -> Result<SurfaceState<R>, StoreError> {
        match action {
            Action::Save { id, draft } => {
                store.update_by_id(id, &Replace(draft.clone()))?;
                Ok(self.resume(store, id))
            }
            Action::Create { draft } => {
                store.add(draft.clone())?;
                Ok(self.resume(store, draft.id()))
            }
            Action::Patch { id, patch } => {
                store.update_by_id(id, &**patch)?;
                Ok(self.resume(store, id))
            }
            Action::Remove { id } => {
                store.remove_by_id(id)?;
                Ok(SurfaceState::Idle)
            }
        }
    }

    fn resume(&self, store: &EntityStore<R>, id: &str) -> SurfaceState<R> {
        match self.config.mode {
            SurfaceMode::Drawer if store.contains(id) => SurfaceState::Viewing {
                id: id.to_string(),
            },
            SurfaceMode::Drawer | SurfaceMode::Modal => SurfaceState::Idle,
        }
    }

    fn transition(&mut self, next: SurfaceState<R>) {
        tracing::debug!(
            collection = R::COLLECTION,
            from = self.state.name(),
            to = next.name(),
            id = next.id().unwrap_or(""),
            "surface transition"
        );
        self.state = next;
    }

    fn ensure_not_pending(&self) -> Result<(), SurfaceError> {
        if self.is_pending() {
            Err(SurfaceError::Busy)
        } else {
            Ok(())
        }
    }

    fn invalid(&self, action: &'static str) -> SurfaceError {
        SurfaceError::InvalidTransition {
            state: self.state.name(),
            action,
        }
    }
}

fn not_found<R: Record>(id: &str) -> StoreError {
    StoreError::NotFound {
        collection: R::COLLECTION,
        id: id.to_string(),
    }
}
