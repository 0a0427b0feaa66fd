use std::fmt;
use std::time::Instant;

use crate::record::Record;
use crate::store::Patch;

/// Where a surface currently is.
pub enum SurfaceState<R> {
    /// Nothing selected.
    Idle,
    /// A record's detail view is open.
    Viewing { id: String },
    /// The edit form is open, pre-filled from the record.
    Editing { id: String, draft: R },
    /// The creation form is open.
    Creating { draft: R },
    /// Waiting for the user to confirm a removal.
    Confirming { id: String },
    /// A submitted action is in flight.
    Pending(Pending<R>),
}

impl<R: Record> SurfaceState<R> {
    pub fn name(&self) -> &'static str {
        match self {
            SurfaceState::Idle => "idle",
            SurfaceState::Viewing { .. } => "viewing",
            SurfaceState::Editing { .. } => "editing",
            SurfaceState::Creating { .. } => "creating",
            SurfaceState::Confirming { .. } => "confirming",
            SurfaceState::Pending(_) => "pending",
        }
    }

    /// Id of the record this state is about, if any.
    pub fn id(&self) -> Option<&str> {
        match self {
            SurfaceState::Idle | SurfaceState::Creating { .. } => None,
            SurfaceState::Viewing { id }
            | SurfaceState::Editing { id, .. }
            | SurfaceState::Confirming { id } => Some(id),
            SurfaceState::Pending(pending) => pending.id(),
        }
    }
}

impl<R: fmt::Debug> fmt::Debug for SurfaceState<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurfaceState::Idle => f.write_str("Idle"),
            SurfaceState::Viewing { id } => f.debug_struct("Viewing").field("id", id).finish(),
            SurfaceState::Editing { id, draft } => f
                .debug_struct("Editing")
                .field("id", id)
                .field("draft", draft)
                .finish(),
            SurfaceState::Creating { draft } => {
                f.debug_struct("Creating").field("draft", draft).finish()
            }
            SurfaceState::Confirming { id } => {
                f.debug_struct("Confirming").field("id", id).finish()
            }
            SurfaceState::Pending(pending) => f
                .debug_struct("Pending")
                .field("action", &pending.kind())
                .field("due", &pending.due)
                .finish(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Save,
    Create,
    Patch,
    Remove,
}

impl ActionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ActionKind::Save => "save",
            ActionKind::Create => "create",
            ActionKind::Patch => "patch",
            ActionKind::Remove => "remove",
        }
    }
}

/// A submitted write waiting out the configured latency.
pub struct Pending<R> {
    pub(super) action: Action<R>,
    pub(super) due: Instant,
}

impl<R> Pending<R> {
    pub fn due(&self) -> Instant {
        self.due
    }

    pub fn kind(&self) -> ActionKind {
        self.action.kind()
    }
}

impl<R: Record> Pending<R> {
    pub fn id(&self) -> Option<&str> {
        match &self.action {
            Action::Save { id, .. } | Action::Patch { id, .. } | Action::Remove { id } => Some(id),
            Action::Create { draft } => Some(draft.id()),
        }
    }
}

pub(super) enum Action<R> {
    Save { id: String, draft: R },
    Create { draft: R },
    Patch { id: String, patch: Box<dyn Patch<R>> },
    Remove { id: String },
}

impl<R> Action<R> {
    pub(super) fn kind(&self) -> ActionKind {
        match self {
            Action::Save { .. } => ActionKind::Save,
            Action::Create { .. } => ActionKind::Create,
            Action::Patch { .. } => ActionKind::Patch,
            Action::Remove { .. } => ActionKind::Remove,
        }
    }

    pub(super) fn draft(&self) -> Option<&R> {
        match self {
            Action::Save { draft, .. } | Action::Create { draft } => Some(draft),
            Action::Patch { .. } | Action::Remove { .. } => None,
        }
    }

    /// State to return to when the write fails.
    pub(super) fn fallback(self) -> SurfaceState<R> {
        match self {
            Action::Save { id, draft } => SurfaceState::Editing { id, draft },
            Action::Create { draft } => SurfaceState::Creating { draft },
            Action::Patch { id, .. } | Action::Remove { id } => SurfaceState::Viewing { id },
        }
    }
}
