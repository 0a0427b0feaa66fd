use thiserror::Error;

use crate::store::StoreError;

/// Error type for surface transitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurfaceError {
    /// The action is not available in the current state.
    #[error("cannot {action} while {state}")]
    InvalidTransition {
        state: &'static str,
        action: &'static str,
    },
    /// Row click outside the visible list.
    #[error("row {index} is outside the visible list of {len}")]
    NoSuchRow { index: usize, len: usize },
    /// A submitted action is still in flight.
    #[error("an action is in flight")]
    Busy,
    #[error(transparent)]
    Store(#[from] StoreError),
}
