use serde::{Deserialize, Serialize};

/// What a store mutation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    Added,
    Updated,
    Removed,
    Replaced,
}

impl ChangeKind {
    /// Event name listeners subscribe to.
    pub fn event_name(self) -> &'static str {
        match self {
            ChangeKind::Added => "added",
            ChangeKind::Updated => "updated",
            ChangeKind::Removed => "removed",
            ChangeKind::Replaced => "replaced",
        }
    }
}

/// Payload delivered to store listeners, as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreChange {
    pub collection: String,
    pub kind: ChangeKind,
    /// Affected record; `None` for `replaced`.
    pub id: Option<String>,
    /// Store length after the change.
    pub len: usize,
}
