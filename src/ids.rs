//! Id sources for records created at runtime.

use chrono::Utc;
use uuid::Uuid;

/// Produces ids for newly created records.
pub trait IdSource {
    fn next_id(&mut self) -> String;
}

/// `PREFIX-N` ids from a counter, e.g. `REQ-1008`.
#[derive(Debug, Clone)]
pub struct SequenceIds {
    prefix: String,
    next: u64,
}

impl SequenceIds {
    pub fn new(prefix: impl Into<String>, start: u64) -> Self {
        Self {
            prefix: prefix.into(),
            next: start,
        }
    }
}

impl IdSource for SequenceIds {
    fn next_id(&mut self) -> String {
        let id = format!("{}-{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}

/// Creation-timestamp ids (milliseconds since the epoch).
///
/// Two ids requested within the same millisecond are made distinct by
/// bumping the later one.
#[derive(Debug, Clone, Default)]
pub struct TimestampIds {
    last: i64,
}

impl TimestampIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdSource for TimestampIds {
    fn next_id(&mut self) -> String {
        let now = Utc::now().timestamp_millis();
        self.last = now.max(self.last + 1);
        self.last.to_string()
    }
}

/// Random v4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdSource for UuidIds {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}
