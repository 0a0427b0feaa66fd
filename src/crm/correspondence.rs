//! Correspondence threads, read and answered in a drawer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Channel;
use crate::config::{Config, SurfaceMode};
use crate::seed::{self, SeedError};
use crate::store::Patch;
use crate::view::View;
use crate::{Facet, Record};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Facet)]
pub enum ThreadStatus {
    Unread,
    Read,
    Archived,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub from: String,
    pub body: String,
    pub sent: DateTime<Utc>,
    #[serde(default)]
    pub outgoing: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Record)]
#[serde(rename_all = "camelCase")]
#[record(collection = "correspondence")]
pub struct Correspondence {
    pub id: String,
    #[record(search, required)]
    pub subject: String,
    #[record(search, required)]
    pub counterpart: String,
    #[record(facet)]
    pub status: ThreadStatus,
    #[serde(rename = "type")]
    #[record(facet = "type")]
    pub channel: Channel,
    #[record(required)]
    pub messages: Vec<Message>,
}

impl Correspondence {
    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CorrespondencePatch {
    /// Append a message to the thread. Not idempotent.
    Append(Message),
    MarkRead,
    Archive,
}

impl CorrespondencePatch {
    pub fn reply(from: impl Into<String>, body: impl Into<String>) -> Self {
        CorrespondencePatch::Append(Message {
            from: from.into(),
            body: body.into(),
            sent: Utc::now(),
            outgoing: true,
        })
    }
}

impl Patch<Correspondence> for CorrespondencePatch {
    fn apply(&self, thread: &mut Correspondence) {
        match self {
            CorrespondencePatch::Append(message) => {
                thread.messages.push(message.clone());
                thread.status = if message.outgoing {
                    ThreadStatus::Read
                } else {
                    ThreadStatus::Unread
                };
            }
            CorrespondencePatch::MarkRead => thread.status = ThreadStatus::Read,
            CorrespondencePatch::Archive => thread.status = ThreadStatus::Archived,
        }
    }
}

pub fn seed() -> Result<Vec<Correspondence>, SeedError> {
    seed::from_json(include_str!("seed/correspondence.json"))
}

pub fn view(config: &Config) -> crate::Result<View<Correspondence>> {
    super::view(seed()?, config, SurfaceMode::Drawer)
}
