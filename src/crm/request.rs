//! Support requests, worked in a side drawer that stays open across
//! status, assignee and priority changes and after posting a reply.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::Priority;
use crate::config::{Config, SurfaceMode};
use crate::ids::{IdSource, SequenceIds};
use crate::seed::{self, SeedError};
use crate::store::Patch;
use crate::view::View;
use crate::{Facet, Record};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Facet)]
pub enum RequestStatus {
    New,
    #[serde(rename = "In Progress")]
    #[facet(rename = "In Progress")]
    InProgress,
    Resolved,
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Facet)]
pub enum RequestType {
    Technical,
    Billing,
    Account,
    #[serde(rename = "Feature Request")]
    #[facet(rename = "Feature Request")]
    FeatureRequest,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub author: String,
    pub message: String,
    pub sent: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Record)]
#[serde(rename_all = "camelCase")]
#[record(collection = "requests")]
pub struct Request {
    #[record(id, search)]
    pub ticket_id: String,
    #[record(search, required)]
    pub subject: String,
    #[record(search, required)]
    pub customer: String,
    #[record(required)]
    pub email: String,
    #[serde(default)]
    pub description: String,
    #[record(facet)]
    pub status: RequestStatus,
    #[record(facet)]
    pub priority: Priority,
    #[serde(rename = "type")]
    #[record(facet = "type")]
    pub kind: RequestType,
    #[serde(default)]
    pub assignee: Option<String>,
    pub created: NaiveDate,
    #[serde(default)]
    pub replies: Vec<Reply>,
}

impl Request {
    pub fn draft(ids: &mut impl IdSource) -> Self {
        Self {
            ticket_id: ids.next_id(),
            subject: String::new(),
            customer: String::new(),
            email: String::new(),
            description: String::new(),
            status: RequestStatus::New,
            priority: Priority::Medium,
            kind: RequestType::Technical,
            assignee: None,
            created: Utc::now().date_naive(),
            replies: Vec::new(),
        }
    }
}

/// Drawer actions. `Reply` appends, so applying it twice posts twice.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestPatch {
    Status(RequestStatus),
    Assignee(Option<String>),
    Priority(Priority),
    Reply(Reply),
}

impl RequestPatch {
    pub fn reply(author: impl Into<String>, message: impl Into<String>) -> Self {
        RequestPatch::Reply(Reply {
            author: author.into(),
            message: message.into(),
            sent: Utc::now(),
        })
    }
}

impl Patch<Request> for RequestPatch {
    fn apply(&self, request: &mut Request) {
        match self {
            RequestPatch::Status(status) => request.status = *status,
            RequestPatch::Assignee(assignee) => request.assignee = assignee.clone(),
            RequestPatch::Priority(priority) => request.priority = *priority,
            RequestPatch::Reply(reply) => {
                request.replies.push(reply.clone());
                if request.status == RequestStatus::New {
                    request.status = RequestStatus::InProgress;
                }
            }
        }
    }
}

pub fn ids() -> SequenceIds {
    SequenceIds::new("REQ", 1007)
}

pub fn seed() -> Result<Vec<Request>, SeedError> {
    seed::from_json(include_str!("seed/requests.json"))
}

pub fn view(config: &Config) -> crate::Result<View<Request>> {
    super::view(seed()?, config, SurfaceMode::Drawer)
}
