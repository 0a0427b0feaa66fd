//! Complaints, held per company and worked in a drawer.

use std::collections::BTreeMap;

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::Priority;
use crate::config::{Config, SurfaceMode};
use crate::ids::{IdSource, UuidIds};
use crate::seed::{self, SeedError};
use crate::store::Patch;
use crate::view::ScopedView;
use crate::{Facet, Record};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Facet)]
pub enum ComplaintStatus {
    Open,
    #[serde(rename = "In Review")]
    #[facet(rename = "In Review")]
    InReview,
    Escalated,
    Resolved,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Record)]
#[serde(rename_all = "camelCase")]
#[record(collection = "complaints")]
pub struct Complaint {
    pub id: String,
    #[record(search, required)]
    pub subject: String,
    #[record(search, required)]
    pub customer: String,
    #[serde(default)]
    pub description: String,
    #[record(facet)]
    pub status: ComplaintStatus,
    #[record(facet)]
    pub priority: Priority,
    pub received: NaiveDate,
    #[serde(default)]
    pub resolution: Option<String>,
}

impl Complaint {
    pub fn draft(ids: &mut impl IdSource) -> Self {
        Self {
            id: ids.next_id(),
            subject: String::new(),
            customer: String::new(),
            description: String::new(),
            status: ComplaintStatus::Open,
            priority: Priority::Medium,
            received: Utc::now().date_naive(),
            resolution: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ComplaintPatch {
    Status(ComplaintStatus),
    Priority(Priority),
    Escalate,
    /// Record the resolution note and mark the complaint resolved.
    Resolve(String),
}

impl Patch<Complaint> for ComplaintPatch {
    fn apply(&self, complaint: &mut Complaint) {
        match self {
            ComplaintPatch::Status(status) => complaint.status = *status,
            ComplaintPatch::Priority(priority) => complaint.priority = *priority,
            ComplaintPatch::Escalate => {
                complaint.status = ComplaintStatus::Escalated;
                complaint.priority = Priority::Urgent;
            }
            ComplaintPatch::Resolve(note) => {
                complaint.status = ComplaintStatus::Resolved;
                complaint.resolution = Some(note.clone());
            }
        }
    }
}

/// Complaint ids are random; the seed uses readable placeholders.
pub fn ids() -> UuidIds {
    UuidIds
}

pub fn seed() -> Result<BTreeMap<String, Vec<Complaint>>, SeedError> {
    seed::scoped_from_json(include_str!("seed/complaints.json"))
}

pub fn view(config: &Config, company: &str) -> crate::Result<ScopedView<Complaint>> {
    super::scoped_view(seed()?, company, config, SurfaceMode::Drawer)
}
