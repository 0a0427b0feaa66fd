//! Approval workflow, held per company. Decisions are made in a modal
//! with an optional comment (required when rejecting). Only a `Pending`
//! approval can be decided, and a decision is final.

use std::collections::BTreeMap;

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::config::{Config, SurfaceMode};
use crate::ids::{IdSource, SequenceIds};
use crate::seed::{self, SeedError};
use crate::store::Patch;
use crate::view::ScopedView;
use crate::{Facet, Record};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Facet)]
pub enum ApprovalStatus {
    Pending,
    Approved,
    Rejected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Facet)]
pub enum ApprovalType {
    Discount,
    #[serde(rename = "Tariff Change")]
    #[facet(rename = "Tariff Change")]
    TariffChange,
    Contract,
    Refund,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Record)]
#[serde(rename_all = "camelCase")]
#[record(collection = "approvals")]
pub struct Approval {
    pub id: String,
    #[record(search, required)]
    pub title: String,
    #[record(search, required)]
    pub requested_by: String,
    pub amount: u64,
    #[record(facet)]
    pub status: ApprovalStatus,
    #[serde(rename = "type")]
    #[record(facet = "type")]
    pub kind: ApprovalType,
    pub submitted: NaiveDate,
    #[serde(default)]
    pub decided_by: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
}

impl Approval {
    pub fn draft(ids: &mut impl IdSource, kind: ApprovalType) -> Self {
        Self {
            id: ids.next_id(),
            title: String::new(),
            requested_by: String::new(),
            amount: 0,
            status: ApprovalStatus::Pending,
            kind,
            submitted: Utc::now().date_naive(),
            decided_by: None,
            comment: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ApprovalPatch {
    Approve {
        by: String,
        comment: Option<String>,
    },
    Reject {
        by: String,
        comment: String,
    },
}

impl ApprovalPatch {
    pub fn approve(by: impl Into<String>) -> Self {
        ApprovalPatch::Approve {
            by: by.into(),
            comment: None,
        }
    }

    pub fn reject(by: impl Into<String>, comment: impl Into<String>) -> Self {
        ApprovalPatch::Reject {
            by: by.into(),
            comment: comment.into(),
        }
    }
}

impl Patch<Approval> for ApprovalPatch {
    fn check(&self, approval: &Approval) -> Result<(), String> {
        if approval.status != ApprovalStatus::Pending {
            return Err(format!("approval is already {}", approval.status));
        }
        match self {
            ApprovalPatch::Reject { comment, .. } if comment.trim().is_empty() => {
                Err("a rejection needs a comment".to_string())
            }
            _ => Ok(()),
        }
    }

    fn apply(&self, approval: &mut Approval) {
        match self {
            ApprovalPatch::Approve { by, comment } => {
                approval.status = ApprovalStatus::Approved;
                approval.decided_by = Some(by.clone());
                approval.comment = comment.clone();
            }
            ApprovalPatch::Reject { by, comment } => {
                approval.status = ApprovalStatus::Rejected;
                approval.decided_by = Some(by.clone());
                approval.comment = Some(comment.clone());
            }
        }
    }
}

pub fn ids() -> SequenceIds {
    SequenceIds::new("APR", 6)
}

pub fn seed() -> Result<BTreeMap<String, Vec<Approval>>, SeedError> {
    seed::scoped_from_json(include_str!("seed/approvals.json"))
}

pub fn view(config: &Config, company: &str) -> crate::Result<ScopedView<Approval>> {
    super::scoped_view(seed()?, company, config, SurfaceMode::Modal)
}
