//! Leads list: search by name or company, filter by status and source,
//! edit in a modal form.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::config::{Config, SurfaceMode};
use crate::ids::{IdSource, SequenceIds};
use crate::seed::{self, SeedError};
use crate::store::Patch;
use crate::view::View;
use crate::{Facet, Record};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Facet)]
pub enum LeadStatus {
    New,
    Contacted,
    Qualified,
    Lost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Facet)]
pub enum LeadSource {
    Website,
    Referral,
    #[serde(rename = "Social Media")]
    #[facet(rename = "Social Media")]
    SocialMedia,
    #[serde(rename = "Cold Call")]
    #[facet(rename = "Cold Call")]
    ColdCall,
    Event,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Record)]
#[serde(rename_all = "camelCase")]
#[record(collection = "leads")]
pub struct Lead {
    pub id: String,
    #[record(search, required)]
    pub name: String,
    #[record(search, required)]
    pub company: String,
    #[record(required)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[record(facet)]
    pub status: LeadStatus,
    #[record(facet)]
    pub source: LeadSource,
    /// Estimated deal size in whole currency units.
    pub value: u64,
    pub created: NaiveDate,
}

impl Lead {
    /// Blank form for the "Add lead" modal: status `New`, created today.
    pub fn draft(ids: &mut impl IdSource) -> Self {
        Self {
            id: ids.next_id(),
            name: String::new(),
            company: String::new(),
            email: String::new(),
            phone: String::new(),
            status: LeadStatus::New,
            source: LeadSource::Website,
            value: 0,
            created: Utc::now().date_naive(),
        }
    }
}

/// Actions offered by the lead detail view.
#[derive(Debug, Clone, PartialEq)]
pub enum LeadPatch {
    Status(LeadStatus),
    Contact { email: String, phone: String },
    Value(u64),
}

impl Patch<Lead> for LeadPatch {
    fn apply(&self, lead: &mut Lead) {
        match self {
            LeadPatch::Status(status) => lead.status = *status,
            LeadPatch::Contact { email, phone } => {
                lead.email = email.clone();
                lead.phone = phone.clone();
            }
            LeadPatch::Value(value) => lead.value = *value,
        }
    }
}

/// Ids for leads created after the seed.
pub fn ids() -> SequenceIds {
    SequenceIds::new("LEAD", 8)
}

pub fn seed() -> Result<Vec<Lead>, SeedError> {
    seed::from_json(include_str!("seed/leads.json"))
}

pub fn view(config: &Config) -> crate::Result<View<Lead>> {
    super::view(seed()?, config, SurfaceMode::Modal)
}
