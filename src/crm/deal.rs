//! Deal pipeline: one board column per stage.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Priority;
use crate::config::{Config, SurfaceMode};
use crate::ids::{IdSource, SequenceIds};
use crate::query::Query;
use crate::seed::{self, SeedError};
use crate::store::{EntityStore, Patch};
use crate::summary;
use crate::view::View;
use crate::{Facet, Record};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Facet)]
pub enum DealStage {
    Lead,
    Qualified,
    Proposal,
    Negotiation,
    #[serde(rename = "Closed Won")]
    #[facet(rename = "Closed Won")]
    ClosedWon,
    #[serde(rename = "Closed Lost")]
    #[facet(rename = "Closed Lost")]
    ClosedLost,
}

impl DealStage {
    pub fn is_closed(self) -> bool {
        matches!(self, DealStage::ClosedWon | DealStage::ClosedLost)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Record)]
#[serde(rename_all = "camelCase")]
#[record(collection = "deals")]
pub struct Deal {
    pub id: String,
    #[record(search, required)]
    pub title: String,
    #[record(search, required)]
    pub company: String,
    #[record(search)]
    pub contact: String,
    pub value: u64,
    #[record(facet)]
    pub stage: DealStage,
    #[record(facet)]
    pub priority: Priority,
    /// Win probability in percent.
    pub probability: u8,
    pub owner: String,
    pub expected_close: NaiveDate,
}

impl Deal {
    pub fn draft(ids: &mut impl IdSource, expected_close: NaiveDate) -> Self {
        Self {
            id: ids.next_id(),
            title: String::new(),
            company: String::new(),
            contact: String::new(),
            value: 0,
            stage: DealStage::Lead,
            priority: Priority::Medium,
            probability: 10,
            owner: String::new(),
            expected_close,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DealPatch {
    /// Drag to another pipeline column. Closing pins the probability.
    Stage(DealStage),
    Priority(Priority),
    Owner(String),
}

impl Patch<Deal> for DealPatch {
    fn apply(&self, deal: &mut Deal) {
        match self {
            DealPatch::Stage(stage) => {
                deal.stage = *stage;
                match stage {
                    DealStage::ClosedWon => deal.probability = 100,
                    DealStage::ClosedLost => deal.probability = 0,
                    _ => {}
                }
            }
            DealPatch::Priority(priority) => deal.priority = *priority,
            DealPatch::Owner(owner) => deal.owner = owner.clone(),
        }
    }
}

/// Total value of the deals matching `query` (the pipeline value cards).
pub fn pipeline_value(store: &EntityStore<Deal>, query: &Query) -> u64 {
    summary::sum_by(store, query, |deal| deal.value)
}

/// Value of the deals still open, weighted by win probability.
pub fn weighted_value(store: &EntityStore<Deal>) -> u64 {
    store
        .iter()
        .filter(|deal| !deal.stage.is_closed())
        .map(|deal| {
            let weighted = u128::from(deal.value) * u128::from(deal.probability) / 100;
            u64::try_from(weighted).unwrap_or(u64::MAX)
        })
        .fold(0, u64::saturating_add)
}

pub fn ids() -> SequenceIds {
    SequenceIds::new("DEAL", 7)
}

pub fn seed() -> Result<Vec<Deal>, SeedError> {
    seed::from_json(include_str!("seed/deals.json"))
}

pub fn view(config: &Config) -> crate::Result<View<Deal>> {
    super::view(seed()?, config, SurfaceMode::Modal)
}
