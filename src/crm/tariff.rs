//! Tariff catalogue with a propose / approve / reject change flow.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::{Config, SurfaceMode};
use crate::seed::{self, SeedError};
use crate::store::Patch;
use crate::view::View;
use crate::{Facet, Record};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Facet)]
pub enum TariffStatus {
    Active,
    #[serde(rename = "Pending Change")]
    #[facet(rename = "Pending Change")]
    PendingChange,
    Retired,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Record)]
#[serde(rename_all = "camelCase")]
#[record(collection = "tariffs")]
pub struct Tariff {
    pub id: String,
    #[record(search, required)]
    pub name: String,
    #[record(search, required)]
    pub code: String,
    /// Monthly price in cents.
    pub monthly_price: u64,
    #[serde(default)]
    pub proposed_price: Option<u64>,
    #[record(facet)]
    pub status: TariffStatus,
    pub effective_from: NaiveDate,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TariffPatch {
    /// Submit a new monthly price for approval.
    Propose { price: u64 },
    /// Apply the proposed price from `effective_from`.
    Approve { effective_from: NaiveDate },
    Reject,
    Retire,
}

impl Patch<Tariff> for TariffPatch {
    /// `Propose` and `Retire` need a tariff that is not retired. `Approve` and
    /// `Reject` need a change awaiting a decision.
    fn check(&self, tariff: &Tariff) -> Result<(), String> {
        let allowed = match self {
            TariffPatch::Propose { .. } | TariffPatch::Retire => {
                tariff.status != TariffStatus::Retired
            }
            TariffPatch::Approve { .. } | TariffPatch::Reject => {
                tariff.status == TariffStatus::PendingChange
            }
        };
        if allowed {
            Ok(())
        } else {
            Err(format!("tariff is {}", tariff.status))
        }
    }

    fn apply(&self, tariff: &mut Tariff) {
        match self {
            TariffPatch::Propose { price } => {
                tariff.proposed_price = Some(*price);
                tariff.status = TariffStatus::PendingChange;
            }
            TariffPatch::Approve { effective_from } => {
                if let Some(price) = tariff.proposed_price.take() {
                    tariff.monthly_price = price;
                    tariff.effective_from = *effective_from;
                }
                tariff.status = TariffStatus::Active;
            }
            TariffPatch::Reject => {
                tariff.proposed_price = None;
                tariff.status = TariffStatus::Active;
            }
            TariffPatch::Retire => {
                tariff.proposed_price = None;
                tariff.status = TariffStatus::Retired;
            }
        }
    }
}

pub fn seed() -> Result<Vec<Tariff>, SeedError> {
    seed::from_json(include_str!("seed/tariffs.json"))
}

pub fn view(config: &Config) -> crate::Result<View<Tariff>> {
    super::view(seed()?, config, SurfaceMode::Modal)
}
