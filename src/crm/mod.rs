//! CRM adapters - one entity-list instantiation per dashboard module.
//!
//! Each adapter declares its record, facet enums and typed patches, embeds
//! its seed data and builds a [`View`] with the entity's natural surface
//! (modal form or side drawer).

pub mod approval;
pub mod complaint;
pub mod correspondence;
pub mod deal;
pub mod lead;
pub mod note;
pub mod reminder;
pub mod request;
pub mod tariff;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::{Config, SurfaceMode};
use crate::record::Record;
use crate::view::{ScopedView, View};
use crate::Facet;

/// Priority shared by deals, requests, complaints and reminders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Facet)]
pub enum Priority {
    Low,
    Medium,
    High,
    Urgent,
}

/// Delivery channel of a reminder or correspondence thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Facet)]
pub enum Channel {
    Email,
    Phone,
    #[serde(rename = "SMS")]
    #[facet(rename = "SMS")]
    Sms,
    WhatsApp,
}

fn view<R: Record>(seed: Vec<R>, config: &Config, mode: SurfaceMode) -> crate::Result<View<R>> {
    let config = Config {
        surface: config.surface.with_mode(mode),
        ..*config
    };
    Ok(View::from_seed(seed, &config)?)
}

fn scoped_view<R: Record>(
    scopes: BTreeMap<String, Vec<R>>,
    initial: &str,
    config: &Config,
    mode: SurfaceMode,
) -> crate::Result<ScopedView<R>> {
    let config = Config {
        surface: config.surface.with_mode(mode),
        ..*config
    };
    Ok(ScopedView::new(scopes, initial, &config)?)
}
