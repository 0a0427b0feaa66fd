//! Notes, searchable by title, body and tags.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::config::{Config, SurfaceMode};
use crate::ids::{IdSource, UuidIds};
use crate::seed::{self, SeedError};
use crate::store::{EntityStore, Patch};
use crate::view::View;
use crate::{Facet, Record};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Facet)]
pub enum NoteType {
    General,
    Meeting,
    Call,
    Idea,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Record)]
#[serde(rename_all = "camelCase")]
#[record(collection = "notes")]
pub struct Note {
    pub id: String,
    #[record(search, required)]
    pub title: String,
    #[record(search)]
    #[serde(default)]
    pub body: String,
    #[record(search)]
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(rename = "type")]
    #[record(facet = "type")]
    pub kind: NoteType,
    #[serde(default)]
    pub pinned: bool,
    pub updated: NaiveDate,
}

impl Note {
    pub fn draft(ids: &mut impl IdSource, kind: NoteType) -> Self {
        Self {
            id: ids.next_id(),
            title: String::new(),
            body: String::new(),
            tags: Vec::new(),
            kind,
            pinned: false,
            updated: Utc::now().date_naive(),
        }
    }
}

/// `TogglePin` flips the flag each time it is applied; `Pin` sets it.
#[derive(Debug, Clone, PartialEq)]
pub enum NotePatch {
    TogglePin,
    Pin(bool),
    Tags(Vec<String>),
}

impl Patch<Note> for NotePatch {
    fn apply(&self, note: &mut Note) {
        match self {
            NotePatch::TogglePin => note.pinned = !note.pinned,
            NotePatch::Pin(pinned) => note.pinned = *pinned,
            NotePatch::Tags(tags) => note.tags = tags.clone(),
        }
    }
}

/// Pinned notes first, each group in store order.
pub fn pinned_first(store: &EntityStore<Note>) -> Vec<&Note> {
    let (mut pinned, rest): (Vec<&Note>, Vec<&Note>) = store.iter().partition(|n| n.pinned);
    pinned.extend(rest);
    pinned
}

pub fn ids() -> UuidIds {
    UuidIds
}

pub fn seed() -> Result<Vec<Note>, SeedError> {
    seed::from_json(include_str!("seed/notes.json"))
}

pub fn view(config: &Config) -> crate::Result<View<Note>> {
    super::view(seed()?, config, SurfaceMode::Modal)
}
