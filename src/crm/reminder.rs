//! Follow-up reminders sent over a channel.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Channel, Priority};
use crate::config::{Config, SurfaceMode};
use crate::ids::{IdSource, TimestampIds};
use crate::seed::{self, SeedError};
use crate::store::{EntityStore, Patch};
use crate::view::View;
use crate::{Facet, Record};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Facet)]
pub enum ReminderStatus {
    Scheduled,
    Sent,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Record)]
#[serde(rename_all = "camelCase")]
#[record(collection = "reminders")]
pub struct Reminder {
    pub id: String,
    #[record(search, required)]
    pub title: String,
    #[record(search, required)]
    pub contact: String,
    #[serde(default)]
    pub message: String,
    pub due: NaiveDate,
    #[record(facet)]
    pub status: ReminderStatus,
    #[record(facet)]
    pub priority: Priority,
    #[serde(rename = "type")]
    #[record(facet = "type")]
    pub channel: Channel,
}

impl Reminder {
    pub fn draft(ids: &mut impl IdSource, due: NaiveDate, channel: Channel) -> Self {
        Self {
            id: ids.next_id(),
            title: String::new(),
            contact: String::new(),
            message: String::new(),
            due,
            status: ReminderStatus::Scheduled,
            priority: Priority::Medium,
            channel,
        }
    }

    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.status == ReminderStatus::Scheduled && self.due < today
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReminderPatch {
    Send,
    Complete,
    Reschedule(NaiveDate),
}

impl Patch<Reminder> for ReminderPatch {
    fn apply(&self, reminder: &mut Reminder) {
        match self {
            ReminderPatch::Send => reminder.status = ReminderStatus::Sent,
            ReminderPatch::Complete => reminder.status = ReminderStatus::Completed,
            ReminderPatch::Reschedule(due) => {
                reminder.due = *due;
                reminder.status = ReminderStatus::Scheduled;
            }
        }
    }
}

/// Scheduled reminders whose due date has passed.
pub fn overdue(store: &EntityStore<Reminder>, today: NaiveDate) -> usize {
    crate::summary::count_where(store, |r| r.is_overdue(today))
}

pub fn ids() -> TimestampIds {
    TimestampIds::new()
}

pub fn seed() -> Result<Vec<Reminder>, SeedError> {
    seed::from_json(include_str!("seed/reminders.json"))
}

pub fn view(config: &Config) -> crate::Result<View<Reminder>> {
    super::view(seed()?, config, SurfaceMode::Modal)
}
