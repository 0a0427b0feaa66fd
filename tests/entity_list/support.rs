//! Shared fixtures: a small task record defined outside the crate.

#![allow(dead_code)]

use dealdesk::{EntityStore, Facet, Record};
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Facet)]
pub enum TaskState {
    Todo,
    #[serde(rename = "In Progress")]
    #[facet(rename = "In Progress")]
    InProgress,
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Facet)]
pub enum TaskKind {
    Bug,
    Feature,
    Chore,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Record)]
#[record(collection = "tasks")]
pub struct Task {
    pub id: String,
    #[record(search, required)]
    pub title: String,
    #[record(search)]
    pub owner: String,
    #[record(facet)]
    pub state: TaskState,
    #[serde(rename = "type")]
    #[record(facet = "type")]
    pub kind: TaskKind,
    pub points: u64,
}

impl Task {
    pub fn new(id: &str, title: &str, owner: &str, state: TaskState, kind: TaskKind) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            owner: owner.to_string(),
            state,
            kind,
            points: 1,
        }
    }

    pub fn with_points(mut self, points: u64) -> Self {
        self.points = points;
        self
    }
}

pub fn tasks() -> Vec<Task> {
    use TaskKind::*;
    use TaskState::*;
    vec![
        Task::new("T-1", "Fix login redirect", "Alice", Todo, Bug).with_points(3),
        Task::new("T-2", "Dark mode", "Bob", InProgress, Feature).with_points(5),
        Task::new("T-3", "Upgrade logging", "alice", Done, Chore).with_points(2),
        Task::new("T-4", "Login throttling", "Carol", InProgress, Feature).with_points(8),
        Task::new("T-5", "Flaky export test", "Bob", Todo, Bug).with_points(1),
        Task::new("T-6", "Archive old boards", "Dave", Done, Chore).with_points(2),
    ]
}

pub fn store() -> EntityStore<Task> {
    init_tracing();
    match EntityStore::create(tasks()) {
        Ok(store) => store,
        Err(err) => panic!("fixture seed rejected: {err}"),
    }
}

pub fn ids(records: &[&Task]) -> Vec<String> {
    records.iter().map(|t| t.id().to_string()).collect()
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
