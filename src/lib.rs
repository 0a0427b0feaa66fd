extern crate self as dealdesk;

pub mod config;
pub mod crm;
mod error;
pub mod ids;
pub mod query;
mod record;
pub mod seed;
mod store;
pub mod summary;
mod surface;
mod view;

pub use config::{Config, ConfigError, SurfaceConfig, SurfaceMode};
pub use error::{Error, Result};
pub use ids::{IdSource, SequenceIds, TimestampIds, UuidIds};
pub use query::{group_by, FacetConstraint, Group, Query, ALL};
pub use record::{Facet, FacetError, Record, RequiredField, SearchField};
pub use seed::SeedError;
pub use store::{
    ChangeKind, EntityStore, MissingIdPolicy, Patch, Replace, StoreChange, StoreError,
};
pub use summary::Tally;
pub use surface::{ActionKind, Pending, Surface, SurfaceError, SurfaceState};
pub use view::{ScopeError, ScopedView, View};

// Derive macros share their names with the traits they implement
pub use dealdesk_macros::{Facet, Record};
