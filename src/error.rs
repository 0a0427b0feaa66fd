use thiserror::Error;

use crate::config::ConfigError;
use crate::record::FacetError;
use crate::seed::SeedError;
use crate::store::StoreError;
use crate::surface::SurfaceError;
use crate::view::ScopeError;

/// Any error the crate can produce.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Facet(#[from] FacetError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Surface(#[from] SurfaceError),
    #[error(transparent)]
    Scope(#[from] ScopeError),
    #[error(transparent)]
    Seed(#[from] SeedError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
