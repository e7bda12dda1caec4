//! In-memory product catalog.
//!
//! The storefront runs entirely against seeded mock data. [`CatalogStore`]
//! holds the category list and the mutable product table behind a lock and
//! injects an artificial delay in front of every operation so the UI behaves
//! like it is talking to a real marketplace API. Nothing here survives a
//! process restart.

mod seed;
mod store;

pub use store::{CatalogLatency, CatalogStore};

use parasol_core::ProductId;

/// Errors returned by catalog operations.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// No product with the given id exists in the catalog.
    #[error("Product not found: {0}")]
    NotFound(ProductId),
}
