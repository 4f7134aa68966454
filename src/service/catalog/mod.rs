//! External trim catalogs.
//!
//! - `carquery` - CarQuery `getTrims` client
//! - `carapi` - CarAPI client with token/secret exchange
//! - `cache` - per (catalog, make, model) response cache
//! - `verifier` - consults the catalogs in order to confirm trim candidates

pub mod cache;
pub mod carapi;
pub mod carquery;
pub mod verifier;

use async_trait::async_trait;

use crate::{error::catalog::CatalogError, model::knowledge::KnowledgeSource};

pub use cache::ApiResultsCache;
pub use carapi::CarApiClient;
pub use carquery::CarQueryClient;
pub use verifier::TrimVerifier;

/// A source of known trim names per make and model.
#[async_trait]
pub trait TrimCatalog: Send + Sync {
    /// Source recorded on trims this catalog confirms.
    fn source(&self) -> KnowledgeSource;

    /// Fetches every trim name the catalog lists for `make`/`model`.
    async fn fetch_trims(&self, make: &str, model: &str) -> Result<Vec<String>, CatalogError>;
}
