use std::sync::Arc;

use tracing::{info, warn};

use crate::{
    model::knowledge::KnowledgeSource,
    service::catalog::{ApiResultsCache, TrimCatalog},
};

/// Confirms trim candidates against the external catalogs, in the order they were given.
///
/// Every catalog is asked at most once per (make, model) for the lifetime of the cache;
/// failures are logged and count as "not confirmed" without being cached.
pub struct TrimVerifier {
    catalogs: Vec<Box<dyn TrimCatalog>>,
    cache: ApiResultsCache,
}

impl TrimVerifier {
    pub fn new(catalogs: Vec<Box<dyn TrimCatalog>>, cache: ApiResultsCache) -> Self {
        Self { catalogs, cache }
    }

    /// A verifier that never confirms anything, for parsing without network access.
    pub fn offline() -> Self {
        Self::new(Vec::new(), ApiResultsCache::new())
    }

    pub fn cache(&self) -> &ApiResultsCache {
        &self.cache
    }

    /// Returns the first candidate some catalog lists for `make`/`model`, along with the
    /// catalog that confirmed it.
    ///
    /// Candidates are tried in order and, for each candidate, catalogs in order. A candidate
    /// is confirmed when it occurs case-insensitively inside one of the catalog's trim names.
    /// A catalog is only queried once it is needed.
    pub async fn confirm_first(
        &self,
        make: &str,
        model: &str,
        candidates: &[String],
    ) -> Option<(String, KnowledgeSource)> {
        // None = not queried yet, Some(None) = queried and failed
        let mut fetched: Vec<Option<Option<Arc<Vec<String>>>>> = vec![None; self.catalogs.len()];

        for candidate in candidates {
            let needle = candidate.to_lowercase();

            for (catalog, slot) in self.catalogs.iter().zip(fetched.iter_mut()) {
                if slot.is_none() {
                    *slot = Some(self.trims(catalog.as_ref(), make, model).await);
                }

                let Some(Some(trims)) = slot else {
                    continue;
                };

                if let Some(listed) = trims
                    .iter()
                    .find(|trim| trim.to_lowercase().contains(&needle))
                {
                    info!(
                        catalog = %catalog.source(),
                        make,
                        model,
                        candidate = %candidate,
                        listed = %listed,
                        "Trim confirmed by catalog"
                    );
                    return Some((candidate.clone(), catalog.source()));
                }
            }
        }

        None
    }

    async fn trims(
        &self,
        catalog: &dyn TrimCatalog,
        make: &str,
        model: &str,
    ) -> Option<Arc<Vec<String>>> {
        let source = catalog.source();

        if let Some(trims) = self.cache.get(source, make, model).await {
            return Some(trims);
        }

        match catalog.fetch_trims(make, model).await {
            Ok(trims) => Some(self.cache.insert(source, make, model, trims).await),
            Err(e) => {
                warn!(
                    catalog = %source,
                    make,
                    model,
                    "Trim catalog unavailable: {}",
                    e
                );
                None
            }
        }
    }
}
