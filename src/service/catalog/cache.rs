use std::{collections::HashMap, sync::Arc};

use tokio::sync::RwLock;

use crate::model::knowledge::KnowledgeSource;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct CacheKey {
    catalog: KnowledgeSource,
    make: String,
    model: String,
}

impl CacheKey {
    fn new(catalog: KnowledgeSource, make: &str, model: &str) -> Self {
        Self {
            catalog,
            make: make.trim().to_lowercase(),
            model: model.trim().to_lowercase(),
        }
    }
}

/// Successful catalog responses keyed by (catalog, make, model), compared lowercased.
///
/// Cloning shares the underlying map, so one cache can serve concurrent parses. Entries
/// live as long as the cache; failed requests are never stored.
#[derive(Clone, Debug, Default)]
pub struct ApiResultsCache {
    inner: Arc<RwLock<HashMap<CacheKey, Arc<Vec<String>>>>>,
}

impl ApiResultsCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(
        &self,
        catalog: KnowledgeSource,
        make: &str,
        model: &str,
    ) -> Option<Arc<Vec<String>>> {
        let key = CacheKey::new(catalog, make, model);
        self.inner.read().await.get(&key).cloned()
    }

    pub async fn insert(
        &self,
        catalog: KnowledgeSource,
        make: &str,
        model: &str,
        trims: Vec<String>,
    ) -> Arc<Vec<String>> {
        let key = CacheKey::new(catalog, make, model);
        let trims = Arc::new(trims);

        self.inner.write().await.insert(key, trims.clone());

        trims
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }

    pub async fn clear(&self) {
        self.inner.write().await.clear();
    }
}
