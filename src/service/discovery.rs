//! Discovery buffer and knowledge base feedback loop.
//!
//! Parsing never writes to the knowledge base. Tokens the knowledge base did not know are
//! collected in a [`Discoveries`] buffer owned by the caller, and [`DiscoveryService`]
//! writes them once the caller's import has committed. Values wider than their knowledge
//! base column are logged and never queued, so a flush cannot stall on them.

use tracing::{debug, info, warn};

use crate::{
    data::KnowledgeBase,
    error::Error,
    model::knowledge::{
        KnowledgeSource, MAX_BRAND_NAME_LEN, MAX_MODEL_NAME_LEN, MAX_MODIFICATION_NAME_LEN,
        MAX_TRIM_NAME_LEN,
    },
    util::text::comparison_key,
};

/// A model, trim or modification seen while parsing, attached to its brand by name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Discovery {
    pub brand: String,
    pub name: String,
    pub source: KnowledgeSource,
}

impl Discovery {
    fn same_entry(&self, brand: &str, name: &str) -> bool {
        comparison_key(&self.brand) == comparison_key(brand)
            && comparison_key(&self.name) == comparison_key(name)
    }
}

/// Entries discovered during one import batch, deduplicated case-insensitively.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Discoveries {
    brands: Vec<String>,
    models: Vec<Discovery>,
    trims: Vec<Discovery>,
    modifications: Vec<Discovery>,
}

impl Discoveries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_brand(&mut self, name: &str) {
        if !fits_column("brand", name, MAX_BRAND_NAME_LEN) {
            return;
        }

        let key = comparison_key(name);
        if !self.brands.iter().any(|brand| comparison_key(brand) == key) {
            self.brands.push(name.to_string());
        }
    }

    pub fn add_model(&mut self, brand: &str, name: &str, source: KnowledgeSource) {
        if fits_entry("model", brand, name, MAX_MODEL_NAME_LEN) {
            push_unique(&mut self.models, brand, name, source);
        }
    }

    pub fn add_trim(&mut self, brand: &str, name: &str, source: KnowledgeSource) {
        if fits_entry("trim", brand, name, MAX_TRIM_NAME_LEN) {
            push_unique(&mut self.trims, brand, name, source);
        }
    }

    pub fn add_modification(&mut self, brand: &str, name: &str, source: KnowledgeSource) {
        if fits_entry("modification", brand, name, MAX_MODIFICATION_NAME_LEN) {
            push_unique(&mut self.modifications, brand, name, source);
        }
    }

    pub fn brands(&self) -> &[String] {
        &self.brands
    }

    pub fn models(&self) -> &[Discovery] {
        &self.models
    }

    pub fn trims(&self) -> &[Discovery] {
        &self.trims
    }

    pub fn modifications(&self) -> &[Discovery] {
        &self.modifications
    }

    pub fn len(&self) -> usize {
        self.brands.len() + self.models.len() + self.trims.len() + self.modifications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

fn fits_entry(kind: &'static str, brand: &str, name: &str, max_len: usize) -> bool {
    fits_column("brand", brand, MAX_BRAND_NAME_LEN) && fits_column(kind, name, max_len)
}

fn fits_column(kind: &'static str, value: &str, max_len: usize) -> bool {
    let len = value.chars().count();
    if len > max_len {
        warn!(kind, len, max_len, "Discovered {} name too long, not queued", kind);
        return false;
    }

    true
}

fn push_unique(entries: &mut Vec<Discovery>, brand: &str, name: &str, source: KnowledgeSource) {
    if entries.iter().any(|entry| entry.same_entry(brand, name)) {
        return;
    }

    entries.push(Discovery {
        brand: brand.to_string(),
        name: name.to_string(),
        source,
    });
}

/// Rows created by a flush.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FlushSummary {
    pub brands: usize,
    pub models: usize,
    pub trims: usize,
    pub modifications: usize,
}

impl FlushSummary {
    pub fn total(&self) -> usize {
        self.brands + self.models + self.trims + self.modifications
    }
}

#[derive(Clone, Copy, Debug)]
enum DiscoveryKind {
    Model,
    Trim,
    Modification,
}

impl DiscoveryKind {
    fn label(&self) -> &'static str {
        match self {
            Self::Model => "model",
            Self::Trim => "trim",
            Self::Modification => "modification",
        }
    }
}

/// Writes buffered discoveries to the knowledge base.
///
/// Each entry's brand is resolved or created first, then the row is inserted unless the
/// brand already has it. Written entries leave the buffer; on a database error the failing
/// entry and everything after it stay buffered and the error is returned, so a later flush
/// can retry them.
pub struct DiscoveryService<'a, K: KnowledgeBase + ?Sized> {
    knowledge: &'a K,
}

impl<'a, K: KnowledgeBase + ?Sized> DiscoveryService<'a, K> {
    /// Creates a new instance of [`DiscoveryService`]
    pub fn new(knowledge: &'a K) -> Self {
        Self { knowledge }
    }

    /// Writes every buffered brand, model, trim and modification.
    pub async fn flush(&self, discoveries: &mut Discoveries) -> Result<FlushSummary, Error> {
        let (brands, models) = self.save_new_brands_and_models_to_db(discoveries).await?;
        let trims = self.save_new_trims_to_db(discoveries).await?;
        let modifications = self.save_new_modifications_to_db(discoveries).await?;

        let summary = FlushSummary {
            brands,
            models,
            trims,
            modifications,
        };

        if summary.total() > 0 {
            info!(
                brands = summary.brands,
                models = summary.models,
                trims = summary.trims,
                modifications = summary.modifications,
                "Saved new knowledge base entries"
            );
        }

        Ok(summary)
    }

    /// Writes buffered brands and models, returning how many of each were created.
    pub async fn save_new_brands_and_models_to_db(
        &self,
        discoveries: &mut Discoveries,
    ) -> Result<(usize, usize), Error> {
        let mut brands = 0;

        while let Some(name) = discoveries.brands.first() {
            let (brand, created) = self.knowledge.insert_brand(name).await?;
            if created {
                info!(brand = %brand.name, "New brand added to knowledge base");
                brands += 1;
            }
            discoveries.brands.remove(0);
        }

        let models = self
            .save_entries(&mut discoveries.models, DiscoveryKind::Model)
            .await?;

        Ok((brands, models))
    }

    /// Writes buffered trims, returning how many were created.
    pub async fn save_new_trims_to_db(
        &self,
        discoveries: &mut Discoveries,
    ) -> Result<usize, Error> {
        self.save_entries(&mut discoveries.trims, DiscoveryKind::Trim)
            .await
    }

    /// Writes buffered modifications, returning how many were created.
    pub async fn save_new_modifications_to_db(
        &self,
        discoveries: &mut Discoveries,
    ) -> Result<usize, Error> {
        self.save_entries(&mut discoveries.modifications, DiscoveryKind::Modification)
            .await
    }

    async fn save_entries(
        &self,
        entries: &mut Vec<Discovery>,
        kind: DiscoveryKind,
    ) -> Result<usize, Error> {
        let mut created = 0;

        while let Some(entry) = entries.first() {
            let brand_id = self.brand_id(&entry.brand).await?;

            let inserted = match kind {
                DiscoveryKind::Model => {
                    self.knowledge
                        .insert_model(brand_id, &entry.name, entry.source)
                        .await?
                }
                DiscoveryKind::Trim => {
                    self.knowledge
                        .insert_trim(brand_id, &entry.name, entry.source)
                        .await?
                }
                DiscoveryKind::Modification => {
                    self.knowledge
                        .insert_modification(brand_id, &entry.name, entry.source)
                        .await?
                }
            };

            if inserted {
                info!(
                    brand = %entry.brand,
                    name = %entry.name,
                    source = %entry.source,
                    "New {} added to knowledge base",
                    kind.label()
                );
                created += 1;
            } else {
                debug!(
                    brand = %entry.brand,
                    name = %entry.name,
                    "{} already known, skipping",
                    kind.label()
                );
            }

            entries.remove(0);
        }

        Ok(created)
    }

    async fn brand_id(&self, name: &str) -> Result<i32, Error> {
        let (brand, _) = self.knowledge.insert_brand(name).await?;

        brand.id.ok_or_else(|| {
            Error::InternalError(format!(
                "Knowledge base returned brand {} without an id after insert",
                brand.name
            ))
        })
    }
}
