//! Bulk seeding of the knowledge base with the standard brand, synonym, model, trim and
//! modification lists in [`data`].
//!
//! Every step is idempotent and can run on its own: brands a step refers to are created
//! when missing, and rows that already exist are skipped.

pub mod data;

use tracing::{debug, info};

use crate::{data::KnowledgeBase, error::Error, model::knowledge::KnowledgeSource};

/// Rows created by [`SeedService::seed_all`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub brands: usize,
    pub synonyms: usize,
    pub models: usize,
    pub trims: usize,
    pub modifications: usize,
}

impl SeedSummary {
    pub fn total(&self) -> usize {
        self.brands + self.synonyms + self.models + self.trims + self.modifications
    }
}

#[derive(Clone, Copy, Debug)]
enum SeedKind {
    Model,
    Trim,
    Modification,
}

impl SeedKind {
    fn label(&self) -> &'static str {
        match self {
            Self::Model => "models",
            Self::Trim => "trims",
            Self::Modification => "modifications",
        }
    }
}

pub struct SeedService<'a, K: KnowledgeBase + ?Sized> {
    knowledge: &'a K,
}

impl<'a, K: KnowledgeBase + ?Sized> SeedService<'a, K> {
    /// Creates a new instance of [`SeedService`]
    pub fn new(knowledge: &'a K) -> Self {
        Self { knowledge }
    }

    /// Runs every seed step in dependency order.
    pub async fn seed_all(&self) -> Result<SeedSummary, Error> {
        let summary = SeedSummary {
            brands: self.seed_brands().await?,
            synonyms: self.seed_synonyms().await?,
            models: self.seed_models().await?,
            trims: self.seed_trims().await?,
            modifications: self.seed_modifications().await?,
        };

        info!(
            brands = summary.brands,
            synonyms = summary.synonyms,
            models = summary.models,
            trims = summary.trims,
            modifications = summary.modifications,
            "Seeded knowledge base"
        );

        Ok(summary)
    }

    /// Creates the standard brands, returning how many were new.
    pub async fn seed_brands(&self) -> Result<usize, Error> {
        let mut created = 0;

        for name in data::BRANDS {
            let (_, inserted) = self.knowledge.insert_brand(name).await?;
            if inserted {
                created += 1;
            }
        }

        debug!(created, "Seeded brands");

        Ok(created)
    }

    /// Attaches the standard synonyms to their brands, skipping aliases already in use.
    pub async fn seed_synonyms(&self) -> Result<usize, Error> {
        let mut created = 0;

        for (brand, synonyms) in data::BRAND_SYNONYMS {
            let brand_id = self.brand_id(brand).await?;

            for synonym in synonyms.iter() {
                if self.knowledge.insert_synonym(brand_id, synonym).await? {
                    created += 1;
                }
            }
        }

        debug!(created, "Seeded brand synonyms");

        Ok(created)
    }

    pub async fn seed_models(&self) -> Result<usize, Error> {
        self.seed_names(data::BRAND_MODELS, SeedKind::Model).await
    }

    pub async fn seed_trims(&self) -> Result<usize, Error> {
        self.seed_names(data::BRAND_TRIMS, SeedKind::Trim).await
    }

    pub async fn seed_modifications(&self) -> Result<usize, Error> {
        self.seed_names(data::BRAND_MODIFICATIONS, SeedKind::Modification)
            .await
    }

    async fn seed_names(
        &self,
        table: &[(&str, &[&str])],
        kind: SeedKind,
    ) -> Result<usize, Error> {
        let mut created = 0;

        for (brand, names) in table {
            let brand_id = self.brand_id(brand).await?;

            for name in names.iter() {
                let inserted = match kind {
                    SeedKind::Model => {
                        self.knowledge
                            .insert_model(brand_id, name, KnowledgeSource::Seed)
                            .await?
                    }
                    SeedKind::Trim => {
                        self.knowledge
                            .insert_trim(brand_id, name, KnowledgeSource::Seed)
                            .await?
                    }
                    SeedKind::Modification => {
                        self.knowledge
                            .insert_modification(brand_id, name, KnowledgeSource::Seed)
                            .await?
                    }
                };

                if inserted {
                    created += 1;
                }
            }
        }

        debug!(created, "Seeded brand {}", kind.label());

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
