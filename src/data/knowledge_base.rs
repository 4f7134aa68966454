//! Knowledge base access for the parser.
//!
//! The parser depends on the [`KnowledgeBase`] trait rather than a database connection, so
//! a parser can only be built with a knowledge base to consult. [`SeaOrmKnowledgeBase`] is
//! the implementation over the repositories in this module's siblings.

use async_trait::async_trait;
use sea_orm::{ConnectionTrait, DbErr};

use crate::{
    data::{
        BrandModelRepository, BrandModificationRepository, BrandRepository,
        BrandSynonymRepository, BrandTrimRepository,
    },
    model::knowledge::{BrandAlias, BrandRef, KnowledgeSource},
    util::text::longest_first,
};

#[async_trait]
pub trait KnowledgeBase: Send + Sync {
    /// All canonical brand names and synonyms, each with the brand it resolves to, ordered
    /// longest alias first.
    async fn brand_aliases(&self) -> Result<Vec<BrandAlias>, DbErr>;

    /// Finds a brand by canonical name or synonym, case-insensitively.
    async fn find_brand(&self, name: &str) -> Result<Option<BrandRef>, DbErr>;

    async fn models_for_brand(&self, brand_id: i32) -> Result<Vec<String>, DbErr>;

    async fn trims_for_brand(&self, brand_id: i32) -> Result<Vec<String>, DbErr>;

    async fn modifications_for_brand(&self, brand_id: i32) -> Result<Vec<String>, DbErr>;

    /// Returns the brand named `name` (or resolved through a synonym), creating it when
    /// unknown. The boolean is `true` when a row was created.
    async fn insert_brand(&self, name: &str) -> Result<(BrandRef, bool), DbErr>;

    /// Returns `true` when a row was created, `false` when the brand already had it.
    async fn insert_model(
        &self,
        brand_id: i32,
        name: &str,
        source: KnowledgeSource,
    ) -> Result<bool, DbErr>;

    async fn insert_trim(
        &self,
        brand_id: i32,
        name: &str,
        source: KnowledgeSource,
    ) -> Result<bool, DbErr>;

    async fn insert_modification(
        &self,
        brand_id: i32,
        name: &str,
        source: KnowledgeSource,
    ) -> Result<bool, DbErr>;

    /// Adds a synonym for a brand unless the alias is already taken.
    async fn insert_synonym(&self, brand_id: i32, name: &str) -> Result<bool, DbErr>;
}

/// [`KnowledgeBase`] over any sea-orm connection or transaction.
pub struct SeaOrmKnowledgeBase<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SeaOrmKnowledgeBase<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }
}

#[async_trait]
impl<'a, C: ConnectionTrait> KnowledgeBase for SeaOrmKnowledgeBase<'a, C> {
    async fn brand_aliases(&self) -> Result<Vec<BrandAlias>, DbErr> {
        let brands = BrandRepository::new(self.db).get_all().await?;
        let synonyms = BrandSynonymRepository::new(self.db)
            .get_all_with_brand()
            .await?;

        let mut aliases: Vec<BrandAlias> = brands
            .into_iter()
            .map(|brand| BrandAlias {
                alias: brand.name.clone(),
                brand_id: brand.id,
                brand_name: brand.name,
            })
            .collect();

        aliases.extend(synonyms.into_iter().filter_map(|(synonym, brand)| {
            brand.map(|brand| BrandAlias {
                alias: synonym.name,
                brand_id: brand.id,
                brand_name: brand.name,
            })
        }));

        aliases.sort_by(|a, b| longest_first(&a.alias, &b.alias));

        Ok(aliases)
    }

    async fn find_brand(&self, name: &str) -> Result<Option<BrandRef>, DbErr> {
        if let Some(brand) = BrandRepository::new(self.db).find_by_name(name).await? {
            return Ok(Some(BrandRef::known(brand.id, brand.name)));
        }

        let synonym = BrandSynonymRepository::new(self.db)
            .find_by_name(name)
            .await?;

        Ok(synonym
            .and_then(|(_, brand)| brand)
            .map(|brand| BrandRef::known(brand.id, brand.name)))
    }

    async fn models_for_brand(&self, brand_id: i32) -> Result<Vec<String>, DbErr> {
        let models = BrandModelRepository::new(self.db)
            .get_by_brand(brand_id)
            .await?;

        Ok(models.into_iter().map(|model| model.name).collect())
    }

    async fn trims_for_brand(&self, brand_id: i32) -> Result<Vec<String>, DbErr> {
        let trims = BrandTrimRepository::new(self.db)
            .get_by_brand(brand_id)
            .await?;

        Ok(trims.into_iter().map(|trim| trim.name).collect())
    }

    async fn modifications_for_brand(&self, brand_id: i32) -> Result<Vec<String>, DbErr> {
        let modifications = BrandModificationRepository::new(self.db)
            .get_by_brand(brand_id)
            .await?;

        Ok(modifications
            .into_iter()
            .map(|modification| modification.name)
            .collect())
    }

    async fn insert_brand(&self, name: &str) -> Result<(BrandRef, bool), DbErr> {
        if let Some(brand) = self.find_brand(name).await? {
            return Ok((brand, false));
        }

        let (brand, created) = BrandRepository::new(self.db).get_or_create(name).await?;

        Ok((BrandRef::known(brand.id, brand.name), created))
    }

    async fn insert_model(
        &self,
        brand_id: i32,
        name: &str,
        source: KnowledgeSource,
    ) -> Result<bool, DbErr> {
        BrandModelRepository::new(self.db)
            .create_if_missing(brand_id, name, source)
            .await
    }

    async fn insert_trim(
        &self,
        brand_id: i32,
        name: &str,
        source: KnowledgeSource,
    ) -> Result<bool, DbErr> {
        BrandTrimRepository::new(self.db)
            .create_if_missing(brand_id, name, source)
            .await
    }

    async fn insert_modification(
        &self,
        brand_id: i32,
        name: &str,
        source: KnowledgeSource,
    ) -> Result<bool, DbErr> {
        BrandModificationRepository::new(self.db)
            .create_if_missing(brand_id, name, source)
            .await
    }

    async fn insert_synonym(&self, brand_id: i32, name: &str) -> Result<bool, DbErr> {
        BrandSynonymRepository::new(self.db)
            .create_if_missing(brand_id, name)
            .await
    }
}

#[cfg(test)]
mod tests {

    mod brand_aliases {
        use carlot_test_utils::prelude::*;

        use crate::data::{KnowledgeBase, SeaOrmKnowledgeBase};

        /// Expect brand names and synonyms, longest first, synonyms resolved
        #[tokio::test]
        async fn lists_names_and_synonyms_longest_first() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_knowledge_base_tables()
                .with_brand("BMW")
                .with_brand("Land Rover")
                .with_synonym("Mercedes-Benz", "мерседес")
                .build()
                .await?;

            let knowledge = SeaOrmKnowledgeBase::new(&test.db);
            let aliases = knowledge.brand_aliases().await?;

            let names: Vec<_> = aliases.iter().map(|a| a.alias.as_str()).collect();
            assert_eq!(names, vec!["Mercedes-Benz", "Land Rover", "мерседес", "BMW"]);

            let synonym = aliases.iter().find(|a| a.alias == "мерседес").unwrap();
            assert_eq!(synonym.brand_name, "Mercedes-Benz");

            Ok(())
        }
    }

    mod find_brand {
        use carlot_test_utils::prelude::*;

        use crate::data::{KnowledgeBase, SeaOrmKnowledgeBase};

        /// Expect synonym to resolve to canonical brand
        #[tokio::test]
        async fn resolves_synonym() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_knowledge_base_tables()
                .with_synonym("Volkswagen", "фольксваген")
                .build()
                .await?;

            let knowledge = SeaOrmKnowledgeBase::new(&test.db);
            let brand = knowledge.find_brand("Фольксваген").await?;

            assert_eq!(brand.map(|b| b.name).as_deref(), Some("Volkswagen"));

            Ok(())
        }
    }

    mod insert {
        use carlot_test_utils::prelude::*;

        use crate::{
            data::{KnowledgeBase, SeaOrmKnowledgeBase},
            model::knowledge::KnowledgeSource,
        };

        /// Expect insert through a synonym to reuse the canonical brand
        #[tokio::test]
        async fn insert_brand_reuses_synonym_target() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_knowledge_base_tables()
                .with_synonym("Volkswagen", "vw")
                .build()
                .await?;

            let knowledge = SeaOrmKnowledgeBase::new(&test.db);
            let (brand, created) = knowledge.insert_brand("VW").await?;

            assert!(!created);
            assert_eq!(brand.name, "Volkswagen");

            Ok(())
        }

        /// Expect inserts to be idempotent
        #[tokio::test]
        async fn inserts_are_idempotent() -> Result<(), TestError> {
            let test = test_setup_with_knowledge_base_tables!()?;

            let knowledge = SeaOrmKnowledgeBase::new(&test.db);
            let (brand, created) = knowledge.insert_brand("Zorglub").await?;
            let brand_id = brand.id.unwrap();

            assert!(created);
            assert!(
                knowledge
                    .insert_model(brand_id, "Quux", KnowledgeSource::AutoDetected)
                    .await?
            );
            assert!(
                !knowledge
                    .insert_model(brand_id, "Quux", KnowledgeSource::AutoDetected)
                    .await?
            );
            assert!(
                knowledge
                    .insert_trim(brand_id, "Sport", KnowledgeSource::CarQuery)
                    .await?
            );
            assert!(
                !knowledge
                    .insert_trim(brand_id, "sport", KnowledgeSource::CarApi)
                    .await?
            );

            assert_eq!(knowledge.models_for_brand(brand_id).await?, vec!["Quux"]);
            assert_eq!(knowledge.trims_for_brand(brand_id).await?, vec!["Sport"]);

            Ok(())
        }
    }
}
