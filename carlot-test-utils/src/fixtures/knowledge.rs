//! Knowledge base fixture utilities.
//!
//! Rows are inserted through the `entity` crate directly so fixtures do not depend on the
//! repositories under test. Brands are referenced by name and created on first use.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, DbErr, EntityTrait, QueryFilter};

use crate::TestContext;

/// Source recorded on fixture rows.
pub static FIXTURE_SOURCE: &str = "seed_script";

impl TestContext {
    pub fn knowledge<'a>(&'a mut self) -> KnowledgeFixtures<'a> {
        KnowledgeFixtures { setup: self }
    }
}

pub struct KnowledgeFixtures<'a> {
    pub setup: &'a mut TestContext,
}

impl<'a> KnowledgeFixtures<'a> {
    /// Insert a brand, or return the existing row with the same name.
    pub async fn insert_brand(&mut self, name: &str) -> Result<entity::brand::Model, DbErr> {
        if let Some(brand) = entity::prelude::Brand::find()
            .filter(entity::brand::Column::Name.eq(name))
            .one(&self.setup.db)
            .await?
        {
            return Ok(brand);
        }

        let brand = entity::brand::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            slug: ActiveValue::Set(name.to_lowercase().replace(' ', "-")),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        brand.insert(&self.setup.db).await
    }

    /// Insert a synonym for `brand`, stored lowercased.
    pub async fn insert_synonym(
        &mut self,
        brand: &str,
        synonym: &str,
    ) -> Result<entity::brand_synonym::Model, DbErr> {
        let brand = self.insert_brand(brand).await?;

        let synonym = entity::brand_synonym::ActiveModel {
            name: ActiveValue::Set(synonym.to_lowercase()),
            brand_id: ActiveValue::Set(brand.id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        synonym.insert(&self.setup.db).await
    }

    pub async fn insert_model(
        &mut self,
        brand: &str,
        model: &str,
    ) -> Result<entity::brand_model::Model, DbErr> {
        let brand = self.insert_brand(brand).await?;

        let model = entity::brand_model::ActiveModel {
            name: ActiveValue::Set(model.to_string()),
            brand_id: ActiveValue::Set(brand.id),
            is_multi_word: ActiveValue::Set(model.split_whitespace().count() > 1),
            source: ActiveValue::Set(FIXTURE_SOURCE.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        model.insert(&self.setup.db).await
    }

    pub async fn insert_trim(
        &mut self,
        brand: &str,
        trim: &str,
    ) -> Result<entity::brand_trim::Model, DbErr> {
        let brand = self.insert_brand(brand).await?;

        let trim = entity::brand_trim::ActiveModel {
            name: ActiveValue::Set(trim.to_string()),
            brand_id: ActiveValue::Set(brand.id),
            source: ActiveValue::Set(FIXTURE_SOURCE.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        trim.insert(&self.setup.db).await
    }

    pub async fn insert_modification(
        &mut self,
        brand: &str,
        modification: &str,
    ) -> Result<entity::brand_modification::Model, DbErr> {
        let brand = self.insert_brand(brand).await?;

        let modification = entity::brand_modification::ActiveModel {
            name: ActiveValue::Set(modification.to_string()),
            brand_id: ActiveValue::Set(brand.id),
            source: ActiveValue::Set(FIXTURE_SOURCE.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        modification.insert(&self.setup.db).await
    }
}
