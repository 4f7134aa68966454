use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::{data::is_unique_violation, util::text::collapse_whitespace};

pub struct BrandSynonymRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BrandSynonymRepository<'a, C> {
    /// Creates a new instance of [`BrandSynonymRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a synonym for a brand, stored lowercased
    pub async fn create(
        &self,
        brand_id: i32,
        name: &str,
    ) -> Result<entity::brand_synonym::Model, DbErr> {
        let synonym = entity::brand_synonym::ActiveModel {
            name: ActiveValue::Set(normalize_synonym(name)),
            brand_id: ActiveValue::Set(brand_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        synonym.insert(self.db).await
    }

    /// Creates a synonym unless one with the same name already exists.
    ///
    /// Synonym names are unique across all brands, so an existing synonym pointing at
    /// another brand is left untouched. Returns `true` when a row was created.
    pub async fn create_if_missing(&self, brand_id: i32, name: &str) -> Result<bool, DbErr> {
        if self.find_by_name(name).await?.is_some() {
            return Ok(false);
        }

        match self.create(brand_id, name).await {
            Ok(_) => Ok(true),
            Err(err) if is_unique_violation(&err) => Ok(false),
            Err(err) => Err(err),
        }
    }

    /// Gets all synonyms along with the brand each resolves to
    pub async fn get_all_with_brand(
        &self,
    ) -> Result<Vec<(entity::brand_synonym::Model, Option<entity::brand::Model>)>, DbErr> {
        entity::prelude::BrandSynonym::find()
            .find_also_related(entity::brand::Entity)
            .all(self.db)
            .await
    }

    /// Finds a synonym by name, case-insensitively, along with its brand
    pub async fn find_by_name(
        &self,
        name: &str,
    ) -> Result<Option<(entity::brand_synonym::Model, Option<entity::brand::Model>)>, DbErr> {
        entity::prelude::BrandSynonym::find()
            .filter(entity::brand_synonym::Column::Name.eq(normalize_synonym(name)))
            .find_also_related(entity::brand::Entity)
            .one(self.db)
            .await
    }
}

fn normalize_synonym(name: &str) -> String {
    collapse_whitespace(name).to_lowercase()
}
