use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::{
    data::is_unique_violation,
    model::knowledge::KnowledgeSource,
    util::text::{comparison_key, is_multi_word},
};

pub struct BrandModelRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BrandModelRepository<'a, C> {
    /// Creates a new instance of [`BrandModelRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a model line for a brand, deriving `is_multi_word` from the name
    pub async fn create(
        &self,
        brand_id: i32,
        name: &str,
        source: KnowledgeSource,
    ) -> Result<entity::brand_model::Model, DbErr> {
        let model = entity::brand_model::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            brand_id: ActiveValue::Set(brand_id),
            is_multi_word: ActiveValue::Set(is_multi_word(name)),
            source: ActiveValue::Set(source.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        model.insert(self.db).await
    }

    /// Creates the model unless the brand already has one with the same name
    /// (case-insensitive). Returns `true` when a row was created.
    pub async fn create_if_missing(
        &self,
        brand_id: i32,
        name: &str,
        source: KnowledgeSource,
    ) -> Result<bool, DbErr> {
        if self.find_by_name(brand_id, name).await?.is_some() {
            return Ok(false);
        }

        match self.create(brand_id, name, source).await {
            Ok(_) => Ok(true),
            Err(err) if is_unique_violation(&err) => Ok(false),
            Err(err) => Err(err),
        }
    }

    pub async fn get_by_brand(
        &self,
        brand_id: i32,
    ) -> Result<Vec<entity::brand_model::Model>, DbErr> {
        entity::prelude::BrandModel::find()
            .filter(entity::brand_model::Column::BrandId.eq(brand_id))
            .order_by_asc(entity::brand_model::Column::Name)
            .all(self.db)
            .await
    }

    /// Finds a brand's model by name, case-insensitively
    pub async fn find_by_name(
        &self,
        brand_id: i32,
        name: &str,
    ) -> Result<Option<entity::brand_model::Model>, DbErr> {
        let key = comparison_key(name);
        let models = self.get_by_brand(brand_id).await?;

        Ok(models
            .into_iter()
            .find(|model| comparison_key(&model.name) == key))
    }
}
