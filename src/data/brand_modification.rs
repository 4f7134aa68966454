use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::{
    data::is_unique_violation, model::knowledge::KnowledgeSource, util::text::comparison_key,
};

pub struct BrandModificationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BrandModificationRepository<'a, C> {
    /// Creates a new instance of [`BrandModificationRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        brand_id: i32,
        name: &str,
        source: KnowledgeSource,
    ) -> Result<entity::brand_modification::Model, DbErr> {
        let modification = entity::brand_modification::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            brand_id: ActiveValue::Set(brand_id),
            source: ActiveValue::Set(source.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        modification.insert(self.db).await
    }

    /// Creates the modification unless the brand already has one with the same name
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
    ) -> Result<Vec<entity::brand_modification::Model>, DbErr> {
        entity::prelude::BrandModification::find()
            .filter(entity::brand_modification::Column::BrandId.eq(brand_id))
            .order_by_asc(entity::brand_modification::Column::Name)
            .all(self.db)
            .await
    }

    pub async fn find_by_name(
        &self,
        brand_id: i32,
        name: &str,
    ) -> Result<Option<entity::brand_modification::Model>, DbErr> {
        let key = comparison_key(name);
        let modifications = self.get_by_brand(brand_id).await?;

        Ok(modifications
            .into_iter()
            .find(|modification| comparison_key(&modification.name) == key))
    }
}
