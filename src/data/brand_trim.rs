use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::{
    data::is_unique_violation, model::knowledge::KnowledgeSource, util::text::comparison_key,
};

pub struct BrandTrimRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BrandTrimRepository<'a, C> {
    /// Creates a new instance of [`BrandTrimRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        brand_id: i32,
        name: &str,
        source: KnowledgeSource,
    ) -> Result<entity::brand_trim::Model, DbErr> {
        let trim = entity::brand_trim::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            brand_id: ActiveValue::Set(brand_id),
            source: ActiveValue::Set(source.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        trim.insert(self.db).await
    }

    /// Creates the trim unless the brand already has one with the same name
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
    ) -> Result<Vec<entity::brand_trim::Model>, DbErr> {
        entity::prelude::BrandTrim::find()
            .filter(entity::brand_trim::Column::BrandId.eq(brand_id))
            .order_by_asc(entity::brand_trim::Column::Name)
            .all(self.db)
            .await
    }

    pub async fn find_by_name(
        &self,
        brand_id: i32,
        name: &str,
    ) -> Result<Option<entity::brand_trim::Model>, DbErr> {
        let key = comparison_key(name);
        let trims = self.get_by_brand(brand_id).await?;

        Ok(trims.into_iter().find(|trim| comparison_key(&trim.name) == key))
    }
}

#[cfg(test)]
mod tests {
    use carlot_test_utils::prelude::*;

    use crate::{
        data::{is_unique_violation, BrandTrimRepository},
        model::knowledge::KnowledgeSource,
    };

    /// Expect only the requested brand's trims
    #[tokio::test]
    async fn gets_trims_for_brand_only() -> Result<(), TestError> {
        let mut test = TestBuilder::new()
            .with_knowledge_base_tables()
            .with_trim("BMW", "M Sport")
            .with_trim("BMW", "Luxury Line")
            .with_trim("Audi", "S Line")
            .build()
            .await?;
        let bmw = test.knowledge().insert_brand("BMW").await?;

        let trim_repo = BrandTrimRepository::new(&test.db);
        let trims = trim_repo.get_by_brand(bmw.id).await?;

        let names: Vec<_> = trims.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Luxury Line", "M Sport"]);

        Ok(())
    }

    /// Expect confirming catalog recorded as source
    #[tokio::test]
    async fn records_catalog_source() -> Result<(), TestError> {
        let mut test = test_setup_with_knowledge_base_tables!()?;
        let brand = test.knowledge().insert_brand("Kia").await?;

        let trim_repo = BrandTrimRepository::new(&test.db);
        let created = trim_repo
            .create_if_missing(brand.id, "GT-Line", KnowledgeSource::CarQuery)
            .await?;
        let trim = trim_repo.find_by_name(brand.id, "gt-line").await?;

        assert!(created);
        assert_eq!(trim.map(|t| t.source).as_deref(), Some("carquery"));

        Ok(())
    }

    /// Expect second insert of the same trim to be skipped
    #[tokio::test]
    async fn skips_existing_trim() -> Result<(), TestError> {
        let mut test = test_setup_with_knowledge_base_tables!()?;
        let brand = test.knowledge().insert_brand("Kia").await?;

        let trim_repo = BrandTrimRepository::new(&test.db);
        let first = trim_repo
            .create_if_missing(brand.id, "Prestige", KnowledgeSource::Seed)
            .await?;
        let second = trim_repo
            .create_if_missing(brand.id, "PRESTIGE", KnowledgeSource::CarApi)
            .await?;

        assert!(first);
        assert!(!second);
        assert_eq!(trim_repo.get_by_brand(brand.id).await?.len(), 1);

        Ok(())
    }

    /// Expect a duplicate insert to fail with a unique constraint violation
    #[tokio::test]
    async fn duplicate_create_is_unique_violation() -> Result<(), TestError> {
        let mut test = TestBuilder::new()
            .with_knowledge_base_tables()
            .with_trim("Kia", "Prestige")
            .build()
            .await?;
        let brand = test.knowledge().insert_brand("Kia").await?;

        let trim_repo = BrandTrimRepository::new(&test.db);
        let err = trim_repo
            .create(brand.id, "Prestige", KnowledgeSource::CarApi)
            .await
            .unwrap_err();

        assert!(is_unique_violation(&err));

        Ok(())
    }

    /// Expect the same name under another brand to be allowed
    #[tokio::test]
    async fn same_name_for_other_brand_is_created() -> Result<(), TestError> {
        let mut test = TestBuilder::new()
            .with_knowledge_base_tables()
            .with_trim("Kia", "Prestige")
            .build()
            .await?;
        let hyundai = test.knowledge().insert_brand("Hyundai").await?;

        let trim_repo = BrandTrimRepository::new(&test.db);
        let created = trim_repo
            .create_if_missing(hyundai.id, "Prestige", KnowledgeSource::Seed)
            .await?;

        assert!(created);

        Ok(())
    }
}
