use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::{
    data::is_unique_violation,
    util::text::{comparison_key, slugify},
};

pub struct BrandRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BrandRepository<'a, C> {
    /// Creates a new instance of [`BrandRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new brand, deriving its slug from the name
    pub async fn create(&self, name: &str) -> Result<entity::brand::Model, DbErr> {
        let brand = entity::brand::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            slug: ActiveValue::Set(slugify(name)),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        brand.insert(self.db).await
    }

    pub async fn get(&self, brand_id: i32) -> Result<Option<entity::brand::Model>, DbErr> {
        entity::prelude::Brand::find_by_id(brand_id)
            .one(self.db)
            .await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::brand::Model>, DbErr> {
        entity::prelude::Brand::find()
            .order_by_asc(entity::brand::Column::Name)
            .all(self.db)
            .await
    }

    /// Finds a brand by its canonical name, case-insensitively
    pub async fn find_by_name(&self, name: &str) -> Result<Option<entity::brand::Model>, DbErr> {
        // Exact hit first, the common case for names coming from the knowledge base itself
        if let Some(brand) = entity::prelude::Brand::find()
            .filter(entity::brand::Column::Name.eq(name))
            .one(self.db)
            .await?
        {
            return Ok(Some(brand));
        }

        let key = comparison_key(name);
        let brands = self.get_all().await?;

        Ok(brands
            .into_iter()
            .find(|brand| comparison_key(&brand.name) == key))
    }

    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<entity::brand::Model>, DbErr> {
        entity::prelude::Brand::find()
            .filter(entity::brand::Column::Slug.eq(slug))
            .one(self.db)
            .await
    }

    /// Returns the brand named `name`, creating it if it does not exist yet.
    ///
    /// The boolean is `true` when the brand was created by this call. A unique constraint
    /// violation, from a concurrent insert or from a name sharing another brand's slug,
    /// resolves to the existing row.
    pub async fn get_or_create(&self, name: &str) -> Result<(entity::brand::Model, bool), DbErr> {
        if let Some(brand) = self.find_by_name(name).await? {
            return Ok((brand, false));
        }

        match self.create(name).await {
            Ok(brand) => Ok((brand, true)),
            Err(err) if is_unique_violation(&err) => {
                let existing = match self.find_by_name(name).await? {
                    Some(brand) => Some(brand),
                    None => self.find_by_slug(&slugify(name)).await?,
                };

                match existing {
                    Some(brand) => Ok((brand, false)),
                    None => Err(err),
                }
            }
            Err(err) => Err(err),
        }
    }
}
