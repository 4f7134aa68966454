//! `SeaORM` Entity

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "brand")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    #[sea_orm(unique)]
    pub slug: String,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::brand_synonym::Entity")]
    BrandSynonym,
    #[sea_orm(has_many = "super::brand_model::Entity")]
    BrandModel,
    #[sea_orm(has_many = "super::brand_trim::Entity")]
    BrandTrim,
    #[sea_orm(has_many = "super::brand_modification::Entity")]
    BrandModification,
}

impl Related<super::brand_synonym::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BrandSynonym.def()
    }
}

impl Related<super::brand_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BrandModel.def()
    }
}

impl Related<super::brand_trim::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BrandTrim.def()
    }
}

impl Related<super::brand_modification::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BrandModification.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
