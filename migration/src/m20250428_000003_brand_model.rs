use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250428_000001_brand::Brand;

static IDX_BRAND_MODEL_NAME_BRAND_ID: &str = "unique_model_per_brand";
static FK_BRAND_MODEL_BRAND_ID: &str = "fk_brand_model_brand_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BrandModel::Table)
                    .if_not_exists()
                    .col(pk_auto(BrandModel::Id))
                    .col(string_len(BrandModel::Name, 100))
                    .col(integer(BrandModel::BrandId))
                    .col(boolean(BrandModel::IsMultiWord))
                    .col(string_len(BrandModel::Source, 50))
                    .col(timestamp(BrandModel::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_BRAND_MODEL_NAME_BRAND_ID)
                    .table(BrandModel::Table)
                    .col(BrandModel::Name)
                    .col(BrandModel::BrandId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_BRAND_MODEL_BRAND_ID)
                    .from_tbl(BrandModel::Table)
                    .from_col(BrandModel::BrandId)
                    .to_tbl(Brand::Table)
                    .to_col(Brand::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_BRAND_MODEL_BRAND_ID)
                    .table(BrandModel::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_BRAND_MODEL_NAME_BRAND_ID)
                    .table(BrandModel::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(BrandModel::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum BrandModel {
    Table,
    Id,
    Name,
    BrandId,
    IsMultiWord,
    Source,
    CreatedAt,
}
