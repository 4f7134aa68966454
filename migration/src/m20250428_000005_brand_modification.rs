use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250428_000001_brand::Brand;

static IDX_BRAND_MODIFICATION_NAME_BRAND_ID: &str = "unique_modification_per_brand";
static FK_BRAND_MODIFICATION_BRAND_ID: &str = "fk_brand_modification_brand_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BrandModification::Table)
                    .if_not_exists()
                    .col(pk_auto(BrandModification::Id))
                    .col(string_len(BrandModification::Name, 100))
                    .col(integer(BrandModification::BrandId))
                    .col(string_len(BrandModification::Source, 50))
                    .col(timestamp(BrandModification::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_BRAND_MODIFICATION_NAME_BRAND_ID)
                    .table(BrandModification::Table)
                    .col(BrandModification::Name)
                    .col(BrandModification::BrandId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_BRAND_MODIFICATION_BRAND_ID)
                    .from_tbl(BrandModification::Table)
                    .from_col(BrandModification::BrandId)
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
                    .name(FK_BRAND_MODIFICATION_BRAND_ID)
                    .table(BrandModification::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_BRAND_MODIFICATION_NAME_BRAND_ID)
                    .table(BrandModification::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(BrandModification::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum BrandModification {
    Table,
    Id,
    Name,
    BrandId,
    Source,
    CreatedAt,
}
