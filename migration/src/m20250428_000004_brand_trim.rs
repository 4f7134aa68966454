use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250428_000001_brand::Brand;

static IDX_BRAND_TRIM_NAME_BRAND_ID: &str = "unique_trim_per_brand";
static FK_BRAND_TRIM_BRAND_ID: &str = "fk_brand_trim_brand_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BrandTrim::Table)
                    .if_not_exists()
                    .col(pk_auto(BrandTrim::Id))
                    .col(string_len(BrandTrim::Name, 64))
                    .col(integer(BrandTrim::BrandId))
                    .col(string_len(BrandTrim::Source, 50))
                    .col(timestamp(BrandTrim::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_BRAND_TRIM_NAME_BRAND_ID)
                    .table(BrandTrim::Table)
                    .col(BrandTrim::Name)
                    .col(BrandTrim::BrandId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_BRAND_TRIM_BRAND_ID)
                    .from_tbl(BrandTrim::Table)
                    .from_col(BrandTrim::BrandId)
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
                    .name(FK_BRAND_TRIM_BRAND_ID)
                    .table(BrandTrim::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_BRAND_TRIM_NAME_BRAND_ID)
                    .table(BrandTrim::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(BrandTrim::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum BrandTrim {
    Table,
    Id,
    Name,
    BrandId,
    Source,
    CreatedAt,
}
