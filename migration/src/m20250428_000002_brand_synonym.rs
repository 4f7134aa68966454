use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250428_000001_brand::Brand;

static IDX_BRAND_SYNONYM_BRAND_ID: &str = "idx_brand_synonym_brand_id";
static FK_BRAND_SYNONYM_BRAND_ID: &str = "fk_brand_synonym_brand_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BrandSynonym::Table)
                    .if_not_exists()
                    .col(pk_auto(BrandSynonym::Id))
                    .col(string_len_uniq(BrandSynonym::Name, 64))
                    .col(integer(BrandSynonym::BrandId))
                    .col(timestamp(BrandSynonym::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_BRAND_SYNONYM_BRAND_ID)
                    .table(BrandSynonym::Table)
                    .col(BrandSynonym::BrandId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_BRAND_SYNONYM_BRAND_ID)
                    .from_tbl(BrandSynonym::Table)
                    .from_col(BrandSynonym::BrandId)
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
                    .name(FK_BRAND_SYNONYM_BRAND_ID)
                    .table(BrandSynonym::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_BRAND_SYNONYM_BRAND_ID)
                    .table(BrandSynonym::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(BrandSynonym::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum BrandSynonym {
    Table,
    Id,
    Name,
    BrandId,
    CreatedAt,
}
