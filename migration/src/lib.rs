pub use sea_orm_migration::prelude::*;

mod m20250428_000001_brand;
mod m20250428_000002_brand_synonym;
mod m20250428_000003_brand_model;
mod m20250428_000004_brand_trim;
mod m20250428_000005_brand_modification;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250428_000001_brand::Migration),
            Box::new(m20250428_000002_brand_synonym::Migration),
            Box::new(m20250428_000003_brand_model::Migration),
            Box::new(m20250428_000004_brand_trim::Migration),
            Box::new(m20250428_000005_brand_modification::Migration),
        ]
    }
}
