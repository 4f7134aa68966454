pub mod brand;
pub mod brand_model;
pub mod brand_modification;
pub mod brand_synonym;
pub mod brand_trim;
pub mod knowledge_base;

use sea_orm::{DbErr, SqlErr};

pub use brand::BrandRepository;
pub use brand_model::BrandModelRepository;
pub use brand_modification::BrandModificationRepository;
pub use brand_synonym::BrandSynonymRepository;
pub use brand_trim::BrandTrimRepository;
pub use knowledge_base::{KnowledgeBase, SeaOrmKnowledgeBase};

/// Returns true when `err` is a unique constraint violation, meaning a concurrent writer
/// already inserted the row.
pub(crate) fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}
