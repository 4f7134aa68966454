//! `SeaORM` Entity prelude

pub use super::brand::Entity as Brand;
pub use super::brand_model::Entity as BrandModel;
pub use super::brand_modification::Entity as BrandModification;
pub use super::brand_synonym::Entity as BrandSynonym;
pub use super::brand_trim::Entity as BrandTrim;
