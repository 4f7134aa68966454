//! `SeaORM` Entity for the car knowledge base

pub mod prelude;

pub mod brand;
pub mod brand_model;
pub mod brand_modification;
pub mod brand_synonym;
pub mod brand_trim;
