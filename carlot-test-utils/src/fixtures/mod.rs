//! Test fixture modules for database and HTTP mock creation.
//!
//! - `catalog` - CarQuery and CarAPI response bodies and mock endpoints
//! - `knowledge` - brand, synonym, model, trim and modification records

pub mod catalog;
pub mod knowledge;
