//! Data models shared across the crate.
//!
//! - `car` - transient parse results handed to the import flow
//! - `engine` - engine attributes and their value vocabularies
//! - `knowledge` - knowledge base value types (brand aliases, row sources)

pub mod car;
pub mod engine;
pub mod knowledge;
