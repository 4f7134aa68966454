//! Parsing and knowledge base services.
//!
//! - `engine` - engine attribute extraction
//! - `parser` - brand/model segmentation and trim/modification normalization
//! - `catalog` - external trim catalogs and the trim verifier
//! - `discovery` - buffer of newly seen entries and its flush
//! - `seed` - standard knowledge base contents

pub mod catalog;
pub mod discovery;
pub mod engine;
pub mod parser;
pub mod seed;
