//! Error types for the carlot crate.
//!
//! Domain-specific errors live in their own submodules (configuration, parsing, external
//! trim catalogs) and are aggregated into the crate-wide [`Error`] with `#[from]`
//! conversions so the `?` operator works across layers.

pub mod catalog;
pub mod config;
pub mod parser;

use thiserror::Error;

use crate::error::{catalog::CatalogError, config::ConfigError, parser::ParserError};

/// Main error type for the carlot crate.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Parser errors (input that cannot be segmented at all)
/// - Catalog errors (CarQuery/CarAPI); the trim verifier logs and swallows these, they only
///   surface when a catalog client is called directly
/// - Database errors from the knowledge base
/// - HTTP client construction errors
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Input could not be parsed into a car at all.
    #[error(transparent)]
    ParserError(#[from] ParserError),
    /// External trim catalog request failed.
    #[error(transparent)]
    CatalogError(#[from] CatalogError),
    /// Internal error indicating a bug in carlot's code.
    #[error("Internal error in carlot, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// HTTP client could not be built.
    #[error(transparent)]
    ReqwestError(#[from] reqwest::Error),
}
