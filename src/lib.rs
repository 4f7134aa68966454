//! Car listing parser backed by a brand/model/trim knowledge base.
//!
//! [`service::parser::CarParser`] splits free-form listing titles such as
//! `"BMW X5 xDrive30d M Sport"` into brand, model, modification and trim, and extracts
//! engine attributes from the text. Unknown tokens are collected in a
//! [`service::discovery::Discoveries`] buffer that the caller flushes back into the
//! knowledge base once its import has committed.

pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod service;
pub mod startup;
pub mod util;
