use thiserror::Error;

/// Errors raised by the external trim catalogs (CarQuery, CarAPI).
///
/// These never fail a parse: the trim verifier logs them as warnings and treats the
/// candidate as not confirmed.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("{catalog} credentials are not configured")]
    MissingCredentials { catalog: &'static str },
    #[error("{catalog} returned unexpected status {status}")]
    UnexpectedStatus {
        catalog: &'static str,
        status: reqwest::StatusCode,
    },
    #[error("Failed to decode {catalog} response: {source}")]
    Decode {
        catalog: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),
}
