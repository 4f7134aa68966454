//! Test configuration constants for catalog client setup.
//!
//! These values are not real credentials but placeholder values for testing purposes.

/// User agent string for test catalog requests.
pub static TEST_USER_AGENT: &str = "carlot-tests/1.0 (contact@example.com)";

/// Mock CarAPI token for testing. Not a real credential.
pub static TEST_CARAPI_TOKEN: &str = "carapi_token";

/// Mock CarAPI secret for testing. Not a real credential.
pub static TEST_CARAPI_SECRET: &str = "carapi_secret";

/// JWT returned by the mock CarAPI login endpoint.
///
/// The catalog client only forwards it as a bearer token, so it does not need to be a
/// decodable token.
pub static TEST_CARAPI_JWT: &str = "header.payload.signature";
