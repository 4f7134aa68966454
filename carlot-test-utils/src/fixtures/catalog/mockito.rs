//! Catalog HTTP mock endpoint creation utilities.
//!
//! Each endpoint verifies it was called exactly `expected_requests` times when the test
//! calls [`TestContext::assert_mocks`](crate::TestContext::assert_mocks).

use mockito::{Matcher, Mock};
use serde_json::json;

use crate::{
    constant::{TEST_CARAPI_JWT, TEST_CARAPI_SECRET, TEST_CARAPI_TOKEN},
    fixtures::catalog::{factory, CatalogFixtures},
};

pub static CARQUERY_PATH: &str = "/api/0.3/";
pub static CARAPI_LOGIN_PATH: &str = "/api/auth/login";
pub static CARAPI_TRIMS_PATH: &str = "/api/v1/trims";

fn make_model_query(make: &str, model: &str) -> Vec<Matcher> {
    vec![
        Matcher::UrlEncoded("make".into(), make.to_lowercase()),
        Matcher::UrlEncoded("model".into(), model.to_lowercase()),
    ]
}

impl<'a> CatalogFixtures<'a> {
    /// Create a mock CarQuery `getTrims` endpoint for `make`/`model` returning `trims`.
    pub fn create_carquery_trims_endpoint(
        &mut self,
        make: &str,
        model: &str,
        trims: &[&str],
        expected_requests: usize,
    ) -> Mock {
        let mut query = make_model_query(make, model);
        query.push(Matcher::UrlEncoded("cmd".into(), "getTrims".into()));

        self.setup
            .server
            .mock("GET", CARQUERY_PATH)
            .match_query(Matcher::AllOf(query))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(factory::carquery_trims(make, model, trims).to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock CarQuery endpoint for `make`/`model` that responds with `status`.
    pub fn create_carquery_error_endpoint(
        &mut self,
        make: &str,
        model: &str,
        status: usize,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("GET", CARQUERY_PATH)
            .match_query(Matcher::AllOf(make_model_query(make, model)))
            .with_status(status)
            .expect(expected_requests)
            .create()
    }

    /// Create a mock CarAPI login endpoint that exchanges the test token/secret for
    /// [`TEST_CARAPI_JWT`].
    pub fn create_carapi_login_endpoint(&mut self, expected_requests: usize) -> Mock {
        self.setup
            .server
            .mock("POST", CARAPI_LOGIN_PATH)
            .match_body(Matcher::Json(json!({
                "api_token": TEST_CARAPI_TOKEN,
                "api_secret": TEST_CARAPI_SECRET,
            })))
            .with_status(200)
            .with_header("content-type", "text/plain")
            .with_body(TEST_CARAPI_JWT)
            .expect(expected_requests)
            .create()
    }

    /// Create a mock CarAPI trims endpoint for `make`/`model` returning `trims`.
    ///
    /// Only requests carrying the test JWT as bearer token match.
    pub fn create_carapi_trims_endpoint(
        &mut self,
        make: &str,
        model: &str,
        trims: &[&str],
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("GET", CARAPI_TRIMS_PATH)
            .match_query(Matcher::AllOf(make_model_query(make, model)))
            .match_header("authorization", format!("Bearer {}", TEST_CARAPI_JWT).as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(factory::carapi_trims(make, model, trims).to_string())
            .expect(expected_requests)
            .create()
    }
}
