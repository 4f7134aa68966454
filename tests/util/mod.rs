use carlot::{
    config::CarApiCredentials,
    data::SeaOrmKnowledgeBase,
    service::{
        catalog::{ApiResultsCache, CarApiClient, CarQueryClient, TrimVerifier},
        seed::SeedService,
    },
};
use carlot_test_utils::prelude::*;
use sea_orm::DatabaseConnection;

/// Verifier whose catalogs both point at the test's mock server
pub fn mock_verifier(test: &TestContext, credentials: Option<CarApiCredentials>) -> TrimVerifier {
    let http = reqwest::Client::builder()
        .user_agent(TEST_USER_AGENT)
        .build()
        .expect("Failed to build HTTP client");

    let carquery = CarQueryClient::new(http.clone(), test.url());
    let carapi = CarApiClient::new(http, test.url(), credentials);

    TrimVerifier::new(vec![Box::new(carquery), Box::new(carapi)], ApiResultsCache::new())
}

pub fn test_credentials() -> Option<CarApiCredentials> {
    Some(CarApiCredentials {
        api_token: TEST_CARAPI_TOKEN.to_string(),
        api_secret: TEST_CARAPI_SECRET.to_string(),
    })
}

/// Knowledge base tables filled with the standard seed data
pub async fn seeded_test() -> Result<TestContext, TestError> {
    let test = test_setup_with_knowledge_base_tables!()?;
    seed(&test.db).await;

    Ok(test)
}

async fn seed(db: &DatabaseConnection) {
    let knowledge = SeaOrmKnowledgeBase::new(db);

    SeedService::new(&knowledge)
        .seed_all()
        .await
        .expect("Failed to seed knowledge base");
}
