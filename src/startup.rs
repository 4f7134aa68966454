use sea_orm::DatabaseConnection;
use tracing_subscriber::EnvFilter;

use crate::{
    config::Config,
    error::Error,
    service::catalog::{ApiResultsCache, CarApiClient, CarQueryClient, TrimVerifier},
};

/// Install the tracing subscriber, filtered by `RUST_LOG` and defaulting to `info`
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Build the HTTP client shared by the trim catalogs
pub fn build_http_client(config: &Config) -> Result<reqwest::Client, Error> {
    let http = reqwest::Client::builder()
        .user_agent(&config.user_agent)
        .timeout(config.http_timeout)
        .build()?;

    Ok(http)
}

/// Build the trim verifier, consulting CarQuery before CarAPI
pub fn build_trim_verifier(
    config: &Config,
    http: reqwest::Client,
    cache: ApiResultsCache,
) -> TrimVerifier {
    let carquery = CarQueryClient::new(http.clone(), &config.carquery_url);
    let carapi = CarApiClient::new(
        http,
        &config.carapi_url,
        config.carapi_credentials.clone(),
    );

    TrimVerifier::new(vec![Box::new(carquery), Box::new(carapi)], cache)
}
