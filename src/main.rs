use carlot::{
    config::Config,
    data::SeaOrmKnowledgeBase,
    error::Error,
    service::{
        catalog::ApiResultsCache,
        discovery::{Discoveries, DiscoveryService},
        parser::CarParser,
        seed::SeedService,
    },
    startup,
};
use tracing::info;

static USAGE: &str = "Usage: carlot [--seed] \"<car listing>\"...";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let mut seed = false;
    let mut listings = Vec::new();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--seed" => seed = true,
            "-h" | "--help" => {
                println!("{}", USAGE);
                return;
            }
            _ => listings.push(arg),
        }
    }

    if !seed && listings.is_empty() {
        eprintln!("{}", USAGE);
        std::process::exit(2);
    }

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&config, seed, &listings).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(config: &Config, seed: bool, listings: &[String]) -> Result<(), Error> {
    let db = startup::connect_to_database(config).await?;
    let http = startup::build_http_client(config)?;
    let verifier = startup::build_trim_verifier(config, http, ApiResultsCache::new());
    let knowledge = SeaOrmKnowledgeBase::new(&db);

    if seed {
        let summary = SeedService::new(&knowledge).seed_all().await?;
        info!(created = summary.total(), "Knowledge base seeded");
    }

    let parser = CarParser::new(&knowledge, &verifier);
    let mut discoveries = Discoveries::new();

    for listing in listings {
        let car = parser.parse_car_info(listing, &mut discoveries).await?;
        let json = serde_json::to_string_pretty(&car)
            .map_err(|e| Error::InternalError(format!("Failed to serialize parsed car: {}", e)))?;

        println!("{}", json);
    }

    DiscoveryService::new(&knowledge)
        .flush(&mut discoveries)
        .await?;

    Ok(())
}
