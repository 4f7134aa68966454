use carlot::{
    data::{KnowledgeBase, SeaOrmKnowledgeBase},
    service::{
        catalog::TrimVerifier,
        discovery::{Discoveries, DiscoveryService},
        parser::CarParser,
    },
};
use carlot_test_utils::prelude::*;

/// Expect flushed discoveries to be known on the next parse
#[tokio::test]
async fn flushed_discoveries_are_known_on_reparse() -> Result<(), TestError> {
    let test = test_setup_with_knowledge_base_tables!()?;
    let knowledge = SeaOrmKnowledgeBase::new(&test.db);
    let verifier = TrimVerifier::offline();
    let parser = CarParser::new(&knowledge, &verifier);

    let mut discoveries = Discoveries::new();
    let first = parser
        .parse_car_info("Zorglub Quux Sport", &mut discoveries)
        .await
        .unwrap();

    let summary = DiscoveryService::new(&knowledge)
        .flush(&mut discoveries)
        .await
        .unwrap();

    assert_eq!(summary.brands, 1);
    assert_eq!(summary.models, 1);
    assert_eq!(summary.modifications, 1);
    assert!(discoveries.is_empty());

    let zorglub = knowledge.find_brand("Zorglub").await?.unwrap();
    assert_eq!(
        knowledge.models_for_brand(zorglub.id.unwrap()).await?,
        vec!["Quux"]
    );

    let mut again = Discoveries::new();
    let second = parser
        .parse_car_info("Zorglub Quux Sport", &mut again)
        .await
        .unwrap();

    assert_eq!(first, second);
    assert!(again.is_empty());

    Ok(())
}

/// Expect a modification seen in several parses to be written once
#[tokio::test]
async fn flush_writes_discovered_modifications_once() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_knowledge_base_tables()
        .with_model("Kia", "EV6")
        .with_trim("Kia", "GT-Line")
        .build()
        .await?;
    let knowledge = SeaOrmKnowledgeBase::new(&test.db);
    let verifier = TrimVerifier::offline();
    let parser = CarParser::new(&knowledge, &verifier);
    let service = DiscoveryService::new(&knowledge);

    let mut discoveries = Discoveries::new();
    parser
        .parse_car_info("Kia EV6 77.4 kWh RWD GT-Line", &mut discoveries)
        .await
        .unwrap();
    parser
        .parse_car_info("KIA EV6 77.4 kWh RWD GT-Line", &mut discoveries)
        .await
        .unwrap();

    let mut replay = discoveries.clone();
    let first = service.flush(&mut discoveries).await.unwrap();
    let second = service.flush(&mut replay).await.unwrap();

    assert_eq!(first.modifications, 1);
    assert_eq!(second.total(), 0);

    let kia = knowledge.find_brand("kia").await?.unwrap();
    assert_eq!(
        knowledge.modifications_for_brand(kia.id.unwrap()).await?,
        vec!["77.4 kWh RWD"]
    );

    Ok(())
}

/// Expect an over-long modification to be returned but left out of the flush
#[tokio::test]
async fn over_long_modification_is_parsed_but_not_flushed() -> Result<(), TestError> {
    let test = test_setup_with_knowledge_base_tables!()?;
    let knowledge = SeaOrmKnowledgeBase::new(&test.db);
    let verifier = TrimVerifier::offline();
    let parser = CarParser::new(&knowledge, &verifier);

    let listing = format!("Zorglub Quux {}", "X".repeat(120));
    let mut discoveries = Discoveries::new();
    let car = parser
        .parse_car_info(&listing, &mut discoveries)
        .await
        .unwrap();

    assert_eq!(car.modification.chars().count(), 120);
    assert!(discoveries.modifications().is_empty());

    let summary = DiscoveryService::new(&knowledge)
        .flush(&mut discoveries)
        .await
        .unwrap();

    assert_eq!(summary.brands, 1);
    assert_eq!(summary.models, 1);
    assert_eq!(summary.modifications, 0);
    assert!(discoveries.is_empty());

    Ok(())
}
