use carlot::{
    data::SeaOrmKnowledgeBase,
    model::knowledge::KnowledgeSource,
    service::{discovery::Discoveries, parser::CarParser},
};
use carlot_test_utils::prelude::*;

use crate::util::{mock_verifier, test_credentials};

/// Expect a CarQuery-confirmed trim to be used and queued, with the second parse served from
/// the cache
#[tokio::test]
async fn confirms_trim_with_carquery_once() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_knowledge_base_tables()
        .with_model("Hyundai", "Sonata")
        .with_carquery_trims_endpoint("Hyundai", "Sonata", &["2.0 Prestige", "2.5 Inspiration"], 1)
        .with_carapi_login_endpoint(0)
        .build()
        .await?;

    let knowledge = SeaOrmKnowledgeBase::new(&test.db);
    let verifier = mock_verifier(&test, test_credentials());
    let parser = CarParser::new(&knowledge, &verifier);
    let mut discoveries = Discoveries::new();

    let first = parser
        .parse_car_info("Hyundai Sonata 2.0 Prestige", &mut discoveries)
        .await
        .unwrap();
    let second = parser
        .parse_car_info("Hyundai Sonata 2.0 Prestige", &mut discoveries)
        .await
        .unwrap();

    test.assert_mocks();
    assert_eq!(first, second);
    assert_eq!(first.trim, "Prestige");
    assert_eq!(first.modification, "2.0");
    assert_eq!(discoveries.trims().len(), 1);
    assert_eq!(discoveries.trims()[0].source, KnowledgeSource::CarQuery);
    assert_eq!(verifier.cache().len().await, 1);

    Ok(())
}

/// Expect CarAPI to confirm the trim when CarQuery fails
#[tokio::test]
async fn falls_back_to_carapi() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_knowledge_base_tables()
        .with_model("Kia", "K5")
        .with_carquery_error_endpoint("Kia", "K5", 503, 1)
        .with_carapi_login_endpoint(1)
        .with_carapi_trims_endpoint("Kia", "K5", &["Prestige", "GT"], 1)
        .build()
        .await?;

    let knowledge = SeaOrmKnowledgeBase::new(&test.db);
    let verifier = mock_verifier(&test, test_credentials());
    let parser = CarParser::new(&knowledge, &verifier);
    let mut discoveries = Discoveries::new();

    let car = parser
        .parse_car_info("Kia K5 2.5 Prestige", &mut discoveries)
        .await
        .unwrap();

    test.assert_mocks();
    assert_eq!(car.trim, "Prestige");
    assert_eq!(discoveries.trims()[0].source, KnowledgeSource::CarApi);

    Ok(())
}

/// Expect a failed catalog to be asked again on the next parse
#[tokio::test]
async fn failures_are_not_cached() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_knowledge_base_tables()
        .with_model("Kia", "K5")
        .with_carquery_error_endpoint("Kia", "K5", 500, 2)
        .build()
        .await?;

    let knowledge = SeaOrmKnowledgeBase::new(&test.db);
    let verifier = mock_verifier(&test, None);
    let parser = CarParser::new(&knowledge, &verifier);

    for _ in 0..2 {
        let car = parser
            .parse_car_info("Kia K5 2.5 Prestige", &mut Discoveries::new())
            .await
            .unwrap();

        assert_eq!(car.trim, "Standard");
        assert_eq!(car.modification, "2.5 Prestige");
    }

    test.assert_mocks();
    assert!(verifier.cache().is_empty().await);

    Ok(())
}

/// Expect no CarAPI request without credentials
#[tokio::test]
async fn skips_carapi_without_credentials() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_knowledge_base_tables()
        .with_model("Haval", "Jolion")
        .with_carquery_trims_endpoint("Haval", "Jolion", &["1.5T Comfort"], 1)
        .with_carapi_login_endpoint(0)
        .with_carapi_trims_endpoint("Haval", "Jolion", &["Tech Plus"], 0)
        .build()
        .await?;

    let knowledge = SeaOrmKnowledgeBase::new(&test.db);
    let verifier = mock_verifier(&test, None);
    let parser = CarParser::new(&knowledge, &verifier);
    let mut discoveries = Discoveries::new();

    let car = parser
        .parse_car_info("Haval Jolion 1.5T Tech Plus", &mut discoveries)
        .await
        .unwrap();

    test.assert_mocks();
    assert_eq!(car.trim, "Standard");
    assert_eq!(car.modification, "1.5T Tech Plus");
    assert!(discoveries.trims().is_empty());

    Ok(())
}

/// Expect known trims to be used without asking any catalog
#[tokio::test]
async fn known_trim_skips_catalogs() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_knowledge_base_tables()
        .with_model("BMW", "X5")
        .with_trim("BMW", "M Sport")
        .with_carquery_trims_endpoint("BMW", "X5", &["M Sport"], 0)
        .with_carapi_login_endpoint(0)
        .build()
        .await?;

    let knowledge = SeaOrmKnowledgeBase::new(&test.db);
    let verifier = mock_verifier(&test, test_credentials());
    let parser = CarParser::new(&knowledge, &verifier);

    let car = parser
        .parse_car_info("BMW X5 xDrive30d M Sport", &mut Discoveries::new())
        .await
        .unwrap();

    test.assert_mocks();
    assert_eq!(car.trim, "M Sport");

    Ok(())
}
