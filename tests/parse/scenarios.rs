use carlot::{
    data::SeaOrmKnowledgeBase,
    model::{
        engine::{DriveType, EngineType, TransmissionType},
        knowledge::KnowledgeSource,
    },
    service::{
        catalog::TrimVerifier,
        discovery::{Discoveries, Discovery},
        parser::CarParser,
    },
};
use carlot_test_utils::prelude::*;

use crate::util::seeded_test;

/// Expect known brand, model, modification and trim along with diesel xDrive
#[tokio::test]
async fn bmw_x5_with_known_trim() -> Result<(), TestError> {
    let test = seeded_test().await?;
    let knowledge = SeaOrmKnowledgeBase::new(&test.db);
    let verifier = TrimVerifier::offline();
    let parser = CarParser::new(&knowledge, &verifier);
    let mut discoveries = Discoveries::new();

    let car = parser
        .parse_car_info("BMW X5 xDrive30d M Sport", &mut discoveries)
        .await
        .unwrap();

    assert_eq!(car.brand, "BMW");
    assert_eq!(car.model, "X5");
    assert_eq!(car.modification, "xDrive30d");
    assert_eq!(car.trim, "M Sport");
    assert_eq!(car.engine.engine_type, Some(EngineType::Diesel));
    assert_eq!(car.engine.drive, Some(DriveType::Xdrive));
    assert!(discoveries.is_empty());

    Ok(())
}

/// Expect the TSI displacement and 4Motion all-wheel drive
#[tokio::test]
async fn volkswagen_tiguan_with_engine_family() -> Result<(), TestError> {
    let test = seeded_test().await?;
    let knowledge = SeaOrmKnowledgeBase::new(&test.db);
    let verifier = TrimVerifier::offline();
    let parser = CarParser::new(&knowledge, &verifier);
    let mut discoveries = Discoveries::new();

    let car = parser
        .parse_car_info("Volkswagen Tiguan 2.0 TSI 4Motion R-Line", &mut discoveries)
        .await
        .unwrap();

    assert_eq!(car.brand, "Volkswagen");
    assert_eq!(car.model, "Tiguan");
    assert_eq!(car.modification, "2.0 TSI 4Motion");
    assert_eq!(car.trim, "R-Line");
    assert_eq!(car.engine.displacement.as_deref(), Some("2.0 TSI"));
    assert_eq!(car.engine.engine_type, Some(EngineType::Gasoline));
    assert_eq!(car.engine.drive, Some(DriveType::AllWheelDrive));

    Ok(())
}

/// Expect battery capacity as displacement and the unknown modification to be queued
#[tokio::test]
async fn kia_ev6_with_battery_capacity() -> Result<(), TestError> {
    let test = seeded_test().await?;
    let knowledge = SeaOrmKnowledgeBase::new(&test.db);
    let verifier = TrimVerifier::offline();
    let parser = CarParser::new(&knowledge, &verifier);
    let mut discoveries = Discoveries::new();

    let car = parser
        .parse_car_info("Kia EV6 77.4 kWh RWD GT-Line", &mut discoveries)
        .await
        .unwrap();

    assert_eq!(car.model, "EV6");
    assert_eq!(car.trim, "GT-Line");
    assert_eq!(car.modification, "77.4 kWh RWD");
    assert_eq!(car.engine.displacement.as_deref(), Some("77.4 kWh"));
    assert_eq!(car.engine.engine_type, Some(EngineType::Electric));
    assert_eq!(car.engine.drive, Some(DriveType::RearWheelDrive));
    assert_eq!(
        discoveries.modifications(),
        [Discovery {
            brand: "Kia".to_string(),
            name: "77.4 kWh RWD".to_string(),
            source: KnowledgeSource::AutoDetected,
        }]
    );

    Ok(())
}

/// Expect the default trim when nothing in the text is a trim
#[tokio::test]
async fn porsche_911_without_trim() -> Result<(), TestError> {
    let test = seeded_test().await?;
    let knowledge = SeaOrmKnowledgeBase::new(&test.db);
    let verifier = TrimVerifier::offline();
    let parser = CarParser::new(&knowledge, &verifier);
    let mut discoveries = Discoveries::new();

    let car = parser
        .parse_car_info("Porsche 911 3.0T PDK", &mut discoveries)
        .await
        .unwrap();

    assert_eq!(car.model, "911");
    assert_eq!(car.trim, "Standard");
    assert_eq!(car.modification, "3.0T PDK");
    assert_eq!(car.engine.displacement.as_deref(), Some("3.0T"));
    assert_eq!(car.engine.engine_type, Some(EngineType::Gasoline));
    assert_eq!(car.engine.transmission, Some(TransmissionType::Pdk));

    Ok(())
}

/// Expect first-token fallbacks for an unknown brand and model, all queued
#[tokio::test]
async fn unknown_brand_falls_back_to_tokens() -> Result<(), TestError> {
    let test = seeded_test().await?;
    let knowledge = SeaOrmKnowledgeBase::new(&test.db);
    let verifier = TrimVerifier::offline();
    let parser = CarParser::new(&knowledge, &verifier);
    let mut discoveries = Discoveries::new();

    let car = parser
        .parse_car_info("Zorglub Quux Sport", &mut discoveries)
        .await
        .unwrap();

    assert_eq!(car.brand, "Zorglub");
    assert_eq!(car.model, "Quux");
    assert_eq!(car.trim, "Standard");
    assert_eq!(car.modification, "Sport");
    assert_eq!(discoveries.brands(), ["Zorglub"]);
    assert_eq!(discoveries.models()[0].name, "Quux");
    assert_eq!(discoveries.modifications()[0].name, "Sport");

    Ok(())
}

/// Expect identical results when parsing the same listing twice
#[tokio::test]
async fn parsing_is_idempotent() -> Result<(), TestError> {
    let test = seeded_test().await?;
    let knowledge = SeaOrmKnowledgeBase::new(&test.db);
    let verifier = TrimVerifier::offline();
    let parser = CarParser::new(&knowledge, &verifier);

    for listing in [
        "BMW X5 xDrive30d M Sport",
        "Kia EV6 77.4 kWh RWD GT-Line",
        "Zorglub Quux Sport",
    ] {
        let first = parser
            .parse_car_info(listing, &mut Discoveries::new())
            .await
            .unwrap();
        let second = parser
            .parse_car_info(listing, &mut Discoveries::new())
            .await
            .unwrap();

        assert_eq!(first, second);
    }

    Ok(())
}
