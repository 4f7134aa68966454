use carlot::{
    data::SeaOrmKnowledgeBase,
    service::{catalog::TrimVerifier, discovery::Discoveries, parser::CarParser},
};
use carlot_test_utils::prelude::*;

use crate::util::seeded_test;

/// Expect a Cyrillic synonym to resolve to the canonical brand
#[tokio::test]
async fn resolves_brand_synonym() -> Result<(), TestError> {
    let test = seeded_test().await?;
    let knowledge = SeaOrmKnowledgeBase::new(&test.db);
    let verifier = TrimVerifier::offline();
    let parser = CarParser::new(&knowledge, &verifier);
    let mut discoveries = Discoveries::new();

    let car = parser
        .parse_car_info("Фольксваген Polo 1.4 TSI Style", &mut discoveries)
        .await
        .unwrap();

    assert_eq!(car.brand, "Volkswagen");
    assert_eq!(car.model, "Polo");
    assert_eq!(car.trim, "Style");
    assert_eq!(car.modification, "1.4 TSI");
    assert!(discoveries.is_empty());

    Ok(())
}

/// Expect the brand to be found when it is not the first word
#[tokio::test]
async fn finds_brand_anywhere() -> Result<(), TestError> {
    let test = seeded_test().await?;
    let knowledge = SeaOrmKnowledgeBase::new(&test.db);
    let verifier = TrimVerifier::offline();
    let parser = CarParser::new(&knowledge, &verifier);
    let mut discoveries = Discoveries::new();

    let car = parser
        .parse_car_info("2021 VW Golf 2.0 TSI GTI", &mut discoveries)
        .await
        .unwrap();

    assert_eq!(car.brand, "Volkswagen");
    assert_eq!(car.model, "Golf");
    assert_eq!(car.trim, "GTI");

    Ok(())
}

/// Expect the longest multi-word model to win over its prefix
#[tokio::test]
async fn prefers_longest_multi_word_model() -> Result<(), TestError> {
    let test = seeded_test().await?;
    let knowledge = SeaOrmKnowledgeBase::new(&test.db);
    let verifier = TrimVerifier::offline();
    let parser = CarParser::new(&knowledge, &verifier);
    let mut discoveries = Discoveries::new();

    let range_rover = parser
        .parse_car_info("Land Rover Range Rover Sport 3.0 HSE", &mut discoveries)
        .await
        .unwrap();
    let tiggo = parser
        .parse_car_info("Chery Tiggo 8 Pro 1.6T DCT Premium", &mut discoveries)
        .await
        .unwrap();

    assert_eq!(range_rover.brand, "Land Rover");
    assert_eq!(range_rover.model, "Range Rover Sport");
    assert_eq!(range_rover.trim, "HSE");
    assert_eq!(range_rover.modification, "3.0");

    assert_eq!(tiggo.model, "Tiggo 8 Pro");
    assert_eq!(tiggo.trim, "Premium");
    assert_eq!(tiggo.modification, "1.6T DCT");

    Ok(())
}

/// Expect parenthesized text to be ignored by the normalizer
#[tokio::test]
async fn ignores_parenthesized_text() -> Result<(), TestError> {
    let test = seeded_test().await?;
    let knowledge = SeaOrmKnowledgeBase::new(&test.db);
    let verifier = TrimVerifier::offline();
    let parser = CarParser::new(&knowledge, &verifier);
    let mut discoveries = Discoveries::new();

    let car = parser
        .parse_car_info("Toyota Camry 2.5L (2023) XLE", &mut discoveries)
        .await
        .unwrap();

    assert_eq!(car.model, "Camry");
    assert_eq!(car.trim, "XLE");
    assert_eq!(car.modification, "2.5L");

    Ok(())
}

/// Expect EmptyInput error for blank input
#[tokio::test]
async fn rejects_blank_input() -> Result<(), TestError> {
    let test = seeded_test().await?;
    let knowledge = SeaOrmKnowledgeBase::new(&test.db);
    let verifier = TrimVerifier::offline();
    let parser = CarParser::new(&knowledge, &verifier);

    let result = parser.parse_car_info("   ", &mut Discoveries::new()).await;

    assert!(matches!(
        result,
        Err(carlot::error::Error::ParserError(
            carlot::error::parser::ParserError::EmptyInput
        ))
    ));

    Ok(())
}
