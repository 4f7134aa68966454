//! Car listing segmentation and trim/modification normalization.
//!
//! [`CarParser::parse_car_info`] splits a listing title such as `BMW X5 xDrive30d M Sport`
//! into brand, model, modification and trim, with engine attributes extracted alongside.
//! Knowledge base lookups go through [`KnowledgeBase`]; unknown trims may be confirmed by
//! the external catalogs through [`TrimVerifier`]. Anything the knowledge base did not know
//! is queued in the caller's [`Discoveries`] rather than written.

use std::ops::Range;

use tracing::debug;

use crate::{
    data::KnowledgeBase,
    error::{parser::ParserError, Error},
    model::{
        car::{NormalizedCar, ParsedCar, DEFAULT_MODIFICATION, DEFAULT_TRIM},
        knowledge::{BrandRef, KnowledgeSource},
    },
    service::{
        catalog::TrimVerifier,
        discovery::Discoveries,
        engine::{extract_engine_info, is_engine_token},
    },
    util::text::{
        collapse_whitespace, comparison_key, find_word, is_multi_word, longest_first,
        normalize_spacing, remove_range, sort_longest_first, strip_parenthesized,
        trim_token_punctuation,
    },
};

pub struct CarParser<'a, K: KnowledgeBase + ?Sized> {
    knowledge: &'a K,
    verifier: &'a TrimVerifier,
}

impl<'a, K: KnowledgeBase + ?Sized> CarParser<'a, K> {
    pub fn new(knowledge: &'a K, verifier: &'a TrimVerifier) -> Self {
        Self {
            knowledge,
            verifier,
        }
    }

    /// Parses a listing title into brand, model, modification, trim and engine attributes.
    ///
    /// # Returns
    /// - `Ok(ParsedCar)` - Always, for non-empty input; unknown brands and models fall back
    ///   to the first remaining token and are queued in `discoveries`
    /// - `Err(Error::ParserError)` - Input was empty or whitespace
    /// - `Err(Error::DbErr)` - Knowledge base lookup failed
    pub async fn parse_car_info(
        &self,
        raw: &str,
        discoveries: &mut Discoveries,
    ) -> Result<ParsedCar, Error> {
        let text = collapse_whitespace(raw);
        if text.is_empty() {
            return Err(ParserError::EmptyInput.into());
        }

        let (brand, remainder) = self.locate_brand(&text, discoveries).await?;
        let engine = extract_engine_info(&remainder);
        let (model, modification_text) = self
            .locate_model(&brand, &remainder, discoveries)
            .await?;

        let normalized = self
            .normalize_car(&brand, &model, &modification_text, discoveries)
            .await?;

        debug!(
            input = %text,
            brand = %normalized.brand,
            model = %normalized.model,
            modification = %normalized.modification,
            trim = %normalized.trim,
            "Parsed car string"
        );

        Ok(normalized.with_engine(engine))
    }

    /// Splits `modification_text` into a trim and the remaining modification.
    ///
    /// Known trims of the brand are preferred, multi-word ones first; then the trailing
    /// words are offered to the external catalogs. Without a trim the result is
    /// [`DEFAULT_TRIM`]; an empty modification becomes [`DEFAULT_MODIFICATION`].
    pub async fn normalize_car(
        &self,
        brand: &BrandRef,
        model: &str,
        modification_text: &str,
        discoveries: &mut Discoveries,
    ) -> Result<NormalizedCar, Error> {
        let text = strip_parenthesized(modification_text);

        let (known_trims, known_modifications) = match brand.id {
            Some(brand_id) => (
                sort_longest_first(self.knowledge.trims_for_brand(brand_id).await?),
                self.knowledge.modifications_for_brand(brand_id).await?,
            ),
            None => (Vec::new(), Vec::new()),
        };

        let (trim, rest) = match find_known_trim(&text, &known_trims)
            .or_else(|| find_known_trailing_trim(&text, &known_trims))
        {
            Some((trim, range)) => {
                debug!(brand = %brand.name, trim = %trim, "Known trim found");
                (trim, remove_range(&text, range))
            }
            None => match self
                .confirm_trailing_trim(brand, model, &text, &known_modifications)
                .await
            {
                Some((trim, range, source)) => {
                    discoveries.add_trim(&brand.name, &trim, source);
                    (trim, remove_range(&text, range))
                }
                None => (DEFAULT_TRIM.to_string(), text.clone()),
            },
        };

        let modification = if rest.is_empty() {
            DEFAULT_MODIFICATION.to_string()
        } else if let Some(known) = find_known(&known_modifications, &rest) {
            known.clone()
        } else {
            let modification = normalize_spacing(&rest);
            discoveries.add_modification(
                &brand.name,
                &modification,
                KnowledgeSource::AutoDetected,
            );
            modification
        };

        Ok(NormalizedCar {
            brand: brand.name.clone(),
            model: model.to_string(),
            modification,
            trim,
        })
    }

    /// Finds the brand anywhere in `text`, longest alias first.
    ///
    /// Returns the brand and `text` with the brand removed. Without a match the first token
    /// becomes the brand and is queued as a discovery.
    async fn locate_brand(
        &self,
        text: &str,
        discoveries: &mut Discoveries,
    ) -> Result<(BrandRef, String), Error> {
        let mut aliases = self.knowledge.brand_aliases().await?;
        aliases.sort_by(|a, b| longest_first(&a.alias, &b.alias));

        for alias in &aliases {
            if let Some(range) = find_word(text, &alias.alias) {
                debug!(alias = %alias.alias, brand = %alias.brand_name, "Brand matched");
                return Ok((alias.brand(), remove_range(text, range)));
            }
        }

        let (first, rest) = split_first_token(text);
        let name = trim_token_punctuation(first);
        let name = if name.is_empty() { first } else { name };

        debug!(brand = %name, "Brand not in knowledge base, using first token");
        discoveries.add_brand(name);

        Ok((BrandRef::discovered(name), rest.to_string()))
    }

    /// Finds the brand's model in `remainder`, multi-word models first.
    ///
    /// Returns the model and the text around it. Without a match the first token becomes the
    /// model and is queued as a discovery.
    async fn locate_model(
        &self,
        brand: &BrandRef,
        remainder: &str,
        discoveries: &mut Discoveries,
    ) -> Result<(String, String), Error> {
        let models = match brand.id {
            Some(brand_id) => self.knowledge.models_for_brand(brand_id).await?,
            None => Vec::new(),
        };

        let (mut multi_word, mut single_word): (Vec<String>, Vec<String>) =
            models.into_iter().partition(|model| is_multi_word(model));
        multi_word.sort_by(|a, b| longest_first(a, b));
        single_word.sort_by(|a, b| longest_first(a, b));

        for model in multi_word.iter().chain(single_word.iter()) {
            if let Some(range) = find_word(remainder, model) {
                debug!(brand = %brand.name, model = %model, "Model matched");
                return Ok((model.clone(), remove_range(remainder, range)));
            }
        }

        let (first, rest) = split_first_token(remainder);
        if first.is_empty() {
            return Ok((String::new(), String::new()));
        }

        let model = trim_token_punctuation(first);
        let model = if model.is_empty() { first } else { model };

        debug!(
            brand = %brand.name,
            model = %model,
            "Model not in knowledge base, using first token"
        );
        discoveries.add_model(&brand.name, model, KnowledgeSource::AutoDetected);

        Ok((model.to_string(), rest.to_string()))
    }

    /// Offers the last two words, then the last word, to the external catalogs.
    ///
    /// Engine tokens and known modifications are never offered.
    async fn confirm_trailing_trim(
        &self,
        brand: &BrandRef,
        model: &str,
        text: &str,
        known_modifications: &[String],
    ) -> Option<(String, Range<usize>, KnowledgeSource)> {
        if model.is_empty() {
            return None;
        }

        let candidates: Vec<(String, Range<usize>)> = trailing_candidates(text)
            .into_iter()
            .filter(|(candidate, _)| {
                !is_engine_token(candidate) && find_known(known_modifications, candidate).is_none()
            })
            .collect();

        if candidates.is_empty() {
            return None;
        }

        let names: Vec<String> = candidates.iter().map(|(name, _)| name.clone()).collect();
        let (confirmed, source) = self
            .verifier
            .confirm_first(&brand.name, model, &names)
            .await?;

        candidates
            .into_iter()
            .find(|(name, _)| *name == confirmed)
            .map(|(name, range)| (name, range, source))
    }
}

/// Searches `text` for a known trim: multi-word trims first, then single-word trims longer
/// than one character. `trims` must already be ordered longest first.
fn find_known_trim(text: &str, trims: &[String]) -> Option<(String, Range<usize>)> {
    let multi_word = trims.iter().filter(|trim| is_multi_word(trim));
    let single_word = trims
        .iter()
        .filter(|trim| !is_multi_word(trim) && trim.chars().count() > 1);

    multi_word
        .chain(single_word)
        .find_map(|trim| find_word(text, trim).map(|range| (trim.clone(), range)))
}

/// Compares the last two words, then the last word, with the known trims, ignoring case and
/// surrounding punctuation.
fn find_known_trailing_trim(text: &str, trims: &[String]) -> Option<(String, Range<usize>)> {
    trailing_candidates(text)
        .into_iter()
        .find_map(|(candidate, range)| {
            find_known(trims, &candidate).map(|trim| (trim.clone(), range))
        })
}

/// The last two words and the last word of `text` with their byte ranges, punctuation
/// trimmed, longest first.
fn trailing_candidates(text: &str) -> Vec<(String, Range<usize>)> {
    let words: Vec<Range<usize>> = word_ranges(text);
    let mut candidates = Vec::new();

    if words.len() >= 2 {
        let range = words[words.len() - 2].start..words[words.len() - 1].end;
        candidates.push(range);
    }
    if let Some(last) = words.last() {
        candidates.push(last.clone());
    }

    candidates
        .into_iter()
        .filter_map(|range| {
            let candidate = trim_token_punctuation(&text[range.clone()]);
            (!candidate.is_empty()).then(|| (candidate.to_string(), range))
        })
        .collect()
}

fn word_ranges(text: &str) -> Vec<Range<usize>> {
    let mut ranges = Vec::new();
    let mut start = None;

    for (i, c) in text.char_indices() {
        match (c.is_whitespace(), start) {
            (true, Some(s)) => {
                ranges.push(s..i);
                start = None;
            }
            (false, None) => start = Some(i),
            _ => {}
        }
    }
    if let Some(s) = start {
        ranges.push(s..text.len());
    }

    ranges
}

fn split_first_token(text: &str) -> (&str, &str) {
    let text = text.trim();
    match text.split_once(char::is_whitespace) {
        Some((first, rest)) => (first, rest.trim()),
        None => (text, ""),
    }
}

/// Returns the known value equal to `value`, ignoring case and surrounding punctuation.
fn find_known<'k>(known: &'k [String], value: &str) -> Option<&'k String> {
    let key = comparison_key(value);
    known.iter().find(|candidate| comparison_key(candidate) == key)
}

#[cfg(test)]
mod tests {

    mod helpers {
        use crate::service::parser::{
            find_known_trailing_trim, find_known_trim, split_first_token, trailing_candidates,
        };

        fn strings(values: &[&str]) -> Vec<String> {
            values.iter().map(|v| v.to_string()).collect()
        }

        #[test]
        fn prefers_multi_word_trim() {
            let trims = strings(&["M Sport Pro", "M Sport", "Sport"]);

            let (trim, _) = find_known_trim("xDrive30d M Sport", &trims).unwrap();

            assert_eq!(trim, "M Sport");
        }

        #[test]
        fn skips_single_character_trims() {
            let trims = strings(&["S"]);

            assert!(find_known_trim("2.0 S tronic", &trims).is_none());
        }

        #[test]
        fn trailing_check_ignores_punctuation() {
            let trims = strings(&["Luxury"]);
            let text = "1.5T DCT Luxury,";

            let (trim, range) = find_known_trailing_trim(text, &trims).unwrap();

            assert_eq!(trim, "Luxury");
            assert_eq!(&text[range], "Luxury,");
        }

        #[test]
        fn builds_trailing_candidates_longest_first() {
            let candidates: Vec<String> = trailing_candidates("77.4 kWh RWD GT-Line")
                .into_iter()
                .map(|(candidate, _)| candidate)
                .collect();

            assert_eq!(candidates, vec!["RWD GT-Line", "GT-Line"]);
        }

        #[test]
        fn single_word_has_one_candidate() {
            assert_eq!(trailing_candidates("Sport").len(), 1);
            assert!(trailing_candidates("").is_empty());
        }

        #[test]
        fn splits_first_token() {
            assert_eq!(split_first_token("Quux Sport Line"), ("Quux", "Sport Line"));
            assert_eq!(split_first_token("Quux"), ("Quux", ""));
        }
    }

    mod parse_car_info {
        use carlot_test_utils::prelude::*;

        use crate::{
            data::SeaOrmKnowledgeBase,
            error::{parser::ParserError, Error},
            model::engine::{DriveType, EngineType},
            service::{catalog::TrimVerifier, discovery::Discoveries, parser::CarParser},
        };

        /// Expect known brand, model and trim to be segmented
        #[tokio::test]
        async fn segments_known_car() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_knowledge_base_tables()
                .with_model("BMW", "X5")
                .with_trim("BMW", "M Sport")
                .build()
                .await?;

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
            assert_eq!(discoveries.modifications().len(), 1);

            Ok(())
        }

        /// Expect EmptyInput for whitespace
        #[tokio::test]
        async fn rejects_empty_input() -> Result<(), TestError> {
            let test = test_setup_with_knowledge_base_tables!()?;

            let knowledge = SeaOrmKnowledgeBase::new(&test.db);
            let verifier = TrimVerifier::offline();
            let parser = CarParser::new(&knowledge, &verifier);

            let result = parser
                .parse_car_info("   ", &mut Discoveries::new())
                .await;

            assert!(matches!(
                result,
                Err(Error::ParserError(ParserError::EmptyInput))
            ));

            Ok(())
        }

        /// Expect Error when the knowledge base tables are missing
        #[tokio::test]
        async fn fails_when_tables_missing() -> Result<(), TestError> {
            let test = TestBuilder::new().build().await?;

            let knowledge = SeaOrmKnowledgeBase::new(&test.db);
            let verifier = TrimVerifier::offline();
            let parser = CarParser::new(&knowledge, &verifier);

            let result = parser
                .parse_car_info("BMW X5", &mut Discoveries::new())
                .await;

            assert!(matches!(result, Err(Error::DbErr(_))));

            Ok(())
        }
    }

    mod normalize_car {
        use carlot_test_utils::prelude::*;

        use crate::{
            data::SeaOrmKnowledgeBase,
            model::knowledge::BrandRef,
            service::{catalog::TrimVerifier, discovery::Discoveries, parser::CarParser},
        };

        /// Expect known modification spelling to be adopted and not queued
        #[tokio::test]
        async fn adopts_known_modification_spelling() -> Result<(), TestError> {
            let mut test = TestBuilder::new()
                .with_knowledge_base_tables()
                .with_trim("Haval", "Luxury")
                .with_modification("Haval", "1.5T DCT")
                .build()
                .await?;
            let haval = test.knowledge().insert_brand("Haval").await?;

            let knowledge = SeaOrmKnowledgeBase::new(&test.db);
            let verifier = TrimVerifier::offline();
            let parser = CarParser::new(&knowledge, &verifier);
            let mut discoveries = Discoveries::new();

            let car = parser
                .normalize_car(
                    &BrandRef::known(haval.id, "Haval"),
                    "Jolion",
                    "1.5t dct (версия Ruiyi) Luxury",
                    &mut discoveries,
                )
                .await
                .unwrap();

            assert_eq!(car.trim, "Luxury");
            assert_eq!(car.modification, "1.5T DCT");
            assert!(discoveries.is_empty());

            Ok(())
        }

        /// Expect Standard/Base defaults for empty text
        #[tokio::test]
        async fn defaults_for_empty_text() -> Result<(), TestError> {
            let test = test_setup_with_knowledge_base_tables!()?;

            let knowledge = SeaOrmKnowledgeBase::new(&test.db);
            let verifier = TrimVerifier::offline();
            let parser = CarParser::new(&knowledge, &verifier);
            let mut discoveries = Discoveries::new();

            let car = parser
                .normalize_car(
                    &BrandRef::discovered("Zorglub"),
                    "Quux",
                    "",
                    &mut discoveries,
                )
                .await
                .unwrap();

            assert_eq!(car.trim, "Standard");
            assert_eq!(car.modification, "Base");
            assert!(discoveries.is_empty());

            Ok(())
        }

        /// Expect glued displacement and engine code to be separated
        #[tokio::test]
        async fn normalizes_modification_spacing() -> Result<(), TestError> {
            let test = test_setup_with_knowledge_base_tables!()?;

            let knowledge = SeaOrmKnowledgeBase::new(&test.db);
            let verifier = TrimVerifier::offline();
            let parser = CarParser::new(&knowledge, &verifier);
            let mut discoveries = Discoveries::new();

            let car = parser
                .normalize_car(
                    &BrandRef::discovered("Volkswagen"),
                    "Golf",
                    "2.0TSI  DSG",
                    &mut discoveries,
                )
                .await
                .unwrap();

            assert_eq!(car.modification, "2.0 TSI DSG");
            assert_eq!(car.trim, "Standard");
            assert_eq!(discoveries.modifications()[0].name, "2.0 TSI DSG");

            Ok(())
        }
    }
}
