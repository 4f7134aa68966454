//! Engine attribute extraction.
//!
//! Pure, deterministic text matching with no database or network access. Each attribute is
//! searched independently; within an attribute the rules form an ordered table and the
//! first matching rule wins, so priority is data rather than branch order.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::engine::{DriveType, EngineInfo, EngineType, TransmissionType};

/// A pattern paired with the value it yields when it matches.
pub struct Rule<T> {
    pub pattern: Regex,
    pub value: T,
}

impl<T: Copy> Rule<T> {
    fn new(pattern: &str, value: T) -> Self {
        Self {
            pattern: Regex::new(pattern).unwrap(),
            value,
        }
    }
}

/// Displacement patterns in priority order; the whole match becomes the displacement.
///
/// `N.N TSI` must come before the bare `N.NT` form so `2.0TSI` is never cut to `2.0T`, and
/// the bare decimal is the last resort.
pub static DISPLACEMENT_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)\b\d+\.\d+\s?(?:TFSI|TSI|TDI)\b",
        r"(?i)\b\d+\.\d+T\b",
        r"(?i)\b\d+\.\d+\s?(?:литра|L|л)\b",
        r"(?i)\b\d+\.\d+\s?(?:kWh|кВтч)\b",
        r"\b\d+\.\d+\b",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).unwrap())
    .collect()
});

static POWER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(\d+)\s?(?:hp\b|лс\b|л\.\s?с\.?)").unwrap());

pub static ENGINE_TYPE_RULES: LazyLock<Vec<Rule<EngineType>>> = LazyLock::new(|| {
    vec![
        Rule::new(r"(?i)\b(?:hybrid|гибрид)\b", EngineType::Hybrid),
        Rule::new(
            r"(?i)\b(?:electric|электр\w*|EV)\b|kwh|квтч",
            EngineType::Electric,
        ),
        Rule::new(
            r"(?i)\b(?:diesel|дизел\w*|xDrive\d+d)\b|(?:\b|\d)TDI\b",
            EngineType::Diesel,
        ),
        Rule::new(
            r"(?i)\b(?:gasoline|petrol|бензин\w*)\b|(?:\b|\d)(?:TSI|TFSI)\b|\b\d+\.\d+T\b",
            EngineType::Gasoline,
        ),
    ]
});

pub static DRIVE_TYPE_RULES: LazyLock<Vec<Rule<DriveType>>> = LazyLock::new(|| {
    vec![
        Rule::new(
            r"(?i)\b(?:AWD|4WD|4x4|4Motion|4MATIC|all[\s-]wheel\s+drive|полный\s+привод)\b",
            DriveType::AllWheelDrive,
        ),
        Rule::new(
            r"(?i)\b(?:RWD|rear[\s-]wheel\s+drive|задний\s+привод)\b",
            DriveType::RearWheelDrive,
        ),
        Rule::new(
            r"(?i)\b(?:FWD|front[\s-]wheel\s+drive|передний\s+привод)\b",
            DriveType::FrontWheelDrive,
        ),
        Rule::new(r"(?i)\bquattro\b", DriveType::Quattro),
        Rule::new(r"(?i)\bxDrive", DriveType::Xdrive),
        Rule::new(r"(?i)\bE-Four\b", DriveType::EFour),
    ]
});

pub static TRANSMISSION_RULES: LazyLock<Vec<Rule<TransmissionType>>> = LazyLock::new(|| {
    vec![
        Rule::new(r"(?i)\b(?:DSG|S-?tronic)\b", TransmissionType::Dsg),
        Rule::new(r"(?i)\b(?:CVT|вариатор)\b", TransmissionType::Cvt),
        Rule::new(
            r"(?i)\b(?:АКПП|автомат|automatic)\b",
            TransmissionType::Automatic,
        ),
        Rule::new(r"(?i)\b(?:МКПП|механика|manual)\b", TransmissionType::Manual),
        Rule::new(r"(?i)\bPDK\b", TransmissionType::Pdk),
        Rule::new(r"(?i)\bDCT\b", TransmissionType::Dct),
    ]
});

/// Returns the value of the first rule whose pattern matches `text`.
pub fn first_match<T: Copy>(rules: &[Rule<T>], text: &str) -> Option<T> {
    rules
        .iter()
        .find(|rule| rule.pattern.is_match(text))
        .map(|rule| rule.value)
}

/// Extracts displacement, power, engine type, drive type and transmission from `text`.
///
/// Never fails: attributes without a match are left as `None`.
pub fn extract_engine_info(text: &str) -> EngineInfo {
    EngineInfo {
        displacement: extract_displacement(text),
        power_hp: extract_power_hp(text),
        engine_type: first_match(&ENGINE_TYPE_RULES, text),
        drive: first_match(&DRIVE_TYPE_RULES, text),
        transmission: first_match(&TRANSMISSION_RULES, text),
        engine_text: text.to_string(),
    }
}

pub fn extract_displacement(text: &str) -> Option<String> {
    DISPLACEMENT_PATTERNS
        .iter()
        .find_map(|pattern| pattern.find(text))
        .map(|m| m.as_str().to_string())
}

pub fn extract_power_hp(text: &str) -> Option<i32> {
    POWER_PATTERN
        .captures(text)
        .and_then(|captures| captures.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Returns true when `token` is recognized as an engine attribute on its own (`AWD`, `2.0T`,
/// `DSG`, `150 hp`), meaning it describes the powertrain rather than a trim.
pub fn is_engine_token(token: &str) -> bool {
    !extract_engine_info(token).is_empty()
}
