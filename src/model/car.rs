use serde::{Deserialize, Serialize};

use crate::model::engine::EngineInfo;

/// Trim used when no trim could be found in the knowledge base or confirmed externally.
pub static DEFAULT_TRIM: &str = "Standard";

/// Modification used when nothing is left after the trim has been stripped.
pub static DEFAULT_MODIFICATION: &str = "Base";

/// Result of [`CarParser::parse_car_info`](crate::service::parser::CarParser::parse_car_info).
///
/// Transient: produced per call and consumed by the car creation flow.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedCar {
    pub brand: String,
    pub model: String,
    pub modification: String,
    pub trim: String,
    pub engine: EngineInfo,
}

/// Result of [`CarParser::normalize_car`](crate::service::parser::CarParser::normalize_car).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedCar {
    pub brand: String,
    pub model: String,
    pub modification: String,
    pub trim: String,
}

impl NormalizedCar {
    pub fn with_engine(self, engine: EngineInfo) -> ParsedCar {
        ParsedCar {
            brand: self.brand,
            model: self.model,
            modification: self.modification,
            trim: self.trim,
            engine,
        }
    }
}
