//! Response bodies as the external trim catalogs return them.

use serde_json::{json, Value};

/// CarQuery `getTrims` response listing `trims` for one make/model.
pub fn carquery_trims(make: &str, model: &str, trims: &[&str]) -> Value {
    let trims: Vec<Value> = trims
        .iter()
        .enumerate()
        .map(|(i, trim)| {
            json!({
                "model_id": (i + 1).to_string(),
                "model_make_id": make.to_lowercase(),
                "model_name": model,
                "model_trim": trim,
                "model_year": "2021",
            })
        })
        .collect();

    json!({ "Trims": trims })
}

/// CarAPI `/api/v1/trims` response listing `trims` for one make/model.
pub fn carapi_trims(make: &str, model: &str, trims: &[&str]) -> Value {
    let data: Vec<Value> = trims
        .iter()
        .enumerate()
        .map(|(i, trim)| {
            json!({
                "id": i + 1,
                "make": make,
                "model": model,
                "trim": trim,
                "year": 2021,
            })
        })
        .collect();

    json!({
        "collection": { "count": data.len() },
        "data": data,
    })
}
