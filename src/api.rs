//! JSON request/response API
//!
//! A small JSON-in/JSON-out surface for embedding the covering array
//! generator in another process — a coding agent, a test harness, a CI
//! step — without linking against this crate directly. Mirrors the shape
//! of a typical JSON tool API: parse a request struct, call into the core,
//! serialize a response struct.
//!
//! Parameters are carried as a JSON *array* of `{"name", "values"}` objects
//! rather than a JSON object keyed by name, so declared parameter order
//! survives the round trip without depending on an order-preserving map.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::covering_array::{self, CoveringArrayError};

#[derive(Debug, Deserialize)]
pub struct ParameterSpec {
    pub name: String,
    pub values: Vec<Value>,
}

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub parameters: Vec<ParameterSpec>,
    #[serde(default = "default_strength")]
    pub strength: i64,
}

fn default_strength() -> i64 {
    2
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub parameter_names: Vec<String>,
    pub rows: Vec<Vec<Value>>,
    pub row_count: usize,
}

#[derive(Debug, Deserialize)]
pub struct CheckRequest {
    pub parameters: Vec<ParameterSpec>,
    pub strength: i64,
    pub rows: Vec<Vec<Value>>,
}

#[derive(Debug, Serialize)]
pub struct CheckResponse {
    pub ok: bool,
    pub error: Option<String>,
}

fn to_pairs(parameters: Vec<ParameterSpec>) -> Vec<(String, Vec<Value>)> {
    parameters.into_iter().map(|p| (p.name, p.values)).collect()
}

/// Generate a covering array from a JSON request, returning a pretty JSON
/// response string.
pub fn generate_from_json(json: &str) -> Result<String, String> {
    let request: GenerateRequest = serde_json::from_str(json).map_err(|e| format!("JSON parse error: {e}"))?;

    let parameter_names: Vec<String> = request.parameters.iter().map(|p| p.name.clone()).collect();
    let parameters = to_pairs(request.parameters);

    let array = covering_array::generate(&parameters, request.strength).map_err(|e| e.to_string())?;

    let response = GenerateResponse { parameter_names, row_count: array.num_rows(), rows: array.rows };

    serde_json::to_string_pretty(&response).map_err(|e| format!("JSON serialize error: {e}"))
}

/// Check a covering array against a JSON request, returning a pretty JSON
/// response string describing whether it covers every required combination.
pub fn check_from_json(json: &str) -> Result<String, String> {
    let request: CheckRequest = serde_json::from_str(json).map_err(|e| format!("JSON parse error: {e}"))?;

    let parameters = to_pairs(request.parameters);
    let array = covering_array::CoveringArray {
        parameter_names: parameters.iter().map(|(name, _)| name.clone()).collect(),
        rows: request.rows,
    };

    let response = match covering_array::check(&parameters, &array, request.strength) {
        Ok(()) => CheckResponse { ok: true, error: None },
        Err(e) => CheckResponse { ok: false, error: Some(describe(e)) },
    };

    serde_json::to_string_pretty(&response).map_err(|e| format!("JSON serialize error: {e}"))
}

fn describe(error: CoveringArrayError) -> String {
    error.to_string()
}
