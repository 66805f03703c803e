//! JSON engine

use crate::core::engine::Engine;
use crate::core::value::{Data, Value};
use crate::error::{MatterError, Result};

const LANGUAGE: &str = "json";

/// The JSON engine
pub fn engine() -> Engine {
    Engine::new(parse, stringify)
}

pub fn parse(text: &str) -> Result<Value> {
    serde_json::from_str(text).map_err(|e| MatterError::metadata_syntax(LANGUAGE, e))
}

/// Pretty-printed with two-space indentation
pub fn stringify(data: &Data) -> Result<String> {
    serde_json::to_string_pretty(data).map_err(|e| MatterError::serialization(LANGUAGE, e))
}
