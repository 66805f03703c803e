//! Value types shared by all front matter engines
//!
//! Every engine parses into the same JSON value model so that documents can be
//! re-serialized by a different engine than the one that parsed them. YAML
//! values are converted explicitly because YAML allows keys and numbers JSON
//! cannot represent directly.

use serde_json::Value as JsonValue;
use serde_yaml::Value as YamlValue;

/// Parsed front matter: an insertion-ordered map of string keys to values
pub type Data = serde_json::Map<String, JsonValue>;

/// Any front matter value
pub type Value = JsonValue;

/// Conversions between YAML and JSON values
pub struct YamlJsonConverter;

impl YamlJsonConverter {
    /// Convert a YAML value into the JSON value model.
    ///
    /// Mapping keys that are numbers or booleans are stringified; tags are
    /// dropped in favor of the tagged value. Fails on keys that have no string
    /// form (sequences, mappings, null) and on non-finite floats.
    pub fn yaml_to_json(yaml: &YamlValue) -> std::result::Result<JsonValue, String> {
        match yaml {
            YamlValue::Null => Ok(JsonValue::Null),
            YamlValue::Bool(b) => Ok(JsonValue::Bool(*b)),
            YamlValue::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(JsonValue::Number(i.into()))
                } else if let Some(u) = n.as_u64() {
                    Ok(JsonValue::Number(u.into()))
                } else if let Some(f) = n.as_f64() {
                    serde_json::Number::from_f64(f)
                        .map(JsonValue::Number)
                        .ok_or_else(|| format!("cannot represent number {} in front matter", f))
                } else {
                    Err(format!("cannot represent number {:?} in front matter", n))
                }
            }
            YamlValue::String(s) => Ok(JsonValue::String(s.clone())),
            YamlValue::Sequence(seq) => seq
                .iter()
                .map(Self::yaml_to_json)
                .collect::<std::result::Result<Vec<_>, _>>()
                .map(JsonValue::Array),
            YamlValue::Mapping(map) => {
                let mut json_map = Data::new();
                for (k, v) in map {
                    let key = match k {
                        YamlValue::String(s) => s.clone(),
                        YamlValue::Number(n) => n.to_string(),
                        YamlValue::Bool(b) => b.to_string(),
                        _ => return Err(format!("unsupported mapping key {:?}", k)),
                    };
                    json_map.insert(key, Self::yaml_to_json(v)?);
                }
                Ok(JsonValue::Object(json_map))
            }
            YamlValue::Tagged(tagged) => Self::yaml_to_json(&tagged.value),
        }
    }

    /// Convert a JSON value into a YAML value
    pub fn json_to_yaml(json: &JsonValue) -> YamlValue {
        match json {
            JsonValue::Null => YamlValue::Null,
            JsonValue::Bool(b) => YamlValue::Bool(*b),
            JsonValue::Number(n) => {
                if let Some(i) = n.as_i64() {
                    YamlValue::Number(i.into())
                } else if let Some(u) = n.as_u64() {
                    YamlValue::Number(u.into())
                } else {
                    YamlValue::Number(n.as_f64().unwrap_or_default().into())
                }
            }
            JsonValue::String(s) => YamlValue::String(s.clone()),
            JsonValue::Array(arr) => YamlValue::Sequence(arr.iter().map(Self::json_to_yaml).collect()),
            JsonValue::Object(obj) => YamlValue::Mapping(Self::data_to_yaml(obj)),
        }
    }

    /// Convert front matter data into a YAML mapping, keeping key order
    pub fn data_to_yaml(data: &Data) -> serde_yaml::Mapping {
        let mut yaml_map = serde_yaml::Mapping::new();
        for (k, v) in data {
            yaml_map.insert(YamlValue::String(k.clone()), Self::json_to_yaml(v));
        }
        yaml_map
    }
}

/// Merge `extra` over `base`; keys in `extra` win
pub fn merge_data(base: &Data, extra: &Data) -> Data {
    let mut merged = base.clone();
    for (k, v) in extra {
        merged.insert(k.clone(), v.clone());
    }
    merged
}
