//! YAML engine

use crate::core::engine::Engine;
use crate::core::value::{Data, Value, YamlJsonConverter};
use crate::error::{MatterError, Result};

const LANGUAGE: &str = "yaml";

/// The YAML engine
pub fn engine() -> Engine {
    Engine::new(parse, stringify)
}

/// Parse a YAML block into the shared value model
pub fn parse(text: &str) -> Result<Value> {
    let yaml: serde_yaml::Value =
        serde_yaml::from_str(text).map_err(|e| MatterError::metadata_syntax(LANGUAGE, e))?;
    YamlJsonConverter::yaml_to_json(&yaml).map_err(|e| MatterError::metadata_syntax(LANGUAGE, e))
}

/// Serialize data as a YAML mapping
pub fn stringify(data: &Data) -> Result<String> {
    let yaml = serde_yaml::Value::Mapping(YamlJsonConverter::data_to_yaml(data));
    serde_yaml::to_string(&yaml).map_err(|e| MatterError::serialization(LANGUAGE, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_parse_mapping() {
        let value = parse("title: Hello\ntags: [a, b]\ncount: 3\n").unwrap();
        assert_eq!(value, json!({"title": "Hello", "tags": ["a", "b"], "count": 3}));
    }

    #[test]
    fn test_parse_comments_only_is_null() {
        assert_eq!(parse("# nothing here\n").unwrap(), Value::Null);
    }

    #[test]
    fn test_parse_error_is_metadata_syntax() {
        let err = parse("title: \"unterminated\nauthor: [a").unwrap_err();
        assert!(matches!(err, MatterError::MetadataSyntax { ref language, .. } if language == "yaml"));
    }

    #[test]
    fn test_stringify() {
        let data = json!({"title": "Hello", "draft": false});
        let text = stringify(data.as_object().unwrap()).unwrap();
        assert_eq!(text, "title: Hello\ndraft: false\n");
    }

    #[test]
    fn test_stringify_empty_is_braces() {
        assert_eq!(stringify(&Data::new()).unwrap().trim(), "{}");
    }
}
