//! Engine registry
//!
//! An engine turns the raw text of a front matter block into a [`Value`] and,
//! optionally, turns [`Data`] back into text. Engines are looked up by language
//! name; names are case-insensitive and a few aliases are understood.

use crate::core::value::{Data, Value};
use crate::engines;
use crate::error::{MatterError, Result};
use log::trace;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Parses the raw text of a front matter block
pub type ParseFn = Arc<dyn Fn(&str) -> Result<Value> + Send + Sync>;

/// Serializes front matter data back into text
pub type StringifyFn = Arc<dyn Fn(&Data) -> Result<String> + Send + Sync>;

/// A parse capability, optionally paired with a stringify capability
#[derive(Clone)]
pub enum Engine {
    ParseOnly(ParseFn),
    ParseAndStringify(ParseFn, StringifyFn),
}

impl Engine {
    /// Create an engine that can only parse
    pub fn parse_only<P>(parse: P) -> Self
    where
        P: Fn(&str) -> Result<Value> + Send + Sync + 'static,
    {
        Self::ParseOnly(Arc::new(parse))
    }

    /// Create an engine that can parse and stringify
    pub fn new<P, S>(parse: P, stringify: S) -> Self
    where
        P: Fn(&str) -> Result<Value> + Send + Sync + 'static,
        S: Fn(&Data) -> Result<String> + Send + Sync + 'static,
    {
        Self::ParseAndStringify(Arc::new(parse), Arc::new(stringify))
    }

    /// Parse a raw front matter block
    pub fn parse(&self, text: &str) -> Result<Value> {
        match self {
            Self::ParseOnly(parse) | Self::ParseAndStringify(parse, _) => parse(text),
        }
    }

    /// Whether this engine can serialize data
    pub fn can_stringify(&self) -> bool {
        matches!(self, Self::ParseAndStringify(..))
    }

    /// Serialize data; `language` only names the engine in the error
    pub fn stringify(&self, data: &Data, language: &str) -> Result<String> {
        match self {
            Self::ParseAndStringify(_, stringify) => stringify(data),
            Self::ParseOnly(_) => Err(MatterError::unsupported_operation(
                language,
                "stringify",
            )),
        }
    }
}

impl fmt::Debug for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ParseOnly(_) => f.write_str("Engine::ParseOnly"),
            Self::ParseAndStringify(..) => f.write_str("Engine::ParseAndStringify"),
        }
    }
}

/// Map a language name to its canonical engine name
pub fn alias(name: &str) -> String {
    let lower = name.to_lowercase();
    match lower.as_str() {
        "js" | "javascript" => "javascript".to_string(),
        "yaml" | "yml" => "yaml".to_string(),
        _ => lower,
    }
}

/// A set of engines keyed by language name
#[derive(Clone, Debug, Default)]
pub struct Engines {
    engines: HashMap<String, Engine>,
}

impl Engines {
    /// An empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in `yaml` and `json` engines
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.insert("yaml", engines::yaml::engine());
        registry.insert("json", engines::json::engine());
        registry
    }

    /// Register an engine, replacing any engine under the same name
    pub fn insert(&mut self, name: impl AsRef<str>, engine: Engine) -> &mut Self {
        self.engines.insert(name.as_ref().to_lowercase(), engine);
        self
    }

    /// Builder form of [`Engines::insert`]
    pub fn with(mut self, name: impl AsRef<str>, engine: Engine) -> Self {
        self.insert(name, engine);
        self
    }

    /// Register every engine of `other`, which wins on conflicts
    pub fn extend(&mut self, other: &Engines) {
        for (name, engine) in &other.engines {
            self.engines.insert(name.clone(), engine.clone());
        }
    }

    /// Look up an engine by its literal name, then by its alias
    pub fn resolve(&self, name: &str) -> Result<&Engine> {
        let literal = name.to_lowercase();
        if let Some(engine) = self.engines.get(&literal) {
            trace!("resolved engine {:?}", literal);
            return Ok(engine);
        }
        let aliased = alias(&literal);
        match self.engines.get(&aliased) {
            Some(engine) => {
                trace!("resolved engine {:?} via alias {:?}", name, aliased);
                Ok(engine)
            }
            None => Err(MatterError::unregistered_engine(name)),
        }
    }

    /// Whether `name` (or its alias) is registered
    pub fn contains(&self, name: &str) -> bool {
        self.resolve(name).is_ok()
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.engines.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_builtin_engines() {
        let engines = Engines::builtin();
        assert_eq!(engines.names(), vec!["json", "yaml"]);
        assert!(engines.contains("YAML"));
        assert!(engines.contains("yml"));
        assert!(!engines.contains("javascript"));
    }

    #[test]
    fn test_alias_table() {
        assert_eq!(alias("JS"), "javascript");
        assert_eq!(alias("javascript"), "javascript");
        assert_eq!(alias("Yml"), "yaml");
        assert_eq!(alias("toml"), "toml");
    }

    #[test]
    fn test_unregistered_engine() {
        let err = Engines::builtin().resolve("toml").unwrap_err();
        assert!(matches!(err, MatterError::UnregisteredEngine { ref name } if name == "toml"));
    }

    #[test]
    fn test_literal_name_wins_over_alias() {
        let engines = Engines::builtin().with(
            "yml",
            Engine::parse_only(|_| Ok(json!({"from": "yml"}))),
        );
        let parsed = engines.resolve("yml").unwrap().parse("a: 1").unwrap();
        assert_eq!(parsed, json!({"from": "yml"}));

        let parsed = engines.resolve("yaml").unwrap().parse("a: 1").unwrap();
        assert_eq!(parsed, json!({"a": 1}));
    }

    #[test]
    fn test_parse_only_engine_cannot_stringify() {
        let engine = Engine::parse_only(|_| Ok(json!({})));
        assert!(!engine.can_stringify());
        let err = engine.stringify(&Data::new(), "coffee").unwrap_err();
        assert!(matches!(
            err,
            MatterError::UnsupportedOperation { ref language, .. } if language == "coffee"
        ));
    }

    #[test]
    fn test_extend_overrides() {
        let mut engines = Engines::builtin();
        let custom = Engines::new().with("json", Engine::parse_only(|_| Ok(json!({"x": 1}))));
        engines.extend(&custom);
        assert!(!engines.resolve("json").unwrap().can_stringify());
        assert!(engines.resolve("yaml").unwrap().can_stringify());
    }
}
