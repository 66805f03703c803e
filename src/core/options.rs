//! Options for extraction and stringification
//!
//! [`Options`] is what callers build; every field is optional in spirit and
//! defaults to the common case (YAML between `---` lines, no excerpt).
//! [`Options::resolve`] applies the defaults and produces a [`Config`], which
//! is what the extractor, excerpt extractor and stringifier read.

use crate::core::document::Document;
use crate::core::engine::Engines;
use crate::core::value::Data;
use std::fmt;
use std::sync::Arc;

/// Default delimiter on both sides of a front matter block
pub const DEFAULT_DELIMITER: &str = "---";

/// Language used when neither the caller nor the document names one
pub const DEFAULT_LANGUAGE: &str = "yaml";

/// Opening and closing delimiters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delimiters {
    open: String,
    close: String,
}

impl Delimiters {
    /// The same delimiter on both sides
    pub fn single(delimiter: impl Into<String>) -> Self {
        let delimiter = delimiter.into();
        Self {
            open: delimiter.clone(),
            close: delimiter,
        }
    }

    /// Distinct opening and closing delimiters
    pub fn pair(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }

    pub fn open(&self) -> &str {
        &self.open
    }

    pub fn close(&self) -> &str {
        &self.close
    }
}

impl Default for Delimiters {
    fn default() -> Self {
        Self::single(DEFAULT_DELIMITER)
    }
}

impl From<&str> for Delimiters {
    fn from(delimiter: &str) -> Self {
        Self::single(delimiter)
    }
}

impl From<(&str, &str)> for Delimiters {
    fn from((open, close): (&str, &str)) -> Self {
        Self::pair(open, close)
    }
}

/// Custom excerpt extraction.
///
/// The strategy is fully responsible for setting `document.excerpt`; nothing
/// else runs after it. Closures `Fn(&mut Document, &Config)` implement it.
pub trait ExcerptStrategy: Send + Sync {
    fn apply(&self, document: &mut Document, config: &Config);
}

impl<F> ExcerptStrategy for F
where
    F: Fn(&mut Document, &Config) + Send + Sync,
{
    fn apply(&self, document: &mut Document, config: &Config) {
        self(document, config)
    }
}

/// Excerpt mode
#[derive(Clone, Default)]
pub enum Excerpt {
    /// No excerpt unless a separator is configured or set in the front matter
    #[default]
    Disabled,
    /// Excerpt up to the separator (the opening delimiter when none is set)
    Enabled,
    /// Excerpt up to this separator
    Separator(String),
    /// Delegate to a strategy
    Custom(Arc<dyn ExcerptStrategy>),
}

impl Excerpt {
    /// Wrap a strategy
    pub fn custom(strategy: impl ExcerptStrategy + 'static) -> Self {
        Self::Custom(Arc::new(strategy))
    }

    pub fn is_enabled(&self) -> bool {
        !matches!(self, Self::Disabled)
    }
}

impl fmt::Debug for Excerpt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Disabled => f.write_str("Disabled"),
            Self::Enabled => f.write_str("Enabled"),
            Self::Separator(sep) => f.debug_tuple("Separator").field(sep).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl From<bool> for Excerpt {
    fn from(enabled: bool) -> Self {
        if enabled {
            Self::Enabled
        } else {
            Self::Disabled
        }
    }
}

impl From<&str> for Excerpt {
    fn from(separator: &str) -> Self {
        Self::Separator(separator.to_string())
    }
}

/// Caller-supplied options
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Engines added to, or replacing, the built-in ones
    pub engines: Engines,
    /// Language that wins over any inline language tag
    pub language: Option<String>,
    /// Language used when the document has no inline tag (`yaml` if unset)
    pub default_language: Option<String>,
    pub delimiters: Delimiters,
    pub excerpt: Excerpt,
    pub excerpt_separator: Option<String>,
    /// Data stringified when the caller passes none
    pub data: Option<Data>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_engines(mut self, engines: Engines) -> Self {
        self.engines = engines;
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_default_language(mut self, language: impl Into<String>) -> Self {
        self.default_language = Some(language.into());
        self
    }

    pub fn with_delimiters(mut self, delimiters: impl Into<Delimiters>) -> Self {
        self.delimiters = delimiters.into();
        self
    }

    pub fn with_excerpt(mut self, excerpt: impl Into<Excerpt>) -> Self {
        self.excerpt = excerpt.into();
        self
    }

    pub fn with_excerpt_separator(mut self, separator: impl Into<String>) -> Self {
        self.excerpt_separator = Some(separator.into());
        self
    }

    pub fn with_data(mut self, data: Data) -> Self {
        self.data = Some(data);
        self
    }

    /// Apply defaults
    pub fn resolve(&self) -> Config {
        let mut engines = Engines::builtin();
        engines.extend(&self.engines);

        let default_language = self
            .default_language
            .as_deref()
            .filter(|l| !l.is_empty())
            .unwrap_or(DEFAULT_LANGUAGE)
            .to_lowercase();

        Config {
            engines,
            language: self
                .language
                .as_deref()
                .filter(|l| !l.is_empty())
                .map(str::to_lowercase),
            default_language,
            open: self.delimiters.open().to_string(),
            close: self.delimiters.close().to_string(),
            excerpt: self.excerpt.clone(),
            excerpt_separator: self.excerpt_separator.clone(),
            data: self.data.clone(),
        }
    }
}

/// Options with defaults applied
#[derive(Debug, Clone)]
pub struct Config {
    pub engines: Engines,
    /// Explicit language, lowercased
    pub language: Option<String>,
    /// Fallback language, lowercased
    pub default_language: String,
    pub open: String,
    pub close: String,
    pub excerpt: Excerpt,
    pub excerpt_separator: Option<String>,
    pub data: Option<Data>,
}

impl Config {
    /// Resolve optional options
    pub fn from_options(options: Option<&Options>) -> Self {
        options.map(Options::resolve).unwrap_or_default()
    }

    /// Explicit language, else the default
    pub fn language(&self) -> &str {
        self.language.as_deref().unwrap_or(&self.default_language)
    }
}

impl Default for Config {
    fn default() -> Self {
        Options::default().resolve()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::engine::Engine;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.open, "---");
        assert_eq!(config.close, "---");
        assert_eq!(config.default_language, "yaml");
        assert_eq!(config.language, None);
        assert_eq!(config.language(), "yaml");
        assert!(!config.excerpt.is_enabled());
        assert!(config.engines.contains("json"));
    }

    #[test]
    fn test_single_and_pair_delimiters() {
        let config = Options::new().with_delimiters("~~~").resolve();
        assert_eq!((config.open.as_str(), config.close.as_str()), ("~~~", "~~~"));

        let config = Options::new().with_delimiters(("<!--", "-->")).resolve();
        assert_eq!((config.open.as_str(), config.close.as_str()), ("<!--", "-->"));
    }

    #[test]
    fn test_languages_are_lowercased() {
        let config = Options::new()
            .with_language("JSON")
            .with_default_language("YML")
            .resolve();
        assert_eq!(config.language.as_deref(), Some("json"));
        assert_eq!(config.default_language, "yml");
        assert_eq!(config.language(), "json");
    }

    #[test]
    fn test_custom_engines_are_merged_over_builtins() {
        let engines = Engines::new().with("toml", Engine::parse_only(|_| Ok(json!({}))));
        let config = Options::new().with_engines(engines).resolve();
        assert!(config.engines.contains("toml"));
        assert!(config.engines.contains("yaml"));
    }

    #[test]
    fn test_excerpt_conversions() {
        assert!(matches!(Excerpt::from(true), Excerpt::Enabled));
        assert!(matches!(Excerpt::from(false), Excerpt::Disabled));
        assert!(matches!(Excerpt::from("<!-- more -->"), Excerpt::Separator(ref s) if s == "<!-- more -->"));
        let custom = Excerpt::custom(|doc: &mut Document, _: &Config| doc.excerpt = "x".into());
        assert_eq!(format!("{:?}", custom), "Custom(..)");
    }
}
