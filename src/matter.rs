//! The `Matter` client
//!
//! A [`Matter`] owns an extraction cache. Calls without options go through the
//! cache; calls with options always extract afresh and leave the cache alone,
//! since their results depend on the options.

use crate::core::{
    detect_language, extract, has_front_matter, stringify, Config, Data, Document, Input,
    LanguageTag, Options, StringifyInput,
};
use crate::error::Result;
use crate::io::{Cache, CacheStats, FrontMatterReader};
use log::{debug, trace};
use std::path::Path;

/// Front matter client with a result cache
#[derive(Debug, Default)]
pub struct Matter {
    cache: Cache,
    reader: FrontMatterReader,
}

impl Matter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom reader for [`Matter::read_file`]
    pub fn with_reader(reader: FrontMatterReader) -> Self {
        Self {
            cache: Cache::new(),
            reader,
        }
    }

    /// Extract front matter with the default options, using the cache.
    ///
    /// Objects that carry their own data or language are extracted without
    /// the cache, since the content alone does not determine the result.
    pub fn parse(&self, input: impl Into<Input>) -> Result<Document> {
        let input = input.into();
        let cacheable = match &input {
            Input::Object(source) => source.data.is_none() && source.language.is_none(),
            Input::Text(_) | Input::Bytes(_) => true,
        };

        let document = Document::from_input(input)?;
        if document.original.is_empty() {
            return Ok(document);
        }
        if !cacheable {
            trace!("not caching an object with its own data or language");
            return extract(document, &Config::default());
        }

        if let Some(mut cached) = self.cache.get(&document.content) {
            cached.original = document.original;
            return Ok(cached);
        }

        let key = document.content.clone();
        let parsed = extract(document, &Config::default())?;
        debug!("caching extraction of {} bytes", key.len());
        self.cache.insert(key, parsed.clone());
        Ok(parsed)
    }

    /// Extract front matter with explicit options, bypassing the cache
    pub fn parse_with(&self, input: impl Into<Input>, options: &Options) -> Result<Document> {
        parse(input, Some(options))
    }

    /// Read a file and extract its front matter; the cache is used when
    /// `options` is `None`
    pub fn read_file<P: AsRef<Path>>(&self, path: P, options: Option<&Options>) -> Result<Document> {
        let path = path.as_ref();
        let mut document = match options {
            Some(options) => self.parse_with(self.reader.read_to_string(path)?, options)?,
            None => self.parse(self.reader.read_to_string(path)?)?,
        };
        document.path = Some(path.to_path_buf());
        Ok(document)
    }

    /// See [`crate::stringify`]
    pub fn stringify(
        &self,
        input: impl Into<StringifyInput>,
        data: Option<&Data>,
        options: Option<&Options>,
    ) -> Result<String> {
        stringify(input, data, options)
    }

    /// See [`crate::test`]
    pub fn test(&self, text: &str, options: Option<&Options>) -> bool {
        test(text, options)
    }

    /// See [`crate::language`]
    pub fn language(&self, text: &str, options: Option<&Options>) -> LanguageTag {
        language(text, options)
    }

    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    /// Snapshot of the cached `(content, document)` pairs
    pub fn cache_entries(&self) -> Vec<(String, Document)> {
        self.cache.entries()
    }

    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }
}

/// Extract front matter without caching
pub fn parse(input: impl Into<Input>, options: Option<&Options>) -> Result<Document> {
    let document = Document::from_input(input)?;
    if document.original.is_empty() {
        return Ok(document);
    }
    extract(document, &Config::from_options(options))
}

/// Read a file and extract its front matter without caching
pub fn read_file<P: AsRef<Path>>(path: P, options: Option<&Options>) -> Result<Document> {
    FrontMatterReader::new().read_file(path, options)
}

/// Whether `text` starts with the opening delimiter
pub fn test(text: &str, options: Option<&Options>) -> bool {
    has_front_matter(text, &Config::from_options(options))
}

/// The inline language tag after the opening delimiter
pub fn language(text: &str, options: Option<&Options>) -> LanguageTag {
    detect_language(text, &Config::from_options(options))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Source;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_cache_hit() {
        let matter = Matter::new();
        let first = matter.parse("---\nabc: xyz\n---\nbody").unwrap();
        let second = matter.parse("---\nabc: xyz\n---\nbody").unwrap();

        assert_eq!(first, second);
        assert_eq!(matter.cache_entries().len(), 1);
        let stats = matter.cache_stats();
        assert_eq!((stats.hits, stats.misses), (1, 1));
    }

    #[test]
    fn test_options_bypass_cache() {
        let matter = Matter::new();
        let text = "---\nabc: xyz\n---\nintro\n---\nrest";
        let cached = matter.parse(text).unwrap();
        assert_eq!(cached.excerpt, "");

        let fresh = matter
            .parse_with(text, &Options::new().with_excerpt(true))
            .unwrap();
        assert_eq!(fresh.excerpt, "intro\n");
        assert_eq!(matter.cache_entries().len(), 1);
        assert_eq!(matter.cache_stats().hits, 0);
        assert_eq!(matter.parse(text).unwrap().excerpt, "");
    }

    #[test]
    fn test_cache_keeps_original_of_each_call() {
        let matter = Matter::new();
        matter.parse("---\na: 1\n---").unwrap();
        let with_bom = matter.parse("\u{feff}---\na: 1\n---").unwrap();
        assert_eq!(matter.cache_stats().hits, 1);
        assert!(with_bom.original_text().starts_with('\u{feff}'));
    }

    #[test]
    fn test_errors_are_not_cached() {
        let matter = Matter::new();
        assert!(matter.parse("---json\n{bad\n---").is_err());
        assert!(matter.cache_entries().is_empty());
    }

    #[test]
    fn test_object_with_data_is_not_cached() {
        let matter = Matter::new();
        let stale = json!({"stale": true}).as_object().cloned().unwrap();
        let source = Source::new("plain body").with_data(stale);

        let from_object = matter.parse(source).unwrap();
        assert_eq!(from_object.data.get("stale"), Some(&json!(true)));
        assert!(matter.cache_entries().is_empty());

        let from_text = matter.parse("plain body").unwrap();
        assert!(from_text.data.is_empty());
        assert_eq!(matter.cache_len(), 1);

        let plain_object = matter.parse(Source::new("plain body")).unwrap();
        assert!(plain_object.data.is_empty());
        assert_eq!(matter.cache_stats().hits, 1);

        let tagged = matter.parse(Source::new("plain body").with_language("json")).unwrap();
        assert_eq!(tagged.language, "json");
        assert_eq!(matter.cache_stats().hits, 1);
    }

    #[test]
    fn test_clear_cache() {
        let matter = Matter::new();
        matter.parse("---\na: 1\n---").unwrap();
        matter.parse("---\nb: 2\n---").unwrap();
        assert_eq!(matter.cache_len(), 2);
        matter.clear_cache();
        assert!(matter.cache_entries().is_empty());
    }

    #[test]
    fn test_empty_input() {
        let matter = Matter::new();
        let doc = matter.parse("").unwrap();
        assert_eq!(doc, Document::default());
        assert!(matter.cache_entries().is_empty());
    }

    #[test]
    fn test_free_functions() {
        let doc = parse("---\na: 1\n---\nbody", None).unwrap();
        assert_eq!(doc.data.get("a"), Some(&json!(1)));
        assert!(test("---\n", None));
        assert!(!test("+++\n", None));
        assert!(test("+++\n", Some(&Options::new().with_delimiters("+++"))));
        assert_eq!(language("---yaml\n", None).name, "yaml");
    }
}
