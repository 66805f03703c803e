//! Core document model
//!
//! A [`Document`] is the result of extracting front matter from a piece of
//! text: the parsed data, the remaining body, an optional excerpt, and enough
//! bookkeeping (original input, raw block, language) to write it back out.
//! Callers hand text, bytes or a content-bearing [`Source`] to the normalizer
//! through [`Input`].

use crate::core::options::Options;
use crate::core::stringify;
use crate::core::value::Data;
use crate::error::{MatterError, Result};
use serde::Serialize;
use std::borrow::Cow;
use std::path::PathBuf;

const BOM: char = '\u{feff}';

/// A document with its front matter separated from its body
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Document {
    /// Parsed front matter; empty when there is none
    pub data: Data,
    /// Body after the front matter block and its delimiters
    pub content: String,
    /// Text of `content` before the excerpt separator
    pub excerpt: String,
    /// The input exactly as received, BOM included
    #[serde(skip)]
    pub original: Vec<u8>,
    /// Engine used to parse the block; empty when there is no block
    pub language: String,
    /// Raw text between the delimiters, before parsing
    pub matter: String,
    /// A block was present but held nothing besides comments and whitespace
    pub is_empty: bool,
    /// For empty blocks, the content as it was before extraction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty: Option<String>,
    /// Source file, when read from disk
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// An object that already carries content, and possibly data
#[derive(Debug, Clone, Default)]
pub struct Source {
    pub content: Option<String>,
    pub data: Option<Data>,
    pub language: Option<String>,
}

impl Source {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Default::default()
        }
    }

    pub fn with_data(mut self, data: Data) -> Self {
        self.data = Some(data);
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }
}

/// Everything that can be turned into a [`Document`]
#[derive(Debug, Clone)]
pub enum Input {
    Text(String),
    /// UTF-8 encoded text
    Bytes(Vec<u8>),
    Object(Source),
}

impl From<&str> for Input {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Input {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&String> for Input {
    fn from(text: &String) -> Self {
        Self::Text(text.clone())
    }
}

impl From<&[u8]> for Input {
    fn from(bytes: &[u8]) -> Self {
        Self::Bytes(bytes.to_vec())
    }
}

impl From<Vec<u8>> for Input {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}

impl From<Source> for Input {
    fn from(source: Source) -> Self {
        Self::Object(source)
    }
}

impl From<Document> for Input {
    fn from(document: Document) -> Self {
        let language = (!document.language.is_empty()).then_some(document.language);
        Self::Object(Source {
            content: Some(document.content),
            data: Some(document.data),
            language,
        })
    }
}

impl Document {
    /// Normalize any input into a document whose front matter has not been
    /// extracted yet.
    ///
    /// A leading byte order mark is removed from `content` but kept in
    /// `original`. Fails with [`MatterError::InputType`] for bytes that are not
    /// UTF-8 and for objects without content.
    pub fn from_input(input: impl Into<Input>) -> Result<Self> {
        match input.into() {
            Input::Text(text) => Ok(Self::from_text(text, None, None)),
            Input::Bytes(bytes) => {
                let text = String::from_utf8(bytes).map_err(|e| {
                    MatterError::input_type(format!("expected UTF-8 encoded bytes: {}", e))
                })?;
                Ok(Self::from_text(text, None, None))
            }
            Input::Object(source) => {
                let content = source.content.ok_or_else(|| {
                    MatterError::input_type("expected input to be text, bytes or an object with content")
                })?;
                Ok(Self::from_text(content, source.data, source.language))
            }
        }
    }

    fn from_text(text: String, data: Option<Data>, language: Option<String>) -> Self {
        let content = match text.strip_prefix(BOM) {
            Some(stripped) => stripped.to_string(),
            None => text.clone(),
        };
        Self {
            data: data.unwrap_or_default(),
            content,
            original: text.into_bytes(),
            language: language.unwrap_or_default(),
            ..Default::default()
        }
    }

    /// Whether a front matter block was found, even an empty one
    pub fn has_front_matter(&self) -> bool {
        self.is_empty || !self.matter.is_empty()
    }

    /// The original input as text
    pub fn original_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.original)
    }

    /// Serialize this document back to text, merging `data` over its own.
    ///
    /// `options.language`, when set, replaces the document's language first.
    pub fn stringify(&self, data: Option<&Data>, options: Option<&Options>) -> Result<String> {
        match options.and_then(|o| o.language.as_deref()) {
            Some(language) => {
                let mut document = self.clone();
                document.language = language.to_lowercase();
                stringify::stringify(document, data, options)
            }
            None => stringify::stringify(self.clone(), data, options),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_from_text() {
        let doc = Document::from_input("---\na: 1\n---\nbody").unwrap();
        assert_eq!(doc.content, "---\na: 1\n---\nbody");
        assert_eq!(doc.original, b"---\na: 1\n---\nbody".to_vec());
        assert!(doc.data.is_empty());
        assert_eq!(doc.excerpt, "");
        assert!(!doc.has_front_matter());
    }

    #[test]
    fn test_bom_is_stripped_from_content_only() {
        let doc = Document::from_input("\u{feff}---\na: 1\n---").unwrap();
        assert_eq!(doc.content, "---\na: 1\n---");
        assert!(doc.original_text().starts_with('\u{feff}'));
    }

    #[test]
    fn test_from_bytes() {
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice(b"hello");
        let doc = Document::from_input(bytes.clone()).unwrap();
        assert_eq!(doc.content, "hello");
        assert_eq!(doc.original, bytes);
    }

    #[test]
    fn test_invalid_utf8_is_input_type_error() {
        let err = Document::from_input(vec![0xffu8, 0xfe, 0x00]).unwrap_err();
        assert!(matches!(err, MatterError::InputType { .. }));
    }

    #[test]
    fn test_object_without_content_is_input_type_error() {
        let err = Document::from_input(Source::default()).unwrap_err();
        assert!(matches!(err, MatterError::InputType { .. }));
    }

    #[test]
    fn test_object_keeps_data() {
        let data = json!({"title": "kept"}).as_object().cloned().unwrap();
        let doc = Document::from_input(Source::new("body").with_data(data.clone())).unwrap();
        assert_eq!(doc.data, data);
        assert_eq!(doc.content, "body");
    }

    #[test]
    fn test_document_round_trips_through_input() {
        let mut doc = Document::from_input("body").unwrap();
        doc.language = "json".to_string();
        doc.data.insert("a".to_string(), json!(1));

        let again = Document::from_input(doc).unwrap();
        assert_eq!(again.language, "json");
        assert_eq!(again.data.get("a"), Some(&json!(1)));
    }
}
