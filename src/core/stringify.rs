//! Stringification: the inverse of extraction
//!
//! Data is merged over the document's own data, serialized by the engine for
//! the document's language and framed by the delimiters. Empty data produces
//! no block at all. An excerpt that is no longer part of the content is put
//! back between the block and the body.

use crate::core::document::{Document, Input};
use crate::core::extract::extract;
use crate::core::options::{Config, Options};
use crate::core::value::{merge_data, Data};
use crate::error::Result;
use log::debug;

/// Serialized form of empty data shared by the built-in engines
const EMPTY_MATTER: &str = "{}";

/// What can be stringified
#[derive(Debug, Clone)]
pub enum StringifyInput {
    Text(String),
    Document(Document),
}

impl From<&str> for StringifyInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for StringifyInput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Document> for StringifyInput {
    fn from(document: Document) -> Self {
        Self::Document(document)
    }
}

impl From<&Document> for StringifyInput {
    fn from(document: &Document) -> Self {
        Self::Document(document.clone())
    }
}

/// Serialize front matter and content into a single text.
///
/// - text without data and options is returned unchanged;
/// - text with data or options is extracted first, so its own front matter
///   is merged rather than kept as content;
/// - a document without data and options is serialized with its own data;
/// - without data, `options.data` is used, and without that the content is
///   returned unchanged.
pub fn stringify(
    input: impl Into<StringifyInput>,
    data: Option<&Data>,
    options: Option<&Options>,
) -> Result<String> {
    let (document, data) = match (input.into(), data, options) {
        (StringifyInput::Text(text), None, None) => return Ok(text),
        (StringifyInput::Document(document), None, None) => {
            let data = document.data.clone();
            (document, Some(data))
        }
        (StringifyInput::Text(text), data, _) => {
            let document = Document::from_input(Input::Text(text))?;
            (extract(document, &Config::from_options(options))?, data.cloned())
        }
        (StringifyInput::Document(document), data, _) => (document, data.cloned()),
    };

    let config = Config::from_options(options);
    let Some(data) = data.or_else(|| config.data.clone()) else {
        return Ok(document.content);
    };

    let language = if document.language.is_empty() {
        config.language().to_string()
    } else {
        document.language.clone()
    };
    let engine = config.engines.resolve(&language)?;
    let merged = merge_data(&document.data, &data);
    let matter = engine.stringify(&merged, &language)?;
    let matter = matter.trim();

    let mut buf = String::new();
    if matter != EMPTY_MATTER {
        buf.push_str(&newline(&config.open));
        buf.push_str(&newline(matter));
        buf.push_str(&newline(&config.close));
    } else {
        debug!("no front matter to write for {} data", language);
    }

    if !document.excerpt.is_empty() && !document.content.contains(document.excerpt.trim()) {
        buf.push_str(&newline(&document.excerpt));
        buf.push_str(&newline(&config.close));
    }

    buf.push_str(&newline(&document.content));
    Ok(buf)
}

fn newline(text: &str) -> String {
    if text.ends_with('\n') {
        text.to_string()
    } else {
        format!("{}\n", text)
    }
}
