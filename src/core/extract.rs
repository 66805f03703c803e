//! Front matter extraction
//!
//! Extraction runs once over the start of a document:
//!
//! 1. the content must start with the opening delimiter, otherwise only the
//!    excerpt is extracted;
//! 2. a delimiter immediately followed by its own last character (`----` for
//!    `---`) is not an opening delimiter and the document is left untouched;
//! 3. a non-blank rest of the opening line is an inline language tag;
//! 4. the block ends at the first closing delimiter that starts a line, or at
//!    the end of the document when there is none;
//! 5. a block holding only comments and whitespace is empty, anything else is
//!    parsed by the engine for the document's language;
//! 6. one `\r` and one `\n` after the closing delimiter are dropped;
//! 7. the excerpt is extracted from what remains.

use crate::core::document::Document;
use crate::core::excerpt::extract_excerpt;
use crate::core::options::Config;
use crate::core::value::{Data, Value};
use crate::error::{MatterError, Result};
use log::{debug, trace};
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// Lines starting with `#` (after optional whitespace) and at least one more character
static COMMENT_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*#[^\n]+").unwrap());

/// The text following an opening delimiter on the same line
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LanguageTag {
    /// The line as written, without its line break
    pub raw: String,
    /// `raw` trimmed; empty when there is no tag
    pub name: String,
}

/// Whether `text` starts with the opening delimiter.
///
/// This is a prefix test only; it does not check for a closing delimiter or
/// the `----` case.
pub fn has_front_matter(text: &str, config: &Config) -> bool {
    text.starts_with(config.open.as_str())
}

/// Read the inline language tag of `text`, skipping the opening delimiter if
/// `text` starts with it
pub fn detect_language(text: &str, config: &Config) -> LanguageTag {
    let rest = text.strip_prefix(config.open.as_str()).unwrap_or(text);
    sniff_language(rest)
}

fn sniff_language(text: &str) -> LanguageTag {
    let end = match text.find('\n') {
        Some(i) if text[..i].ends_with('\r') => i - 1,
        Some(i) => i,
        None => text.len(),
    };
    let raw = &text[..end];
    LanguageTag {
        raw: raw.to_string(),
        name: raw.trim().to_string(),
    }
}

/// Extract the front matter of a normalized document
pub fn extract(mut document: Document, config: &Config) -> Result<Document> {
    let open = config.open.as_str();

    if !document.content.starts_with(open) {
        trace!("no opening delimiter {:?}", open);
        extract_excerpt(&mut document, config);
        return Ok(document);
    }

    let text = std::mem::take(&mut document.content);
    let after_open = &text[open.len()..];

    if let (Some(next), Some(last)) = (after_open.chars().next(), open.chars().last()) {
        if next == last {
            debug!("{:?} followed by {:?} is not an opening delimiter", open, next);
            document.content = text;
            return Ok(document);
        }
    }

    let tag = sniff_language(after_open);
    let (rest, inline_language) = if tag.name.is_empty() {
        (after_open, None)
    } else {
        (&after_open[tag.raw.len()..], Some(tag.name))
    };

    let language = match (&config.language, inline_language) {
        (Some(explicit), _) => explicit.clone(),
        (None, Some(inline)) => inline,
        (None, None) => config.default_language.clone(),
    };

    let close = format!("\n{}", config.close);
    let (matter, remainder) = match rest.find(close.as_str()) {
        Some(index) => (&rest[..index], Some(&rest[index + close.len()..])),
        None => {
            debug!("no closing delimiter {:?}, the whole document is front matter", config.close);
            (rest, None)
        }
    };

    let block = COMMENT_LINE.replace_all(matter, "");
    if block.trim().is_empty() {
        trace!("front matter block is empty");
        document.is_empty = true;
        document.empty = Some(text.clone());
        document.data = Data::new();
    } else {
        let engine = config.engines.resolve(&language)?;
        debug!("parsing {} bytes of {} front matter", matter.len(), language);
        document.data = into_data(engine.parse(matter)?, &language)?;
    }

    document.matter = matter.to_string();
    document.content = remainder.map(strip_line_break).unwrap_or_default().to_string();
    document.language = language;

    extract_excerpt(&mut document, config);
    Ok(document)
}

fn strip_line_break(text: &str) -> &str {
    let text = text.strip_prefix('\r').unwrap_or(text);
    text.strip_prefix('\n').unwrap_or(text)
}

fn into_data(value: Value, language: &str) -> Result<Data> {
    match value {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Data::new()),
        other => Err(MatterError::metadata_syntax(
            language,
            format!("front matter must be a mapping, found {}", kind(&other)),
        )),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}
