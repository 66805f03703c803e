//! Excerpt extraction
//!
//! The excerpt is the part of a document's content before a separator. The
//! separator is taken, in order, from the `excerpt_separator` front matter
//! field, the `excerpt_separator` option, an [`Excerpt::Separator`], and
//! finally the opening delimiter.

use crate::core::document::Document;
use crate::core::options::{Config, Excerpt};
use log::trace;

/// Front matter field that overrides the configured separator
pub const SEPARATOR_FIELD: &str = "excerpt_separator";

/// Set `document.excerpt` according to `config`.
///
/// Does nothing when excerpts are disabled and no separator is configured,
/// or when the separator does not occur in the content.
pub fn extract_excerpt(document: &mut Document, config: &Config) {
    if let Excerpt::Custom(strategy) = &config.excerpt {
        strategy.apply(document, config);
        return;
    }

    let Some(separator) = resolve_separator(document, config) else {
        return;
    };

    if let Some(index) = document.content.find(separator.as_str()) {
        trace!("excerpt ends at byte {} (separator {:?})", index, separator);
        document.excerpt = document.content[..index].to_string();
    }
}

fn resolve_separator(document: &Document, config: &Config) -> Option<String> {
    let explicit = document
        .data
        .get(SEPARATOR_FIELD)
        .and_then(|v| v.as_str())
        .or(config.excerpt_separator.as_deref())
        .or(match &config.excerpt {
            Excerpt::Separator(separator) => Some(separator.as_str()),
            _ => None,
        });

    match explicit {
        Some(separator) => Some(separator.to_string()),
        None if config.excerpt.is_enabled() => Some(config.open.clone()),
        None => None,
    }
}
