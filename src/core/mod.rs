//! Core types and algorithms
//!
//! - [`document`]: the [`Document`] record and input normalization
//! - [`engine`]: the engine registry
//! - [`options`]: caller options and their resolved [`Config`]
//! - [`extract`]: the front matter extraction state machine
//! - [`excerpt`]: excerpt extraction
//! - [`stringify`]: serializing documents back to text
//! - [`value`]: the value model shared by all engines

pub mod document;
pub mod engine;
pub mod excerpt;
pub mod extract;
pub mod options;
pub mod stringify;
pub mod value;

pub use document::{Document, Input, Source};
pub use engine::{Engine, Engines};
pub use excerpt::extract_excerpt;
pub use extract::{detect_language, extract, has_front_matter, LanguageTag};
pub use options::{Config, Delimiters, Excerpt, ExcerptStrategy, Options};
pub use stringify::{stringify, StringifyInput};
pub use value::{Data, Value, YamlJsonConverter};
