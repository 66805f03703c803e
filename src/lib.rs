//! matterkit: front matter extraction and stringification
//!
//! Documents often start with a block of metadata framed by delimiters,
//! usually YAML between `---` lines. This library splits such documents into
//! the parsed data and the remaining content, optionally carves out an
//! excerpt, and turns data and content back into a single text.
//!
//! # Features
//!
//! - **Pluggable engines** for the metadata language: YAML and JSON built in,
//!   JavaScript object literals behind the `javascript` feature
//! - **Inline language tags** such as `---json`
//! - **Custom delimiters**, including distinct open and close markers
//! - **Excerpts** split off by a separator or a custom strategy
//! - **Round-tripping** through [`stringify()`]
//! - **Caching** of repeated extractions through [`Matter`]
//!
//! # Quick Start
//!
//! ## Parsing
//!
//! ```rust
//! use matterkit::Result;
//!
//! fn main() -> Result<()> {
//!     let doc = matterkit::parse("---\ntitle: Hello\n---\nThis is content.", None)?;
//!     assert_eq!(doc.data["title"], "Hello");
//!     assert_eq!(doc.content, "This is content.");
//!     Ok(())
//! }
//! ```
//!
//! ## Options
//!
//! ```rust
//! use matterkit::{Options, Result};
//!
//! fn main() -> Result<()> {
//!     let options = Options::new()
//!         .with_delimiters("~~~")
//!         .with_excerpt_separator("<!-- more -->");
//!     let doc = matterkit::parse("~~~\na: 1\n~~~\nintro\n<!-- more -->\nrest", Some(&options))?;
//!     assert_eq!(doc.excerpt, "intro\n");
//!     Ok(())
//! }
//! ```
//!
//! ## Stringifying
//!
//! ```rust
//! use matterkit::Result;
//! use serde_json::json;
//!
//! fn main() -> Result<()> {
//!     let doc = matterkit::parse("---\ntitle: Hello\n---\nbody", None)?;
//!     let extra = json!({"draft": true}).as_object().cloned().unwrap_or_default();
//!     let text = matterkit::stringify(&doc, Some(&extra), None)?;
//!     assert_eq!(text, "---\ntitle: Hello\ndraft: true\n---\nbody\n");
//!     Ok(())
//! }
//! ```
//!
//! ## Caching
//!
//! ```rust
//! use matterkit::{Matter, Result};
//!
//! fn main() -> Result<()> {
//!     let matter = Matter::new();
//!     matter.parse("---\na: 1\n---\nbody")?;
//!     matter.parse("---\na: 1\n---\nbody")?;
//!     assert_eq!(matter.cache_stats().hits, 1);
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - [`core`]: the document model, engine registry, options, and the
//!   extraction and stringification algorithms
//! - [`engines`]: the concrete metadata engines
//! - [`io`]: file reading and writing, file resolution, the result cache
//! - [`matter`]: the caching [`Matter`] client and the free functions
//! - [`error`]: the error type

// Public API exports
pub use error::{MatterError, Result};

// Core types
pub use crate::core::{
    Config, Data, Delimiters, Document, Engine, Engines, Excerpt, ExcerptStrategy, Input,
    LanguageTag, Options, Source, StringifyInput, Value,
};

// IO types
pub use io::{
    CacheStats, FrontMatterReader, FrontMatterWriter, LineEndings, ReaderConfig, WriteOptions,
    WriteResult, WriterConfig,
};

// Client and free functions
pub use crate::core::stringify;
pub use matter::{language, parse, read_file, test, Matter};

pub mod core;
pub mod engines;
pub mod error;
pub mod io;
pub mod matter;
