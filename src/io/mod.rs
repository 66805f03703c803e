//! File I/O and caching
//!
//! - [`reader`]: reading documents from disk
//! - [`writer`]: writing stringified documents back, atomically
//! - [`fs`]: expanding directories into document paths
//! - [`cache`]: memoization of extraction results

pub mod cache;
pub mod fs;
pub mod reader;
pub mod writer;

pub use cache::{Cache, CacheStats};
pub use fs::{is_document, resolve_files};
pub use reader::{FrontMatterReader, ReaderConfig};
pub use writer::{FrontMatterWriter, LineEndings, WriteOptions, WriteResult, WriterConfig};
