//! Built-in front matter engines
//!
//! - [`yaml`]: the default engine, backed by `serde_yaml`
//! - [`json`]: backed by `serde_json`, pretty-printed on output
//! - `javascript` (feature `javascript`): evaluates the block as an expression.
//!   It is never registered automatically; insert it explicitly with
//!   `Engines::insert("javascript", engines::javascript::engine())`. Doing so
//!   executes the contents of every document parsed with it.

#[cfg(feature = "javascript")]
pub mod javascript;
pub mod json;
pub mod yaml;
