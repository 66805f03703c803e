//! File reading
//!
//! Files are read whole, as UTF-8, and handed to the extractor. The path is
//! recorded on the resulting document.

use crate::core::{extract, Config, Document, Input, Options};
use crate::error::{MatterError, Result};
use log::debug;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Configuration for the front matter reader
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Maximum file size to read (in bytes)
    pub max_file_size: Option<u64>,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            max_file_size: Some(10 * 1024 * 1024), // 10MB default limit
        }
    }
}

/// Front matter reader
#[derive(Debug, Clone, Default)]
pub struct FrontMatterReader {
    config: ReaderConfig,
}

impl FrontMatterReader {
    /// Create a new reader with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new reader with custom configuration
    pub fn with_config(config: ReaderConfig) -> Self {
        Self { config }
    }

    /// Read a file as UTF-8 text
    pub fn read_to_string<P: AsRef<Path>>(&self, path: P) -> Result<String> {
        let path = path.as_ref();
        let map_io = |e: std::io::Error| match e.kind() {
            std::io::ErrorKind::PermissionDenied => MatterError::permission_denied(path),
            std::io::ErrorKind::NotFound => MatterError::file_not_found(path),
            _ => MatterError::Io(e),
        };

        let mut file = File::open(path).map_err(map_io)?;
        let metadata = file.metadata().map_err(map_io)?;
        if !metadata.is_file() {
            return Err(MatterError::input_type(format!(
                "{} is not a regular file",
                path.display()
            )));
        }
        if let Some(max_size) = self.config.max_file_size {
            if metadata.len() > max_size {
                return Err(MatterError::input_type(format!(
                    "File too large: {} bytes (limit: {} bytes)",
                    metadata.len(),
                    max_size
                )));
            }
        }

        let mut bytes = Vec::with_capacity(metadata.len() as usize);
        file.read_to_end(&mut bytes).map_err(map_io)?;
        debug!("read {} bytes from {}", bytes.len(), path.display());

        String::from_utf8(bytes).map_err(|e| {
            MatterError::input_type(format!("{} is not valid UTF-8: {}", path.display(), e))
        })
    }

    /// Read a file and extract its front matter
    pub fn read_file<P: AsRef<Path>>(&self, path: P, options: Option<&Options>) -> Result<Document> {
        let path = path.as_ref();
        let text = self.read_to_string(path)?;
        let document = Document::from_input(Input::Text(text))?;
        let mut document = extract(document, &Config::from_options(options))?;
        document.path = Some(path.to_path_buf());
        Ok(document)
    }

    /// Get reader configuration
    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }
}
