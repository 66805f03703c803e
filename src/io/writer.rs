//! Writing documents back to disk
//!
//! Documents are stringified and written atomically (temporary file in the
//! same directory, then rename). A dry run reports the change as a diff
//! without touching the file.

use crate::core::{stringify, Data, Document, Options};
use crate::error::{MatterError, Result};
use log::debug;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Configuration for the front matter writer
#[derive(Debug, Clone)]
pub struct WriterConfig {
    /// Use atomic writes (write to temp file first, then rename)
    pub atomic_writes: bool,
    /// Line ending style
    pub line_endings: LineEndings,
}

/// Line ending styles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEndings {
    /// Unix-style line endings (\n)
    Unix,
    /// Windows-style line endings (\r\n)
    Windows,
    /// Keep whatever the stringified text contains
    Preserve,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            atomic_writes: true,
            line_endings: LineEndings::Preserve,
        }
    }
}

/// Write operation options for individual operations
#[derive(Debug, Clone, Default)]
pub struct WriteOptions {
    /// Generate diff without writing
    pub dry_run: bool,
}

/// Result of a write operation
#[derive(Debug)]
pub struct WriteResult {
    /// Whether the file content differs from what was written
    pub modified: bool,
    pub output_path: PathBuf,
    /// Line diff between old and new content, when they differ
    pub diff: Option<String>,
}

/// Front matter writer
#[derive(Debug, Clone, Default)]
pub struct FrontMatterWriter {
    config: WriterConfig,
}

impl FrontMatterWriter {
    /// Create a new writer with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new writer with custom configuration
    pub fn with_config(config: WriterConfig) -> Self {
        Self { config }
    }

    /// Stringify `document` (merging `data`) and write it to `path`
    pub fn write_document<P: AsRef<Path>>(
        &self,
        document: &Document,
        path: P,
        data: Option<&Data>,
        options: Option<&Options>,
        write_options: &WriteOptions,
    ) -> Result<WriteResult> {
        let text = document.stringify(data, options)?;
        self.write_text(path, &text, write_options)
    }

    /// Write `text` to `path`, skipping the write when nothing changed
    pub fn write_text<P: AsRef<Path>>(
        &self,
        path: P,
        text: &str,
        write_options: &WriteOptions,
    ) -> Result<WriteResult> {
        let path = path.as_ref();
        let new_content = self.normalize_line_endings(text);

        let original = if path.exists() {
            Some(fs::read_to_string(path)?)
        } else {
            None
        };
        let modified = original.as_deref() != Some(new_content.as_str());
        let diff = generate_diff(original.as_deref().unwrap_or(""), &new_content, path);

        let result = WriteResult {
            modified,
            output_path: path.to_path_buf(),
            diff,
        };

        if write_options.dry_run || !modified {
            debug!("not writing {} (dry run: {})", path.display(), write_options.dry_run);
            return Ok(result);
        }

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        if self.config.atomic_writes {
            self.write_atomic(path, &new_content)?;
        } else {
            fs::write(path, &new_content)?;
        }
        debug!("wrote {} bytes to {}", new_content.len(), path.display());

        Ok(result)
    }

    fn normalize_line_endings(&self, content: &str) -> String {
        match self.config.line_endings {
            LineEndings::Unix => content.replace("\r\n", "\n"),
            LineEndings::Windows => content.replace("\r\n", "\n").replace('\n', "\r\n"),
            LineEndings::Preserve => content.to_string(),
        }
    }

    fn write_atomic(&self, path: &Path, content: &str) -> Result<()> {
        let parent_dir = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };

        let mut temp_file = NamedTempFile::new_in(parent_dir)?;
        temp_file.write_all(content.as_bytes())?;
        temp_file.flush()?;
        temp_file.persist(path).map_err(|e| {
            MatterError::Io(std::io::Error::other(format!(
                "Failed to persist temporary file: {}",
                e
            )))
        })?;
        Ok(())
    }

    /// Get writer configuration
    pub fn config(&self) -> &WriterConfig {
        &self.config
    }
}

/// Diff of the changed middle section, framed by the common prefix and suffix
fn generate_diff(old_content: &str, new_content: &str, path: &Path) -> Option<String> {
    if old_content == new_content {
        return None;
    }

    let old_lines: Vec<&str> = old_content.lines().collect();
    let new_lines: Vec<&str> = new_content.lines().collect();

    let prefix = old_lines
        .iter()
        .zip(&new_lines)
        .take_while(|(a, b)| a == b)
        .count();
    let suffix = old_lines[prefix..]
        .iter()
        .rev()
        .zip(new_lines[prefix..].iter().rev())
        .take_while(|(a, b)| a == b)
        .count();

    let old_middle = &old_lines[prefix..old_lines.len() - suffix];
    let new_middle = &new_lines[prefix..new_lines.len() - suffix];
    if old_middle.is_empty() && new_middle.is_empty() {
        // only trailing newlines differ
        return None;
    }

    let mut lines = vec![
        format!("--- {}", path.display()),
        format!("+++ {}", path.display()),
        format!(
            "@@ -{},{} +{},{} @@",
            prefix + 1,
            old_middle.len(),
            prefix + 1,
            new_middle.len()
        ),
    ];
    lines.extend(old_middle.iter().map(|l| format!("-{}", l)));
    lines.extend(new_middle.iter().map(|l| format!("+{}", l)));
    Some(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{extract, Config};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use tempfile::TempDir;

    fn document(text: &str) -> Document {
        extract(Document::from_input(text).unwrap(), &Config::default()).unwrap()
    }

    #[test]
    fn test_write_new_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("nested/test.md");
        let doc = document("---\ntitle: Test\n---\n# Hello");

        let result = FrontMatterWriter::new()
            .write_document(&doc, &file_path, None, None, &WriteOptions::default())
            .unwrap();

        assert!(result.modified);
        assert_eq!(result.output_path, file_path);
        assert_eq!(fs::read_to_string(&file_path).unwrap(), "---\ntitle: Test\n---\n# Hello\n");
    }

    #[test]
    fn test_merge_and_write() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test.md");
        fs::write(&file_path, "---\ntitle: Old\n---\nbody\n").unwrap();

        let doc = document("---\ntitle: Old\n---\nbody\n");
        let extra = json!({"title": "New"}).as_object().cloned().unwrap();
        let result = FrontMatterWriter::new()
            .write_document(&doc, &file_path, Some(&extra), None, &WriteOptions::default())
            .unwrap();

        assert!(result.modified);
        let diff = result.diff.unwrap();
        assert!(diff.contains("-title: Old"));
        assert!(diff.contains("+title: New"));
        assert_eq!(fs::read_to_string(&file_path).unwrap(), "---\ntitle: New\n---\nbody\n");
    }

    #[test]
    fn test_dry_run_does_not_write() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test.md");
        fs::write(&file_path, "# Original").unwrap();

        let result = FrontMatterWriter::new()
            .write_text(&file_path, "---\na: 1\n---\n# Original\n", &WriteOptions { dry_run: true })
            .unwrap();

        assert!(result.modified);
        assert!(result.diff.is_some());
        assert_eq!(fs::read_to_string(&file_path).unwrap(), "# Original");
    }

    #[test]
    fn test_unchanged_file_is_not_modified() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test.md");
        let writer = FrontMatterWriter::new();
        writer.write_text(&file_path, "same\n", &WriteOptions::default()).unwrap();

        let result = writer.write_text(&file_path, "same\n", &WriteOptions::default()).unwrap();
        assert!(!result.modified);
        assert!(result.diff.is_none());
    }

    #[test]
    fn test_windows_line_endings() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test.md");
        let writer = FrontMatterWriter::with_config(WriterConfig {
            atomic_writes: false,
            line_endings: LineEndings::Windows,
        });
        assert!(!writer.config().atomic_writes);

        writer.write_text(&file_path, "a\nb\r\n", &WriteOptions::default()).unwrap();
        assert_eq!(fs::read_to_string(&file_path).unwrap(), "a\r\nb\r\n");
    }

    #[test]
    fn test_diff_generation() {
        let diff = generate_diff("line1\nline2\nline3", "line1\nmodified\nline3", Path::new("t.md")).unwrap();
        assert_eq!(diff, "--- t.md\n+++ t.md\n@@ -2,1 +2,1 @@\n-line2\n+modified");
        assert!(generate_diff("a", "a", Path::new("t.md")).is_none());
    }
}
