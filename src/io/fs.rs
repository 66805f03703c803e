//! File resolution for batch processing

use log::warn;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Extensions treated as front matter documents when walking directories
pub const DOCUMENT_EXTENSIONS: &[&str] = &[
    "md", "markdown", "mdown", "mkd", "mkdn", "mdx", "html", "txt",
];

/// Whether a path has one of [`DOCUMENT_EXTENSIONS`]
pub fn is_document(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| DOCUMENT_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Expand directories into the documents they contain; files are kept as
/// given, whatever their extension. Missing paths are skipped.
pub fn resolve_files(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_file() {
            files.push(path.clone());
        } else if path.is_dir() {
            let mut found: Vec<PathBuf> = WalkDir::new(path)
                .into_iter()
                .filter_map(|e| e.ok())
                .filter(|e| e.file_type().is_file() && is_document(e.path()))
                .map(|e| e.into_path())
                .collect();
            found.sort();
            files.extend(found);
        } else {
            warn!("skipping {}: no such file or directory", path.display());
        }
    }
    files
}
