//! CLI command handlers that bridge CLI arguments to library operations

use crate::cli_bin::args::*;
use anyhow::{bail, Context, Result};
use log::{debug, info, warn};
use matterkit::core::{Data, Delimiters, Document, Excerpt, Options, YamlJsonConverter};
use matterkit::io::{resolve_files, FrontMatterReader, FrontMatterWriter, WriteOptions};
use matterkit::Matter;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Execute the parse command
pub fn parse_command(args: ParseArgs) -> Result<()> {
    debug!("Executing parse command with args: {:?}", args);

    let files = resolve(&args.files)?;
    let mut options = create_options(&args.matter);
    if args.excerpt {
        options = options.with_excerpt(Excerpt::Enabled);
    }
    if let Some(separator) = &args.excerpt_separator {
        options = options.with_excerpt_separator(separator.clone());
    }

    let matter = Matter::new();
    let mut documents = BTreeMap::new();
    for file in &files {
        debug!("Processing file: {}", file.display());
        let document = matter
            .read_file(file, Some(&options))
            .with_context(|| format!("Failed to parse {}", file.display()))?;
        documents.insert(file.to_string_lossy().to_string(), document);
    }

    if documents.len() == 1 {
        if let Some(document) = documents.values().next() {
            print_output(document, args.format)?;
        }
    } else {
        print_output(&documents, args.format)?;
    }

    info!("Parsed {} files", documents.len());
    Ok(())
}

/// Execute the test command
pub fn test_command(args: TestArgs) -> Result<()> {
    debug!("Executing test command");

    let files = resolve(&args.files)?;
    let options = create_options(&args.matter);
    let reader = FrontMatterReader::new();

    let mut with_matter = 0;
    for file in &files {
        let text = reader
            .read_to_string(file)
            .with_context(|| format!("Failed to read {}", file.display()))?;
        let found = matterkit::test(&text, Some(&options));
        if found {
            with_matter += 1;
        }
        println!("{}: {}", file.display(), found);
    }

    info!("{} of {} files have front matter", with_matter, files.len());
    Ok(())
}

/// Execute the language command
pub fn language_command(args: LanguageArgs) -> Result<()> {
    debug!("Executing language command");

    let files = resolve(&args.files)?;
    let options = create_options(&args.matter);
    let reader = FrontMatterReader::new();

    for file in &files {
        let text = reader
            .read_to_string(file)
            .with_context(|| format!("Failed to read {}", file.display()))?;
        let tag = matterkit::language(&text, Some(&options));
        if tag.name.is_empty() {
            println!("{}: -", file.display());
        } else {
            println!("{}: {}", file.display(), tag.name);
        }
    }

    Ok(())
}

/// Execute the stringify command
pub fn stringify_command(args: StringifyArgs) -> Result<()> {
    debug!("Executing stringify command with args: {:?}", args);

    let options = create_options(&args.matter);
    let document = if args.file.exists() {
        FrontMatterReader::new()
            .read_file(&args.file, Some(&options))
            .with_context(|| format!("Failed to parse {}", args.file.display()))?
    } else {
        warn!("{} does not exist, starting from an empty document", args.file.display());
        Document::default()
    };
    let data = parse_assignments(&args.set)?;

    if args.stdout {
        print!("{}", document.stringify(Some(&data), Some(&options))?);
        return Ok(());
    }

    let write_options = WriteOptions {
        dry_run: args.dry_run,
    };
    let result = FrontMatterWriter::new()
        .write_document(&document, &args.file, Some(&data), Some(&options), &write_options)
        .with_context(|| format!("Failed to write {}", args.file.display()))?;

    if let Some(diff) = &result.diff {
        if args.dry_run {
            println!("{}", diff);
        }
    }
    if result.modified && !args.dry_run {
        info!("Updated: {}", result.output_path.display());
    } else if !result.modified {
        info!("Unchanged: {}", result.output_path.display());
    }

    Ok(())
}

// Helper functions

fn resolve(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let files = resolve_files(paths);
    if files.is_empty() {
        bail!("No files found to process");
    }
    Ok(files)
}

fn create_options(matter: &MatterOptions) -> Options {
    let mut options = Options::new();
    if let Some(language) = &matter.language {
        options = options.with_language(language.clone());
    }
    if let Some(language) = &matter.default_language {
        options = options.with_default_language(language.clone());
    }
    match (&matter.delimiter, &matter.open, &matter.close) {
        (Some(delimiter), _, _) => {
            options = options.with_delimiters(Delimiters::single(delimiter.clone()))
        }
        (None, Some(open), Some(close)) => {
            options = options.with_delimiters(Delimiters::pair(open.clone(), close.clone()))
        }
        _ => {}
    }
    options
}

/// Parse `key=value` pairs, reading each value as a YAML scalar
fn parse_assignments(assignments: &[String]) -> Result<Data> {
    let mut data = Data::new();
    for assignment in assignments {
        let Some((key, raw)) = assignment.split_once('=') else {
            bail!("Invalid assignment '{}', expected 'key=value'", assignment);
        };
        let key = key.trim();
        if key.is_empty() {
            bail!("Invalid assignment '{}', key is empty", assignment);
        }
        data.insert(key.to_string(), parse_cli_value(raw)?);
    }
    Ok(data)
}

fn parse_cli_value(raw: &str) -> Result<serde_json::Value> {
    let yaml: serde_yaml::Value = match serde_yaml::from_str(raw) {
        Ok(value) => value,
        Err(_) => serde_yaml::Value::String(raw.to_string()),
    };
    let value = YamlJsonConverter::yaml_to_json(&yaml).map_err(anyhow::Error::msg)?;
    Ok(value)
}

fn print_output<T: serde::Serialize>(value: &T, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(value)?),
    }
    Ok(())
}
