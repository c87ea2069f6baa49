//! Format trait and implementations for the documents sections are loaded from.
//!
//! This module defines the `Format` trait which abstracts over on-disk layouts (markdown
//! outlines, JSON) by turning text into sections and sections back into text. The format for a
//! file is picked from its extension.

pub mod json;
pub mod markdown;

use crate::config::Config;
use crate::section::{Heading, Section};
use std::fs;
use std::io;
use std::path::Path;

/// Sections as stored in a document: markdown headings over plain-text rows.
pub type Document = Vec<Section<Heading, String>>;

/// Reads and writes a document layout.
pub trait Format {
    /// Parses document text into sections.
    ///
    /// # Errors
    ///
    /// Returns `InvalidData` if the text cannot be read as this format.
    fn parse(&self, source: &str) -> io::Result<Document>;

    /// Renders sections back into document text.
    ///
    /// # Errors
    ///
    /// Returns an error if the sections cannot be encoded.
    fn render(&self, sections: &[Section<Heading, String>], cfg: &Config) -> io::Result<String>;
}

/// Picks the format matching a file's extension.
///
/// # Errors
///
/// Returns `Unsupported` if the extension is neither `json` nor a configured markdown extension.
pub fn for_path(path: &Path, cfg: &Config) -> io::Result<Box<dyn Format>> {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default();

    if ext.eq_ignore_ascii_case("json") {
        Ok(Box::new(json::JsonFormat))
    } else if cfg.file_extensions.iter().any(|known| known == ext) {
        Ok(Box::new(markdown::MarkdownFormat))
    } else {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            format!("no format for {}", path.display()),
        ))
    }
}

/// Reads a document from disk using the format its extension selects.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load(path: &Path, cfg: &Config) -> io::Result<Document> {
    let format = for_path(path, cfg)?;
    let source = fs::read_to_string(path)?;
    let sections = format.parse(&source)?;
    log::info!("loaded {} sections from {}", sections.len(), path.display());
    Ok(sections)
}

/// Writes sections to disk using the format the path's extension selects.
///
/// # Errors
///
/// Returns an error if the sections cannot be rendered or the file cannot be written.
pub fn save(path: &Path, sections: &[Section<Heading, String>], cfg: &Config) -> io::Result<()> {
    let format = for_path(path, cfg)?;
    let text = format.render(sections, cfg)?;
    fs::write(path, text)?;
    log::info!("wrote {} sections to {}", sections.len(), path.display());
    Ok(())
}

#[cfg(test)]
#[path = "tests/formats.rs"]
mod tests;
