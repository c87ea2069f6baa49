//! JSON format: the section array serialised as-is.

use crate::config::Config;
use crate::formats::{Document, Format};
use crate::section::{Heading, Section};
use std::io;

/// Sections stored as a JSON array of `{ "header": .., "elements": [..] }` objects.
pub struct JsonFormat;

impl Format for JsonFormat {
    fn parse(&self, source: &str) -> io::Result<Document> {
        serde_json::from_str(source).map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("Failed to parse sections: {e}"),
            )
        })
    }

    fn render(&self, sections: &[Section<Heading, String>], cfg: &Config) -> io::Result<String> {
        let json = if cfg.pretty_json {
            serde_json::to_string_pretty(sections)
        } else {
            serde_json::to_string(sections)
        };
        json.map_err(io::Error::other)
    }
}
