//! Configuration to acknowledge user preferences as well as set defaults.
//!
//! We look for a sectionsort.toml in the working directory and, if present, load settings from
//! there. Anything missing from the file falls back to its default.

use facet::Facet;
use std::fs;
use std::path::Path;

/// File name looked up in the working directory.
pub const CONFIG_FILE: &str = "sectionsort.toml";

#[derive(Facet, Clone, Debug, PartialEq)]
/// User preferences loaded from sectionsort.toml or falling back to defaults.
pub struct Config {
    #[facet(default = "-".to_string())]
    /// Bullet written in front of each element when rendering markdown.
    pub list_marker: String,
    #[facet(default = 2)]
    /// Heading depth used for headers that carry no depth of their own.
    pub heading_level: usize,
    #[facet(default = vec!["md".to_string()])]
    /// File suffixes treated as markdown documents.
    pub file_extensions: Vec<String>,
    #[facet(default = true)]
    /// Indent JSON output.
    pub pretty_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    #[must_use]
    /// The configuration an empty file yields, every field at its declared default.
    ///
    /// # Panics
    ///
    /// Panics if the default configuration cannot be parsed.
    pub fn defaults() -> Self {
        facet_toml::from_str::<Self>("").expect("every config field declares a default")
    }

    #[must_use]
    /// Load configuration from sectionsort.toml if present.
    pub fn load() -> Self {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    #[must_use]
    /// Load configuration from the given TOML file, using defaults if it is missing or invalid.
    pub fn load_from(path: &Path) -> Self {
        let Ok(contents) = fs::read_to_string(path) else {
            return Self::defaults();
        };
        match facet_toml::from_str::<Self>(&contents) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("ignoring unreadable config {}: {err:?}", path.display());
                Self::defaults()
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
