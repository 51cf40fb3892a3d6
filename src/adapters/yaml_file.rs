// SPDX-License-Identifier: MIT OR Apache-2.0

//! YAML file configuration adapter.
//!
//! This module provides an adapter that reads format configuration requests from
//! YAML files.

use crate::domain::{ConfigArgs, IntlError, Result};
use crate::ports::ConfigParser;
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

/// Maximum allowed file size for YAML configuration files (10MB)
const MAX_YAML_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// File name looked up in the default configuration directory.
const DEFAULT_FILE_NAME: &str = "formats.yaml";

const SOURCE_NAME: &str = "yaml-file";

/// YAML parser implementation.
///
/// The document must be a sequence of entries. An empty document yields no
/// entries.
///
/// # Examples
///
/// ```rust
/// use intlcfg::adapters::YamlParser;
/// use intlcfg::ports::ConfigParser;
///
/// let parser = YamlParser::new();
/// let yaml = "- language: en\n  kind: PriceFormat\n  options:\n    currency: USD\n";
/// let entries = parser.parse(yaml).unwrap();
/// assert_eq!(entries[0].kind, "PriceFormat");
/// ```
#[derive(Debug, Clone)]
pub struct YamlParser;

impl YamlParser {
    /// Creates a new YAML parser.
    pub fn new() -> Self {
        YamlParser
    }
}

impl Default for YamlParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigParser for YamlParser {
    fn parse(&self, content: &str) -> Result<Vec<ConfigArgs>> {
        let parse_error = |e: serde_yaml::Error| IntlError::ParseError {
            message: format!("Failed to parse YAML: {}", e),
            source: Some(Box::new(e)),
        };

        let document: serde_yaml::Value = serde_yaml::from_str(content).map_err(parse_error)?;
        if document.is_null() {
            return Ok(Vec::new());
        }
        serde_yaml::from_value(document).map_err(parse_error)
    }

    fn supported_extensions(&self) -> &[&str] {
        &["yaml", "yml"]
    }
}

/// Configuration adapter for YAML files.
///
/// The adapter reads and parses the file once on creation; [`YamlFileAdapter::reload`]
/// reads it again. The entries are not validated until they are handed to a
/// configuration service.
///
/// # Examples
///
/// ```rust,no_run
/// use intlcfg::adapters::YamlFileAdapter;
///
/// // Load from a specific file
/// let adapter = YamlFileAdapter::from_file("/path/to/formats.yaml").unwrap();
///
/// // Load from default OS location
/// let adapter = YamlFileAdapter::from_default_location("myapp", "com.example").unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct YamlFileAdapter {
    /// Path to the YAML file
    file_path: PathBuf,
    /// Parsed configuration requests, in file order
    entries: Vec<ConfigArgs>,
    /// YAML parser
    parser: YamlParser,
}

impl YamlFileAdapter {
    /// Creates a new YAML file adapter from a specific file path.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file_path = path.as_ref().to_path_buf();

        let canonical_path = file_path.canonicalize().map_err(|e| IntlError::SourceError {
            source_name: SOURCE_NAME.to_string(),
            message: format!("Invalid or inaccessible path: {}", display_name(&file_path)),
            source: Some(Box::new(e)),
        })?;

        let parser = YamlParser::new();
        let entries = parser.parse(&read_limited(&canonical_path)?)?;

        Ok(Self {
            file_path: canonical_path,
            entries,
            parser,
        })
    }

    /// Creates a new YAML file adapter from `formats.yaml` in the default
    /// OS-appropriate configuration directory.
    ///
    /// # Arguments
    ///
    /// * `app_name` - The application name (e.g., "myapp")
    /// * `qualifier` - The organization/qualifier (e.g., "com.example")
    pub fn from_default_location(app_name: &str, qualifier: &str) -> Result<Self> {
        Self::with_filename(app_name, qualifier, DEFAULT_FILE_NAME)
    }

    /// Creates a new YAML file adapter with a custom file name in the default location.
    ///
    /// # Arguments
    ///
    /// * `app_name` - The application name
    /// * `qualifier` - The organization/qualifier
    /// * `filename` - The configuration file name (e.g., "intl.yaml")
    pub fn with_filename(app_name: &str, qualifier: &str, filename: &str) -> Result<Self> {
        let proj_dirs =
            ProjectDirs::from(qualifier, "", app_name).ok_or_else(|| IntlError::SourceError {
                source_name: SOURCE_NAME.to_string(),
                message: "Failed to determine project directories".to_string(),
                source: None,
            })?;

        Self::from_file(proj_dirs.config_dir().join(filename))
    }

    /// Returns the path to the configuration file.
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Returns the parsed configuration requests, in file order.
    pub fn entries(&self) -> &[ConfigArgs] {
        &self.entries
    }

    /// Reads and parses the file again.
    ///
    /// On error the previously parsed entries are kept.
    pub fn reload(&mut self) -> Result<()> {
        let content = read_limited(&self.file_path)?;
        self.entries = self.parser.parse(&content)?;
        Ok(())
    }
}

fn display_name(path: &Path) -> &str {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("<unknown>")
}

fn read_limited(path: &Path) -> Result<String> {
    let metadata = fs::metadata(path).map_err(|e| IntlError::SourceError {
        source_name: SOURCE_NAME.to_string(),
        message: format!("Failed to read file metadata: {}", display_name(path)),
        source: Some(Box::new(e)),
    })?;

    if metadata.len() > MAX_YAML_FILE_SIZE {
        return Err(IntlError::SourceError {
            source_name: SOURCE_NAME.to_string(),
            message: format!(
                "Configuration file too large: {} bytes (max {} bytes)",
                metadata.len(),
                MAX_YAML_FILE_SIZE
            ),
            source: None,
        });
    }

    fs::read_to_string(path).map_err(|e| IntlError::SourceError {
        source_name: SOURCE_NAME.to_string(),
        message: format!("Failed to read configuration file: {}", display_name(path)),
        source: Some(Box::new(e)),
    })
}
