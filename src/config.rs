use serde::{Deserialize, Serialize};
use std::path::Path;
use crate::errors::{FormatterError, Result};
use crate::packer::{LayoutOptions, WrapIndentStyle};

/// Formatter configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatterConfig {
    /// Put the closing quote of the class attribute on its own line
    pub close_quote_on_new_line: bool,

    /// Maximum line width for class lines (0 disables wrapping)
    pub max_line_width: usize,

    /// Indentation of wrapped class lines
    pub wrap_indent_style: WrapIndentStyle,

    /// File patterns formatted when no input is given
    pub include: Vec<String>,

    /// File patterns never formatted
    pub exclude: Vec<String>,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            close_quote_on_new_line: true,
            max_line_width: 80,
            wrap_indent_style: WrapIndentStyle::Same,
            include: vec![
                "./src/**/*.html".to_string(),
                "./src/**/*.jsx".to_string(),
                "./src/**/*.tsx".to_string(),
                "./src/**/*.vue".to_string(),
                "./src/**/*.svelte".to_string(),
                "./src/**/*.astro".to_string(),
            ],
            exclude: Vec::new(),
        }
    }
}

/// Command line values that take precedence over the configuration file
#[derive(Debug, Clone, Default)]
pub struct LayoutOverrides {
    pub max_line_width: Option<usize>,
    pub wrap_indent_style: Option<WrapIndentStyle>,
    pub close_quote_same_line: bool,
}

impl FormatterConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| FormatterError::ConfigError {
                message: format!("Failed to read config file {}: {}", path.display(), e),
            })?;

        serde_yaml::from_str(&content)
            .map_err(|e| FormatterError::ConfigError {
                message: format!("Failed to parse YAML config: {}", e),
            })
    }

    /// Load configuration from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| FormatterError::ConfigError {
                message: format!("Failed to read config file {}: {}", path.display(), e),
            })?;

        serde_json::from_str(&content)
            .map_err(|e| FormatterError::ConfigError {
                message: format!("Failed to parse JSON config: {}", e),
            })
    }

    /// Load configuration from a file (auto-detect format)
    pub fn from_file(path: &Path) -> Result<Self> {
        match path.extension().and_then(|s| s.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_file(path),
            Some("json") => Self::from_json_file(path),
            _ => Err(FormatterError::ConfigError {
                message: format!(
                    "Unsupported config file format: {}. Use .yaml, .yml, or .json",
                    path.display()
                ),
            }),
        }
    }

    /// Apply command line overrides
    pub fn with_overrides(mut self, overrides: &LayoutOverrides) -> Self {
        if let Some(width) = overrides.max_line_width {
            self.max_line_width = width;
        }
        if let Some(style) = overrides.wrap_indent_style {
            self.wrap_indent_style = style;
        }
        if overrides.close_quote_same_line {
            self.close_quote_on_new_line = false;
        }
        self
    }

    /// Layout options for a tag whose line is indented by `base_indent`.
    /// Attributes sit two spaces deeper.
    pub fn layout_for(&self, base_indent: &str) -> LayoutOptions {
        LayoutOptions {
            base_indent: base_indent.to_string(),
            attribute_indent: format!("{}  ", base_indent),
            close_quote_on_new_line: self.close_quote_on_new_line,
            max_line_width: self.max_line_width,
            wrap_indent_style: self.wrap_indent_style,
        }
    }
}
