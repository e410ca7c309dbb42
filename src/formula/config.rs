//! Rendering options for compiled markup.

use crate::common::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// How compiled markup is post-processed before it is handed to a renderer.
///
/// All fields have defaults, so a YAML document only needs to name the
/// options it changes:
///
/// ```yaml
/// wrap_delimiters: true
/// display_style: false
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Use display delimiters `\[ ... \]` instead of inline `\( ... \)`
    pub display_style: bool,
    /// Surround non-empty output with math delimiters
    pub wrap_delimiters: bool,
    /// Run the markup sanitizer on every rendered string
    pub sanitize: bool,
    /// Glyph scale reported for large-operator templates
    pub large_operator_scale: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            display_style: true,
            wrap_delimiters: false,
            sanitize: true,
            large_operator_scale: 2.0,
        }
    }
}

impl RenderOptions {
    /// Create a new `RenderOptions` with default values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mathwriter::formula::RenderOptions;
    ///
    /// let options = RenderOptions::new().with_delimiters(true);
    /// assert!(options.display_style);
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_display_style(mut self, display: bool) -> Self {
        self.display_style = display;
        self
    }

    #[inline]
    pub fn with_delimiters(mut self, wrap: bool) -> Self {
        self.wrap_delimiters = wrap;
        self
    }

    #[inline]
    pub fn with_sanitize(mut self, sanitize: bool) -> Self {
        self.sanitize = sanitize;
        self
    }

    #[inline]
    pub fn with_large_operator_scale(mut self, scale: f32) -> Self {
        self.large_operator_scale = scale;
        self
    }

    /// Parse options from a YAML document
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_saphyr::from_str(yaml)
            .map_err(|e| Error::Config(format!("Failed to parse render options: {}", e)))
    }

    /// Load options from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml(&yaml)
    }

    /// Serialize options to YAML
    pub fn to_yaml(&self) -> Result<String> {
        serde_saphyr::to_string(self)
            .map_err(|e| Error::Config(format!("Failed to serialize render options: {}", e)))
    }
}
