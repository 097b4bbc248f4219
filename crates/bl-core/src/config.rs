//! Boolog configuration types.
//!
//! [`BoologConfig`] is the serializable part: display toggles, theme and
//! rendering limits, loadable from JSON or the environment. [`BoologOptions`]
//! is what a node is actually built from; it adds the sinks and the header
//! renderer, which have no serialized form.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::constants::{
    MAX_BODY_LENGTH_TO_DISPLAY, MAX_HEADERS_TO_DISPLAY, MAX_OBJECT_FIELDS_TO_DISPLAY,
    MAX_SHOW_OBJECT_RECURSION, UNKNOWN,
};
use crate::error::{BoologError, Result};
use crate::sink::Sink;
use crate::theme::Theme;

/// Current configuration schema version.
pub const CONFIG_SCHEMA_VERSION: &str = "1.0.0";

/// Renders the HTML header of a root-level document from its title.
pub type HeaderRenderer = dyn Fn(&str) -> String + Send + Sync;

/// Limits applied when rendering values and HTTP messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowLimits {
    /// Collections with more entries than this are collapsed.
    #[serde(default = "default_max_fields")]
    pub max_object_fields: usize,
    /// Depth past which nested values are not rendered.
    #[serde(default = "default_max_recursion")]
    pub max_recursion: usize,
    /// Header tables longer than this are collapsed.
    #[serde(default = "default_max_headers")]
    pub max_headers: usize,
    /// Payloads longer than this many characters are collapsed.
    #[serde(default = "default_max_body_length")]
    pub max_body_length: usize,
}

fn default_max_fields() -> usize {
    MAX_OBJECT_FIELDS_TO_DISPLAY
}

fn default_max_recursion() -> usize {
    MAX_SHOW_OBJECT_RECURSION
}

fn default_max_headers() -> usize {
    MAX_HEADERS_TO_DISPLAY
}

fn default_max_body_length() -> usize {
    MAX_BODY_LENGTH_TO_DISPLAY
}

impl Default for ShowLimits {
    fn default() -> Self {
        Self {
            max_object_fields: default_max_fields(),
            max_recursion: default_max_recursion(),
            max_headers: default_max_headers(),
            max_body_length: default_max_body_length(),
        }
    }
}

/// Serializable display configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoologConfig {
    /// Schema version.
    #[serde(default = "default_schema_version")]
    pub schema_version: String,
    /// Render a timestamp on every line.
    #[serde(default = "default_true")]
    pub show_timestamps: bool,
    /// Render emojis next to lines.
    #[serde(default = "default_true")]
    pub show_emojis: bool,
    /// Stylesheet for root-level documents.
    #[serde(default)]
    pub theme: Theme,
    /// Rendering limits.
    #[serde(default)]
    pub limits: ShowLimits,
}

fn default_schema_version() -> String {
    CONFIG_SCHEMA_VERSION.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for BoologConfig {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            show_timestamps: true,
            show_emojis: true,
            theme: Theme::default(),
            limits: ShowLimits::default(),
        }
    }
}

impl BoologConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timestamps(mut self, enabled: bool) -> Self {
        self.show_timestamps = enabled;
        self
    }

    pub fn with_emojis(mut self, enabled: bool) -> Self {
        self.show_emojis = enabled;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_limits(mut self, limits: ShowLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Load and validate configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load and validate configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Defaults with `BOOLOG_TIMESTAMPS`, `BOOLOG_EMOJIS` and `BOOLOG_THEME` applied.
    pub fn from_env() -> Result<Self> {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from a key lookup (the environment, in practice).
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("BOOLOG_TIMESTAMPS") {
            self.show_timestamps = parse_flag("BOOLOG_TIMESTAMPS", &val)?;
        }
        if let Some(val) = lookup("BOOLOG_EMOJIS") {
            self.show_emojis = parse_flag("BOOLOG_EMOJIS", &val)?;
        }
        if let Some(val) = lookup("BOOLOG_THEME") {
            self.theme = val.parse().map_err(BoologError::InvalidConfig)?;
        }
        Ok(self)
    }

    /// Reject schema versions from another major line and zero limits.
    pub fn validate(&self) -> Result<()> {
        let major = |v: &str| v.split('.').next().map(str::to_string);
        if major(&self.schema_version) != major(CONFIG_SCHEMA_VERSION) {
            return Err(BoologError::InvalidConfig(format!(
                "unsupported schema_version {} (expected {})",
                self.schema_version, CONFIG_SCHEMA_VERSION
            )));
        }
        let limits = &self.limits;
        for (name, value) in [
            ("max_object_fields", limits.max_object_fields),
            ("max_headers", limits.max_headers),
            ("max_body_length", limits.max_body_length),
        ] {
            if value == 0 {
                return Err(BoologError::InvalidConfig(format!(
                    "limits.{} must be greater than zero",
                    name
                )));
            }
        }
        Ok(())
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(BoologError::InvalidConfig(format!(
            "{} must be a boolean, got '{}'",
            key, other
        ))),
    }
}

/// Everything a [`Boolog`](crate::Boolog) is constructed from.
///
/// Every field has a default: no sinks, timestamps and emojis on, the light
/// theme and the built-in header.
pub struct BoologOptions {
    pub(crate) title: String,
    pub(crate) plain_text: Option<Box<dyn Sink>>,
    pub(crate) html: Option<Box<dyn Sink>>,
    pub(crate) show_timestamps: bool,
    pub(crate) show_emojis: bool,
    pub(crate) theme: Theme,
    pub(crate) limits: ShowLimits,
    pub(crate) header: Option<Box<HeaderRenderer>>,
}

impl Default for BoologOptions {
    fn default() -> Self {
        Self {
            title: UNKNOWN.to_string(),
            plain_text: None,
            html: None,
            show_timestamps: true,
            show_emojis: true,
            theme: Theme::default(),
            limits: ShowLimits::default(),
            header: None,
        }
    }
}

impl fmt::Debug for BoologOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoologOptions")
            .field("title", &self.title)
            .field("plain_text", &self.plain_text.is_some())
            .field("html", &self.html.is_some())
            .field("show_timestamps", &self.show_timestamps)
            .field("show_emojis", &self.show_emojis)
            .field("theme", &self.theme)
            .field("limits", &self.limits)
            .field("custom_header", &self.header.is_some())
            .finish()
    }
}

impl BoologOptions {
    /// Options for a node titled `title`.
    pub fn new(title: impl Into<String>) -> Self {
        Self::default().with_title(title)
    }

    /// Seed toggles, theme and limits from a loaded configuration.
    pub fn from_config(config: &BoologConfig) -> Self {
        Self {
            show_timestamps: config.show_timestamps,
            show_emojis: config.show_emojis,
            theme: config.theme,
            limits: config.limits,
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Send the plain-text stream to `sink`.
    pub fn with_plain_text(mut self, sink: impl Sink + 'static) -> Self {
        self.plain_text = Some(Box::new(sink));
        self
    }

    /// Send the HTML document to `sink` on conclusion.
    pub fn with_html(mut self, sink: impl Sink + 'static) -> Self {
        self.html = Some(Box::new(sink));
        self
    }

    pub fn with_timestamps(mut self, enabled: bool) -> Self {
        self.show_timestamps = enabled;
        self
    }

    pub fn with_emojis(mut self, enabled: bool) -> Self {
        self.show_emojis = enabled;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_limits(mut self, limits: ShowLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Replace the built-in header.
    pub fn with_header<F>(mut self, renderer: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.header = Some(Box::new(renderer));
        self
    }
}
