use crate::core::builder::{Reusable, StyleBuilder};
use crate::core::style::Style;
use crate::domain::model::{BasicColor, Rgb, StyleConfig};
use crate::utils::error::{JanisError, Result};
use crate::utils::validation::{validate_exclusive, validate_non_empty_string, Validate};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::OnceLock;

/// A set of named styles loaded from TOML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub theme: ThemeInfo,
    #[serde(default)]
    pub styles: BTreeMap<String, StyleSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeInfo {
    pub name: String,
    pub description: Option<String>,
}

/// One `[styles.<name>]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleSpec {
    pub color: Option<BasicColor>,
    pub hex: Option<Rgb>,
    pub rgb: Option<[u8; 3]>,
    pub bg_color: Option<BasicColor>,
    pub bg_hex: Option<Rgb>,
    pub bg_rgb: Option<[u8; 3]>,
    pub bold: bool,
    pub dim: bool,
    pub italic: bool,
    pub underlined: bool,
    pub slow_blink: bool,
    pub rapid_blink: bool,
    pub reverse: bool,
    pub hide: bool,
}

impl StyleSpec {
    pub fn to_config(&self) -> StyleConfig {
        StyleConfig {
            basic_color: self.color,
            rgb_color: self.hex.or(self.rgb.map(Rgb::from)),
            bg_basic_color: self.bg_color,
            bg_rgb_color: self.bg_hex.or(self.bg_rgb.map(Rgb::from)),
            bold: self.bold,
            dim: self.dim,
            italic: self.italic,
            underlined: self.underlined,
            slow_blink: self.slow_blink,
            rapid_blink: self.rapid_blink,
            reverse: self.reverse,
            hide: self.hide,
        }
    }

    pub fn to_builder(&self) -> StyleBuilder<Reusable> {
        StyleBuilder::new().with_config(self.to_config())
    }

    fn validate_named(&self, name: &str) -> Result<()> {
        validate_exclusive(
            &format!("styles.{}.hex", name),
            &format!("styles.{}.rgb", name),
            self.hex.is_some() && self.rgb.is_some(),
        )?;
        validate_exclusive(
            &format!("styles.{}.bg_hex", name),
            &format!("styles.{}.bg_rgb", name),
            self.bg_hex.is_some() && self.bg_rgb.is_some(),
        )
    }
}

impl Theme {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(JanisError::IoError)?;
        let theme = Self::from_toml_str(&content)?;
        tracing::info!(
            theme = %theme.theme.name,
            styles = theme.styles.len(),
            path = %path.as_ref().display(),
            "loaded theme"
        );
        Ok(theme)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| JanisError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Expands `${VAR}` so themes can pick colors from the environment,
    /// e.g. `hex = "${ACCENT}"`. Unset variables stay as written.
    fn substitute_env_vars(content: &str) -> String {
        static VAR: OnceLock<Regex> = OnceLock::new();
        let pattern =
            VAR.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

        let expanded = pattern.replace_all(content, |caps: &Captures| {
            std::env::var(&caps[1]).unwrap_or_else(|_| caps[0].to_string())
        });
        if matches!(expanded, Cow::Owned(_)) {
            tracing::debug!("expanded environment variables in theme");
        }

        expanded.into_owned()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.styles.keys().map(String::as_str)
    }

    pub fn spec(&self, name: &str) -> Result<&StyleSpec> {
        self.styles.get(name).ok_or_else(|| JanisError::UnknownStyle {
            name: name.to_string(),
        })
    }

    pub fn style(&self, name: &str) -> Result<Style> {
        Ok(self.spec(name)?.to_builder().build())
    }

    pub fn apply(&self, name: &str, text: &str) -> Result<String> {
        Ok(self.style(name)?.apply(text))
    }
}

impl Validate for Theme {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("theme.name", &self.theme.name)?;

        for (name, spec) in &self.styles {
            validate_non_empty_string("styles", name)?;
            spec.validate_named(name)?;
        }

        Ok(())
    }
}
