use crate::core::ansi::{self, RESET};
use crate::core::style::Style;
use crate::domain::model::{BasicColor, Rgb, StyleConfig};
use crate::utils::error::Result;

/// Builder state for text bound by [`crate::of`]; finished with `render()`.
#[derive(Debug, Clone)]
pub struct Text(String);

/// Builder state for [`crate::style`]; finished with `build()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Reusable;

/// Fluent configuration of colors and attributes.
///
/// The state parameter decides how the builder finishes. Only a builder
/// created for a text can render, and only an unbound one can build:
///
/// ```compile_fail
/// let style = janis::of("text").bold().build();
/// ```
///
/// ```compile_fail
/// let text = janis::style().bold().render();
/// ```
#[derive(Debug, Clone)]
pub struct StyleBuilder<M = Reusable> {
    mode: M,
    config: StyleConfig,
}

impl StyleBuilder<Text> {
    pub fn for_text(text: impl Into<String>) -> Self {
        Self {
            mode: Text(text.into()),
            config: StyleConfig::default(),
        }
    }

    pub fn text(&self) -> &str {
        &self.mode.0
    }

    pub fn render(self) -> String {
        let prefix = ansi::prefix(&self.config);
        let Text(text) = self.mode;
        tracing::debug!(len = text.len(), styled = !prefix.is_empty(), "rendering text");

        let mut styled = String::with_capacity(prefix.len() + text.len() + RESET.len());
        styled.push_str(&prefix);
        styled.push_str(&text);
        styled.push_str(RESET);
        styled
    }
}

impl StyleBuilder<Reusable> {
    pub fn new() -> Self {
        Self {
            mode: Reusable,
            config: StyleConfig::default(),
        }
    }

    pub fn build(self) -> Style {
        let prefix = ansi::prefix(&self.config);
        tracing::debug!(styled = !prefix.is_empty(), "built reusable style");
        Style::new(prefix)
    }
}

impl Default for StyleBuilder<Reusable> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> StyleBuilder<M> {
    pub fn config(&self) -> &StyleConfig {
        &self.config
    }

    pub fn color(mut self, color: BasicColor) -> Self {
        self.config.basic_color = Some(color);
        self
    }

    pub fn rgb(mut self, r: u8, g: u8, b: u8) -> Self {
        self.config.rgb_color = Some(Rgb::new(r, g, b));
        self
    }

    /// Foreground from `#RGB` or `#RRGGBB`.
    pub fn hex(mut self, hex: &str) -> Result<Self> {
        self.config.rgb_color = Some(Rgb::from_hex(hex)?);
        Ok(self)
    }

    pub fn bg_color(mut self, color: BasicColor) -> Self {
        self.config.bg_basic_color = Some(color);
        self
    }

    pub fn bg_rgb(mut self, r: u8, g: u8, b: u8) -> Self {
        self.config.bg_rgb_color = Some(Rgb::new(r, g, b));
        self
    }

    /// Background from `#RGB` or `#RRGGBB`.
    pub fn bg_hex(mut self, hex: &str) -> Result<Self> {
        self.config.bg_rgb_color = Some(Rgb::from_hex(hex)?);
        Ok(self)
    }

    pub fn bold(mut self) -> Self {
        self.config.bold = true;
        self
    }

    pub fn dim(mut self) -> Self {
        self.config.dim = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.config.italic = true;
        self
    }

    pub fn underlined(mut self) -> Self {
        self.config.underlined = true;
        self
    }

    pub fn slow_blink(mut self) -> Self {
        self.config.slow_blink = true;
        self
    }

    pub fn rapid_blink(mut self) -> Self {
        self.config.rapid_blink = true;
        self
    }

    /// Swaps foreground and background.
    pub fn reverse(mut self) -> Self {
        self.config.reverse = true;
        self
    }

    /// Concealed text.
    pub fn hide(mut self) -> Self {
        self.config.hide = true;
        self
    }

    /// Replaces the whole configuration, keeping the builder state.
    pub fn with_config(mut self, config: StyleConfig) -> Self {
        self.config = config;
        self
    }
}
