use crate::config::theme::Theme;
use crate::core::ansi;
use crate::core::builder::{StyleBuilder, Text};
use crate::domain::model::{BasicColor, Rgb};
use crate::utils::error::{JanisError, Result};
use crate::utils::validation::{validate_component_count, Validate};
use clap::Parser;
use std::ffi::OsStr;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "janis")]
#[command(about = "Print text styled with ANSI colors and attributes")]
#[command(version)]
pub struct CliConfig {
    /// Text to style; several words are joined with spaces
    pub text: Vec<String>,

    /// Foreground color name, e.g. red or bright_cyan
    #[arg(long)]
    pub color: Option<BasicColor>,

    /// Foreground color as #RGB or #RRGGBB
    #[arg(long)]
    pub hex: Option<Rgb>,

    /// Foreground color as R,G,B
    #[arg(long, value_delimiter = ',')]
    pub rgb: Vec<u8>,

    /// Background color name
    #[arg(long)]
    pub bg_color: Option<BasicColor>,

    /// Background color as #RGB or #RRGGBB
    #[arg(long)]
    pub bg_hex: Option<Rgb>,

    /// Background color as R,G,B
    #[arg(long, value_delimiter = ',')]
    pub bg_rgb: Vec<u8>,

    #[arg(long)]
    pub bold: bool,

    #[arg(long)]
    pub dim: bool,

    #[arg(long)]
    pub italic: bool,

    #[arg(long)]
    pub underlined: bool,

    #[arg(long)]
    pub slow_blink: bool,

    #[arg(long)]
    pub rapid_blink: bool,

    #[arg(long)]
    pub reverse: bool,

    #[arg(long)]
    pub hide: bool,

    /// TOML theme file with [styles.<name>] tables
    #[arg(long)]
    pub theme: Option<String>,

    /// Named style from the theme; replaces the color and attribute flags
    #[arg(long)]
    pub style: Option<String>,

    /// Print every basic color in itself and exit
    #[arg(long)]
    pub list_colors: bool,

    /// Print the text without escape sequences
    #[arg(long)]
    pub plain: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn joined_text(&self) -> String {
        self.text.join(" ")
    }

    /// Builder configured from the color and attribute flags.
    pub fn to_builder(&self) -> StyleBuilder<Text> {
        let mut builder = StyleBuilder::for_text(self.joined_text());

        if let Some(color) = self.color {
            builder = builder.color(color);
        }
        if let Some(rgb) = self.hex.or(rgb_from_components(&self.rgb)) {
            builder = builder.rgb(rgb.r, rgb.g, rgb.b);
        }
        if let Some(color) = self.bg_color {
            builder = builder.bg_color(color);
        }
        if let Some(rgb) = self.bg_hex.or(rgb_from_components(&self.bg_rgb)) {
            builder = builder.bg_rgb(rgb.r, rgb.g, rgb.b);
        }

        let flags: [(bool, fn(StyleBuilder<Text>) -> StyleBuilder<Text>); 8] = [
            (self.bold, StyleBuilder::bold),
            (self.dim, StyleBuilder::dim),
            (self.italic, StyleBuilder::italic),
            (self.underlined, StyleBuilder::underlined),
            (self.slow_blink, StyleBuilder::slow_blink),
            (self.rapid_blink, StyleBuilder::rapid_blink),
            (self.reverse, StyleBuilder::reverse),
            (self.hide, StyleBuilder::hide),
        ];
        for (enabled, apply) in flags {
            if enabled {
                builder = apply(builder);
            }
        }

        builder
    }

    /// `--plain`, or a non-empty `NO_COLOR` value, disables escape sequences.
    pub fn is_plain(&self, no_color: Option<&OsStr>) -> bool {
        self.plain || no_color.is_some_and(|value| !value.is_empty())
    }

    /// Lines the binary prints: the color list, or the text styled through
    /// the theme or the flags.
    pub fn render_lines(&self, plain: bool) -> Result<Vec<String>> {
        let lines: Vec<String> = if self.list_colors {
            BasicColor::ALL
                .into_iter()
                .map(|color| crate::of(color.name()).color(color).render())
                .collect()
        } else {
            let styled = match (&self.theme, &self.style) {
                (Some(path), Some(name)) => {
                    let theme = Theme::from_file(path)?;
                    theme.validate()?;
                    theme.apply(name, &self.joined_text())?
                }
                _ => self.to_builder().render(),
            };
            vec![styled]
        };

        if plain {
            return Ok(lines
                .iter()
                .map(|line| ansi::strip(line).into_owned())
                .collect());
        }
        Ok(lines)
    }
}

fn rgb_from_components(components: &[u8]) -> Option<Rgb> {
    match components {
        [r, g, b] => Some(Rgb::new(*r, *g, *b)),
        _ => None,
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_component_count("--rgb", &self.rgb, 3)?;
        validate_component_count("--bg-rgb", &self.bg_rgb, 3)?;

        if self.style.is_some() && self.theme.is_none() {
            return Err(JanisError::ConfigValidationError {
                field: "--style".to_string(),
                message: "--style requires --theme".to_string(),
            });
        }

        if self.theme.is_some() && self.style.is_none() {
            return Err(JanisError::ConfigValidationError {
                field: "--theme".to_string(),
                message: "--theme requires --style".to_string(),
            });
        }

        if self.text.is_empty() && !self.list_colors {
            return Err(JanisError::ConfigValidationError {
                field: "text".to_string(),
                message: "no text given".to_string(),
            });
        }

        Ok(())
    }
}
