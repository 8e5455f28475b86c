//! Conversion of a [`StyleConfig`] into SGR escape sequences.

use crate::domain::model::StyleConfig;
use regex::Regex;
use std::borrow::Cow;
use std::fmt::Write;
use std::sync::OnceLock;

pub const RESET: &str = "\u{1b}[0m";

/// Foreground, then background, then attributes. An empty config yields an
/// empty prefix.
pub fn prefix(config: &StyleConfig) -> String {
    let mut prefix = String::new();
    push_foreground(&mut prefix, config);
    push_background(&mut prefix, config);
    push_attributes(&mut prefix, config);
    tracing::trace!(prefix = ?prefix, "generated ansi prefix");
    prefix
}

fn push_foreground(out: &mut String, config: &StyleConfig) {
    match (config.basic_color, config.rgb_color) {
        (Some(color), rgb) => {
            if rgb.is_some() {
                tracing::warn!(%color, "basic foreground color overrides the rgb one");
            }
            out.push_str(&color.ansi_code(false));
        }
        (None, Some(rgb)) => {
            let _ = write!(out, "\u{1b}[38;2;{};{};{}m", rgb.r, rgb.g, rgb.b);
        }
        (None, None) => {}
    }
}

fn push_background(out: &mut String, config: &StyleConfig) {
    match (config.bg_basic_color, config.bg_rgb_color) {
        (Some(color), rgb) => {
            if rgb.is_some() {
                tracing::warn!(%color, "basic background color overrides the rgb one");
            }
            out.push_str(&color.ansi_code(true));
        }
        (None, Some(rgb)) => {
            let _ = write!(out, "\u{1b}[48;2;{};{};{}m", rgb.r, rgb.g, rgb.b);
        }
        (None, None) => {}
    }
}

fn push_attributes(out: &mut String, config: &StyleConfig) {
    let attributes = [
        (config.bold, 1),
        (config.dim, 2),
        (config.italic, 3),
        (config.underlined, 4),
        (config.slow_blink, 5),
        (config.rapid_blink, 6),
        (config.reverse, 7),
        (config.hide, 8),
    ];

    for (enabled, code) in attributes {
        if enabled {
            let _ = write!(out, "\u{1b}[{}m", code);
        }
    }
}

fn sgr_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\x1b\[[0-9;]*m").expect("SGR pattern is valid"))
}

/// Removes SGR sequences, leaving the visible text.
pub fn strip(text: &str) -> Cow<'_, str> {
    sgr_pattern().replace_all(text, "")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{BasicColor, Rgb};

    #[test]
    fn test_empty_style_config() {
        assert_eq!(prefix(&StyleConfig::default()), "");
    }

    #[test]
    fn test_red_text_color() {
        let config = StyleConfig {
            basic_color: Some(BasicColor::Red),
            ..Default::default()
        };
        assert_eq!(prefix(&config), "\u{1b}[31m");
    }

    #[test]
    fn test_green_background_color() {
        let config = StyleConfig {
            bg_basic_color: Some(BasicColor::Green),
            ..Default::default()
        };
        assert_eq!(prefix(&config), "\u{1b}[42m");
    }

    #[test]
    fn test_rgb_colors() {
        let config = StyleConfig {
            rgb_color: Some(Rgb::new(255, 100, 50)),
            ..Default::default()
        };
        assert_eq!(prefix(&config), "\u{1b}[38;2;255;100;50m");

        let config = StyleConfig {
            bg_rgb_color: Some(Rgb::new(0, 150, 200)),
            ..Default::default()
        };
        assert_eq!(prefix(&config), "\u{1b}[48;2;0;150;200m");
    }

    #[test]
    fn test_basic_color_takes_precedence_over_rgb() {
        let config = StyleConfig {
            basic_color: Some(BasicColor::Blue),
            rgb_color: Some(Rgb::new(0, 0, 255)),
            bg_basic_color: Some(BasicColor::Yellow),
            bg_rgb_color: Some(Rgb::new(255, 255, 0)),
            ..Default::default()
        };
        assert_eq!(prefix(&config), "\u{1b}[34m\u{1b}[43m");
    }

    #[test]
    fn test_each_attribute() {
        let cases: [(fn(&mut StyleConfig), &str); 8] = [
            (|c| c.bold = true, "\u{1b}[1m"),
            (|c| c.dim = true, "\u{1b}[2m"),
            (|c| c.italic = true, "\u{1b}[3m"),
            (|c| c.underlined = true, "\u{1b}[4m"),
            (|c| c.slow_blink = true, "\u{1b}[5m"),
            (|c| c.rapid_blink = true, "\u{1b}[6m"),
            (|c| c.reverse = true, "\u{1b}[7m"),
            (|c| c.hide = true, "\u{1b}[8m"),
        ];

        for (enable, expected) in cases {
            let mut config = StyleConfig::default();
            enable(&mut config);
            assert_eq!(prefix(&config), expected);
        }
    }

    #[test]
    fn test_multiple_attributes() {
        let config = StyleConfig {
            basic_color: Some(BasicColor::Cyan),
            bg_rgb_color: Some(Rgb::new(0, 150, 200)),
            bold: true,
            italic: true,
            reverse: true,
            ..Default::default()
        };
        assert_eq!(
            prefix(&config),
            "\u{1b}[36m\u{1b}[48;2;0;150;200m\u{1b}[1m\u{1b}[3m\u{1b}[7m"
        );
    }

    #[test]
    fn test_strip() {
        let styled = "\u{1b}[36m\u{1b}[48;2;0;150;200mhello\u{1b}[0m world";
        assert_eq!(strip(styled), "hello world");
        assert!(matches!(strip("plain"), Cow::Borrowed("plain")));
    }
}
