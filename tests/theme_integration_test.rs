use anyhow::Result;
use janis::utils::validation::Validate;
use janis::{BasicColor, JanisError, Theme};
use tempfile::TempDir;

const THEME: &str = r##"
[theme]
name = "solarized"
description = "A few solarized accents"

[styles.error]
color = "bright_red"
bold = true

[styles.accent]
hex = "#2AA198"
bg_rgb = [0, 43, 54]

[styles.muted]
rgb = [88, 110, 117]
dim = true
italic = true
"##;

#[test]
fn test_theme_file_end_to_end() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("solarized.toml");
    std::fs::write(&path, THEME)?;

    let theme = Theme::from_file(&path)?;
    theme.validate()?;

    assert_eq!(theme.theme.name, "solarized");
    assert_eq!(
        theme.names().collect::<Vec<_>>(),
        vec!["accent", "error", "muted"]
    );

    assert_eq!(
        theme.apply("error", "failed")?,
        "\u{1b}[91m\u{1b}[1mfailed\u{1b}[0m"
    );
    assert_eq!(
        theme.apply("muted", "hint")?,
        "\u{1b}[38;2;88;110;117m\u{1b}[2m\u{1b}[3mhint\u{1b}[0m"
    );

    Ok(())
}

#[test]
fn test_theme_style_matches_builder() -> Result<()> {
    let theme = Theme::from_toml_str(THEME)?;

    let from_theme = theme.style("error")?;
    let from_builder = janis::style()
        .color(BasicColor::BrightRed)
        .bold()
        .build();

    assert_eq!(from_theme, from_builder);
    Ok(())
}

#[test]
fn test_theme_spec_can_be_extended() -> Result<()> {
    let theme = Theme::from_toml_str(THEME)?;

    let style = theme.spec("accent")?.to_builder().underlined().build();
    assert_eq!(
        style.prefix(),
        "\u{1b}[38;2;42;161;152m\u{1b}[48;2;0;43;54m\u{1b}[4m"
    );
    Ok(())
}

#[test]
fn test_unknown_style_in_theme() -> Result<()> {
    let theme = Theme::from_toml_str(THEME)?;

    let err = theme.apply("nope", "x").unwrap_err();
    assert!(matches!(err, JanisError::UnknownStyle { ref name } if name == "nope"));
    assert!(err.recovery_suggestion().contains("[styles.<name>]"));
    Ok(())
}

#[test]
fn test_unknown_field_is_rejected() {
    let content = r#"
[theme]
name = "typo"

[styles.x]
bolt = true
"#;
    assert!(Theme::from_toml_str(content).is_err());
}
