//! Fluent ANSI styling for terminal text.
//!
//! Style a single text right away:
//!
//! ```
//! use janis::BasicColor;
//!
//! let text = janis::of("Hello").color(BasicColor::Red).bold().render();
//! assert_eq!(text, "\u{1b}[31m\u{1b}[1mHello\u{1b}[0m");
//! ```
//!
//! or build a [`Style`] once and apply it to many texts:
//!
//! ```
//! # fn main() -> janis::Result<()> {
//! let warning = janis::style().hex("#FFA500")?.underlined().build();
//! println!("{}", warning.apply("careful"));
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::theme::{StyleSpec, Theme};
pub use crate::core::{
    ansi,
    builder::{Reusable, StyleBuilder, Text},
    factory::{of, style},
    style::{Painted, Style},
};
pub use crate::domain::model::{BasicColor, Rgb, StyleConfig};
pub use crate::utils::error::{JanisError, Result};
