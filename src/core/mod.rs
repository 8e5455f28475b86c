pub mod ansi;
pub mod builder;
pub mod factory;
pub mod style;

pub use crate::domain::model::{BasicColor, Rgb, StyleConfig};
pub use crate::utils::error::Result;
