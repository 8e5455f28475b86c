use crate::core::builder::{Reusable, StyleBuilder, Text};

/// Starts styling `text`; finish with [`StyleBuilder::render`].
pub fn of(text: impl Into<String>) -> StyleBuilder<Text> {
    StyleBuilder::for_text(text)
}

/// Starts a reusable style; finish with [`StyleBuilder::build`].
pub fn style() -> StyleBuilder<Reusable> {
    StyleBuilder::new()
}
