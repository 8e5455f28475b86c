use crate::core::ansi::RESET;
use std::fmt;

/// A reusable text style. Applying it wraps text in the style's escape
/// sequences and resets formatting afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Style {
    prefix: String,
}

impl Style {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn apply(&self, text: &str) -> String {
        let mut styled = String::with_capacity(self.prefix.len() + text.len() + RESET.len());
        styled.push_str(&self.prefix);
        styled.push_str(text);
        styled.push_str(RESET);
        styled
    }

    /// Lazily styled value for use in `format!`/`println!`.
    pub fn paint<T: fmt::Display>(&self, value: T) -> Painted<'_, T> {
        Painted { style: self, value }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// True when the style carries no color or attribute.
    pub fn is_plain(&self) -> bool {
        self.prefix.is_empty()
    }
}

pub struct Painted<'a, T> {
    style: &'a Style,
    value: T,
}

impl<T: fmt::Display> fmt::Display for Painted<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.style.prefix, self.value, RESET)
    }
}
