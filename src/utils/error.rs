use thiserror::Error;

#[derive(Error, Debug)]
pub enum JanisError {
    #[error("Invalid hexadecimal color format, expected #RGB or #RRGGBB. Got: {value}")]
    InvalidHexFormat { value: String },

    #[error("Invalid hexadecimal color value: {value}")]
    InvalidHexValue { value: String },

    #[error("Unknown color name: {name}")]
    UnknownColor { name: String },

    #[error("Style '{name}' is not defined in the theme")]
    UnknownStyle { name: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl JanisError {
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::InvalidHexFormat { .. } | Self::InvalidHexValue { .. } => {
                "Use a hex color such as #F0A or #FF00AA"
            }
            Self::UnknownColor { .. } => "Run with --list-colors to see the available color names",
            Self::UnknownStyle { .. } => "Check the [styles.<name>] tables in your theme file",
            Self::InvalidConfigValueError { .. } | Self::ConfigValidationError { .. } => {
                "Fix the reported field and try again"
            }
            Self::IoError(_) => "Make sure the file exists and is readable",
        }
    }
}

pub type Result<T> = std::result::Result<T, JanisError>;
