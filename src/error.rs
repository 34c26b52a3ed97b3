use thiserror::Error;

/// Errors from resolving a color name through the palette.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PaletteError {
    #[error("unknown palette color '{0}'")]
    UnknownColor(String),
    #[error("invalid hex color '{0}' (expected #rrggbb or #rrggbbaa)")]
    InvalidHex(String),
}

/// Errors from loading or validating a [`crate::CanvasConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("setting '{field}': {source}")]
    Palette {
        field: &'static str,
        #[source]
        source: PaletteError,
    },
    #[error("scale bounds must satisfy 0 < scale_min <= scale_max (got {min}..{max})")]
    InvalidScaleBounds { min: f32, max: f32 },
    #[error("'{field}' must be finite and non-negative (got {value})")]
    InvalidValue { field: &'static str, value: f32 },
}

pub type ConfigResult<T> = Result<T, ConfigError>;
