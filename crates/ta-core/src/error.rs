use thiserror::Error;

/// Rejected form-control input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("font size {0:?} is not a positive integer")]
    InvalidSize(String),
    #[error("font family is empty")]
    EmptyFont,
    #[error("colour is empty")]
    EmptyColor,
}

/// Invalid editor configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("canvas dimensions must be positive and finite, got {width}x{height}")]
    CanvasSize { width: f32, height: f32 },
    #[error("placement margins must be non-negative and finite, got {x}x{y}")]
    PlacementMargin { x: f32, y: f32 },
}
