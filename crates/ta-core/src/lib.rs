pub mod config;
pub mod error;
pub mod model;

pub use config::EditorConfig;
pub use error::{ConfigError, FormError};
pub use model::*;
