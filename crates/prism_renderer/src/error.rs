//! Errors raised while building scene components.

use thiserror::Error;

/// Errors that can occur when constructing renderable components.
///
/// Rendering itself never fails; these are raised up front so degenerate
/// input is rejected before it can turn into NaN pixels.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("Invalid colorizer: {0}")]
    InvalidColorizer(String),

    #[error("Invalid camera configuration: {0}")]
    InvalidCamera(String),
}

/// Result type for renderer construction.
pub type RenderResult<T> = Result<T, RenderError>;
