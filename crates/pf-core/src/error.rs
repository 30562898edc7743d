use thiserror::Error;

/// Errors originating from the core rendering stages.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Invalid width/height dimensions.
    #[error("invalid dimensions: {width}×{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },
}
