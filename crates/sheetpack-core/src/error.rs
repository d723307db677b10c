use thiserror::Error;

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("Invalid dimensions: width and height must be greater than 0 (got {width}x{height})")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Unknown layout: {0}")]
    UnknownLayout(String),

    #[error("Layout `{0}` is not implemented")]
    Unimplemented(&'static str),
}

pub type Result<T> = std::result::Result<T, LayoutError>;
