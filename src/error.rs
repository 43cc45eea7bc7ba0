use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("No such file: {0}")]
    NotFound(String),

    #[error("Unsupported format: {0}. Use .png or .jpg")]
    UnsupportedFormat(String),

    #[error("Decode failed ({format}): {message}")]
    DecodeFailed {
        format: &'static str,
        message: String,
    },

    #[error("Write failed: {0}")]
    WriteFailed(String),
}
