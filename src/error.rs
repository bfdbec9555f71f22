use thiserror::Error;

#[derive(Error, Debug)]
pub enum SmaError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid sample {token:?} on line {line}")]
    Parse { line: usize, token: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("WAV error: {0}")]
    Wav(#[from] hound::Error),
}

pub type Result<T> = std::result::Result<T, SmaError>;
