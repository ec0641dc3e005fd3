use thiserror::Error;

#[derive(Debug, Error)]
pub enum AcquisitionError {
    #[error("board id {0} is not supported; use -1 for the synthetic board")]
    UnsupportedBoard(i32),

    #[error("board session: {0}")]
    SessionState(&'static str),

    #[error("invalid psd input: {0}")]
    InvalidPsdInput(String),

    #[error("invalid band range [{low}, {high}]: {reason}")]
    InvalidBand {
        low: f64,
        high: f64,
        reason: &'static str,
    },

    #[error("channel count {requested} out of range 1..={available}")]
    ChannelCount { requested: usize, available: usize },

    #[error("not enough data: need {needed} samples, have {available}")]
    NotEnoughData { needed: usize, available: usize },

    #[error("invalid arguments: {0}")]
    Args(String),

    #[error("output error: {0}")]
    Io(#[from] std::io::Error),

    #[error("interrupted")]
    Interrupted,
}

pub type Result<T> = std::result::Result<T, AcquisitionError>;
