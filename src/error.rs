use thiserror::Error;

pub type ScatterResult<T> = Result<T, ScatterError>;

#[derive(Debug, Error)]
pub enum ScatterError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: f64, height: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("dataset contains no usable records")]
    EmptyDataset,

    #[error("malformed record at index {index}: {reason}")]
    MalformedRecord { index: usize, reason: String },

    #[error("dataset load failed: {0}")]
    Load(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
