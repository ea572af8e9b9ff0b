use thiserror::Error;

pub type Result<T> = std::result::Result<T, IdfixError>;

#[derive(Debug, Error)]
pub enum IdfixError {
    #[error("Please provide a non-empty JSON input.")]
    EmptyInput,

    #[error("Invalid JSON: {0}")]
    Parse(String),

    #[error("JSON must contain a top-level 'objects' array.")]
    Schema,

    #[error("serialize error: {0}")]
    Serialize(String),

    #[error("config error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for IdfixError {
    fn from(e: serde_json::Error) -> Self {
        IdfixError::Parse(e.to_string())
    }
}
