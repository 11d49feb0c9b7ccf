use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("storage read failed for {key}: {message}")]
    Read { key: String, message: String },
    #[error("storage write failed for {key}: {message}")]
    Write { key: String, message: String },
}

#[derive(Debug, Error)]
pub enum CardError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("saved selections are not valid json: {0}")]
    SelectionsParse(#[source] serde_json::Error),
    #[error("word list is not a json array of strings: {0}")]
    WordsParse(#[source] serde_json::Error),
    #[error("cell {0} has no selection slot")]
    UnknownCell(usize),
}
