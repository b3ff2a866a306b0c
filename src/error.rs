use thiserror::Error;

pub type BridgeResult<T> = Result<T, BridgeError>;

#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Excel error: {0}")]
    Excel(String),

    #[error("Conversion error: {0}")]
    Convert(String),

    #[error("Field error: {0}")]
    Field(String),

    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),
}
