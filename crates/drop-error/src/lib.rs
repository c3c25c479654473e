use thiserror::Error;

pub type Result<T> = std::result::Result<T, DropAreaError>;

#[derive(Error, Debug)]
pub enum DropAreaError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Directory read error: {0}")]
    DirectoryRead(String),
    #[error("File materialization error: {0}")]
    Materialize(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
