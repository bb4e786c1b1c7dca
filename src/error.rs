use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("io error: {0}")]
    IO(#[from] std::io::Error),
    #[error("scan error: {message}")]
    Scan { message: String },
}

pub type Result<T> = std::result::Result<T, Error>;
