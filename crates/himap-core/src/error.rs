use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Dataset unavailable: {0}")]
    Dataset(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Map widget failed: {0}")]
    Widget(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(e: figment::Error) -> Self { Error::InvalidConfig(e.to_string()) }
}
