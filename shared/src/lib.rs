// shared/src/lib.rs

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("fetch failed: {0}")]
    Fetch(String),
    #[error("delete failed: {0}")]
    Delete(String),
    #[error("insert failed: {0}")]
    Insert(String),
    #[error("internal: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, Error>;

pub mod config;
