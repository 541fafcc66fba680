// src/infra/errors.rs — Error types for papertalk

use thiserror::Error;

use crate::backend::error::BackendError;
use crate::core::store::StoreError;

#[derive(Error, Debug)]
pub enum PaperTalkError {
    #[error(transparent)]
    Backend(#[from] BackendError),

    #[error(transparent)]
    Session(#[from] StoreError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
