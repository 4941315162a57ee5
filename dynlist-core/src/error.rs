//! Error types

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::item::ItemId;

/// Failures of [`ItemStore`](crate::ItemStore) operations
///
/// Both are recoverable: `Empty` is shown to the user as a warning banner,
/// `NotFound` is logged and ignored.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("there are no items to remove")]
    Empty,

    #[error("no item with id `{0}`")]
    NotFound(ItemId),
}

/// Failures while loading or validating a [`Config`](crate::Config)
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid key `{key}` bound to `{command}`")]
    InvalidKey { command: String, key: String },

    #[error("key `{key}` is bound to both `{first}` and `{second}`")]
    DuplicateKey {
        key: String,
        first: String,
        second: String,
    },

    #[error("id prefix must not be empty")]
    EmptyPrefix,
}
