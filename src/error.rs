use std::io;
use std::path::PathBuf;
use thiserror::Error;
use vitae_export::{ExportError, ImportError};
use vitae_model::{ModelError, ValidationError};

use crate::persist::StoreError;
use crate::photo::PhotoError;

/// Failures of an operation on the live document.
#[derive(Error, Debug)]
pub enum ShellError {
    #[error("Theme '{0}' is not registered.")]
    MissingTheme(String),

    #[error("Export failed: {0}")]
    Export(#[from] ExportError),

    #[error("Import failed: {0}")]
    Import(#[from] ImportError),

    #[error("Photo rejected: {0}")]
    Photo(#[from] PhotoError),

    #[error("Bundled document is unusable: {0}")]
    Model(#[from] ModelError),

    #[error("Saving state failed: {0}")]
    Store(#[from] StoreError),

    #[error("Serializing state failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Cannot read '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Delivering '{filename}' failed: {source}")]
    Download {
        filename: String,
        #[source]
        source: io::Error,
    },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot read config file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Config file '{path}' is invalid: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Everything the command line can fail with.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Shell(#[from] ShellError),

    #[error("Cannot read '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot write '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("'{path}' is not valid JSON: {source}")]
    NotJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("'{path}' is not a CV document: {source}")]
    Invalid {
        path: PathBuf,
        #[source]
        source: ValidationError,
    },
}
