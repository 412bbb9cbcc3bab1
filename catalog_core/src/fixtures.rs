//! Whole-file reads of fixture JSON.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FixtureReadError {
    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

fn read_contents(path: &Path) -> Result<String, FixtureReadError> {
    fs::read_to_string(path).map_err(|source| FixtureReadError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads a fixture as untyped JSON, for structural checks.
pub fn read_json(path: &Path) -> Result<Value, FixtureReadError> {
    let contents = read_contents(path)?;
    serde_json::from_str(&contents).map_err(|source| FixtureReadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads a fixture straight into its record type.
pub fn read_typed<T: DeserializeOwned>(path: &Path) -> Result<T, FixtureReadError> {
    let contents = read_contents(path)?;
    serde_json::from_str(&contents).map_err(|source| FixtureReadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
