use std::fs;
use std::path::PathBuf;

use tracing::debug;

use crate::core::RawRecord;
use crate::error::{ScatterError, ScatterResult};

use super::{DatasetSource, parse_dataset};

/// Reads the dataset from a local JSON file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDatasetSource {
    path: PathBuf,
}

impl FileDatasetSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DatasetSource for FileDatasetSource {
    fn load(&self) -> ScatterResult<Vec<RawRecord>> {
        debug!(path = %self.path.display(), "reading dataset file");
        let raw = fs::read_to_string(&self.path).map_err(|err| {
            ScatterError::Load(format!("failed to read `{}`: {err}", self.path.display()))
        })?;
        parse_dataset(&raw)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
