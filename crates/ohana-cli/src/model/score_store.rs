use std::{io, path::PathBuf};

use ohana_engine::{ScoreStore, ScoreStoreError};
use serde::{Deserialize, Serialize};

use crate::util;

/// On-disk layout of the best-score file: a single keyed number.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
struct BestScoreRecord {
    #[serde(rename = "ohana-tetris-best", default)]
    best: u64,
}

/// Best score persisted as a small JSON file.
#[derive(Debug, Clone)]
pub struct JsonScoreStore {
    path: PathBuf,
}

impl JsonScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ScoreStore for JsonScoreStore {
    fn load(&mut self) -> Result<u64, ScoreStoreError> {
        match util::read_json_file::<BestScoreRecord, _>("best score", &self.path) {
            Ok(record) => Ok(record.best),
            Err(e) if is_not_found(&e) => Ok(0),
            Err(e) => Err(ScoreStoreError::new(format!("{e:#}"))),
        }
    }

    fn save(&mut self, score: u64) -> Result<(), ScoreStoreError> {
        let record = BestScoreRecord { best: score };
        util::write_json_file("best score", &self.path, &record)
            .map_err(|e| ScoreStoreError::new(format!("{e:#}")))
    }
}

fn is_not_found(e: &anyhow::Error) -> bool {
    e.downcast_ref::<io::Error>()
        .is_some_and(|e| e.kind() == io::ErrorKind::NotFound)
}
