use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::store::ScoreStore;
use crate::error::ScoreStoreError;

/// Plain text score file: one integer per line, highest first.
#[derive(Debug, Clone)]
pub struct FileScoreStore {
    path: PathBuf,
}

impl FileScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileScoreStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parse(&self, content: &str) -> Result<Vec<u32>, ScoreStoreError> {
        content
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(i, line)| {
                line.trim().parse::<u32>().map_err(|_| ScoreStoreError::Parse {
                    path: self.path.clone(),
                    line: i + 1,
                    value: line.to_string(),
                })
            })
            .collect()
    }
}

impl ScoreStore for FileScoreStore {
    fn load(&self) -> Result<Vec<u32>, ScoreStoreError> {
        match fs::read_to_string(&self.path) {
            Ok(content) => self.parse(&content),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(ScoreStoreError::Read {
                path: self.path.clone(),
                source: e,
            }),
        }
    }

    fn save(&mut self, scores: &[u32]) -> Result<(), ScoreStoreError> {
        let write_err = |source| ScoreStoreError::Write {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(write_err)?;
        }

        let mut content = String::new();
        for score in scores {
            content.push_str(&score.to_string());
            content.push('\n');
        }

        // Write beside the target, then rename over it
        let mut tmp_name = self.path.as_os_str().to_owned();
        tmp_name.push(".tmp");
        let tmp_path = PathBuf::from(tmp_name);
        fs::write(&tmp_path, content).map_err(write_err)?;
        fs::rename(&tmp_path, &self.path).map_err(write_err)?;
        Ok(())
    }
}
