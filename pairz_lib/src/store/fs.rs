use super::RosterStore;
use crate::error::Result;
use crate::model::Roster;
use std::fs;
use std::path::{Path, PathBuf};

/// Single-file JSON store. The whole roster lives in one document; writes
/// replace it wholesale via a temp file in the same directory plus rename.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        // Same directory as the target so the rename stays on one filesystem.
        self.path.with_extension("tmp")
    }
}

impl RosterStore for JsonFileStore {
    fn load(&self) -> Roster {
        let Ok(content) = fs::read_to_string(&self.path) else {
            return Roster::new();
        };
        serde_json::from_str(&content).unwrap_or_default()
    }

    fn save(&self, roster: &Roster) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir)?;
            }
        }

        let content = serde_json::to_string_pretty(roster)?;

        let tmp = self.tmp_path();
        fs::write(&tmp, content)?;
        fs::rename(&tmp, &self.path)?;

        Ok(())
    }
}
