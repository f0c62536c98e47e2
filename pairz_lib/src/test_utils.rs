use crate::store::fs::JsonFileStore;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    // Kept so the directory outlives the store.
    pub _temp_dir: TempDir,
    pub store: JsonFileStore,
    pub data_file: PathBuf,
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let data_file = temp_dir.path().join("pairz.json");
        let store = JsonFileStore::new(&data_file);
        Self {
            _temp_dir: temp_dir,
            store,
            data_file,
        }
    }
}
