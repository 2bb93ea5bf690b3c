use super::DataStore;
use crate::error::{Result, SproutError};
use crate::model::Plant;
use std::fs;
use std::path::PathBuf;

const STORE_FILENAME: &str = "plants.json";

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn store_file(&self) -> PathBuf {
        self.root.join(STORE_FILENAME)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(SproutError::Io)?;
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load_plants(&self) -> Result<Vec<Plant>> {
        let path = self.store_file();
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(_) => return Ok(Vec::new()),
        };
        // An unreadable or corrupt blob loads as "no plants" instead of
        // failing startup; the user can keep working and the next save
        // rewrites the file.
        Ok(serde_json::from_str(&content).unwrap_or_default())
    }

    fn save_plants(&mut self, plants: &[Plant]) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(plants).map_err(SproutError::Serialization)?;
        fs::write(self.store_file(), content).map_err(SproutError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_loads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nope"));
        assert!(store.load_plants().unwrap().is_empty());
    }

    #[test]
    fn corrupt_blob_loads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(STORE_FILENAME), "{not json!").unwrap();

        let store = FileStore::new(dir.path().to_path_buf());
        assert!(store.load_plants().unwrap().is_empty());
    }

    #[test]
    fn save_creates_the_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("deep").join("nested");

        let mut store = FileStore::new(root.clone());
        store.save_plants(&[]).unwrap();
        assert!(root.join(STORE_FILENAME).exists());
    }
}
