use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Durable home of the best score.
pub trait ScoreStore {
    /// Stored best score. A store that has never been written yields 0.
    fn load(&mut self) -> Result<u32>;
    fn save(&mut self, best: u32) -> Result<()>;
}

/// Best score as a bare decimal integer in a text file.
#[derive(Debug, Clone)]
pub struct FileScoreStore {
    path: PathBuf,
}

impl FileScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScoreStore for FileScoreStore {
    fn load(&mut self) -> Result<u32> {
        match fs::read_to_string(&self.path) {
            Ok(text) => text
                .trim()
                .parse::<u32>()
                .with_context(|| format!("invalid best score in '{}'", self.path.display())),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(0),
            Err(err) => Err(err)
                .with_context(|| format!("failed to read best score '{}'", self.path.display())),
        }
    }

    fn save(&mut self, best: u32) -> Result<()> {
        fs::write(&self.path, best.to_string())
            .with_context(|| format!("failed to write best score '{}'", self.path.display()))
    }
}

/// In-process store, for headless sessions and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStore {
    pub value: Option<u32>,
    pub writes: u32,
}

impl MemoryScoreStore {
    pub fn with_best(best: u32) -> Self {
        Self {
            value: Some(best),
            writes: 0,
        }
    }
}

impl ScoreStore for MemoryScoreStore {
    fn load(&mut self) -> Result<u32> {
        Ok(self.value.unwrap_or(0))
    }

    fn save(&mut self, best: u32) -> Result<()> {
        self.value = Some(best);
        self.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "flappy_score_store_{}_{}.txt",
            std::process::id(),
            name
        ));
        let _ = fs::remove_file(&path);
        path
    }

    #[test]
    fn test_missing_file_is_zero() {
        let mut store = FileScoreStore::new(temp_path("missing"));
        assert_eq!(store.load().unwrap(), 0);
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_path("save_then_load");
        let mut store = FileScoreStore::new(&path);
        store.save(12).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "12");
        assert_eq!(store.load().unwrap(), 12);

        store.save(3).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "3");
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_tolerates_surrounding_whitespace() {
        let path = temp_path("whitespace");
        fs::write(&path, " 42\n").unwrap();
        assert_eq!(FileScoreStore::new(&path).load().unwrap(), 42);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_garbage_is_an_error() {
        let path = temp_path("garbage");
        fs::write(&path, "not a number").unwrap();
        assert!(FileScoreStore::new(&path).load().is_err());
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryScoreStore::default();
        assert_eq!(store.load().unwrap(), 0);
        store.save(9).unwrap();
        assert_eq!(store.load().unwrap(), 9);
        assert_eq!(store.writes, 1);
    }
}
