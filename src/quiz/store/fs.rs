use super::Persistence;
use crate::error::{QuizError, Result};
use crate::model::QuizRecord;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Stores the whole collection as a JSON array of `{question, answer}` objects in one file.
pub struct JsonFile {
    path: PathBuf,
}

impl JsonFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(QuizError::Io)?;
            }
        }
        Ok(())
    }
}

impl Persistence for JsonFile {
    fn read(&self) -> Result<Option<Vec<QuizRecord>>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(QuizError::Io(e)),
        };
        let records: Vec<QuizRecord> =
            serde_json::from_str(&content).map_err(QuizError::Serialization)?;
        tracing::debug!(path = %self.path.display(), "read store file");
        Ok(Some(records))
    }

    fn write(&self, records: &[QuizRecord]) -> Result<()> {
        self.ensure_parent()?;
        let content = serde_json::to_string_pretty(records).map_err(QuizError::Serialization)?;

        // Write to a sibling temp file, then rename over the store.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, content).map_err(QuizError::Io)?;
        fs::rename(&tmp, &self.path).map_err(QuizError::Io)?;
        tracing::debug!(path = %self.path.display(), "wrote store file");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::seed_records;
    use crate::store::QuizStore;
    use tempfile::TempDir;

    #[test]
    fn missing_file_reads_as_none() {
        let dir = TempDir::new().unwrap();
        let file = JsonFile::new(dir.path().join("quizzes.json"));
        assert!(file.read().unwrap().is_none());
    }

    #[test]
    fn first_open_creates_file_with_seed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("quizzes.json");

        let store = QuizStore::open(JsonFile::new(&path)).unwrap();
        assert_eq!(store.count(), 4);
        assert!(path.exists());

        let on_disk: Vec<QuizRecord> =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(on_disk, seed_records());
    }

    #[test]
    fn roundtrip_preserves_order() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("quizzes.json");

        let mut store = QuizStore::open(JsonFile::new(&path)).unwrap();
        store.add("Capital de Grecia", "Atenas").unwrap();
        store.delete_by_index(0).unwrap();
        let expected = store.get_all();

        let reopened = QuizStore::open(JsonFile::new(&path)).unwrap();
        assert_eq!(reopened.get_all(), expected);
        assert!(!dir.path().join("quizzes.json.tmp").exists());
    }

    #[test]
    fn reads_plain_json_array() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("quizzes.json");
        fs::write(&path, r#"[{"question":"2+2","answer":"4"}]"#).unwrap();

        let records = JsonFile::new(&path).read().unwrap().unwrap();
        assert_eq!(records, vec![QuizRecord::new("2+2", "4")]);
    }

    #[test]
    fn corrupt_file_is_fatal() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("quizzes.json");
        fs::write(&path, "not json").unwrap();

        let err = QuizStore::open(JsonFile::new(&path)).err().unwrap();
        assert!(matches!(err, QuizError::Serialization(_)));
        assert!(err.is_fatal());
    }
}
