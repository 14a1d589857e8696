use crate::error::{QuizError, Result};
use crate::model::Scope;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

pub const STORE_FILENAME: &str = "quizzes.json";

/// Overrides the user-wide data directory.
pub const GLOBAL_DATA_ENV: &str = "QUIZ_GLOBAL_DATA";

/// Where quiz stores live for each scope.
#[derive(Debug, Clone)]
pub struct QuizPaths {
    pub project: PathBuf,
    pub global: Option<PathBuf>,
}

impl QuizPaths {
    pub fn new(project: PathBuf, global: Option<PathBuf>) -> Self {
        Self { project, global }
    }

    /// Project scope is the current directory; global scope is `$QUIZ_GLOBAL_DATA` or the
    /// platform data directory.
    pub fn discover() -> Self {
        let project = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        let global = std::env::var_os(GLOBAL_DATA_ENV)
            .map(PathBuf::from)
            .or_else(|| {
                ProjectDirs::from("com", "quizcli", "quiz").map(|d| d.data_dir().to_path_buf())
            });
        Self::new(project, global)
    }

    pub fn scope_dir(&self, scope: Scope) -> Result<PathBuf> {
        match scope {
            Scope::Project => Ok(self.project.clone()),
            Scope::Global => self
                .global
                .clone()
                .ok_or_else(|| QuizError::Store("Global scope is not available".to_string())),
        }
    }

    /// The store file to use. An explicit path wins over scope resolution.
    pub fn store_file(&self, scope: Scope, explicit: Option<&Path>) -> Result<PathBuf> {
        match explicit {
            Some(path) => Ok(path.to_path_buf()),
            None => Ok(self.scope_dir(scope)?.join(STORE_FILENAME)),
        }
    }
}
