use crate::domain::errors::ModelError;
use crate::domain::ml::ModelArtifact;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Reads and writes the single model artifact file.
pub struct ModelStore {
    file_path: PathBuf,
}

impl ModelStore {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Loads the artifact.
    ///
    /// A missing file is `Ok(None)`. A file that exists but cannot be read,
    /// parsed or used with the current feature layout is an error.
    pub fn load(&self) -> Result<Option<ModelArtifact>, ModelError> {
        let bytes = match fs::read(&self.file_path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No model artifact at {:?}", self.file_path);
                return Ok(None);
            }
            Err(e) => return Err(self.io_error(e)),
        };

        let artifact: ModelArtifact =
            serde_json::from_slice(&bytes).map_err(|e| ModelError::CorruptArtifact {
                path: self.file_path.clone(),
                reason: e.to_string(),
            })?;

        artifact
            .check_compatible()
            .map_err(|reason| ModelError::IncompatibleArtifact {
                path: self.file_path.clone(),
                reason,
            })?;

        info!("Loaded model artifact from {:?}", self.file_path);
        Ok(Some(artifact))
    }

    pub fn save(&self, artifact: &ModelArtifact) -> Result<(), ModelError> {
        if let Some(parent) = self.file_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
            }
        }

        let content =
            serde_json::to_vec_pretty(artifact).map_err(|e| ModelError::CorruptArtifact {
                path: self.file_path.clone(),
                reason: format!("serialization failed: {}", e),
            })?;

        // Atomic write: write to temp file then rename
        let temp_path = self.file_path.with_extension("tmp");
        fs::write(&temp_path, content).map_err(|e| self.io_error(e))?;
        fs::rename(&temp_path, &self.file_path).map_err(|e| self.io_error(e))?;

        info!("Saved model artifact to {:?}", self.file_path);
        Ok(())
    }

    fn io_error(&self, source: std::io::Error) -> ModelError {
        ModelError::Io {
            path: self.file_path.clone(),
            source,
        }
    }
}
