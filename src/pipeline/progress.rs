/*!
 * Progress snapshots and the per-language run lock.
 *
 * A snapshot is a prefix of the translated document plus the hash of the
 * source it was produced from. Sections fill strictly in order (visual
 * styles, hooks, scripts), so resuming only needs per-section counts.
 * Snapshot deletion is the completion signal for a run.
 */

use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::content::{ContentDocument, Hook, Script, VisualStyle};
use crate::errors::PipelineError;
use crate::file_utils::FileManager;
use crate::language::TargetLanguage;

/// A partially translated document persisted between runs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TranslationProgress {
    /// SHA-256 of the source document this progress was built from
    pub source_hash: String,
    /// Translated visual styles so far (prefix of the source section)
    #[serde(rename = "visualStyles", default)]
    pub visual_styles: Vec<VisualStyle>,
    /// Translated hooks so far (prefix of the source section)
    #[serde(default)]
    pub hooks: Vec<Hook>,
    /// Translated scripts so far (prefix of the source section)
    #[serde(default)]
    pub scripts: Vec<Script>,
}

impl TranslationProgress {
    /// Start an empty snapshot for the given source
    pub fn new(source_hash: impl Into<String>) -> Self {
        Self {
            source_hash: source_hash.into(),
            visual_styles: Vec::new(),
            hooks: Vec::new(),
            scripts: Vec::new(),
        }
    }

    /// Snapshot location for a language under the given directory
    pub fn path(dir: &Path, language: TargetLanguage) -> PathBuf {
        dir.join(format!(".progress.{}.json", language.code()))
    }

    /// Load the snapshot for a language, if one exists
    pub fn load(dir: &Path, language: TargetLanguage) -> Result<Option<Self>> {
        let path = Self::path(dir, language);
        if !FileManager::file_exists(&path) {
            return Ok(None);
        }

        let progress: Self = FileManager::read_json(&path)
            .with_context(|| format!("Failed to load progress snapshot: {:?}", path))?;
        Ok(Some(progress))
    }

    /// Persist the snapshot for a language
    pub fn save(&self, dir: &Path, language: TargetLanguage) -> Result<()> {
        let path = Self::path(dir, language);
        FileManager::write_json_atomic(&path, self)
            .with_context(|| format!("Failed to save progress snapshot: {:?}", path))?;
        debug!(
            "Checkpoint saved for {}: {}/{}/{} records",
            language.code(),
            self.visual_styles.len(),
            self.hooks.len(),
            self.scripts.len()
        );
        Ok(())
    }

    /// Remove the snapshot for a language, signalling completion
    pub fn delete(dir: &Path, language: TargetLanguage) -> Result<()> {
        FileManager::remove_if_exists(Self::path(dir, language))
    }

    /// Convert the finished snapshot into the output document
    pub fn into_document(self) -> ContentDocument {
        ContentDocument {
            visual_styles: self.visual_styles,
            hooks: self.hooks,
            scripts: self.scripts,
        }
    }
}

/// Hash a source file for change detection between runs
pub fn hash_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let content = std::fs::read(&path)
        .with_context(|| format!("Failed to read file for hashing: {:?}", path.as_ref()))?;

    let mut hasher = Sha256::new();
    hasher.update(&content);
    Ok(format!("{:x}", hasher.finalize()))
}

/// Exclusive per-language lock held for the duration of a pipeline run
///
/// Two simultaneous runs for the same language would corrupt the shared
/// progress snapshot, so the second acquisition fails fast. The lock file is
/// removed on drop, including error paths.
#[derive(Debug)]
pub struct RunLock {
    /// Path of the held lock file
    path: PathBuf,
}

impl RunLock {
    /// Lock location for a language under the given directory
    pub fn path_for(dir: &Path, language: TargetLanguage) -> PathBuf {
        dir.join(format!(".progress.{}.lock", language.code()))
    }

    /// Acquire the lock, failing if another run already holds it
    pub fn acquire(dir: &Path, language: TargetLanguage) -> Result<Self, PipelineError> {
        let path = Self::path_for(dir, language);

        let result = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path);

        match result {
            Ok(mut file) => {
                // Record the owning pid for operator diagnostics
                let _ = writeln!(file, "{}", std::process::id());
                debug!("Acquired run lock: {:?}", path);
                Ok(Self { path })
            }
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
                Err(PipelineError::AlreadyRunning {
                    language: language.code().to_string(),
                    lock_path: path.to_string_lossy().to_string(),
                })
            }
            Err(e) => Err(PipelineError::File(format!(
                "Failed to create lock file {:?}: {}",
                path, e
            ))),
        }
    }
}

impl Drop for RunLock {
    fn drop(&mut self) {
        if let Err(e) = std::fs::remove_file(&self.path) {
            debug!("Failed to remove lock file {:?}: {}", self.path, e);
        }
    }
}
