/*!
 * The checkpointed translation pipeline.
 *
 * For a target language, produces a complete translated copy of the content
 * document: every translatable text field goes through the external
 * translator while identifiers, ranks, image lists and reference links are
 * copied unchanged. The run is sequential and sleep-paced, checkpoints
 * progress after each section (and periodically inside the scripts section),
 * and resumes from the snapshot after an interruption.
 */

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info, warn};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;

use crate::content::ContentDocument;
use crate::file_utils::FileManager;
use crate::language::TargetLanguage;
use crate::pipeline::progress::{RunLock, TranslationProgress, hash_file};
use crate::providers::Translator;

/// Tunable pipeline behavior
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// Source language code of the canonical document
    pub source_language: String,
    /// Attempts per field before falling back to the source text
    pub retry_attempts: u32,
    /// Delay between retry attempts
    pub retry_delay: Duration,
    /// Pacing delay after each visual style or hook
    pub item_delay: Duration,
    /// Pacing delay after each script
    pub script_item_delay: Duration,
    /// Checkpoint interval within the scripts section
    pub checkpoint_interval: usize,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            source_language: "en".to_string(),
            retry_attempts: 3,
            retry_delay: Duration::from_secs(2),
            item_delay: Duration::from_millis(100),
            script_item_delay: Duration::from_millis(50),
            checkpoint_interval: 50,
        }
    }
}

/// The translation pipeline
pub struct TranslationPipeline {
    /// External translation client
    translator: Arc<dyn Translator>,
    /// Pipeline behavior options
    options: PipelineOptions,
}

impl TranslationPipeline {
    /// Create a pipeline with the given translator and options
    pub fn new(translator: Arc<dyn Translator>, options: PipelineOptions) -> Self {
        Self { translator, options }
    }

    /// Translate the source document into the given language
    ///
    /// Returns the path of the written output file. Holds the per-language
    /// run lock for the whole call; a concurrent run for the same language
    /// fails fast instead of corrupting the shared snapshot.
    pub async fn run(
        &self,
        source_path: &Path,
        output_dir: &Path,
        language: TargetLanguage,
    ) -> Result<PathBuf> {
        FileManager::ensure_dir(output_dir)?;
        let _lock = RunLock::acquire(output_dir, language)?;

        let source = ContentDocument::load(source_path)?;
        let source_hash = hash_file(source_path)?;

        let mut progress = match TranslationProgress::load(output_dir, language)? {
            Some(snapshot) if snapshot.source_hash == source_hash => {
                info!(
                    "Resuming {} translation ({}/{}/{} records done)",
                    language.display_name(),
                    snapshot.visual_styles.len(),
                    snapshot.hooks.len(),
                    snapshot.scripts.len()
                );
                snapshot
            }
            Some(_) => {
                warn!(
                    "Source document changed since the last {} run, starting over",
                    language.display_name()
                );
                TranslationProgress::new(source_hash)
            }
            None => TranslationProgress::new(source_hash),
        };

        info!(
            "Translating {} records to {} via {}",
            source.total_records(),
            language.display_name(),
            self.translator.name()
        );

        self.translate_visual_styles(&source, &mut progress, language).await;
        progress.save(output_dir, language)?;

        self.translate_hooks(&source, &mut progress, language).await;
        progress.save(output_dir, language)?;

        self.translate_scripts(&source, &mut progress, output_dir, language).await?;
        progress.save(output_dir, language)?;

        let output_path =
            FileManager::generate_output_path(source_path, output_dir, language.code(), "json");
        FileManager::write_json_atomic(&output_path, &progress.clone().into_document())
            .with_context(|| format!("Failed to write translated document: {:?}", output_path))?;

        // Snapshot removal is the completion signal
        TranslationProgress::delete(output_dir, language)?;

        info!(
            "{} translation complete: {:?}",
            language.display_name(),
            output_path
        );
        Ok(output_path)
    }

    async fn translate_visual_styles(
        &self,
        source: &ContentDocument,
        progress: &mut TranslationProgress,
        language: TargetLanguage,
    ) {
        let total = source.visual_styles.len();
        let start = progress.visual_styles.len().min(total);
        if start >= total {
            debug!("Visual styles already translated, skipping");
            return;
        }

        let pb = section_progress_bar(total, start, "visual styles");
        for style in &source.visual_styles[start..] {
            let mut translated = style.clone();
            translated.title = self.translate_field(&style.title, language).await;
            translated.info = self.translate_optional(&style.info, language).await;
            progress.visual_styles.push(translated);
            pb.inc(1);
            sleep(self.options.item_delay).await;
        }
        pb.finish_and_clear();
    }

    async fn translate_hooks(
        &self,
        source: &ContentDocument,
        progress: &mut TranslationProgress,
        language: TargetLanguage,
    ) {
        let total = source.hooks.len();
        let start = progress.hooks.len().min(total);
        if start >= total {
            debug!("Hooks already translated, skipping");
            return;
        }

        let pb = section_progress_bar(total, start, "hooks");
        for hook in &source.hooks[start..] {
            let mut translated = hook.clone();
            translated.idea = self.translate_field(&hook.idea, language).await;
            translated.notes = self.translate_optional(&hook.notes, language).await;
            progress.hooks.push(translated);
            pb.inc(1);
            sleep(self.options.item_delay).await;
        }
        pb.finish_and_clear();
    }

    async fn translate_scripts(
        &self,
        source: &ContentDocument,
        progress: &mut TranslationProgress,
        output_dir: &Path,
        language: TargetLanguage,
    ) -> Result<()> {
        let total = source.scripts.len();
        let start = progress.scripts.len().min(total);
        if start >= total {
            debug!("Scripts already translated, skipping");
            return Ok(());
        }

        let pb = section_progress_bar(total, start, "scripts");
        for (index, script) in source.scripts.iter().enumerate().skip(start) {
            let mut translated = script.clone();
            translated.paragraph1 = self.translate_field(&script.paragraph1, language).await;
            translated.paragraph2 = self.translate_field(&script.paragraph2, language).await;
            translated.notes = self.translate_optional(&script.notes, language).await;
            progress.scripts.push(translated);
            pb.inc(1);
            sleep(self.options.script_item_delay).await;

            // Scripts are the largest section; bound the work a crash can lose
            if (index + 1) % self.options.checkpoint_interval == 0 {
                progress.save(output_dir, language)?;
            }
        }
        pb.finish_and_clear();
        Ok(())
    }

    /// Translate one text field, degrading to the source text on failure
    async fn translate_field(&self, text: &str, language: TargetLanguage) -> String {
        if text.is_empty() {
            return text.to_string();
        }

        for attempt in 1..=self.options.retry_attempts {
            match self
                .translator
                .translate(text, &self.options.source_language, language.code())
                .await
            {
                Ok(translated) => return translated,
                Err(e) if attempt < self.options.retry_attempts => {
                    debug!(
                        "Retry {}/{} after provider error: {}",
                        attempt, self.options.retry_attempts, e
                    );
                    sleep(self.options.retry_delay).await;
                }
                Err(e) => {
                    warn!(
                        "Translation failed after {} attempts, keeping source text: {}",
                        self.options.retry_attempts, e
                    );
                }
            }
        }

        text.to_string()
    }

    /// Translate an optional field; absent and empty values pass through
    async fn translate_optional(
        &self,
        text: &Option<String>,
        language: TargetLanguage,
    ) -> Option<String> {
        match text {
            Some(value) if !value.is_empty() => {
                Some(self.translate_field(value, language).await)
            }
            other => other.clone(),
        }
    }
}

/// Build the per-section progress bar, pre-advanced past resumed records
fn section_progress_bar(total: usize, done: usize, label: &str) -> ProgressBar {
    let pb = ProgressBar::new(total as u64);
    let style = ProgressStyle::default_bar()
        .template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({percent}%) {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    pb.set_style(style);
    pb.set_message(label.to_string());
    pb.set_position(done as u64);
    pb
}
