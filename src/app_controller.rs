/*!
 * Application controller for the batch pipelines.
 *
 * Owns the loaded configuration, constructs the configured translation
 * provider, and drives translate/fix runs for one language or the whole
 * supported set.
 */

use anyhow::{Context, Result, anyhow};
use log::{error, info, warn};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;

use crate::app_config::{Config, TranslationProvider};
use crate::file_utils::FileManager;
use crate::language::TargetLanguage;
use crate::pipeline::fixes;
use crate::pipeline::{PipelineOptions, TranslationPipeline};
use crate::providers::Translator;
use crate::providers::deepl::DeepL;
use crate::providers::libretranslate::LibreTranslate;

/// Controller for batch translate and fix runs
pub struct Controller {
    /// Loaded application configuration
    config: Config,
    /// Configured translation client
    translator: Arc<dyn Translator>,
}

impl Controller {
    /// Create a controller from configuration, constructing the provider
    pub fn with_config(config: Config) -> Result<Self> {
        let translator = build_translator(&config)?;
        Ok(Self { config, translator })
    }

    /// Create a controller with an explicit translator (used by tests)
    pub fn with_translator(config: Config, translator: Arc<dyn Translator>) -> Self {
        Self { config, translator }
    }

    fn source_path(&self) -> &Path {
        Path::new(&self.config.content_file)
    }

    fn data_dir(&self) -> &Path {
        Path::new(&self.config.data_dir)
    }

    fn pipeline_options(&self) -> PipelineOptions {
        let translation = &self.config.translation;
        PipelineOptions {
            source_language: self.config.source_language.clone(),
            retry_attempts: translation.retry_attempts,
            retry_delay: Duration::from_millis(translation.retry_delay_ms),
            item_delay: Duration::from_millis(translation.item_delay_ms),
            script_item_delay: Duration::from_millis(translation.script_item_delay_ms),
            checkpoint_interval: translation.checkpoint_interval,
        }
    }

    /// Run the translation pipeline for one language
    pub async fn translate_language(&self, language: TargetLanguage) -> Result<PathBuf> {
        if !FileManager::file_exists(self.source_path()) {
            return Err(anyhow!(
                "Source content file does not exist: {:?}",
                self.source_path()
            ));
        }

        let pipeline = TranslationPipeline::new(self.translator.clone(), self.pipeline_options());
        pipeline
            .run(self.source_path(), self.data_dir(), language)
            .await
    }

    /// Run the translation pipeline for every supported language
    ///
    /// A failure for one language is logged and does not stop the rest.
    pub async fn translate_all(&self) -> Result<()> {
        let pause = Duration::from_millis(self.config.translation.language_pause_ms);
        let mut completed = 0;

        for (index, language) in TargetLanguage::all().iter().enumerate() {
            if index > 0 {
                sleep(pause).await;
            }

            match self.translate_language(*language).await {
                Ok(path) => {
                    completed += 1;
                    info!("Finished {}: {:?}", language.display_name(), path);
                }
                Err(e) => {
                    error!("Translation to {} failed: {}", language.display_name(), e);
                }
            }
        }

        info!(
            "Translated {}/{} languages",
            completed,
            TargetLanguage::all().len()
        );
        Ok(())
    }

    /// Run the text-fix pass for one language
    pub async fn fix_language(&self, language: TargetLanguage) -> Result<()> {
        let path = FileManager::generate_output_path(
            self.source_path(),
            self.data_dir(),
            language.code(),
            "json",
        );

        if !FileManager::file_exists(&path) {
            warn!(
                "No translated document for {} at {:?}, nothing to fix",
                language.display_name(),
                path
            );
            return Ok(());
        }

        let changed = fixes::fix_file(&path, language)
            .with_context(|| format!("Fix pass failed for {:?}", path))?;

        if changed {
            info!("Fixed {} translations in {:?}", language.display_name(), path);
        } else {
            info!("{} translations already clean", language.display_name());
        }
        Ok(())
    }

    /// Run the text-fix pass over every translated document found
    pub async fn fix_all(&self) -> Result<()> {
        let files = fixes::discover_translated_files(self.data_dir());
        if files.is_empty() {
            warn!("No translated documents found under {:?}", self.data_dir());
            return Ok(());
        }

        let mut fixed = 0;
        for (language, path) in &files {
            match fixes::fix_file(path, *language) {
                Ok(true) => fixed += 1,
                Ok(false) => {}
                Err(e) => error!("Fix pass failed for {:?}: {}", path, e),
            }
        }

        info!("Fix pass complete: {}/{} files changed", fixed, files.len());
        Ok(())
    }
}

/// Construct the configured translation provider
fn build_translator(config: &Config) -> Result<Arc<dyn Translator>> {
    let translation = &config.translation;
    let provider_config = translation
        .get_active_provider_config()
        .ok_or_else(|| {
            anyhow!(
                "No provider config found for {}",
                translation.provider.display_name()
            )
        })?;

    let translator: Arc<dyn Translator> = match translation.provider {
        TranslationProvider::LibreTranslate => Arc::new(LibreTranslate::new(
            provider_config.endpoint.clone(),
            provider_config.api_key.clone(),
            provider_config.timeout_secs,
        )),
        TranslationProvider::DeepL => Arc::new(DeepL::new(
            provider_config.endpoint.clone(),
            provider_config.api_key.clone(),
            provider_config.timeout_secs,
        )),
    };

    Ok(translator)
}
