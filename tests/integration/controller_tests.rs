/*!
 * Controller-level tests driving the batch flows end to end
 */

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use tempfile::TempDir;

use hookline::app_config::Config;
use hookline::app_controller::Controller;
use hookline::content::ContentDocument;
use hookline::file_utils::FileManager;
use hookline::language::TargetLanguage;
use hookline::providers::mock::MockTranslator;

use crate::common;

/// Config pointing at a temp workspace, with all pacing waits disabled
fn test_config(dir: &Path) -> Config {
    let mut config = Config::default();
    config.content_file = dir.join("content.json").to_string_lossy().to_string();
    config.data_dir = dir.to_string_lossy().to_string();
    config.translation.retry_delay_ms = 1;
    config.translation.item_delay_ms = 0;
    config.translation.script_item_delay_ms = 0;
    config.translation.language_pause_ms = 0;
    config
}

fn setup() -> Result<(TempDir, Controller)> {
    let temp_dir = common::create_temp_dir()?;
    common::write_source_document(temp_dir.path(), &common::sample_document())?;

    let config = test_config(temp_dir.path());
    let controller = Controller::with_translator(config, Arc::new(MockTranslator::working()));
    Ok((temp_dir, controller))
}

/// Test a single-language run end to end through the controller
#[tokio::test]
async fn test_translateLanguage_shouldWriteOutputFile() -> Result<()> {
    let (temp_dir, controller) = setup()?;

    let output = controller.translate_language(TargetLanguage::German).await?;
    assert_eq!(output, temp_dir.path().join("content.de.json"));

    let translated = ContentDocument::load(&output)?;
    assert!(translated.hooks[0].idea.starts_with("[de] "));
    Ok(())
}

/// Test that a missing source file fails before any work starts
#[tokio::test]
async fn test_translateLanguage_withMissingSource_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let config = test_config(temp_dir.path());
    let controller = Controller::with_translator(config, Arc::new(MockTranslator::working()));

    let result = controller.translate_language(TargetLanguage::German).await;
    assert!(result.is_err());
    Ok(())
}

/// Test the whole-set run: one output file per supported language
#[tokio::test]
async fn test_translateAll_shouldCoverEveryLanguage() -> Result<()> {
    let (temp_dir, controller) = setup()?;

    controller.translate_all().await?;

    for language in TargetLanguage::all() {
        let path = temp_dir
            .path()
            .join(format!("content.{}.json", language.code()));
        assert!(path.exists(), "missing output for {}", language.code());
    }
    Ok(())
}

/// Test the fix pass through the controller
#[tokio::test]
async fn test_fixLanguage_shouldRewriteTranslatedFile() -> Result<()> {
    let (temp_dir, controller) = setup()?;

    let mut document = common::sample_document();
    document.hooks[0].idea = "tips from a tiktok employee".to_string();
    let path = temp_dir.path().join("content.de.json");
    FileManager::write_json(&path, &document)?;

    controller.fix_language(TargetLanguage::German).await?;

    let fixed: ContentDocument = FileManager::read_json(&path)?;
    assert_eq!(fixed.hooks[0].idea, "tips from a TikTok employee");
    Ok(())
}

/// Test that fixing a language without a translated file is a no-op
#[tokio::test]
async fn test_fixLanguage_withNoTranslatedFile_shouldSucceed() -> Result<()> {
    let (_temp_dir, controller) = setup()?;
    controller.fix_language(TargetLanguage::Korean).await?;
    Ok(())
}

/// Test fix-all over a mixed data directory
#[tokio::test]
async fn test_fixAll_shouldFixEveryDiscoveredFile() -> Result<()> {
    let (temp_dir, controller) = setup()?;

    let mut document = common::sample_document();
    document.scripts[0].paragraph2 = "tiktok rewards consistency".to_string();
    FileManager::write_json(temp_dir.path().join("content.de.json"), &document)?;
    FileManager::write_json(temp_dir.path().join("content.fr.json"), &document)?;

    controller.fix_all().await?;

    for code in ["de", "fr"] {
        let fixed: ContentDocument =
            FileManager::read_json(temp_dir.path().join(format!("content.{}.json", code)))?;
        assert_eq!(fixed.scripts[0].paragraph2, "TikTok rewards consistency");
    }
    Ok(())
}
