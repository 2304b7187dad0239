/*!
 * Tests for progress snapshots and the per-language run lock
 */

use anyhow::Result;
use hookline::errors::PipelineError;
use hookline::language::TargetLanguage;
use hookline::pipeline::progress::{RunLock, TranslationProgress, hash_file};

use crate::common;

/// Test that a snapshot round-trips through disk
#[test]
fn test_progress_saveAndLoad_shouldRoundTrip() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let document = common::sample_document();

    let mut progress = TranslationProgress::new("hash123");
    progress.visual_styles = document.visual_styles.clone();
    progress.hooks = document.hooks[..1].to_vec();

    progress.save(temp_dir.path(), TargetLanguage::German)?;

    let loaded = TranslationProgress::load(temp_dir.path(), TargetLanguage::German)?
        .expect("Snapshot should exist");
    assert_eq!(loaded, progress);
    Ok(())
}

/// Test that loading without a snapshot yields None
#[test]
fn test_progress_load_withNoSnapshot_shouldReturnNone() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let loaded = TranslationProgress::load(temp_dir.path(), TargetLanguage::French)?;
    assert!(loaded.is_none());
    Ok(())
}

/// Test that snapshots are stored per language
#[test]
fn test_progress_save_shouldBePerLanguage() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;

    TranslationProgress::new("a").save(temp_dir.path(), TargetLanguage::German)?;

    assert!(TranslationProgress::load(temp_dir.path(), TargetLanguage::German)?.is_some());
    assert!(TranslationProgress::load(temp_dir.path(), TargetLanguage::Spanish)?.is_none());
    Ok(())
}

/// Test that delete removes the snapshot and tolerates absence
#[test]
fn test_progress_delete_shouldRemoveSnapshot() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;

    TranslationProgress::new("a").save(temp_dir.path(), TargetLanguage::German)?;
    TranslationProgress::delete(temp_dir.path(), TargetLanguage::German)?;
    assert!(TranslationProgress::load(temp_dir.path(), TargetLanguage::German)?.is_none());

    // Deleting again is a no-op
    TranslationProgress::delete(temp_dir.path(), TargetLanguage::German)?;
    Ok(())
}

/// Test that the finished snapshot converts into a plain document
#[test]
fn test_progress_intoDocument_shouldDropTheHash() {
    let document = common::sample_document();

    let mut progress = TranslationProgress::new("hash");
    progress.visual_styles = document.visual_styles.clone();
    progress.hooks = document.hooks.clone();
    progress.scripts = document.scripts.clone();

    assert_eq!(progress.into_document(), document);
}

/// Test that hashing is stable for identical content and differs otherwise
#[test]
fn test_hashFile_shouldDetectChanges() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path_a = temp_dir.path().join("a.json");
    let path_b = temp_dir.path().join("b.json");

    std::fs::write(&path_a, "same content")?;
    std::fs::write(&path_b, "same content")?;
    assert_eq!(hash_file(&path_a)?, hash_file(&path_b)?);

    std::fs::write(&path_b, "different content")?;
    assert_ne!(hash_file(&path_a)?, hash_file(&path_b)?);
    Ok(())
}

/// Test that the second lock acquisition for a language fails fast
#[test]
fn test_runLock_acquiredTwice_shouldFailFast() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;

    let _held = RunLock::acquire(temp_dir.path(), TargetLanguage::German)
        .expect("First acquisition should succeed");

    let second = RunLock::acquire(temp_dir.path(), TargetLanguage::German);
    match second {
        Err(PipelineError::AlreadyRunning { language, .. }) => assert_eq!(language, "de"),
        other => panic!("Expected AlreadyRunning, got {:?}", other),
    }
    Ok(())
}

/// Test that dropping the lock releases it for the next run
#[test]
fn test_runLock_afterDrop_shouldBeAcquirableAgain() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;

    {
        let _held = RunLock::acquire(temp_dir.path(), TargetLanguage::German)
            .expect("First acquisition should succeed");
    }

    assert!(RunLock::acquire(temp_dir.path(), TargetLanguage::German).is_ok());
    Ok(())
}

/// Test that locks for different languages are independent
#[test]
fn test_runLock_differentLanguages_shouldNotConflict() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;

    let _de = RunLock::acquire(temp_dir.path(), TargetLanguage::German)?;
    let _es = RunLock::acquire(temp_dir.path(), TargetLanguage::Spanish)?;
    Ok(())
}
