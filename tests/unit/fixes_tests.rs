/*!
 * Tests for the text-fix pass
 */

use anyhow::Result;
use hookline::file_utils::FileManager;
use hookline::language::TargetLanguage;
use hookline::pipeline::fixes::{discover_translated_files, fix_document, fix_file, fix_text};

use crate::common;

/// Test a literal table replacement
#[test]
fn test_fixText_withKnownMistranslation_shouldReplace() {
    let fixed = fix_text("sie wollte den Tee verschütten", TargetLanguage::German);
    assert_eq!(fixed, "sie wollte den Klatsch ausplaudern");
}

/// Test that replacements also apply in capitalized form
#[test]
fn test_fixText_withCapitalizedForm_shouldReplace() {
    let fixed = fix_text("Explodieren war das Ziel", TargetLanguage::German);
    assert_eq!(fixed, "Viral gehen war das Ziel");
}

/// Test the brand-token normalization across casings
#[test]
fn test_fixText_withBrandToken_shouldCanonicalize() {
    assert_eq!(fix_text("wir lieben tiktok", TargetLanguage::German), "wir lieben TikTok");
    assert_eq!(fix_text("TIKTOK ist super", TargetLanguage::German), "TikTok ist super");
    assert_eq!(fix_text("auf Tik Tok posten", TargetLanguage::German), "auf TikTok posten");
}

/// Test that the brand fix only matches whole tokens
#[test]
fn test_fixText_withEmbeddedBrandText_shouldNotTouch() {
    let fixed = fix_text("der tiktoker war da", TargetLanguage::German);
    assert_eq!(fixed, "der tiktoker war da");
}

/// Test non-Latin replacement tables
#[test]
fn test_fixText_withRussianTable_shouldReplace() {
    let fixed = fix_text("она проливая чай в эфире", TargetLanguage::Russian);
    assert_eq!(fixed, "она раскрываю секреты в эфире");
}

/// Test that empty text is left untouched
#[test]
fn test_fixText_withEmptyText_shouldPassThrough() {
    assert_eq!(fix_text("", TargetLanguage::German), "");
}

/// Test that the pass is idempotent: a second application changes nothing
#[test]
fn test_fixText_appliedTwice_shouldBeIdempotent() {
    for language in TargetLanguage::all() {
        let input = "den Tee verschütten on tiktok, проливая чай, お茶をこぼす";
        let once = fix_text(input, *language);
        let twice = fix_text(&once, *language);
        assert_eq!(once, twice, "fix pass not idempotent for {}", language.code());
    }
}

/// Test that fixing a document touches every translatable field
#[test]
fn test_fixDocument_shouldFixAllTranslatableFields() {
    let mut document = common::sample_document();
    document.visual_styles[0].title = "tiktok style".to_string();
    document.visual_styles[0].info = Some("works on tiktok only".to_string());
    document.hooks[0].idea = "heard it from a tiktok employee".to_string();
    document.hooks[1].notes = Some("tik tok insider".to_string());
    document.scripts[0].paragraph1 = "posting on tiktok".to_string();
    document.scripts[0].paragraph2 = "tiktok rewards consistency".to_string();
    document.scripts[1].notes = Some("mention tiktok".to_string());

    fix_document(&mut document, TargetLanguage::German);

    assert_eq!(document.visual_styles[0].title, "TikTok style");
    assert_eq!(document.visual_styles[0].info.as_deref(), Some("works on TikTok only"));
    assert_eq!(document.hooks[0].idea, "heard it from a TikTok employee");
    assert_eq!(document.hooks[1].notes.as_deref(), Some("TikTok insider"));
    assert_eq!(document.scripts[0].paragraph1, "posting on TikTok");
    assert_eq!(document.scripts[0].paragraph2, "TikTok rewards consistency");
    assert_eq!(document.scripts[1].notes.as_deref(), Some("mention TikTok"));
}

/// Test that absent optional fields stay absent
#[test]
fn test_fixDocument_withAbsentFields_shouldLeaveThemAbsent() {
    let mut document = common::sample_document();
    assert!(document.visual_styles[1].info.is_none());

    fix_document(&mut document, TargetLanguage::German);
    assert!(document.visual_styles[1].info.is_none());
}

/// Test the in-place file rewrite and its change report
#[test]
fn test_fixFile_shouldRewriteInPlaceOnce() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("content.de.json");

    let mut document = common::sample_document();
    document.hooks[0].idea = "tiktok tips".to_string();
    FileManager::write_json(&path, &document)?;

    // First pass rewrites, second finds nothing left to fix
    assert!(fix_file(&path, TargetLanguage::German)?);
    assert!(!fix_file(&path, TargetLanguage::German)?);

    let fixed: hookline::content::ContentDocument = FileManager::read_json(&path)?;
    assert_eq!(fixed.hooks[0].idea, "TikTok tips");
    Ok(())
}

/// Test translated-file discovery under a data directory
#[test]
fn test_discoverTranslatedFiles_shouldFindSupportedLanguages() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let document = common::sample_document();

    FileManager::write_json(temp_dir.path().join("content.de.json"), &document)?;
    FileManager::write_json(temp_dir.path().join("content.ja.json"), &document)?;
    // Not translated documents: the source, an unsupported code, a snapshot
    FileManager::write_json(temp_dir.path().join("content.json"), &document)?;
    FileManager::write_json(temp_dir.path().join("content.it.json"), &document)?;
    FileManager::write_json(temp_dir.path().join(".progress.de.json"), &document)?;

    let found = discover_translated_files(temp_dir.path());
    let languages: Vec<&str> = found.iter().map(|(l, _)| l.code()).collect();

    assert_eq!(languages, vec!["de", "ja"]);
    Ok(())
}
