/*!
 * Common test utilities for the hookline test suite
 */

use std::path::{Path, PathBuf};

use anyhow::Result;
use tempfile::TempDir;

use hookline::content::{ContentDocument, Hook, Script, ScriptType, VisualStyle};
use hookline::file_utils::FileManager;

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Builds a small content document covering all three sections
pub fn sample_document() -> ContentDocument {
    ContentDocument {
        visual_styles: vec![
            VisualStyle {
                id: "vs1".to_string(),
                title: "White Title + White Paragraph".to_string(),
                images: vec!["https://example.com/img1.jpg".to_string()],
                info: Some("Keep the text readable over plain areas.".to_string()),
            },
            VisualStyle {
                id: "vs2".to_string(),
                title: "Numbering Style".to_string(),
                images: vec![
                    "https://example.com/img2.jpg".to_string(),
                    "https://example.com/img3.jpg".to_string(),
                ],
                info: None,
            },
        ],
        hooks: vec![
            Hook {
                id: "h1".to_string(),
                category: "Ex TikTok".to_string(),
                rank: None,
                idea: "i helped train new hires, this is how we explained it".to_string(),
                reference_links: Some("-".to_string()),
                notes: None,
            },
            Hook {
                id: "h2".to_string(),
                category: "Ex TikTok".to_string(),
                rank: Some(2),
                idea: "my seat neighbor on a flight spilled everything".to_string(),
                reference_links: Some("https://example.com/ref".to_string()),
                notes: Some("works with the notes style".to_string()),
            },
            Hook {
                id: "p1".to_string(),
                category: "Professor".to_string(),
                rank: None,
                idea: "my marketing professor broke this down in class".to_string(),
                reference_links: None,
                notes: None,
            },
        ],
        scripts: vec![
            Script {
                id: "s1".to_string(),
                script_type: ScriptType::Other,
                rank: None,
                paragraph1: "not reusing what worked.".to_string(),
                paragraph2: "if something did well, do it again.".to_string(),
                notes: None,
            },
            Script {
                id: "s2".to_string(),
                script_type: ScriptType::Other,
                rank: None,
                paragraph1: "quitting too soon.".to_string(),
                paragraph2: "growth doesn't always show right away.".to_string(),
                notes: Some("pairs well with a personal story".to_string()),
            },
            Script {
                id: "e1".to_string(),
                script_type: ScriptType::Engagement,
                rank: None,
                paragraph1: "not cheering for your own people.".to_string(),
                paragraph2: "comment on your mutuals, share their stuff.".to_string(),
                notes: None,
            },
            Script {
                id: "vp1".to_string(),
                script_type: ScriptType::ViralPlug,
                rank: None,
                paragraph1: "not using tools that help.".to_string(),
                paragraph2: "this app predicts how your video will do.".to_string(),
                notes: None,
            },
        ],
    }
}

/// Writes a document as the source content file inside a directory
pub fn write_source_document(dir: &Path, document: &ContentDocument) -> Result<PathBuf> {
    let path = dir.join("content.json");
    FileManager::write_json(&path, document)?;
    Ok(path)
}
