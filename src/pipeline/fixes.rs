/*!
 * Text-fix pass over translated content files.
 *
 * Machine translation mangles slang and brand names; this pass applies a
 * fixed per-language table of literal replacements (tried in original,
 * capitalized, uppercase and lowercase form) followed by a case-insensitive
 * brand-token normalization, rewriting the file in place. The pass is
 * idempotent, so re-running it is always safe.
 */

use anyhow::{Context, Result};
use log::{debug, info};
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::content::ContentDocument;
use crate::file_utils::FileManager;
use crate::language::TargetLanguage;

/// Known mistranslations per language: (mistranslated, corrected)
fn replacement_table(language: TargetLanguage) -> &'static [(&'static str, &'static str)] {
    match language {
        TargetLanguage::German => &[
            ("Tee verschütten", "Klatsch ausplaudern"),
            ("Situationsbeziehung", "Situationship"),
            ("Geister", "ghosten"),
            ("explodieren", "viral gehen"),
            ("höchste bezahlte", "bestbezahlte"),
            ("sich lustig machen über", "hatern auf"),
        ],
        TargetLanguage::Spanish => &[
            ("derramando el té", "contando secretos"),
            ("relación de situación", "situationship"),
            ("fantasma", "desaparecer"),
            ("explotar", "hacerse viral"),
        ],
        TargetLanguage::French => &[
            ("renverser le thé", "révéler les secrets"),
            ("relation de situation", "situationship"),
            ("fantôme", "disparaître"),
            ("exploser", "devenir viral"),
        ],
        TargetLanguage::Portuguese => &[
            ("derramando o chá", "contando segredos"),
            ("relação de situação", "situationship"),
            ("fantasma", "sumir"),
            ("explodir", "viralizar"),
        ],
        TargetLanguage::Russian => &[
            ("проливая чай", "раскрываю секреты"),
            ("ситуационные отношения", "ситуэйшеншип"),
            ("призрак", "пропадать"),
            ("взорваться", "стать вирусным"),
        ],
        TargetLanguage::Korean => &[
            ("차를 엎지르는", "남들 모르는 얘기"),
            ("상황 관계", "상황관계"),
            ("유령", "사라지기"),
            ("폭발하다", "바이럴 되다"),
        ],
        TargetLanguage::Japanese => &[
            ("お茶をこぼす", "裏話を暴露"),
            ("状況関係", "シチュエーションシップ"),
            ("幽霊", "ゴースト"),
            ("爆発する", "バズる"),
        ],
    }
}

/// Brand tokens translators tend to re-case; canonicalized to mixed case
static BRAND_FIXES: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    vec![
        (Regex::new(r"(?i)\btiktok\b").unwrap(), "TikTok"),
        (Regex::new(r"(?i)\btik tok\b").unwrap(), "TikTok"),
    ]
});

/// First char uppercased, rest lowercased
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

/// Apply the replacement table and brand fixes to a single text value
pub fn fix_text(text: &str, language: TargetLanguage) -> String {
    if text.is_empty() {
        return text.to_string();
    }

    let mut fixed = text.to_string();
    for (wrong, right) in replacement_table(language) {
        fixed = fixed.replace(wrong, right);
        fixed = fixed.replace(&capitalize(wrong), &capitalize(right));
        fixed = fixed.replace(&wrong.to_uppercase(), &right.to_uppercase());
        fixed = fixed.replace(&wrong.to_lowercase(), &right.to_lowercase());
    }

    for (pattern, replacement) in BRAND_FIXES.iter() {
        fixed = pattern.replace_all(&fixed, *replacement).to_string();
    }

    fixed
}

fn fix_optional(text: &mut Option<String>, language: TargetLanguage) {
    if let Some(value) = text {
        if !value.is_empty() {
            *value = fix_text(value, language);
        }
    }
}

/// Apply the fix pass to every translatable field of a document
pub fn fix_document(document: &mut ContentDocument, language: TargetLanguage) {
    for style in &mut document.visual_styles {
        style.title = fix_text(&style.title, language);
        fix_optional(&mut style.info, language);
    }

    for hook in &mut document.hooks {
        hook.idea = fix_text(&hook.idea, language);
        fix_optional(&mut hook.notes, language);
    }

    for script in &mut document.scripts {
        script.paragraph1 = fix_text(&script.paragraph1, language);
        script.paragraph2 = fix_text(&script.paragraph2, language);
        fix_optional(&mut script.notes, language);
    }
}

/// Fix a translated file in place
///
/// Returns true when the pass changed the document. The whole file is
/// rewritten in one shot; the pass is fast enough to not need checkpointing.
pub fn fix_file(path: &Path, language: TargetLanguage) -> Result<bool> {
    info!("Fixing {} translations in {:?}", language.display_name(), path);

    let original: ContentDocument = FileManager::read_json(path)
        .with_context(|| format!("Failed to load translated document: {:?}", path))?;

    let mut fixed = original.clone();
    fix_document(&mut fixed, language);

    let changed = fixed != original;
    if changed {
        FileManager::write_json_atomic(path, &fixed)
            .with_context(|| format!("Failed to rewrite translated document: {:?}", path))?;
        debug!("Rewrote {:?}", path);
    } else {
        debug!("No fixes needed for {:?}", path);
    }

    Ok(changed)
}

/// Discover translated documents under a data directory
///
/// Matches files named `<stem>.<lang>.json` for any supported language,
/// skipping progress snapshots and other dotfiles.
pub fn discover_translated_files(data_dir: &Path) -> Vec<(TargetLanguage, PathBuf)> {
    let mut found = Vec::new();

    for entry in WalkDir::new(data_dir).into_iter().filter_map(|e| e.ok()) {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if name.starts_with('.') || !name.ends_with(".json") {
            continue;
        }

        // "<stem>.<lang>.json" - the language code is the second-to-last part
        let parts: Vec<&str> = name.split('.').collect();
        if parts.len() < 3 {
            continue;
        }
        if let Ok(language) = TargetLanguage::parse(parts[parts.len() - 2]) {
            found.push((language, path.to_path_buf()));
        }
    }

    found.sort_by_key(|(language, _)| language.code());
    found
}
