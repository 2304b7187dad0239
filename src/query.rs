/*!
 * Query layer: filterable read views over an immutable content document.
 *
 * Every operation here is a pure read; a filter that matches nothing yields
 * an empty sequence, never an error. The one validation boundary is the
 * script type, which must parse into the closed set before filtering.
 */

use std::sync::Arc;

use crate::content::{ContentDocument, Hook, Script, ScriptType, VisualStyle};

/// Normalize a category label into its lookup slug
///
/// "Ex TikTok" and "ex-tiktok" both map to "ex-tiktok".
pub fn category_slug(category: &str) -> String {
    category.to_lowercase().replace(' ', "-")
}

/// Read-only query interface over a loaded content document
#[derive(Clone)]
pub struct ContentQuery {
    /// Shared immutable document
    document: Arc<ContentDocument>,
}

impl ContentQuery {
    /// Wrap a loaded document
    pub fn new(document: ContentDocument) -> Self {
        Self {
            document: Arc::new(document),
        }
    }

    /// The underlying document
    pub fn document(&self) -> &ContentDocument {
        &self.document
    }

    /// All visual styles in stored order
    pub fn visual_styles(&self) -> &[VisualStyle] {
        &self.document.visual_styles
    }

    /// All hooks in stored order
    pub fn hooks(&self) -> &[Hook] {
        &self.document.hooks
    }

    /// Hooks whose category slug matches the given slug, case-insensitively
    pub fn hooks_by_category(&self, slug: &str) -> Vec<Hook> {
        let wanted = slug.to_lowercase();
        self.document
            .hooks
            .iter()
            .filter(|h| category_slug(&h.category) == wanted)
            .cloned()
            .collect()
    }

    /// All scripts in stored order
    pub fn scripts(&self) -> &[Script] {
        &self.document.scripts
    }

    /// Scripts with the given type tag, in stored order
    pub fn scripts_by_type(&self, script_type: ScriptType) -> Vec<Script> {
        self.document
            .scripts
            .iter()
            .filter(|s| s.script_type == script_type)
            .cloned()
            .collect()
    }
}
