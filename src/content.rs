/*!
 * Content model: the three record kinds served by the API and carried
 * through the translation pipeline.
 *
 * A `ContentDocument` is the canonical three-section JSON document. The
 * source document and every per-language translated copy share this shape.
 */

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// A named presentation template with example images
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualStyle {
    /// Unique identifier within the collection
    pub id: String,
    /// Display title (translatable)
    pub title: String,
    /// Ordered example image URLs
    pub images: Vec<String>,
    /// Optional explanatory note (translatable)
    #[serde(default)]
    pub info: Option<String>,
}

/// A short attention-grabbing opening line, categorized by narrative framing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hook {
    /// Unique identifier within the collection
    pub id: String,
    /// Category label used for filtered lookups
    pub category: String,
    /// Optional rank within the category
    #[serde(default)]
    pub rank: Option<i32>,
    /// The hook text itself (translatable)
    pub idea: String,
    /// Optional reference link
    #[serde(default)]
    pub reference_links: Option<String>,
    /// Optional note (translatable)
    #[serde(default)]
    pub notes: Option<String>,
}

/// Purpose tag for a script, a closed set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptType {
    /// General advice content
    Other,
    /// Engagement-prompting content
    Engagement,
    /// Promotional content
    ViralPlug,
}

impl fmt::Display for ScriptType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptType::Other => write!(f, "other"),
            ScriptType::Engagement => write!(f, "engagement"),
            ScriptType::ViralPlug => write!(f, "viral_plug"),
        }
    }
}

impl std::str::FromStr for ScriptType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "other" => Ok(ScriptType::Other),
            "engagement" => Ok(ScriptType::Engagement),
            "viral_plug" => Ok(ScriptType::ViralPlug),
            _ => Err(anyhow::anyhow!("Invalid script type: {}", s)),
        }
    }
}

/// A two-paragraph content template tagged by purpose
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Script {
    /// Unique identifier within the collection
    pub id: String,
    /// Purpose tag
    #[serde(rename = "type")]
    pub script_type: ScriptType,
    /// Optional rank within the type
    #[serde(default)]
    pub rank: Option<i32>,
    /// First paragraph (translatable)
    pub paragraph1: String,
    /// Second paragraph (translatable)
    pub paragraph2: String,
    /// Optional note (translatable)
    #[serde(default)]
    pub notes: Option<String>,
}

/// The three-section content document
///
/// Section order is fixed and load-bearing for the pipeline: visual styles,
/// then hooks, then scripts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentDocument {
    /// Visual style section
    #[serde(rename = "visualStyles", default)]
    pub visual_styles: Vec<VisualStyle>,
    /// Hook section
    #[serde(default)]
    pub hooks: Vec<Hook>,
    /// Script section
    #[serde(default)]
    pub scripts: Vec<Script>,
}

impl ContentDocument {
    /// Load a content document from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read content file: {:?}", path.as_ref()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse content file: {:?}", path.as_ref()))
    }

    /// Total record count across all three sections
    pub fn total_records(&self) -> usize {
        self.visual_styles.len() + self.hooks.len() + self.scripts.len()
    }

    /// Whether all sections are empty
    pub fn is_empty(&self) -> bool {
        self.total_records() == 0
    }
}
