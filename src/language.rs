use anyhow::{Result, anyhow};
use isolang::Language;

/// Supported target languages for content translation
///
/// The pipeline only produces output for this closed set. Anything else is
/// rejected before any translation work starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetLanguage {
    German,
    Spanish,
    French,
    Portuguese,
    Russian,
    Korean,
    Japanese,
}

impl TargetLanguage {
    /// All supported languages, in the order batch runs process them
    pub fn all() -> &'static [TargetLanguage] {
        &[
            TargetLanguage::German,
            TargetLanguage::Spanish,
            TargetLanguage::French,
            TargetLanguage::Portuguese,
            TargetLanguage::Russian,
            TargetLanguage::Korean,
            TargetLanguage::Japanese,
        ]
    }

    /// ISO 639-1 code used for translator requests and file naming
    pub fn code(&self) -> &'static str {
        match self {
            Self::German => "de",
            Self::Spanish => "es",
            Self::French => "fr",
            Self::Portuguese => "pt",
            Self::Russian => "ru",
            Self::Korean => "ko",
            Self::Japanese => "ja",
        }
    }

    /// English display name, resolved through the ISO tables
    pub fn display_name(&self) -> &'static str {
        Language::from_639_1(self.code())
            .map(|l| l.to_name())
            .unwrap_or("Unknown")
    }

    /// Parse a language code from the supported set
    pub fn parse(code: &str) -> Result<Self> {
        let normalized = code.trim().to_lowercase();
        match normalized.as_str() {
            "de" => Ok(Self::German),
            "es" => Ok(Self::Spanish),
            "fr" => Ok(Self::French),
            "pt" => Ok(Self::Portuguese),
            "ru" => Ok(Self::Russian),
            "ko" => Ok(Self::Korean),
            "ja" => Ok(Self::Japanese),
            _ => Err(anyhow!(
                "Unsupported language code: {} (supported: {})",
                code,
                supported_codes().join(", ")
            )),
        }
    }
}

impl std::fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for TargetLanguage {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// List of supported language codes, for error messages and CLI help
pub fn supported_codes() -> Vec<&'static str> {
    TargetLanguage::all().iter().map(|l| l.code()).collect()
}
