use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use std::default::Default;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Path to the canonical source content document
    #[serde(default = "default_content_file")]
    pub content_file: String,

    /// Directory where translated documents and progress snapshots live
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    /// Source language code of the canonical document
    #[serde(default = "default_source_language")]
    pub source_language: String,

    /// Status-check database path (defaults to the user data directory)
    #[serde(default)]
    pub database_path: Option<String>,

    /// HTTP server config
    #[serde(default)]
    pub server: ServerConfig,

    /// Translation config
    #[serde(default)]
    pub translation: TranslationConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Translation provider type
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TranslationProvider {
    // @provider: LibreTranslate
    #[default]
    LibreTranslate,
    // @provider: DeepL
    DeepL,
}

impl TranslationProvider {
    // @returns: Capitalized provider name
    pub fn display_name(&self) -> &str {
        match self {
            Self::LibreTranslate => "LibreTranslate",
            Self::DeepL => "DeepL",
        }
    }

    // @returns: Lowercase provider identifier
    pub fn to_lowercase_string(&self) -> String {
        match self {
            Self::LibreTranslate => "libretranslate".to_string(),
            Self::DeepL => "deepl".to_string(),
        }
    }
}

// Implement Display trait for TranslationProvider
impl std::fmt::Display for TranslationProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_lowercase_string())
    }
}

// Implement FromStr trait for TranslationProvider
impl std::str::FromStr for TranslationProvider {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "libretranslate" => Ok(Self::LibreTranslate),
            "deepl" => Ok(Self::DeepL),
            _ => Err(anyhow!("Invalid provider type: {}", s)),
        }
    }
}

/// Provider configuration wrapper
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ProviderConfig {
    // @field: Provider type identifier
    #[serde(rename = "type")]
    pub provider_type: String,

    // @field: API key
    #[serde(default = "String::new")]
    pub api_key: String,

    // @field: Service URL
    #[serde(default = "String::new")]
    pub endpoint: String,

    // @field: Timeout seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ProviderConfig {
    // @param provider_type: Provider enum
    // @returns: Provider config with defaults
    pub fn new(provider_type: TranslationProvider) -> Self {
        match provider_type {
            TranslationProvider::LibreTranslate => Self {
                provider_type: "libretranslate".to_string(),
                api_key: String::new(),
                endpoint: default_libretranslate_endpoint(),
                timeout_secs: default_timeout_secs(),
            },
            TranslationProvider::DeepL => Self {
                provider_type: "deepl".to_string(),
                api_key: String::new(),
                endpoint: default_deepl_endpoint(),
                timeout_secs: default_timeout_secs(),
            },
        }
    }
}

/// Translation service configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TranslationConfig {
    /// Translation provider to use
    #[serde(default)]
    pub provider: TranslationProvider,

    /// Available translation providers
    #[serde(default = "default_available_providers")]
    pub available_providers: Vec<ProviderConfig>,

    /// Retry attempts per field before falling back to the source text
    #[serde(default = "default_retry_attempts")]
    pub retry_attempts: u32,

    /// Delay between retry attempts in milliseconds
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,

    /// Pacing delay after each visual style or hook in milliseconds
    #[serde(default = "default_item_delay_ms")]
    pub item_delay_ms: u64,

    /// Pacing delay after each script in milliseconds
    #[serde(default = "default_script_item_delay_ms")]
    pub script_item_delay_ms: u64,

    /// Progress checkpoint interval within the scripts section
    #[serde(default = "default_checkpoint_interval")]
    pub checkpoint_interval: usize,

    /// Pause between languages when translating the whole set, in milliseconds
    #[serde(default = "default_language_pause_ms")]
    pub language_pause_ms: u64,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            provider: TranslationProvider::default(),
            available_providers: default_available_providers(),
            retry_attempts: default_retry_attempts(),
            retry_delay_ms: default_retry_delay_ms(),
            item_delay_ms: default_item_delay_ms(),
            script_item_delay_ms: default_script_item_delay_ms(),
            checkpoint_interval: default_checkpoint_interval(),
            language_pause_ms: default_language_pause_ms(),
        }
    }
}

impl TranslationConfig {
    /// Get the active provider configuration from the available_providers array
    pub fn get_active_provider_config(&self) -> Option<&ProviderConfig> {
        let provider_str = self.provider.to_lowercase_string();
        self.available_providers
            .iter()
            .find(|p| p.provider_type == provider_str)
    }

    /// Get the API key for the active provider
    pub fn get_api_key(&self) -> String {
        self.get_active_provider_config()
            .map(|p| p.api_key.clone())
            .unwrap_or_default()
    }

    /// Get the endpoint for the active provider
    pub fn get_endpoint(&self) -> String {
        self.get_active_provider_config()
            .map(|p| p.endpoint.clone())
            .unwrap_or_default()
    }
}

/// HTTP server configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ServerConfig {
    /// Address the API server binds to
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Allowed CORS origins; "*" allows any origin
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            cors_origins: default_cors_origins(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_content_file() -> String {
    "data/content.json".to_string()
}

fn default_data_dir() -> String {
    "data".to_string()
}

fn default_source_language() -> String {
    "en".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_retry_attempts() -> u32 {
    3
}

fn default_retry_delay_ms() -> u64 {
    2000
}

fn default_item_delay_ms() -> u64 {
    100
}

fn default_script_item_delay_ms() -> u64 {
    50
}

fn default_checkpoint_interval() -> usize {
    50
}

fn default_language_pause_ms() -> u64 {
    5000
}

fn default_bind_addr() -> String {
    "127.0.0.1:8001".to_string()
}

fn default_cors_origins() -> Vec<String> {
    vec!["*".to_string()]
}

fn default_libretranslate_endpoint() -> String {
    "http://localhost:5000".to_string()
}

fn default_deepl_endpoint() -> String {
    "https://api-free.deepl.com".to_string()
}

fn default_available_providers() -> Vec<ProviderConfig> {
    vec![
        ProviderConfig::new(TranslationProvider::LibreTranslate),
        ProviderConfig::new(TranslationProvider::DeepL),
    ]
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.content_file.is_empty() {
            return Err(anyhow!("content_file must not be empty"));
        }

        if self.data_dir.is_empty() {
            return Err(anyhow!("data_dir must not be empty"));
        }

        if self.source_language.trim().is_empty() {
            return Err(anyhow!("source_language must not be empty"));
        }

        if self.translation.retry_attempts == 0 {
            return Err(anyhow!("translation.retry_attempts must be at least 1"));
        }

        if self.translation.checkpoint_interval == 0 {
            return Err(anyhow!("translation.checkpoint_interval must be at least 1"));
        }

        // DeepL needs an API key; LibreTranslate may run keyless locally
        if self.translation.provider == TranslationProvider::DeepL {
            let api_key = self.translation.get_api_key();
            if api_key.is_empty() {
                return Err(anyhow!("Translation API key is required for DeepL provider"));
            }
        }

        // Fail fast on malformed provider endpoints
        for provider in &self.translation.available_providers {
            if !provider.endpoint.is_empty() {
                url::Url::parse(&provider.endpoint).map_err(|e| {
                    anyhow!("Invalid endpoint for {}: {}", provider.provider_type, e)
                })?;
            }
        }

        if self.server.bind_addr.parse::<std::net::SocketAddr>().is_err() {
            return Err(anyhow!("Invalid server bind address: {}", self.server.bind_addr));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            content_file: default_content_file(),
            data_dir: default_data_dir(),
            source_language: default_source_language(),
            database_path: None,
            server: ServerConfig::default(),
            translation: TranslationConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
