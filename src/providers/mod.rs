/*!
 * Provider implementations for external translation services.
 *
 * This module contains client implementations for machine translation
 * backends:
 * - LibreTranslate: self-hosted or public LibreTranslate server
 * - DeepL: DeepL REST API
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::ProviderError;

/// Common trait for all translation providers
///
/// This trait defines the interface that all provider implementations must
/// follow, allowing them to be used interchangeably in the pipeline.
#[async_trait]
pub trait Translator: Send + Sync + Debug {
    /// Translate a single piece of text
    ///
    /// # Arguments
    /// * `text` - The text to translate
    /// * `source` - Source language code (ISO 639-1)
    /// * `target` - Target language code (ISO 639-1)
    ///
    /// # Returns
    /// * `Result<String, ProviderError>` - The translated text or an error
    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, ProviderError>;

    /// Test the connection to the provider
    ///
    /// # Returns
    /// * `Result<(), ProviderError>` - Ok if the connection is usable, or an error
    async fn test_connection(&self) -> Result<(), ProviderError>;

    /// Short provider name for logging
    fn name(&self) -> &'static str;
}

pub mod deepl;
pub mod libretranslate;
pub mod mock;
