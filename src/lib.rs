/*!
 * # hookline - creator content backend and localization pipeline
 *
 * A Rust library for serving creator content and maintaining per-language
 * translated copies of it.
 *
 * ## Features
 *
 * - JSON API over immutable content collections (visual styles, hooks,
 *   scripts) with category/type filtering
 * - Append-only status-check log backed by SQLite
 * - Checkpointed, resumable batch translation through external translation
 *   providers (LibreTranslate, DeepL)
 * - Text-fix pass correcting known mistranslations and brand capitalization
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `content`: Content record types and the three-section document
 * - `query`: Filterable read views over a loaded document
 * - `store`: SQLite persistence for status checks
 * - `api`: HTTP API (axum) exposing the query layer and status log
 * - `pipeline`: Batch jobs:
 *   - `pipeline::runner`: the checkpointed translation pipeline
 *   - `pipeline::progress`: progress snapshots and the per-language run lock
 *   - `pipeline::fixes`: the in-place text-fix pass
 * - `providers`: Clients for external translation services:
 *   - `providers::libretranslate`: LibreTranslate API client
 *   - `providers::deepl`: DeepL API client
 * - `file_utils`: File system operations
 * - `app_controller`: Batch run orchestration
 * - `language`: The supported target-language set
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod api;
pub mod app_config;
pub mod app_controller;
pub mod content;
pub mod errors;
pub mod file_utils;
pub mod language;
pub mod pipeline;
pub mod providers;
pub mod query;
pub mod store;

// Re-export main types for easier usage
pub use app_config::Config;
pub use content::{ContentDocument, Hook, Script, ScriptType, VisualStyle};
pub use errors::{AppError, PipelineError, ProviderError, StoreError};
pub use language::TargetLanguage;
pub use pipeline::{TranslationPipeline, TranslationProgress};
pub use query::ContentQuery;
pub use store::{StatusCheck, StatusRepository};
