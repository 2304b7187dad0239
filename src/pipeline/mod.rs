/*!
 * Batch pipelines: checkpointed translation and the text-fix pass.
 *
 * Both are offline jobs, never invoked from the request-serving path. The
 * translation pipeline produces per-language copies of the content document
 * through an external translator, checkpointing progress so an interrupted
 * run resumes where it stopped. The fix pass rewrites already-translated
 * files in place.
 */

pub mod fixes;
pub mod progress;
pub mod runner;

// Re-export main types
pub use progress::{RunLock, TranslationProgress};
pub use runner::{PipelineOptions, TranslationPipeline};
