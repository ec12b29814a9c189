//! Pipeline orchestration
//!
//! `StreetGraphPipeline::run` builds the graph; `export` publishes it.

pub mod orchestrator;
pub mod result;

pub use orchestrator::{default_output_dir, output_dir_at, StreetGraphPipeline};
pub use result::{GraphOutput, PipelineOutput, PipelineStats, StageDurations};
