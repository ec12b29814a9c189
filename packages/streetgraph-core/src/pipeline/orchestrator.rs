//! Street graph pipeline orchestrator
//!
//! read → FeatureTable → SpatialIndex → partitioned detection → merge →
//! feature graph → optional line graph. Export runs separately, only on a
//! successful run, and publishes atomically.

use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::{DateTime, Local, TimeZone};
use tracing::{info, warn};

use super::result::{GraphOutput, PipelineOutput, PipelineStats, StageDurations};
use crate::config::ValidatedConfig;
use crate::errors::Result;
use crate::features::adjacency::{AdjacencyDetector, Partitioner};
use crate::features::export::{export_atomically, sinks_for, ExportContext, ExportReport};
use crate::features::feature_table::FeatureTableBuilder;
use crate::features::graph_builder::{line_graph, GraphBuilder};
use crate::features::spatial_index::SpatialIndex;
use crate::shared::ports::{FeatureSource, GeometryEngine};

/// End-to-end street graph construction over one geometry engine
pub struct StreetGraphPipeline<E: GeometryEngine> {
    config: ValidatedConfig,
    engine: E,
}

impl<E: GeometryEngine> StreetGraphPipeline<E> {
    pub fn new(config: &ValidatedConfig, engine: E) -> Self {
        Self {
            config: config.clone(),
            engine,
        }
    }

    pub fn config(&self) -> &ValidatedConfig {
        &self.config
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Run every stage. Any failure aborts the run; nothing is exported here.
    pub fn run<S>(&self, source: &mut S) -> Result<PipelineOutput<E::Geometry>>
    where
        S: FeatureSource<Geometry = E::Geometry>,
    {
        let mut durations = StageDurations::default();
        info!(source = source.name(), config = %self.config.describe(), "pipeline started");

        let started = Instant::now();
        let raw = source.read()?;
        durations.read = started.elapsed();

        let started = Instant::now();
        let table = FeatureTableBuilder::new(&self.config, &self.engine).build(raw)?;
        durations.table = started.elapsed();

        let started = Instant::now();
        let index = SpatialIndex::from_table(&table);
        durations.index = started.elapsed();

        let started = Instant::now();
        let detector =
            AdjacencyDetector::new(&self.engine, &table, &index, self.config.adjacency());
        let pairs = Partitioner::new(self.config.workers()).run(&detector)?;
        durations.detection = started.elapsed();

        let started = Instant::now();
        let feature_graph = GraphBuilder::from_config(&self.config).build(&table, &pairs);
        let graph = if self.config.line_graph() {
            GraphOutput::Lines(line_graph(&feature_graph))
        } else {
            GraphOutput::Nodes(feature_graph)
        };
        durations.graph = started.elapsed();

        let stats = PipelineStats {
            raw_features: table.raw_count(),
            features: table.len(),
            unknown_labels: table.unknown_count(),
            pairs: pairs.len(),
            nodes: graph.node_count(),
            edges: graph.edge_count(),
            workers: self.config.workers(),
            durations,
        };
        info!(
            features = stats.features,
            pairs = stats.pairs,
            nodes = stats.nodes,
            edges = stats.edges,
            elapsed_ms = durations.total().as_millis() as u64,
            "pipeline finished"
        );

        Ok(PipelineOutput {
            table,
            pairs,
            graph,
            stats,
        })
    }

    /// Write every enabled format into `dir`, all or nothing.
    ///
    /// Returns `None` without touching the filesystem when every output
    /// format is disabled.
    pub fn export(
        &self,
        output: &PipelineOutput<E::Geometry>,
        dir: &Path,
    ) -> Result<Option<ExportReport>> {
        let sinks = sinks_for(self.config.outputs());
        if sinks.is_empty() {
            warn!("no output format enabled; skipping export");
            return Ok(None);
        }

        let context = ExportContext::new(
            &self.engine,
            &output.table,
            &output.pairs,
            output.graph.as_export(),
            self.config.representation(),
        );
        let report = export_atomically(&context, &sinks, dir)?;
        Ok(Some(report))
    }
}

/// `output_{basename}_{YYYYmmddHHMM}` for the current local time
pub fn default_output_dir(basename: &str) -> PathBuf {
    output_dir_at(basename, &Local::now())
}

pub fn output_dir_at<Tz: TimeZone>(basename: &str, at: &DateTime<Tz>) -> PathBuf
where
    Tz::Offset: std::fmt::Display,
{
    PathBuf::from(format!("output_{}_{}", basename, at.format("%Y%m%d%H%M")))
}
