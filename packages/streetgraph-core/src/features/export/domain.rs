//! Export domain: sink port, export context and errors

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::Representation;
use crate::features::adjacency::AdjacencyPair;
use crate::features::feature_table::FeatureTable;
use crate::features::graph_builder::{FeatureGraph, LineGraph};
use crate::shared::models::render_attribute;
use crate::shared::ports::GeometryEngine;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("output directory already exists: {0}")]
    TargetExists(PathBuf),
}

impl ExportError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ExportError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Graph handed to the sinks
#[derive(Debug, Clone, Copy)]
pub enum ExportGraph<'a> {
    /// Streets as nodes
    Nodes(&'a FeatureGraph),
    /// Streets as edges (line graph)
    Lines(&'a LineGraph),
}

/// One FeatureTable row, rendered for output
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub index: usize,
    pub identifier: String,
    /// One value per [`ExportContext::columns`] entry; empty for null/absent
    pub values: Vec<String>,
    pub wkt: String,
}

/// Everything a sink may need, precomputed once
#[derive(Debug, Clone)]
pub struct ExportContext<'a> {
    pub columns: Vec<String>,
    pub rows: Vec<TableRow>,
    pub pairs: &'a [AdjacencyPair],
    pub graph: ExportGraph<'a>,
    pub representation: Representation,
}

impl<'a> ExportContext<'a> {
    pub fn new<E: GeometryEngine>(
        engine: &E,
        table: &FeatureTable<E::Geometry>,
        pairs: &'a [AdjacencyPair],
        graph: ExportGraph<'a>,
        representation: Representation,
    ) -> Self {
        let columns: Vec<String> = table
            .attribute_columns()
            .into_iter()
            .map(str::to_string)
            .collect();

        let rows = table
            .iter()
            .map(|feature| TableRow {
                index: feature.index,
                identifier: feature.identifier.clone(),
                values: columns
                    .iter()
                    .map(|c| {
                        feature
                            .attributes
                            .get(c)
                            .and_then(render_attribute)
                            .unwrap_or_default()
                    })
                    .collect(),
                wkt: engine.to_wkt(&feature.geometry),
            })
            .collect();

        Self {
            columns,
            rows,
            pairs,
            graph,
            representation,
        }
    }

    /// Node label of table row `index` under the configured representation
    pub fn label(&self, index: usize) -> String {
        match self.representation {
            Representation::Name => self
                .rows
                .get(index)
                .map(|r| r.identifier.clone())
                .unwrap_or_else(|| index.to_string()),
            Representation::Id => index.to_string(),
        }
    }
}

/// Output collaborator. Writes its files into `dir` and returns their names.
pub trait GraphSink: Send + Sync {
    fn name(&self) -> &'static str;

    fn write(&self, context: &ExportContext<'_>, dir: &Path) -> Result<Vec<String>, ExportError>;
}

/// Create `dir/file_name`, run `body` against a buffered writer, flush
pub(crate) fn write_file<F>(dir: &Path, file_name: &str, body: F) -> Result<String, ExportError>
where
    F: FnOnce(&mut dyn Write) -> std::io::Result<()>,
{
    let path = dir.join(file_name);
    let result = File::create(&path).and_then(|file| {
        let mut writer = BufWriter::new(file);
        body(&mut writer)?;
        writer.flush()
    });
    result.map_err(|e| ExportError::io(&path, e))?;
    Ok(file_name.to_string())
}
