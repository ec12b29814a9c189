//! Adjacency-list export (`edges.csv` + `nodes.csv`)
//!
//! Feature graph: `edges.csv` is `id,from,to` (1-based, merged pair order)
//! and `nodes.csv` is the FeatureTable dump.
//! Line graph: `nodes.csv` is `id,intersections` over the sorted line-graph
//! nodes and `edges.csv` is the FeatureTable dump.

use std::io::Write;
use std::path::Path;

use super::domain::{write_file, ExportContext, ExportError, ExportGraph, GraphSink};

pub const EDGES_FILE: &str = "edges.csv";
pub const NODES_FILE: &str = "nodes.csv";

#[derive(Debug, Clone, Copy, Default)]
pub struct AdjacencyListSink;

impl GraphSink for AdjacencyListSink {
    fn name(&self) -> &'static str {
        "adjacency_list"
    }

    fn write(&self, context: &ExportContext<'_>, dir: &Path) -> Result<Vec<String>, ExportError> {
        match context.graph {
            ExportGraph::Nodes(_) => Ok(vec![
                write_file(dir, EDGES_FILE, |w| write_pair_list(w, context))?,
                write_file(dir, NODES_FILE, |w| write_table(w, context))?,
            ]),
            ExportGraph::Lines(graph) => Ok(vec![
                write_file(dir, NODES_FILE, |w| {
                    writeln!(w, "id,intersections")?;
                    for (k, node) in graph.nodes().into_iter().enumerate() {
                        writeln!(w, "{},{}", k + 1, csv_field(&node.to_string()))?;
                    }
                    Ok(())
                })?,
                write_file(dir, EDGES_FILE, |w| write_table(w, context))?,
            ]),
        }
    }
}

fn write_pair_list(w: &mut dyn Write, context: &ExportContext<'_>) -> std::io::Result<()> {
    writeln!(w, "id,from,to")?;
    for (k, pair) in context.pairs.iter().enumerate() {
        writeln!(
            w,
            "{},{},{}",
            k + 1,
            csv_field(&context.label(pair.i)),
            csv_field(&context.label(pair.j))
        )?;
    }
    Ok(())
}

fn write_table(w: &mut dyn Write, context: &ExportContext<'_>) -> std::io::Result<()> {
    let mut header = vec!["index".to_string(), "identifier".to_string()];
    header.extend(context.columns.iter().cloned());
    header.push("geometry".to_string());
    write_record(w, &header)?;

    for row in &context.rows {
        let mut record = Vec::with_capacity(row.values.len() + 3);
        record.push(row.index.to_string());
        record.push(row.identifier.clone());
        record.extend(row.values.iter().cloned());
        record.push(row.wkt.clone());
        write_record(w, &record)?;
    }
    Ok(())
}

fn write_record(w: &mut dyn Write, fields: &[String]) -> std::io::Result<()> {
    let line: Vec<String> = fields.iter().map(|f| csv_field(f)).collect();
    writeln!(w, "{}", line.join(","))
}

/// Quote a CSV field when it holds a separator, quote or line break
pub(crate) fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
