//! GraphML export (`graph.graphml`)

use std::fmt::Display;
use std::hash::Hash;
use std::io::Write;
use std::path::Path;

use super::domain::{write_file, ExportContext, ExportError, ExportGraph, GraphSink};
use crate::features::graph_builder::SimpleGraph;

pub const GRAPHML_FILE: &str = "graph.graphml";

#[derive(Debug, Clone, Copy, Default)]
pub struct GraphMlSink;

impl GraphSink for GraphMlSink {
    fn name(&self) -> &'static str {
        "graphml"
    }

    fn write(&self, context: &ExportContext<'_>, dir: &Path) -> Result<Vec<String>, ExportError> {
        let file = match context.graph {
            ExportGraph::Nodes(graph) => write_file(dir, GRAPHML_FILE, |w| write_graphml(w, graph))?,
            ExportGraph::Lines(graph) => write_file(dir, GRAPHML_FILE, |w| write_graphml(w, graph))?,
        };
        Ok(vec![file])
    }
}

fn write_graphml<L>(w: &mut dyn Write, graph: &SimpleGraph<L>) -> std::io::Result<()>
where
    L: Clone + Eq + Hash + Ord + Display,
{
    writeln!(w, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
    writeln!(
        w,
        r#"<graphml xmlns="http://graphml.graphdrawing.org/xmlns" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xsi:schemaLocation="http://graphml.graphdrawing.org/xmlns http://graphml.graphdrawing.org/xmlns/1.0/graphml.xsd">"#
    )?;
    writeln!(
        w,
        r#"  <key id="d0" for="node" attr.name="degree" attr.type="int"/>"#
    )?;
    writeln!(w, r#"  <graph edgedefault="undirected">"#)?;

    for node in graph.nodes() {
        writeln!(
            w,
            r#"    <node id="{}"><data key="d0">{}</data></node>"#,
            xml_escape(&node.to_string()),
            graph.degree(node)
        )?;
    }
    for (a, b) in graph.edges() {
        writeln!(
            w,
            r#"    <edge source="{}" target="{}"/>"#,
            xml_escape(&a.to_string()),
            xml_escape(&b.to_string())
        )?;
    }

    writeln!(w, "  </graph>")?;
    writeln!(w, "</graphml>")
}

pub(crate) fn xml_escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    escaped
}
