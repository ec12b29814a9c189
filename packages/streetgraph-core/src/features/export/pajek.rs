//! Pajek export (`graph.pajek`)

use std::fmt::Display;
use std::hash::Hash;
use std::io::Write;
use std::path::Path;

use ahash::AHashMap;

use super::domain::{write_file, ExportContext, ExportError, ExportGraph, GraphSink};
use crate::features::graph_builder::SimpleGraph;

pub const PAJEK_FILE: &str = "graph.pajek";

#[derive(Debug, Clone, Copy, Default)]
pub struct PajekSink;

impl GraphSink for PajekSink {
    fn name(&self) -> &'static str {
        "pajek"
    }

    fn write(&self, context: &ExportContext<'_>, dir: &Path) -> Result<Vec<String>, ExportError> {
        let file = match context.graph {
            ExportGraph::Nodes(graph) => write_file(dir, PAJEK_FILE, |w| write_pajek(w, graph))?,
            ExportGraph::Lines(graph) => write_file(dir, PAJEK_FILE, |w| write_pajek(w, graph))?,
        };
        Ok(vec![file])
    }
}

fn write_pajek<L>(w: &mut dyn Write, graph: &SimpleGraph<L>) -> std::io::Result<()>
where
    L: Clone + Eq + Hash + Ord + Display,
{
    let nodes = graph.nodes();
    writeln!(w, "*vertices {}", nodes.len())?;

    let mut number: AHashMap<&L, usize> = AHashMap::with_capacity(nodes.len());
    for (k, node) in nodes.into_iter().enumerate() {
        number.insert(node, k + 1);
        // Pajek has no quote escaping
        writeln!(w, "{} \"{}\"", k + 1, node.to_string().replace('"', "'"))?;
    }

    writeln!(w, "*edges")?;
    for (a, b) in graph.edges() {
        if let (Some(na), Some(nb)) = (number.get(a), number.get(b)) {
            writeln!(w, "{} {}", na, nb)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::graph_builder::NodeLabel;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_pajek_body() {
        let mut graph: SimpleGraph<NodeLabel> = SimpleGraph::new();
        graph.add_edge("B".into(), "A".into());
        graph.add_edge("B".into(), "C".into());
        graph.add_node("D \"x\"".into());

        let mut out = Vec::new();
        write_pajek(&mut out, &graph).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(
            text,
            "*vertices 4\n1 \"A\"\n2 \"B\"\n3 \"C\"\n4 \"D 'x'\"\n*edges\n1 2\n2 3\n"
        );
    }
}
