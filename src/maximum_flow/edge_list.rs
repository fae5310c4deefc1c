use crate::maximum_flow::graph::Graph;
use num_traits::NumAssign;
use std::collections::HashMap;
use std::str::FromStr;
use thiserror::Error;

// trailing line emitted by the upstream mesh-graph generator
const END_MARKER: &str = "Done Mesh";

const SOURCE_TOKEN: &str = "s";
const SINK_TOKEN: &str = "t";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("line {line}: expected source, destination and capacity fields")]
    MissingField { line: usize },
    #[error("line {line}: capacity is not a valid number")]
    InvalidCapacity { line: usize },
    #[error("line {line}: capacity is negative")]
    NegativeCapacity { line: usize },
    #[error("line {line}: duplicate edge for this ordered node pair")]
    DuplicateEdge { line: usize },
    #[error("no node labelled 's' found")]
    MissingSource,
    #[error("no node labelled 't' found")]
    MissingSink,
}

#[derive(Debug)]
pub struct EdgeListGraph<Flow> {
    pub graph: Graph<Flow>,
    pub source: usize,
    pub sink: usize,
}

/// Parse an edge-list text into a capacity-matrix graph.
///
/// Each line holds a source token, a destination token and an integer
/// capacity, separated by `delimiter` (runs of delimiters collapse). Node
/// tokens are assigned dense ids in order of first appearance; the literal
/// tokens `s` and `t` designate source and sink. Blank lines and the
/// `Done Mesh` end marker are ignored.
pub fn parse_edge_list<Flow>(input: &str, delimiter: char) -> Result<EdgeListGraph<Flow>, ParseError>
where
    Flow: NumAssign + Ord + Copy + Default + FromStr,
{
    let mut node_ids: HashMap<&str, usize> = HashMap::new();
    let mut edges: Vec<(usize, usize, Flow, usize)> = Vec::new();

    for (index, raw) in input.lines().enumerate() {
        let line = index + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed == END_MARKER {
            continue;
        }

        let mut fields = raw.split(delimiter).filter(|f| !f.trim().is_empty());
        let (from, to, capacity) = match (fields.next(), fields.next(), fields.next()) {
            (Some(from), Some(to), Some(capacity)) => (from.trim(), to.trim(), capacity.trim()),
            _ => return Err(ParseError::MissingField { line }),
        };

        let capacity: Flow = capacity.parse().map_err(|_| ParseError::InvalidCapacity { line })?;
        if capacity < Flow::zero() {
            return Err(ParseError::NegativeCapacity { line });
        }

        let next_id = node_ids.len();
        let from = *node_ids.entry(from).or_insert(next_id);
        let next_id = node_ids.len();
        let to = *node_ids.entry(to).or_insert(next_id);
        edges.push((from, to, capacity, line));
    }

    let source = *node_ids.get(SOURCE_TOKEN).ok_or(ParseError::MissingSource)?;
    let sink = *node_ids.get(SINK_TOKEN).ok_or(ParseError::MissingSink)?;

    let mut graph = Graph::default();
    graph.add_nodes(node_ids.len());
    for (from, to, capacity, line) in edges {
        if capacity > Flow::zero() && !graph.add_directed_edge(from, to, capacity) {
            return Err(ParseError::DuplicateEdge { line });
        }
    }

    Ok(EdgeListGraph { graph, source, sink })
}
