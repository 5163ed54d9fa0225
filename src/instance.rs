//! DIMACS instance loading and export.
//!
//! The accepted format is the DIMACS graph format:
//!
//! ```text
//! c optional comment lines
//! p edge <vertices> <edges>
//! e <u> <v>
//! ```
//!
//! Vertex ids in the file are 1-indexed; the in-memory graph is 0-indexed.
//! The header may also use the `col` format keyword.

use log::{debug, warn};
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use crate::error::{Error, Result};
use crate::graph::Graph;

/// A parsed problem instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstanceInfo {
    pub num_vertices: usize,
    pub num_edges: usize,
    pub graph: Graph,
}

impl InstanceInfo {
    /// Wraps an already-built graph, taking the counts from it.
    pub fn from_graph(graph: Graph) -> Self {
        Self {
            num_vertices: graph.num_vertices(),
            num_edges: graph.num_edges(),
            graph,
        }
    }
}

/// Opens and parses the DIMACS file at `path`.
pub fn read_file(path: impl AsRef<Path>) -> Result<InstanceInfo> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| Error::UnreadableFile {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("reading instance from {}", path.display());
    parse(BufReader::new(file))
}

/// Parses a DIMACS instance from `reader`.
///
/// # Errors
/// `MalformedLine` for blank lines, unknown line kinds, a missing or repeated
/// header, unparsable numbers, ids outside `1..=N` and self-loops.
///
/// # Examples
/// ```
/// use grasp_cover::instance;
///
/// let text = "c tiny path\np edge 3 2\ne 1 2\ne 2 3\n";
/// let instance = instance::parse(text.as_bytes()).unwrap();
/// assert_eq!(instance.graph.edge_list(), vec![(0, 1), (1, 2)]);
/// ```
pub fn parse(reader: impl BufRead) -> Result<InstanceInfo> {
    let mut graph: Option<Graph> = None;
    let mut declared_edges = 0;

    for (index, line) in reader.lines().enumerate() {
        let number = index + 1;
        let line = line?;
        let mut fields = line.split_whitespace();
        match fields.next() {
            None => return Err(Error::malformed(number, "blank line")),
            Some(kind) if kind.starts_with('c') => continue,
            Some("p") => {
                if graph.is_some() {
                    return Err(Error::malformed(number, "duplicate problem line"));
                }
                match fields.next() {
                    Some("edge") | Some("col") => {}
                    Some(format) => {
                        return Err(Error::malformed(
                            number,
                            format!("unsupported format `{format}`"),
                        ))
                    }
                    None => return Err(Error::malformed(number, "missing format")),
                }
                let vertices = parse_count(fields.next(), number, "vertex count")?;
                declared_edges = parse_count(fields.next(), number, "edge count")?;
                graph = Some(Graph::new(vertices));
            }
            Some("e") => {
                let graph = graph
                    .as_mut()
                    .ok_or_else(|| Error::malformed(number, "edge before problem line"))?;
                let u = parse_vertex(fields.next(), number, graph.num_vertices())?;
                let v = parse_vertex(fields.next(), number, graph.num_vertices())?;
                if u == v {
                    return Err(Error::malformed(
                        number,
                        format!("self-loop on vertex {}", u + 1),
                    ));
                }
                if !graph.add_edge(u, v)? {
                    debug!("line {number}: duplicate edge ({}, {}) ignored", u + 1, v + 1);
                }
            }
            Some(kind) => {
                return Err(Error::malformed(
                    number,
                    format!("unknown line kind `{kind}`"),
                ))
            }
        }
    }

    let graph = graph.ok_or_else(|| Error::malformed(0, "missing problem line"))?;
    let instance = InstanceInfo::from_graph(graph);
    if instance.num_edges != declared_edges {
        warn!(
            "problem line declares {declared_edges} edges but {} distinct edges were read",
            instance.num_edges
        );
    }
    Ok(instance)
}

/// Writes `graph` in the DIMACS format accepted by [`parse`].
pub fn write_dimacs(mut writer: impl Write, graph: &Graph) -> Result<()> {
    writeln!(writer, "p edge {} {}", graph.num_vertices(), graph.num_edges())?;
    for (u, v) in graph.edge_list() {
        writeln!(writer, "e {} {}", u + 1, v + 1)?;
    }
    writer.flush()?;
    Ok(())
}

fn parse_count(field: Option<&str>, line: usize, what: &str) -> Result<usize> {
    let field = field.ok_or_else(|| Error::malformed(line, format!("missing {what}")))?;
    field
        .parse()
        .map_err(|_| Error::malformed(line, format!("invalid {what} `{field}`")))
}

fn parse_vertex(field: Option<&str>, line: usize, num_vertices: usize) -> Result<usize> {
    let id = parse_count(field, line, "vertex id")?;
    if id == 0 || id > num_vertices {
        return Err(Error::malformed(
            line,
            format!("vertex {id} outside 1..={num_vertices}"),
        ));
    }
    Ok(id - 1)
}
