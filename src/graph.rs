//! Minimal undirected adjacency-list graph.
//!
//! Vertices are identified by their position `0..n`. Every edge `{u, v}` is
//! stored twice, once in each endpoint's neighbour list, so `neighbors(u)`
//! contains `v` exactly when `neighbors(v)` contains `u`. Self-loops and
//! parallel edges are never stored.

use std::ops::Index;

use crate::cover::Cover;
use crate::error::{Error, Result};

/// A vertex and the ids of its neighbours.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vertex {
    id: usize,
    neighbors: Vec<usize>,
}

impl Vertex {
    pub fn new(id: usize) -> Self {
        Self {
            id,
            neighbors: Vec::new(),
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn neighbors(&self) -> &[usize] {
        &self.neighbors
    }

    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }

    pub fn has_neighbor(&self, id: usize) -> bool {
        self.neighbors.contains(&id)
    }

    fn add_neighbor(&mut self, id: usize) {
        self.neighbors.push(id);
    }

    fn remove_neighbor(&mut self, id: usize) -> bool {
        match self.neighbors.iter().position(|&n| n == id) {
            Some(pos) => {
                self.neighbors.remove(pos);
                true
            }
            None => false,
        }
    }
}

/// An undirected graph stored as adjacency lists.
///
/// # Examples
/// ```
/// use grasp_cover::Graph;
///
/// let mut graph = Graph::new(3);
/// graph.add_edge(0, 1).unwrap();
/// graph.add_edge(1, 2).unwrap();
///
/// assert_eq!(graph.degree(1), 2);
/// assert_eq!(graph.num_edges(), 2);
/// assert_eq!(graph.edge_list(), vec![(0, 1), (1, 2)]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    vertices: Vec<Vertex>,
}

impl Graph {
    /// Creates a graph with `num_vertices` isolated vertices.
    pub fn new(num_vertices: usize) -> Self {
        Self {
            vertices: (0..num_vertices).map(Vertex::new).collect(),
        }
    }

    /// Builds a graph from a list of 0-indexed edges.
    ///
    /// # Errors
    /// * `VertexNotFound` if an endpoint is not below `num_vertices`
    /// * `SelfLoop` if an edge joins a vertex to itself
    pub fn from_edges(num_vertices: usize, edges: &[(usize, usize)]) -> Result<Self> {
        let mut graph = Self::new(num_vertices);
        for &(u, v) in edges {
            graph.add_edge(u, v)?;
        }
        Ok(graph)
    }

    /// Appends an isolated vertex and returns its id.
    pub fn add_vertex(&mut self) -> usize {
        let id = self.vertices.len();
        self.vertices.push(Vertex::new(id));
        id
    }

    /// Returns the vertex with the given id.
    pub fn vertex_at(&self, id: usize) -> Result<&Vertex> {
        self.vertices.get(id).ok_or(Error::VertexNotFound(id))
    }

    /// Adds the undirected edge `{u, v}`.
    ///
    /// Returns `Ok(false)` when the edge is already present, in which case the
    /// graph is left untouched.
    pub fn add_edge(&mut self, u: usize, v: usize) -> Result<bool> {
        self.check(u)?;
        self.check(v)?;
        if u == v {
            return Err(Error::SelfLoop(u));
        }
        if self.vertices[u].has_neighbor(v) {
            return Ok(false);
        }
        self.vertices[u].add_neighbor(v);
        self.vertices[v].add_neighbor(u);
        Ok(true)
    }

    /// Removes the undirected edge `{u, v}`, returning whether it existed.
    pub fn remove_edge(&mut self, u: usize, v: usize) -> Result<bool> {
        self.check(u)?;
        self.check(v)?;
        let removed = self.vertices[u].remove_neighbor(v);
        self.vertices[v].remove_neighbor(u);
        Ok(removed)
    }

    /// Neighbours of `v`.
    ///
    /// # Panics
    /// If `v` is not a vertex of this graph.
    pub fn neighbors(&self, v: usize) -> &[usize] {
        self[v].neighbors()
    }

    /// Degree of `v`.
    ///
    /// # Panics
    /// If `v` is not a vertex of this graph.
    pub fn degree(&self, v: usize) -> usize {
        self[v].degree()
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn num_edges(&self) -> usize {
        self.vertices.iter().map(Vertex::degree).sum::<usize>() / 2
    }

    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        self.vertices.get(u).is_some_and(|vertex| vertex.has_neighbor(v))
    }

    /// Every undirected edge once, as `(u, v)` with `u < v`, sorted.
    pub fn edge_list(&self) -> Vec<(usize, usize)> {
        let mut edges: Vec<(usize, usize)> = self
            .vertices
            .iter()
            .flat_map(|vertex| {
                let u = vertex.id();
                vertex
                    .neighbors()
                    .iter()
                    .filter(move |&&v| u < v)
                    .map(move |&v| (u, v))
            })
            .collect();
        edges.sort_unstable();
        edges
    }

    /// Dense adjacency matrix: `m[i][j]` is true iff `{i, j}` is an edge.
    pub fn adjacency_matrix(&self) -> Vec<Vec<bool>> {
        let n = self.num_vertices();
        let mut matrix = vec![vec![false; n]; n];
        for vertex in &self.vertices {
            for &v in vertex.neighbors() {
                matrix[vertex.id()][v] = true;
            }
        }
        matrix
    }

    /// The complement graph on the same vertex set.
    pub fn complement(&self) -> Graph {
        let matrix = self.adjacency_matrix();
        let mut complement = Graph::new(self.num_vertices());
        for (u, row) in matrix.iter().enumerate() {
            for (v, &adjacent) in row.iter().enumerate().skip(u + 1) {
                if !adjacent {
                    complement.vertices[u].add_neighbor(v);
                    complement.vertices[v].add_neighbor(u);
                }
            }
        }
        complement
    }

    /// Checks that every edge has at least one endpoint in `cover`.
    pub fn is_cover(&self, cover: &Cover) -> bool {
        cover.num_vertices() == self.num_vertices()
            && self.vertices.iter().all(|vertex| {
                cover.contains(vertex.id())
                    || vertex.neighbors().iter().all(|&v| cover.contains(v))
            })
    }

    fn check(&self, id: usize) -> Result<()> {
        if id < self.vertices.len() {
            Ok(())
        } else {
            Err(Error::VertexNotFound(id))
        }
    }
}

impl Index<usize> for Graph {
    type Output = Vertex;

    fn index(&self, id: usize) -> &Vertex {
        match self.vertices.get(id) {
            Some(vertex) => vertex,
            None => panic!("{}", Error::VertexNotFound(id)),
        }
    }
}
