use bitvec::prelude::*;
use std::fmt::Write;

/// Vertex cover membership over the vertex ids `0..n` of one instance.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cover {
    members: BitVec,
    len: usize,
}

impl Cover {
    /// An empty cover over `num_vertices` vertices.
    pub fn new(num_vertices: usize) -> Self {
        Self {
            members: bitvec![0; num_vertices],
            len: 0,
        }
    }

    /// The cover holding every vertex.
    pub fn full(num_vertices: usize) -> Self {
        Self {
            members: bitvec![1; num_vertices],
            len: num_vertices,
        }
    }

    pub fn from_vertices(num_vertices: usize, vertices: &[usize]) -> Self {
        let mut cover = Self::new(num_vertices);
        for &v in vertices {
            cover.insert(v);
        }
        cover
    }

    /// Number of vertices in the cover.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Size of the vertex set this cover ranges over.
    pub fn num_vertices(&self) -> usize {
        self.members.len()
    }

    pub fn contains(&self, v: usize) -> bool {
        self.members[v]
    }

    /// Adds `v`, returning whether it was newly inserted.
    pub fn insert(&mut self, v: usize) -> bool {
        let was_member = self.members.replace(v, true);
        if !was_member {
            self.len += 1;
        }
        !was_member
    }

    /// Removes `v`, returning whether it was a member.
    pub fn remove(&mut self, v: usize) -> bool {
        let was_member = self.members.replace(v, false);
        if was_member {
            self.len -= 1;
        }
        was_member
    }

    /// Member ids in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.members.iter_ones()
    }

    /// Renders the cover as its size followed by one 1-indexed vertex per line.
    pub fn format(&self) -> String {
        let mut output = String::new();
        let _ = writeln!(&mut output, "{}", self.len);
        for vertex in self.iter() {
            let _ = writeln!(&mut output, "{}", vertex + 1);
        }
        output
    }
}
