pub type Weight = i64;

/// Handle of a vertex slot in the graph arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub(crate) usize);

impl VertexId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Weighted directed edge, stored inside its source vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub target: VertexId,
    pub weight: Weight,
}

#[derive(Debug, Clone)]
pub(crate) struct Vertex<T> {
    pub(crate) label: T,
    pub(crate) edges_leaving: Vec<Edge>,
}

impl<T> Vertex<T> {
    pub(crate) fn new(label: T) -> Self {
        Self {
            label,
            edges_leaving: Vec::new(),
        }
    }

    pub(crate) fn edge_to(&self, target: VertexId) -> Option<&Edge> {
        self.edges_leaving.iter().find(|edge| edge.target == target)
    }

    pub(crate) fn edge_to_mut(&mut self, target: VertexId) -> Option<&mut Edge> {
        self.edges_leaving.iter_mut().find(|edge| edge.target == target)
    }

    pub(crate) fn remove_edge_to(&mut self, target: VertexId) -> bool {
        let edge_count = self.edges_leaving.len();
        self.edges_leaving.retain(|edge| edge.target != target);
        self.edges_leaving.len() != edge_count
    }
}
