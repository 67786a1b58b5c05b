mod vertex;

pub use vertex::{Edge, VertexId, Weight};
pub(crate) use vertex::Vertex;

use crate::chaining_map::ChainingMap;
use crate::error::{GraphError, GraphResult};
use crate::exploration::dijkstra_reachable_order;
use crate::label::Label;
use crate::pathfinding::{Path, dijkstra_find_path};

/// In-memory weighted directed graph without parallel edges.
///
/// Vertices live in an arena and are addressed by [`VertexId`]; edges refer
/// to their target by handle, never by pointer. The label index is a
/// [`ChainingMap`] from label to handle. Slots freed by `remove_vertex` are
/// reused by later inserts.
///
/// The graph has no internal synchronization. Mutating it from several
/// threads at once is left to the caller to serialize, e.g. behind a
/// `Mutex`.
#[derive(Debug, Clone)]
pub struct WeightedDirectedGraph<T> {
    vertices: Vec<Option<Vertex<T>>>,
    free_slots: Vec<usize>,
    index: ChainingMap<T, VertexId>,
}

impl<T: Label> WeightedDirectedGraph<T> {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            free_slots: Vec::new(),
            index: ChainingMap::new(),
        }
    }

    pub fn insert_vertex(&mut self, label: T) -> GraphResult<bool> {
        if label.is_null() {
            return Err(GraphError::InvalidArgument(
                "cannot insert a null vertex".to_string(),
            ));
        }
        if self.index.contains_key(&label) {
            return Ok(false);
        }

        let vertex = Vertex::new(label.clone());
        let id = match self.free_slots.pop() {
            Some(slot) => {
                self.vertices[slot] = Some(vertex);
                VertexId(slot)
            }
            None => {
                self.vertices.push(Some(vertex));
                VertexId(self.vertices.len() - 1)
            }
        };

        Ok(self.index.put(label, id))
    }

    /// Removes the vertex together with every edge that starts or ends at it.
    pub fn remove_vertex(&mut self, label: &T) -> GraphResult<bool> {
        ensure_labels(&[label], "remove_vertex")?;
        let Some(removed) = self.id_of(label) else {
            return Ok(false);
        };

        for vertex in self.vertices.iter_mut().flatten() {
            vertex.remove_edge_to(removed);
        }

        self.vertices[removed.0] = None;
        self.free_slots.push(removed.0);
        Ok(self.index.remove(label)?.is_some())
    }

    /// Adds `source -> target`, or rewrites the weight of the existing edge.
    ///
    /// Returns `false` only when the edge already carries `weight`.
    pub fn insert_edge(&mut self, source: &T, target: &T, weight: Weight) -> GraphResult<bool> {
        ensure_labels(&[source, target], "insert_edge")?;
        let (source_id, target_id) = self.endpoints(source, target, "cannot add edge")?;
        if weight < 0 {
            return Err(GraphError::InvalidArgument(format!(
                "cannot add edge with negative weight {weight}"
            )));
        }

        let source_vertex = self.vertex_mut(source_id)?;
        if let Some(edge) = source_vertex.edge_to_mut(target_id) {
            if edge.weight == weight {
                return Ok(false);
            }
            edge.weight = weight;
            return Ok(true);
        }

        source_vertex.edges_leaving.push(Edge {
            target: target_id,
            weight,
        });
        Ok(true)
    }

    pub fn remove_edge(&mut self, source: &T, target: &T) -> GraphResult<bool> {
        ensure_labels(&[source, target], "remove_edge")?;
        let (source_id, target_id) = self.endpoints(source, target, "cannot remove edge")?;
        Ok(self.vertex_mut(source_id)?.remove_edge_to(target_id))
    }

    pub fn contains_vertex(&self, label: &T) -> GraphResult<bool> {
        ensure_labels(&[label], "contains_vertex")?;
        Ok(self.index.contains_key(label))
    }

    /// `false` rather than an error when either endpoint is missing.
    pub fn contains_edge(&self, source: &T, target: &T) -> GraphResult<bool> {
        ensure_labels(&[source, target], "contains_edge")?;
        let (Some(source_id), Some(target_id)) = (self.id_of(source), self.id_of(target)) else {
            return Ok(false);
        };
        Ok(self.vertex(source_id)?.edge_to(target_id).is_some())
    }

    pub fn get_weight(&self, source: &T, target: &T) -> GraphResult<Weight> {
        ensure_labels(&[source, target], "get_weight")?;
        let (source_id, target_id) =
            self.endpoints(source, target, "cannot read weight of edge")?;
        self.vertex(source_id)?
            .edge_to(target_id)
            .map(|edge| edge.weight)
            .ok_or_else(|| {
                GraphError::NotFound("no directed edge between these vertices".to_string())
            })
    }

    /// Targets and weights of the edges leaving `label`, in insertion order.
    pub fn neighbors(&self, label: &T) -> GraphResult<Vec<(&T, Weight)>> {
        ensure_labels(&[label], "neighbors")?;
        let id = self.id_of(label).ok_or_else(|| {
            GraphError::InvalidArgument("vertex does not exist".to_string())
        })?;

        self.vertex(id)?
            .edges_leaving
            .iter()
            .map(|edge| Ok((&self.vertex(edge.target)?.label, edge.weight)))
            .collect()
    }

    /// Labels in arena order.
    pub fn labels(&self) -> impl Iterator<Item = &T> {
        self.vertices.iter().flatten().map(|vertex| &vertex.label)
    }

    pub fn edge_count(&self) -> usize {
        self.vertices
            .iter()
            .flatten()
            .map(|vertex| vertex.edges_leaving.len())
            .sum()
    }

    pub fn vertex_count(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Labels along the cheapest path from `start` to `end`, both included.
    pub fn shortest_path(&self, start: &T, end: &T) -> GraphResult<Vec<T>> {
        dijkstra_find_path(self, start, end).map(Path::into_labels)
    }

    pub fn path_cost(&self, start: &T, end: &T) -> GraphResult<Weight> {
        dijkstra_find_path(self, start, end).map(|path| path.distance())
    }

    /// Every vertex reachable from `node`, in the order the search settles them.
    pub fn reachable_order(&self, node: &T) -> GraphResult<Vec<T>> {
        dijkstra_reachable_order(self, node)
    }

    pub(crate) fn id_of(&self, label: &T) -> Option<VertexId> {
        self.index.get(label).ok().copied()
    }

    pub(crate) fn vertex(&self, id: VertexId) -> GraphResult<&Vertex<T>> {
        self.vertices
            .get(id.0)
            .and_then(Option::as_ref)
            .ok_or_else(|| stale_handle(id))
    }

    fn vertex_mut(&mut self, id: VertexId) -> GraphResult<&mut Vertex<T>> {
        self.vertices
            .get_mut(id.0)
            .and_then(Option::as_mut)
            .ok_or_else(|| stale_handle(id))
    }

    fn endpoints(
        &self,
        source: &T,
        target: &T,
        action: &str,
    ) -> GraphResult<(VertexId, VertexId)> {
        match (self.id_of(source), self.id_of(target)) {
            (Some(source_id), Some(target_id)) => Ok((source_id, target_id)),
            _ => Err(GraphError::InvalidArgument(format!(
                "{action} between vertices that do not exist"
            ))),
        }
    }
}

impl<T: Label> Default for WeightedDirectedGraph<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn ensure_labels<T: Label>(labels: &[&T], operation: &'static str) -> GraphResult<()> {
    if labels.iter().any(|label| label.is_null()) {
        return Err(GraphError::NullInput { operation });
    }
    Ok(())
}

fn stale_handle(id: VertexId) -> GraphError {
    GraphError::NotFound(format!("no vertex in slot {}", id.index()))
}
