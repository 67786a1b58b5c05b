use crate::graph::{Edge, VertexId, Weight};
use serde::Serialize;

/// A simple path discovered during one search.
///
/// Extending a path copies its label sequence and appends the new target, so
/// a finished search needs no predecessor table to rebuild the route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Path<T> {
    #[serde(skip)]
    start: VertexId,
    labels: Vec<T>,
    distance: Weight,
    #[serde(skip)]
    end: VertexId,
}

impl<T: Clone + PartialEq> Path<T> {
    pub(crate) fn seed(start: VertexId, label: T) -> Self {
        Self {
            start,
            labels: vec![label],
            distance: 0,
            end: start,
        }
    }

    pub(crate) fn extend(&self, edge: &Edge, target_label: T) -> Self {
        let mut labels = Vec::with_capacity(self.labels.len() + 1);
        labels.extend_from_slice(&self.labels);
        labels.push(target_label);

        Self {
            start: self.start,
            labels,
            distance: self.distance.saturating_add(edge.weight),
            end: edge.target,
        }
    }
}

impl<T> Path<T> {
    pub fn labels(&self) -> &[T] {
        &self.labels
    }

    pub fn into_labels(self) -> Vec<T> {
        self.labels
    }

    pub fn distance(&self) -> Weight {
        self.distance
    }

    pub fn start(&self) -> VertexId {
        self.start
    }

    pub fn end(&self) -> VertexId {
        self.end
    }

    pub fn end_label(&self) -> Option<&T> {
        self.labels.last()
    }

    pub fn contains(&self, label: &T) -> bool
    where
        T: PartialEq,
    {
        self.labels.contains(label)
    }

    /// Number of edges walked.
    pub fn hops(&self) -> usize {
        self.labels.len() - 1
    }
}
