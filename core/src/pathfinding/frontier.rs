use super::path::Path;
use crate::chaining_map::ChainingMap;
use crate::error::GraphResult;
use crate::graph::WeightedDirectedGraph;
use crate::label::Label;
use std::{cmp::Ordering, collections::BinaryHeap};

struct FrontierEntry<T> {
    path: Path<T>,
    end_key: String,
    sequence: u64,
}

impl<T> PartialEq for FrontierEntry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for FrontierEntry<T> {}

impl<T> PartialOrd for FrontierEntry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for FrontierEntry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed on every key: BinaryHeap is a max-heap.
        other
            .path
            .distance()
            .cmp(&self.path.distance())
            .then_with(|| other.end_key.cmp(&self.end_key))
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub paths_popped: usize,
    pub paths_discarded: usize,
    pub peak_frontier: usize,
}

/// Frontier and settled set shared by the point-to-point and single-source
/// searches.
///
/// Paths pop by distance, then by the string form of their end label, then
/// by push order. Paths ending at a settled vertex are dropped lazily when
/// they reach the head of the frontier.
pub(crate) struct SearchState<T> {
    frontier: BinaryHeap<FrontierEntry<T>>,
    settled: ChainingMap<T, ()>,
    next_sequence: u64,
    pub(crate) stats: SearchStats,
}

impl<T: Label> SearchState<T> {
    pub(crate) fn new(seed: Path<T>) -> Self {
        let mut state = Self {
            frontier: BinaryHeap::new(),
            settled: ChainingMap::new(),
            next_sequence: 0,
            stats: SearchStats::default(),
        };
        state.push(seed);
        state
    }

    pub(crate) fn pop_unsettled(&mut self) -> Option<Path<T>> {
        while self
            .frontier
            .peek()
            .is_some_and(|head| self.is_settled(&head.path))
        {
            self.frontier.pop();
            self.stats.paths_discarded += 1;
        }

        let entry = self.frontier.pop()?;
        self.stats.paths_popped += 1;
        Some(entry.path)
    }

    /// Pushes one extension of `path` per leaving edge whose target is not
    /// already on `path`. The end vertex is settled as soon as one such
    /// extension exists.
    pub(crate) fn expand(
        &mut self,
        graph: &WeightedDirectedGraph<T>,
        path: &Path<T>,
    ) -> GraphResult<()> {
        let end_vertex = graph.vertex(path.end())?;

        for edge in &end_vertex.edges_leaving {
            let target_label = &graph.vertex(edge.target)?.label;
            if path.contains(target_label) {
                continue;
            }

            self.settled.put(end_vertex.label.clone(), ());
            self.push(path.extend(edge, target_label.clone()));
        }

        Ok(())
    }

    fn is_settled(&self, path: &Path<T>) -> bool {
        path.end_label()
            .is_some_and(|label| self.settled.contains_key(label))
    }

    fn push(&mut self, path: Path<T>) {
        let end_key = path
            .end_label()
            .map(Label::tie_break_key)
            .unwrap_or_default();

        self.frontier.push(FrontierEntry {
            path,
            end_key,
            sequence: self.next_sequence,
        });
        self.next_sequence += 1;
        self.stats.peak_frontier = self.stats.peak_frontier.max(self.frontier.len());
    }
}
