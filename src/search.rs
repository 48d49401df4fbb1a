//! Breadth-first shortest path over the co-star graph
//!
//! The frontier is a FIFO queue of [`SearchNode`]s. Each node owns its path
//! and the set of people already on it; children are built from a copy of
//! the parent plus one step, so a node is never mutated after creation.
//!
//! The goal test runs when a child is created, not when it is dequeued.
//! Because every depth-d node is enqueued before any depth-(d+1) node is
//! dequeued, the first child that reaches the target lies on a shortest
//! path.
//!
//! A person is never revisited on the same path. As a consequence a search
//! from a person to themselves reports [`SearchOutcome::NotConnected`]: no
//! zero-length path is synthesized.

use ahash::AHashSet;
use serde::Serialize;
use std::collections::VecDeque;
use std::time::Instant;
use tracing::debug;

use crate::dataset::DatasetIndex;
use crate::error::{DegreesError, Result};
use crate::neighbors::NeighborResolver;
use crate::schema::{PathStep, PersonId};

/// Result of a shortest-path query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Steps from the source (exclusive) to the target (inclusive)
    Connected(Vec<PathStep>),
    NotConnected,
}

impl SearchOutcome {
    pub fn path(&self) -> Option<&[PathStep]> {
        match self {
            Self::Connected(path) => Some(path),
            Self::NotConnected => None,
        }
    }

    /// Degrees of separation, if connected
    pub fn degrees(&self) -> Option<usize> {
        self.path().map(<[PathStep]>::len)
    }

    pub fn is_connected(&self) -> bool {
        matches!(self, Self::Connected(_))
    }
}

/// Counters collected during one search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Nodes popped from the frontier
    pub nodes_expanded: usize,
    /// Children created, including the one that hit the target
    pub nodes_generated: usize,
    pub max_frontier: usize,
    pub depth_reached: usize,
}

/// A partial path held by the frontier
#[derive(Debug, Clone)]
struct SearchNode {
    depth: usize,
    path: Vec<PathStep>,
    visited: AHashSet<PersonId>,
}

impl SearchNode {
    fn root(source: &PersonId) -> Self {
        let mut visited = AHashSet::new();
        visited.insert(source.clone());
        Self {
            depth: 0,
            path: Vec::new(),
            visited,
        }
    }

    /// Person the next expansion starts from
    fn frontier_person<'a>(&'a self, source: &'a PersonId) -> &'a PersonId {
        self.path.last().map_or(source, |step| &step.person_id)
    }

    fn child(&self, step: PathStep) -> Self {
        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.extend_from_slice(&self.path);
        let mut visited = self.visited.clone();
        visited.insert(step.person_id.clone());
        path.push(step);
        Self {
            depth: self.depth + 1,
            path,
            visited,
        }
    }
}

/// Shortest-path driver over a [`DatasetIndex`]
#[derive(Debug, Clone, Copy)]
pub struct PathSearch<'a> {
    index: &'a DatasetIndex,
    neighbors: NeighborResolver<'a>,
    deadline: Option<Instant>,
}

impl<'a> PathSearch<'a> {
    pub fn new(index: &'a DatasetIndex) -> Self {
        Self {
            index,
            neighbors: NeighborResolver::new(index),
            deadline: None,
        }
    }

    /// Abort with [`DegreesError::SearchCancelled`] once `deadline` passes.
    ///
    /// Checked once per dequeued node.
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn shortest_path(&self, source: &PersonId, target: &PersonId) -> Result<SearchOutcome> {
        self.shortest_path_with_stats(source, target).map(|(outcome, _)| outcome)
    }

    pub fn shortest_path_with_stats(
        &self,
        source: &PersonId,
        target: &PersonId,
    ) -> Result<(SearchOutcome, SearchStats)> {
        for id in [source, target] {
            if !self.index.contains_person(id) {
                return Err(DegreesError::UnknownPerson { id: id.to_string() });
            }
        }

        let started = Instant::now();
        let mut stats = SearchStats::default();
        let mut frontier = VecDeque::new();
        frontier.push_back(SearchNode::root(source));

        while let Some(node) = frontier.pop_front() {
            if let Some(deadline) = self.deadline {
                if Instant::now() >= deadline {
                    return Err(DegreesError::SearchCancelled {
                        elapsed_ms: started.elapsed().as_millis(),
                        depth: node.depth,
                    });
                }
            }

            stats.nodes_expanded += 1;
            stats.depth_reached = stats.depth_reached.max(node.depth);

            let from = node.frontier_person(source);
            for step in self.neighbors.neighbors(from) {
                if node.visited.contains(&step.person_id) {
                    continue;
                }

                let reached_target = step.person_id == *target;
                let child = node.child(step);
                stats.nodes_generated += 1;

                if reached_target {
                    stats.depth_reached = child.depth;
                    debug!(
                        source = %source,
                        target = %target,
                        degrees = child.depth,
                        expanded = stats.nodes_expanded,
                        generated = stats.nodes_generated,
                        max_frontier = stats.max_frontier,
                        "path found"
                    );
                    return Ok((SearchOutcome::Connected(child.path), stats));
                }

                frontier.push_back(child);
            }

            stats.max_frontier = stats.max_frontier.max(frontier.len());
        }

        debug!(
            source = %source,
            target = %target,
            expanded = stats.nodes_expanded,
            depth = stats.depth_reached,
            "frontier exhausted, not connected"
        );
        Ok((SearchOutcome::NotConnected, stats))
    }
}
