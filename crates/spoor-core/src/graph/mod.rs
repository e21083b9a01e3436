//! Directed weighted graph with insertion-ordered vertices
//!
//! Provides the adjacency structure and its mutation surface:
//! - vertex and edge insertion/removal, with symmetric edge variants
//! - membership and weight queries
//! - tree traversals and shortest-path algorithms in the submodules

pub mod algos;
pub mod traversal;

pub use algos::{DistanceMatrix, ShortestPaths};

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::{Result, SpoorError};

/// Edge weight. Distance maps reuse this type, with `f64::INFINITY`
/// marking unreachable vertices and `f64::NEG_INFINITY` marking
/// vertices dragged down by a negative cycle.
pub type Weight = f64;

/// Weight assigned to edges inserted without an explicit one.
pub const DEFAULT_WEIGHT: Weight = 1.0;

/// A directed out-edge stored in an adjacency list.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge<V> {
    /// Destination vertex
    pub to: V,
    /// Edge weight
    pub weight: Weight,
}

/// Directed weighted graph over hashable vertex keys.
///
/// Vertices iterate in insertion order, as do the out-edges of each
/// vertex, so the algorithms in the submodules are deterministic for a
/// given construction sequence. Mutations with absent endpoints are
/// silent no-ops; only the lookup methods ([`Graph::adjacency`],
/// [`Graph::get_edge_weight`]) and algorithm sources report missing
/// vertices as errors.
#[derive(Debug, Clone)]
pub struct Graph<V> {
    order: Vec<V>,
    adjacency: HashMap<V, Vec<Edge<V>>>,
}

impl<V> Default for Graph<V> {
    fn default() -> Self {
        Self {
            order: Vec::new(),
            adjacency: HashMap::new(),
        }
    }
}

impl<V: Eq + Hash + Clone + Debug> Graph<V> {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty graph sized for `vertices` insertions
    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            order: Vec::with_capacity(vertices),
            adjacency: HashMap::with_capacity(vertices),
        }
    }

    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.order.len()
    }

    /// Number of directed edges
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// All vertices in insertion order
    pub fn vertices(&self) -> &[V] {
        &self.order
    }

    /// Whether `v` is registered
    pub fn has_vertex(&self, v: &V) -> bool {
        self.adjacency.contains_key(v)
    }

    /// Register `v` with an empty adjacency list. Re-adding an existing
    /// vertex is a no-op and keeps its original position.
    pub fn add_vertex(&mut self, v: V) {
        if self.adjacency.contains_key(&v) {
            return;
        }
        self.order.push(v.clone());
        self.adjacency.insert(v, Vec::new());
    }

    /// Register every vertex yielded by `vertices`
    pub fn add_vertices<I>(&mut self, vertices: I)
    where
        I: IntoIterator<Item = V>,
    {
        for v in vertices {
            self.add_vertex(v);
        }
    }

    /// Remove `v` and strip it out of every other adjacency list, so no
    /// dangling edges remain. Removing an absent vertex is a no-op.
    pub fn remove_vertex(&mut self, v: &V) {
        if self.adjacency.remove(v).is_none() {
            return;
        }
        self.order.retain(|u| u != v);
        for edges in self.adjacency.values_mut() {
            edges.retain(|e| e.to != *v);
        }
    }

    /// Whether the directed edge `from -> to` exists. Absent endpoints
    /// answer `false`, never an error.
    pub fn has_edge(&self, from: &V, to: &V) -> bool {
        self.out_edges(from).iter().any(|e| e.to == *to)
    }

    /// Whether the edge exists in both directions
    pub fn has_edge_symmetric(&self, a: &V, b: &V) -> bool {
        self.has_edge(a, b) && self.has_edge(b, a)
    }

    /// Insert the directed edge `from -> to`.
    ///
    /// First write wins: if `from -> to` already exists the stored
    /// weight is kept and the call is a no-op. Absent endpoints also
    /// make the call a no-op, so construction order never panics.
    pub fn add_edge(&mut self, from: &V, to: &V, weight: Weight) {
        if !self.has_vertex(to) || self.has_edge(from, to) {
            return;
        }
        if let Some(edges) = self.adjacency.get_mut(from) {
            edges.push(Edge {
                to: to.clone(),
                weight,
            });
        }
    }

    /// Insert the edge in both directions, each subject to the
    /// first-write-wins rule of [`Graph::add_edge`].
    pub fn add_edge_symmetric(&mut self, a: &V, b: &V, weight: Weight) {
        self.add_edge(a, b, weight);
        self.add_edge(b, a, weight);
    }

    /// Remove the edge between `from` and `to`.
    ///
    /// Removal requires the edge in both directions and then removes
    /// both; a one-directional edge is left untouched.
    pub fn remove_edge(&mut self, from: &V, to: &V) {
        if !self.has_edge(from, to) || !self.has_edge(to, from) {
            return;
        }
        if let Some(edges) = self.adjacency.get_mut(from) {
            edges.retain(|e| e.to != *to);
        }
        if let Some(edges) = self.adjacency.get_mut(to) {
            edges.retain(|e| e.to != *from);
        }
    }

    /// Out-edges of `from` in insertion order
    pub fn adjacency(&self, from: &V) -> Result<&[Edge<V>]> {
        self.adjacency
            .get(from)
            .map(Vec::as_slice)
            .ok_or_else(|| SpoorError::vertex_not_found(from))
    }

    /// Weight of the directed edge `from -> to`
    pub fn get_edge_weight(&self, from: &V, to: &V) -> Result<Weight> {
        self.adjacency(from)?
            .iter()
            .find(|e| e.to == *to)
            .map(|e| e.weight)
            .ok_or_else(|| SpoorError::edge_not_found(from, to))
    }

    /// Out-edges of `v`, empty when `v` is absent
    pub(crate) fn out_edges(&self, v: &V) -> &[Edge<V>] {
        self.adjacency.get(v).map(Vec::as_slice).unwrap_or(&[])
    }
}
