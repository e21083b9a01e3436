use std::collections::{HashMap, HashSet};
use std::fmt::{Debug, Display};
use std::hash::Hash;

use crate::error::{Result, SpoorError};
use crate::graph::{Graph, Weight};

/// Single-source shortest-path result: final distances plus a rendered
/// predecessor walk per vertex.
#[derive(Debug, Clone)]
pub struct ShortestPaths<V> {
    /// Total weight of the shortest path to each vertex
    pub distances: HashMap<V, Weight>,
    /// Path rendering `"dest <- ... <- source"` per vertex
    pub paths: HashMap<V, String>,
}

impl<V: Eq + Hash + Clone + Debug + Display> Graph<V> {
    /// Dijkstra single-source shortest paths.
    ///
    /// Weights must be non-negative; negative edges silently produce
    /// wrong distances (use [`Graph::bellman_ford`] for those). The
    /// minimum-distance unexplored vertex is found by a linear scan in
    /// vertex insertion order with ties keeping the first candidate,
    /// so results are deterministic. Unreachable vertices keep
    /// distance `f64::INFINITY` and the path string `"unreachable"`.
    #[tracing::instrument(skip(self), fields(vertices = self.vertex_count()))]
    pub fn dijkstra(&self, source: &V) -> Result<ShortestPaths<V>> {
        if !self.has_vertex(source) {
            return Err(SpoorError::vertex_not_found(source));
        }

        let mut distances: HashMap<V, Weight> = self
            .vertices()
            .iter()
            .map(|v| (v.clone(), f64::INFINITY))
            .collect();
        distances.insert(source.clone(), 0.0);

        let mut previous: HashMap<V, V> = HashMap::new();
        let mut explored: HashSet<V> = HashSet::new();

        for _ in 0..self.vertex_count() {
            let Some(current) = self.closest_unexplored(&distances, &explored) else {
                break;
            };
            explored.insert(current.clone());

            for edge in self.out_edges(&current) {
                let candidate = distances[&current] + edge.weight;
                if candidate < distances[&edge.to] {
                    distances.insert(edge.to.clone(), candidate);
                    previous.insert(edge.to.clone(), current.clone());
                }
            }
        }

        let paths = self.render_paths(source, &previous);
        Ok(ShortestPaths { distances, paths })
    }

    /// First vertex in insertion order among the unexplored minimum
    /// distances
    fn closest_unexplored(
        &self,
        distances: &HashMap<V, Weight>,
        explored: &HashSet<V>,
    ) -> Option<V> {
        let mut closest: Option<&V> = None;
        for v in self.vertices() {
            if explored.contains(v) {
                continue;
            }
            match closest {
                Some(best) if distances[v] >= distances[best] => {}
                _ => closest = Some(v),
            }
        }
        closest.cloned()
    }

    fn render_paths(&self, source: &V, previous: &HashMap<V, V>) -> HashMap<V, String> {
        let mut paths = HashMap::with_capacity(self.vertex_count());
        for dest in self.vertices() {
            paths.insert(dest.clone(), render_walk(source, dest, previous));
        }
        paths
    }
}

/// Walk predecessors from `dest` back to `source`, rendering
/// `"dest <- ... <- source"`. The source renders as itself; a vertex
/// with no predecessor chain renders as `"unreachable"`.
fn render_walk<V: Eq + Hash + Display>(source: &V, dest: &V, previous: &HashMap<V, V>) -> String {
    if dest == source {
        return source.to_string();
    }

    let mut rendered = dest.to_string();
    let mut cursor = dest;
    while let Some(prev) = previous.get(cursor) {
        rendered.push_str(&format!(" <- {}", prev));
        if prev == source {
            return rendered;
        }
        cursor = prev;
    }

    "unreachable".to_string()
}
