use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::{Result, SpoorError};
use crate::graph::{Graph, Weight};

impl<V: Eq + Hash + Clone + Debug> Graph<V> {
    /// Bellman-Ford single-source shortest paths.
    ///
    /// Handles negative edge weights. Runs up to `|V| - 1` relaxation
    /// sweeps over every edge, stopping early once a sweep changes
    /// nothing. Vertices on or downstream of a negative cycle report
    /// `f64::NEG_INFINITY`; unreachable vertices report
    /// `f64::INFINITY`.
    #[tracing::instrument(skip(self), fields(vertices = self.vertex_count(), edges = self.edge_count()))]
    pub fn bellman_ford(&self, source: &V) -> Result<HashMap<V, Weight>> {
        if !self.has_vertex(source) {
            return Err(SpoorError::vertex_not_found(source));
        }

        let mut distances: HashMap<V, Weight> = self
            .vertices()
            .iter()
            .map(|v| (v.clone(), f64::INFINITY))
            .collect();
        distances.insert(source.clone(), 0.0);

        let sweeps = self.vertex_count().saturating_sub(1);
        for _ in 0..sweeps {
            let mut updated = false;
            for u in self.vertices() {
                for edge in self.out_edges(u) {
                    let candidate = distances[u] + edge.weight;
                    if candidate < distances[&edge.to] {
                        distances.insert(edge.to.clone(), candidate);
                        updated = true;
                    }
                }
            }
            if !updated {
                break;
            }
        }

        // An edge still relaxable after |V| - 1 sweeps sits on or behind
        // a negative cycle; the sentinel spreads the same way distances
        // do until everything downstream carries it. |V| passes, so a
        // lone vertex still gets its self-loop checked.
        for _ in 0..self.vertex_count() {
            let mut updated = false;
            for u in self.vertices() {
                for edge in self.out_edges(u) {
                    if distances[u] + edge.weight < distances[&edge.to] {
                        distances.insert(edge.to.clone(), f64::NEG_INFINITY);
                        updated = true;
                    }
                }
            }
            if !updated {
                break;
            }
        }

        Ok(distances)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::SpoorError;
    use crate::graph::Graph;

    #[test]
    fn test_bellman_ford_matches_known_distances() {
        let mut g = Graph::new();
        g.add_vertices(["A", "B", "C"]);
        g.add_edge(&"A", &"B", 1.0);
        g.add_edge(&"B", &"C", 2.0);
        g.add_edge(&"A", &"C", 5.0);

        let distances = g.bellman_ford(&"A").unwrap();
        assert_eq!(distances[&"A"], 0.0);
        assert_eq!(distances[&"B"], 1.0);
        assert_eq!(distances[&"C"], 3.0);
    }

    #[test]
    fn test_bellman_ford_negative_edge_reroute() {
        let mut g = Graph::new();
        g.add_vertices(["A", "B", "C", "D"]);
        g.add_edge(&"A", &"B", 4.0);
        g.add_edge(&"A", &"C", 2.0);
        g.add_edge(&"C", &"B", -3.0);
        g.add_edge(&"B", &"D", 1.0);

        let distances = g.bellman_ford(&"A").unwrap();
        assert_eq!(distances[&"B"], -1.0);
        assert_eq!(distances[&"D"], 0.0);
    }

    #[test]
    fn test_bellman_ford_needs_multiple_sweeps() {
        // Vertices registered against the chain direction, so each
        // sweep in insertion order settles exactly one more vertex.
        let mut g = Graph::new();
        g.add_vertices(["D", "C", "B", "A"]);
        g.add_edge(&"A", &"B", 1.0);
        g.add_edge(&"B", &"C", 1.0);
        g.add_edge(&"C", &"D", 1.0);

        let distances = g.bellman_ford(&"A").unwrap();
        assert_eq!(distances[&"A"], 0.0);
        assert_eq!(distances[&"B"], 1.0);
        assert_eq!(distances[&"C"], 2.0);
        assert_eq!(distances[&"D"], 3.0);
    }

    #[test]
    fn test_bellman_ford_unreachable_is_infinite() {
        let mut g = Graph::new();
        g.add_vertices(["A", "B"]);

        let distances = g.bellman_ford(&"A").unwrap();
        assert_eq!(distances[&"A"], 0.0);
        assert_eq!(distances[&"B"], f64::INFINITY);
    }

    #[test]
    fn test_bellman_ford_negative_cycle_poisons_downstream() {
        let mut g = Graph::new();
        g.add_vertices(["A", "B", "C", "D", "E"]);
        g.add_edge(&"A", &"B", 1.0);
        g.add_edge(&"B", &"C", -1.0);
        g.add_edge(&"C", &"B", -1.0);
        g.add_edge(&"C", &"D", 1.0);

        let distances = g.bellman_ford(&"A").unwrap();
        assert_eq!(distances[&"A"], 0.0);
        assert_eq!(distances[&"B"], f64::NEG_INFINITY);
        assert_eq!(distances[&"C"], f64::NEG_INFINITY);
        assert_eq!(distances[&"D"], f64::NEG_INFINITY);
        // Disconnected from the cycle entirely
        assert_eq!(distances[&"E"], f64::INFINITY);
    }

    #[test]
    fn test_bellman_ford_single_vertex_negative_self_loop() {
        let mut g = Graph::new();
        g.add_vertex("A");
        g.add_edge(&"A", &"A", -1.0);

        let distances = g.bellman_ford(&"A").unwrap();
        assert_eq!(distances[&"A"], f64::NEG_INFINITY);
    }

    #[test]
    fn test_bellman_ford_missing_source() {
        let g: Graph<&str> = Graph::new();
        assert!(matches!(
            g.bellman_ford(&"A"),
            Err(SpoorError::VertexNotFound { .. })
        ));
    }
}
