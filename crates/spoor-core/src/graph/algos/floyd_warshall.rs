use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::{Result, SpoorError};
use crate::graph::{Graph, Weight};

/// All-pairs shortest-path result: a distance and a predecessor entry
/// for every ordered vertex pair.
#[derive(Debug, Clone)]
pub struct DistanceMatrix<V> {
    /// `distances[source][dest]` is the total weight of the shortest path
    pub distances: HashMap<V, HashMap<V, Weight>>,
    /// `predecessors[source][dest]` is the vertex before `dest` on that path
    pub predecessors: HashMap<V, HashMap<V, Option<V>>>,
}

impl<V: Eq + Hash + Clone> DistanceMatrix<V> {
    /// Shortest-path distance, if both endpoints were in the graph
    pub fn distance(&self, source: &V, dest: &V) -> Option<Weight> {
        self.distances.get(source)?.get(dest).copied()
    }

    /// Reconstruct the path from `source` to `dest` by walking
    /// predecessors backwards. Yields the full vertex chain including
    /// both endpoints, `[dest]` alone when `dest` is unreachable and
    /// `[source]` alone on the diagonal.
    pub fn path(&self, source: &V, dest: &V) -> Vec<V> {
        let mut chain = vec![dest.clone()];
        let Some(row) = self.predecessors.get(source) else {
            return chain;
        };

        let mut cursor = dest.clone();
        while let Some(Some(prev)) = row.get(&cursor) {
            chain.push(prev.clone());
            cursor = prev.clone();
        }
        chain.reverse();
        chain
    }
}

impl<V: Eq + Hash + Clone + Debug> Graph<V> {
    /// Floyd-Warshall all-pairs shortest paths.
    ///
    /// Handles negative edge weights. A negative cycle leaves every
    /// distance through it undefined, so it is reported as
    /// [`SpoorError::NegativeCycle`] instead of a partial result.
    #[tracing::instrument(skip(self), fields(vertices = self.vertex_count(), edges = self.edge_count()))]
    pub fn floyd_warshall(&self) -> Result<DistanceMatrix<V>> {
        let n = self.vertex_count();
        let verts = self.vertices();
        let index: HashMap<&V, usize> = verts.iter().enumerate().map(|(i, v)| (v, i)).collect();

        let mut dist = vec![vec![f64::INFINITY; n]; n];
        let mut prev: Vec<Vec<Option<usize>>> = vec![vec![None; n]; n];
        for i in 0..n {
            dist[i][i] = 0.0;
        }

        for u in verts {
            let ui = index[u];
            for edge in self.out_edges(u) {
                let vi = index[&edge.to];
                if edge.weight < dist[ui][vi] {
                    dist[ui][vi] = edge.weight;
                    if ui != vi {
                        prev[ui][vi] = Some(ui);
                    }
                }
            }
        }

        for k in 0..n {
            for i in 0..n {
                for j in 0..n {
                    let through = dist[i][k] + dist[k][j];
                    if through < dist[i][j] {
                        dist[i][j] = through;
                        prev[i][j] = prev[k][j];
                    }
                }
            }
        }

        // A vertex cheaper to reach through a round trip than by
        // staying put means some cycle has negative total weight.
        if (0..n).any(|i| dist[i][i] < 0.0) {
            return Err(SpoorError::NegativeCycle);
        }

        let mut distances = HashMap::with_capacity(n);
        let mut predecessors = HashMap::with_capacity(n);
        for (i, u) in verts.iter().enumerate() {
            let mut dist_row = HashMap::with_capacity(n);
            let mut prev_row = HashMap::with_capacity(n);
            for (j, v) in verts.iter().enumerate() {
                dist_row.insert(v.clone(), dist[i][j]);
                prev_row.insert(v.clone(), prev[i][j].map(|p| verts[p].clone()));
            }
            distances.insert(u.clone(), dist_row);
            predecessors.insert(u.clone(), prev_row);
        }

        Ok(DistanceMatrix {
            distances,
            predecessors,
        })
    }
}
