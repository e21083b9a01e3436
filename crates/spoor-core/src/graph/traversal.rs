//! Unweighted tree traversals (BFS and DFS)

use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::{Result, SpoorError};
use crate::graph::Graph;

impl<V: Eq + Hash + Clone + Debug> Graph<V> {
    /// Breadth-first tree from `source`.
    ///
    /// Produces one (parent, child) edge for every vertex reachable
    /// from the source, each parent at minimal hop distance. Edges are
    /// ordered by child in vertex insertion order.
    #[tracing::instrument(skip(self), fields(vertices = self.vertex_count()))]
    pub fn bfs_tree(&self, source: &V) -> Result<Vec<(V, V)>> {
        if !self.has_vertex(source) {
            return Err(SpoorError::vertex_not_found(source));
        }

        let mut visited = HashSet::new();
        let mut parent: HashMap<V, V> = HashMap::new();
        let mut frontier = VecDeque::new();

        visited.insert(source.clone());
        frontier.push_back(source.clone());

        while let Some(current) = frontier.pop_front() {
            for edge in self.out_edges(&current) {
                if visited.insert(edge.to.clone()) {
                    parent.insert(edge.to.clone(), current.clone());
                    frontier.push_back(edge.to.clone());
                }
            }
        }

        Ok(self.tree_from_parents(&parent))
    }

    /// Depth-first tree from `source`, built by recursion.
    ///
    /// Edges appear in discovery order. Stack depth grows with the
    /// depth of the traversal tree; prefer [`Graph::dfs_tree`] on deep
    /// graphs.
    #[tracing::instrument(skip(self), fields(vertices = self.vertex_count()))]
    pub fn dfs_tree_recursive(&self, source: &V) -> Result<Vec<(V, V)>> {
        if !self.has_vertex(source) {
            return Err(SpoorError::vertex_not_found(source));
        }

        let mut marked = HashSet::new();
        let mut tree = Vec::new();
        marked.insert(source.clone());
        self.dfs_visit(source, &mut marked, &mut tree);
        Ok(tree)
    }

    fn dfs_visit(&self, current: &V, marked: &mut HashSet<V>, tree: &mut Vec<(V, V)>) {
        for edge in self.out_edges(current) {
            if marked.insert(edge.to.clone()) {
                tree.push((current.clone(), edge.to.clone()));
                self.dfs_visit(&edge.to, marked, tree);
            }
        }
    }

    /// Depth-first tree from `source`, built with an explicit stack.
    ///
    /// Each popped unvisited vertex claims its still-unvisited
    /// neighbours and pushes all of them, so a vertex reachable along
    /// several branches keeps the parent that claimed it last before
    /// its own visit. The tree can therefore differ from
    /// [`Graph::dfs_tree_recursive`] on graphs with shared
    /// descendants; both visit every reachable vertex exactly once.
    /// Edges are ordered by child in vertex insertion order.
    #[tracing::instrument(skip(self), fields(vertices = self.vertex_count()))]
    pub fn dfs_tree(&self, source: &V) -> Result<Vec<(V, V)>> {
        if !self.has_vertex(source) {
            return Err(SpoorError::vertex_not_found(source));
        }

        let mut marked = HashSet::new();
        let mut parent: HashMap<V, V> = HashMap::new();
        let mut stack = vec![source.clone()];

        while let Some(current) = stack.pop() {
            if !marked.insert(current.clone()) {
                continue;
            }
            for edge in self.out_edges(&current) {
                if !marked.contains(&edge.to) {
                    parent.insert(edge.to.clone(), current.clone());
                }
                stack.push(edge.to.clone());
            }
        }

        Ok(self.tree_from_parents(&parent))
    }

    /// Order tree edges by child in vertex insertion order
    fn tree_from_parents(&self, parent: &HashMap<V, V>) -> Vec<(V, V)> {
        let mut tree = Vec::with_capacity(parent.len());
        for child in self.vertices() {
            if let Some(p) = parent.get(child) {
                tree.push((p.clone(), child.clone()));
            }
        }
        tree
    }
}

#[cfg(test)]
mod tests {
    use crate::error::SpoorError;
    use crate::graph::Graph;

    /// A -> {B, C}, B -> D, C -> D
    fn diamond() -> Graph<&'static str> {
        let mut g = Graph::new();
        g.add_vertices(["A", "B", "C", "D"]);
        g.add_edge(&"A", &"B", 1.0);
        g.add_edge(&"A", &"C", 1.0);
        g.add_edge(&"B", &"D", 1.0);
        g.add_edge(&"C", &"D", 1.0);
        g
    }

    #[test]
    fn test_bfs_tree_parents_are_minimal_hops() {
        let mut g = Graph::new();
        g.add_vertices(["A", "B", "C"]);
        g.add_edge(&"A", &"B", 1.0);
        g.add_edge(&"B", &"C", 1.0);
        g.add_edge(&"A", &"C", 1.0);

        // C is one hop from A, so B never becomes its parent
        let tree = g.bfs_tree(&"A").unwrap();
        assert_eq!(tree, [("A", "B"), ("A", "C")]);
    }

    #[test]
    fn test_bfs_tree_covers_reachable_vertices_once() {
        let g = diamond();
        let tree = g.bfs_tree(&"A").unwrap();
        assert_eq!(tree, [("A", "B"), ("A", "C"), ("B", "D")]);
    }

    #[test]
    fn test_bfs_tree_excludes_unreachable_vertices() {
        let mut g = diamond();
        g.add_vertex("E");
        let tree = g.bfs_tree(&"A").unwrap();
        assert_eq!(tree.len(), 3);
        assert!(tree.iter().all(|(_, child)| *child != "E"));
    }

    #[test]
    fn test_bfs_tree_missing_source() {
        let g = diamond();
        assert!(matches!(
            g.bfs_tree(&"Z"),
            Err(SpoorError::VertexNotFound { .. })
        ));
    }

    #[test]
    fn test_dfs_tree_recursive_discovery_order() {
        let mut g = Graph::new();
        g.add_vertices(["A", "B", "C", "D"]);
        g.add_edge(&"A", &"B", 1.0);
        g.add_edge(&"A", &"C", 1.0);
        g.add_edge(&"B", &"D", 1.0);

        let tree = g.dfs_tree_recursive(&"A").unwrap();
        assert_eq!(tree, [("A", "B"), ("B", "D"), ("A", "C")]);
    }

    #[test]
    fn test_dfs_tree_iterative_on_diamond() {
        // The stack pops C before B, so C claims D
        let g = diamond();
        let tree = g.dfs_tree(&"A").unwrap();
        assert_eq!(tree, [("A", "B"), ("A", "C"), ("C", "D")]);
    }

    #[test]
    fn test_dfs_tree_variants_disagree_on_shared_children() {
        let mut g = Graph::new();
        g.add_vertices(["A", "B", "C", "D"]);
        g.add_edge(&"A", &"B", 1.0);
        g.add_edge(&"A", &"C", 1.0);
        g.add_edge(&"C", &"D", 1.0);
        g.add_edge(&"C", &"B", 1.0);

        // C pops first and reclaims B before B's own visit
        let iterative = g.dfs_tree(&"A").unwrap();
        assert_eq!(iterative, [("C", "B"), ("A", "C"), ("C", "D")]);

        let recursive = g.dfs_tree_recursive(&"A").unwrap();
        assert_eq!(recursive, [("A", "B"), ("A", "C"), ("C", "D")]);
    }

    #[test]
    fn test_dfs_tree_handles_cycles() {
        let mut g = Graph::new();
        g.add_vertices(["A", "B", "C"]);
        g.add_edge(&"A", &"B", 1.0);
        g.add_edge(&"B", &"C", 1.0);
        g.add_edge(&"C", &"A", 1.0);

        let tree = g.dfs_tree(&"A").unwrap();
        assert_eq!(tree, [("A", "B"), ("B", "C")]);

        let tree = g.dfs_tree_recursive(&"A").unwrap();
        assert_eq!(tree, [("A", "B"), ("B", "C")]);
    }
}
