//! Precedence DAG leveling.
//!
//! Nodes live in an arena indexed by integer id, with a key-to-id lookup and
//! descendant lists stored as id lists. Leveling assigns every node the length
//! of the longest path from the root; sorting by level, then key, yields a
//! deterministic serving order.
//!
//! The graph moves from building to leveled exactly once:
//! [`DirectedAcyclicGraph::compute_levels`] consumes it.
//!
//! # Example
//!
//! ```
//! use tableforge_solver::dag::{sort_graph, DirectedAcyclicGraph};
//!
//! let mut dag = DirectedAcyclicGraph::new("");
//! dag.add_edge("b", "").unwrap();
//! dag.add_edge("c", "b").unwrap();
//! dag.add_edge("a", "b").unwrap();
//!
//! let mut nodes = dag.compute_levels().unwrap();
//! sort_graph(&mut nodes);
//!
//! let order: Vec<(&str, usize)> = nodes.iter().map(|n| (n.key.as_str(), n.max_level)).collect();
//! assert_eq!(order, vec![("", 0), ("b", 1), ("a", 2), ("c", 2)]);
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tableforge_core::DagError;
use tracing::{debug, info, trace};

/// A leveled node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DagNode {
    pub key: String,
    /// Longest path length, in edges, from the root.
    pub max_level: usize,
    /// Child keys in edge-declaration order; repeated edges repeat here.
    pub descendants: Vec<String>,
}

#[derive(Debug, Clone)]
struct ArenaNode {
    key: String,
    level: usize,
    descendants: SmallVec<[usize; 4]>,
}

impl ArenaNode {
    fn new(key: String) -> Self {
        Self {
            key,
            level: 0,
            descendants: SmallVec::new(),
        }
    }
}

const ROOT: usize = 0;

/// A single-rooted precedence graph under construction.
#[derive(Debug, Clone)]
pub struct DirectedAcyclicGraph {
    nodes: Vec<ArenaNode>,
    ids: HashMap<String, usize>,
}

impl DirectedAcyclicGraph {
    /// Creates a graph holding only the root at level 0.
    pub fn new(root: impl Into<String>) -> Self {
        let root = root.into();
        let mut ids = HashMap::new();
        ids.insert(root.clone(), ROOT);
        Self {
            nodes: vec![ArenaNode::new(root)],
            ids,
        }
    }

    /// The root key.
    pub fn root(&self) -> &str {
        &self.nodes[ROOT].key
    }

    /// Number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if `key` names a node.
    pub fn contains(&self, key: &str) -> bool {
        self.ids.contains_key(key)
    }

    /// Declares that `child` comes after `parent`.
    ///
    /// `child` is created on first mention. Repeating an edge is allowed.
    ///
    /// # Errors
    ///
    /// Returns [`DagError::UnknownParent`] if `parent` was never introduced;
    /// the graph is left unchanged.
    pub fn add_edge(&mut self, child: impl Into<String>, parent: &str) -> Result<(), DagError> {
        let child = child.into();
        let Some(&parent_id) = self.ids.get(parent) else {
            return Err(DagError::UnknownParent {
                child,
                parent: parent.to_string(),
            });
        };

        let child_id = match self.ids.get(&child) {
            Some(&id) => id,
            None => {
                let id = self.nodes.len();
                self.ids.insert(child.clone(), id);
                self.nodes.push(ArenaNode::new(child.clone()));
                id
            }
        };

        trace!(event = "edge_added", child = %child, parent = parent);
        self.nodes[parent_id].descendants.push(child_id);
        Ok(())
    }

    /// Computes every node's longest distance from the root.
    ///
    /// Relaxes edges from an explicit work stack starting at the root; a node
    /// whose level rises is pushed again so its own descendants are relaxed.
    /// Returns all nodes, root included, in no particular order.
    ///
    /// # Errors
    ///
    /// Returns [`DagError::CycleDetected`] once any level reaches the node
    /// count, which no acyclic graph allows.
    pub fn compute_levels(mut self) -> Result<Vec<DagNode>, DagError> {
        let node_count = self.nodes.len();
        let mut stack: Vec<usize> = Vec::new();
        let mut current = Some(ROOT);
        let mut relaxations: u64 = 0;

        while let Some(id) = current {
            for slot in 0..self.nodes[id].descendants.len() {
                let descendant = self.nodes[id].descendants[slot];
                // Re-read per edge: a self-loop raises `id` itself.
                let candidate = self.nodes[id].level + 1;
                let node = &mut self.nodes[descendant];
                if node.level < candidate {
                    node.level = candidate;
                    relaxations += 1;
                    if candidate >= node_count {
                        debug!(event = "cycle_detected", key = %node.key, level = candidate as u64);
                        return Err(DagError::CycleDetected {
                            key: node.key.clone(),
                            level: candidate,
                            node_count,
                        });
                    }
                    stack.push(descendant);
                }
            }
            current = stack.pop();
        }

        let max_level = self.nodes.iter().map(|n| n.level).max().unwrap_or(0);
        info!(
            event = "leveling_end",
            node_count = node_count as u64,
            relaxations = relaxations,
            max_level = max_level as u64,
        );

        let keys: Vec<String> = self.nodes.iter().map(|n| n.key.clone()).collect();
        Ok(self
            .nodes
            .into_iter()
            .map(|node| DagNode {
                descendants: node.descendants.iter().map(|&d| keys[d].clone()).collect(),
                key: node.key,
                max_level: node.level,
            })
            .collect())
    }
}

/// Orders nodes by level, then key.
pub fn sort_graph(nodes: &mut [DagNode]) {
    nodes.sort_by(|a, b| {
        a.max_level
            .cmp(&b.max_level)
            .then_with(|| a.key.cmp(&b.key))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use tableforge_test::{CYCLIC_EDGES, SIMPLE_EDGES};

    fn graph_from(edges: &[(&str, &str)]) -> DirectedAcyclicGraph {
        let mut dag = DirectedAcyclicGraph::new("");
        for &(child, parent) in edges {
            dag.add_edge(child, parent).unwrap();
        }
        dag
    }

    fn node(key: &str, max_level: usize, descendants: &[&str]) -> DagNode {
        DagNode {
            key: key.to_string(),
            max_level,
            descendants: descendants.iter().map(|d| d.to_string()).collect(),
        }
    }

    #[test]
    fn test_adds_and_sorts_nodes() {
        let mut nodes = graph_from(SIMPLE_EDGES).compute_levels().unwrap();
        sort_graph(&mut nodes);

        assert_eq!(
            nodes,
            vec![
                node("", 0, &["b"]),
                node("b", 1, &["c", "a"]),
                node("a", 2, &[]),
                node("c", 2, &[]),
            ]
        );
    }

    #[test]
    fn test_unknown_parent() {
        let mut dag = DirectedAcyclicGraph::new("");

        assert_eq!(
            dag.add_edge("c", "a"),
            Err(DagError::UnknownParent {
                child: "c".to_string(),
                parent: "a".to_string()
            })
        );
        assert_eq!(dag.node_count(), 1);
        assert!(!dag.contains("c"));
    }

    #[test]
    fn test_cycle_detected() {
        let err = graph_from(CYCLIC_EDGES).compute_levels().unwrap_err();
        assert!(matches!(err, DagError::CycleDetected { node_count: 3, .. }));
    }

    #[test]
    fn test_self_loop_is_a_cycle() {
        let err = graph_from(&[("a", ""), ("a", "a")])
            .compute_levels()
            .unwrap_err();
        assert!(matches!(err, DagError::CycleDetected { .. }));
    }

    #[test]
    fn test_edge_back_to_root_is_a_cycle() {
        let err = graph_from(&[("a", ""), ("", "a")])
            .compute_levels()
            .unwrap_err();
        assert!(matches!(err, DagError::CycleDetected { .. }));
    }

    #[test]
    fn test_longest_path_wins() {
        // root -> x -> y -> z and a shortcut root -> z.
        let mut dag = graph_from(&[("z", ""), ("x", ""), ("y", "x"), ("z", "y")]);
        assert_eq!(dag.node_count(), 4);
        dag.add_edge("w", "z").unwrap();

        let mut nodes = dag.compute_levels().unwrap();
        sort_graph(&mut nodes);
        let levels: Vec<(&str, usize)> = nodes.iter().map(|n| (n.key.as_str(), n.max_level)).collect();
        assert_eq!(levels, vec![("", 0), ("x", 1), ("y", 2), ("z", 3), ("w", 4)]);
    }

    #[test]
    fn test_repeated_edges_are_kept_and_harmless() {
        let nodes = graph_from(&[("a", ""), ("a", ""), ("b", "a"), ("b", "a")])
            .compute_levels()
            .unwrap();

        let root = nodes.iter().find(|n| n.key.is_empty()).unwrap();
        assert_eq!(root.descendants, vec!["a", "a"]);
        let b = nodes.iter().find(|n| n.key == "b").unwrap();
        assert_eq!(b.max_level, 2);
    }

    #[test]
    fn test_root_only() {
        let dag = DirectedAcyclicGraph::new("start");
        assert_eq!(dag.root(), "start");

        let nodes = dag.compute_levels().unwrap();
        assert_eq!(nodes, vec![node("start", 0, &[])]);
    }

    #[test]
    fn test_sort_breaks_level_ties_by_key() {
        let mut nodes = vec![node("b", 1, &[]), node("a", 1, &[]), node("c", 0, &[])];
        sort_graph(&mut nodes);
        let keys: Vec<&str> = nodes.iter().map(|n| n.key.as_str()).collect();
        assert_eq!(keys, vec!["c", "a", "b"]);
    }
}
