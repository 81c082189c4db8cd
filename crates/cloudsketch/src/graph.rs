//! Graph storage for a single diagram.
//!
//! A diagram is stored as a directed [`petgraph`] graph of semantic nodes
//! and edges, plus a tree of [`ClusterScope`] values describing visual
//! containment. Clusters are purely visual: they never affect connectivity,
//! so the edge set lives on the flat graph while the scope tree only lists
//! which nodes each cluster owns.

use log::trace;
use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};

use cloudsketch_core::element::{ClusterStyle, Edge, Node};

use crate::error::SketchError;

/// Index of a cluster scope within a diagram.
pub(crate) type ClusterIndex = usize;

/// A visual containment scope within a diagram.
///
/// A scope groups the nodes declared directly inside one cluster, together
/// with any nested child clusters. The scope at the top of the tree has no
/// parent.
#[derive(Debug)]
pub(crate) struct ClusterScope {
    label: String,
    style: ClusterStyle,
    parent: Option<ClusterIndex>,
    depth: usize,
    nodes: Vec<NodeIndex>,
    children: Vec<ClusterIndex>,
}

impl ClusterScope {
    fn new(label: String, style: ClusterStyle, parent: Option<ClusterIndex>, depth: usize) -> Self {
        Self {
            label,
            style,
            parent,
            depth,
            nodes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// The cluster's display label.
    pub(crate) fn label(&self) -> &str {
        &self.label
    }

    /// The cluster's style overrides.
    pub(crate) fn style(&self) -> &ClusterStyle {
        &self.style
    }

    /// Nesting depth, starting at 0 for top-level clusters.
    pub(crate) fn depth(&self) -> usize {
        self.depth
    }

    /// Nodes declared directly inside this cluster.
    pub(crate) fn node_indices(&self) -> impl Iterator<Item = NodeIndex> {
        self.nodes.iter().copied()
    }

    /// Child clusters nested directly inside this cluster.
    pub(crate) fn child_indices(&self) -> impl Iterator<Item = ClusterIndex> {
        self.children.iter().copied()
    }
}

/// Graph storage for a single diagram.
///
/// Nodes and edges live in an insertion-ordered directed graph; cluster
/// scopes form a tree alongside it. Nodes declared outside every cluster
/// are tracked as root nodes.
#[derive(Debug, Default)]
pub(crate) struct DiagramGraph {
    graph: DiGraph<Node, Edge>,
    clusters: Vec<ClusterScope>,
    root_nodes: Vec<NodeIndex>,
}

impl DiagramGraph {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Adds a node, recording it either in the given cluster or at the root.
    pub(crate) fn add_node(&mut self, node: Node, cluster: Option<ClusterIndex>) -> NodeIndex {
        let idx = self.graph.add_node(node);
        match cluster {
            Some(cluster_idx) => self.clusters[cluster_idx].nodes.push(idx),
            None => self.root_nodes.push(idx),
        }
        trace!(node_index = idx.index(); "Added node to diagram graph");
        idx
    }

    /// Opens a new cluster scope beneath `parent`.
    pub(crate) fn add_cluster(
        &mut self,
        label: String,
        style: ClusterStyle,
        parent: Option<ClusterIndex>,
    ) -> ClusterIndex {
        let depth = parent.map_or(0, |p| self.clusters[p].depth + 1);
        let idx = self.clusters.len();
        self.clusters.push(ClusterScope::new(label, style, parent, depth));
        if let Some(parent_idx) = parent {
            self.clusters[parent_idx].children.push(idx);
        }
        idx
    }

    /// Adds an edge between two existing nodes.
    ///
    /// Node handles from another diagram are rejected rather than silently
    /// attached to whatever node happens to share the index.
    pub(crate) fn add_edge(
        &mut self,
        source: NodeIndex,
        target: NodeIndex,
        edge: Edge,
    ) -> Result<EdgeIndex, SketchError> {
        for endpoint in [source, target] {
            if self.graph.node_weight(endpoint).is_none() {
                return Err(SketchError::Graph(format!(
                    "edge references a node that does not exist in this diagram (index {})",
                    endpoint.index()
                )));
            }
        }
        Ok(self.graph.add_edge(source, target, edge))
    }

    pub(crate) fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub(crate) fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub(crate) fn cluster_count(&self) -> usize {
        self.clusters.len()
    }

    pub(crate) fn cluster(&self, idx: ClusterIndex) -> &ClusterScope {
        &self.clusters[idx]
    }

    /// Top-level cluster scopes, in declaration order.
    pub(crate) fn top_level_clusters(&self) -> impl Iterator<Item = ClusterIndex> + '_ {
        (0..self.clusters.len()).filter(|&idx| self.clusters[idx].parent.is_none())
    }

    /// Nodes declared outside every cluster, in declaration order.
    pub(crate) fn root_node_indices(&self) -> impl Iterator<Item = NodeIndex> {
        self.root_nodes.iter().copied()
    }

    pub(crate) fn node_weight(&self, idx: NodeIndex) -> &Node {
        self.graph
            .node_weight(idx)
            .expect("node index should exist")
    }

    /// All edges with endpoints, in declaration order.
    pub(crate) fn edges_with_endpoints(
        &self,
    ) -> impl Iterator<Item = (NodeIndex, NodeIndex, &Edge)> {
        self.graph.edge_indices().map(|idx| {
            let (source, target) = self
                .graph
                .edge_endpoints(idx)
                .expect("edge index should exist");
            let edge = self
                .graph
                .edge_weight(idx)
                .expect("edge index should exist");
            (source, target, edge)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cloudsketch_core::catalog::azure;

    fn node(label: &str) -> Node {
        Node::new(azure::compute::VM, label)
    }

    #[test]
    fn nodes_outside_clusters_are_roots() {
        let mut graph = DiagramGraph::new();
        let a = graph.add_node(node("a"), None);
        let cluster = graph.add_cluster("subnet".into(), ClusterStyle::default(), None);
        let b = graph.add_node(node("b"), Some(cluster));

        assert_eq!(graph.root_node_indices().collect::<Vec<_>>(), vec![a]);
        assert_eq!(
            graph.cluster(cluster).node_indices().collect::<Vec<_>>(),
            vec![b]
        );
    }

    #[test]
    fn nested_clusters_track_depth_and_children() {
        let mut graph = DiagramGraph::new();
        let outer = graph.add_cluster("vnet".into(), ClusterStyle::default(), None);
        let inner = graph.add_cluster("subnet".into(), ClusterStyle::default(), Some(outer));

        assert_eq!(graph.cluster(outer).depth(), 0);
        assert_eq!(graph.cluster(inner).depth(), 1);
        assert_eq!(
            graph.cluster(outer).child_indices().collect::<Vec<_>>(),
            vec![inner]
        );
        assert_eq!(graph.top_level_clusters().collect::<Vec<_>>(), vec![outer]);
    }

    #[test]
    fn foreign_node_handles_are_rejected() {
        let mut graph = DiagramGraph::new();
        let a = graph.add_node(node("a"), None);

        let mut other = DiagramGraph::new();
        let _ = other.add_node(node("x"), None);
        let foreign = other.add_node(node("y"), None);

        // `foreign` has index 1, which does not exist in `graph`.
        let result = graph.add_edge(a, foreign, Edge::new());
        assert!(matches!(result, Err(SketchError::Graph(_))));
    }

    #[test]
    fn edges_keep_declaration_order() {
        let mut graph = DiagramGraph::new();
        let a = graph.add_node(node("a"), None);
        let b = graph.add_node(node("b"), None);
        let c = graph.add_node(node("c"), None);

        graph.add_edge(a, b, Edge::new()).unwrap();
        graph.add_edge(b, c, Edge::new()).unwrap();

        let endpoints: Vec<_> = graph
            .edges_with_endpoints()
            .map(|(s, t, _)| (s, t))
            .collect();
        assert_eq!(endpoints, vec![(a, b), (b, c)]);
    }
}
