//! The diagram root container and builder API.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use log::{debug, info};
use petgraph::graph::NodeIndex;

use cloudsketch_core::catalog::{self, NodeKind};
use cloudsketch_core::element::{ClusterStyle, Edge, Node};
use cloudsketch_core::style::OutputFormat;

use crate::config::AppConfig;
use crate::error::SketchError;
use crate::export::dot::DotBuilder;
use crate::graph::{ClusterIndex, DiagramGraph};
use crate::render;

/// Handle to a node within one diagram.
///
/// Handles are only meaningful for the diagram that created them; passing a
/// handle to another diagram's edge operations produces a
/// [`SketchError::Graph`] error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) NodeIndex);

/// The root container for one architecture diagram.
///
/// A `Diagram` owns all nodes, clusters, and edges declared for a single
/// render. Construction is declarative: create nodes (optionally inside
/// nested clusters), connect them, then hand the whole description to
/// Graphviz with [`Diagram::render`] or inspect it with [`Diagram::to_dot`].
///
/// # Examples
///
/// ```
/// use cloudsketch::Diagram;
/// use cloudsketch::catalog::{azure, onprem};
///
/// let mut diagram = Diagram::new("Web Service");
/// let users = diagram.node(onprem::client::USERS, "End Users");
/// let (web, db) = diagram.cluster("Application", |d| {
///     let web = d.node(azure::web::APP_SERVICES, "App Service");
///     let db = d.node(azure::database::SQL_DATABASES, "SQL Database");
///     (web, db)
/// });
/// diagram.chain(&[users, web, db])?;
///
/// assert_eq!(diagram.node_count(), 3);
/// assert_eq!(diagram.edge_count(), 2);
/// let dot = diagram.to_dot()?;
/// assert!(dot.contains("digraph"));
/// # Ok::<(), cloudsketch::SketchError>(())
/// ```
pub struct Diagram {
    title: String,
    filename: String,
    format: OutputFormat,
    show: bool,
    config: AppConfig,
    graph: DiagramGraph,
    cluster_stack: Vec<ClusterIndex>,
    extra_graph_attrs: IndexMap<String, String>,
}

impl Diagram {
    /// Creates a diagram with the default configuration.
    ///
    /// The output filename is derived from the title: whitespace runs become
    /// underscores and the result is lowercased.
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_config(title, AppConfig::default())
    }

    /// Creates a diagram with an explicit configuration.
    pub fn with_config(title: impl Into<String>, config: AppConfig) -> Self {
        let title = title.into();
        let filename = derive_filename(&title);
        debug!(title = title.as_str(), filename = filename.as_str(); "Created diagram");
        Self {
            title,
            filename,
            format: OutputFormat::default(),
            show: false,
            config,
            graph: DiagramGraph::new(),
            cluster_stack: Vec::new(),
            extra_graph_attrs: IndexMap::new(),
        }
    }

    /// The diagram title, used as the rendered graph label.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The output filename stem (without extension).
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// The output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// The diagram configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Overrides the derived output filename stem.
    pub fn set_filename(&mut self, filename: impl Into<String>) -> &mut Self {
        self.filename = filename.into();
        self
    }

    /// Sets the output format.
    pub fn set_format(&mut self, format: OutputFormat) -> &mut Self {
        self.format = format;
        self
    }

    /// When set, [`Diagram::render`] opens the output in the platform viewer.
    pub fn set_show(&mut self, show: bool) -> &mut Self {
        self.show = show;
        self
    }

    /// Sets a raw Graphviz graph attribute, overriding anything the
    /// configuration would emit for the same key.
    pub fn set_graph_attr(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.extra_graph_attrs.insert(key.into(), value.into());
        self
    }

    pub(crate) fn extra_graph_attrs(&self) -> &IndexMap<String, String> {
        &self.extra_graph_attrs
    }

    pub(crate) fn graph(&self) -> &DiagramGraph {
        &self.graph
    }

    // =========================================================================
    // Declaration API
    // =========================================================================

    /// Declares a node of the given catalog kind.
    ///
    /// The node joins the innermost open cluster, or the diagram root when no
    /// cluster is open.
    pub fn node(&mut self, kind: NodeKind, label: impl Into<String>) -> NodeId {
        let cluster = self.cluster_stack.last().copied();
        NodeId(self.graph.add_node(Node::new(kind, label), cluster))
    }

    /// Declares a node with a user-supplied icon image.
    pub fn custom_node(&mut self, label: impl Into<String>, icon: impl Into<PathBuf>) -> NodeId {
        let cluster = self.cluster_stack.last().copied();
        let node = Node::with_icon(catalog::custom::CUSTOM, label, icon);
        NodeId(self.graph.add_node(node, cluster))
    }

    /// Declares a cluster and runs `f` with the cluster open.
    ///
    /// Nodes and clusters declared inside `f` nest within this cluster;
    /// values built inside escape through the closure's return value.
    pub fn cluster<R>(&mut self, label: impl Into<String>, f: impl FnOnce(&mut Self) -> R) -> R {
        self.cluster_styled(label, ClusterStyle::default(), f)
    }

    /// Declares a cluster with explicit style overrides.
    pub fn cluster_styled<R>(
        &mut self,
        label: impl Into<String>,
        style: ClusterStyle,
        f: impl FnOnce(&mut Self) -> R,
    ) -> R {
        let parent = self.cluster_stack.last().copied();
        let idx = self.graph.add_cluster(label.into(), style, parent);
        self.cluster_stack.push(idx);
        let result = f(self);
        self.cluster_stack.pop();
        result
    }

    /// Connects two nodes with a plain directed edge.
    pub fn connect(&mut self, source: NodeId, target: NodeId) -> Result<(), SketchError> {
        self.connect_with(source, target, Edge::new())
    }

    /// Connects two nodes with an explicitly styled edge.
    pub fn connect_with(
        &mut self,
        source: NodeId,
        target: NodeId,
        edge: Edge,
    ) -> Result<(), SketchError> {
        self.graph.add_edge(source.0, target.0, edge)?;
        Ok(())
    }

    /// Connects consecutive nodes in a sequence with plain directed edges.
    ///
    /// `chain(&[a, b, c])` declares `a -> b` and `b -> c`. Fewer than two
    /// nodes declare nothing.
    pub fn chain(&mut self, nodes: &[NodeId]) -> Result<(), SketchError> {
        for pair in nodes.windows(2) {
            self.connect(pair[0], pair[1])?;
        }
        Ok(())
    }

    /// Connects one source to every node in `targets` (fan-out).
    pub fn fan_out(
        &mut self,
        source: NodeId,
        targets: &[NodeId],
        edge: Edge,
    ) -> Result<(), SketchError> {
        for &target in targets {
            self.connect_with(source, target, edge.clone())?;
        }
        Ok(())
    }

    /// Connects every node in `sources` to one target (fan-in).
    pub fn fan_in(
        &mut self,
        sources: &[NodeId],
        target: NodeId,
        edge: Edge,
    ) -> Result<(), SketchError> {
        for &source in sources {
            self.connect_with(source, target, edge.clone())?;
        }
        Ok(())
    }

    // =========================================================================
    // Introspection
    // =========================================================================

    /// Number of declared nodes.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of declared edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Number of declared clusters, including nested ones.
    pub fn cluster_count(&self) -> usize {
        self.graph.cluster_count()
    }

    // =========================================================================
    // Export and render
    // =========================================================================

    /// Lowers the diagram to DOT source.
    pub fn to_dot(&self) -> Result<String, SketchError> {
        let graph = DotBuilder::new(self).build()?;
        Ok(render::print_dot(graph))
    }

    /// Renders the diagram into the working directory.
    ///
    /// The output path is `<filename>.<extension>`, derived from the title
    /// unless overridden with [`Diagram::set_filename`]. Returns the path of
    /// the written file.
    pub fn render(&self) -> Result<PathBuf, SketchError> {
        let path = PathBuf::from(format!("{}.{}", self.filename, self.format.extension()));
        self.render_to(&path)?;
        if self.show {
            render::open_in_viewer(&path);
        }
        Ok(path)
    }

    /// Renders the diagram to an explicit output path.
    pub fn render_to(&self, path: impl AsRef<Path>) -> Result<(), SketchError> {
        let path = path.as_ref();
        info!(title = self.title.as_str(), path:? = path; "Rendering diagram");

        let graph = DotBuilder::new(self).build()?;
        match self.format {
            OutputFormat::Dot => {
                std::fs::write(path, render::print_dot(graph))?;
            }
            format => render::execute(graph, format, path)?,
        }

        debug!("Diagram rendered successfully");
        Ok(())
    }
}

/// Derives the output filename stem from a diagram title.
///
/// Whitespace runs become single underscores and the result is lowercased,
/// so "Azure VM Architecture" renders to `azure_vm_architecture.png`.
fn derive_filename(title: &str) -> String {
    title
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .to_lowercase()
}
