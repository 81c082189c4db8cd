//! Lowering from a [`Diagram`] to the Graphviz DOT AST.
//!
//! The builder walks the diagram in declaration order: graph-level defaults
//! first, then root nodes, then the cluster tree as nested `cluster_N`
//! subgraphs, then every edge. Determinism matters here, since tests and
//! users compare DOT output textually.

use dot_structures as dot;
use log::debug;
use petgraph::graph::NodeIndex;

use cloudsketch_core::catalog::Shape;
use cloudsketch_core::element::Node;

use crate::diagram::Diagram;
use crate::error::SketchError;
use crate::export::escape;
use crate::graph::ClusterIndex;

/// Background palette for clusters, rotated by nesting depth.
const CLUSTER_PALETTE: [&str; 4] = ["#E5F5FD", "#EBF3E7", "#ECE8F6", "#FDF7E3"];

/// Default cluster border color when no override is set.
const CLUSTER_BORDER: &str = "#AEB6BE";

/// Builds a [`dot::Graph`] from a diagram description.
pub(crate) struct DotBuilder<'a> {
    diagram: &'a Diagram,
}

impl<'a> DotBuilder<'a> {
    pub(crate) fn new(diagram: &'a Diagram) -> Self {
        Self { diagram }
    }

    /// Lowers the diagram to the DOT AST.
    pub(crate) fn build(&self) -> Result<dot::Graph, SketchError> {
        let mut stmts = Vec::new();

        stmts.push(dot::Stmt::GAttribute(dot::GraphAttributes::Graph(
            self.graph_attributes()?,
        )));
        stmts.push(dot::Stmt::GAttribute(dot::GraphAttributes::Node(
            self.node_defaults(),
        )));
        stmts.push(dot::Stmt::GAttribute(dot::GraphAttributes::Edge(
            self.edge_defaults(),
        )));

        // Raw per-diagram overrides win over the config-driven defaults.
        for (key, value) in self.diagram.extra_graph_attrs() {
            stmts.push(dot::Stmt::Attribute(attr_quoted(key, value)));
        }

        let graph = self.diagram.graph();
        for node_idx in graph.root_node_indices() {
            stmts.push(dot::Stmt::Node(self.node_stmt(node_idx)));
        }
        for cluster_idx in graph.top_level_clusters() {
            stmts.push(dot::Stmt::Subgraph(self.cluster_subgraph(cluster_idx)?));
        }
        for (source, target, edge) in graph.edges_with_endpoints() {
            stmts.push(dot::Stmt::Edge(self.edge_stmt(source, target, edge)));
        }

        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            clusters = graph.cluster_count();
            "Lowered diagram to DOT"
        );

        Ok(dot::Graph::DiGraph {
            id: quoted(self.diagram.title()),
            strict: false,
            stmts,
        })
    }

    fn graph_attributes(&self) -> Result<Vec<dot::Attribute>, SketchError> {
        let layout = self.diagram.config().layout();
        let style = self.diagram.config().style();

        let mut attrs = vec![
            attr_quoted("label", self.diagram.title()),
            attr_plain("rankdir", layout.direction().as_dot_value()),
            attr_plain("splines", layout.splines().as_dot_value()),
            attr_plain("nodesep", &layout.node_separation().to_string()),
            attr_plain("ranksep", &layout.rank_separation().to_string()),
            attr_quoted("pad", &layout.padding().to_string()),
            attr_quoted("fontname", style.font_name()),
            attr_plain("fontsize", &style.title_font_size().to_string()),
            attr_quoted("fontcolor", style.font_color()),
        ];
        if let Some(background) = style.background_color()? {
            attrs.push(attr_quoted("bgcolor", background.as_str()));
        }
        Ok(attrs)
    }

    fn node_defaults(&self) -> Vec<dot::Attribute> {
        let style = self.diagram.config().style();
        vec![
            attr_plain("shape", Shape::Box.as_dot_value()),
            attr_quoted("style", "rounded,filled"),
            attr_quoted("fillcolor", "white"),
            attr_quoted("fontname", style.font_name()),
            attr_plain("fontsize", &style.node_font_size().to_string()),
            attr_quoted("fontcolor", style.font_color()),
        ]
    }

    fn edge_defaults(&self) -> Vec<dot::Attribute> {
        let style = self.diagram.config().style();
        vec![
            attr_quoted("color", style.edge_color()),
            attr_quoted("fontname", style.font_name()),
            attr_plain("fontsize", &style.node_font_size().to_string()),
            attr_quoted("fontcolor", style.font_color()),
        ]
    }

    fn node_stmt(&self, idx: NodeIndex) -> dot::Node {
        let node = self.diagram.graph().node_weight(idx);
        dot::Node {
            id: node_id(idx),
            attributes: self.node_attributes(node),
        }
    }

    fn node_attributes(&self, node: &Node) -> Vec<dot::Attribute> {
        let kind = node.kind();
        let mut attrs = vec![
            attr_quoted("label", node.label()),
            attr_quoted("tooltip", &kind.qualified_name()),
            attr_quoted("color", kind.provider().accent_color()),
        ];
        if kind.shape() != Shape::Box {
            attrs.push(attr_plain("shape", kind.shape().as_dot_value()));
        }
        if let Some(icon) = node.icon() {
            attrs.push(attr_quoted("image", &icon.to_string_lossy()));
            attrs.push(attr_quoted("labelloc", "b"));
        }
        attrs
    }

    fn cluster_subgraph(&self, idx: ClusterIndex) -> Result<dot::Subgraph, SketchError> {
        let graph = self.diagram.graph();
        let cluster = graph.cluster(idx);
        let style_config = self.diagram.config().style();
        let cluster_style = cluster.style();

        let border = cluster_style
            .border_color()
            .map_or(CLUSTER_BORDER, |color| color.as_str());
        let fill = cluster_style.fill_color().map_or_else(
            || CLUSTER_PALETTE[cluster.depth() % CLUSTER_PALETTE.len()],
            |color| color.as_str(),
        );
        let line_style = cluster_style
            .line_style()
            .and_then(|style| style.as_dot_value())
            .unwrap_or("rounded");

        let mut stmts = vec![dot::Stmt::GAttribute(dot::GraphAttributes::Graph(vec![
            attr_quoted("label", cluster.label()),
            attr_quoted("style", line_style),
            attr_quoted("pencolor", border),
            attr_quoted("bgcolor", fill),
            attr_plain("labeljust", "l"),
            attr_quoted("fontname", style_config.font_name()),
            attr_plain("fontsize", &style_config.cluster_font_size().to_string()),
            attr_quoted("fontcolor", style_config.font_color()),
        ]))];

        for node_idx in cluster.node_indices() {
            stmts.push(dot::Stmt::Node(self.node_stmt(node_idx)));
        }
        for child_idx in cluster.child_indices() {
            stmts.push(dot::Stmt::Subgraph(self.cluster_subgraph(child_idx)?));
        }

        Ok(dot::Subgraph {
            id: dot::Id::Plain(format!("cluster_{idx}")),
            stmts,
        })
    }

    fn edge_stmt(
        &self,
        source: NodeIndex,
        target: NodeIndex,
        edge: &cloudsketch_core::element::Edge,
    ) -> dot::Edge {
        let mut attributes = Vec::new();
        if let Some(label) = edge.label() {
            attributes.push(attr_quoted("label", label));
        }
        if let Some(color) = edge.color() {
            attributes.push(attr_quoted("color", color.as_str()));
            attributes.push(attr_quoted("fontcolor", color.as_str()));
        }
        if let Some(style) = edge.style().as_dot_value() {
            attributes.push(attr_quoted("style", style));
        }
        if let Some(dir) = edge.direction().as_dot_value() {
            attributes.push(attr_plain("dir", dir));
        }

        dot::Edge {
            ty: dot::EdgeTy::Pair(
                dot::Vertex::N(node_id(source)),
                dot::Vertex::N(node_id(target)),
            ),
            attributes,
        }
    }
}

fn node_id(idx: NodeIndex) -> dot::NodeId {
    dot::NodeId(dot::Id::Plain(format!("n{}", idx.index())), None)
}

fn quoted(value: &str) -> dot::Id {
    dot::Id::Escaped(format!("\"{}\"", escape(value)))
}

fn attr_quoted(key: &str, value: &str) -> dot::Attribute {
    dot::Attribute(dot::Id::Plain(key.to_string()), quoted(value))
}

fn attr_plain(key: &str, value: &str) -> dot::Attribute {
    dot::Attribute(
        dot::Id::Plain(key.to_string()),
        dot::Id::Plain(value.to_string()),
    )
}

#[cfg(test)]
mod tests {
    use cloudsketch_core::catalog::{azure, onprem};
    use cloudsketch_core::color::Color;
    use cloudsketch_core::element::{ClusterStyle, Edge};
    use cloudsketch_core::style::{ArrowDirection, LineStyle};

    use crate::diagram::Diagram;

    #[test]
    fn dot_output_contains_declared_elements() {
        let mut diagram = Diagram::new("Sample Architecture");
        let users = diagram.node(onprem::client::USERS, "End Users");
        let db = diagram.cluster("Data", |d| {
            d.node(azure::database::SQL_DATABASES, "SQL Database")
        });
        diagram.connect(users, db).unwrap();

        let dot = diagram.to_dot().unwrap();
        assert!(dot.contains("digraph"));
        assert!(dot.contains("\"Sample Architecture\""));
        assert!(dot.contains("\"End Users\""));
        assert!(dot.contains("\"SQL Database\""));
        assert!(dot.contains("subgraph cluster_0"));
        assert!(dot.contains("n0 -> n1"));
    }

    #[test]
    fn edge_styling_reaches_the_dot_source() {
        let mut diagram = Diagram::new("edges");
        let a = diagram.node(azure::compute::VM, "a");
        let b = diagram.node(azure::compute::VM, "b");
        diagram
            .connect_with(
                a,
                b,
                Edge::new()
                    .with_label("VPN Tunnel")
                    .with_color(Color::new("blue").unwrap())
                    .with_style(LineStyle::Dashed)
                    .with_direction(ArrowDirection::Both),
            )
            .unwrap();

        let dot = diagram.to_dot().unwrap();
        assert!(dot.contains("\"VPN Tunnel\""));
        assert!(dot.contains("\"blue\""));
        assert!(dot.contains("\"dashed\""));
        assert!(dot.contains("dir=both"));
    }

    #[test]
    fn multiline_labels_are_escaped() {
        let mut diagram = Diagram::new("escaping");
        diagram.node(azure::identity::ACTIVE_DIRECTORY, "Azure Active\nDirectory");

        let dot = diagram.to_dot().unwrap();
        assert!(dot.contains("Azure Active\\nDirectory"));
        assert!(!dot.contains("Azure Active\nDirectory"));
    }

    #[test]
    fn cluster_style_overrides_replace_defaults() {
        let mut diagram = Diagram::new("clusters");
        let style = ClusterStyle::new()
            .with_border_color(Color::new("blue").unwrap())
            .with_line_style(LineStyle::Dashed);
        diagram.cluster_styled("Azure Virtual Network", style, |d| {
            d.node(azure::compute::VM, "Frontend VM");
        });

        let dot = diagram.to_dot().unwrap();
        assert!(dot.contains("pencolor=\"blue\""));
        assert!(dot.contains("style=\"dashed\""));
    }

    #[test]
    fn nested_clusters_rotate_the_palette() {
        let mut diagram = Diagram::new("palette");
        diagram.cluster("outer", |d| {
            d.cluster("inner", |d| {
                d.node(azure::compute::VM, "vm");
            });
        });

        let dot = diagram.to_dot().unwrap();
        assert!(dot.contains("#E5F5FD"));
        assert!(dot.contains("#EBF3E7"));
    }

    #[test]
    fn custom_nodes_carry_their_icon() {
        let mut diagram = Diagram::new("icons");
        diagram.custom_node("Legacy System", "icons/legacy.png");

        let dot = diagram.to_dot().unwrap();
        assert!(dot.contains("image=\"icons/legacy.png\""));
        assert!(dot.contains("shape=none"));
    }

    #[test]
    fn raw_graph_attrs_append_after_defaults() {
        let mut diagram = Diagram::new("raw");
        diagram.set_graph_attr("concentrate", "true");

        let dot = diagram.to_dot().unwrap();
        assert!(dot.contains("concentrate=\"true\""));
    }
}
