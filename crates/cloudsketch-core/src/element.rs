//! Semantic model types for diagram elements.
//!
//! These are the values a diagram stores for each declared element: a
//! [`Node`] per typed box, an [`Edge`] per declared connection, and a
//! [`ClusterStyle`] per visual grouping. None of them know anything about
//! positions or sizes; layout belongs to the renderer.

use std::path::PathBuf;

use crate::catalog::NodeKind;
use crate::color::Color;
use crate::style::{ArrowDirection, LineStyle};

/// A named, typed visual element.
///
/// Identity is positional within a single diagram; a `Node` value itself is
/// plain data.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    kind: NodeKind,
    label: String,
    icon: Option<PathBuf>,
}

impl Node {
    /// Creates a node of the given kind with a display label.
    pub fn new(kind: NodeKind, label: impl Into<String>) -> Self {
        Self {
            kind,
            label: label.into(),
            icon: None,
        }
    }

    /// Creates a node carrying a user-supplied icon image.
    pub fn with_icon(kind: NodeKind, label: impl Into<String>, icon: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            label: label.into(),
            icon: Some(icon.into()),
        }
    }

    /// The node's catalog kind.
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// The display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The icon image path, if any.
    pub fn icon(&self) -> Option<&PathBuf> {
        self.icon.as_ref()
    }
}

/// Styling for a directed connection between two nodes.
///
/// Edges are transient relations: they carry no identity of their own and
/// are evaluated once at render time. The builder-style `with_*` methods
/// cover the label, color, line style, and arrow direction.
///
/// ```
/// use cloudsketch_core::element::Edge;
/// use cloudsketch_core::color::Color;
/// use cloudsketch_core::style::LineStyle;
///
/// let edge = Edge::new()
///     .with_label("1. Authentication")
///     .with_color(Color::new("red").unwrap())
///     .with_style(LineStyle::Dashed);
/// assert_eq!(edge.label(), Some("1. Authentication"));
/// ```
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Edge {
    label: Option<String>,
    color: Option<Color>,
    style: LineStyle,
    direction: ArrowDirection,
}

impl Edge {
    /// Creates an unlabeled, solid, forward edge.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the edge label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the edge color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Sets the line style.
    pub fn with_style(mut self, style: LineStyle) -> Self {
        self.style = style;
        self
    }

    /// Sets the arrow direction.
    pub fn with_direction(mut self, direction: ArrowDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Convenience constructor for an undirected connection.
    pub fn undirected() -> Self {
        Self::new().with_direction(ArrowDirection::None)
    }

    /// The edge label, if any.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// The edge color, if any.
    pub fn color(&self) -> Option<&Color> {
        self.color.as_ref()
    }

    /// The line style.
    pub fn style(&self) -> LineStyle {
        self.style
    }

    /// The arrow direction.
    pub fn direction(&self) -> ArrowDirection {
        self.direction
    }
}

/// Style overrides for a cluster.
///
/// Unset fields fall back to the exporter defaults (rounded border, depth-
/// rotated background palette).
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ClusterStyle {
    border_color: Option<Color>,
    fill_color: Option<Color>,
    line_style: Option<LineStyle>,
}

impl ClusterStyle {
    /// Creates an empty style that keeps all exporter defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the border color.
    pub fn with_border_color(mut self, color: Color) -> Self {
        self.border_color = Some(color);
        self
    }

    /// Sets the background fill color.
    pub fn with_fill_color(mut self, color: Color) -> Self {
        self.fill_color = Some(color);
        self
    }

    /// Sets the border line style.
    pub fn with_line_style(mut self, style: LineStyle) -> Self {
        self.line_style = Some(style);
        self
    }

    /// The border color override, if any.
    pub fn border_color(&self) -> Option<&Color> {
        self.border_color.as_ref()
    }

    /// The fill color override, if any.
    pub fn fill_color(&self) -> Option<&Color> {
        self.fill_color.as_ref()
    }

    /// The line style override, if any.
    pub fn line_style(&self) -> Option<LineStyle> {
        self.line_style
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::azure;

    #[test]
    fn edge_builder_accumulates_attributes() {
        let edge = Edge::new()
            .with_label("VPN Tunnel")
            .with_color(Color::new("blue").unwrap())
            .with_style(LineStyle::Dashed)
            .with_direction(ArrowDirection::Both);

        assert_eq!(edge.label(), Some("VPN Tunnel"));
        assert_eq!(edge.color().unwrap().as_str(), "blue");
        assert_eq!(edge.style(), LineStyle::Dashed);
        assert_eq!(edge.direction(), ArrowDirection::Both);
    }

    #[test]
    fn default_edge_is_plain_forward() {
        let edge = Edge::new();
        assert!(edge.label().is_none());
        assert!(edge.color().is_none());
        assert_eq!(edge.style(), LineStyle::Solid);
        assert_eq!(edge.direction(), ArrowDirection::Forward);
    }

    #[test]
    fn node_keeps_kind_and_label() {
        let node = Node::new(azure::compute::VM, "Frontend VM");
        assert_eq!(node.kind(), azure::compute::VM);
        assert_eq!(node.label(), "Frontend VM");
        assert!(node.icon().is_none());

        let custom = Node::with_icon(crate::catalog::custom::CUSTOM, "Legacy", "icons/legacy.png");
        assert!(custom.icon().is_some());
    }
}
