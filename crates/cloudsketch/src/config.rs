//! Configuration types for diagram layout and styling.
//!
//! This module provides configuration structures that control how the
//! Graphviz engine lays out and styles diagrams. All types implement
//! [`serde::Deserialize`] for flexible loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining layout and style settings.
//! - [`LayoutConfig`] - Flow direction, edge routing, and spacing.
//! - [`StyleConfig`] - Fonts, default edge color, and background.
//!
//! # Example
//!
//! ```
//! # use cloudsketch::config::AppConfig;
//! // Use default configuration
//! let config = AppConfig::default();
//! assert!(config.style().background_color().is_ok());
//! ```

use serde::Deserialize;

use cloudsketch_core::color::{Color, ColorError};
use cloudsketch_core::style::{Rankdir, SplineMode};

/// Top-level configuration combining layout and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified layout and style configurations.
    pub fn new(layout: LayoutConfig, style: StyleConfig) -> Self {
        Self { layout, style }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Layout configuration for the Graphviz engine.
///
/// Spacing defaults follow the conventional architecture-diagram values:
/// node separation 0.60, rank separation 0.75, outer padding 2.0.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Flow direction ([`Rankdir`]) for the whole diagram.
    direction: Rankdir,

    /// Edge routing mode ([`SplineMode`]).
    splines: SplineMode,

    /// Minimum separation between nodes in the same rank, in inches.
    node_separation: f64,

    /// Minimum separation between ranks, in inches.
    rank_separation: f64,

    /// Padding around the drawing, in inches.
    padding: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            direction: Rankdir::default(),
            splines: SplineMode::default(),
            node_separation: 0.60,
            rank_separation: 0.75,
            padding: 2.0,
        }
    }
}

impl LayoutConfig {
    /// Creates a layout configuration with the given direction and routing,
    /// keeping the default spacing.
    pub fn new(direction: Rankdir, splines: SplineMode) -> Self {
        Self {
            direction,
            splines,
            ..Self::default()
        }
    }

    /// Returns the flow direction.
    pub fn direction(&self) -> Rankdir {
        self.direction
    }

    /// Returns the edge routing mode.
    pub fn splines(&self) -> SplineMode {
        self.splines
    }

    /// Returns the node separation in inches.
    pub fn node_separation(&self) -> f64 {
        self.node_separation
    }

    /// Returns the rank separation in inches.
    pub fn rank_separation(&self) -> f64 {
        self.rank_separation
    }

    /// Returns the outer padding in inches.
    pub fn padding(&self) -> f64 {
        self.padding
    }

    /// Replaces the flow direction.
    pub fn with_direction(mut self, direction: Rankdir) -> Self {
        self.direction = direction;
        self
    }

    /// Replaces the edge routing mode.
    pub fn with_splines(mut self, splines: SplineMode) -> Self {
        self.splines = splines;
        self
    }
}

/// Visual styling configuration for rendered diagrams.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Font family for all text.
    font_name: String,

    /// Font size for the diagram title, in points.
    title_font_size: u32,

    /// Font size for node labels, in points.
    node_font_size: u32,

    /// Font size for cluster labels, in points.
    cluster_font_size: u32,

    /// Font color for all text, as a color string.
    font_color: String,

    /// Default color for edges without an explicit color.
    edge_color: String,

    /// Background [`Color`] for the diagram, as a color string.
    background_color: Option<String>,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            font_name: "Sans-Serif".to_string(),
            title_font_size: 15,
            node_font_size: 13,
            cluster_font_size: 12,
            font_color: "#2D3436".to_string(),
            edge_color: "#7B8894".to_string(),
            background_color: None,
        }
    }
}

impl StyleConfig {
    /// Returns the font family.
    pub fn font_name(&self) -> &str {
        &self.font_name
    }

    /// Returns the title font size in points.
    pub fn title_font_size(&self) -> u32 {
        self.title_font_size
    }

    /// Returns the node label font size in points.
    pub fn node_font_size(&self) -> u32 {
        self.node_font_size
    }

    /// Returns the cluster label font size in points.
    pub fn cluster_font_size(&self) -> u32 {
        self.cluster_font_size
    }

    /// Returns the font color string.
    pub fn font_color(&self) -> &str {
        &self.font_color
    }

    /// Returns the default edge color string.
    pub fn edge_color(&self) -> &str {
        &self.edge_color
    }

    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed into
    /// a valid [`Color`].
    pub fn background_color(&self) -> Result<Option<Color>, ColorError> {
        self.background_color
            .as_deref()
            .map(Color::new)
            .transpose()
    }
}
