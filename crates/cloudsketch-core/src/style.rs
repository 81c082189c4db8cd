//! Layout and line-style definitions.
//!
//! The types here are thin, strongly-typed views of the Graphviz attributes a
//! diagram description controls:
//!
//! - [`Rankdir`]: direction of layout flow (`rankdir`)
//! - [`SplineMode`]: edge routing (`splines`)
//! - [`LineStyle`]: edge/cluster line pattern (`style`)
//! - [`ArrowDirection`]: arrowhead placement (`dir`)
//! - [`OutputFormat`]: rendered output format
//!
//! Every type has a `FromStr` implementation accepting the conventional
//! spelling, and an `as_dot_value` returning the Graphviz attribute value.

use std::str::FromStr;

use serde::Deserialize;

/// Direction of layout flow for the whole diagram.
///
/// Maps to the Graphviz `rankdir` graph attribute.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Rankdir {
    /// Left to right (default).
    #[default]
    LR,
    /// Top to bottom.
    TB,
    /// Right to left.
    RL,
    /// Bottom to top.
    BT,
}

impl Rankdir {
    /// Returns the Graphviz `rankdir` value.
    pub fn as_dot_value(&self) -> &'static str {
        match self {
            Self::LR => "LR",
            Self::TB => "TB",
            Self::RL => "RL",
            Self::BT => "BT",
        }
    }
}

impl FromStr for Rankdir {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LR" => Ok(Self::LR),
            "TB" => Ok(Self::TB),
            "RL" => Ok(Self::RL),
            "BT" => Ok(Self::BT),
            _ => Err(format!(
                "invalid direction `{s}`, valid values: LR, TB, RL, BT"
            )),
        }
    }
}

/// Edge routing mode for the whole diagram.
///
/// Maps to the Graphviz `splines` graph attribute.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplineMode {
    /// Orthogonal edge routing (default).
    #[default]
    Ortho,
    /// Curved splines around obstacles.
    Spline,
    /// Straight line segments.
    Line,
    /// Polyline routing.
    Polyline,
    /// Curved arcs.
    Curved,
}

impl SplineMode {
    /// Returns the Graphviz `splines` value.
    pub fn as_dot_value(&self) -> &'static str {
        match self {
            Self::Ortho => "ortho",
            Self::Spline => "spline",
            Self::Line => "line",
            Self::Polyline => "polyline",
            Self::Curved => "curved",
        }
    }
}

impl FromStr for SplineMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ortho" => Ok(Self::Ortho),
            "spline" => Ok(Self::Spline),
            "line" => Ok(Self::Line),
            "polyline" => Ok(Self::Polyline),
            "curved" => Ok(Self::Curved),
            _ => Err(format!(
                "invalid spline mode `{s}`, valid values: ortho, spline, line, polyline, curved"
            )),
        }
    }
}

/// Line pattern for edges and cluster borders.
///
/// Maps to the Graphviz `style` attribute.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    /// Solid continuous line (default).
    #[default]
    Solid,
    /// Dashed line.
    Dashed,
    /// Dotted line.
    Dotted,
    /// Heavier solid line.
    Bold,
}

impl LineStyle {
    /// Returns the Graphviz `style` value, or `None` for solid lines.
    pub fn as_dot_value(&self) -> Option<&'static str> {
        match self {
            Self::Solid => None,
            Self::Dashed => Some("dashed"),
            Self::Dotted => Some("dotted"),
            Self::Bold => Some("bold"),
        }
    }
}

impl FromStr for LineStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "solid" => Ok(Self::Solid),
            "dashed" => Ok(Self::Dashed),
            "dotted" => Ok(Self::Dotted),
            "bold" => Ok(Self::Bold),
            _ => Err(format!(
                "invalid line style `{s}`, valid values: solid, dashed, dotted, bold"
            )),
        }
    }
}

/// Arrowhead placement on an edge.
///
/// Maps to the Graphviz `dir` attribute. `Forward` is the plain directed
/// edge; `None` yields an undirected connection.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArrowDirection {
    /// Arrowhead at the target (default).
    #[default]
    Forward,
    /// Arrowhead at the source.
    Back,
    /// Arrowheads at both ends.
    Both,
    /// No arrowheads.
    None,
}

impl ArrowDirection {
    /// Returns the Graphviz `dir` value, or `None` when the default
    /// forward arrow needs no attribute.
    pub fn as_dot_value(&self) -> Option<&'static str> {
        match self {
            Self::Forward => Option::None,
            Self::Back => Some("back"),
            Self::Both => Some("both"),
            Self::None => Some("none"),
        }
    }
}

impl FromStr for ArrowDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "forward" => Ok(Self::Forward),
            "back" => Ok(Self::Back),
            "both" => Ok(Self::Both),
            "none" => Ok(Self::None),
            _ => Err(format!(
                "invalid arrow direction `{s}`, valid values: forward, back, both, none"
            )),
        }
    }
}

/// Output format for rendered diagrams.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Raster PNG image (default).
    #[default]
    Png,
    /// Vector SVG image.
    Svg,
    /// PDF document.
    Pdf,
    /// Raster JPEG image.
    Jpeg,
    /// The generated DOT source itself.
    Dot,
}

impl OutputFormat {
    /// Returns the file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Svg => "svg",
            Self::Pdf => "pdf",
            Self::Jpeg => "jpg",
            Self::Dot => "dot",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "png" => Ok(Self::Png),
            "svg" => Ok(Self::Svg),
            "pdf" => Ok(Self::Pdf),
            "jpg" | "jpeg" => Ok(Self::Jpeg),
            "dot" => Ok(Self::Dot),
            _ => Err(format!(
                "invalid output format `{s}`, valid values: png, svg, pdf, jpeg, dot"
            )),
        }
    }
}
