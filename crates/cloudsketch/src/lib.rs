//! Cloudsketch - declarative cloud-architecture diagrams rendered through Graphviz.
//!
//! A diagram is described in code: typed nodes from the provider [`catalog`],
//! nested [`Diagram::cluster`] groupings, and styled directed edges. Layout
//! and rasterization are delegated entirely to Graphviz; this crate only
//! builds the graph description and hands it over.
//!
//! # Examples
//!
//! ```rust,no_run
//! use cloudsketch::{Diagram, Edge};
//! use cloudsketch::catalog::{azure, onprem};
//! use cloudsketch::style::LineStyle;
//!
//! fn main() -> Result<(), cloudsketch::SketchError> {
//!     let mut diagram = Diagram::new("Web App Architecture");
//!
//!     let auth = diagram.node(azure::identity::ACTIVE_DIRECTORY, "Azure AD Auth");
//!     let gateway = diagram.node(azure::network::APPLICATION_GATEWAY, "Gateway");
//!     let backend = diagram.cluster("Application Layer", |d| {
//!         d.node(azure::compute::FUNCTION_APPS, "Backend")
//!     });
//!
//!     diagram.chain(&[auth, gateway, backend])?;
//!     diagram.connect_with(
//!         gateway,
//!         auth,
//!         Edge::new().with_label("token check").with_style(LineStyle::Dashed),
//!     )?;
//!
//!     // Writes web_app_architecture.png via the Graphviz `dot` binary.
//!     let path = diagram.render()?;
//!     println!("rendered {}", path.display());
//!     Ok(())
//! }
//! ```

pub mod config;

mod diagram;
mod error;
mod export;
mod graph;
mod render;

pub use cloudsketch_core::{catalog, color, element, style};

pub use diagram::{Diagram, NodeId};
pub use error::SketchError;

pub use cloudsketch_core::element::{ClusterStyle, Edge};
