//! Cloudsketch Core Types and Definitions
//!
//! This crate provides the foundational types for describing cloud-architecture
//! diagrams. It includes:
//!
//! - **Colors**: Color handling with CSS color-string validation ([`color::Color`])
//! - **Styles**: Layout direction, line styles, and output formats ([`style`] module)
//! - **Catalog**: The typed node catalog, organized by provider ([`catalog`] module)
//! - **Elements**: Semantic model types for diagram elements ([`element`] module)

pub mod catalog;
pub mod color;
pub mod element;
pub mod style;
