//! End-to-end render smoke test.
//!
//! Rendering needs the Graphviz `dot` binary on the PATH; when it is not
//! available the test is skipped rather than failed, so the suite stays
//! runnable on minimal machines. DOT output has no such requirement and is
//! always exercised.

use std::process::Command;

use tempfile::tempdir;

use cloudsketch::catalog::{azure, onprem};
use cloudsketch::style::OutputFormat;
use cloudsketch::{Diagram, Edge};

fn graphviz_available() -> bool {
    Command::new("dot")
        .arg("-V")
        .output()
        .is_ok_and(|output| output.status.success())
}

fn sample_diagram() -> Diagram {
    let mut diagram = Diagram::new("Render Smoke");
    let users = diagram.node(onprem::client::USERS, "End Users");
    let (vm, db) = diagram.cluster("Azure Virtual Network", |d| {
        let vm = d.node(azure::compute::VM, "Frontend VM");
        let db = d.node(azure::database::COSMOS_DB, "Cosmos DB");
        (vm, db)
    });
    diagram.chain(&[users, vm, db]).unwrap();
    diagram
        .connect_with(db, vm, Edge::new().with_label("Data Response"))
        .unwrap();
    diagram
}

#[test]
fn dot_format_renders_without_graphviz() {
    let temp_dir = tempdir().expect("failed to create temp directory");
    let output = temp_dir.path().join("smoke.dot");

    let mut diagram = sample_diagram();
    diagram.set_format(OutputFormat::Dot);
    diagram.render_to(&output).expect("DOT render should succeed");

    let written = std::fs::read_to_string(&output).unwrap();
    assert!(written.contains("digraph"));
    assert!(written.contains("Frontend VM"));
}

#[test]
fn png_render_produces_one_image() {
    if !graphviz_available() {
        eprintln!("skipping: Graphviz `dot` binary not found on PATH");
        return;
    }

    let temp_dir = tempdir().expect("failed to create temp directory");
    let output = temp_dir.path().join("smoke.png");

    let diagram = sample_diagram();
    diagram.render_to(&output).expect("PNG render should succeed");

    let metadata = std::fs::metadata(&output).expect("output image should exist");
    assert!(metadata.len() > 0, "rendered image should not be empty");
}

#[test]
fn svg_render_contains_declared_labels() {
    if !graphviz_available() {
        eprintln!("skipping: Graphviz `dot` binary not found on PATH");
        return;
    }

    let temp_dir = tempdir().expect("failed to create temp directory");
    let output = temp_dir.path().join("smoke.svg");

    let mut diagram = sample_diagram();
    diagram.set_format(OutputFormat::Svg);
    diagram.render_to(&output).expect("SVG render should succeed");

    let svg = std::fs::read_to_string(&output).unwrap();
    assert!(svg.contains("<svg"));
    assert!(svg.contains("End Users"));
}
