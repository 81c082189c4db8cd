//! Integration tests for the Diagram builder API
//!
//! These tests verify that the public API works and is usable.

use cloudsketch::catalog::{azure, k8s, onprem};
use cloudsketch::color::Color;
use cloudsketch::config::AppConfig;
use cloudsketch::style::{LineStyle, OutputFormat, Rankdir};
use cloudsketch::{Diagram, Edge};

#[test]
fn test_builder_api_exists() {
    // Just verify the API compiles and can be constructed
    let _diagram = Diagram::new("empty");
}

#[test]
fn test_counts_match_declarations() {
    // The web-app architecture: one auth node, one gateway, a clustered
    // backend, and a database, wired in a chain plus one extra edge.
    let mut diagram = Diagram::new("githubtest_arch");

    let auth = diagram.node(azure::identity::ACTIVE_DIRECTORY, "Azure AD Auth");
    let nginx = diagram.node(azure::network::APPLICATION_GATEWAY, "NGINX Web Server");
    let server = diagram.cluster("Application Layer", |d| {
        d.node(azure::compute::FUNCTION_APPS, "TypeScript Server")
    });
    let database = diagram.node(azure::database::SQL_DATABASES, "MS SQL Server");

    diagram.chain(&[auth, nginx, server, database]).unwrap();

    assert_eq!(diagram.node_count(), 4);
    assert_eq!(diagram.edge_count(), 3);
    assert_eq!(diagram.cluster_count(), 1);
}

#[test]
fn test_dot_export_is_complete() {
    let mut diagram = Diagram::new("AKS Architecture");
    let clients = diagram.node(onprem::client::CLIENT, "Client apps");
    let ingress = diagram.cluster("Front end", |d| d.node(k8s::network::INGRESS, "Ingress"));
    let pods: Vec<_> = diagram.cluster("Back-end services", |d| {
        (0..2).map(|_| d.node(k8s::compute::POD, "Pod")).collect()
    });

    diagram.connect(clients, ingress).unwrap();
    diagram.fan_out(ingress, &pods, Edge::new()).unwrap();

    let dot = diagram.to_dot().expect("export should succeed");
    assert!(dot.contains("digraph"), "output should be a directed graph");
    assert!(dot.contains("Client apps"));
    assert!(dot.contains("Ingress"));
    assert!(dot.contains("subgraph cluster_0"));
    assert!(dot.contains("subgraph cluster_1"));
    // One edge statement per declared connection
    assert_eq!(dot.matches(" -> ").count(), diagram.edge_count());
}

#[test]
fn test_diagram_with_config() {
    let config = AppConfig::default();

    // Just verify the API works with an explicit config
    let mut diagram = Diagram::with_config("configured", config);
    diagram.node(azure::compute::VM, "VM");
    let _dot = diagram.to_dot().expect("export should succeed");
}

#[test]
fn test_filename_derives_from_title() {
    let mut diagram = Diagram::new("Azure VM-Logic Apps Architecture with VPN");
    assert_eq!(
        diagram.filename(),
        "azure_vm-logic_apps_architecture_with_vpn"
    );

    diagram.set_filename("custom_name");
    diagram.set_format(OutputFormat::Svg);
    assert_eq!(diagram.filename(), "custom_name");
    assert_eq!(diagram.format(), OutputFormat::Svg);
}

#[test]
fn test_styled_edges_and_directions() {
    let mut diagram = Diagram::new("styled");
    let users = diagram.node(onprem::client::USERS, "End Users");
    let aad = diagram.node(azure::identity::ACTIVE_DIRECTORY, "Azure Active\nDirectory");

    diagram
        .connect_with(
            users,
            aad,
            Edge::new()
                .with_label("1. Authentication")
                .with_color(Color::new("red").unwrap()),
        )
        .unwrap();
    diagram
        .connect_with(
            aad,
            users,
            Edge::new()
                .with_label("2. Auth Token")
                .with_color(Color::new("red").unwrap()),
        )
        .unwrap();
    diagram
        .connect_with(users, aad, Edge::new().with_style(LineStyle::Dashed))
        .unwrap();

    assert_eq!(diagram.edge_count(), 3);
    let dot = diagram.to_dot().unwrap();
    assert!(dot.contains("1. Authentication"));
    assert!(dot.contains("2. Auth Token"));
}

#[test]
fn test_direction_flows_into_dot() {
    let config = AppConfig::new(
        cloudsketch::config::LayoutConfig::default().with_direction(Rankdir::TB),
        Default::default(),
    );
    let mut diagram = Diagram::with_config("top down", config);
    diagram.node(azure::compute::VM, "VM");

    let dot = diagram.to_dot().unwrap();
    assert!(dot.contains("rankdir=TB"));
}

#[test]
fn test_foreign_node_handle_is_an_error() {
    let mut first = Diagram::new("first");
    let a = first.node(azure::compute::VM, "a");

    let mut second = Diagram::new("second");
    let _ = second.node(azure::compute::VM, "only");
    let foreign = second.node(azure::compute::VM, "extra");

    let result = first.connect(a, foreign);
    assert!(result.is_err(), "foreign handles must be rejected");
}
