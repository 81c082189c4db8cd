//! Example: Azure Kubernetes Service (AKS) architecture
//!
//! The full AKS reference picture: clients through a load balancer into an
//! ingress, fan-out to backend pods, CI/CD into the container registry, and
//! shared monitoring and security services.

use cloudsketch::catalog::{azure, elastic, k8s, onprem};
use cloudsketch::style::LineStyle;
use cloudsketch::{ClusterStyle, Diagram, Edge};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut diagram = Diagram::new("Azure Kubernetes Service (AKS) Architecture");

    // External clients
    let client_apps = diagram.node(onprem::client::CLIENT, "Client apps");
    let devops = diagram.node(onprem::client::USERS, "Dev/Ops");

    // CI/CD pipeline
    let cicd = diagram.node(azure::devops::PIPELINES, "Azure\nPipelines");

    let load_balancer = diagram.node(azure::network::LOAD_BALANCERS, "Azure Load\nBalancer");
    let container_registry = diagram.node(
        azure::compute::CONTAINER_REGISTRIES,
        "Azure\nContainer\nRegistry",
    );

    // External data stores
    let (sql_db, cosmos_db) = diagram.cluster("External\ndata stores", |d| {
        let sql_db = d.node(azure::database::SQL_DATABASES, "SQL Database");
        let cosmos_db = d.node(azure::database::COSMOS_DB, "Azure\nCosmos DB");
        (sql_db, cosmos_db)
    });

    // AKS cluster with one namespace per concern
    let dashed = ClusterStyle::new().with_line_style(LineStyle::Dashed);
    let (ingress, backend_pods, autoscaling_pod, _elasticsearch, _prometheus) = diagram
        .cluster_styled(
            "Azure Kubernetes Service (AKS)",
            dashed.clone(),
            |d| {
                let ingress = d.cluster_styled("Front end", dashed.clone(), |d| {
                    d.node(k8s::network::INGRESS, "Ingress")
                });
                let (backend_pods, autoscaling_pod) =
                    d.cluster_styled("Back-end services", dashed.clone(), |d| {
                        let pods = vec![
                            d.node(k8s::compute::POD, "Pod"),
                            d.node(k8s::compute::POD, "Pod"),
                        ];
                        let autoscaling = d.node(k8s::compute::POD, "Pod\nautoscaling");
                        (pods, autoscaling)
                    });
                let (elasticsearch, prometheus) =
                    d.cluster_styled("Utility services", dashed.clone(), |d| {
                        let es = d.node(elastic::elasticsearch::ELASTICSEARCH, "Elasticsearch");
                        let prom = d.node(onprem::monitoring::PROMETHEUS, "Prometheus");
                        (es, prom)
                    });
                (ingress, backend_pods, autoscaling_pod, elasticsearch, prometheus)
            },
        );

    // Declared but unconnected, exactly as the reference picture draws it
    let _vnet = diagram.node(azure::network::VIRTUAL_NETWORKS, "Virtual network");

    // Azure services
    let active_directory = diagram.node(azure::identity::ACTIVE_DIRECTORY, "Azure Active\nDirectory");
    let monitor = diagram.node(azure::monitor::MONITOR, "Azure\nMonitor");
    let key_vault = diagram.node(azure::security::KEY_VAULTS, "Azure\nKey Vault");

    // Request path
    diagram.chain(&[client_apps, load_balancer, ingress])?;
    diagram.fan_out(ingress, &backend_pods, Edge::new())?;
    for &pod in &backend_pods {
        diagram.connect(pod, autoscaling_pod)?;
    }
    diagram.connect(autoscaling_pod, sql_db)?;
    diagram.connect(autoscaling_pod, cosmos_db)?;

    // CI/CD flow
    diagram.connect(devops, cicd)?;
    diagram.connect_with(
        cicd,
        container_registry,
        Edge::new().with_style(LineStyle::Dashed),
    )?;
    diagram.connect_with(
        container_registry,
        ingress,
        Edge::new().with_style(LineStyle::Dashed),
    )?;

    // Docker operations
    let docker_push = diagram.node(onprem::container::DOCKER, "Docker\npush");
    let docker_pull = diagram.node(onprem::container::DOCKER, "Docker\npull");
    diagram.chain(&[cicd, docker_push, container_registry])?;
    diagram.chain(&[container_registry, docker_pull, ingress])?;

    // Role-based access control
    diagram.connect_with(
        devops,
        active_directory,
        Edge::new().with_label("Role-based\naccess control"),
    )?;

    // Monitoring and security fan-in from every pod
    let all_pods: Vec<_> = backend_pods
        .iter()
        .copied()
        .chain([autoscaling_pod])
        .collect();
    diagram.fan_in(&all_pods, monitor, Edge::new())?;
    diagram.fan_in(&all_pods, key_vault, Edge::new())?;

    match diagram.render() {
        Ok(path) => println!("rendered {}", path.display()),
        Err(err) => {
            eprintln!("render failed ({err}); DOT source follows:\n");
            println!("{}", diagram.to_dot()?);
        }
    }
    Ok(())
}
