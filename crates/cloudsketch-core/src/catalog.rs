//! The typed node catalog.
//!
//! Every node in a diagram carries a [`NodeKind`] naming the provider and
//! category it belongs to, mirroring the provider taxonomy of cloud
//! architecture diagrams (`azure::compute`, `k8s::network`, `onprem::client`,
//! ...). A kind is pure description: it contributes the node's default shape
//! and the provider accent color, while layout and drawing remain entirely
//! the renderer's business.
//!
//! Kinds are exposed as constants grouped into provider/category modules:
//!
//! ```
//! use cloudsketch_core::catalog::{azure, k8s};
//!
//! let aks = azure::compute::KUBERNETES_SERVICES;
//! assert_eq!(aks.qualified_name(), "azure.compute.KubernetesServices");
//! assert_ne!(aks.provider(), k8s::compute::POD.provider());
//! ```

use std::fmt;

/// The provider family a node kind belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    /// Microsoft Azure services.
    Azure,
    /// Kubernetes resources.
    Kubernetes,
    /// On-premises / generic infrastructure.
    OnPrem,
    /// Elastic stack services.
    Elastic,
    /// User-defined kinds with their own icon.
    Custom,
}

impl Provider {
    /// Short lowercase identifier used in qualified names.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Azure => "azure",
            Self::Kubernetes => "k8s",
            Self::OnPrem => "onprem",
            Self::Elastic => "elastic",
            Self::Custom => "custom",
        }
    }

    /// Accent color drawn as the node border.
    pub fn accent_color(&self) -> &'static str {
        match self {
            Self::Azure => "#0078D4",
            Self::Kubernetes => "#326CE5",
            Self::OnPrem => "#5F6368",
            Self::Elastic => "#FEC514",
            Self::Custom => "#7B8894",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Default node shape hint for a kind.
///
/// Maps to the Graphviz `shape` attribute.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Rounded box (default).
    #[default]
    Box,
    /// Database cylinder.
    Cylinder,
    /// Storage folder.
    Folder,
    /// Person / client ellipse.
    Ellipse,
    /// Shapeless node, label below the icon image.
    Plain,
}

impl Shape {
    /// Returns the Graphviz `shape` value.
    pub fn as_dot_value(&self) -> &'static str {
        match self {
            Self::Box => "box",
            Self::Cylinder => "cylinder",
            Self::Folder => "folder",
            Self::Ellipse => "ellipse",
            Self::Plain => "none",
        }
    }
}

/// A typed, named visual element category.
///
/// Node kinds have no behavior; they are labels a diagram attaches to each
/// node so the exporter can pick a shape and accent. Two nodes may freely
/// share one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeKind {
    provider: Provider,
    category: &'static str,
    name: &'static str,
    shape: Shape,
}

impl NodeKind {
    const fn new(
        provider: Provider,
        category: &'static str,
        name: &'static str,
        shape: Shape,
    ) -> Self {
        Self {
            provider,
            category,
            name,
            shape,
        }
    }

    /// The provider family of this kind.
    pub fn provider(&self) -> Provider {
        self.provider
    }

    /// The category within the provider, e.g. `"compute"`.
    pub fn category(&self) -> &'static str {
        self.category
    }

    /// The kind name, e.g. `"KubernetesServices"`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The default shape for nodes of this kind.
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Fully qualified `provider.category.Name` string.
    pub fn qualified_name(&self) -> String {
        format!("{}.{}.{}", self.provider.as_str(), self.category, self.name)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}",
            self.provider.as_str(),
            self.category,
            self.name
        )
    }
}

/// Microsoft Azure node kinds.
pub mod azure {
    /// Azure compute services.
    pub mod compute {
        use crate::catalog::{NodeKind, Provider, Shape};

        pub const KUBERNETES_SERVICES: NodeKind =
            NodeKind::new(Provider::Azure, "compute", "KubernetesServices", Shape::Box);
        pub const CONTAINER_REGISTRIES: NodeKind =
            NodeKind::new(Provider::Azure, "compute", "ContainerRegistries", Shape::Box);
        pub const FUNCTION_APPS: NodeKind =
            NodeKind::new(Provider::Azure, "compute", "FunctionApps", Shape::Box);
        pub const VM: NodeKind = NodeKind::new(Provider::Azure, "compute", "VM", Shape::Box);
    }

    /// Azure database services.
    pub mod database {
        use crate::catalog::{NodeKind, Provider, Shape};

        pub const SQL_DATABASES: NodeKind =
            NodeKind::new(Provider::Azure, "database", "SQLDatabases", Shape::Cylinder);
        pub const COSMOS_DB: NodeKind =
            NodeKind::new(Provider::Azure, "database", "CosmosDb", Shape::Cylinder);
    }

    /// Azure DevOps services.
    pub mod devops {
        use crate::catalog::{NodeKind, Provider, Shape};

        pub const PIPELINES: NodeKind =
            NodeKind::new(Provider::Azure, "devops", "Pipelines", Shape::Box);
    }

    /// Azure identity services.
    pub mod identity {
        use crate::catalog::{NodeKind, Provider, Shape};

        pub const ACTIVE_DIRECTORY: NodeKind =
            NodeKind::new(Provider::Azure, "identity", "ActiveDirectory", Shape::Box);
    }

    /// Azure integration services.
    pub mod integration {
        use crate::catalog::{NodeKind, Provider, Shape};

        pub const LOGIC_APPS: NodeKind =
            NodeKind::new(Provider::Azure, "integration", "LogicApps", Shape::Box);
    }

    /// Azure monitoring services.
    pub mod monitor {
        use crate::catalog::{NodeKind, Provider, Shape};

        pub const MONITOR: NodeKind =
            NodeKind::new(Provider::Azure, "monitor", "Monitor", Shape::Box);
    }

    /// Azure networking services.
    pub mod network {
        use crate::catalog::{NodeKind, Provider, Shape};

        pub const LOAD_BALANCERS: NodeKind =
            NodeKind::new(Provider::Azure, "network", "LoadBalancers", Shape::Box);
        pub const VIRTUAL_NETWORKS: NodeKind =
            NodeKind::new(Provider::Azure, "network", "VirtualNetworks", Shape::Box);
        pub const APPLICATION_GATEWAY: NodeKind =
            NodeKind::new(Provider::Azure, "network", "ApplicationGateway", Shape::Box);
        pub const VIRTUAL_NETWORK_GATEWAYS: NodeKind = NodeKind::new(
            Provider::Azure,
            "network",
            "VirtualNetworkGateways",
            Shape::Box,
        );
        pub const NETWORK_SECURITY_GROUPS: NodeKind = NodeKind::new(
            Provider::Azure,
            "network",
            "NetworkSecurityGroups",
            Shape::Box,
        );
    }

    /// Azure security services.
    pub mod security {
        use crate::catalog::{NodeKind, Provider, Shape};

        pub const KEY_VAULTS: NodeKind =
            NodeKind::new(Provider::Azure, "security", "KeyVaults", Shape::Box);
    }

    /// Azure storage services.
    pub mod storage {
        use crate::catalog::{NodeKind, Provider, Shape};

        pub const BLOB_STORAGE: NodeKind =
            NodeKind::new(Provider::Azure, "storage", "BlobStorage", Shape::Folder);
    }

    /// Azure web services.
    pub mod web {
        use crate::catalog::{NodeKind, Provider, Shape};

        pub const APP_SERVICES: NodeKind =
            NodeKind::new(Provider::Azure, "web", "AppServices", Shape::Box);
    }
}

/// Kubernetes node kinds.
pub mod k8s {
    /// Kubernetes compute resources.
    pub mod compute {
        use crate::catalog::{NodeKind, Provider, Shape};

        pub const POD: NodeKind = NodeKind::new(Provider::Kubernetes, "compute", "Pod", Shape::Box);
    }

    /// Kubernetes network resources.
    pub mod network {
        use crate::catalog::{NodeKind, Provider, Shape};

        pub const INGRESS: NodeKind =
            NodeKind::new(Provider::Kubernetes, "network", "Ingress", Shape::Box);
    }
}

/// On-premises and generic infrastructure node kinds.
pub mod onprem {
    /// Clients and people.
    pub mod client {
        use crate::catalog::{NodeKind, Provider, Shape};

        pub const USERS: NodeKind =
            NodeKind::new(Provider::OnPrem, "client", "Users", Shape::Ellipse);
        pub const CLIENT: NodeKind =
            NodeKind::new(Provider::OnPrem, "client", "Client", Shape::Ellipse);
    }

    /// Container tooling.
    pub mod container {
        use crate::catalog::{NodeKind, Provider, Shape};

        pub const DOCKER: NodeKind =
            NodeKind::new(Provider::OnPrem, "container", "Docker", Shape::Box);
    }

    /// Monitoring tooling.
    pub mod monitoring {
        use crate::catalog::{NodeKind, Provider, Shape};

        pub const PROMETHEUS: NodeKind =
            NodeKind::new(Provider::OnPrem, "monitoring", "Prometheus", Shape::Box);
    }

    /// Generic networking.
    pub mod network {
        use crate::catalog::{NodeKind, Provider, Shape};

        pub const INTERNET: NodeKind =
            NodeKind::new(Provider::OnPrem, "network", "Internet", Shape::Ellipse);
    }

    /// Version control systems.
    pub mod vcs {
        use crate::catalog::{NodeKind, Provider, Shape};

        pub const GIT: NodeKind = NodeKind::new(Provider::OnPrem, "vcs", "Git", Shape::Box);
    }
}

/// Elastic stack node kinds.
pub mod elastic {
    /// Elasticsearch services.
    pub mod elasticsearch {
        use crate::catalog::{NodeKind, Provider, Shape};

        pub const ELASTICSEARCH: NodeKind = NodeKind::new(
            Provider::Elastic,
            "elasticsearch",
            "Elasticsearch",
            Shape::Box,
        );
    }
}

/// User-defined node kinds.
pub mod custom {
    use crate::catalog::{NodeKind, Provider, Shape};

    /// The kind for nodes carrying a user-supplied icon image.
    pub const CUSTOM: NodeKind = NodeKind::new(Provider::Custom, "custom", "Custom", Shape::Plain);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qualified_names_follow_provider_taxonomy() {
        assert_eq!(
            azure::database::COSMOS_DB.qualified_name(),
            "azure.database.CosmosDb"
        );
        assert_eq!(k8s::compute::POD.qualified_name(), "k8s.compute.Pod");
        assert_eq!(
            onprem::client::USERS.qualified_name(),
            "onprem.client.Users"
        );
    }

    #[test]
    fn shapes_match_element_semantics() {
        assert_eq!(
            azure::database::SQL_DATABASES.shape().as_dot_value(),
            "cylinder"
        );
        assert_eq!(azure::storage::BLOB_STORAGE.shape().as_dot_value(), "folder");
        assert_eq!(onprem::client::CLIENT.shape().as_dot_value(), "ellipse");
        assert_eq!(custom::CUSTOM.shape().as_dot_value(), "none");
    }

    #[test]
    fn provider_accents_are_hex_triplets() {
        for provider in [
            Provider::Azure,
            Provider::Kubernetes,
            Provider::OnPrem,
            Provider::Elastic,
            Provider::Custom,
        ] {
            let accent = provider.accent_color();
            assert!(accent.starts_with('#') && accent.len() == 7);
        }
    }
}
