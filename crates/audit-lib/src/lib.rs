//! Cluster hygiene library
//!
//! This crate provides the logic behind the kube-audit utilities:
//! - Kubeconfig resolution and client construction
//! - A typed cluster interface with a `kube`-backed implementation
//! - Replica-count and resource-request reports
//! - Recommendation-only VerticalPodAutoscaler remediation
//! - Settings and logging setup

pub mod checks;
pub mod cluster;
pub mod error;
pub mod kubeconfig;
pub mod observability;
pub mod remediate;
pub mod settings;
pub mod vpa;
pub mod workload;

#[cfg(test)]
mod testing;

pub use cluster::{list_workloads, ClusterApi, KubeCluster};
pub use error::{AuditError, ClusterError, ConnectError};
pub use observability::{init_tracing, LogFormat};
pub use remediate::{create_recommendation_vpas, RemediationReport};
pub use settings::Settings;
pub use workload::{WorkloadKind, WorkloadRef};
