//! Typed access to the cluster API
//!
//! Utilities talk to the cluster only through [`ClusterApi`], so tests can
//! substitute an in-memory implementation.

use std::fmt::Debug;

use async_trait::async_trait;
use k8s_openapi::api::apps::v1::{DaemonSet, Deployment, StatefulSet};
use k8s_openapi::api::batch::v1::Job;
use k8s_openapi::api::core::v1::Pod;
use k8s_openapi::NamespaceResourceScope;
use kube::api::{Api, ListParams, PostParams};
use kube::{Client, Resource};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::ClusterError;
use crate::vpa::VerticalPodAutoscaler;
use crate::workload::{WorkloadKind, WorkloadRef};

/// Read and write calls the utilities make against the cluster
#[async_trait]
pub trait ClusterApi: Send + Sync {
    async fn list_deployments(&self) -> Result<Vec<Deployment>, ClusterError>;

    async fn list_daemon_sets(&self) -> Result<Vec<DaemonSet>, ClusterError>;

    async fn list_stateful_sets(&self) -> Result<Vec<StatefulSet>, ClusterError>;

    async fn list_pods(&self) -> Result<Vec<Pod>, ClusterError>;

    async fn list_jobs(&self) -> Result<Vec<Job>, ClusterError>;

    /// Create `vpa` in `namespace`, returning the object the server stored
    async fn create_vpa(
        &self,
        namespace: &str,
        vpa: &VerticalPodAutoscaler,
    ) -> Result<VerticalPodAutoscaler, ClusterError>;
}

/// List every workload of `kind` across all namespaces
pub async fn list_workloads(
    api: &dyn ClusterApi,
    kind: WorkloadKind,
) -> Result<Vec<WorkloadRef>, ClusterError> {
    let workloads: Vec<WorkloadRef> = match kind {
        WorkloadKind::Deployment => api
            .list_deployments()
            .await?
            .iter()
            .map(|d| WorkloadRef::from_object(kind, d))
            .collect(),
        WorkloadKind::DaemonSet => api
            .list_daemon_sets()
            .await?
            .iter()
            .map(|d| WorkloadRef::from_object(kind, d))
            .collect(),
        WorkloadKind::StatefulSet => api
            .list_stateful_sets()
            .await?
            .iter()
            .map(|s| WorkloadRef::from_object(kind, s))
            .collect(),
    };
    Ok(workloads)
}

/// [`ClusterApi`] backed by a live `kube` client
#[derive(Clone)]
pub struct KubeCluster {
    client: Client,
    field_manager: String,
    dry_run: bool,
}

impl KubeCluster {
    pub fn new(client: Client, field_manager: impl Into<String>) -> Self {
        Self {
            client,
            field_manager: field_manager.into(),
            dry_run: false,
        }
    }

    /// Send creates as server-side dry runs
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Parameters attached to every create
    fn post_params(&self) -> PostParams {
        PostParams {
            dry_run: self.dry_run,
            field_manager: Some(self.field_manager.clone()),
        }
    }

    async fn list_all<K>(&self) -> Result<Vec<K>, ClusterError>
    where
        K: Resource<Scope = NamespaceResourceScope> + Clone + DeserializeOwned + Debug,
        K::DynamicType: Default,
    {
        let api: Api<K> = Api::all(self.client.clone());
        let list = api.list(&ListParams::default()).await?;
        debug!(
            kind = %K::kind(&K::DynamicType::default()),
            count = list.items.len(),
            "Listed resources"
        );
        Ok(list.items)
    }
}

#[async_trait]
impl ClusterApi for KubeCluster {
    async fn list_deployments(&self) -> Result<Vec<Deployment>, ClusterError> {
        self.list_all().await
    }

    async fn list_daemon_sets(&self) -> Result<Vec<DaemonSet>, ClusterError> {
        self.list_all().await
    }

    async fn list_stateful_sets(&self) -> Result<Vec<StatefulSet>, ClusterError> {
        self.list_all().await
    }

    async fn list_pods(&self) -> Result<Vec<Pod>, ClusterError> {
        self.list_all().await
    }

    async fn list_jobs(&self) -> Result<Vec<Job>, ClusterError> {
        self.list_all().await
    }

    async fn create_vpa(
        &self,
        namespace: &str,
        vpa: &VerticalPodAutoscaler,
    ) -> Result<VerticalPodAutoscaler, ClusterError> {
        let api: Api<VerticalPodAutoscaler> = Api::namespaced(self.client.clone(), namespace);
        Ok(api.create(&self.post_params(), vpa).await?)
    }
}
