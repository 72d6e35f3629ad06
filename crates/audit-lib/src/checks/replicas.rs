//! Replica-count report over Deployments

use std::fmt;

use k8s_openapi::api::apps::v1::Deployment;
use kube::ResourceExt;

use crate::cluster::ClusterApi;
use crate::error::ClusterError;

/// Deployments below this many replicas are reported by default
pub const MIN_REPLICAS: i32 = 2;

/// A Deployment reported as under-replicated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnderReplicated {
    pub namespace: String,
    pub name: String,
    pub replicas: i32,
}

impl fmt::Display for UnderReplicated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Namespace: {}, Deployment Name: {}, Replicas: {}",
            self.namespace, self.name, self.replicas
        )
    }
}

/// Declared replica count, if the spec sets one
pub fn declared_replicas(deployment: &Deployment) -> Option<i32> {
    deployment.spec.as_ref().and_then(|spec| spec.replicas)
}

/// A Deployment without a declared count is never reported.
pub fn is_under_replicated(deployment: &Deployment, min_replicas: i32) -> bool {
    declared_replicas(deployment).is_some_and(|n| n < min_replicas)
}

pub fn header(min_replicas: i32) -> String {
    format!("Deployments with less than {} replicas:", min_replicas)
}

/// List all Deployments and keep those below `min_replicas`, in list order
pub async fn find_under_replicated(
    api: &dyn ClusterApi,
    min_replicas: i32,
) -> Result<Vec<UnderReplicated>, ClusterError> {
    let deployments = api.list_deployments().await?;

    Ok(deployments
        .iter()
        .filter(|d| is_under_replicated(d, min_replicas))
        .filter_map(|d| {
            Some(UnderReplicated {
                namespace: d.namespace().unwrap_or_default(),
                name: d.name_any(),
                replicas: declared_replicas(d)?,
            })
        })
        .collect())
}
