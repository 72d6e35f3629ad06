//! In-memory cluster and fixture builders for unit tests

use std::collections::{BTreeMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use k8s_openapi::api::apps::v1::{DaemonSet, Deployment, DeploymentSpec, StatefulSet};
use k8s_openapi::api::batch::v1::{Job, JobSpec};
use k8s_openapi::api::core::v1::{Container, Pod, PodSpec, PodTemplateSpec, ResourceRequirements};
use k8s_openapi::apimachinery::pkg::api::resource::Quantity;
use kube::api::ObjectMeta;
use kube::ResourceExt;

use crate::cluster::ClusterApi;
use crate::error::ClusterError;
use crate::vpa::VerticalPodAutoscaler;

/// Fake [`ClusterApi`] that serves fixed lists and records creates
#[derive(Default)]
pub struct FakeCluster {
    deployments: Vec<Deployment>,
    daemon_sets: Vec<DaemonSet>,
    stateful_sets: Vec<StatefulSet>,
    pods: Vec<Pod>,
    jobs: Vec<Job>,
    fail_lists: bool,
    fail_creates: HashSet<String>,
    attempts: Mutex<Vec<(String, VerticalPodAutoscaler)>>,
}

impl FakeCluster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_deployments(mut self, items: Vec<Deployment>) -> Self {
        self.deployments = items;
        self
    }

    pub fn with_daemon_sets(mut self, items: Vec<DaemonSet>) -> Self {
        self.daemon_sets = items;
        self
    }

    pub fn with_stateful_sets(mut self, items: Vec<StatefulSet>) -> Self {
        self.stateful_sets = items;
        self
    }

    pub fn with_pods(mut self, items: Vec<Pod>) -> Self {
        self.pods = items;
        self
    }

    pub fn with_jobs(mut self, items: Vec<Job>) -> Self {
        self.jobs = items;
        self
    }

    /// Every list call fails as unauthorized
    pub fn failing_lists(mut self) -> Self {
        self.fail_lists = true;
        self
    }

    /// Creating the VPA with this name fails as already existing
    pub fn failing_create(mut self, vpa_name: &str) -> Self {
        self.fail_creates.insert(vpa_name.to_string());
        self
    }

    /// Every create attempt so far, as (namespace, object)
    pub fn attempts(&self) -> Vec<(String, VerticalPodAutoscaler)> {
        self.attempts.lock().unwrap().clone()
    }

    fn serve<T: Clone>(&self, items: &[T]) -> Result<Vec<T>, ClusterError> {
        if self.fail_lists {
            return Err(ClusterError::Unauthorized("token expired".to_string()));
        }
        Ok(items.to_vec())
    }
}

#[async_trait]
impl ClusterApi for FakeCluster {
    async fn list_deployments(&self) -> Result<Vec<Deployment>, ClusterError> {
        self.serve(&self.deployments)
    }

    async fn list_daemon_sets(&self) -> Result<Vec<DaemonSet>, ClusterError> {
        self.serve(&self.daemon_sets)
    }

    async fn list_stateful_sets(&self) -> Result<Vec<StatefulSet>, ClusterError> {
        self.serve(&self.stateful_sets)
    }

    async fn list_pods(&self) -> Result<Vec<Pod>, ClusterError> {
        self.serve(&self.pods)
    }

    async fn list_jobs(&self) -> Result<Vec<Job>, ClusterError> {
        self.serve(&self.jobs)
    }

    async fn create_vpa(
        &self,
        namespace: &str,
        vpa: &VerticalPodAutoscaler,
    ) -> Result<VerticalPodAutoscaler, ClusterError> {
        self.attempts
            .lock()
            .unwrap()
            .push((namespace.to_string(), vpa.clone()));

        let name = vpa.name_any();
        if self.fail_creates.contains(&name) {
            return Err(ClusterError::AlreadyExists(format!(
                "verticalpodautoscalers \"{}\" already exists",
                name
            )));
        }
        Ok(vpa.clone())
    }
}

fn meta(namespace: &str, name: &str) -> ObjectMeta {
    ObjectMeta {
        name: Some(name.to_string()),
        namespace: Some(namespace.to_string()),
        ..Default::default()
    }
}

pub fn deployment(namespace: &str, name: &str, replicas: Option<i32>) -> Deployment {
    Deployment {
        metadata: meta(namespace, name),
        spec: Some(DeploymentSpec {
            replicas,
            ..Default::default()
        }),
        ..Default::default()
    }
}

pub fn daemon_set(namespace: &str, name: &str) -> DaemonSet {
    DaemonSet {
        metadata: meta(namespace, name),
        ..Default::default()
    }
}

pub fn stateful_set(namespace: &str, name: &str) -> StatefulSet {
    StatefulSet {
        metadata: meta(namespace, name),
        ..Default::default()
    }
}

/// Container whose requests and limits name the given resources
pub fn container(requests: &[&str], limits: &[&str]) -> Container {
    let quantities = |names: &[&str]| {
        (!names.is_empty()).then(|| {
            names
                .iter()
                .map(|n| (n.to_string(), Quantity("100m".to_string())))
                .collect::<BTreeMap<_, _>>()
        })
    };

    Container {
        name: "main".to_string(),
        resources: Some(ResourceRequirements {
            requests: quantities(requests),
            limits: quantities(limits),
            ..Default::default()
        }),
        ..Default::default()
    }
}

pub fn pod(namespace: &str, name: &str, containers: Vec<Container>) -> Pod {
    Pod {
        metadata: meta(namespace, name),
        spec: Some(PodSpec {
            containers,
            ..Default::default()
        }),
        ..Default::default()
    }
}

pub fn job(namespace: &str, name: &str, containers: Vec<Container>) -> Job {
    Job {
        metadata: meta(namespace, name),
        spec: Some(JobSpec {
            template: PodTemplateSpec {
                spec: Some(PodSpec {
                    containers,
                    ..Default::default()
                }),
                ..Default::default()
            },
            ..Default::default()
        }),
        ..Default::default()
    }
}
