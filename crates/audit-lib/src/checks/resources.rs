//! Resource requests/limits report over Pods and Jobs

use std::fmt;

use chrono::{DateTime, TimeZone};
use k8s_openapi::api::batch::v1::Job;
use k8s_openapi::api::core::v1::{Container, Pod, PodSpec};
use kube::ResourceExt;

use crate::cluster::ClusterApi;
use crate::error::ClusterError;

/// Resource names the check looks for in requests and limits
pub const TRACKED_RESOURCES: [&str; 2] = ["cpu", "memory"];

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Object kind of a finding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnerKind {
    Pod,
    Job,
}

impl fmt::Display for OwnerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OwnerKind::Pod => f.write_str("Pod"),
            OwnerKind::Job => f.write_str("Job"),
        }
    }
}

/// A Pod or Job none of whose containers declares cpu/memory resources
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingResources {
    pub kind: OwnerKind,
    pub namespace: String,
    pub name: String,
}

impl fmt::Display for MissingResources {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Namespace: {}, {}: {}", self.namespace, self.kind, self.name)
    }
}

/// Both halves of the report, gathered before anything is printed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceReport {
    pub pods: Vec<MissingResources>,
    pub jobs: Vec<MissingResources>,
}

/// True when the container's requests or limits name cpu or memory
pub fn declares_resources(container: &Container) -> bool {
    let Some(resources) = &container.resources else {
        return false;
    };

    [&resources.requests, &resources.limits]
        .into_iter()
        .flatten()
        .any(|quantities| TRACKED_RESOURCES.iter().any(|name| quantities.contains_key(*name)))
}

/// True when no container in the spec declares resources.
///
/// A missing spec counts as lacking resources.
pub fn lacks_resources(spec: Option<&PodSpec>) -> bool {
    spec.map_or(true, |spec| !spec.containers.iter().any(declares_resources))
}

pub fn pod_lacks_resources(pod: &Pod) -> bool {
    lacks_resources(pod.spec.as_ref())
}

pub fn job_lacks_resources(job: &Job) -> bool {
    let template = job.spec.as_ref().and_then(|spec| spec.template.spec.as_ref());
    lacks_resources(template)
}

pub fn pods_header<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: fmt::Display,
{
    format!(
        "{} Pods running without resource requests and limits set:",
        now.format(TIMESTAMP_FORMAT)
    )
}

pub fn jobs_header<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: fmt::Display,
{
    format!(
        "{} Jobs without resource requests and limits set:",
        now.format(TIMESTAMP_FORMAT)
    )
}

/// List all Pods and all Jobs and keep those lacking resources
pub async fn find_missing_resources(api: &dyn ClusterApi) -> Result<ResourceReport, ClusterError> {
    let pods = api.list_pods().await?;
    let jobs = api.list_jobs().await?;

    Ok(ResourceReport {
        pods: pods
            .iter()
            .filter(|p| pod_lacks_resources(p))
            .map(|p| MissingResources {
                kind: OwnerKind::Pod,
                namespace: p.namespace().unwrap_or_default(),
                name: p.name_any(),
            })
            .collect(),
        jobs: jobs
            .iter()
            .filter(|j| job_lacks_resources(j))
            .map(|j| MissingResources {
                kind: OwnerKind::Job,
                namespace: j.namespace().unwrap_or_default(),
                name: j.name_any(),
            })
            .collect(),
    })
}
