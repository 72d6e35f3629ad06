//! VerticalPodAutoscaler resource and recommendation-only construction

use kube::api::ObjectMeta;
use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::workload::WorkloadRef;

/// Namespaces never given a VPA
pub const EXCLUDED_NAMESPACES: [&str; 2] = ["kube-system", "namespace-to-exclude"];

/// Suffix appended to the workload name
pub const VPA_NAME_SUFFIX: &str = "-vpa";

/// Spec of an `autoscaling.k8s.io/v1` VerticalPodAutoscaler, limited to
/// the fields this tool writes
#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[kube(
    group = "autoscaling.k8s.io",
    version = "v1",
    kind = "VerticalPodAutoscaler",
    plural = "verticalpodautoscalers",
    shortname = "vpa",
    namespaced
)]
#[serde(rename_all = "camelCase")]
pub struct VerticalPodAutoscalerSpec {
    /// Controller whose pods are sized
    pub target_ref: CrossVersionObjectReference,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_policy: Option<PodUpdatePolicy>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CrossVersionObjectReference {
    pub kind: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PodUpdatePolicy {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_mode: Option<UpdateMode>,
}

/// How the VPA applies its recommendations
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, JsonSchema)]
pub enum UpdateMode {
    /// Recommendations only; pods are never resized
    Off,
    Initial,
    Recreate,
    Auto,
}

pub fn is_excluded(namespace: &str) -> bool {
    EXCLUDED_NAMESPACES.contains(&namespace)
}

pub fn vpa_name(workload_name: &str) -> String {
    format!("{}{}", workload_name, VPA_NAME_SUFFIX)
}

/// Build a VPA targeting `workload` with update mode `Off`.
///
/// The VPA lives in the workload's namespace and is named `<workload>-vpa`.
pub fn recommendation_only_vpa(workload: &WorkloadRef) -> VerticalPodAutoscaler {
    VerticalPodAutoscaler {
        metadata: ObjectMeta {
            name: Some(vpa_name(&workload.name)),
            namespace: Some(workload.namespace.clone()),
            ..Default::default()
        },
        spec: VerticalPodAutoscalerSpec {
            target_ref: CrossVersionObjectReference {
                kind: workload.kind.kind().to_string(),
                name: workload.name.clone(),
                api_version: Some(workload.kind.api_version().to_string()),
            },
            update_policy: Some(PodUpdatePolicy {
                update_mode: Some(UpdateMode::Off),
            }),
        },
    }
}
