//! Recommendation-only VPA creation for workloads
//!
//! One create attempt per listed workload outside the excluded namespaces.
//! A failed create is logged and the pass moves on to the next workload.

use std::io::Write;

use tracing::{debug, error, info};

use crate::cluster::{list_workloads, ClusterApi};
use crate::error::AuditError;
use crate::vpa::{is_excluded, recommendation_only_vpa};
use crate::workload::{WorkloadKind, WorkloadRef};

/// Outcome counts of one remediation pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemediationReport {
    pub created: Vec<WorkloadRef>,
    pub failed: Vec<WorkloadRef>,
    pub skipped: usize,
}

impl RemediationReport {
    pub fn attempted(&self) -> usize {
        self.created.len() + self.failed.len()
    }
}

/// Create a VPA with update mode `Off` for every `kind` workload.
///
/// Confirmation lines go to `out`. Only the initial list and writes to
/// `out` can fail the pass.
pub async fn create_recommendation_vpas(
    api: &dyn ClusterApi,
    kind: WorkloadKind,
    out: &mut dyn Write,
) -> Result<RemediationReport, AuditError> {
    let workloads = list_workloads(api, kind).await?;
    let mut report = RemediationReport::default();

    if workloads.is_empty() {
        writeln!(out, "No {}s found in the cluster. Exiting.", kind)?;
        return Ok(report);
    }

    for workload in workloads {
        if is_excluded(&workload.namespace) {
            debug!(%kind, namespace = %workload.namespace, name = %workload.name, "Skipping excluded namespace");
            report.skipped += 1;
            continue;
        }

        let vpa = recommendation_only_vpa(&workload);
        match api.create_vpa(&workload.namespace, &vpa).await {
            Ok(_) => {
                writeln!(
                    out,
                    "Created VPA for {} {} in namespace {}",
                    kind, workload.name, workload.namespace
                )?;
                report.created.push(workload);
            }
            Err(err) => {
                error!(
                    %kind,
                    namespace = %workload.namespace,
                    name = %workload.name,
                    error = %err,
                    "Error creating VPA"
                );
                report.failed.push(workload);
            }
        }
    }

    info!(
        %kind,
        created = report.created.len(),
        failed = report.failed.len(),
        skipped = report.skipped,
        "VPA remediation finished"
    );

    Ok(report)
}
