//! Creates a recommendation-only VPA for every DaemonSet outside the
//! excluded namespaces.

use std::process::ExitCode;

use audit_lib::WorkloadKind;
use clap::Parser;
use kube_audit_cli::{remediate, run, ClusterArgs, RemediationArgs};

/// Create VPAs with update mode Off for DaemonSets
#[derive(Parser)]
#[command(name = "vpa-daemonset")]
#[command(author, version, about = "Create recommendation-only VPAs for DaemonSets", long_about = None)]
struct Cli {
    #[command(flatten)]
    cluster: ClusterArgs,

    #[command(flatten)]
    remediation: RemediationArgs,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let remediation = cli.remediation;

    run(&cli.cluster, move |cluster| {
        remediate(cluster, WorkloadKind::DaemonSet, remediation)
    })
    .await
}
