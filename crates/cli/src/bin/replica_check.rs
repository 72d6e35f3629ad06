//! Lists Deployments declaring fewer replicas than a threshold.

use std::io::Write;
use std::process::ExitCode;

use anyhow::{Context, Result};
use audit_lib::checks::replicas::{find_under_replicated, header, MIN_REPLICAS};
use audit_lib::KubeCluster;
use clap::Parser;
use kube_audit_cli::{run, ClusterArgs};

/// Report under-replicated Deployments across all namespaces
#[derive(Parser)]
#[command(name = "replica-check")]
#[command(author, version, about = "List Deployments with fewer replicas than a threshold", long_about = None)]
struct Cli {
    #[command(flatten)]
    cluster: ClusterArgs,

    /// Report Deployments declaring fewer replicas than this
    #[arg(long, default_value_t = MIN_REPLICAS)]
    min_replicas: i32,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let min_replicas = cli.min_replicas;

    run(&cli.cluster, move |cluster| report(cluster, min_replicas)).await
}

async fn report(cluster: KubeCluster, min_replicas: i32) -> Result<()> {
    let found = find_under_replicated(&cluster, min_replicas)
        .await
        .context("Error listing deployments")?;

    let mut out = std::io::stdout().lock();
    writeln!(out, "{}", header(min_replicas))?;
    for deployment in &found {
        writeln!(out, "{}", deployment)?;
    }
    Ok(())
}
