//! Lists Pods and Jobs whose containers declare no cpu or memory
//! requests or limits.

use std::io::Write;
use std::process::ExitCode;

use anyhow::{Context, Result};
use audit_lib::checks::resources::{find_missing_resources, jobs_header, pods_header};
use audit_lib::KubeCluster;
use chrono::{DateTime, Local};
use clap::Parser;
use kube_audit_cli::{run, ClusterArgs};

/// Report Pods and Jobs running without resource requests and limits
#[derive(Parser)]
#[command(name = "resource-check")]
#[command(author, version, about = "List Pods and Jobs without CPU/memory requests and limits", long_about = None)]
struct Cli {
    #[command(flatten)]
    cluster: ClusterArgs,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let started = Local::now();

    run(&cli.cluster, move |cluster| report(cluster, started)).await
}

async fn report(cluster: KubeCluster, started: DateTime<Local>) -> Result<()> {
    let report = find_missing_resources(&cluster)
        .await
        .context("Error listing pods and jobs")?;

    let mut out = std::io::stdout().lock();
    writeln!(out, "{}", pods_header(&started))?;
    for pod in &report.pods {
        writeln!(out, "{}", pod)?;
    }
    writeln!(out, "{}", jobs_header(&started))?;
    for job in &report.jobs {
        writeln!(out, "{}", job)?;
    }
    Ok(())
}
