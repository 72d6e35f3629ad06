//! Process lifecycle for a single utility run

use std::future::Future;
use std::io::Write;
use std::process::ExitCode;

use anyhow::{Context, Result};
use audit_lib::kubeconfig::{self, resolve_kubeconfig_path};
use audit_lib::{create_recommendation_vpas, init_tracing, KubeCluster, LogFormat, Settings, WorkloadKind};
use tracing::{error, info};

use crate::args::{ClusterArgs, RemediationArgs};

/// Run `task` against a freshly connected cluster.
///
/// Setup failures and errors returned by `task` are logged and mapped
/// to `ExitCode::FAILURE`.
pub async fn run<F, Fut>(args: &ClusterArgs, task: F) -> ExitCode
where
    F: FnOnce(KubeCluster) -> Fut,
    Fut: Future<Output = Result<()>>,
{
    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(err) => {
            init_tracing(LogFormat::Text, args.verbose);
            return fatal(err);
        }
    };
    init_tracing(settings.log_format, args.verbose);

    let cluster = match connect(args, &settings).await {
        Ok(cluster) => cluster,
        Err(err) => return fatal(err),
    };

    match task(cluster).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => fatal(err),
    }
}

/// Resolve credentials and build the cluster handle
pub async fn connect(args: &ClusterArgs, settings: &Settings) -> Result<KubeCluster> {
    let path = resolve_kubeconfig_path(args.kubeconfig.as_deref())
        .context("Error loading kubeconfig")?;

    let client = kubeconfig::connect(&path)
        .await
        .context("Error creating Kubernetes client")?;

    Ok(KubeCluster::new(client, settings.field_manager.clone()))
}

/// Create recommendation-only VPAs for every `kind` workload,
/// printing confirmations to stdout
pub async fn remediate(cluster: KubeCluster, kind: WorkloadKind, args: RemediationArgs) -> Result<()> {
    if args.dry_run {
        info!(%kind, "Dry run: creates will not be persisted");
    }
    let cluster = cluster.with_dry_run(args.dry_run);

    let mut out = std::io::stdout().lock();
    create_recommendation_vpas(&cluster, kind, &mut out)
        .await
        .with_context(|| format!("VPA remediation for {}s failed", kind))?;
    out.flush()?;

    Ok(())
}

fn fatal(err: anyhow::Error) -> ExitCode {
    let message = format!("{:#}", err);
    error!(error = %message, "Fatal error");
    ExitCode::FAILURE
}
