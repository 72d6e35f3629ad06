//! Flags shared across binaries

use clap::Args;
use std::path::PathBuf;

/// Cluster connection flags
#[derive(Args, Debug, Clone)]
pub struct ClusterArgs {
    /// Path to kubeconfig file (uses ~/.kube/config if not specified)
    #[arg(long, env = "KUBECONFIG")]
    pub kubeconfig: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short)]
    pub verbose: bool,
}

/// Flags for the VPA creators
#[derive(Args, Debug, Clone, Copy)]
pub struct RemediationArgs {
    /// Send creates as server-side dry runs without persisting anything
    #[arg(long)]
    pub dry_run: bool,
}
