//! Credential resolution and client construction

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use kube::config::{Config, KubeConfigOptions, Kubeconfig};
use kube::Client;
use tracing::debug;

use crate::error::ConnectError;

/// Environment variable naming the kubeconfig file
pub const KUBECONFIG_ENV: &str = "KUBECONFIG";

/// Resolve the kubeconfig path for this process.
///
/// An explicit path wins, then a non-empty `KUBECONFIG`, then
/// `$HOME/.kube/config`.
pub fn resolve_kubeconfig_path(explicit: Option<&Path>) -> Result<PathBuf, ConnectError> {
    resolve_from(
        explicit,
        std::env::var_os(KUBECONFIG_ENV),
        dirs_next::home_dir(),
    )
}

fn resolve_from(
    explicit: Option<&Path>,
    env_value: Option<OsString>,
    home: Option<PathBuf>,
) -> Result<PathBuf, ConnectError> {
    if let Some(path) = explicit.filter(|p| !p.as_os_str().is_empty()) {
        return Ok(path.to_path_buf());
    }

    if let Some(value) = env_value.filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(value));
    }

    let home = home.ok_or(ConnectError::HomeDirectory)?;
    Ok(home.join(".kube").join("config"))
}

/// Build an authenticated client from the kubeconfig at `path`,
/// using its current context.
pub async fn connect(path: &Path) -> Result<Client, ConnectError> {
    debug!(path = %path.display(), "Loading kubeconfig");

    let kubeconfig = Kubeconfig::read_from(path).map_err(|source| ConnectError::ReadKubeconfig {
        path: path.to_path_buf(),
        source,
    })?;

    let config = Config::from_custom_kubeconfig(kubeconfig, &KubeConfigOptions::default())
        .await
        .map_err(|source| ConnectError::ResolveConfig {
            path: path.to_path_buf(),
            source,
        })?;

    debug!(cluster_url = %config.cluster_url, "Resolved cluster endpoint");

    Client::try_from(config).map_err(ConnectError::Client)
}
