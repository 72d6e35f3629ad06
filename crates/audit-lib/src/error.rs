//! Error types shared by the audit utilities

use std::path::PathBuf;

use kube::config::KubeconfigError;
use thiserror::Error;

/// Failures while resolving credentials and building a client.
///
/// Every variant is fatal for the calling utility.
#[derive(Debug, Error)]
pub enum ConnectError {
    #[error("could not determine home directory to locate the default kubeconfig")]
    HomeDirectory,

    #[error("failed to read kubeconfig {}", path.display())]
    ReadKubeconfig {
        path: PathBuf,
        #[source]
        source: KubeconfigError,
    },

    #[error("failed to resolve cluster configuration from {}", path.display())]
    ResolveConfig {
        path: PathBuf,
        #[source]
        source: KubeconfigError,
    },

    #[error("failed to create Kubernetes client")]
    Client(#[source] kube::Error),
}

/// Failures returned by a single call against the cluster API.
#[derive(Debug, Error)]
pub enum ClusterError {
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("forbidden: {0}")]
    Forbidden(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("already exists: {0}")]
    AlreadyExists(String),

    #[error("API error ({code}): {message}")]
    Api { code: u16, message: String },

    #[error("transient API failure: {0}")]
    Transient(String),
}

impl From<kube::Error> for ClusterError {
    fn from(err: kube::Error) -> Self {
        match err {
            kube::Error::Api(resp) => match resp.code {
                401 => ClusterError::Unauthorized(resp.message),
                403 => ClusterError::Forbidden(resp.message),
                404 => ClusterError::NotFound(resp.message),
                409 => ClusterError::AlreadyExists(resp.message),
                code => ClusterError::Api {
                    code,
                    message: resp.message,
                },
            },
            other => ClusterError::Transient(other.to_string()),
        }
    }
}

/// Errors surfaced by a reporting or remediation pass
#[derive(Debug, Error)]
pub enum AuditError {
    #[error(transparent)]
    Cluster(#[from] ClusterError),

    #[error("failed to write report")]
    Output(#[from] std::io::Error),
}
