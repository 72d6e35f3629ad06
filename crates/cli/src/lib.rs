//! Shared plumbing for the kube-audit binaries
//!
//! Every binary parses its flags, then hands a task to [`run`], which
//! loads settings, installs logging, connects to the cluster and turns a
//! fatal error into a logged message and a non-zero exit code.

mod args;
mod runner;

pub use args::{ClusterArgs, RemediationArgs};
pub use runner::{connect, remediate, run};
