//! Read-only reports over listed cluster resources
//!
//! Each check lists one or two resource kinds across all namespaces and
//! applies a pure predicate per item.

pub mod replicas;
pub mod resources;

pub use replicas::{find_under_replicated, is_under_replicated, UnderReplicated, MIN_REPLICAS};
pub use resources::{
    declares_resources, find_missing_resources, lacks_resources, MissingResources, OwnerKind,
    ResourceReport,
};
