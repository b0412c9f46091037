//! Kubetf Core - resource classification and manifest loading
//!
//! This crate holds the pure logic of kubetf: deciding whether a Kubernetes
//! resource has a typed representation in the Terraform provider (and can go
//! through `k2tf`) or must fall back to a generic `kubernetes_manifest` block
//! (via `tfk8s`), plus the manifest loader and output filename allocation that
//! the conversion pipeline builds on.
//!
//! Nothing in here touches the filesystem or spawns processes; everything is
//! deterministic and callable concurrently.

pub mod classify;
pub mod error;
pub mod filename;
pub mod loader;
pub mod resource;

// Re-exports
pub use classify::{Classification, Classifier, STANDARD_API_GROUPS};
pub use error::{CoreError, Result};
pub use filename::{FilenameAllocator, sanitize_kind};
pub use loader::load_documents;
pub use resource::ResourceMeta;
