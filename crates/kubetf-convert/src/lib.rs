//! Kubetf Convert - manifest to Terraform HCL conversion pipeline
//!
//! This crate routes each document of a Kubernetes manifest to one of two
//! external converters and collects the results:
//!
//! - standard resources go through `k2tf`, which emits typed
//!   `kubernetes_*` provider resources
//! - CRDs and custom resources go through `tfk8s`, which emits generic
//!   `kubernetes_manifest` blocks
//!
//! The converters sit behind the [`Transform`] trait, so the pipeline itself
//! never cares whether it is driving a real subprocess or an in-process test
//! double. One document failing (missing binary, non-zero exit, bad shape)
//! never aborts the batch; the run succeeds if at least one document converts.
//!
//! # Example
//!
//! ```no_run
//! use kubetf_convert::{ExecTransformer, Pipeline, report::NullReporter};
//! use kubetf_core::load_documents;
//!
//! let docs = load_documents("apiVersion: v1\nkind: ConfigMap\n").unwrap();
//!
//! let standard = ExecTransformer::k2tf();
//! let custom = ExecTransformer::tfk8s();
//! let mut reporter = NullReporter;
//!
//! let summary = Pipeline::new(&standard, &custom, &mut reporter).run(&docs);
//! println!("{} succeeded, {} failed", summary.succeeded(), summary.failed());
//! ```

pub mod error;
pub mod output;
pub mod pipeline;
pub mod report;
pub mod transformer;

// Re-exports
pub use error::{ConvertError, Result};
pub use output::{render_single_file, write_resource_files, SINGLE_FILE_HEADER};
pub use pipeline::{DocumentOutcome, Pipeline, RunSummary};
pub use report::{NullReporter, PipelineEvent, Reporter};
pub use transformer::{ExecTransformer, Transform};
