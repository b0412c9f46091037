//! CLI commands

pub mod convert;
pub mod split;

use std::path::Path;

use kubetf_convert::{ExecTransformer, NullReporter, Pipeline, Reporter, RunSummary};
use kubetf_core::load_documents;
use miette::{IntoDiagnostic, Result, WrapErr, miette};

use crate::display::ConsoleReporter;

/// Resolved transformer binary names/paths
pub struct TransformerBins {
    pub k2tf: String,
    pub tfk8s: String,
}

/// Shared front half of both commands: read, parse, filter, convert.
///
/// Fatal here: unreadable input, malformed YAML, no usable documents.
/// Everything after that is per-document and lands in the summary.
pub fn load_and_convert(input: &Path, bins: &TransformerBins, quiet: bool) -> Result<RunSummary> {
    let raw = std::fs::read_to_string(input)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to read input file '{}'", input.display()))?;

    let docs = load_documents(&raw)
        .into_diagnostic()
        .wrap_err("Failed to parse input as YAML")?;

    if docs.is_empty() {
        return Err(miette!(
            "No valid Kubernetes documents found in input file '{}'",
            input.display()
        ));
    }

    if !quiet {
        println!("Found {} Kubernetes document(s)", docs.len());
    }

    let standard = ExecTransformer::k2tf().with_binary(&bins.k2tf);
    let custom = ExecTransformer::tfk8s().with_binary(&bins.tfk8s);

    let mut console = ConsoleReporter::new();
    let mut null = NullReporter;
    let reporter: &mut dyn Reporter = if quiet { &mut null } else { &mut console };

    Ok(Pipeline::new(&standard, &custom, reporter).run(&docs))
}
