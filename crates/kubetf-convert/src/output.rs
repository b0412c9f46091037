//! Output rendering for the two modes
//!
//! Single-file mode concatenates every successful conversion into one `.tf`
//! file under a fixed provenance header. Per-resource mode writes one file per
//! successful conversion, named from the resource kind, each with its own
//! header describing where the HCL came from.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use kubetf_core::FilenameAllocator;

use crate::error::Result;
use crate::pipeline::RunSummary;

/// Header prepended to the single-file output
pub const SINGLE_FILE_HEADER: &str = "\
# Generated from Kubernetes manifests
# Custom resources use kubernetes_manifest resource type
# Standard resources use their respective kubernetes provider types
";

/// Render all successful conversions as one file, in document order.
///
/// Successful HCL texts are separated by a blank line under the fixed
/// three-line header. Failed documents are simply absent.
pub fn render_single_file(summary: &RunSummary) -> String {
    let texts: Vec<&str> = summary
        .outcomes
        .iter()
        .filter_map(|o| o.result.as_deref().ok())
        .map(str::trim_end)
        .collect();

    let mut out = String::from(SINGLE_FILE_HEADER);
    out.push('\n');
    out.push_str(&texts.join("\n\n"));
    out.push('\n');
    out
}

/// Per-resource write results: paths written, and per-file write failures
#[derive(Debug, Default)]
pub struct WriteReport {
    pub written: Vec<PathBuf>,
    pub write_failures: Vec<(usize, String)>,
}

/// Write each successful conversion to its own file under `output_dir`.
///
/// Creates the directory (and parents) first. Filenames come from the
/// sanitized resource kind with numeric suffixes on collision, in document
/// order. A file that fails to write counts against that document only.
pub fn write_resource_files(summary: &RunSummary, output_dir: &Path) -> Result<WriteReport> {
    fs::create_dir_all(output_dir)?;

    let mut allocator = FilenameAllocator::new(output_dir);
    let mut report = WriteReport::default();

    for outcome in &summary.outcomes {
        let Ok(hcl) = &outcome.result else { continue };
        // meta is always present for successful outcomes
        let Some(meta) = &outcome.meta else { continue };

        let path = allocator.allocate(&meta.kind);
        let mut content = String::new();
        let _ = writeln!(content, "# Kind: {}", meta.kind);
        let _ = writeln!(content, "# Name: {}", meta.name);
        if meta.has_explicit_namespace() {
            let _ = writeln!(content, "# Namespace: {}", meta.namespace);
        }
        let _ = writeln!(content, "# API version: {}", meta.api_version);
        if let Some(classification) = outcome.classification {
            let _ = writeln!(content, "# Resource type: {}", classification.label());
        }
        content.push('\n');
        content.push_str(hcl.trim_end());
        content.push('\n');

        match fs::write(&path, &content) {
            Ok(()) => report.written.push(path),
            Err(err) => {
                tracing::warn!(index = outcome.index, path = %path.display(),
                    "failed to write output file: {err}");
                report.write_failures.push((outcome.index, err.to_string()));
            }
        }
    }

    Ok(report)
}

/// Effective success/failure counts once per-file write errors are folded in
pub fn final_counts(summary: &RunSummary, report: &WriteReport) -> (usize, usize) {
    let succeeded = summary.succeeded() - report.write_failures.len();
    let failed = summary.failed() + report.write_failures.len();
    (succeeded, failed)
}
