//! Split command - one .tf file per resource, named by kind
//!
//! Several resources of the same kind in one manifest are disambiguated with
//! numeric suffixes in document order; the resource name and namespace appear
//! in each file's header, not in the filename.

use std::path::Path;

use console::style;
use kubetf_convert::output::{final_counts, write_resource_files};
use miette::{IntoDiagnostic, Result, WrapErr, miette};

use super::TransformerBins;

pub fn run(input: &Path, output_dir: &Path, bins: &TransformerBins, quiet: bool) -> Result<()> {
    let summary = super::load_and_convert(input, bins, quiet)?;

    let report = write_resource_files(&summary, output_dir)
        .into_diagnostic()
        .wrap_err_with(|| {
            format!("Failed to create output directory '{}'", output_dir.display())
        })?;

    let (succeeded, failed) = final_counts(&summary, &report);

    if succeeded == 0 {
        return Err(miette!("No documents were successfully converted"));
    }

    if !quiet {
        println!();
        for path in &report.written {
            println!("  {} {}", style("✓").green().bold(), path.display());
        }
        println!();
        println!(
            "{} succeeded, {} failed, output in {}",
            style(succeeded).green(),
            if failed > 0 {
                style(failed).red()
            } else {
                style(failed).dim()
            },
            style(output_dir.display()).cyan(),
        );
    }

    Ok(())
}
