//! Convert command - all resources into a single .tf file

use std::path::Path;

use console::style;
use kubetf_convert::render_single_file;
use miette::{IntoDiagnostic, Result, WrapErr, miette};

use super::TransformerBins;

pub fn run(input: &Path, output: &Path, bins: &TransformerBins, quiet: bool) -> Result<()> {
    let summary = super::load_and_convert(input, bins, quiet)?;

    if !summary.any_succeeded() {
        return Err(miette!("No documents were successfully converted"));
    }

    let rendered = render_single_file(&summary);
    std::fs::write(output, rendered)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to write output file '{}'", output.display()))?;

    if !quiet {
        println!();
        println!(
            "{} Wrote HCL for {} resource(s) to {} ({} failed)",
            style("✓").green().bold(),
            summary.succeeded(),
            style(output.display()).cyan(),
            summary.failed(),
        );
    }

    Ok(())
}
