//! Terminal rendering of pipeline progress
//!
//! Implements the convert pipeline's [`Reporter`] with console styling, one
//! short line per event, mirroring the rest of the CLI's output register.

use console::style;
use kubetf_convert::{PipelineEvent, Reporter};
use kubetf_core::Classification;

/// Reporter printing per-document progress to stdout
pub struct ConsoleReporter;

impl ConsoleReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for ConsoleReporter {
    fn event(&mut self, event: PipelineEvent<'_>) {
        match event {
            PipelineEvent::DocumentStarted { index, total, meta } => {
                println!();
                match meta {
                    Some(meta) => println!(
                        "Processing document {}/{}: {}",
                        style(index).bold(),
                        total,
                        style(meta).cyan()
                    ),
                    None => println!(
                        "Processing document {}/{}: {}",
                        style(index).bold(),
                        total,
                        style("not a valid Kubernetes resource").yellow()
                    ),
                }
            }
            PipelineEvent::Classified {
                classification,
                transformer,
                ..
            } => {
                let note = match classification {
                    Classification::Standard => "standard resource",
                    Classification::Custom => "custom resource",
                };
                println!("  -> using {} ({})", style(transformer).bold(), note);
            }
            PipelineEvent::Converted { .. } => {
                println!("  {} converted", style("✓").green().bold());
            }
            PipelineEvent::Failed { reason, .. } => {
                println!("  {} {}", style("✗").red().bold(), style(reason).red());
            }
        }
    }
}
