//! Kubetf CLI - convert Kubernetes manifests to Terraform HCL
//!
//! Exit status is 0 when at least one document converted, 1 otherwise -
//! including unreadable input, malformed YAML, empty manifests, and output
//! write errors.

use clap::{Parser, Subcommand};
use miette::Result;
use std::path::PathBuf;

mod commands;
mod display;

#[derive(Parser)]
#[command(name = "kubetf")]
#[command(author = "Kubetf Contributors")]
#[command(version)]
#[command(about = "Convert Kubernetes manifests to Terraform HCL", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the k2tf binary (standard resources)
    #[arg(long, global = true, env = "KUBETF_K2TF_BIN", default_value = "k2tf")]
    k2tf_bin: String,

    /// Path to the tfk8s binary (custom resources)
    #[arg(long, global = true, env = "KUBETF_TFK8S_BIN", default_value = "tfk8s")]
    tfk8s_bin: String,

    /// Suppress per-document progress output
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a manifest into a single .tf file
    Convert {
        /// Input Kubernetes manifest YAML file
        input: PathBuf,

        /// Output HCL file
        #[arg(short, long, default_value = "main.tf")]
        output: PathBuf,
    },

    /// Convert a manifest into one .tf file per resource, named by kind
    Split {
        /// Input Kubernetes manifest YAML file
        input: PathBuf,

        /// Output directory (created if absent)
        #[arg(short, long = "output-dir", default_value = "terraform")]
        output_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    // Setup miette for nice error display
    miette::set_panic_hook();

    let cli = Cli::parse();
    let bins = commands::TransformerBins {
        k2tf: cli.k2tf_bin,
        tfk8s: cli.tfk8s_bin,
    };

    match cli.command {
        Commands::Convert { input, output } => {
            commands::convert::run(&input, &output, &bins, cli.quiet)
        }
        Commands::Split { input, output_dir } => {
            commands::split::run(&input, &output_dir, &bins, cli.quiet)
        }
    }
}
