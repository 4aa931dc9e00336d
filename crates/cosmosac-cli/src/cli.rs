use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "COSMO-SAC CLI - Predict liquid-phase activity coefficients of mixtures from sigma profiles and molecular structure.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads for parallel computation.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute activity coefficients of every component in a mixture file.
    Gamma(GammaArgs),
    /// Print the atom typing and dispersive nature of every component.
    Classify(ClassifyArgs),
}

/// Arguments for the `gamma` subcommand.
#[derive(Args, Debug)]
pub struct GammaArgs {
    /// Path to the mixture description in TOML format.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Override the mixture temperature in kelvin.
    #[arg(short, long, value_name = "KELVIN")]
    pub temperature: Option<f64>,

    /// Override the maximum number of segment-activity iterations.
    #[arg(long, value_name = "INT")]
    pub max_iterations: Option<usize>,

    /// Override the segment-activity convergence tolerance.
    #[arg(long, value_name = "FLOAT")]
    pub tolerance: Option<f64>,

    /// Load model parameters from a TOML file instead of the published defaults.
    #[arg(long, value_name = "PATH")]
    pub params: Option<PathBuf>,

    /// Type every atom even after a failed hydroxyl match, instead of stopping the scan.
    #[arg(long)]
    pub per_atom_scan: bool,
}

/// Arguments for the `classify` subcommand.
#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// Path to the mixture description in TOML format.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Type every atom even after a failed hydroxyl match, instead of stopping the scan.
    #[arg(long)]
    pub per_atom_scan: bool,
}
