use clap::Parser;
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
    about = "ContactMap CLI - A command-line tool for generating per-chain alpha-carbon distance matrices from macromolecular structure files.",
    help_template = HELP_TEMPLATE,
)]
pub struct Cli {
    /// Path to the input structure file in mmCIF format (e.g., structure.cif).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input_path: PathBuf,

    /// Path to the directory where matrix files will be written.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output_path: PathBuf,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}
