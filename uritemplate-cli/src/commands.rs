use std::path::PathBuf;

use clap::Subcommand;

use crate::args::*;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Expand a URI template with variable bindings
    Expand {
        template: String,
        /// JSON or YAML file with variable bindings (format auto-detected)
        #[arg(long)]
        data: Option<PathBuf>,
        /// Scalar bindings overriding entries from --data
        #[arg(long = "set", value_name = "KEY=VALUE")]
        set: Vec<String>,
        /// Order mapping entries by key in the output
        #[arg(long)]
        key_sort: bool,
        #[command(flatten)]
        markers: MarkerArgs,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// List the variables referenced by a template
    Vars {
        template: String,
        #[command(flatten)]
        markers: MarkerArgs,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Check a template for structural errors
    Lint {
        template: String,
        #[command(flatten)]
        markers: MarkerArgs,
        #[command(flatten)]
        output: OutputArgs,
    },
}
