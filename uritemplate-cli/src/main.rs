use clap::Parser;

mod args;
mod cmd;
mod commands;
mod exit_codes;
mod output;

pub use args::*;
use commands::Command;

#[derive(Debug, Parser)]
#[command(name = "urit", version, about = "RFC 6570 URI Template expander")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

fn main() {
    let cli = Cli::parse();
    std::process::exit(run_command(cli.command));
}

fn run_command(command: Command) -> i32 {
    match command {
        Command::Expand {
            template,
            data,
            set,
            key_sort,
            markers,
            output,
        } => cmd::expand::expand_cmd(&template, data.as_deref(), &set, key_sort, &markers, output),
        Command::Vars {
            template,
            markers,
            output,
        } => cmd::vars::vars_cmd(&template, &markers, output),
        Command::Lint {
            template,
            markers,
            output,
        } => cmd::lint::lint_cmd(&template, &markers, output),
    }
}
