use clap::Args;
use uritemplate_core::Delimiters;

use crate::output::OutputFormat;

#[derive(Debug, Args, Clone)]
pub struct OutputArgs {
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,
    #[arg(long, short, global = true)]
    pub quiet: bool,
}

#[derive(Debug, Args, Clone)]
pub struct MarkerArgs {
    /// String marking the beginning of a substitution expression.
    #[arg(long, default_value = "{")]
    pub open: String,
    /// String marking the end of a substitution expression.
    #[arg(long, default_value = "}")]
    pub close: String,
}

impl MarkerArgs {
    pub fn delimiters(&self) -> Delimiters {
        Delimiters {
            open: self.open.clone(),
            close: self.close.clone(),
        }
    }
}
