use serde::Serialize;
use uritemplate_core::{get_errors, ExpandOptions};

use crate::exit_codes;
use crate::output::{print_result, OutputFormat};
use crate::{MarkerArgs, OutputArgs};

#[derive(Serialize)]
struct LintResult {
    valid: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    errors: Vec<String>,
}

pub fn lint_cmd(template: &str, markers: &MarkerArgs, output: OutputArgs) -> i32 {
    let options = ExpandOptions {
        delimiters: markers.delimiters(),
        key_sort: false,
    };
    let errors = get_errors(template, &options);
    if errors.is_empty() {
        if output.format == OutputFormat::Text && !output.quiet {
            println!("ok: well-formed URI template");
        } else {
            print_result(
                output.format,
                output.quiet,
                &LintResult {
                    valid: true,
                    errors: vec![],
                },
            );
        }
        exit_codes::SUCCESS
    } else {
        if output.format == OutputFormat::Text && !output.quiet {
            eprintln!("error: template has {} problems", errors.len());
            for e in &errors {
                eprintln!("- {e}");
            }
        } else {
            print_result(
                output.format,
                output.quiet,
                &LintResult {
                    valid: false,
                    errors,
                },
            );
        }
        exit_codes::TEMPLATE_INVALID
    }
}
