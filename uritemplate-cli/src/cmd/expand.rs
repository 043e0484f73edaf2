use std::path::Path;

use serde::Serialize;
use serde_json::Value;
use uritemplate_core::{expand, parse_bindings_str, BindingsFormat, ExpandOptions, VariableBindings};

use crate::exit_codes;
use crate::output::{print_error, print_result, OutputFormat};
use crate::{MarkerArgs, OutputArgs};

#[derive(Serialize)]
struct ExpandResult {
    uri: String,
}

#[derive(Serialize)]
struct ExpandFailure {
    template: String,
    errors: Vec<String>,
}

pub fn expand_cmd(
    template: &str,
    data: Option<&Path>,
    set: &[String],
    key_sort: bool,
    markers: &MarkerArgs,
    output: OutputArgs,
) -> i32 {
    let mut variables: VariableBindings = match data {
        Some(path) => {
            let content = match std::fs::read_to_string(path) {
                Ok(v) => v,
                Err(e) => {
                    print_error(
                        output.format,
                        output.quiet,
                        &format!("failed to read {}: {e}", path.display()),
                    );
                    return exit_codes::RUNTIME_ERROR;
                }
            };
            match parse_bindings_str(&content, BindingsFormat::Auto) {
                Ok(parsed) => parsed.variables,
                Err(e) => {
                    print_error(
                        output.format,
                        output.quiet,
                        &format!("failed to parse {}: {e}", path.display()),
                    );
                    return exit_codes::RUNTIME_ERROR;
                }
            }
        }
        None => VariableBindings::new(),
    };

    for pair in set {
        match pair.split_once('=') {
            Some((key, value)) => {
                variables.insert(key.to_string(), Value::String(value.to_string()));
            }
            None => {
                print_error(
                    output.format,
                    output.quiet,
                    &format!("invalid --set value {pair:?} (expected KEY=VALUE)"),
                );
                return exit_codes::RUNTIME_ERROR;
            }
        }
    }

    let options = ExpandOptions {
        delimiters: markers.delimiters(),
        key_sort,
    };
    match expand(template, &variables, &options) {
        Ok(uri) => {
            if output.format == OutputFormat::Text && !output.quiet {
                println!("{uri}");
            } else {
                print_result(output.format, output.quiet, &ExpandResult { uri });
            }
            exit_codes::SUCCESS
        }
        Err(err) => {
            let errors = err.messages();
            if output.format == OutputFormat::Text && !output.quiet {
                eprintln!("error: {err}");
                for e in &errors {
                    eprintln!("- {e}");
                }
            } else {
                print_result(
                    output.format,
                    output.quiet,
                    &ExpandFailure {
                        template: template.to_string(),
                        errors,
                    },
                );
            }
            exit_codes::TEMPLATE_INVALID
        }
    }
}
