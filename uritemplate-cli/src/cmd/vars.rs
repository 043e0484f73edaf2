use serde::Serialize;
use uritemplate_core::{get_variables, ExpandOptions};

use crate::exit_codes;
use crate::output::{print_result, OutputFormat};
use crate::{MarkerArgs, OutputArgs};

#[derive(Serialize)]
struct VarsResult {
    variables: Vec<String>,
}

pub fn vars_cmd(template: &str, markers: &MarkerArgs, output: OutputArgs) -> i32 {
    let options = ExpandOptions {
        delimiters: markers.delimiters(),
        key_sort: false,
    };
    let variables = get_variables(template, &options);
    if output.format == OutputFormat::Text && !output.quiet {
        for name in &variables {
            println!("{name}");
        }
    } else {
        print_result(output.format, output.quiet, &VarsResult { variables });
    }
    exit_codes::SUCCESS
}
