use crate::encode::encode;
use crate::error::{ExpandError, TemplateError};
use crate::expression::{parse_expression, parse_varspec, Modifier, OperatorSettings, VarSpec};
use crate::scan::{scan_expressions, Delimiters};
use crate::value::{resolve, ResolvedValue, VariableBindings};

/// Options shared by `expand`, `get_errors`, and `get_variables`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpandOptions {
    pub delimiters: Delimiters,
    /// Order mapping entries by key in the output.
    pub key_sort: bool,
}

/// Expands `template`, substituting every expression from `variables`.
///
/// Every expression is attempted even after one fails; any failure makes the
/// whole call fail with the aggregate error, and a partially substituted
/// string is never returned.
pub fn expand(
    template: &str,
    variables: &VariableBindings,
    options: &ExpandOptions,
) -> Result<String, TemplateError> {
    let expressions = scan_expressions(template, &options.delimiters);
    let mut result = template.to_string();
    let mut errors = Vec::new();

    // Splice from the last expression to the first so earlier offsets stay
    // valid after each replacement.
    for expression in expressions.iter().rev() {
        if !expression.valid {
            errors.push(ExpandError::MalformedExpression {
                complete: expression.complete.clone(),
                offset: expression.offset,
            });
            continue;
        }
        match expand_expression(&expression.body, variables, options.key_sort) {
            Ok(substitution) => {
                let span = expression.offset..expression.offset + expression.complete.len();
                result.replace_range(span, &substitution);
            }
            Err(e) => errors.push(e),
        }
    }

    if errors.is_empty() {
        Ok(result)
    } else {
        errors.reverse();
        Err(TemplateError::new(template, errors))
    }
}

/// Lists every structural error in `template` without touching any variable
/// values. An empty result means the template is well-formed.
pub fn get_errors(template: &str, options: &ExpandOptions) -> Vec<String> {
    let mut errors = Vec::new();
    for expression in scan_expressions(template, &options.delimiters) {
        if !expression.valid {
            errors.push(
                ExpandError::MalformedExpression {
                    complete: expression.complete,
                    offset: expression.offset,
                }
                .to_string(),
            );
            continue;
        }
        match parse_expression(&expression.body) {
            Ok(parsed) => {
                for raw in &parsed.varspecs {
                    if let Err(e) = parse_varspec(raw) {
                        errors.push(e.to_string());
                    }
                }
            }
            Err(e) => errors.push(e.to_string()),
        }
    }
    errors
}

/// Lists the variable names referenced by `template`, de-duplicated in
/// first-seen order. Unparsable expressions and varspecs are skipped.
pub fn get_variables(template: &str, options: &ExpandOptions) -> Vec<String> {
    let mut varnames: Vec<String> = Vec::new();
    for expression in scan_expressions(template, &options.delimiters) {
        if !expression.valid {
            continue;
        }
        if let Ok(parsed) = parse_expression(&expression.body) {
            for raw in &parsed.varspecs {
                if let Ok(spec) = parse_varspec(raw) {
                    if !varnames.contains(&spec.varname) {
                        varnames.push(spec.varname);
                    }
                }
            }
        }
    }
    varnames
}

fn expand_expression(
    body: &str,
    variables: &VariableBindings,
    key_sort: bool,
) -> Result<String, ExpandError> {
    let parsed = parse_expression(body)?;
    let settings = parsed.settings;
    let mut rendered: Vec<String> = Vec::new();

    for raw in &parsed.varspecs {
        let spec = parse_varspec(raw)?;
        let exploded = matches!(spec.modifier, Some(Modifier::Explode));
        match resolve(&spec, variables)? {
            ResolvedValue::Undefined => {}
            ResolvedValue::Scalar(value) => {
                rendered.push(render_scalar(settings, &spec, &value));
            }
            // An empty composite counts as present only when the operator
            // has an ifemp marker and the varspec is not exploded.
            ResolvedValue::List(items) => {
                if !items.is_empty() || (!settings.ifemp.is_empty() && !exploded) {
                    rendered.push(render_list(settings, &spec, &items, exploded));
                }
            }
            ResolvedValue::Mapping(pairs) => {
                if !pairs.is_empty() || (!settings.ifemp.is_empty() && !exploded) {
                    rendered.push(render_mapping(settings, &spec, pairs, exploded, key_sort));
                }
            }
        }
    }

    if rendered.is_empty() {
        Ok(String::new())
    } else {
        Ok(format!("{}{}", settings.start, rendered.join(settings.join)))
    }
}

fn render_scalar(settings: &OperatorSettings, spec: &VarSpec, value: &str) -> String {
    let truncated: String = match spec.modifier {
        Some(Modifier::Prefix(n)) => value.chars().take(usize::from(n)).collect(),
        _ => value.to_string(),
    };
    let mut out = String::new();
    if settings.named {
        out.push_str(&spec.varname);
        out.push_str(if truncated.is_empty() { settings.ifemp } else { "=" });
    }
    out.push_str(&encode(&truncated, settings.safe));
    out
}

fn render_list(
    settings: &OperatorSettings,
    spec: &VarSpec,
    items: &[String],
    exploded: bool,
) -> String {
    if settings.named && exploded {
        // Each element carries the variable name itself.
        let pairs: Vec<(String, String)> = items
            .iter()
            .map(|item| (spec.varname.clone(), item.clone()))
            .collect();
        return join_key_values(settings, &pairs, true);
    }

    let joined = items
        .iter()
        .map(|item| encode(item, settings.safe))
        .collect::<Vec<_>>()
        .join(if exploded { settings.join } else { "," });
    if settings.named {
        format!("{}={joined}", spec.varname)
    } else {
        joined
    }
}

fn render_mapping(
    settings: &OperatorSettings,
    spec: &VarSpec,
    mut pairs: Vec<(String, String)>,
    exploded: bool,
    key_sort: bool,
) -> String {
    if key_sort {
        // Stable, so entries under equal keys keep their relative order.
        pairs.sort_by(|a, b| a.0.cmp(&b.0));
    }
    let joined = join_key_values(settings, &pairs, exploded);
    if settings.named && !exploded {
        format!("{}={joined}", spec.varname)
    } else {
        joined
    }
}

fn join_key_values(
    settings: &OperatorSettings,
    pairs: &[(String, String)],
    exploded: bool,
) -> String {
    let (join, separator) = if exploded {
        (settings.join, "=")
    } else {
        (",", ",")
    };
    pairs
        .iter()
        .map(|(key, value)| {
            if value.is_empty() {
                format!("{}{}", encode(key, settings.safe), settings.ifemp)
            } else {
                format!(
                    "{}{separator}{}",
                    encode(key, settings.safe),
                    encode(value, settings.safe)
                )
            }
        })
        .collect::<Vec<_>>()
        .join(join)
}
