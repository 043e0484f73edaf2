use thiserror::Error;

/// Failure local to one `{...}` expression. Expansion keeps processing
/// sibling expressions and reports every failure at once.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpandError {
    #[error("empty expression")]
    EmptyExpression,
    #[error("malformed expression: {complete:?} at offset {offset}")]
    MalformedExpression { complete: String, offset: usize },
    #[error("malformed varspec: {varspec:?} (error at byte {offset})")]
    MalformedVarspec { varspec: String, offset: usize },
    #[error("unknown operator: {0:?}")]
    UnknownOperator(char),
    #[error("prefix modifier used with composite value: {varname}")]
    PrefixOnCompositeValue { varname: String },
}

/// Aggregate failure for one `expand` call, carrying every per-expression
/// error in template (left-to-right) order.
#[derive(Debug, Clone, Error)]
#[error("invalid URI template {template:?} ({error_count} errors)")]
pub struct TemplateError {
    template: String,
    errors: Vec<ExpandError>,
    error_count: usize,
}

impl TemplateError {
    pub fn new(template: impl Into<String>, errors: Vec<ExpandError>) -> Self {
        let error_count = errors.len();
        Self {
            template: template.into(),
            errors,
            error_count,
        }
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn errors(&self) -> &[ExpandError] {
        &self.errors
    }

    /// The individual error messages, formatted, in template order.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

#[derive(Debug, Error)]
pub enum BindingsError {
    #[error("failed to parse bindings as JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to parse bindings as YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("variable bindings must be a mapping with string keys")]
    NotAMapping,
}
