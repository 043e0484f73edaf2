use crate::error::TemplateError;
use crate::expand::{expand, ExpandOptions};
use crate::value::VariableBindings;

/// Memoizing wrapper around `expand` for one template + bindings pair.
///
/// The cached result is dropped whenever the template, the bindings, or the
/// options change. Only successful expansions are cached; a failing template
/// is re-expanded (and fails again) on every call until it is fixed.
#[derive(Debug, Clone, Default)]
pub struct Processor {
    template: String,
    variables: VariableBindings,
    options: ExpandOptions,
    cache: Option<String>,
}

impl Processor {
    pub fn new(template: impl Into<String>, variables: VariableBindings) -> Self {
        Self {
            template: template.into(),
            variables,
            options: ExpandOptions::default(),
            cache: None,
        }
    }

    pub fn with_options(mut self, options: ExpandOptions) -> Self {
        self.options = options;
        self.cache = None;
        self
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn set_template(&mut self, template: impl Into<String>) {
        self.template = template.into();
        self.cache = None;
    }

    pub fn variables(&self) -> &VariableBindings {
        &self.variables
    }

    pub fn set_variables(&mut self, variables: VariableBindings) {
        self.variables = variables;
        self.cache = None;
    }

    /// Expands the template, reusing the previous result when neither the
    /// template nor the bindings changed since the last call.
    pub fn process(&mut self) -> Result<String, TemplateError> {
        if let Some(cached) = &self.cache {
            return Ok(cached.clone());
        }
        let result = expand(&self.template, &self.variables, &self.options)?;
        self.cache = Some(result.clone());
        Ok(result)
    }
}
