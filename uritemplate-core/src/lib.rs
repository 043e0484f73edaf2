#![forbid(unsafe_code)]

pub mod bindings;
pub mod encode;
pub mod error;
pub mod expand;
pub mod expression;
pub mod processor;
pub mod scan;
pub mod value;

pub use crate::bindings::{parse_bindings_str, to_bindings, BindingsFormat, ParsedBindings};
pub use crate::error::{BindingsError, ExpandError, TemplateError};
pub use crate::expand::{expand, get_errors, get_variables, ExpandOptions};
pub use crate::processor::Processor;
pub use crate::scan::{scan_expressions, Delimiters, RawExpression};
pub use crate::value::VariableBindings;
