mod operator;
mod varspec;

pub use operator::{operator_settings, OperatorSettings, OPERATORS, SIMPLE_EXPANSION};
pub use varspec::{parse_varspec, Modifier, VarSpec, MAX_PREFIX_LEN};

use crate::error::ExpandError;

/// An expression body split into its operator and raw varspec segments.
#[derive(Debug, PartialEq, Eq)]
pub struct ParsedExpression {
    pub operator: Option<char>,
    pub settings: &'static OperatorSettings,
    pub varspecs: Vec<String>,
}

/// Splits one expression body into operator and varspec list.
///
/// Varspec segments are split on `,` with no escaping and are not validated
/// here; `parse_varspec` handles each segment.
pub fn parse_expression(body: &str) -> Result<ParsedExpression, ExpandError> {
    let first = match body.chars().next() {
        Some(c) => c,
        None => return Err(ExpandError::EmptyExpression),
    };

    let (operator, rest) = if OPERATORS.contains(first) {
        (Some(first), &body[first.len_utf8()..])
    } else {
        (None, body)
    };

    let settings = match operator {
        None => &SIMPLE_EXPANSION,
        // The scan above only admits the seven known characters, but fail
        // cleanly if that ever stops holding.
        Some(op) => operator_settings(op).ok_or(ExpandError::UnknownOperator(op))?,
    };

    Ok(ParsedExpression {
        operator,
        settings,
        varspecs: rest.split(',').map(str::to_string).collect(),
    })
}
