pub const TEMPLATE_OPEN: &str = "{";
pub const TEMPLATE_CLOSE: &str = "}";

/// Marker pair delimiting substitution expressions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delimiters {
    pub open: String,
    pub close: String,
}

impl Default for Delimiters {
    fn default() -> Self {
        Self {
            open: TEMPLATE_OPEN.to_string(),
            close: TEMPLATE_CLOSE.to_string(),
        }
    }
}

/// One expression span found in the raw template text.
///
/// `valid` is false for an open marker with no matching close marker and for
/// a stray close marker; `body` is empty in both cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawExpression {
    pub offset: usize,
    pub complete: String,
    pub body: String,
    pub valid: bool,
}

/// Finds every expression span in `template`, in left-to-right offset order.
pub fn scan_expressions(template: &str, delimiters: &Delimiters) -> Vec<RawExpression> {
    let open = delimiters.open.as_str();
    let close = delimiters.close.as_str();

    // An empty marker matches everywhere; treat it as matching nothing.
    if open.is_empty() || close.is_empty() {
        return Vec::new();
    }

    // Shortcut if there is nothing to expand.
    if !template.contains(open) && !template.contains(close) {
        return Vec::new();
    }

    let mut expressions = Vec::new();
    let mut pos = 0;
    while pos < template.len() {
        let next_open = template[pos..].find(open).map(|i| pos + i);
        let next_close = template[pos..].find(close).map(|i| pos + i);

        // A close marker with no unmatched open marker before it is itself a
        // zero-length malformed expression.
        let stray_close = match (next_open, next_close) {
            (None, None) => break,
            (None, Some(c)) => Some(c),
            (Some(o), Some(c)) if c < o => Some(c),
            _ => None,
        };
        if let Some(c) = stray_close {
            expressions.push(RawExpression {
                offset: c,
                complete: close.to_string(),
                body: String::new(),
                valid: false,
            });
            pos = c + close.len();
            continue;
        }

        let o = match next_open {
            Some(o) => o,
            None => break,
        };
        let body_start = o + open.len();
        match template[body_start..].find(close) {
            Some(rel) => {
                let body_end = body_start + rel;
                let end = body_end + close.len();
                expressions.push(RawExpression {
                    offset: o,
                    complete: template[o..end].to_string(),
                    body: template[body_start..body_end].to_string(),
                    valid: true,
                });
                pos = end;
            }
            None => {
                // Unterminated: the span runs to end of string.
                expressions.push(RawExpression {
                    offset: o,
                    complete: template[o..].to_string(),
                    body: String::new(),
                    valid: false,
                });
                pos = template.len();
            }
        }
    }
    expressions
}
