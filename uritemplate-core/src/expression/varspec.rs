use crate::error::ExpandError;

/// Largest accepted `:N` prefix length (RFC 6570 limits it to 4 digits).
pub const MAX_PREFIX_LEN: u16 = 9999;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modifier {
    /// `:N` — truncate a scalar value to its first N characters before
    /// encoding.
    Prefix(u16),
    /// `*` — expand a composite value element by element.
    Explode,
}

/// One comma-delimited variable reference inside an expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarSpec {
    pub varname: String,
    pub modifier: Option<Modifier>,
}

/// Parses one raw varspec segment.
///
/// Grammar: `segment ("." segment)*` where a segment is one or more of
/// ALPHA / DIGIT / `_` / pct-encoded, optionally followed by exactly one of
/// `:1`..`:9999` (no leading zero) or `*`.
pub fn parse_varspec(raw: &str) -> Result<VarSpec, ExpandError> {
    let bytes = raw.as_bytes();

    let mut pos = scan_name_segment(raw, 0)?;
    while bytes.get(pos) == Some(&b'.') {
        pos = scan_name_segment(raw, pos + 1)?;
    }
    let varname = raw[..pos].to_string();

    let modifier = match bytes.get(pos) {
        None => None,
        Some(b':') => Some(Modifier::Prefix(parse_prefix(raw, pos + 1)?)),
        Some(b'*') => {
            if pos + 1 != bytes.len() {
                return Err(malformed(raw, pos + 1));
            }
            Some(Modifier::Explode)
        }
        Some(_) => return Err(malformed(raw, pos)),
    };

    Ok(VarSpec { varname, modifier })
}

fn malformed(raw: &str, offset: usize) -> ExpandError {
    ExpandError::MalformedVarspec {
        varspec: raw.to_string(),
        offset,
    }
}

/// Scans one dotted-name segment starting at `start`, returning the byte
/// offset just past it. A segment must contain at least one varchar.
fn scan_name_segment(raw: &str, start: usize) -> Result<usize, ExpandError> {
    let bytes = raw.as_bytes();
    let mut pos = start;
    loop {
        match bytes.get(pos) {
            Some(b) if b.is_ascii_alphanumeric() || *b == b'_' => pos += 1,
            Some(b'%') => match (bytes.get(pos + 1), bytes.get(pos + 2)) {
                (Some(hi), Some(lo)) if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit() => {
                    pos += 3;
                }
                _ => return Err(malformed(raw, pos)),
            },
            _ => break,
        }
    }
    if pos == start {
        return Err(malformed(raw, pos));
    }
    Ok(pos)
}

fn parse_prefix(raw: &str, start: usize) -> Result<u16, ExpandError> {
    let digits = &raw.as_bytes()[start..];
    if digits.is_empty() {
        return Err(malformed(raw, raw.len()));
    }
    if !(b'1'..=b'9').contains(&digits[0]) {
        return Err(malformed(raw, start));
    }
    let mut length = u16::from(digits[0] - b'0');
    for (i, b) in digits.iter().enumerate().skip(1) {
        if !b.is_ascii_digit() {
            return Err(malformed(raw, start + i));
        }
        if i >= 4 {
            return Err(malformed(raw, start + i));
        }
        length = length * 10 + u16::from(*b - b'0');
    }
    Ok(length)
}
