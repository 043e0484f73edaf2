/// Formatting profile selected by an expression operator (RFC 6570 §3.2.1,
/// appendix A table).
#[derive(Debug, PartialEq, Eq)]
pub struct OperatorSettings {
    /// Prepended once when the expression contributes anything.
    pub start: &'static str,
    /// Separator between varspec contributions (and exploded elements).
    pub join: &'static str,
    /// Appended after a variable name whose value is present but empty.
    pub ifemp: &'static str,
    /// Whether contributions carry `name=` prefixes.
    pub named: bool,
    /// Characters exempt from percent-encoding for this operator.
    pub safe: &'static str,
}

/// Characters recognized as operators when leading an expression body.
pub const OPERATORS: &str = "+#./;?&";

const RESERVED: &str = ":/?#[]@!$&'()*+,;=";

/// Settings for an expression with no operator (simple string expansion).
pub static SIMPLE_EXPANSION: OperatorSettings = OperatorSettings {
    start: "",
    join: ",",
    ifemp: "",
    named: false,
    safe: "",
};

static TABLE: [(char, OperatorSettings); 7] = [
    ('+', OperatorSettings { start: "", join: ",", ifemp: "", named: false, safe: RESERVED }),
    ('#', OperatorSettings { start: "#", join: ",", ifemp: "", named: false, safe: RESERVED }),
    ('.', OperatorSettings { start: ".", join: ".", ifemp: "", named: false, safe: "" }),
    ('/', OperatorSettings { start: "/", join: "/", ifemp: "", named: false, safe: "" }),
    (';', OperatorSettings { start: ";", join: ";", ifemp: "", named: true, safe: "" }),
    ('?', OperatorSettings { start: "?", join: "&", ifemp: "=", named: true, safe: "" }),
    ('&', OperatorSettings { start: "&", join: "&", ifemp: "=", named: true, safe: "" }),
];

pub fn operator_settings(operator: char) -> Option<&'static OperatorSettings> {
    TABLE
        .iter()
        .find(|(op, _)| *op == operator)
        .map(|(_, settings)| settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_operator_character_has_settings() {
        for op in OPERATORS.chars() {
            assert!(operator_settings(op).is_some(), "missing settings for {op:?}");
        }
    }

    #[test]
    fn form_style_operators_are_named() {
        assert!(operator_settings('?').unwrap().named);
        assert_eq!(operator_settings('?').unwrap().ifemp, "=");
        assert_eq!(operator_settings('&').unwrap().join, "&");
        assert!(operator_settings(';').unwrap().named);
        assert_eq!(operator_settings(';').unwrap().ifemp, "");
    }

    #[test]
    fn reserved_expansion_keeps_reserved_characters_safe() {
        assert_eq!(operator_settings('+').unwrap().safe, RESERVED);
        assert_eq!(operator_settings('#').unwrap().safe, RESERVED);
        assert_eq!(operator_settings('#').unwrap().start, "#");
        assert_eq!(SIMPLE_EXPANSION.safe, "");
    }

    #[test]
    fn unknown_character_has_no_settings() {
        assert!(operator_settings('=').is_none());
        assert!(operator_settings('x').is_none());
    }
}
