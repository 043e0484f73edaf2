use serde_json::{Map, Value};

use crate::error::ExpandError;
use crate::expression::{Modifier, VarSpec};

/// Caller-supplied variable bindings. Record-like values are adapted into
/// this keyed mapping at the boundary (see the `bindings` module).
pub type VariableBindings = Map<String, Value>;

/// Outcome of looking one varspec up in the bindings, with composite values
/// reduced to text elements and nulls removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedValue {
    Undefined,
    Scalar(String),
    List(Vec<String>),
    Mapping(Vec<(String, String)>),
}

/// Resolves `varspec` against the bindings.
///
/// Lookup is exact and case-sensitive; a missing key or explicit null is
/// `Undefined`. Null elements and null-valued entries are dropped from
/// composites, preserving the order of what remains.
pub fn resolve(
    varspec: &VarSpec,
    variables: &VariableBindings,
) -> Result<ResolvedValue, ExpandError> {
    let value = match variables.get(&varspec.varname) {
        None | Some(Value::Null) => return Ok(ResolvedValue::Undefined),
        Some(value) => value,
    };

    // Checked before null-filtering: a prefix on any composite is an error,
    // even an empty one.
    if matches!(value, Value::Array(_) | Value::Object(_))
        && matches!(varspec.modifier, Some(Modifier::Prefix(_)))
    {
        return Err(ExpandError::PrefixOnCompositeValue {
            varname: varspec.varname.clone(),
        });
    }

    Ok(match value {
        Value::Array(items) => ResolvedValue::List(
            items
                .iter()
                .filter(|item| !item.is_null())
                .map(scalar_text)
                .collect(),
        ),
        Value::Object(entries) => ResolvedValue::Mapping(
            entries
                .iter()
                .filter(|(_, entry)| !entry.is_null())
                .map(|(key, entry)| (key.clone(), scalar_text(entry)))
                .collect(),
        ),
        scalar => ResolvedValue::Scalar(scalar_text(scalar)),
    })
}

/// Text form of a leaf value. Composites nested inside a composite render as
/// their compact JSON text.
fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn spec(varname: &str, modifier: Option<Modifier>) -> VarSpec {
        VarSpec {
            varname: varname.to_string(),
            modifier,
        }
    }

    fn bindings(value: Value) -> VariableBindings {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn missing_and_null_are_undefined() {
        let vars = bindings(json!({ "null": null }));
        assert_eq!(resolve(&spec("absent", None), &vars).unwrap(), ResolvedValue::Undefined);
        assert_eq!(resolve(&spec("null", None), &vars).unwrap(), ResolvedValue::Undefined);
    }

    #[test]
    fn scalars_keep_their_text() {
        let vars = bindings(json!({ "s": "value", "n": 1024, "b": true, "f": 0.5 }));
        assert_eq!(resolve(&spec("s", None), &vars).unwrap(), ResolvedValue::Scalar("value".into()));
        assert_eq!(resolve(&spec("n", None), &vars).unwrap(), ResolvedValue::Scalar("1024".into()));
        assert_eq!(resolve(&spec("b", None), &vars).unwrap(), ResolvedValue::Scalar("true".into()));
        assert_eq!(resolve(&spec("f", None), &vars).unwrap(), ResolvedValue::Scalar("0.5".into()));
    }

    #[test]
    fn lists_drop_null_elements_in_order() {
        let vars = bindings(json!({ "list": ["red", null, "green", null, "blue"] }));
        assert_eq!(
            resolve(&spec("list", None), &vars).unwrap(),
            ResolvedValue::List(vec!["red".into(), "green".into(), "blue".into()])
        );
    }

    #[test]
    fn mappings_drop_null_entries_and_keep_order() {
        let vars = bindings(json!({ "keys": { "semi": ";", "gone": null, "dot": "." } }));
        assert_eq!(
            resolve(&spec("keys", None), &vars).unwrap(),
            ResolvedValue::Mapping(vec![
                ("semi".into(), ";".into()),
                ("dot".into(), ".".into()),
            ])
        );
    }

    #[test]
    fn prefix_on_composite_is_an_error() {
        let vars = bindings(json!({ "list": ["red"], "keys": {}, "s": "ok" }));
        let err = resolve(&spec("list", Some(Modifier::Prefix(2))), &vars).unwrap_err();
        assert_eq!(
            err,
            ExpandError::PrefixOnCompositeValue { varname: "list".into() }
        );
        // Empty composites are still composites.
        assert!(resolve(&spec("keys", Some(Modifier::Prefix(2))), &vars).is_err());
        // Scalars are fine.
        assert!(resolve(&spec("s", Some(Modifier::Prefix(2))), &vars).is_ok());
    }

    #[test]
    fn explode_does_not_affect_resolution() {
        let vars = bindings(json!({ "list": ["red", "green"] }));
        assert_eq!(
            resolve(&spec("list", Some(Modifier::Explode)), &vars).unwrap(),
            ResolvedValue::List(vec!["red".into(), "green".into()])
        );
    }
}
