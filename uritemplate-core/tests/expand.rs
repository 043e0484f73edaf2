use serde_json::{json, Value};
use uritemplate_core::{expand, Delimiters, ExpandError, ExpandOptions, VariableBindings};

fn bindings(value: Value) -> VariableBindings {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

fn expand_default(template: &str, value: Value) -> Result<String, uritemplate_core::TemplateError> {
    expand(template, &bindings(value), &ExpandOptions::default())
}

#[test]
fn template_without_markers_is_a_fixed_point() {
    let vars = bindings(json!({ "var": "value" }));
    for template in ["", "/foo/bar", "http://example.com/?q=1", "plain text"] {
        assert_eq!(
            expand(template, &vars, &ExpandOptions::default()).unwrap(),
            template
        );
    }
}

#[test]
fn simple_string_expansion() {
    assert_eq!(
        expand_default("{var}", json!({ "var": "value" })).unwrap(),
        "value"
    );
    assert_eq!(
        expand_default("{hello}", json!({ "hello": "Hello World!" })).unwrap(),
        "Hello%20World%21"
    );
}

#[test]
fn reserved_expansion_preserves_reserved_characters() {
    assert_eq!(
        expand_default("{+path}", json!({ "path": "/foo/bar" })).unwrap(),
        "/foo/bar"
    );
    assert_eq!(
        expand_default("{+path}/here", json!({ "path": "/foo/bar" })).unwrap(),
        "/foo/bar/here"
    );
}

#[test]
fn fragment_expansion() {
    assert_eq!(
        expand_default("{#x,y}", json!({ "x": "1024", "y": "768" })).unwrap(),
        "#1024,768"
    );
}

#[test]
fn form_style_query_list_explode() {
    assert_eq!(
        expand_default("{?list*}", json!({ "list": ["red", "green", "blue"] })).unwrap(),
        "?list=red&list=green&list=blue"
    );
}

#[test]
fn path_style_named_scalars() {
    assert_eq!(
        expand_default("{;x,y}", json!({ "x": "1024", "y": "768" })).unwrap(),
        ";x=1024;y=768"
    );
}

#[test]
fn prefix_modifier_truncates_before_encoding() {
    assert_eq!(
        expand_default("{var:3}", json!({ "var": "value" })).unwrap(),
        "val"
    );
    // A prefix longer than the value takes the whole value.
    assert_eq!(
        expand_default("{var:30}", json!({ "var": "value" })).unwrap(),
        "value"
    );
    // Truncation counts characters, not bytes.
    assert_eq!(
        expand_default("{var:2}", json!({ "var": "éé-tail" })).unwrap(),
        "%C3%A9%C3%A9"
    );
}

#[test]
fn undefined_variables_contribute_nothing() {
    assert_eq!(
        expand_default("{a}{b}", json!({ "a": "x" })).unwrap(),
        "x"
    );
    assert_eq!(expand_default("X{undef}X", json!({ "undef": null })).unwrap(), "XX");
}

#[test]
fn prefix_on_list_value_is_reported() {
    let err = expand_default("{list:3}", json!({ "list": ["red", "green"] })).unwrap_err();
    assert_eq!(
        err.errors(),
        [ExpandError::PrefixOnCompositeValue {
            varname: "list".to_string()
        }]
    );
    assert!(err.to_string().contains("{list:3}"));
}

#[test]
fn unterminated_expression_fails_expansion() {
    let err = expand_default("{a", json!({ "a": "x" })).unwrap_err();
    assert_eq!(err.errors().len(), 1);
    assert!(matches!(
        err.errors()[0],
        ExpandError::MalformedExpression { offset: 0, .. }
    ));
}

#[test]
fn sibling_expressions_are_still_attempted_after_a_failure() {
    // Both failures surface in one aggregate error.
    let err = expand_default("{list:1}/{x$}/{ok}", json!({ "list": [], "ok": "v" })).unwrap_err();
    assert_eq!(err.errors().len(), 2);
}

#[test]
fn custom_markers() {
    let options = ExpandOptions {
        delimiters: Delimiters {
            open: "[".to_string(),
            close: "]".to_string(),
        },
        key_sort: false,
    };
    let vars = bindings(json!({ "var": "value" }));
    assert_eq!(expand("/x/[var]", &vars, &options).unwrap(), "/x/value");
    // Braces are plain text under these markers.
    assert_eq!(expand("{var}", &vars, &options).unwrap(), "{var}");
}

#[test]
fn numbers_and_booleans_expand_as_text() {
    assert_eq!(
        expand_default("{?page,debug}", json!({ "page": 3, "debug": true })).unwrap(),
        "?page=3&debug=true"
    );
}

#[test]
fn key_sort_option_orders_mapping_entries() {
    let vars = bindings(json!({ "keys": { "dot": ".", "comma": ",", "semi": ";" } }));
    let sorted = ExpandOptions {
        key_sort: true,
        ..ExpandOptions::default()
    };
    assert_eq!(
        expand("{?keys*}", &vars, &sorted).unwrap(),
        "?comma=%2C&dot=.&semi=%3B"
    );
    assert_eq!(
        expand("{?keys*}", &vars, &ExpandOptions::default()).unwrap(),
        "?semi=%3B&dot=.&comma=%2C"
    );
}
