/// Decoder tests for ymerge-core.
///
/// Exercises YAML and JSON decoding into `Value`, the empty-document rules,
/// duplicate-key rejection, scalar typing, and format detection.
use serde_json::json;
use ymerge_core::{decode, Format, Scalar, Value, YmergeError};

fn v(json: serde_json::Value) -> Value {
    Value::from(json)
}

// ============================================================================
// 1. YAML
// ============================================================================

#[test]
fn yaml_flat_mapping() {
    let value = decode("name: web\nreplicas: 2\n", Format::Yaml).unwrap();
    assert_eq!(value, v(json!({"name": "web", "replicas": 2})));
}

#[test]
fn yaml_nested_mapping_and_sequence() {
    let input = "server:\n  port: 80\n  flags:\n    - a\n    - b\n";
    let value = decode(input, Format::Yaml).unwrap();
    assert_eq!(
        value,
        v(json!({"server": {"port": 80, "flags": ["a", "b"]}}))
    );
}

#[test]
fn yaml_flow_style() {
    let value = decode("{a: 1, b: [x, y]}", Format::Yaml).unwrap();
    assert_eq!(value, v(json!({"a": 1, "b": ["x", "y"]})));
}

#[test]
fn yaml_accepts_json_text() {
    let value = decode(r#"{"a": {"b": [1, 2]}}"#, Format::Yaml).unwrap();
    assert_eq!(value, v(json!({"a": {"b": [1, 2]}})));
}

#[test]
fn yaml_scalar_types() {
    let input = "int: -3\nfloat: 0.5\nflag: true\ntext: hello\nnothing: null\n";
    let value = decode(input, Format::Yaml).unwrap();
    assert_eq!(value.get("int"), Some(&Value::Scalar(Scalar::Int(-3))));
    assert_eq!(value.get("float"), Some(&Value::Scalar(Scalar::Float(0.5))));
    assert_eq!(value.get("flag"), Some(&Value::Scalar(Scalar::Bool(true))));
    assert_eq!(value.get("text"), Some(&Value::from("hello")));
    assert_eq!(value.get("nothing"), Some(&Value::Null));
}

#[test]
fn yaml_quoted_number_stays_text() {
    let value = decode("version: \"1.10\"\n", Format::Yaml).unwrap();
    assert_eq!(value.get("version"), Some(&Value::from("1.10")));
}

#[test]
fn yaml_yes_no_are_strings() {
    let value = decode("answer: yes\n", Format::Yaml).unwrap();
    assert_eq!(value.get("answer"), Some(&Value::from("yes")));
}

#[test]
fn yaml_null_spellings() {
    let value = decode("tilde: ~\nword: null\nempty:\n", Format::Yaml).unwrap();
    for key in ["tilde", "word", "empty"] {
        let field = value.get(key).expect("key must be present");
        assert!(field.is_null(), "{key} should decode to Null, got {field:?}");
    }
}

#[test]
fn yaml_nulls_inside_sequence() {
    let value = decode("items: [~, null, 1]\n", Format::Yaml).unwrap();
    assert_eq!(value, v(json!({"items": [null, null, 1]})));
    let items = value.get("items").and_then(Value::as_sequence).unwrap();
    assert!(items[0].is_null() && items[1].is_null());
}

#[test]
fn yaml_special_floats_stay_text() {
    let value = decode("up: .inf\ndown: -.inf\nnan: .nan\n", Format::Yaml).unwrap();
    assert_eq!(value.get("up"), Some(&Value::from(".inf")));
    assert_eq!(value.get("down"), Some(&Value::from("-.inf")));
    assert_eq!(value.get("nan"), Some(&Value::from(".nan")));
}

#[test]
fn yaml_top_level_sequence() {
    let value = decode("- 1\n- two\n", Format::Yaml).unwrap();
    assert_eq!(value, v(json!([1, "two"])));
}

#[test]
fn yaml_malformed_is_error() {
    let err = decode("a: [1, 2\nb: 3\n", Format::Yaml).unwrap_err();
    assert!(
        matches!(err, YmergeError::Yaml(_)),
        "expected a YAML parse error, got {err:?}"
    );
}

#[test]
fn yaml_duplicate_key_is_error() {
    let result = decode("a: 1\na: 2\n", Format::Yaml);
    assert!(result.is_err(), "duplicate keys must not decode: {result:?}");
}

// ============================================================================
// 2. JSON
// ============================================================================

#[test]
fn json_nested_document() {
    let value = decode(r#"{"a": [1, {"b": null}], "c": "d"}"#, Format::Json).unwrap();
    assert_eq!(value, v(json!({"a": [1, {"b": null}], "c": "d"})));
}

#[test]
fn json_large_unsigned_integer() {
    let value = decode(r#"{"n": 18446744073709551615}"#, Format::Json).unwrap();
    assert_eq!(value.get("n"), Some(&Value::Scalar(Scalar::UInt(u64::MAX))));
}

#[test]
fn json_malformed_is_error() {
    let err = decode(r#"{"a": "#, Format::Json).unwrap_err();
    assert!(
        matches!(err, YmergeError::Json(_)),
        "expected a JSON parse error, got {err:?}"
    );
}

#[test]
fn json_duplicate_key_is_error() {
    let err = decode(r#"{"a": 1, "a": 2}"#, Format::Json).unwrap_err();
    assert!(
        err.to_string().contains("duplicate key `a`"),
        "error should name the duplicate key: {err}"
    );
}

#[test]
fn json_preserves_key_order() {
    let value = decode(r#"{"z": 1, "a": 2, "m": 3}"#, Format::Json).unwrap();
    let keys: Vec<&str> = value
        .as_mapping()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(keys, ["z", "a", "m"]);
}

// ============================================================================
// 3. Empty documents
// ============================================================================

#[test]
fn empty_input_is_empty_mapping() {
    assert_eq!(decode("", Format::Yaml).unwrap(), Value::empty_mapping());
    assert_eq!(decode("", Format::Json).unwrap(), Value::empty_mapping());
}

#[test]
fn whitespace_only_is_empty_mapping() {
    assert_eq!(decode("  \n\n\t\n", Format::Yaml).unwrap(), Value::empty_mapping());
    assert_eq!(decode(" \n ", Format::Json).unwrap(), Value::empty_mapping());
}

#[test]
fn yaml_comments_and_markers_only_is_empty_mapping() {
    let input = "# overrides for staging\n---\n   # nothing yet\n...\n";
    assert_eq!(decode(input, Format::Yaml).unwrap(), Value::empty_mapping());
}

#[test]
fn explicit_null_document_is_empty_mapping() {
    assert_eq!(decode("null", Format::Json).unwrap(), Value::empty_mapping());
    assert_eq!(decode("null\n", Format::Yaml).unwrap(), Value::empty_mapping());
    assert_eq!(decode("~\n", Format::Yaml).unwrap(), Value::empty_mapping());
}

#[test]
fn comment_is_not_blank_for_json() {
    assert!(decode("# not json", Format::Json).is_err());
}

// ============================================================================
// 4. Format selection
// ============================================================================

#[test]
fn format_from_path_uses_extension() {
    assert_eq!(Format::from_path("a.json"), Format::Json);
    assert_eq!(Format::from_path("dir/b.JSON"), Format::Json);
    assert_eq!(Format::from_path("c.yaml"), Format::Yaml);
    assert_eq!(Format::from_path("d.yml"), Format::Yaml);
    assert_eq!(Format::from_path("values"), Format::Yaml);
    assert_eq!(Format::from_path("-"), Format::Yaml);
}

#[test]
fn format_from_str() {
    assert_eq!("yaml".parse::<Format>().unwrap(), Format::Yaml);
    assert_eq!("YML".parse::<Format>().unwrap(), Format::Yaml);
    assert_eq!("json".parse::<Format>().unwrap(), Format::Json);
    let err = "toml".parse::<Format>().unwrap_err();
    assert!(matches!(err, YmergeError::UnknownFormat(ref name) if name == "toml"));
}

#[test]
fn format_display_round_trips_through_from_str() {
    for format in [Format::Yaml, Format::Json] {
        assert_eq!(format.to_string().parse::<Format>().unwrap(), format);
    }
}
