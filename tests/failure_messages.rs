use argscheme::error::ResolveError;
use argscheme::kind::{Kind, KindSet, Modifier, TypeTag};
use argscheme::resolve::resolve;
use argscheme::schema::{ElementDecl, SlotDecl};
use argscheme::value::{ForeignValue, Value};
use serde_json::json;
use std::any::Any;

fn slot(name: &str, tag: impl Into<TypeTag>) -> ElementDecl {
    SlotDecl::new(name, tag).into()
}

#[derive(Debug)]
struct Photo;
impl ForeignValue for Photo {
    fn tag(&self) -> &str {
        "Photo"
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[derive(Debug)]
struct Foto;
impl ForeignValue for Foto {
    fn tag(&self) -> &str {
        "Foto"
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[test]
fn required_slot_given_null_raises() {
    let schema = vec![slot("test1", Kind::String | Modifier::Required)];
    let err = resolve(&schema, &[Value::Null]).unwrap_err();
    let msg = format!("{}", err);
    assert!(msg.contains("is null or undefined"));
    assert!(msg.contains("Argument 0 (test1)"));
}

#[test]
fn required_slot_given_null_raises_at_any_position() {
    let schema = vec![
        slot("test1", Kind::Int | Modifier::Required),
        slot("test2", Kind::String | Modifier::Required),
    ];
    let err = resolve(&schema, &[Value::Int(62), Value::Null]).unwrap_err();
    assert!(matches!(
        err,
        ResolveError::NullRequired { index: 1, ref name } if name == "test2"
    ));
}

#[test]
fn missing_required_argument_raises() {
    let schema = vec![slot("test1", Kind::String | Modifier::Required)];
    let err = resolve(&schema, &[]).unwrap_err();
    assert!(format!("{}", err).contains("is null or undefined"));
}

#[test]
fn float_passed_for_an_int_raises() {
    let schema = vec![slot("test1", Kind::Int | Modifier::Required)];
    let err = resolve(&schema, &[Value::Float(2.3)]).unwrap_err();
    let msg = format!("{}", err);
    assert!(msg.contains("should be type Int"));
    assert!(msg.contains("was type float with value 2.3"));
}

#[test]
fn int_passed_for_a_string_raises() {
    let schema = vec![slot("x", Kind::String | Modifier::Required)];
    let err = resolve(&schema, &[Value::Int(42)]).unwrap_err();
    assert!(matches!(err, ResolveError::WrongType { .. }));
    assert!(format!("{}", err).contains("should be type String"));
}

#[test]
fn object_of_the_wrong_narrowing_raises() {
    let schema = vec![
        SlotDecl::new("test1", Kind::Object | Modifier::Required)
            .narrowed("Photo")
            .into(),
    ];
    let err = resolve(&schema, &[Value::foreign(Foto)]).unwrap_err();
    let msg = format!("{}", err);
    assert!(msg.contains("should be type Object (Photo)"));
}

#[test]
fn no_valid_type_specified_raises() {
    let schema = vec![slot("test1", KindSet::EMPTY | Modifier::Required)];
    let err = resolve(&schema, &[Value::from("hi")]).unwrap_err();
    let msg = format!("{}", err);
    assert!(msg.contains("no valid type specified"));
    assert!(matches!(err, ResolveError::NoTypeSpecified { index: 0, .. }));
}

#[test]
fn group_given_null_raises() {
    let schema = vec![ElementDecl::Group(vec![
        SlotDecl::new("test1", Kind::String),
        SlotDecl::new("test2", Kind::Int),
    ])];
    let err = resolve(&schema, &[Value::Null]).unwrap_err();
    assert!(format!("{}", err).contains("is null or undefined"));
}

#[test]
fn group_with_no_matching_member_raises() {
    let schema = vec![ElementDecl::Group(vec![
        SlotDecl::new("test1", Kind::String),
        SlotDecl::new("test2", Kind::Int),
    ])];
    let err = resolve(&schema, &[Value::Float(47.9)]).unwrap_err();
    let msg = format!("{}", err);
    assert!(msg.contains("should be one of"));
    assert!(msg.contains("String, Int"));
}

#[test]
fn failure_survives_a_bag_that_misses_the_failing_slot() {
    let schema = vec![slot("test1", Kind::Int | Modifier::Required)];
    let err = resolve(&schema, &[Value::from(json!({"other": 5}))]).unwrap_err();
    assert!(format!("{}", err).contains("should be type Int"));
}

#[test]
fn failure_survives_a_bag_whose_value_has_the_wrong_type() {
    let schema = vec![slot("test1", Kind::Int | Modifier::Required)];
    let err = resolve(&schema, &[Value::from(json!({"test1": "five"}))]).unwrap_err();
    assert!(matches!(err, ResolveError::WrongType { .. }));
}

#[test]
fn failure_is_rescued_by_a_matching_bag_entry() {
    let schema = vec![slot("test1", Kind::Int | Modifier::Required)];
    let resolved = resolve(&schema, &[Value::from(json!({"test1": 5}))]).unwrap();
    assert_eq!(resolved.get("test1"), Some(&Value::Int(5)));
}

#[test]
fn no_partial_result_escapes_a_raised_failure() {
    let schema = vec![
        slot("test1", Kind::Int | Modifier::Required),
        slot("test2", Kind::String | Modifier::Required),
    ];
    // test1 resolves before test2 fails; the whole call must error
    assert!(resolve(&schema, &[Value::Int(62), Value::Int(63)]).is_err());
}

#[test]
fn photo_narrowing_is_mentioned_with_its_tag() {
    let schema = vec![
        SlotDecl::new("shot", Kind::Object | Modifier::Required)
            .narrowed("Photo")
            .into(),
    ];
    let ok = resolve(&schema, &[Value::foreign(Photo)]).unwrap();
    assert!(ok.contains("shot"));
}
