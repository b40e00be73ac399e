use argscheme::kind::{Kind, Modifier, TypeTag};
use argscheme::resolve::resolve;
use argscheme::schema::{ElementDecl, SlotDecl};
use argscheme::value::{ForeignValue, Value};
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
fn default_applies_when_the_argument_is_null() {
    let schema = vec![
        SlotDecl::new("test1", Kind::Int | Modifier::Optional)
            .with_default(62)
            .into(),
    ];
    let resolved = resolve(&schema, &[Value::Null]).unwrap();
    assert_eq!(resolved.get("test1"), Some(&Value::Int(62)));
}

#[test]
fn default_applies_when_the_argument_is_missing() {
    let schema = vec![
        SlotDecl::new("test1", Kind::Int | Modifier::Optional)
            .with_default(62)
            .into(),
    ];
    let resolved = resolve(&schema, &[]).unwrap();
    assert_eq!(resolved.get("test1"), Some(&Value::Int(62)));
}

#[test]
fn default_is_ignored_when_a_matching_argument_is_present() {
    let schema = vec![
        SlotDecl::new("test1", Kind::Int | Modifier::Optional)
            .with_default(62)
            .into(),
    ];
    let resolved = resolve(&schema, &[Value::Int(63)]).unwrap();
    assert_eq!(resolved.get("test1"), Some(&Value::Int(63)));
}

#[test]
fn null_without_a_default_resolves_to_null() {
    let schema = vec![slot("test1", Kind::Int | Modifier::Optional)];
    let resolved = resolve(&schema, &[Value::Null]).unwrap();
    assert_eq!(resolved.get("test1"), Some(&Value::Null));
}

#[test]
fn narrowed_default_applies_on_null() {
    let photo = Value::foreign(Photo);
    let schema = vec![
        SlotDecl::new("test1", Kind::Object | Modifier::Optional)
            .with_default(photo.clone())
            .narrowed("Photo")
            .into(),
    ];
    let resolved = resolve(&schema, &[Value::Null]).unwrap();
    assert_eq!(resolved.get("test1"), Some(&photo));
}

#[test]
fn narrowed_default_applies_when_the_wrong_object_kind_is_passed() {
    let photo = Value::foreign(Photo);
    let schema = vec![
        SlotDecl::new("test1", Kind::Object | Modifier::Optional)
            .with_default(photo.clone())
            .narrowed("Photo")
            .into(),
    ];
    let resolved = resolve(&schema, &[Value::foreign(Foto)]).unwrap();
    assert_eq!(resolved.get("test1"), Some(&photo));
}

#[test]
fn defaulted_slot_holds_its_argument_for_the_next_slot() {
    // f(value, callback) and f(value, label, callback) share this schema
    let schema = vec![
        slot("value", Kind::Int | Modifier::Required),
        SlotDecl::new("label", Kind::String | Modifier::Optional)
            .with_default("unnamed")
            .into(),
        slot("callback", Kind::Function | Modifier::Required),
    ];
    let callback = Value::function(|_| Value::Null);

    let short = resolve(&schema, &[Value::Int(5), callback.clone()]).unwrap();
    assert_eq!(short.get("value"), Some(&Value::Int(5)));
    assert_eq!(short.get("label"), Some(&Value::from("unnamed")));
    assert_eq!(short.get("callback"), Some(&callback));

    let long = resolve(
        &schema,
        &[Value::Int(5), Value::from("five"), callback.clone()],
    )
    .unwrap();
    assert_eq!(long.get("label"), Some(&Value::from("five")));
    assert_eq!(long.get("callback"), Some(&callback));
}

#[test]
fn consecutive_defaulted_slots_each_fall_back() {
    let callback = Value::function(|_| Value::Null);
    let schema = vec![
        slot("test1", Modifier::Required | Kind::Buffer),
        slot("test2", Modifier::Optional | Kind::String),
        slot("test3", Modifier::Optional | Kind::String),
        SlotDecl::new("test4", Modifier::Optional | Kind::String)
            .with_default("defaultValue")
            .into(),
        slot("test5", Modifier::Optional | Kind::Function),
        slot("test6", Modifier::Optional | Kind::Function),
    ];
    let args = vec![
        Value::buffer(vec![0u8; 8]),
        Value::from("testArg"),
        callback.clone(),
    ];
    let resolved = resolve(&schema, &args).unwrap();
    assert_eq!(resolved.get("test2"), Some(&Value::from("testArg")));
    assert!(!resolved.contains("test3"));
    assert_eq!(resolved.get("test4"), Some(&Value::from("defaultValue")));
    assert_eq!(resolved.get("test5"), Some(&callback));
    assert!(!resolved.contains("test6"));
}
