//! Decides whether a runtime value satisfies a slot's kind set.
//!
//! Matching has union semantics: the value matches when any kind in the set
//! accepts it. Platform-specific checks (binary buffers, UI elements,
//! narrowing to a capability tag) go through the injected [`Probes`] so the
//! core never hardcodes an environment assumption.

use crate::kind::{Kind, KindSet};
use crate::value::Value;

// ------------- Probes -------------
/// Platform predicates injected into matching. The provided methods are the
/// structural defaults: a buffer is the Buffer variant, nothing is a UI
/// element, and a foreign object conforms to a tag when its own tag equals
/// it. Environments with richer notions override what they need.
pub trait Probes {
    fn is_buffer(&self, value: &Value) -> bool {
        matches!(value, Value::Buffer(_))
    }
    fn is_ui_element(&self, _value: &Value) -> bool {
        false
    }
    fn conforms(&self, value: &Value, tag: &str) -> bool {
        match value {
            Value::Foreign(object) => object.tag() == tag,
            _ => false,
        }
    }
}

/// The structural defaults, unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultProbes;
impl Probes for DefaultProbes {}

// ------------- matching -------------
pub(crate) fn matches<P: Probes>(
    probes: &P,
    value: &Value,
    kinds: KindSet,
    narrow: Option<&str>,
) -> bool {
    if kinds.contains(Kind::String) && matches!(value, Value::String(_)) {
        return true;
    }
    if kinds.contains(Kind::Function) && matches!(value, Value::Function(_)) {
        return true;
    }
    if kinds.contains(Kind::Int) && is_integral(value) {
        return true;
    }
    // any number satisfies Float, integral ones included
    if kinds.contains(Kind::Float) && matches!(value, Value::Int(_) | Value::Float(_)) {
        return true;
    }
    if kinds.contains(Kind::Array) && matches!(value, Value::Array(_)) {
        return true;
    }
    if kinds.contains(Kind::Object)
        && matches!(value, Value::Map(_) | Value::Foreign(_))
        && narrow.is_none_or(|tag| probes.conforms(value, tag))
    {
        return true;
    }
    if kinds.contains(Kind::Buffer) && probes.is_buffer(value) {
        return true;
    }
    if kinds.contains(Kind::Date) && matches!(value, Value::Date(_)) {
        return true;
    }
    if kinds.contains(Kind::Bool) && matches!(value, Value::Bool(_)) {
        return true;
    }
    if kinds.contains(Kind::UiElement) && probes.is_ui_element(value) {
        return true;
    }
    false
}

fn is_integral(value: &Value) -> bool {
    match value {
        Value::Int(_) => true,
        Value::Float(x) => x.fract() == 0.0,
        _ => false,
    }
}

/// Matching against an empty kind set is undefined; the resolver reports it
/// as a distinct failure instead of silently deciding either way.
pub(crate) fn type_specified(kinds: KindSet) -> bool {
    !kinds.is_empty()
}

/// Human-readable rendering of the expected kinds: the first kind present
/// in canonical declaration order, a summary rather than the full union.
pub(crate) fn expected_label(kinds: KindSet, narrow: Option<&str>) -> String {
    match kinds.first() {
        Some(Kind::Object) => match narrow {
            Some(tag) => format!("Object ({tag})"),
            None => "Object".to_owned(),
        },
        Some(kind) => kind.label().to_owned(),
        None => "unknown".to_owned(),
    }
}
