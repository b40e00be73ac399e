// used to print out readable forms of declarations
use std::fmt;

use crate::kind::{KindSet, Modifier, TypeTag};
use crate::value::Value;

// ------------- SlotDecl -------------
/// Raw declaration of one named, typed, optionally defaulted argument slot.
///
/// Slot names must be unique across the whole schema, group members
/// included; the resolver relies on this and does not police it.
#[derive(Debug, Clone)]
pub struct SlotDecl {
    name: String,
    tag: TypeTag,
    default: Option<Value>,
    narrow: Option<String>,
}

impl SlotDecl {
    pub fn new(name: impl Into<String>, tag: impl Into<TypeTag>) -> Self {
        Self {
            name: name.into(),
            tag: tag.into(),
            default: None,
            narrow: None,
        }
    }
    /// Value assigned when the slot is optional and its argument is null,
    /// missing, or of the wrong type.
    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }
    /// Capability tag an Object-kinded argument must conform to, checked
    /// through the injected probes.
    pub fn narrowed(mut self, tag: impl Into<String>) -> Self {
        self.narrow = Some(tag.into());
        self
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn tag(&self) -> TypeTag {
        self.tag
    }
    pub fn default(&self) -> Option<&Value> {
        self.default.as_ref()
    }
    pub fn narrow(&self) -> Option<&str> {
        self.narrow.as_deref()
    }
}
impl fmt::Display for SlotDecl {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

// ------------- ElementDecl -------------
/// One element of a schema: a single slot, or an ordered group of
/// alternative slots competing for one argument position. The two forms
/// are told apart structurally, never by a flag.
#[derive(Debug, Clone)]
pub enum ElementDecl {
    Slot(SlotDecl),
    Group(Vec<SlotDecl>),
}

impl From<SlotDecl> for ElementDecl {
    fn from(decl: SlotDecl) -> ElementDecl {
        ElementDecl::Slot(decl)
    }
}
impl From<Vec<SlotDecl>> for ElementDecl {
    fn from(members: Vec<SlotDecl>) -> ElementDecl {
        ElementDecl::Group(members)
    }
}

// ------------- extraction -------------
/// A slot normalized for matching: modifier split away from the kinds.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Slot<'a> {
    pub name: &'a str,
    pub kinds: KindSet,
    pub modifier: Modifier,
    pub default: Option<&'a Value>,
    pub narrow: Option<&'a str>,
}

#[derive(Debug)]
pub(crate) enum Element<'a> {
    Slot(Slot<'a>),
    Group(Vec<Slot<'a>>),
}

impl<'a> Element<'a> {
    /// Names of every slot the element declares. Used to decide whether a
    /// named-argument rescue addressed the element a failure is tagged to.
    pub(crate) fn slot_names(&self) -> Vec<&'a str> {
        match self {
            Element::Slot(slot) => vec![slot.name],
            Element::Group(members) => members.iter().map(|member| member.name).collect(),
        }
    }
}

pub(crate) fn extract(raw: &ElementDecl) -> Element<'_> {
    match raw {
        ElementDecl::Slot(decl) => Element::Slot(extract_slot(decl)),
        ElementDecl::Group(members) => Element::Group(members.iter().map(extract_slot).collect()),
    }
}

fn extract_slot(decl: &SlotDecl) -> Slot<'_> {
    Slot {
        name: decl.name(),
        kinds: decl.tag().kinds(),
        // a slot declared without a modifier is treated as required;
        // group members never carry one and are matched on kinds alone
        modifier: decl.tag().modifier().unwrap_or(Modifier::Required),
        default: decl.default(),
        narrow: decl.narrow(),
    }
}
