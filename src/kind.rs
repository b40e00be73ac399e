// used to compose kinds, sets and tags with the | operator
use std::ops;

// used to print out readable forms of kinds
use std::fmt;

use serde::{Deserialize, Serialize};

// ------------- Kind -------------
/// One primitive or structural kind of runtime value a slot can accept.
///
/// The declaration order below is canonical: when a slot unions several
/// kinds, failure messages summarize the expectation with the first kind
/// found in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Kind {
    String,
    Function,
    Int,
    Float,
    Array,
    Object,
    Buffer,
    Date,
    Bool,
    UiElement,
}

impl Kind {
    /// All kinds in canonical declaration order.
    pub const CANONICAL: [Kind; 10] = [
        Kind::String,
        Kind::Function,
        Kind::Int,
        Kind::Float,
        Kind::Array,
        Kind::Object,
        Kind::Buffer,
        Kind::Date,
        Kind::Bool,
        Kind::UiElement,
    ];

    const fn bit(self) -> u16 {
        1 << (self as u16)
    }

    pub fn label(self) -> &'static str {
        match self {
            Kind::String => "String",
            Kind::Function => "Function",
            Kind::Int => "Int",
            Kind::Float => "Float",
            Kind::Array => "Array",
            Kind::Object => "Object",
            Kind::Buffer => "Buffer",
            Kind::Date => "Date",
            Kind::Bool => "Bool",
            Kind::UiElement => "UI Element",
        }
    }
}
impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ------------- KindSet -------------
/// An immutable set of kinds. A value satisfies the set when it satisfies
/// any member, never all of them. The empty set is expressible and means
/// that no valid type was specified for the slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct KindSet(u16);

impl KindSet {
    pub const EMPTY: KindSet = KindSet(0);

    pub fn single(kind: Kind) -> Self {
        KindSet(kind.bit())
    }
    pub fn contains(&self, kind: Kind) -> bool {
        self.0 & kind.bit() != 0
    }
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
    /// The first member in canonical declaration order, if any.
    pub fn first(&self) -> Option<Kind> {
        Kind::CANONICAL.iter().copied().find(|kind| self.contains(*kind))
    }
    pub fn iter(&self) -> impl Iterator<Item = Kind> + '_ {
        Kind::CANONICAL.iter().copied().filter(|kind| self.contains(*kind))
    }
}
impl From<Kind> for KindSet {
    fn from(kind: Kind) -> KindSet {
        KindSet::single(kind)
    }
}
impl ops::BitOr for KindSet {
    type Output = KindSet;
    fn bitor(self, other: KindSet) -> KindSet {
        KindSet(self.0 | other.0)
    }
}
impl ops::BitOr<Kind> for KindSet {
    type Output = KindSet;
    fn bitor(self, kind: Kind) -> KindSet {
        KindSet(self.0 | kind.bit())
    }
}
impl ops::BitOr for Kind {
    type Output = KindSet;
    fn bitor(self, other: Kind) -> KindSet {
        KindSet(self.bit() | other.bit())
    }
}
impl ops::BitOr<KindSet> for Kind {
    type Output = KindSet;
    fn bitor(self, set: KindSet) -> KindSet {
        set | self
    }
}

// ------------- Modifier -------------
/// Whether a slot must be filled by a non-null argument or may be skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Modifier {
    Required,
    Optional,
}

// ------------- TypeTag -------------
/// The declared tag of a slot: one or more kinds together with at most one
/// modifier, composed with the | operator.
///
/// ```
/// use argscheme::kind::{Kind, Modifier, TypeTag};
/// let tag: TypeTag = Kind::String | Kind::Int | Modifier::Required;
/// assert_eq!(tag.modifier(), Some(Modifier::Required));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeTag {
    kinds: KindSet,
    modifier: Option<Modifier>,
}

impl TypeTag {
    pub fn new(kinds: KindSet, modifier: Option<Modifier>) -> Self {
        Self { kinds, modifier }
    }
    pub fn kinds(&self) -> KindSet {
        self.kinds
    }
    pub fn modifier(&self) -> Option<Modifier> {
        self.modifier
    }
}
impl From<Kind> for TypeTag {
    fn from(kind: Kind) -> TypeTag {
        TypeTag::new(KindSet::single(kind), None)
    }
}
impl From<KindSet> for TypeTag {
    fn from(kinds: KindSet) -> TypeTag {
        TypeTag::new(kinds, None)
    }
}
impl ops::BitOr<Modifier> for Kind {
    type Output = TypeTag;
    fn bitor(self, modifier: Modifier) -> TypeTag {
        TypeTag::new(KindSet::single(self), Some(modifier))
    }
}
impl ops::BitOr<Modifier> for KindSet {
    type Output = TypeTag;
    fn bitor(self, modifier: Modifier) -> TypeTag {
        TypeTag::new(self, Some(modifier))
    }
}
impl ops::BitOr<Kind> for Modifier {
    type Output = TypeTag;
    fn bitor(self, kind: Kind) -> TypeTag {
        TypeTag::new(KindSet::single(kind), Some(self))
    }
}
impl ops::BitOr<KindSet> for Modifier {
    type Output = TypeTag;
    fn bitor(self, kinds: KindSet) -> TypeTag {
        TypeTag::new(kinds, Some(self))
    }
}
impl ops::BitOr<Kind> for TypeTag {
    type Output = TypeTag;
    fn bitor(self, kind: Kind) -> TypeTag {
        TypeTag::new(self.kinds | kind, self.modifier)
    }
}
impl ops::BitOr<Modifier> for TypeTag {
    type Output = TypeTag;
    fn bitor(self, modifier: Modifier) -> TypeTag {
        TypeTag::new(self.kinds, Some(modifier))
    }
}
