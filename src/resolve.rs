//! The positional resolver and the named-argument overlay.
//!
//! Resolution walks two independent cursors, `s` over the schema and `a`
//! over the arguments. Each schema element is offered the argument at `a`
//! and reports one of three outcomes: the argument was consumed, the
//! argument was held back for the next element, or a fatal failure is now
//! pending. `s` advances every iteration regardless.
//!
//! The consume/hold asymmetry is what makes call shapes elastic: an
//! optional slot that does not match the current argument steps aside and
//! re-offers the same argument to the next slot, so `f(value, callback)`
//! and `f(value, label, callback)` can share one schema in which `label`
//! is optional.
//!
//! A pending failure stops the walk but is not raised immediately. If
//! exactly one argument remains unconsumed and it is a plain mapping, that
//! mapping is treated as a bag of named overrides which may fill any slot
//! by name and thereby rescue the failing element; only when no rescue
//! addresses it is the failure raised.

use std::collections::HashSet;
use std::ops::Deref;

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::error::{ResolveError, Result};
use crate::kind::Modifier;
use crate::matcher::{self, DefaultProbes, Probes};
use crate::schema::{Element, ElementDecl, Slot, extract};
use crate::value::Value;

// ------------- Resolved -------------
/// The result of a successful resolution: slot name to final value, in
/// schema declaration order of assignment. A slot left unset has no entry.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Resolved(IndexMap<String, Value>);

impl Resolved {
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }
    fn set(&mut self, name: &str, value: Value) {
        self.0.insert(name.to_owned(), value);
    }
}
impl Deref for Resolved {
    type Target = IndexMap<String, Value>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

// ------------- outcomes -------------
/// What offering one argument to one schema element did to the argument
/// cursor. Kept explicit so the consume-or-hold decision is auditable.
#[derive(Debug)]
enum Outcome {
    /// The argument at the cursor was consumed.
    Consumed,
    /// Nothing was consumed; the same argument goes to the next element.
    Held,
    /// A fatal failure is pending; positional processing stops here.
    Pending(ResolveError),
}

/// A failure waiting for the overlay pass, tagged with the names of the
/// slots whose rescue would clear it.
struct PendingFailure<'a> {
    error: ResolveError,
    rescuers: Vec<&'a str>,
}

// ------------- Resolver -------------
/// Resolves call arguments against a schema using a caller-supplied set of
/// platform probes. [`resolve`] is the shorthand for the structural
/// defaults.
pub struct Resolver<P: Probes> {
    probes: P,
}

impl Resolver<DefaultProbes> {
    pub fn new() -> Self {
        Self {
            probes: DefaultProbes,
        }
    }
}
impl Default for Resolver<DefaultProbes> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Probes> Resolver<P> {
    pub fn with_probes(probes: P) -> Self {
        Self { probes }
    }

    /// Resolve `args` against `schema`, yielding the name to value mapping
    /// or the first unrescued failure. Pure: reads nothing but its inputs
    /// and allocates only the result.
    pub fn resolve(&self, schema: &[ElementDecl], args: &[Value]) -> Result<Resolved> {
        let mut resolved = Resolved::default();
        let mut pending: Option<PendingFailure> = None;
        let mut a = 0usize;

        for (s, raw) in schema.iter().enumerate() {
            let element = extract(raw);
            let arg = args.get(a);
            let outcome = match &element {
                Element::Slot(slot) => self.offer_slot(slot, arg, a, &mut resolved),
                Element::Group(members) => self.offer_group(members, arg, a, &mut resolved),
            };
            trace!(element = s, cursor = a, outcome = ?outcome, "offered");
            match outcome {
                Outcome::Consumed => a += 1,
                Outcome::Held => (),
                Outcome::Pending(error) => {
                    debug!(element = s, cursor = a, %error, "failure pending");
                    pending = Some(PendingFailure {
                        error,
                        rescuers: element.slot_names(),
                    });
                    break;
                }
            }
        }

        // a trailing mapping acts as a bag of named overrides, but only
        // when it is the single argument left unconsumed
        let bag = match args.last() {
            Some(Value::Map(entries)) if a + 1 == args.len() => Some(entries),
            _ => None,
        };

        if let Some(entries) = bag {
            let rescued = self.overlay(schema, entries, &mut resolved);
            if let Some(failure) = pending {
                if failure.rescuers.iter().any(|name| rescued.contains(name)) {
                    debug!(error = %failure.error, "pending failure rescued by name");
                } else {
                    return Err(failure.error);
                }
            }
        } else if let Some(failure) = pending {
            return Err(failure.error);
        }

        Ok(resolved)
    }

    fn offer_slot(
        &self,
        slot: &Slot<'_>,
        arg: Option<&Value>,
        index: usize,
        resolved: &mut Resolved,
    ) -> Outcome {
        match slot.modifier {
            Modifier::Required => self.offer_required(slot, arg, index, resolved),
            Modifier::Optional => self.offer_optional(slot, arg, resolved),
        }
    }

    fn offer_required(
        &self,
        slot: &Slot<'_>,
        arg: Option<&Value>,
        index: usize,
        resolved: &mut Resolved,
    ) -> Outcome {
        let Some(arg) = arg.filter(|value| !value.is_null()) else {
            return Outcome::Pending(ResolveError::NullRequired {
                index,
                name: slot.name.to_owned(),
            });
        };
        if matcher::matches(&self.probes, arg, slot.kinds, slot.narrow) {
            resolved.set(slot.name, arg.clone());
            Outcome::Consumed
        } else if matcher::type_specified(slot.kinds) {
            Outcome::Pending(ResolveError::WrongType {
                index,
                name: slot.name.to_owned(),
                expected: matcher::expected_label(slot.kinds, slot.narrow),
                actual: arg.type_name(),
                value: arg.to_string(),
            })
        } else {
            Outcome::Pending(ResolveError::NoTypeSpecified {
                index,
                name: slot.name.to_owned(),
            })
        }
    }

    fn offer_optional(&self, slot: &Slot<'_>, arg: Option<&Value>, resolved: &mut Resolved) -> Outcome {
        let Some(arg) = arg else {
            // the arguments ran out; a declared default still applies
            if let Some(default) = slot.default {
                resolved.set(slot.name, default.clone());
            }
            return Outcome::Held;
        };
        if arg.is_null() {
            // a null argument still occupies the slot's position
            match slot.default {
                Some(default) => resolved.set(slot.name, default.clone()),
                None => resolved.set(slot.name, Value::Null),
            }
            Outcome::Consumed
        } else if matcher::matches(&self.probes, arg, slot.kinds, slot.narrow) {
            resolved.set(slot.name, arg.clone());
            Outcome::Consumed
        } else if let Some(default) = slot.default {
            // the argument belongs to a later slot; fall back to the
            // default and re-offer the argument
            resolved.set(slot.name, default.clone());
            Outcome::Held
        } else {
            Outcome::Held
        }
    }

    fn offer_group(
        &self,
        members: &[Slot<'_>],
        arg: Option<&Value>,
        index: usize,
        resolved: &mut Resolved,
    ) -> Outcome {
        let Some(arg) = arg.filter(|value| !value.is_null()) else {
            return Outcome::Pending(ResolveError::NoGroupMatchNull { index });
        };
        // declaration order is match priority; the first member to accept
        // the argument wins and every sibling stays unset
        for member in members {
            if matcher::matches(&self.probes, arg, member.kinds, member.narrow) {
                resolved.set(member.name, arg.clone());
                return Outcome::Consumed;
            }
        }
        let labels: Vec<String> = members
            .iter()
            .map(|member| matcher::expected_label(member.kinds, member.narrow))
            .collect();
        Outcome::Pending(ResolveError::NoGroupMatch {
            index,
            expected: labels.join(", "),
        })
    }

    /// Fill or overwrite any slot whose name appears in the bag with a
    /// type-matching value. Returns the names that were set; whether at
    /// least one rescue happened is the boolean any-accumulation of that.
    fn overlay<'sch>(
        &self,
        schema: &'sch [ElementDecl],
        bag: &IndexMap<String, Value>,
        resolved: &mut Resolved,
    ) -> HashSet<&'sch str> {
        let mut rescued: HashSet<&'sch str> = HashSet::new();
        for raw in schema {
            match extract(raw) {
                Element::Slot(slot) => self.overlay_slot(&slot, bag, resolved, &mut rescued),
                Element::Group(members) => {
                    for member in &members {
                        self.overlay_slot(member, bag, resolved, &mut rescued);
                    }
                }
            }
        }
        if !rescued.is_empty() {
            debug!(count = rescued.len(), "named arguments applied");
        }
        rescued
    }

    fn overlay_slot<'sch>(
        &self,
        slot: &Slot<'sch>,
        bag: &IndexMap<String, Value>,
        resolved: &mut Resolved,
        rescued: &mut HashSet<&'sch str>,
    ) {
        if let Some(value) = bag.get(slot.name) {
            // a name match alone is not enough; the bag value must satisfy
            // the slot's kinds or the key is ignored
            if matcher::matches(&self.probes, value, slot.kinds, slot.narrow) {
                resolved.set(slot.name, value.clone());
                rescued.insert(slot.name);
            }
        }
    }
}

/// Resolve `args` against `schema` with the structural default probes.
pub fn resolve(schema: &[ElementDecl], args: &[Value]) -> Result<Resolved> {
    Resolver::new().resolve(schema, args)
}
