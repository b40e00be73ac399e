//! Argscheme – schema-based resolution of flexible call arguments.
//!
//! Argscheme validates a call's actual arguments against a declarative
//! schema of named, typed argument slots and produces a name→value mapping,
//! so one function can accept varying argument counts and orders while
//! still enforcing type contracts at its boundary:
//! * A [`schema::SlotDecl`] names one slot and tags it with a
//!   [`kind::TypeTag`] (one or more [`kind::Kind`]s plus a
//!   [`kind::Modifier`]), an optional default value, and an optional
//!   narrowing tag for Object-kinded slots.
//! * A [`schema::ElementDecl`] is either a single slot or a *group*, an
//!   ordered set of alternative slots competing for one argument position.
//! * A [`value::Value`] is a runtime argument; a trailing
//!   [`value::Value::Map`] acts as a bag of named overrides.
//! * [`resolve::resolve`] walks schema and arguments with two independent
//!   cursors and yields a [`resolve::Resolved`] mapping or a
//!   [`error::ResolveError`].
//!
//! ## Modules
//! * [`kind`] – Kinds, kind sets and type tags composed with `|`.
//! * [`value`] – The runtime value model, including callables and foreign
//!   platform objects.
//! * [`schema`] – Slot and group declarations plus their extraction into
//!   the matching form.
//! * [`matcher`] – The union-semantics type matcher and the injectable
//!   [`matcher::Probes`] for platform-specific checks.
//! * [`resolve`] – The two-cursor positional resolver and the
//!   named-argument overlay.
//! * [`error`] – The failure taxonomy with stable, pattern-matchable
//!   messages.
//!
//! ## Elastic call shapes
//! An optional slot that does not match the argument it is offered holds
//! the argument back for the next slot (filling in its default, if any),
//! which is what lets `f(value, callback)` and `f(value, label, callback)`
//! share one schema.
//!
//! ## Quick Start
//! ```
//! use argscheme::kind::{Kind, Modifier};
//! use argscheme::resolve::resolve;
//! use argscheme::schema::{ElementDecl, SlotDecl};
//! use argscheme::value::Value;
//!
//! let schema: Vec<ElementDecl> = vec![
//!     SlotDecl::new("path", Kind::String | Modifier::Required).into(),
//!     SlotDecl::new("limit", Kind::Int | Modifier::Optional)
//!         .with_default(10)
//!         .into(),
//!     SlotDecl::new("done", Kind::Function | Modifier::Optional).into(),
//! ];
//! let callback = Value::function(|_| Value::Null);
//! let resolved = resolve(&schema, &[Value::from("/tmp/data"), callback]).unwrap();
//! assert_eq!(resolved.get("path"), Some(&Value::from("/tmp/data")));
//! assert_eq!(resolved.get("limit"), Some(&Value::Int(10)));
//! assert!(resolved.contains("done"));
//! ```
//!
//! ## Scope
//! Resolution is a pure, synchronous function of (schema, arguments); no
//! I/O, no shared state, safe to call from concurrent tasks. Platform
//! notions such as "is a UI element", "is a binary buffer" or "conforms to
//! capability X" are injected through [`matcher::Probes`] rather than
//! hardcoded; nested object shapes and array element types are outside the
//! contract.

pub mod error;
pub mod kind;
pub mod matcher;
pub mod resolve;
pub mod schema;
pub mod value;
