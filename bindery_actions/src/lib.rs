// Copyright 2025 the Bindery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bindery Actions: tap, navigate, and detail behavior for table rows.
//!
//! ## Overview
//!
//! This crate attaches row behavior to objects and to classes of objects, then
//! resolves the effective behavior for one row at the moment it is displayed or
//! selected. It does not draw anything.
//! Feed it row objects that implement [`Subject`](crate::types::Subject) and it tells you which
//! affordances a row has and runs the right handlers when the row is used.
//!
//! ## Attaching
//!
//! An [`Action`](crate::handler::Action) is one of three behaviors:
//!
//! - `tap`: the row was selected. The handler returns whether to deselect it.
//! - `navigate`: the row was selected and leads somewhere else.
//! - `detail`: the row's accessory button was pressed.
//!
//! Each can be a [`Direct`](crate::handler::Direct) callback or a
//! [`Targeted`](crate::handler::Targeted) callback that holds its target weakly.
//! Attach actions to a specific object with
//! [`Actions::attach_to_object`](crate::registry::Actions::attach_to_object), or to
//! every object of a class with
//! [`Actions::attach_to_class`](crate::registry::Actions::attach_to_class).
//!
//! ## Resolution
//!
//! [`Actions::resolve`](crate::registry::Actions::resolve) merges, per handler slot:
//! the object's own entry, then its class, then each superclass up to the root.
//! The first entry that defines a slot wins. Superclasses come from a
//! [`SuperclassLookup`](crate::types::SuperclassLookup), by default a
//! [`ClassTable`](crate::classes::ClassTable).
//!
//! ## Workflow
//!
//! 1) Declare the class hierarchy your rows use in a [`ClassTable`](crate::classes::ClassTable).
//! 2) Attach actions to classes once, and to individual objects as needed.
//! 3) Per row, call [`will_display`](crate::adapters::table::will_display) for the
//!    accessory and selection style, then [`did_select`](crate::adapters::table::did_select)
//!    and [`accessory_tapped`](crate::adapters::table::accessory_tapped) as the user interacts.
//!
//! ## Example
//!
//! ```
//! use bindery_actions::{Action, Actions, ClassTable, ObjectKey, Subject};
//! use bindery_model::IndexPath;
//!
//! struct Row {
//!     key: ObjectKey,
//!     class: &'static str,
//! }
//!
//! impl Subject for Row {
//!     fn object_key(&self) -> ObjectKey { self.key }
//!     fn class_name(&self) -> &str { self.class }
//! }
//!
//! let mut classes = ClassTable::new();
//! let base = classes.declare("Row", None).unwrap();
//! classes.declare("LinkRow", Some(base)).unwrap();
//!
//! let mut actions = Actions::with_hierarchy(classes);
//! actions.attach_to_class("Row", Action::tap(|_, _| true));
//! actions.attach_to_class("LinkRow", Action::navigate(|_, _| {}));
//!
//! let link = Row { key: ObjectKey::next(), class: "LinkRow" };
//! let set = actions.resolve(&link);
//! assert!(set.has_tap_action() && set.has_navigate_action());
//! assert_eq!(set.perform_tap(&link, IndexPath::new(0, 0)), Some(true));
//!
//! // An object entry takes priority over its class for the same slot.
//! actions.attach_to_object(&link, Action::tap(|_, _| false));
//! let set = actions.resolve(&link);
//! assert_eq!(set.perform_tap(&link, IndexPath::new(0, 0)), Some(false));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod adapters;
pub mod classes;
pub mod handler;
pub mod registry;
pub mod set;
pub mod types;

pub use classes::{ClassError, ClassId, ClassTable};
pub use handler::{Action, Direct, Handler, Targeted};
pub use registry::Actions;
pub use set::ActionSet;
pub use types::{
    ActionKind, ActionKinds, AsSubject, NoSuperclass, ObjectKey, Subject, SuperclassLookup,
};
