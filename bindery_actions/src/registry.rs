// Copyright 2025 the Bindery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Registry implementation.
//!
//! ## Overview
//!
//! Stores action sets per object key and per class name, and resolves the
//! effective set for a subject by merging them in priority order.
//!
//! ## Resolution
//!
//! - Start from an empty [`ActionSet`].
//! - Merge the subject's own entry (keyed by [`ObjectKey`]).
//! - Walk the subject's class ancestry via [`SuperclassLookup`], most-derived
//!   first, merging each class entry.
//! - For every handler slot independently, the first entry that defines it wins.
//!
//! Resolution never mutates the registry.
//!
//! ## Attaching
//!
//! Attaching to an object or class overwrites that exact slot of that exact
//! entry, creating the entry on first use. Removing actions resets an existing
//! entry in place and never creates one.
//!
//! ## See Also
//!
//! [`adapters::table`](crate::adapters::table) for turning resolved sets into
//! row affordances and dispatch.

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

use crate::classes::ClassTable;
use crate::handler::Action;
use crate::set::ActionSet;
use crate::types::{ObjectKey, Subject, SuperclassLookup};

/// Tap, navigate, and detail actions attached to objects and classes.
///
/// ## Usage
///
/// - Construct with [`Actions::new`] to use a [`ClassTable`] (or any
///   `Default` lookup), or with [`Actions::with_hierarchy`] to supply the
///   class hierarchy explicitly.
/// - Attach behavior with [`Actions::attach_to_object`] and
///   [`Actions::attach_to_class`].
/// - Call [`Actions::resolve`] per row to get the merged [`ActionSet`] and
///   dispatch on it.
///
/// The registry is single-threaded: handlers are `Rc`-based and the type is
/// neither `Send` nor `Sync`.
pub struct Actions<H: SuperclassLookup = ClassTable> {
    objects: BTreeMap<ObjectKey, ActionSet>,
    classes: BTreeMap<String, ActionSet>,
    hierarchy: H,
}

impl<H: SuperclassLookup> core::fmt::Debug for Actions<H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Actions")
            .field("objects", &self.objects.len())
            .field("classes", &self.classes.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

impl<H: SuperclassLookup + Default> Default for Actions<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: SuperclassLookup + Default> Actions<H> {
    /// Create an empty registry with a default class hierarchy.
    pub fn new() -> Self {
        Self::with_hierarchy(H::default())
    }
}

impl<H: SuperclassLookup> Actions<H> {
    /// Create an empty registry with an explicit class hierarchy.
    pub fn with_hierarchy(hierarchy: H) -> Self {
        Self {
            objects: BTreeMap::new(),
            classes: BTreeMap::new(),
            hierarchy,
        }
    }

    /// The class hierarchy consulted during resolution.
    pub fn hierarchy(&self) -> &H {
        &self.hierarchy
    }

    /// Mutable access to the class hierarchy, for declaring classes after construction.
    pub fn hierarchy_mut(&mut self) -> &mut H {
        &mut self.hierarchy
    }

    /// Returns true if the subject resolves to at least one action.
    pub fn is_actionable<S: Subject + ?Sized>(&self, object: &S) -> bool {
        self.resolve(object).has_actions()
    }

    /// Set the `enabled` flag of the object's entry, creating the entry if needed.
    pub fn set_object_enabled<S: Subject + ?Sized>(&mut self, object: &S, enabled: bool) {
        let key = object.object_key();
        tracing::debug!(key = key.to_raw(), enabled, "set object enabled");
        self.objects.entry(key).or_default().set_enabled(enabled);
    }

    /// Set the `enabled` flag of the class's entry, creating the entry if needed.
    pub fn set_class_enabled(&mut self, class: &str, enabled: bool) {
        tracing::debug!(class, enabled, "set class enabled");
        self.class_entry_mut(class).set_enabled(enabled);
    }

    /// Attach `action` to one object, overwriting that slot of its entry.
    pub fn attach_to_object<S: Subject + ?Sized>(&mut self, object: &S, action: Action) {
        let key = object.object_key();
        tracing::debug!(
            key = key.to_raw(),
            kind = ?action.kind(),
            targeted = action.is_targeted(),
            "attach to object"
        );
        self.objects.entry(key).or_default().set(action);
    }

    /// Attach `action` to a class by name, overwriting that slot of its entry.
    pub fn attach_to_class(&mut self, class: &str, action: Action) {
        tracing::debug!(
            class,
            kind = ?action.kind(),
            targeted = action.is_targeted(),
            "attach to class"
        );
        self.class_entry_mut(class).set(action);
    }

    /// Attach `action` to the class named after the Rust type `T`.
    ///
    /// This is the class that [`Subject::class_name`] reports by default.
    pub fn attach_to_type<T: ?Sized>(&mut self, action: Action) {
        self.attach_to_class(core::any::type_name::<T>(), action);
    }

    /// Clear every handler attached to the object. No entry is created if none exists.
    pub fn remove_all_actions_for_object<S: Subject + ?Sized>(&mut self, object: &S) {
        let key = object.object_key();
        if let Some(set) = self.objects.get_mut(&key) {
            tracing::debug!(key = key.to_raw(), "remove all object actions");
            set.reset();
        }
    }

    /// Clear every handler attached to the class. No entry is created if none exists.
    pub fn remove_all_actions_for_class(&mut self, class: &str) {
        if let Some(set) = self.classes.get_mut(class) {
            tracing::debug!(class, "remove all class actions");
            set.reset();
        }
    }

    /// The object's own entry, without class-level actions.
    pub fn object_entry(&self, key: ObjectKey) -> Option<&ActionSet> {
        self.objects.get(&key)
    }

    /// The class's own entry, without inherited actions.
    pub fn class_entry(&self, class: &str) -> Option<&ActionSet> {
        self.classes.get(class)
    }

    /// Resolve the effective actions for `object`.
    ///
    /// Priority per handler slot: the object's entry, then its class, then
    /// each superclass up to the root. See the module docs.
    pub fn resolve<S: Subject + ?Sized>(&self, object: &S) -> ActionSet {
        let key = object.object_key();
        let mut actions = ActionSet::new();
        actions.merge_from(self.objects.get(&key));

        let mut class = Some(object.class_name());
        while let Some(name) = class {
            let entry = self.classes.get(name);
            tracing::trace!(
                key = key.to_raw(),
                class = name,
                found = entry.is_some(),
                "resolve step"
            );
            actions.merge_from(entry);
            class = self.hierarchy.superclass_of(name);
        }
        actions
    }

    /// The class names [`resolve`](Self::resolve) visits for `class`, most-derived first.
    pub fn ancestry<'a>(&'a self, class: &'a str) -> Vec<&'a str> {
        let mut out = Vec::new();
        let mut cur = Some(class);
        // Collect to root; the lookup guarantees an acyclic chain.
        while let Some(name) = cur {
            out.push(name);
            cur = self.hierarchy.superclass_of(name);
        }
        out
    }

    fn class_entry_mut(&mut self, class: &str) -> &mut ActionSet {
        self.classes.entry(String::from(class)).or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NoSuperclass;
    use alloc::rc::Rc;
    use alloc::vec;
    use bindery_model::IndexPath;
    use core::cell::Cell;

    struct Widget {
        key: ObjectKey,
        class: &'static str,
    }

    impl Widget {
        fn new(class: &'static str) -> Self {
            Self {
                key: ObjectKey::next(),
                class,
            }
        }
    }

    impl Subject for Widget {
        fn object_key(&self) -> ObjectKey {
            self.key
        }
        fn class_name(&self) -> &str {
            self.class
        }
    }

    const AT: IndexPath = IndexPath::new(0, 0);

    fn hierarchy() -> ClassTable {
        let mut t = ClassTable::new();
        let object = t.declare("Object", None).unwrap();
        let base = t.declare("Base", Some(object)).unwrap();
        t.declare("Derived", Some(base)).unwrap();
        t
    }

    #[test]
    fn unregistered_object_has_no_actions() {
        let actions: Actions = Actions::with_hierarchy(hierarchy());
        let w = Widget::new("Derived");
        assert!(!actions.resolve(&w).has_actions());
        assert!(!actions.is_actionable(&w));
    }

    #[test]
    fn attached_tap_is_the_one_invoked() {
        let mut actions: Actions = Actions::new();
        let w = Widget::new("Loose");
        let hits = Rc::new(Cell::new(0));
        let h = Rc::clone(&hits);
        actions.attach_to_object(
            &w,
            Action::tap(move |_, _| {
                h.set(h.get() + 1);
                true
            }),
        );
        let set = actions.resolve(&w);
        assert!(set.has_tap_action());
        assert_eq!(set.perform_tap(&w, AT), Some(true));
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn subclass_inherits_base_tap_and_keeps_own_detail() {
        let mut actions = Actions::with_hierarchy(hierarchy());
        actions.attach_to_class("Base", Action::tap(|_, _| true));
        actions.attach_to_class("Derived", Action::detail(|_, _| {}));

        let set = actions.resolve(&Widget::new("Derived"));
        assert!(set.has_tap_action());
        assert!(set.has_detail_action());
        assert!(!set.has_navigate_action());

        // Base instances see only the base tap.
        let base = actions.resolve(&Widget::new("Base"));
        assert!(base.has_tap_action());
        assert!(!base.has_detail_action());
    }

    #[test]
    fn object_tap_overrides_only_tap_slot() {
        let mut actions = Actions::with_hierarchy(hierarchy());
        actions.attach_to_class("Base", Action::tap(|_, _| true));
        actions.attach_to_class("Derived", Action::detail(|_, _| {}));
        let w = Widget::new("Derived");
        actions.attach_to_object(&w, Action::tap(|_, _| false));

        let set = actions.resolve(&w);
        assert_eq!(set.perform_tap(&w, AT), Some(false));
        assert!(set.has_detail_action());
    }

    #[test]
    fn object_handler_shadows_class_handler() {
        let class_calls = Rc::new(Cell::new(0));
        let mut actions: Actions = Actions::new();
        let c = Rc::clone(&class_calls);
        actions.attach_to_class(
            "Widget",
            Action::tap(move |_, _| {
                c.set(c.get() + 1);
                true
            }),
        );
        let w = Widget::new("Widget");
        actions.attach_to_object(&w, Action::tap(|_, _| false));

        assert_eq!(actions.resolve(&w).perform_tap(&w, AT), Some(false));
        assert_eq!(class_calls.get(), 0);

        // Another instance still gets the class handler.
        let other = Widget::new("Widget");
        assert_eq!(actions.resolve(&other).perform_tap(&other, AT), Some(true));
        assert_eq!(class_calls.get(), 1);
    }

    #[test]
    fn removing_object_actions_falls_back_to_classes() {
        let mut actions = Actions::with_hierarchy(hierarchy());
        actions.attach_to_class("Base", Action::navigate(|_, _| {}));
        let w = Widget::new("Derived");
        actions.attach_to_object(&w, Action::tap(|_, _| true));
        actions.attach_to_object(&w, Action::detail(|_, _| {}));

        actions.remove_all_actions_for_object(&w);
        let set = actions.resolve(&w);
        assert!(!set.has_tap_action());
        assert!(!set.has_detail_action());
        assert!(set.has_navigate_action());
        assert!(actions.object_entry(w.key).is_some());

        actions.remove_all_actions_for_class("Base");
        assert!(!actions.is_actionable(&w));
    }

    #[test]
    fn removing_unknown_entries_creates_nothing() {
        let mut actions: Actions = Actions::new();
        let w = Widget::new("Ghost");
        actions.remove_all_actions_for_object(&w);
        actions.remove_all_actions_for_class("Ghost");
        assert!(actions.object_entry(w.key).is_none());
        assert!(actions.class_entry("Ghost").is_none());
    }

    #[test]
    fn attach_overwrites_same_slot_for_same_key() {
        let mut actions: Actions = Actions::new();
        let w = Widget::new("Any");
        actions.attach_to_object(&w, Action::tap(|_, _| true));
        actions.attach_to_object(&w, Action::tap(|_, _| false));
        assert_eq!(actions.resolve(&w).perform_tap(&w, AT), Some(false));
    }

    #[test]
    fn enabled_flag_is_stored_but_not_enforced() {
        let mut actions: Actions = Actions::new();
        let w = Widget::new("Any");
        actions.set_object_enabled(&w, false);
        actions.set_class_enabled("Any", false);
        assert_eq!(actions.object_entry(w.key).map(ActionSet::is_enabled), Some(false));
        assert_eq!(
            actions.class_entry("Any").map(ActionSet::is_enabled),
            Some(false)
        );

        actions.attach_to_object(&w, Action::tap(|_, _| true));
        let set = actions.resolve(&w);
        assert!(set.is_enabled());
        assert_eq!(set.perform_tap(&w, AT), Some(true));
        assert_eq!(actions.object_entry(w.key).map(ActionSet::is_enabled), Some(false));
    }

    #[test]
    fn resolve_is_idempotent() {
        let mut actions = Actions::with_hierarchy(hierarchy());
        actions.attach_to_class("Object", Action::detail(|_, _| {}));
        let w = Widget::new("Derived");
        actions.attach_to_object(&w, Action::tap(|_, _| true));
        let a = actions.resolve(&w);
        let b = actions.resolve(&w);
        assert_eq!(a.kinds(), b.kinds());
        assert_eq!(a.perform_tap(&w, AT), b.perform_tap(&w, AT));
    }

    #[test]
    fn dropped_targeted_tap_still_reports_a_result() {
        let mut actions: Actions = Actions::new();
        let w = Widget::new("Any");
        let screen = Rc::new(());
        actions.attach_to_object(&w, Action::tap_on(&screen, |_, _, _| true));
        drop(screen);
        let set = actions.resolve(&w);
        assert!(set.has_tap_action());
        assert_eq!(set.perform_tap(&w, AT), Some(false));
    }

    #[test]
    fn equal_instances_are_distinct_keys() {
        let mut actions: Actions = Actions::new();
        let a = Widget {
            key: ObjectKey::from_raw(100),
            class: "Same",
        };
        let b = Widget {
            key: ObjectKey::from_raw(101),
            class: "Same",
        };
        actions.attach_to_object(&a, Action::tap(|_, _| true));
        assert!(actions.is_actionable(&a));
        assert!(!actions.is_actionable(&b));
    }

    #[test]
    fn no_superclass_consults_only_own_class() {
        let mut actions: Actions<NoSuperclass> = Actions::new();
        actions.attach_to_class("Base", Action::tap(|_, _| true));
        assert!(!actions.is_actionable(&Widget::new("Derived")));
        assert!(actions.is_actionable(&Widget::new("Base")));
        assert_eq!(actions.ancestry("Derived"), vec!["Derived"]);
    }

    #[test]
    fn ancestry_follows_declared_chain() {
        let actions = Actions::with_hierarchy(hierarchy());
        assert_eq!(actions.ancestry("Derived"), vec!["Derived", "Base", "Object"]);
        assert_eq!(actions.ancestry("Undeclared"), vec!["Undeclared"]);
    }

    #[test]
    fn classes_declared_after_construction_take_part() {
        let mut actions: Actions = Actions::new();
        actions.attach_to_class("Root", Action::navigate(|_, _| {}));
        let w = Widget::new("Leaf");
        assert!(!actions.is_actionable(&w));

        let classes = actions.hierarchy_mut();
        let root = classes.declare("Root", None).unwrap();
        classes.declare("Leaf", Some(root)).unwrap();
        assert!(actions.resolve(&w).has_navigate_action());
    }

    #[test]
    fn attach_to_type_matches_default_class_name() {
        struct Plain(ObjectKey);
        impl Subject for Plain {
            fn object_key(&self) -> ObjectKey {
                self.0
            }
        }
        let mut actions: Actions = Actions::new();
        actions.attach_to_type::<Plain>(Action::detail(|_, _| {}));
        assert!(actions.resolve(&Plain(ObjectKey::next())).has_detail_action());
    }

    #[test]
    fn resolve_accepts_trait_objects() {
        let mut actions: Actions = Actions::new();
        let w: Rc<dyn Subject> = Rc::new(Widget::new("Dyn"));
        actions.attach_to_class("Dyn", Action::tap(|_, _| true));
        assert!(actions.is_actionable(&*w));
        assert_eq!(actions.resolve(&*w).perform_tap(&*w, AT), Some(true));
    }
}
