// Copyright 2025 the Bindery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for actions: identity keys, subjects, action kinds, and class lookups.
//!
//! ## Overview
//!
//! These types describe what the [`registry`](crate::registry) is keyed by and
//! how it discovers a subject's class ancestry.

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::any::Any;
#[cfg(target_has_atomic = "64")]
use core::sync::atomic::{AtomicU64, Ordering};

/// Stable identity token for a subject.
///
/// Two subjects that compare equal by value are still distinct keys if they
/// carry different `ObjectKey`s. Keys are never derived from content.
///
/// ## Minting
///
/// - [`ObjectKey::next`] hands out a fresh, process-unique key. It needs 64-bit
///   atomics and is absent on targets without them (for example `thumbv6m`).
/// - [`ObjectKey::from_raw`] wraps a handle the caller already owns (for example an arena index).
///   Mixing both sources in one registry is the caller's responsibility.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ObjectKey(u64);

#[cfg(target_has_atomic = "64")]
static NEXT_KEY: AtomicU64 = AtomicU64::new(1);

impl ObjectKey {
    /// Mint a key never returned by a previous call to `next`.
    #[cfg(target_has_atomic = "64")]
    pub fn next() -> Self {
        Self(NEXT_KEY.fetch_add(1, Ordering::Relaxed))
    }

    /// Wrap a caller-owned identity handle.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw token.
    pub const fn to_raw(self) -> u64 {
        self.0
    }
}

/// A row object that actions can be attached to and dispatched on.
///
/// Implementors provide a stable identity and, optionally, a runtime class
/// name. The class name is what the registry walks through its
/// [`SuperclassLookup`]; it defaults to the Rust type name, which is also the
/// name [`ClassTable::declare_type`](crate::classes::ClassTable::declare_type)
/// registers.
pub trait Subject: Any {
    /// Identity of this subject.
    fn object_key(&self) -> ObjectKey;

    /// Name of this subject's most-derived class.
    fn class_name(&self) -> &str {
        core::any::type_name::<Self>()
    }
}

impl dyn Subject {
    /// Downcast to a concrete subject type.
    ///
    /// Handlers receive `&dyn Subject`; use this to get back the row type.
    pub fn downcast_ref<T: Subject>(&self) -> Option<&T> {
        let any: &dyn Any = self;
        any.downcast_ref::<T>()
    }
}

impl core::fmt::Debug for dyn Subject {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Subject")
            .field("key", &self.object_key())
            .field("class", &self.class_name())
            .finish()
    }
}

/// Borrow a row object as a [`Subject`].
///
/// Lets containers hold either concrete subjects or shared trait objects
/// (`Rc<dyn Subject>`, `Box<dyn Subject>`) and still be read by the
/// [table adapter](crate::adapters::table).
pub trait AsSubject {
    /// The row object as a trait object.
    fn as_subject(&self) -> &dyn Subject;
}

impl<T: Subject> AsSubject for T {
    fn as_subject(&self) -> &dyn Subject {
        self
    }
}

impl AsSubject for Rc<dyn Subject> {
    fn as_subject(&self) -> &dyn Subject {
        &**self
    }
}

impl AsSubject for Box<dyn Subject> {
    fn as_subject(&self) -> &dyn Subject {
        &**self
    }
}

/// The three behaviors an [`ActionSet`](crate::set::ActionSet) can carry.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ActionKind {
    /// Row selection; the handler reports whether the row should be deselected.
    Tap,
    /// Row selection that moves to another screen.
    Navigate,
    /// Accessory (detail) button.
    Detail,
}

bitflags::bitflags! {
    /// Set of [`ActionKind`]s present on a resolved action set.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ActionKinds: u8 {
        /// A tap handler is present.
        const TAP      = 0b0000_0001;
        /// A navigate handler is present.
        const NAVIGATE = 0b0000_0010;
        /// A detail handler is present.
        const DETAIL   = 0b0000_0100;
    }
}

impl From<ActionKind> for ActionKinds {
    fn from(kind: ActionKind) -> Self {
        match kind {
            ActionKind::Tap => Self::TAP,
            ActionKind::Navigate => Self::NAVIGATE,
            ActionKind::Detail => Self::DETAIL,
        }
    }
}

/// Look up the superclass of a class by name to walk a subject's ancestry.
///
/// The [registry](crate::registry::Actions) consults this during resolution,
/// starting from [`Subject::class_name`] and stopping at the first `None`.
/// Implementations must describe an acyclic chain.
pub trait SuperclassLookup {
    /// Returns the superclass of `class`, or `None` if `class` is a root or unknown.
    fn superclass_of(&self, class: &str) -> Option<&str>;
}

/// A lookup in which every class is its own root.
///
/// With this lookup only the subject's own class entry takes part in resolution.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoSuperclass;

impl SuperclassLookup for NoSuperclass {
    #[inline]
    fn superclass_of(&self, _class: &str) -> Option<&str> {
        None
    }
}
