// Copyright 2025 the Bindery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Class table: an explicitly declared class hierarchy.
//!
//! ## Overview
//!
//! Rust has no runtime class ancestry, so subjects that want class-level
//! actions inherited from a "base class" declare the chain here. Each class is
//! a node with a name and an optional superclass pointer. The registry walks
//! these pointers from a subject's [`class_name`](crate::types::Subject::class_name)
//! to the root.
//!
//! A superclass must be declared before its subclasses, which keeps the
//! chain acyclic by construction.
//!
//! Every table carries its own identity, and [`ClassId`] handles record the
//! table that issued them. Handles from another table are rejected by
//! [`ClassTable::declare`] and treated as unknown by the accessors.
//!
//! ## Example
//!
//! ```
//! use bindery_actions::classes::ClassTable;
//!
//! let mut classes = ClassTable::new();
//! let object = classes.declare("Object", None).unwrap();
//! let widget = classes.declare("Widget", Some(object)).unwrap();
//! let detail = classes.declare("DetailWidget", Some(widget)).unwrap();
//!
//! let names: Vec<&str> = classes.ancestors(detail).map(|c| classes.name(c)).collect();
//! assert_eq!(names, ["DetailWidget", "Widget", "Object"]);
//! ```

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use core::any::type_name;
use core::sync::atomic::{AtomicU32, Ordering};

use crate::types::SuperclassLookup;

/// Handle of a class declared in a [`ClassTable`].
///
/// Handles are only meaningful for the table that issued them (and its clones).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ClassId {
    table: u32,
    index: u32,
}

impl ClassId {
    const fn idx(self) -> usize {
        self.index as usize
    }
}

static NEXT_TABLE: AtomicU32 = AtomicU32::new(1);

/// Errors returned by [`ClassTable::declare`].
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ClassError {
    /// A class with this name is already declared.
    #[error("class `{name}` is already declared")]
    DuplicateClass {
        /// The conflicting name.
        name: String,
    },
    /// The superclass handle was not issued by this table.
    #[error("superclass {superclass:?} is not declared in this table")]
    UnknownSuperclass {
        /// The unknown handle.
        superclass: ClassId,
    },
}

#[derive(Clone, Debug)]
struct ClassNode {
    name: String,
    superclass: Option<ClassId>,
}

/// Declared classes and their superclass pointers.
///
/// A clone keeps the identity of the original, so handles issued before the
/// clone stay valid in both.
#[derive(Clone, Debug)]
pub struct ClassTable {
    id: u32,
    nodes: Vec<ClassNode>,
    by_name: BTreeMap<String, ClassId>,
}

impl Default for ClassTable {
    fn default() -> Self {
        Self {
            id: NEXT_TABLE.fetch_add(1, Ordering::Relaxed),
            nodes: Vec::new(),
            by_name: BTreeMap::new(),
        }
    }
}

impl ClassTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a class named `name` under `superclass` (or as a root).
    pub fn declare(
        &mut self,
        name: impl Into<String>,
        superclass: Option<ClassId>,
    ) -> Result<ClassId, ClassError> {
        let name = name.into();
        if self.by_name.contains_key(&name) {
            return Err(ClassError::DuplicateClass { name });
        }
        if let Some(sup) = superclass
            && self.node(sup).is_none()
        {
            return Err(ClassError::UnknownSuperclass { superclass: sup });
        }
        #[expect(
            clippy::cast_possible_truncation,
            reason = "class counts stay far below u32::MAX"
        )]
        let id = ClassId {
            table: self.id,
            index: self.nodes.len() as u32,
        };
        tracing::debug!(class = %name, ?superclass, "declared class");
        self.by_name.insert(name.clone(), id);
        self.nodes.push(ClassNode { name, superclass });
        Ok(id)
    }

    /// Declare the Rust type `T` under `superclass`, named by [`type_name`].
    ///
    /// This matches the default [`Subject::class_name`](crate::types::Subject::class_name).
    pub fn declare_type<T: ?Sized>(
        &mut self,
        superclass: Option<ClassId>,
    ) -> Result<ClassId, ClassError> {
        self.declare(type_name::<T>(), superclass)
    }

    /// Find a class by name.
    pub fn lookup(&self, name: &str) -> Option<ClassId> {
        self.by_name.get(name).copied()
    }

    /// Find the class declared for the Rust type `T`.
    pub fn lookup_type<T: ?Sized>(&self) -> Option<ClassId> {
        self.lookup(type_name::<T>())
    }

    /// Name of `class`.
    ///
    /// Handles from another table return an empty string.
    pub fn name(&self, class: ClassId) -> &str {
        self.node(class)
            .map(|n| n.name.as_str())
            .unwrap_or_default()
    }

    /// Superclass of `class`, or `None` for a root or a foreign handle.
    pub fn superclass(&self, class: ClassId) -> Option<ClassId> {
        self.node(class)?.superclass
    }

    /// Iterate `class` and its ancestors, most-derived first, ending at the root.
    pub fn ancestors(&self, class: ClassId) -> Ancestors<'_> {
        Ancestors {
            table: self,
            next: self.node(class).map(|_| class),
        }
    }

    /// Returns true if `class` is `ancestor` or one of its subclasses.
    pub fn is_subclass_of(&self, class: ClassId, ancestor: ClassId) -> bool {
        self.ancestors(class).any(|c| c == ancestor)
    }

    /// Number of declared classes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if no class has been declared.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn node(&self, class: ClassId) -> Option<&ClassNode> {
        if class.table != self.id {
            return None;
        }
        self.nodes.get(class.idx())
    }
}

impl SuperclassLookup for ClassTable {
    fn superclass_of(&self, class: &str) -> Option<&str> {
        let id = self.lookup(class)?;
        let sup = self.superclass(id)?;
        Some(self.name(sup))
    }
}

/// Iterator over a class and its ancestors. See [`ClassTable::ancestors`].
#[derive(Clone, Debug)]
pub struct Ancestors<'a> {
    table: &'a ClassTable,
    next: Option<ClassId>,
}

impl Iterator for Ancestors<'_> {
    type Item = ClassId;

    fn next(&mut self) -> Option<ClassId> {
        let cur = self.next?;
        self.next = self.table.superclass(cur);
        Some(cur)
    }
}
