// Copyright 2025 the Bindery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Action handlers: direct callbacks and weakly targeted callbacks.
//!
//! ## Forms
//!
//! - [`Direct`] owns its callback.
//! - [`Targeted`] holds a non-owning reference to a target object and a
//!   function that is handed the target when it is still alive. Attaching a
//!   targeted handler never extends the target's lifetime.
//!
//! Tap handlers return `bool` (whether the row should be deselected);
//! navigate and detail handlers return `()`.
//!
//! ## Minimal example
//!
//! ```
//! use std::rc::Rc;
//! use bindery_actions::handler::Targeted;
//! use bindery_actions::types::{ObjectKey, Subject};
//! use bindery_model::IndexPath;
//!
//! struct Row(ObjectKey);
//! impl Subject for Row {
//!     fn object_key(&self) -> ObjectKey { self.0 }
//! }
//!
//! struct Screen;
//! impl Screen {
//!     fn open(&self, _row: &dyn Subject, _at: IndexPath) -> bool { true }
//! }
//!
//! let screen = Rc::new(Screen);
//! let tap = Targeted::new(&screen, Screen::open);
//! let row = Row(ObjectKey::next());
//! assert_eq!(tap.invoke(&row, IndexPath::new(0, 0)), Some(true));
//!
//! drop(screen);
//! assert_eq!(tap.invoke(&row, IndexPath::new(0, 0)), None);
//! ```

use alloc::rc::{Rc, Weak};
use core::any::Any;

use bindery_model::IndexPath;

use crate::types::{ActionKind, Subject};

/// A callback invoked with the subject and its position.
pub struct Direct<R> {
    call: Rc<dyn Fn(&dyn Subject, IndexPath) -> R>,
}

impl<R> Direct<R> {
    /// Wrap a callback.
    pub fn new(call: impl Fn(&dyn Subject, IndexPath) -> R + 'static) -> Self {
        Self {
            call: Rc::new(call),
        }
    }

    /// Invoke the callback.
    pub fn invoke(&self, subject: &dyn Subject, at: IndexPath) -> R {
        (self.call)(subject, at)
    }
}

impl<R> Clone for Direct<R> {
    fn clone(&self) -> Self {
        Self {
            call: Rc::clone(&self.call),
        }
    }
}

impl<R> core::fmt::Debug for Direct<R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Direct").finish_non_exhaustive()
    }
}

/// A callback bound to a weakly held target.
pub struct Targeted<R> {
    target: Weak<dyn Any>,
    call: Rc<dyn Fn(&dyn Any, &dyn Subject, IndexPath) -> Option<R>>,
}

impl<R> Targeted<R> {
    /// Bind `call` to a weak reference to `target`.
    ///
    /// `call` receives the live target first, so a method path such as
    /// `Screen::on_tap` can be passed directly.
    pub fn new<T: Any>(
        target: &Rc<T>,
        call: impl Fn(&T, &dyn Subject, IndexPath) -> R + 'static,
    ) -> Self
    where
        R: 'static,
    {
        let weak: Weak<T> = Rc::downgrade(target);
        Self {
            target: weak,
            call: Rc::new(move |target: &dyn Any, subject: &dyn Subject, at: IndexPath| {
                target.downcast_ref::<T>().map(|t| call(t, subject, at))
            }),
        }
    }

    /// Returns true if the target has not been dropped.
    pub fn is_target_alive(&self) -> bool {
        self.target.strong_count() > 0
    }

    /// Invoke the callback if the target is still alive.
    ///
    /// Returns `None` when the target has been dropped; the callback is not run.
    pub fn invoke(&self, subject: &dyn Subject, at: IndexPath) -> Option<R> {
        let target = self.target.upgrade()?;
        (self.call)(&*target, subject, at)
    }
}

impl<R> Clone for Targeted<R> {
    fn clone(&self) -> Self {
        Self {
            target: Weak::clone(&self.target),
            call: Rc::clone(&self.call),
        }
    }
}

impl<R> core::fmt::Debug for Targeted<R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Targeted")
            .field("alive", &self.is_target_alive())
            .finish_non_exhaustive()
    }
}

/// Either form of handler.
#[derive(Debug)]
pub enum Handler<R> {
    /// An owned callback.
    Direct(Direct<R>),
    /// A callback bound to a weakly held target.
    Targeted(Targeted<R>),
}

impl<R> Clone for Handler<R> {
    fn clone(&self) -> Self {
        match self {
            Self::Direct(d) => Self::Direct(d.clone()),
            Self::Targeted(t) => Self::Targeted(t.clone()),
        }
    }
}

impl<R> From<Direct<R>> for Handler<R> {
    fn from(d: Direct<R>) -> Self {
        Self::Direct(d)
    }
}

impl<R> From<Targeted<R>> for Handler<R> {
    fn from(t: Targeted<R>) -> Self {
        Self::Targeted(t)
    }
}

/// A handler paired with the slot it fills.
///
/// This is what [`Actions::attach_to_object`](crate::registry::Actions::attach_to_object)
/// and [`Actions::attach_to_class`](crate::registry::Actions::attach_to_class) take.
#[derive(Clone, Debug)]
pub enum Action {
    /// Tap handler; returns whether the row should be deselected.
    Tap(Handler<bool>),
    /// Navigate handler.
    Navigate(Handler<()>),
    /// Detail (accessory) handler.
    Detail(Handler<()>),
}

impl Action {
    /// A direct tap handler.
    pub fn tap(call: impl Fn(&dyn Subject, IndexPath) -> bool + 'static) -> Self {
        Self::Tap(Direct::new(call).into())
    }

    /// A direct navigate handler.
    pub fn navigate(call: impl Fn(&dyn Subject, IndexPath) + 'static) -> Self {
        Self::Navigate(Direct::new(call).into())
    }

    /// A direct detail handler.
    pub fn detail(call: impl Fn(&dyn Subject, IndexPath) + 'static) -> Self {
        Self::Detail(Direct::new(call).into())
    }

    /// A tap handler bound to a weakly held target.
    pub fn tap_on<T: Any>(
        target: &Rc<T>,
        call: impl Fn(&T, &dyn Subject, IndexPath) -> bool + 'static,
    ) -> Self {
        Self::Tap(Targeted::new(target, call).into())
    }

    /// A navigate handler bound to a weakly held target.
    pub fn navigate_on<T: Any>(
        target: &Rc<T>,
        call: impl Fn(&T, &dyn Subject, IndexPath) + 'static,
    ) -> Self {
        Self::Navigate(Targeted::new(target, call).into())
    }

    /// A detail handler bound to a weakly held target.
    pub fn detail_on<T: Any>(
        target: &Rc<T>,
        call: impl Fn(&T, &dyn Subject, IndexPath) + 'static,
    ) -> Self {
        Self::Detail(Targeted::new(target, call).into())
    }

    /// The slot this action fills.
    pub fn kind(&self) -> ActionKind {
        match self {
            Self::Tap(_) => ActionKind::Tap,
            Self::Navigate(_) => ActionKind::Navigate,
            Self::Detail(_) => ActionKind::Detail,
        }
    }

    /// Returns true if this is a [`Targeted`] handler.
    pub fn is_targeted(&self) -> bool {
        matches!(
            self,
            Self::Tap(Handler::Targeted(_))
                | Self::Navigate(Handler::Targeted(_))
                | Self::Detail(Handler::Targeted(_))
        )
    }
}
