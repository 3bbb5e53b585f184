// Copyright 2025 the Bindery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Action sets: up to three behaviors attributed to one object or one class.
//!
//! Each behavior has two independent slots, one per handler form
//! ([`Direct`] and [`Targeted`]), six slots in total. Merging fills unset
//! slots only; dispatch runs the direct handler first, then the targeted one.

use bindery_model::IndexPath;

use crate::handler::{Action, Direct, Handler, Targeted};
use crate::types::{ActionKind, ActionKinds, Subject};

/// The two handler slots of one behavior.
pub(crate) struct Slot<R> {
    direct: Option<Direct<R>>,
    targeted: Option<Targeted<R>>,
}

impl<R> Slot<R> {
    const fn empty() -> Self {
        Self {
            direct: None,
            targeted: None,
        }
    }

    fn is_set(&self) -> bool {
        self.direct.is_some() || self.targeted.is_some()
    }

    fn set(&mut self, handler: Handler<R>) {
        match handler {
            Handler::Direct(d) => self.direct = Some(d),
            Handler::Targeted(t) => self.targeted = Some(t),
        }
    }

    fn fill_from(&mut self, other: &Self) {
        if self.direct.is_none() {
            self.direct.clone_from(&other.direct);
        }
        if self.targeted.is_none() {
            self.targeted.clone_from(&other.targeted);
        }
    }

    fn clear(&mut self) {
        self.direct = None;
        self.targeted = None;
    }
}

impl<R> Clone for Slot<R> {
    fn clone(&self) -> Self {
        Self {
            direct: self.direct.clone(),
            targeted: self.targeted.clone(),
        }
    }
}

/// Up to three optional behaviors plus an `enabled` flag.
///
/// `ActionSet` has no identity; the [registry](crate::registry::Actions) stores
/// one per object key and one per class name, and
/// [`Actions::resolve`](crate::registry::Actions::resolve) produces a transient
/// merged set for a subject.
///
/// ## `enabled`
///
/// The flag is stored and preserved across [`reset`](Self::reset), but no
/// query or dispatch method consults it, and [`merge_from`](Self::merge_from)
/// does not carry it over. Callers that want to suppress dispatch must check
/// [`is_enabled`](Self::is_enabled) on the registry entry themselves.
#[derive(Clone)]
pub struct ActionSet {
    tap: Slot<bool>,
    navigate: Slot<()>,
    detail: Slot<()>,
    enabled: bool,
}

impl Default for ActionSet {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for ActionSet {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ActionSet")
            .field("kinds", &self.kinds())
            .field("enabled", &self.enabled)
            .finish_non_exhaustive()
    }
}

impl ActionSet {
    /// An empty, enabled set.
    pub const fn new() -> Self {
        Self {
            tap: Slot::empty(),
            navigate: Slot::empty(),
            detail: Slot::empty(),
            enabled: true,
        }
    }

    /// Returns true if a tap handler (either form) is present.
    pub fn has_tap_action(&self) -> bool {
        self.tap.is_set()
    }

    /// Returns true if a navigate handler (either form) is present.
    pub fn has_navigate_action(&self) -> bool {
        self.navigate.is_set()
    }

    /// Returns true if a detail handler (either form) is present.
    pub fn has_detail_action(&self) -> bool {
        self.detail.is_set()
    }

    /// Returns true if any handler is present.
    pub fn has_actions(&self) -> bool {
        self.has_tap_action() || self.has_navigate_action() || self.has_detail_action()
    }

    /// Returns true if a handler of `kind` is present.
    pub fn has(&self, kind: ActionKind) -> bool {
        match kind {
            ActionKind::Tap => self.has_tap_action(),
            ActionKind::Navigate => self.has_navigate_action(),
            ActionKind::Detail => self.has_detail_action(),
        }
    }

    /// The kinds with at least one handler present.
    pub fn kinds(&self) -> ActionKinds {
        let mut kinds = ActionKinds::empty();
        kinds.set(ActionKinds::TAP, self.has_tap_action());
        kinds.set(ActionKinds::NAVIGATE, self.has_navigate_action());
        kinds.set(ActionKinds::DETAIL, self.has_detail_action());
        kinds
    }

    /// The stored `enabled` flag. Advisory only; see the type docs.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Set the `enabled` flag.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Overwrite the slot named by `action` with its handler.
    ///
    /// Only the slot matching the handler's form is replaced; the other form's
    /// slot for the same behavior is left as is.
    pub fn set(&mut self, action: Action) {
        match action {
            Action::Tap(h) => self.tap.set(h),
            Action::Navigate(h) => self.navigate.set(h),
            Action::Detail(h) => self.detail.set(h),
        }
    }

    /// Run the tap handlers.
    ///
    /// Returns `None` when no tap handler is present. Otherwise both present
    /// handlers run (direct first) and their results are OR'd; a targeted
    /// handler whose target has been dropped contributes `false`.
    pub fn perform_tap(&self, subject: &dyn Subject, at: IndexPath) -> Option<bool> {
        if !self.has_tap_action() {
            return None;
        }
        let mut should_deselect = false;
        if let Some(direct) = &self.tap.direct {
            should_deselect |= direct.invoke(subject, at);
        }
        if let Some(targeted) = &self.tap.targeted {
            should_deselect |= invoke_targeted(targeted, ActionKind::Tap, subject, at)
                .unwrap_or(false);
        }
        Some(should_deselect)
    }

    /// Run the navigate handlers, direct first.
    pub fn perform_navigate(&self, subject: &dyn Subject, at: IndexPath) {
        perform_void(&self.navigate, ActionKind::Navigate, subject, at);
    }

    /// Run the detail handlers, direct first.
    pub fn perform_detail(&self, subject: &dyn Subject, at: IndexPath) {
        perform_void(&self.detail, ActionKind::Detail, subject, at);
    }

    /// Fill each unset handler slot from `other`.
    ///
    /// Never overwrites a slot that is already set, and leaves `enabled`
    /// untouched. No-op when `other` is `None`.
    pub fn merge_from(&mut self, other: Option<&Self>) {
        let Some(other) = other else {
            return;
        };
        self.tap.fill_from(&other.tap);
        self.navigate.fill_from(&other.navigate);
        self.detail.fill_from(&other.detail);
    }

    /// Clear all six handler slots. `enabled` is kept.
    pub fn reset(&mut self) {
        self.tap.clear();
        self.navigate.clear();
        self.detail.clear();
    }
}

fn perform_void(slot: &Slot<()>, kind: ActionKind, subject: &dyn Subject, at: IndexPath) {
    if let Some(direct) = &slot.direct {
        direct.invoke(subject, at);
    }
    if let Some(targeted) = &slot.targeted {
        invoke_targeted(targeted, kind, subject, at);
    }
}

fn invoke_targeted<R>(
    targeted: &Targeted<R>,
    kind: ActionKind,
    subject: &dyn Subject,
    at: IndexPath,
) -> Option<R> {
    let out = targeted.invoke(subject, at);
    if out.is_none() {
        tracing::warn!(
            ?kind,
            key = subject.object_key().to_raw(),
            %at,
            "targeted handler skipped: target dropped"
        );
    }
    out
}
