// Copyright 2025 the Bindery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Table adapter: row affordances and row dispatch.
//!
//! ## Notes
//!
//! These helpers are what a table view delegate calls per row. They read the
//! row object from any [`SectionedSource`], resolve its actions once, and
//! either describe how the row should look or run its handlers.
//!
//! - [`will_display`]: accessory and selection style for a row about to appear.
//! - [`did_select`]: run `tap`, then `navigate`.
//! - [`accessory_tapped`]: run `detail`.
//!
//! Rows whose path is out of range behave like rows without actions.

use bindery_model::{IndexPath, SectionedSource};

use crate::registry::Actions;
use crate::set::ActionSet;
use crate::types::{ActionKinds, AsSubject, ObjectKey, SuperclassLookup};

/// Trailing accessory shown on a row.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Accessory {
    /// No accessory.
    #[default]
    None,
    /// Chevron: selecting the row navigates.
    DisclosureIndicator,
    /// Detail button: the accessory itself is tappable.
    DetailButton,
}

/// Highlight behavior when a row is selected.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum SelectionStyle {
    /// The row is not highlighted on selection.
    #[default]
    None,
    /// The toolkit's default highlight.
    Default,
}

/// How a row should be presented, derived from its resolved actions.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct RowAppearance {
    /// Trailing accessory.
    pub accessory: Accessory,
    /// Selection highlight.
    pub selection_style: SelectionStyle,
}

impl RowAppearance {
    /// Appearance of a row without actions.
    pub const PLAIN: Self = Self {
        accessory: Accessory::None,
        selection_style: SelectionStyle::None,
    };

    /// Derive the appearance from a resolved action set.
    ///
    /// A detail action wins over navigate for the accessory. The row is
    /// highlighted on selection if it has a tap or navigate action.
    pub fn for_actions(actions: &ActionSet) -> Self {
        Self::for_kinds(actions.kinds())
    }

    /// Derive the appearance from the kinds present.
    pub fn for_kinds(kinds: ActionKinds) -> Self {
        let accessory = if kinds.contains(ActionKinds::DETAIL) {
            Accessory::DetailButton
        } else if kinds.contains(ActionKinds::NAVIGATE) {
            Accessory::DisclosureIndicator
        } else {
            Accessory::None
        };
        let selection_style = if kinds.intersects(ActionKinds::TAP | ActionKinds::NAVIGATE) {
            SelectionStyle::Default
        } else {
            SelectionStyle::None
        };
        Self {
            accessory,
            selection_style,
        }
    }

    /// Returns true if the row reacts to selection.
    pub fn is_selectable(&self) -> bool {
        self.selection_style != SelectionStyle::None
    }
}

/// Outcome of [`did_select`].
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Selection {
    /// Result of the tap handlers, or `None` if the row has no tap action.
    pub tapped: Option<bool>,
    /// Whether navigate handlers were present and run.
    pub navigated: bool,
}

impl Selection {
    /// Returns true if the tap handlers asked for the row to be deselected.
    pub fn should_deselect(&self) -> bool {
        self.tapped == Some(true)
    }
}

/// Appearance for the row at `at`.
///
/// Returns [`RowAppearance::PLAIN`] when there is no object at `at` or it
/// resolves to no actions.
pub fn will_display<H, S>(actions: &Actions<H>, source: &S, at: IndexPath) -> RowAppearance
where
    H: SuperclassLookup,
    S: SectionedSource,
    S::Object: AsSubject,
{
    let Some(object) = source.object_at(at) else {
        return RowAppearance::PLAIN;
    };
    RowAppearance::for_actions(&actions.resolve(object.as_subject()))
}

/// Run the selection handlers for the row at `at`: `tap` first, then `navigate`.
pub fn did_select<H, S>(actions: &Actions<H>, source: &S, at: IndexPath) -> Selection
where
    H: SuperclassLookup,
    S: SectionedSource,
    S::Object: AsSubject,
{
    let Some(object) = source.object_at(at) else {
        return Selection::default();
    };
    let subject = object.as_subject();
    let set = actions.resolve(subject);
    if !set.has_actions() {
        return Selection::default();
    }
    tracing::debug!(key = subject.object_key().to_raw(), %at, kinds = ?set.kinds(), "row selected");
    let tapped = set.perform_tap(subject, at);
    set.perform_navigate(subject, at);
    Selection {
        tapped,
        navigated: set.has_navigate_action(),
    }
}

/// Run the detail handlers for the row at `at`.
///
/// Returns true if the row had a detail action.
pub fn accessory_tapped<H, S>(actions: &Actions<H>, source: &S, at: IndexPath) -> bool
where
    H: SuperclassLookup,
    S: SectionedSource,
    S::Object: AsSubject,
{
    let Some(object) = source.object_at(at) else {
        return false;
    };
    let subject = object.as_subject();
    let set = actions.resolve(subject);
    if !set.has_detail_action() {
        return false;
    }
    tracing::debug!(key = subject.object_key().to_raw(), %at, "accessory tapped");
    set.perform_detail(subject, at);
    true
}

/// Path of the row whose subject has identity `key`.
pub fn path_of_subject<S>(source: &S, key: ObjectKey) -> Option<IndexPath>
where
    S: SectionedSource,
    S::Object: AsSubject,
{
    source.path_where(|o| o.as_subject().object_key() == key)
}
