// Copyright 2025 the Bindery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Action basics.
//!
//! Declares a small class hierarchy, attaches actions to classes and to one
//! object, and prints what each row resolves to.
//!
//! Run:
//! - `RUST_LOG=trace cargo run -p bindery_demos --example actions_basics`

use std::rc::Rc;

use bindery_actions::{Action, ActionKinds, Actions, ClassTable, ObjectKey, Subject};
use bindery_model::IndexPath;
use tracing_subscriber::EnvFilter;

struct Row {
    key: ObjectKey,
    class: &'static str,
    title: &'static str,
}

impl Subject for Row {
    fn object_key(&self) -> ObjectKey {
        self.key
    }
    fn class_name(&self) -> &str {
        self.class
    }
}

struct Navigator {
    name: &'static str,
}

impl Navigator {
    fn push(&self, row: &dyn Subject, at: IndexPath) {
        let title = row.downcast_ref::<Row>().map_or("?", |r| r.title);
        println!("  [{}] push screen for {title:?} at {at}", self.name);
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut classes = ClassTable::new();
    let row = classes.declare("Row", None).expect("fresh table");
    let link = classes.declare("LinkRow", Some(row)).expect("Row is declared");
    classes
        .declare("InfoRow", Some(link))
        .expect("LinkRow is declared");

    let navigator = Rc::new(Navigator { name: "main" });
    let mut actions = Actions::with_hierarchy(classes);
    actions.attach_to_class(
        "Row",
        Action::tap(|row, at| {
            println!("  tap {:?} at {at}", row.class_name());
            true
        }),
    );
    actions.attach_to_class("LinkRow", Action::navigate_on(&navigator, Navigator::push));
    actions.attach_to_class(
        "InfoRow",
        Action::detail(|_, at| println!("  detail at {at}")),
    );

    let rows = [
        Row { key: ObjectKey::next(), class: "Row", title: "Plain" },
        Row { key: ObjectKey::next(), class: "LinkRow", title: "Settings" },
        Row { key: ObjectKey::next(), class: "InfoRow", title: "About" },
    ];

    // This one row keeps its class actions but taps differently.
    actions.attach_to_object(
        &rows[1],
        Action::tap(|_, _| {
            println!("  tap overridden for this row");
            false
        }),
    );

    println!("== Resolved actions ==");
    for (i, row) in rows.iter().enumerate() {
        let at = IndexPath::new(0, i);
        let set = actions.resolve(row);
        println!(
            "{:<9} chain={:?} kinds={:?}",
            row.title,
            actions.ancestry(row.class_name()),
            set.kinds()
        );
        if let Some(deselect) = set.perform_tap(row, at) {
            println!("  deselect={deselect}");
        }
        set.perform_navigate(row, at);
        if set.kinds().contains(ActionKinds::DETAIL) {
            set.perform_detail(row, at);
        }
    }

    println!("== After the navigator is dropped ==");
    drop(navigator);
    let set = actions.resolve(&rows[2]);
    set.perform_navigate(&rows[2], IndexPath::new(0, 2));
    println!("  navigate handler still attached: {}", set.has_navigate_action());
}
