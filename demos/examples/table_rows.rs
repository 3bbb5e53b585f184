// Copyright 2025 the Bindery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Table rows.
//!
//! Builds a sectioned model of heterogeneous rows and drives it the way a
//! table view delegate would: appearance on display, then selection and
//! accessory taps.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p bindery_demos --example table_rows`

use std::cell::Cell;
use std::rc::Rc;

use bindery_actions::adapters::table::{
    accessory_tapped, did_select, path_of_subject, will_display,
};
use bindery_actions::{Action, Actions, ObjectKey, Subject};
use bindery_model::{IndexPath, Model, SectionedSource};
use tracing_subscriber::EnvFilter;

struct Toggle {
    key: ObjectKey,
    label: &'static str,
    on: Cell<bool>,
}

impl Subject for Toggle {
    fn object_key(&self) -> ObjectKey {
        self.key
    }
}

struct Link {
    key: ObjectKey,
    label: &'static str,
}

impl Subject for Link {
    fn object_key(&self) -> ObjectKey {
        self.key
    }
}

fn label(row: &dyn Subject) -> &'static str {
    if let Some(t) = row.downcast_ref::<Toggle>() {
        t.label
    } else if let Some(l) = row.downcast_ref::<Link>() {
        l.label
    } else {
        "?"
    }
}

type Rows = Model<&'static str, &'static str, Rc<dyn Subject>>;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut actions: Actions = Actions::new();
    actions.attach_to_type::<Toggle>(Action::tap(|row, _| {
        if let Some(t) = row.downcast_ref::<Toggle>() {
            t.on.set(!t.on.get());
        }
        true
    }));
    actions.attach_to_type::<Link>(Action::navigate(|row, at| {
        println!("  open {:?} from {at}", label(row));
    }));

    let mut model = Rows::new();
    model.add_object(Rc::new(Toggle {
        key: ObjectKey::next(),
        label: "Wi-Fi",
        on: Cell::new(false),
    }));
    model.add_object(Rc::new(Link { key: ObjectKey::next(), label: "Network" }));
    model.add_section_with_header("About");
    let version: Rc<dyn Subject> = Rc::new(Link { key: ObjectKey::next(), label: "Version" });
    let version_key = version.object_key();
    model.add_object(version);
    model.set_footer_for_last_section("Build info");

    // Only this row gets a detail button.
    if let Some(at) = path_of_subject(&model, version_key)
        && let Some(row) = model.object_at(at)
    {
        actions.attach_to_object(
            &**row,
            Action::detail(|row, at| println!("  details for {:?} at {at}", label(row))),
        );
    }

    println!("== Display ==");
    for section in 0..model.section_count() {
        if let Some(header) = model.header_at(section) {
            println!("[{header}]");
        }
        for row in 0..model.row_count(section).unwrap_or(0) {
            let at = IndexPath::new(section, row);
            let Some(object) = model.object_at(at) else {
                continue;
            };
            let look = will_display(&actions, &model, at);
            println!(
                "  {at} {:<8} accessory={:?} selectable={}",
                label(&**object),
                look.accessory,
                look.is_selectable()
            );
        }
        if let Some(footer) = model.footer_at(section) {
            println!("({footer})");
        }
    }

    println!("== Interaction ==");
    let sel = did_select(&actions, &model, IndexPath::new(0, 0));
    println!("  toggled, deselect={}", sel.should_deselect());
    did_select(&actions, &model, IndexPath::new(0, 1));
    accessory_tapped(&actions, &model, IndexPath::new(1, 0));

    if let Some(t) = model
        .object_at(IndexPath::new(0, 0))
        .and_then(|row| row.downcast_ref::<Toggle>())
    {
        println!("  Wi-Fi on: {}", t.on.get());
    }

    // Removing a row shifts its neighbors; object actions follow the object.
    match model.remove_object_at(IndexPath::new(0, 0)) {
        Ok(removed) => println!("  removed {:?}", label(&*removed)),
        Err(err) => println!("  {err}"),
    }
    if let Err(err) = model.remove_object_at(IndexPath::new(5, 0)) {
        println!("  {err}");
    }
    tracing::info!(sections = model.section_count(), rows = model.len(), "done");
}
