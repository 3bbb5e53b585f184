// Copyright 2025 the Bindery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::rc::Rc;

use bindery_actions::adapters::table::{did_select, path_of_subject, will_display};
use bindery_actions::{Action, Actions, ObjectKey, Subject};
use bindery_model::{IndexPath, Model};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

struct Plain(ObjectKey);

impl Subject for Plain {
    fn object_key(&self) -> ObjectKey {
        self.0
    }
}

struct Link(ObjectKey);

impl Subject for Link {
    fn object_key(&self) -> ObjectKey {
        self.0
    }
}

type Rows = Model<String, (), Rc<dyn Subject>>;

fn rows(sections: usize, per_section: usize) -> Rows {
    let mut model = Rows::new();
    for s in 0..sections {
        if s > 0 {
            model.add_section_with_header(format!("Section {s}"));
        }
        for r in 0..per_section {
            let row: Rc<dyn Subject> = if r % 2 == 0 {
                Rc::new(Plain(ObjectKey::next()))
            } else {
                Rc::new(Link(ObjectKey::next()))
            };
            model.add_object(row);
        }
    }
    model
}

fn bench_table(c: &mut Criterion) {
    let mut actions: Actions = Actions::new();
    actions.attach_to_type::<Plain>(Action::tap(|_, _| true));
    actions.attach_to_type::<Link>(Action::navigate(|_, _| {}));
    let model = rows(8, 128);

    c.bench_function("will_display_all_rows", |b| {
        b.iter(|| {
            for s in 0..8 {
                for r in 0..128 {
                    black_box(will_display(&actions, &model, IndexPath::new(s, r)));
                }
            }
        });
    });

    c.bench_function("did_select_row", |b| {
        b.iter(|| black_box(did_select(&actions, &model, black_box(IndexPath::new(3, 17)))));
    });

    let last = model.sections()[7].objects[127].object_key();
    c.bench_function("path_of_subject_last", |b| {
        b.iter(|| black_box(path_of_subject(&model, black_box(last))));
    });
}

criterion_group!(benches, bench_table);
criterion_main!(benches);
