// Copyright 2025 the Bindery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use bindery_actions::{Action, Actions, ClassTable, NoSuperclass, ObjectKey, Subject};
use bindery_model::IndexPath;
use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};

struct Row {
    key: ObjectKey,
    class: String,
}

impl Subject for Row {
    fn object_key(&self) -> ObjectKey {
        self.key
    }
    fn class_name(&self) -> &str {
        &self.class
    }
}

fn class_name(depth: usize) -> String {
    format!("Class{depth}")
}

/// A single chain `Class{depth-1} -> ... -> Class0`, with one action kind on
/// every third class.
fn chain(depth: usize) -> Actions {
    let mut classes = ClassTable::new();
    let mut sup = None;
    for d in 0..depth {
        sup = Some(
            classes
                .declare(class_name(d), sup)
                .expect("names are unique"),
        );
    }
    let mut actions = Actions::with_hierarchy(classes);
    for d in (0..depth).step_by(3) {
        let name = class_name(d);
        match d % 9 {
            0 => actions.attach_to_class(&name, Action::tap(|_, _| true)),
            3 => actions.attach_to_class(&name, Action::navigate(|_, _| {})),
            _ => actions.attach_to_class(&name, Action::detail(|_, _| {})),
        }
    }
    actions
}

fn bench_resolve_depth(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");
    for &depth in &[1_usize, 4, 16, 64] {
        let actions = chain(depth);
        let leaf = Row {
            key: ObjectKey::next(),
            class: class_name(depth - 1),
        };
        group.throughput(Throughput::Elements(depth as u64));
        group.bench_function(format!("class_chain_d{depth}"), |b| {
            b.iter(|| black_box(actions.resolve(black_box(&leaf))));
        });
    }

    // Object entry fills every slot; the walk still visits each class.
    let mut actions = chain(16);
    let leaf = Row {
        key: ObjectKey::next(),
        class: class_name(15),
    };
    actions.attach_to_object(&leaf, Action::tap(|_, _| false));
    actions.attach_to_object(&leaf, Action::navigate(|_, _| {}));
    actions.attach_to_object(&leaf, Action::detail(|_, _| {}));
    group.bench_function("object_override_d16", |b| {
        b.iter(|| black_box(actions.resolve(black_box(&leaf))));
    });
    group.finish();
}

fn bench_attach(c: &mut Criterion) {
    let mut group = c.benchmark_group("attach");
    for &n in &[64_usize, 1024] {
        let rows: Vec<Row> = (0..n)
            .map(|i| Row {
                key: ObjectKey::next(),
                class: class_name(i % 8),
            })
            .collect();
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("objects_n{n}"), |b| {
            b.iter_batched(
                Actions::<NoSuperclass>::new,
                |mut actions| {
                    for row in &rows {
                        actions.attach_to_object(row, Action::tap(|_, _| true));
                    }
                    actions
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_perform(c: &mut Criterion) {
    let actions = chain(4);
    let leaf = Row {
        key: ObjectKey::next(),
        class: class_name(3),
    };
    let set = actions.resolve(&leaf);
    c.bench_function("perform_tap_resolved", |b| {
        b.iter(|| black_box(set.perform_tap(&leaf, black_box(IndexPath::new(0, 0)))));
    });
}

criterion_group!(benches, bench_resolve_depth, bench_attach, bench_perform);
criterion_main!(benches);
