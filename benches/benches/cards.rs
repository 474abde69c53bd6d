// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::{Point, Rect};
use peniko::Color;
use pinboard_cards::{CardId, CardStore, Category};
use pinboard_interaction::{InteractionController, PointerEvent};
use pinboard_view::Viewport;

fn note() -> Category {
    Category::new('N', Color::from_rgb8(0x9b, 0xc4, 0xe2))
}

/// A store with `len` cards on a 64-column grid that overlaps horizontally.
fn scatter(len: usize) -> (Viewport, CardStore, Vec<CardId>) {
    let view = Viewport::new(Rect::new(0.0, 0.0, 1920.0, 1080.0));
    let mut cards = CardStore::default();
    let mut ids = Vec::with_capacity(len);
    for i in 0..len {
        let id = cards.create_card(note(), &view).id();
        let x = (i % 64) as f64 * 150.0;
        let y = (i / 64) as f64 * 120.0;
        cards.move_to(id, Point::new(x, y)).unwrap();
        ids.push(id);
    }
    (view, cards, ids)
}

fn bench_hit_test(c: &mut Criterion) {
    let mut group = c.benchmark_group("cards/hit_test");

    for len in [16usize, 256, 4_096] {
        let (_, cards, _) = scatter(len);
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::from_parameter(len), &cards, |b, cards| {
            let mut i = 0_u32;
            b.iter(|| {
                i = i.wrapping_add(7_919);
                let pt = Point::new(f64::from(i % 9_600), f64::from(i % 7_680));
                black_box(cards.hit_test(black_box(pt)))
            });
        });
    }

    group.finish();
}

fn bench_paint_order(c: &mut Criterion) {
    let mut group = c.benchmark_group("cards/by_z_order");

    for len in [256usize, 4_096] {
        let (_, mut cards, ids) = scatter(len);
        // Shuffle the stacking a little so the sort has work to do.
        for id in ids.iter().step_by(3) {
            cards.bring_to_front(*id).unwrap();
        }
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &cards, |b, cards| {
            b.iter(|| black_box(cards.by_z_order().len()));
        });
    }

    group.finish();
}

fn bench_typing_burst(c: &mut Criterion) {
    let mut group = c.benchmark_group("cards/typing_burst");
    let text: String = (0..40).map(|i| format!("line {i}\n")).collect();

    for keystrokes in [10usize, 100] {
        group.throughput(Throughput::Elements(keystrokes as u64));
        group.bench_function(BenchmarkId::from_parameter(keystrokes), |b| {
            b.iter_batched(
                || scatter(64),
                |(_, mut cards, ids)| {
                    let id = ids[0];
                    for k in 0..keystrokes {
                        let end = (k * 7) % text.len();
                        cards.update_content(id, &text[..end], k as u64).unwrap();
                    }
                    black_box(cards.flush_resizes(keystrokes as u64 + 100));
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("interaction/drag_move");
    let (mut view, mut cards, _) = scatter(1_024);
    view.zoom_at(Point::new(960.0, 540.0), 0.75);
    let mut ctl = InteractionController::default();
    ctl.pointer_down(PointerEvent::new(Point::new(60.0, 60.0)), &view, &mut cards);

    group.bench_function("move", |b| {
        let mut t = 0.0_f64;
        b.iter(|| {
            t += 1.0;
            let pos = Point::new(60.0 + t % 400.0, 60.0 + t % 300.0);
            black_box(ctl.pointer_move(pos, &mut view, &mut cards))
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_hit_test,
    bench_paint_order,
    bench_typing_burst,
    bench_drag
);
criterion_main!(benches);
