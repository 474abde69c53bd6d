// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Vec2};
use pinboard_view::{FitMode, Viewport};

fn bench_conversions(c: &mut Criterion) {
    let mut group = c.benchmark_group("view/convert");
    let mut view = Viewport::new(Rect::new(0.0, 0.0, 1920.0, 1080.0));
    view.zoom_at(Point::new(700.0, 400.0), 0.6);
    view.pan(Vec2::new(-320.0, 75.0));

    group.bench_function("screen_board_round_trip", |b| {
        b.iter(|| {
            let board = view.screen_to_board(black_box(Point::new(123.0, 456.0)));
            black_box(view.board_to_screen(board))
        });
    });
    group.bench_function("visible_board_rect", |b| {
        b.iter(|| black_box(view.visible_board_rect()));
    });

    group.finish();
}

fn bench_zoom(c: &mut Criterion) {
    let mut group = c.benchmark_group("view/zoom");

    group.bench_function("wheel_in_out", |b| {
        let mut view = Viewport::new(Rect::new(0.0, 0.0, 1920.0, 1080.0));
        b.iter(|| {
            view.zoom_at(black_box(Point::new(700.0, 400.0)), 0.05);
            view.zoom_at(black_box(Point::new(300.0, 900.0)), -0.05);
            black_box(view.scale())
        });
    });
    group.bench_function("fit_rect", |b| {
        let mut view = Viewport::new(Rect::new(0.0, 0.0, 1920.0, 1080.0));
        let content = Rect::new(-4_000.0, -250.0, 9_000.0, 6_000.0);
        b.iter(|| black_box(view.fit_rect(black_box(content), FitMode::Center)));
    });

    group.finish();
}

criterion_group!(benches, bench_conversions, bench_zoom);
criterion_main!(benches);
