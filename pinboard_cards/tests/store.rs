// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `pinboard_cards` crate.
//!
//! These exercise card creation, stacking, hit testing and the debounced
//! content resize through the public `CardStore` API.

use kurbo::{Point, Rect, Size};
use peniko::Color;
use pinboard_cards::{CardId, CardMetrics, CardStore, Category};
use pinboard_view::Viewport;

fn note() -> Category {
    Category::new('N', Color::from_rgb8(0x9b, 0xc4, 0xe2))
}

fn todo() -> Category {
    Category::new('T', Color::from_rgb8(0xe2, 0x9b, 0x9b))
}

fn view() -> Viewport {
    Viewport::new(Rect::new(0.0, 0.0, 1024.0, 768.0))
}

#[test]
fn first_card_matches_defaults() {
    let mut store = CardStore::default();
    let card = store.create_card(note(), &view());

    assert_eq!(card.position(), Point::new(100.0, 100.0));
    assert_eq!(card.size(), Size::new(300.0, 200.0));
    assert_eq!(card.z_index(), 1);
    assert_eq!(card.line_count(), 7);
    assert_eq!(card.content(), "");
    assert_eq!(card.type_letter(), 'N');
    assert_eq!(
        card.line_color().to_rgba8(),
        Color::from_rgb8(0x9b, 0xc4, 0xe2).to_rgba8()
    );
}

#[test]
fn creation_order_is_kept_separately_from_z_order() {
    let mut store = CardStore::default();
    let vp = view();
    let a = store.create_card(note(), &vp).id();
    let b = store.create_card(todo(), &vp).id();
    let c = store.create_card(note(), &vp).id();

    store.bring_to_front(a).unwrap();

    let created: Vec<CardId> = store.iter().map(|card| card.id()).collect();
    assert_eq!(created, vec![a, b, c]);
    let painted: Vec<CardId> = store.by_z_order().iter().map(|card| card.id()).collect();
    assert_eq!(painted, vec![b, c, a]);
}

#[test]
fn z_indices_stay_unique_and_latest_is_maximum() {
    let mut store = CardStore::default();
    let vp = view();
    let ids: Vec<CardId> = (0..5).map(|_| store.create_card(note(), &vp).id()).collect();

    for &id in [ids[3], ids[0], ids[3], ids[4], ids[1]].iter() {
        store.bring_to_front(id).unwrap();
        let max = store.iter().map(|card| card.z_index()).max().unwrap();
        assert_eq!(store.get(id).unwrap().z_index(), max);
        assert_eq!(store.top_z(), max);
    }

    let mut zs: Vec<u64> = store.iter().map(|card| card.z_index()).collect();
    zs.sort_unstable();
    zs.dedup();
    assert_eq!(zs.len(), ids.len());
}

#[test]
fn hit_test_prefers_topmost_overlapping_card() {
    let mut store = CardStore::default();
    let vp = view();
    let below = store.create_card(note(), &vp).id();
    let above = store.create_card(note(), &vp).id();

    // Both occupy (100, 100)..(400, 300); the newer one is on top.
    assert_eq!(store.hit_test(Point::new(200.0, 200.0)), Some(above));

    store.bring_to_front(below).unwrap();
    assert_eq!(store.hit_test(Point::new(200.0, 200.0)), Some(below));

    store.move_to(below, Point::new(1000.0, 1000.0)).unwrap();
    assert_eq!(store.hit_test(Point::new(200.0, 200.0)), Some(above));
    assert_eq!(store.hit_test(Point::new(1100.0, 1100.0)), Some(below));
    assert_eq!(store.hit_test(Point::new(50.0, 50.0)), None);
}

#[test]
fn hit_test_bounds_are_half_open() {
    let mut store = CardStore::default();
    let id = store.create_card(note(), &view()).id();
    assert_eq!(store.hit_test(Point::new(100.0, 100.0)), Some(id));
    assert_eq!(store.hit_test(Point::new(400.0, 150.0)), None);
    assert_eq!(store.hit_test(Point::new(150.0, 300.0)), None);
}

#[test]
fn edits_in_window_coalesce_into_one_resize_with_latest_content() {
    let mut store = CardStore::default();
    let id = store.create_card(note(), &view()).id();

    let c1 = "a\n".repeat(3);
    let c2 = "b\n".repeat(20);
    let c3 = "c\n".repeat(9) + "c";
    store.update_content(id, c1, 1_000).unwrap();
    store.update_content(id, c2, 1_030).unwrap();
    store.update_content(id, c3.clone(), 1_060).unwrap();

    // Content is live right away, size is not.
    assert_eq!(store.get(id).unwrap().content(), c3);
    assert_eq!(store.get(id).unwrap().size().height, 200.0);
    assert!(store.resize_pending(id));
    assert_eq!(store.next_resize_deadline(), Some(1_160));

    assert!(store.flush_resizes(1_159).is_empty());
    let resized = store.flush_resizes(1_160);
    assert_eq!(resized.len(), 1);
    assert_eq!(resized[0].id, id);
    assert_eq!(resized[0].line_count, 10);
    assert_eq!(resized[0].height, 340.0);
    assert!(resized[0].changed());

    let card = store.get(id).unwrap();
    assert_eq!(card.line_count(), 10);
    assert_eq!(card.size(), Size::new(300.0, 340.0));
    assert!(!store.resize_pending(id));
    assert!(store.flush_resizes(10_000).is_empty());
}

#[test]
fn shrinking_content_never_goes_below_minimum() {
    let mut store = CardStore::default();
    let id = store.create_card(note(), &view()).id();

    store.update_content(id, "x\n".repeat(30), 0).unwrap();
    store.flush_resizes(100);
    assert_eq!(store.get(id).unwrap().size().height, 31.0 * 28.0 + 60.0);

    store.update_content(id, "", 200).unwrap();
    store.flush_resizes(300);
    let card = store.get(id).unwrap();
    assert_eq!(card.line_count(), 1);
    assert_eq!(card.size(), Size::new(300.0, 200.0));
}

#[test]
fn resizes_are_tracked_per_card() {
    let mut store = CardStore::new(CardMetrics::default().with_resize_delay_ms(50));
    let vp = view();
    let a = store.create_card(note(), &vp).id();
    let b = store.create_card(todo(), &vp).id();

    store.update_content(a, "1\n2\n3\n4\n5\n6", 0).unwrap();
    store.update_content(b, "1\n2\n3\n4\n5\n6\n7", 20).unwrap();
    store.update_content(a, "1\n2\n3\n4\n5\n6\n7\n8", 40).unwrap();

    let first = store.flush_resizes(70);
    assert_eq!(first.len(), 1);
    assert_eq!(first[0].id, b);
    assert_eq!(first[0].height, 7.0 * 28.0 + 60.0);

    let second = store.flush_resizes(90);
    assert_eq!(second.len(), 1);
    assert_eq!(second[0].id, a);
    assert_eq!(second[0].line_count, 8);
}

#[test]
fn width_never_follows_content() {
    let mut store = CardStore::new(CardMetrics::default().with_wrap_columns(Some(10)));
    let id = store.create_card(note(), &view()).id();
    store.update_content(id, "w".repeat(200), 0).unwrap();
    store.flush_resizes(100);
    let card = store.get(id).unwrap();
    assert_eq!(card.size().width, 300.0);
    assert_eq!(card.line_count(), 20);
    assert_eq!(card.size().height, 20.0 * 28.0 + 60.0);
}
