//! Reconciler properties checked against the public API.
//!
//! Every valid gesture on the seed store is enumerated and each result is
//! checked for conservation, identity, and the date invariant.

use chrono::NaiveDate;
use itinerary::core::clock::FixedClock;
use itinerary::core::config::load_seed;
use itinerary::core::{Gesture, Item, ItemStore, ListId, Location, ReconcileError, reconcile};

const LISTS: [ListId; 2] = [ListId::Timeline, ListId::Pool];

fn clock() -> FixedClock {
    FixedClock(NaiveDate::from_ymd_opt(2024, 6, 10).unwrap())
}

/// Every gesture `reconcile` must accept on `store`, cancellations included.
fn valid_gestures(store: &ItemStore) -> Vec<Gesture> {
    let mut gestures = Vec::new();
    for source_list in LISTS {
        for source_index in 0..store.list(source_list).len() {
            let source = Location::new(source_list, source_index);
            gestures.push(Gesture::cancelled(source));
            for dest_list in LISTS {
                let max = if dest_list == source_list {
                    store.list(dest_list).len() - 1
                } else {
                    store.list(dest_list).len()
                };
                for dest_index in 0..=max {
                    gestures.push(Gesture::moved(source, Location::new(dest_list, dest_index)));
                }
            }
        }
    }
    gestures
}

fn sorted_ids(store: &ItemStore) -> Vec<String> {
    let mut ids: Vec<String> = store.ids().into_iter().map(String::from).collect();
    ids.sort();
    ids
}

fn ids(items: &[Item]) -> Vec<&str> {
    items.iter().map(|item| item.id.as_str()).collect()
}

#[test]
fn test_every_valid_gesture_keeps_store_invariants() {
    let store = ItemStore::seeded();
    let gestures = valid_gestures(&store);
    // 2 timeline sources: 1 cancel + 2 + 4 slots; 3 pool sources: 1 cancel + 3 + 3 slots
    assert_eq!(gestures.len(), 2 * 7 + 3 * 7);

    for gesture in &gestures {
        let next = reconcile(&store, gesture, &clock())
            .unwrap_or_else(|e| panic!("{gesture} rejected: {e}"));
        assert_eq!(next.len(), store.len(), "{gesture} changed the item count");
        assert_eq!(sorted_ids(&next), sorted_ids(&store), "{gesture} changed the ids");
        assert!(next.validate().is_ok(), "{gesture} broke the date invariant");
    }
}

#[test]
fn test_moved_item_lands_at_destination() {
    let store = ItemStore::seeded();
    for gesture in valid_gestures(&store) {
        let Some(destination) = gesture.destination else {
            continue;
        };
        let moved = &store.list(gesture.source.list)[gesture.source.index];
        let next = reconcile(&store, &gesture, &clock()).unwrap();
        assert_eq!(
            next.locate(&moved.id),
            Some((destination.list, destination.index)),
            "{gesture}"
        );
    }
}

#[test]
fn test_cancel_and_same_slot_are_noops() {
    let store = ItemStore::seeded();
    for list in LISTS {
        for index in 0..store.list(list).len() {
            let at = Location::new(list, index);
            assert_eq!(reconcile(&store, &Gesture::cancelled(at), &clock()).unwrap(), store);
            assert_eq!(reconcile(&store, &Gesture::moved(at, at), &clock()).unwrap(), store);
        }
    }
}

#[test]
fn test_reorder_keeps_date_and_other_list() {
    let store = ItemStore::seeded();
    let gesture: Gesture = "timeline/0>timeline/1".parse().unwrap();
    let next = reconcile(&store, &gesture, &clock()).unwrap();

    assert_eq!(ids(&next.timeline), vec!["event2", "event1"]);
    assert_eq!(next.timeline[1].date.as_deref(), Some("June 1, 2024"));
    assert_eq!(next.pool, store.pool);
}

#[test]
fn test_pool_to_timeline_stamps_clock_date() {
    let store = ItemStore::new(
        vec![ItemStore::seeded().timeline[0].clone()],
        vec![ItemStore::seeded().pool[0].clone()],
    );
    let gesture: Gesture = "pool/0>timeline/1".parse().unwrap();
    let next = reconcile(&store, &gesture, &clock()).unwrap();

    assert_eq!(ids(&next.timeline), vec!["event1", "place1"]);
    assert_eq!(next.timeline[1].date.as_deref(), Some("June 10, 2024"));
    assert!(next.pool.is_empty());
}

#[test]
fn test_timeline_to_pool_clears_date() {
    let store = ItemStore::new(vec![ItemStore::seeded().timeline[0].clone()], vec![]);
    let gesture: Gesture = "timeline/0>pool/0".parse().unwrap();
    let next = reconcile(&store, &gesture, &clock()).unwrap();

    assert!(next.timeline.is_empty());
    assert_eq!(ids(&next.pool), vec!["event1"]);
    assert_eq!(next.pool[0].date, None);
}

#[test]
fn test_out_of_range_gestures_are_rejected() {
    let store = ItemStore::seeded();
    let cases = [
        ("timeline/2>pool/0", ListId::Timeline, 2, 2),
        ("pool/0>timeline/3", ListId::Timeline, 3, 2),
        // Same-list bound counts the list without the lifted card
        ("pool/0>pool/3", ListId::Pool, 3, 2),
    ];
    for (text, list, index, len) in cases {
        let gesture: Gesture = text.parse().unwrap();
        assert_eq!(
            reconcile(&store, &gesture, &clock()),
            Err(ReconcileError::InvalidIndex { list, index, len }),
            "{text}"
        );
    }
}

#[test]
fn test_gesture_sequence_round_trip() {
    let store = ItemStore::seeded();
    let out: Gesture = "pool/2>timeline/0".parse().unwrap();
    let back: Gesture = "timeline/0>pool/2".parse().unwrap();

    let there = reconcile(&store, &out, &clock()).unwrap();
    assert_eq!(there.timeline[0].title, "Visit Rome");
    let home = reconcile(&there, &back, &clock()).unwrap();
    assert_eq!(home, store);
}

#[test]
fn test_load_seed_file() {
    let path = std::env::temp_dir().join(format!("itinerary-seed-{}.toml", std::process::id()));
    std::fs::write(
        &path,
        r#"
[[timeline]]
id = "a"
title = "Ferry to Corsica"
date = "July 4, 2024"
icon = "ship"
color = "bg-blue-500"

[[pool]]
id = "b"
title = "Hike the GR20"
icon = "boots"
"#,
    )
    .unwrap();

    let store = load_seed(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(ids(&store.timeline), vec!["a"]);
    assert_eq!(store.pool[0].icon.as_str(), "boots");
    assert_eq!(store.pool[0].description, "");
}

#[test]
fn test_load_seed_rejects_dated_pool_item() {
    let path = std::env::temp_dir().join(format!("itinerary-bad-seed-{}.toml", std::process::id()));
    std::fs::write(
        &path,
        r#"
[[pool]]
id = "b"
title = "Hike the GR20"
date = "July 4, 2024"
icon = "car"
"#,
    )
    .unwrap();

    let result = load_seed(&path);
    std::fs::remove_file(&path).unwrap();
    assert!(result.is_err());
}
