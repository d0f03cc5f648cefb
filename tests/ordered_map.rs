use std::collections::BTreeMap;

use binary_containers::{Error, Greater, NodeRef, OrderedMap};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

/// The number of operations to perform in each proptest case.
const TEST_SIZE: usize = 2_000;

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().with_max_level(tracing::Level::TRACE).try_init();
}

fn key_strategy() -> impl Strategy<Value = i64> {
    // Smaller than TEST_SIZE so inserts collide and erases hit.
    -500i64..500i64
}

fn map_from(keys: &[i64]) -> OrderedMap<i64, i64> {
    let mut map = OrderedMap::new();
    for &key in keys {
        map.insert(key, key * 100);
    }
    map
}

fn keys_of<V, C>(map: &OrderedMap<i64, V, C>) -> Vec<i64> {
    map.in_order().into_iter().map(|(k, _)| *k).collect()
}

/// Checks the search-tree ordering through the public node view.
fn assert_search_order<V>(map: &OrderedMap<i64, V>) {
    fn walk<V>(node: Option<NodeRef<'_, i64, V>>, lo: Option<i64>, hi: Option<i64>, count: &mut usize) {
        let Some(node) = node else {
            return;
        };
        let key = *node.key();
        assert!(lo.is_none_or(|lo| lo < key), "{key} not above {lo:?}");
        assert!(hi.is_none_or(|hi| key < hi), "{key} not below {hi:?}");
        *count += 1;
        walk(node.left(), lo, Some(key), count);
        walk(node.right(), Some(key), hi, count);
    }

    let mut count = 0;
    walk(map.root_node(), None, None, &mut count);
    assert_eq!(count, map.len());
}

// ─── Operations enum for driving randomized tests ────────────────────────────

#[derive(Debug, Clone)]
enum MapOp {
    Insert(i64, i64),
    Erase(i64),
    Find(i64),
    Contains(i64),
    Min,
    Max,
    Clear,
}

fn map_op_strategy() -> impl Strategy<Value = MapOp> {
    prop_oneof![
        60 => (key_strategy(), any::<i64>()).prop_map(|(k, v)| MapOp::Insert(k, v)),
        40 => key_strategy().prop_map(MapOp::Erase),
        20 => key_strategy().prop_map(MapOp::Find),
        10 => key_strategy().prop_map(MapOp::Contains),
        10 => Just(MapOp::Min),
        10 => Just(MapOp::Max),
        // Rare enough that the tree grows between clears.
        1 => Just(MapOp::Clear),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    /// Replays a random operation sequence on both `OrderedMap` and `BTreeMap` and
    /// asserts identical results at every step.
    #[test]
    fn map_ops_match_btreemap(ops in proptest::collection::vec(map_op_strategy(), TEST_SIZE)) {
        let mut map: OrderedMap<i64, i64> = OrderedMap::new();
        let mut model: BTreeMap<i64, i64> = BTreeMap::new();

        for op in &ops {
            match *op {
                MapOp::Insert(k, v) => {
                    prop_assert_eq!(map.insert(k, v), model.insert(k, v), "insert({}, {})", k, v);
                }
                MapOp::Erase(k) => {
                    prop_assert_eq!(map.erase(&k), model.remove(&k), "erase({})", k);
                }
                MapOp::Find(k) => {
                    prop_assert_eq!(map.find(&k).ok(), model.get(&k), "find({})", k);
                }
                MapOp::Contains(k) => {
                    prop_assert_eq!(map.contains(&k), model.contains_key(&k), "contains({})", k);
                }
                MapOp::Min => {
                    prop_assert_eq!(map.min().ok(), model.first_key_value());
                }
                MapOp::Max => {
                    prop_assert_eq!(map.max().ok(), model.last_key_value());
                }
                MapOp::Clear => {
                    map.clear();
                    model.clear();
                }
            }
            prop_assert_eq!(map.len(), model.len());
            prop_assert_eq!(map.is_empty(), model.is_empty());
        }

        let expected: Vec<(&i64, &i64)> = model.iter().collect();
        prop_assert_eq!(map.in_order(), expected);
        assert_search_order(&map);
    }

    #[test]
    fn clone_round_trips(keys in proptest::collection::vec(key_strategy(), 0..300)) {
        let map = map_from(&keys);
        let copy = map.clone();
        prop_assert_eq!(copy.in_order(), map.in_order());
        prop_assert_eq!(copy.len(), map.len());
        prop_assert_eq!(copy.height(), map.height());
        prop_assert_eq!(copy.root().ok(), map.root().ok());
    }

    #[test]
    fn reinsert_overwrites_without_growing(keys in proptest::collection::vec(key_strategy(), 1..200)) {
        let mut map = map_from(&keys);
        let len = map.len();
        for &key in &keys {
            map.insert(key, -key);
        }
        prop_assert_eq!(map.len(), len);
        for &key in &keys {
            prop_assert_eq!(map.find(&key), Ok(&-key));
        }
    }
}

// ─── Scenarios ───────────────────────────────────────────────────────────────

#[test]
fn in_order_is_sorted() {
    let map = map_from(&[5, 3, 8, 1, 4]);
    assert_eq!(keys_of(&map), [1, 3, 4, 5, 8]);
    assert_eq!(map.len(), 5);
}

#[test]
fn erasing_root_with_two_children_promotes_successor() {
    init_tracing();
    let mut map = map_from(&[5, 3, 8, 1, 4]);
    assert_eq!(map.erase(&5), Some(500));

    assert_eq!(keys_of(&map), [1, 3, 4, 8]);
    assert_eq!(map.root(), Ok((&8, &800)));
    let root = map.root_node().unwrap();
    assert!(root.right().is_none(), "8's old node is still attached");
    assert_eq!(root.left().map(|node| *node.key()), Some(3));
    assert_eq!(map.len(), 4);
    assert_search_order(&map);
}

#[test]
fn empty_map_fails_explicitly() {
    let mut map: OrderedMap<i64, i64> = OrderedMap::new();
    assert_eq!(map.min(), Err(Error::Empty));
    assert_eq!(map.max(), Err(Error::Empty));
    assert_eq!(map.root(), Err(Error::Empty));
    assert_eq!(map.find(&0), Err(Error::KeyNotFound));
    assert_eq!(map.erase(&0), None);

    map.insert(0, 0);
    map.erase(&0);
    assert_eq!(map.min(), Err(Error::Empty));
    assert_eq!(map.len(), 0);
}

#[test]
fn errors_display() {
    assert_eq!(Error::Empty.to_string(), "container is empty");
    assert_eq!(Error::KeyNotFound.to_string(), "key not found");
}

#[test]
fn find_mut_updates_in_place() {
    let mut map = map_from(&[2, 1, 3]);
    *map.find_mut(&1).unwrap() += 7;
    assert_eq!(map.find(&1), Ok(&107));
    assert_eq!(map.find_mut(&9), Err(Error::KeyNotFound));
}

#[test]
fn sorted_insertion_degenerates() {
    let map = map_from(&(0..256).collect::<Vec<_>>());
    assert_eq!(map.height(), 256);
    assert_eq!(map.min(), Ok((&0, &0)));
    assert_eq!(map.max(), Ok((&255, &25_500)));
    // The clone walks the whole spine.
    assert_eq!(map.clone().height(), 256);
}

#[test]
fn clear_then_reuse() {
    init_tracing();
    let mut map = map_from(&[4, 2, 6]);
    map.clear();
    assert!(map.is_empty());
    assert!(map.root_node().is_none());
    map.insert(1, 1);
    assert_eq!(map.root(), Ok((&1, &1)));
}

#[test]
fn erased_slots_are_reused() {
    let mut map = OrderedMap::with_capacity(4);
    for key in 0..4 {
        map.insert(key, ());
    }
    let capacity = map.capacity();
    for round in 0..100 {
        map.erase(&(round % 4));
        map.insert(round % 4, ());
    }
    assert_eq!(map.capacity(), capacity);
    assert_eq!(map.len(), 4);
}

#[test]
fn custom_comparator_without_partial_eq() {
    // Keys compared by their first field only; the second is ignored.
    #[derive(Debug, Clone, Copy)]
    struct Version(u32, &'static str);

    let mut map = OrderedMap::with_comparator(|a: &Version, b: &Version| a.0 < b.0);
    map.insert(Version(2, "two"), 'b');
    map.insert(Version(1, "one"), 'a');
    map.insert(Version(2, "deux"), 'B');

    assert_eq!(map.len(), 2);
    assert_eq!(map.find(&Version(2, "")), Ok(&'B'));
    // The first inserted key is kept on overwrite.
    assert_eq!(map.max().map(|(k, _)| k.1), Ok("two"));
    assert!(map.contains(&Version(1, "uno")));
}

#[test]
fn descending_map() {
    let mut map = OrderedMap::with_comparator(Greater);
    for key in [5i64, 3, 8, 1, 4] {
        map.insert(key, ());
    }
    assert_eq!(keys_of(&map), [8, 5, 4, 3, 1]);
    assert_eq!(map.min().map(|(k, _)| *k), Ok(8));
    let root = map.root_node().unwrap();
    assert_eq!(root.left().map(|node| *node.key()), Some(8));
    assert_eq!(root.right().map(|node| *node.key()), Some(3));
}
