//! End-to-end behavior of NodeCollection through the public API.

use std::rc::Rc;

use rstest::{fixture, rstest};

use rtfnodes::util::testing;
use rtfnodes::{CollectionError, CursorState, NodeCollection, NodeHandle, RtfNodeRef, RtfTreeNode};

fn kw(key: &str) -> RtfNodeRef {
    RtfTreeNode::keyword(key, None).into_ref()
}

fn keys(collection: &NodeCollection) -> Vec<String> {
    collection.iter().map(|n| n.borrow().key.clone()).collect()
}

#[fixture]
fn empty() -> NodeCollection {
    testing::init_test_setup();
    NodeCollection::new()
}

// ============================================================
// Scenarios
// ============================================================

#[rstest]
fn given_add_insert_remove_sequence_when_applied_then_matches_expected_order(mut empty: NodeCollection) {
    let a = kw("keyOfA");
    let b = kw("keyOfB");
    let c = kw("keyOfC");

    assert_eq!(empty.add(Rc::clone(&a)), 0);
    assert_eq!(empty.add(Rc::clone(&b)), 1);
    empty.insert(1, Rc::clone(&c)).unwrap();
    assert_eq!(keys(&empty), ["keyOfA", "keyOfC", "keyOfB"]);

    assert_eq!(empty.index_of(&b), Some(2));
    assert_eq!(empty.index_of_key("keyOfC"), Some(1));

    empty.remove_range(0, 2).unwrap();
    assert_eq!(empty.len(), 1);
    assert!(empty.get(0).unwrap().same_node(&b));
}

#[rstest]
fn given_empty_collection_when_queried_then_nothing_found(empty: NodeCollection) {
    assert_eq!(empty.index_of(&kw("a")), None);
    assert_eq!(empty.index_of_key("x"), None);
    assert!(empty.iter().next().is_none());
    assert!(!empty.cursor().move_next());
}

// ============================================================
// Properties
// ============================================================

#[rstest]
fn given_add_range_when_applied_then_equals_repeated_add(mut empty: NodeCollection) {
    let other: NodeCollection = vec![kw("x"), kw("y"), kw("x")].into();
    let mut expected = empty.clone();
    for node in &other {
        expected.add(Rc::clone(node));
    }

    empty.add_range(&other);

    assert_eq!(empty.len(), expected.len());
    for (left, right) in empty.iter().zip(expected.iter()) {
        assert!(left.same_node(right));
    }
    assert_eq!(other.len(), 3);
}

#[rstest]
fn given_node_mutated_through_other_handle_when_searched_then_identity_and_key_follow(
    mut empty: NodeCollection,
) {
    let node = kw("b");
    empty.add(Rc::clone(&node));

    node.borrow_mut().key = "i".into();

    assert_eq!(empty.index_of(&node), Some(0));
    assert_eq!(empty.index_of_key("i"), Some(0));
    assert_eq!(empty.index_of_key("b"), None);
}

#[rstest]
fn given_failed_positional_operations_when_applied_then_collection_unchanged(mut empty: NodeCollection) {
    empty.add(kw("a"));
    empty.add(kw("b"));

    assert!(empty.get(2).unwrap_err().is_out_of_range());
    assert!(empty.set(2, kw("x")).unwrap_err().is_out_of_range());
    assert!(empty.insert(3, kw("x")).unwrap_err().is_out_of_range());
    assert_eq!(
        empty.remove_range(1, 2).unwrap_err(),
        CollectionError::RangeOutOfRange { index: 1, count: 2, len: 2 }
    );

    assert_eq!(keys(&empty), ["a", "b"]);
}

#[rstest]
fn given_collection_shared_by_cursors_and_iterators_when_traversed_then_no_interference(
    mut empty: NodeCollection,
) {
    for key in ["a", "b", "c"] {
        empty.add(kw(key));
    }

    let mut cursor = empty.cursor();
    assert!(cursor.move_next());
    let inner: Vec<String> = empty.iter().map(|n| n.borrow().key.clone()).collect();
    assert_eq!(inner, ["a", "b", "c"]);
    assert_eq!(cursor.state(), CursorState::Positioned(0));

    while cursor.move_next() {}
    assert_eq!(
        cursor.current().unwrap_err(),
        CollectionError::InvalidIteratorState(CursorState::Exhausted)
    );
    cursor.reset();
    assert_eq!(cursor.state(), CursorState::Unstarted);
}

#[rstest]
fn given_collection_when_consumed_then_yields_owned_handles(mut empty: NodeCollection) {
    let a = kw("a");
    empty.add(Rc::clone(&a));
    empty.add(Rc::clone(&a));

    let handles: Vec<RtfNodeRef> = empty.into_iter().collect();
    assert_eq!(handles.len(), 2);
    assert!(handles.iter().all(|h| h.same_node(&a)));
    assert_eq!(Rc::strong_count(&a), 3);
}
