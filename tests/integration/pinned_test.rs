//! Integration tests for pinned-path reconciliation.

mod helpers;

use std::collections::BTreeSet;

use helpers::{TestGallery, child_ids, root_ids};
use navtree_core::error::ErrorKind;
use navtree_core::types::{ContainerId, ScopeId};
use navtree_entity::tree::Tree;
use navtree_service::BuildOptions;

fn selected(tree: &Tree) -> BTreeSet<&str> {
    tree.selected_data_ids().into_iter().collect()
}

/// 1 ─┬─ 2 (private) ── 21
///    └─ 3 ─┬─ 30 ─┬─ 31 ── 42
///          │      └─ 32
///          └─ 33
fn deep_gallery() -> TestGallery {
    let mut gallery = TestGallery::new();
    gallery
        .scope(1, "Main", Some(1))
        .album(1, 1, None, "Top")
        .private_album(2, 1, Some(1), "A private")
        .album(21, 1, Some(2), "Behind private")
        .album(3, 1, Some(1), "B public")
        .album(30, 1, Some(3), "C")
        .album(33, 1, Some(3), "D")
        .album(31, 1, Some(30), "E")
        .album(32, 1, Some(30), "F")
        .album(42, 1, Some(31), "Target");
    gallery
}

#[tokio::test]
async fn test_pinned_path_is_spliced() {
    let gallery = deep_gallery();
    let options = BuildOptions::default()
        .with_scopes([ScopeId(1)])
        .with_depth(1)
        .with_pinned([ContainerId(42)]);

    let tree = gallery.build(&options, None).await.unwrap();

    let target = tree.find_node_by_data_id("42").unwrap();
    assert!(target.expanded);
    assert!(target.selected);
    for id in ["1", "3", "30", "31"] {
        let node = tree.find_node_by_data_id(id).unwrap();
        assert!(node.expanded, "ancestor {id} should be expanded");
        assert!(!node.selected);
    }

    assert_eq!(child_ids(&tree, "1"), ["3"]);
    assert_eq!(child_ids(&tree, "3"), ["30", "33"]);
    assert_eq!(child_ids(&tree, "30"), ["31", "32"]);
    assert!(!tree.find_node_by_data_id("33").unwrap().expanded);
    assert!(!tree.contains("2"));
    assert_eq!(selected(&tree), BTreeSet::from(["42"]));
    assert!(gallery.sink.is_empty());
}

#[tokio::test]
async fn test_missing_pinned_container_is_recorded() {
    let gallery = TestGallery::from_fixture();
    let options = BuildOptions::default()
        .with_scopes([ScopeId(1)])
        .with_pinned([ContainerId(99)]);

    let tree = gallery.build(&options, None).await.unwrap();

    assert!(!tree.contains("99"));
    assert_eq!(root_ids(&tree), ["1"]);
    let records = gallery.sink.records();
    assert_eq!(records.len(), 1);
    assert!(records[0].error.is(ErrorKind::StaleReference));
    assert_eq!(records[0].scope_id, None);
    assert!(
        records[0]
            .error
            .notes
            .iter()
            .any(|note| note == "pinned_id=99")
    );
}

#[tokio::test]
async fn test_missing_pin_keeps_other_pins() {
    let gallery = deep_gallery();
    let options = BuildOptions::default()
        .with_scopes([ScopeId(1)])
        .with_depth(1)
        .with_pinned([ContainerId(42), ContainerId(99)]);

    let tree = gallery.build(&options, None).await.unwrap();

    assert!(!tree.contains("99"));
    assert!(tree.find_node_by_data_id("42").unwrap().expanded);
    assert_eq!(selected(&tree), BTreeSet::from(["42"]));
    let records = gallery.sink.records();
    assert_eq!(records.len(), 1);
    assert!(records[0].error.is(ErrorKind::StaleReference));
}

#[tokio::test]
async fn test_vanished_ancestor_is_recorded() {
    let gallery = deep_gallery();
    gallery.repo.remove_container(ContainerId(30));
    let options = BuildOptions::default()
        .with_scopes([ScopeId(1)])
        .with_pinned([ContainerId(42)]);

    let tree = gallery.build(&options, None).await.unwrap();

    assert!(!tree.contains("42"));
    assert!(!tree.contains("31"));
    assert_eq!(gallery.sink.len(), 1);
    assert!(gallery.sink.records()[0].error.is(ErrorKind::StaleReference));
}

#[tokio::test]
async fn test_pin_behind_hidden_container_is_dropped() {
    let gallery = deep_gallery();
    let options = BuildOptions::default()
        .with_scopes([ScopeId(1)])
        .with_pinned([ContainerId(21)]);

    let tree = gallery.build(&options, None).await.unwrap();

    assert!(!tree.contains("21"));
    assert!(!tree.contains("2"));
    assert!(selected(&tree).is_empty());
    assert!(gallery.sink.is_empty());

    // A private pinned container itself stays hidden as well.
    let fixture = TestGallery::from_fixture();
    let options = BuildOptions::default()
        .with_scopes([ScopeId(1)])
        .with_pinned([ContainerId(6)]);
    let tree = fixture.build(&options, None).await.unwrap();
    assert!(!tree.contains("6"));

    let tree = fixture.build(&options, Some("alice")).await.unwrap();
    assert!(tree.find_node_by_data_id("6").unwrap().selected);
}

#[tokio::test]
async fn test_pin_outside_forest_is_dropped() {
    let gallery = TestGallery::from_fixture();
    let options = BuildOptions::default()
        .with_scopes([ScopeId(1)])
        .with_pinned([ContainerId(22)]);

    let tree = gallery.build(&options, None).await.unwrap();

    assert!(!tree.contains("22"));
    assert!(!tree.contains("20"));
    assert!(gallery.sink.is_empty());
}

#[tokio::test]
async fn test_pin_within_depth_gets_extra_level() {
    let gallery = TestGallery::from_fixture();
    let options = BuildOptions::default()
        .with_scopes([ScopeId(1)])
        .with_depth(2)
        .with_pinned([ContainerId(2)]);

    let tree = gallery.build(&options, None).await.unwrap();

    let vacations = tree.find_node_by_data_id("2").unwrap();
    assert!(vacations.expanded);
    assert!(vacations.selected);
    assert_eq!(child_ids(&tree, "2"), ["3"]);
    assert!(!tree.find_node_by_data_id("3").unwrap().expanded);
}

#[tokio::test]
async fn test_pins_sharing_a_path() {
    let gallery = TestGallery::from_fixture();
    let options = BuildOptions::default()
        .with_scopes([ScopeId(1)])
        .with_pinned([ContainerId(5), ContainerId(8)]);

    let tree = gallery.build(&options, None).await.unwrap();

    // Siblings are ordered by title.
    assert_eq!(child_ids(&tree, "3"), ["8", "4"]);
    assert_eq!(selected(&tree), BTreeSet::from(["5", "8"]));
    for id in ["1", "2", "3", "4", "5", "8"] {
        assert!(tree.find_node_by_data_id(id).unwrap().expanded, "{id} should be expanded");
    }
    assert!(tree.contains("7"));
    assert_eq!(tree.node_count(), 7);
    assert!(gallery.sink.is_empty());
}

#[tokio::test]
async fn test_pinned_with_single_root() {
    let gallery = deep_gallery();
    let options = BuildOptions::default()
        .with_root(ContainerId(3), false)
        .with_pinned([ContainerId(42)]);

    let tree = gallery.build(&options, None).await.unwrap();

    assert_eq!(root_ids(&tree), ["30", "33"]);
    assert!(tree.find_node_by_data_id("42").unwrap().selected);
    assert_eq!(child_ids(&tree, "30"), ["31", "32"]);
}
