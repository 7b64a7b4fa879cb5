//! Integration tests for bounded tree builds.

mod helpers;

use std::collections::HashSet;

use helpers::{TestGallery, child_ids, root_ids};
use navtree_core::error::ErrorKind;
use navtree_core::types::{Capability, ContainerId, MatchMode, ScopeId};
use navtree_entity::tree::{CSS_DISABLED, CSS_FOREST_TOP};
use navtree_service::BuildOptions;

fn fixture_options(depth: u32) -> BuildOptions {
    BuildOptions::default()
        .with_scopes([ScopeId(1), ScopeId(2), ScopeId(3)])
        .with_depth(depth)
}

#[tokio::test]
async fn test_forest_of_scopes_at_depth_one() {
    let mut gallery = TestGallery::new();
    gallery
        .scope(1, "Family", Some(1))
        .scope(2, "Work", Some(10))
        .album(1, 1, None, "Family")
        .album(2, 1, Some(1), "A")
        .album(3, 1, Some(1), "B")
        .album(4, 1, Some(1), "C")
        .album(10, 2, None, "Work")
        .album(11, 2, Some(10), "A")
        .album(12, 2, Some(10), "B")
        .album(13, 2, Some(10), "C");

    let options = BuildOptions::default()
        .with_scopes([ScopeId(1), ScopeId(2)])
        .with_depth(1);
    let tree = gallery.build(&options, None).await.unwrap();

    assert_eq!(root_ids(&tree), ["1", "10"]);
    for root in &tree.roots {
        assert!(root.has_children);
        assert!(root.children.is_empty());
        assert!(!root.expanded);
        assert!(root.has_css_class(CSS_FOREST_TOP));
    }
    assert_eq!(gallery.repo.stats().child_queries(), 0);
    assert!(gallery.sink.is_empty());
}

#[tokio::test]
async fn test_single_root_without_itself() {
    let mut gallery = TestGallery::new();
    gallery
        .scope(1, "Main", Some(10))
        .album(10, 1, None, "Top")
        .album(11, 1, Some(10), "A")
        .album(12, 1, Some(10), "B")
        .album(13, 1, Some(11), "A1")
        .album(14, 1, Some(11), "A2")
        .private_album(15, 1, Some(12), "Hidden");

    let options = BuildOptions::default()
        .with_root(ContainerId(10), false)
        .with_depth(2);
    let tree = gallery.build(&options, None).await.unwrap();

    assert_eq!(root_ids(&tree), ["11", "12"]);
    assert!(!tree.contains("10"));
    assert_eq!(child_ids(&tree, "11"), ["13", "14"]);
    assert!(child_ids(&tree, "12").is_empty());
    assert!(!tree.contains("15"));
    // Existence is reported regardless of who may view the child.
    assert!(tree.find_node_by_data_id("12").unwrap().has_children);
}

#[tokio::test]
async fn test_single_root_included() {
    let gallery = TestGallery::from_fixture();

    let options = BuildOptions::default()
        .with_root(ContainerId(1), true)
        .with_depth(2);
    let tree = gallery.build(&options, None).await.unwrap();

    assert_eq!(root_ids(&tree), ["1"]);
    assert!(tree.roots[0].has_css_class(CSS_FOREST_TOP));
    assert_eq!(child_ids(&tree, "1"), ["2", "7"]);

    let options = BuildOptions::default()
        .with_root(ContainerId(2), true)
        .with_depth(2);
    let tree = gallery.build(&options, None).await.unwrap();

    assert_eq!(root_ids(&tree), ["2"]);
    assert!(!tree.roots[0].has_css_class(CSS_FOREST_TOP));
    assert_eq!(child_ids(&tree, "2"), ["3"]);
}

#[tokio::test]
async fn test_only_viewable_containers_appear() {
    let gallery = TestGallery::from_fixture();
    let options = fixture_options(4);

    let anonymous = gallery.build(&options, None).await.unwrap();
    assert!(!anonymous.contains("6"));
    assert!(!anonymous.contains("23"));
    assert!(anonymous.contains("22"));

    let alice = gallery.build(&options, Some("alice")).await.unwrap();
    assert!(alice.contains("6"));
    assert!(!alice.contains("23"));

    let bob = gallery.build(&options, Some("bob")).await.unwrap();
    assert!(!bob.contains("6"));
    assert!(bob.contains("23"));

    let admin = gallery.build(&options, Some("root")).await.unwrap();
    assert!(admin.contains("6"));
    assert!(admin.contains("23"));
}

#[tokio::test]
async fn test_anonymous_browsing_disabled() {
    let mut gallery = TestGallery::from_fixture();
    gallery.access.allow_anonymous_browsing = false;

    let tree = gallery.build(&fixture_options(2), None).await.unwrap();
    assert!(tree.roots.is_empty());

    let tree = gallery.build(&fixture_options(2), Some("bob")).await.unwrap();
    assert!(!tree.contains("20"));
    assert!(!tree.contains("21"));
}

#[tokio::test]
async fn test_depth_bounds_every_level() {
    let gallery = TestGallery::from_fixture();

    for depth in 1..=5 {
        let tree = gallery.build(&fixture_options(depth), Some("root")).await.unwrap();
        let deepest = tree.iter().map(|visit| visit.level).max().unwrap_or(0);
        assert!(
            deepest <= depth as usize,
            "depth {depth} produced a node at level {deepest}"
        );
        for visit in tree.iter() {
            assert_eq!(visit.node.expanded, (visit.level as u32) < depth);
        }
    }
}

#[tokio::test]
async fn test_node_ids_are_unique() {
    let gallery = TestGallery::from_fixture();
    let pinned = [ContainerId(5), ContainerId(4), ContainerId(22), ContainerId(23)];
    let options = fixture_options(2).with_pinned(pinned);

    let tree = gallery.build(&options, Some("root")).await.unwrap();

    let ids: HashSet<&str> = tree.iter().map(|visit| visit.node.id.as_str()).collect();
    assert_eq!(ids.len(), tree.node_count());
    assert!(ids.contains("nav5"));
}

#[tokio::test]
async fn test_root_labels_and_markup() {
    let gallery = TestGallery::from_fixture();
    let mut options = fixture_options(2);
    options.root_label_template = "{ScopeDescription}: ".to_string();

    let tree = gallery.build(&options, None).await.unwrap();

    assert_eq!(root_ids(&tree), ["1", "20"]);
    assert_eq!(tree.roots[0].text, "Family: All albums");
    assert_eq!(tree.roots[1].text, "Work: Work");
    let recent = tree.find_node_by_data_id("7").unwrap();
    assert_eq!(recent.text, "Recent uploads");
    assert_eq!(recent.tooltip, recent.text);
}

#[tokio::test]
async fn test_scopes_without_top_and_duplicates() {
    let gallery = TestGallery::from_fixture();
    let options = BuildOptions::default().with_scopes([ScopeId(1), ScopeId(3), ScopeId(1)]);

    let tree = gallery.build(&options, None).await.unwrap();
    assert_eq!(root_ids(&tree), ["1"]);
}

#[tokio::test]
async fn test_links_exclude_checkboxes() {
    let gallery = TestGallery::from_fixture();
    let options = fixture_options(3)
        .with_navigate_url("/album/{ContainerId}")
        .with_checkboxes(true);

    let tree = gallery.build(&options, None).await.unwrap();

    for visit in tree.iter() {
        let node = visit.node;
        if node.navigate_url.is_some() {
            assert!(node.selectable);
            assert!(!node.show_checkbox);
        }
    }
    assert_eq!(tree.roots[0].navigate_url.as_deref(), Some("/album/1"));

    let recent = tree.find_node_by_data_id("7").unwrap();
    assert!(recent.navigate_url.is_none());
    assert!(!recent.selectable);
    assert!(!recent.show_checkbox);
    assert!(recent.has_css_class(CSS_DISABLED));
}

#[tokio::test]
async fn test_checkbox_skips_children_of_checked_parents() {
    let gallery = TestGallery::from_fixture();
    let mut options = BuildOptions::default()
        .with_scopes([ScopeId(1)])
        .with_depth(4)
        .with_checkboxes(true);
    options.required_capabilities = vec![Capability::AddMediaObject];

    let tree = gallery.build(&options, Some("alice")).await.unwrap();
    assert!(tree.checkbox_mode_enabled);

    let shows = |id: &str| tree.find_node_by_data_id(id).unwrap().show_checkbox;
    assert!(shows("1"));
    assert!(!shows("2"));
    assert!(!shows("6"));
    assert!(shows("3"));
    assert!(!shows("4"));
    assert!(tree.find_node_by_data_id("2").unwrap().selectable);
    assert!(!tree.find_node_by_data_id("7").unwrap().selectable);

    let tree = gallery.build(&options, None).await.unwrap();
    for visit in tree.iter() {
        assert!(!visit.node.selectable);
        assert!(!visit.node.show_checkbox);
        assert!(visit.node.has_css_class(CSS_DISABLED));
    }
}

#[tokio::test]
async fn test_all_of_capability_match() {
    let gallery = TestGallery::from_fixture();
    let mut options = BuildOptions::default().with_scopes([ScopeId(2)]).with_depth(3);
    options.required_capabilities = vec![Capability::ViewAlbumOrMediaObject, Capability::EditAlbum];

    let any_of = gallery.build(&options, Some("bob")).await.unwrap();
    assert!(any_of.find_node_by_data_id("20").unwrap().selectable);

    options.capability_match = MatchMode::AllOf;
    let all_of = gallery.build(&options, Some("bob")).await.unwrap();
    assert!(!all_of.find_node_by_data_id("20").unwrap().selectable);
    assert!(all_of.find_node_by_data_id("21").unwrap().selectable);
    assert!(all_of.find_node_by_data_id("23").unwrap().selectable);
}

#[tokio::test]
async fn test_missing_root_is_configuration_error() {
    let gallery = TestGallery::from_fixture();
    let options = BuildOptions::default().with_root(ContainerId(404), false);

    let err = gallery.build(&options, None).await.unwrap_err();
    assert!(err.is(ErrorKind::Configuration));
}

#[tokio::test]
async fn test_tree_serializes_camel_case() {
    let gallery = TestGallery::from_fixture();
    let tree = gallery.build(&fixture_options(1), None).await.unwrap();

    let json = serde_json::to_value(&tree).unwrap();
    assert_eq!(json["roots"][0]["dataId"], "1");
    assert_eq!(json["roots"][0]["hasChildren"], true);
    assert!(json["roots"][0].get("navigateUrl").is_none());
}
