// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `canopy_outline` crate.
//!
//! These exercise expand/collapse behavior on a small taxonomy, with a focus
//! on how per-branch flags, indicators, and visibility interact.

use canopy_outline::{Indicator, NodeId, NodeKind, Outline};

struct Taxonomy {
    outline: Outline<String>,
    root: NodeId,
    bacteria: NodeId,
    eukarya: NodeId,
    animalia: NodeId,
    chordata: NodeId,
    mammalia: NodeId,
}

fn taxonomy() -> Taxonomy {
    let mut outline = Outline::new();
    let add = |outline: &mut Outline<String>, parent, key: &str, kind| {
        outline.insert_child(parent, key.to_owned(), kind).unwrap()
    };
    let root = outline
        .insert_root("domains".to_owned(), NodeKind::Branch)
        .unwrap();
    let bacteria = add(&mut outline, root, "bacteria", NodeKind::Branch);
    add(&mut outline, bacteria, "cyanobacteria", NodeKind::Leaf);
    add(&mut outline, root, "archaea", NodeKind::Branch);
    let eukarya = add(&mut outline, root, "eukarya", NodeKind::Branch);
    let animalia = add(&mut outline, eukarya, "animalia", NodeKind::Branch);
    let chordata = add(&mut outline, animalia, "chordata", NodeKind::Branch);
    let mammalia = add(&mut outline, chordata, "mammalia", NodeKind::Leaf);
    add(&mut outline, eukarya, "plantae", NodeKind::Leaf);
    Taxonomy {
        outline,
        root,
        bacteria,
        eukarya,
        animalia,
        chordata,
        mammalia,
    }
}

fn all_branches_expanded(outline: &Outline<String>, expanded: bool) -> bool {
    outline
        .indicators()
        .all(|(_, _, indicator)| indicator.is_open() == expanded)
}

#[test]
fn initial_state_is_fully_collapsed() {
    let t = taxonomy();
    assert!(all_branches_expanded(&t.outline, false));
    assert!(t.outline.is_visible(t.root));
    assert!(!t.outline.is_visible(t.bacteria));
}

#[test]
fn toggle_twice_restores_state() {
    let mut t = taxonomy();
    for node in [t.root, t.eukarya, t.chordata] {
        let before = t.outline.is_expanded(node);
        assert!(t.outline.toggle(node));
        assert_ne!(t.outline.is_expanded(node), before);
        assert!(t.outline.toggle(node));
        assert_eq!(t.outline.is_expanded(node), before);
    }
}

#[test]
fn indicator_tracks_expanded_flag() {
    let mut t = taxonomy();
    assert_eq!(t.outline.indicator(t.animalia), Some(Indicator::Closed));
    t.outline.toggle(t.animalia);
    assert_eq!(t.outline.indicator(t.animalia), Some(Indicator::Open));
    t.outline.set_expanded(t.animalia, false);
    assert_eq!(t.outline.indicator(t.animalia), Some(Indicator::Closed));
}

#[test]
fn leaf_operations_are_no_ops() {
    let mut t = taxonomy();
    let revision = t.outline.revision();
    assert!(!t.outline.toggle(t.mammalia));
    assert!(!t.outline.set_expanded(t.mammalia, true));
    assert!(!t.outline.is_expanded(t.mammalia));
    assert_eq!(t.outline.indicator(t.mammalia), None);
    assert_eq!(t.outline.revision(), revision);
}

#[test]
fn collapsing_a_parent_preserves_descendant_flags() {
    let mut t = taxonomy();
    t.outline.toggle_root();
    t.outline.toggle(t.eukarya);
    t.outline.toggle(t.animalia);
    assert!(t.outline.is_visible(t.chordata));

    t.outline.toggle(t.eukarya);
    assert!(!t.outline.is_visible(t.animalia));
    assert!(!t.outline.is_visible(t.chordata));
    assert!(t.outline.is_expanded(t.animalia));

    t.outline.toggle(t.eukarya);
    assert!(t.outline.is_visible(t.chordata));
    assert!(!t.outline.is_visible(t.mammalia));
}

#[test]
fn collapse_all_is_absorbing() {
    let mut t = taxonomy();
    t.outline.toggle(t.chordata);
    t.outline.toggle_root();

    assert!(t.outline.expand_all());
    assert!(all_branches_expanded(&t.outline, true));
    assert!(t.outline.is_visible(t.mammalia));
    assert_eq!(t.outline.visible_rows().len(), t.outline.len());

    assert!(t.outline.collapse_all());
    assert!(all_branches_expanded(&t.outline, false));
    assert!(!t.outline.is_expanded(t.root));
    assert_eq!(t.outline.visible_rows().len(), 1);
}

#[test]
fn keys_resolve_to_nodes() {
    let t = taxonomy();
    assert_eq!(t.outline.find("chordata"), Some(t.chordata));
    assert_eq!(t.outline.find("fungi"), None);
    assert_eq!(t.outline.key(t.bacteria).map(String::as_str), Some("bacteria"));
    assert_eq!(t.outline.parent(t.chordata), Some(t.animalia));
    assert_eq!(t.outline.parent(t.root), None);
    assert_eq!(t.outline.children(t.eukarya).len(), 2);
    assert!(t.outline.children(t.mammalia).is_empty());
}

#[test]
fn invalid_inserts_are_rejected() {
    let mut t = taxonomy();
    assert_eq!(
        t.outline
            .insert_child(t.mammalia, "homo".to_owned(), NodeKind::Leaf),
        None
    );
    assert_eq!(
        t.outline
            .insert_child(t.root, "bacteria".to_owned(), NodeKind::Branch),
        None
    );
    assert_eq!(
        t.outline
            .insert_root("life".to_owned(), NodeKind::Branch),
        None
    );
}
