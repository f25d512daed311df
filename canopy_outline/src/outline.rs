// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::borrow::Borrow;
use core::fmt;
use core::hash::Hash;

use hashbrown::HashMap;
use smallvec::SmallVec;

use crate::types::{Indicator, NodeId, NodeKind, Row, StructureChange};

type Children = SmallVec<[NodeId; 4]>;

/// Callback invoked after nodes are inserted or removed.
pub type StructureCallback = Box<dyn FnMut(StructureChange)>;

#[derive(Debug)]
struct Node<K> {
    key: K,
    parent: Option<NodeId>,
    /// `None` for leaves.
    children: Option<Children>,
    expanded: bool,
}

#[derive(Debug)]
struct Slot<K> {
    generation: u32,
    node: Option<Node<K>>,
}

/// Keyed node hierarchy with per-branch expand/collapse state.
///
/// Each node is addressed by a generational [`NodeId`] and carries a caller key
/// `K` (for example an element id or a taxonomy path) that must be unique
/// within the outline. Parents own their ordered child lists; children keep a
/// non-owning link back to their parent.
///
/// Branches start collapsed. Expanding or collapsing a branch never touches its
/// descendants' flags, so re-expanding a parent reveals grandchildren exactly as
/// they were left.
///
/// A monotonically increasing [`revision`](Outline::revision) bumps on every
/// change.
pub struct Outline<K> {
    slots: Vec<Slot<K>>,
    free: Vec<u32>,
    root: Option<NodeId>,
    by_key: HashMap<K, NodeId>,
    revision: u64,
    on_structure_changed: Option<StructureCallback>,
}

impl<K: fmt::Debug> fmt::Debug for Outline<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Outline")
            .field("slots", &self.slots)
            .field("free", &self.free)
            .field("root", &self.root)
            .field("revision", &self.revision)
            .field(
                "on_structure_changed",
                &self.on_structure_changed.is_some(),
            )
            .finish_non_exhaustive()
    }
}

impl<K> Default for Outline<K>
where
    K: Clone + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Outline<K>
where
    K: Clone + Eq + Hash,
{
    /// Creates an empty outline.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            root: None,
            by_key: HashMap::new(),
            revision: 0,
            on_structure_changed: None,
        }
    }

    /// Registers the callback invoked after structural changes, replacing any previous one.
    ///
    /// No callback is registered by default.
    pub fn set_on_structure_changed(&mut self, callback: impl FnMut(StructureChange) + 'static) {
        self.on_structure_changed = Some(Box::new(callback));
    }

    /// Removes the structural-change callback.
    pub fn clear_on_structure_changed(&mut self) {
        self.on_structure_changed = None;
    }

    /// Returns the change counter.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns the number of live nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    /// Returns `true` if the outline has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }

    /// Returns the root node, if any.
    #[must_use]
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Inserts the root node.
    ///
    /// Returns `None` if a root already exists.
    pub fn insert_root(&mut self, key: K, kind: NodeKind) -> Option<NodeId> {
        if self.root.is_some() || self.by_key.contains_key(&key) {
            return None;
        }
        let id = self.alloc(key, None, kind);
        self.root = Some(id);
        self.structure_changed(StructureChange::Inserted {
            node: id,
            parent: None,
        });
        Some(id)
    }

    /// Appends a child to the end of `parent`'s child list.
    ///
    /// Returns `None` if `parent` is stale or a leaf, or `key` is already used.
    pub fn insert_child(&mut self, parent: NodeId, key: K, kind: NodeKind) -> Option<NodeId> {
        if self.by_key.contains_key(&key) {
            return None;
        }
        if self.get(parent)?.children.is_none() {
            return None;
        }
        let id = self.alloc(key, Some(parent), kind);
        if let Some(children) = self.get_mut(parent).and_then(|n| n.children.as_mut()) {
            children.push(id);
        }
        self.structure_changed(StructureChange::Inserted {
            node: id,
            parent: Some(parent),
        });
        Some(id)
    }

    /// Removes `node` and its whole subtree.
    ///
    /// Returns `false` if `node` is stale.
    pub fn remove(&mut self, node: NodeId) -> bool {
        let Some(parent) = self.get(node).map(|n| n.parent) else {
            return false;
        };
        if let Some(siblings) = parent
            .and_then(|p| self.get_mut(p))
            .and_then(|n| n.children.as_mut())
        {
            siblings.retain(|c| *c != node);
        }
        if self.root == Some(node) {
            self.root = None;
        }

        let mut stack = alloc::vec![node];
        while let Some(id) = stack.pop() {
            let slot = &mut self.slots[id.idx()];
            if let Some(removed) = slot.node.take() {
                if let Some(children) = removed.children {
                    stack.extend(children);
                }
                self.by_key.remove(&removed.key);
                self.free.push(id.0);
            }
        }
        self.structure_changed(StructureChange::Removed { node, parent });
        true
    }

    /// Returns `true` if `node` refers to a live node.
    #[must_use]
    pub fn is_alive(&self, node: NodeId) -> bool {
        self.get(node).is_some()
    }

    /// Looks up a node by key.
    #[must_use]
    pub fn find<Q>(&self, key: &Q) -> Option<NodeId>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.by_key.get(key).copied()
    }

    /// Returns the key of `node`.
    #[must_use]
    pub fn key(&self, node: NodeId) -> Option<&K> {
        self.get(node).map(|n| &n.key)
    }

    /// Returns the parent of `node` (`None` for the root or a stale id).
    #[must_use]
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.get(node).and_then(|n| n.parent)
    }

    /// Returns the ordered children of `node`; empty for leaves and stale ids.
    #[must_use]
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.get(node)
            .and_then(|n| n.children.as_deref())
            .unwrap_or(&[])
    }

    /// Returns the kind of `node`.
    #[must_use]
    pub fn kind(&self, node: NodeId) -> Option<NodeKind> {
        self.get(node).map(|n| {
            if n.children.is_some() {
                NodeKind::Branch
            } else {
                NodeKind::Leaf
            }
        })
    }

    /// Returns `true` if `node` is an expanded branch.
    #[must_use]
    pub fn is_expanded(&self, node: NodeId) -> bool {
        self.get(node).is_some_and(|n| n.expanded)
    }

    /// Returns the indicator of `node`, or `None` for leaves and stale ids.
    #[must_use]
    pub fn indicator(&self, node: NodeId) -> Option<Indicator> {
        self.get(node)
            .filter(|n| n.children.is_some())
            .map(|n| Indicator::from_expanded(n.expanded))
    }

    /// Iterates over every live branch with its key and indicator.
    pub fn indicators(&self) -> impl Iterator<Item = (NodeId, &K, Indicator)> + '_ {
        self.slots.iter().enumerate().filter_map(|(idx, slot)| {
            let node = slot.node.as_ref().filter(|n| n.children.is_some())?;
            let id = NodeId::new(u32::try_from(idx).ok()?, slot.generation);
            Some((id, &node.key, Indicator::from_expanded(node.expanded)))
        })
    }

    /// Flips the expanded flag of a branch.
    ///
    /// Returns `false` (and does nothing) for leaves and stale ids.
    pub fn toggle(&mut self, node: NodeId) -> bool {
        let expanded = self.is_expanded(node);
        self.set_expanded(node, !expanded)
    }

    /// Flips the expanded flag of the root.
    pub fn toggle_root(&mut self) -> bool {
        match self.root {
            Some(root) => self.toggle(root),
            None => false,
        }
    }

    /// Sets the expanded flag of a branch.
    ///
    /// Returns `true` if the flag changed.
    pub fn set_expanded(&mut self, node: NodeId, expanded: bool) -> bool {
        let Some(n) = self.get_mut(node) else {
            return false;
        };
        if n.children.is_none() || n.expanded == expanded {
            return false;
        }
        n.expanded = expanded;
        self.revision = self.revision.wrapping_add(1);
        log::trace!("outline node {node:?} expanded={expanded}");
        true
    }

    /// Expands every branch, root included.
    ///
    /// Returns `true` if any flag changed.
    pub fn expand_all(&mut self) -> bool {
        self.set_all(true)
    }

    /// Collapses every branch, root included.
    ///
    /// Returns `true` if any flag changed.
    pub fn collapse_all(&mut self) -> bool {
        self.set_all(false)
    }

    /// Returns `true` if `node` is live and all of its ancestors are expanded.
    #[must_use]
    pub fn is_visible(&self, node: NodeId) -> bool {
        let Some(mut current) = self.get(node) else {
            return false;
        };
        while let Some(parent) = current.parent {
            match self.get(parent) {
                Some(p) if p.expanded => current = p,
                _ => return false,
            }
        }
        true
    }

    /// Returns the rendered rows in depth-first order.
    ///
    /// The root is always shown; the children of a branch are shown only while
    /// it is expanded.
    #[must_use]
    pub fn visible_rows(&self) -> Vec<Row> {
        let mut rows = Vec::new();
        let Some(root) = self.root else {
            return rows;
        };
        let mut stack = alloc::vec![Row {
            node: root,
            depth: 0
        }];
        while let Some(row) = stack.pop() {
            let Some(node) = self.get(row.node) else {
                continue;
            };
            rows.push(row);
            if node.expanded
                && let Some(children) = &node.children
            {
                stack.extend(children.iter().rev().map(|&child| Row {
                    node: child,
                    depth: row.depth + 1,
                }));
            }
        }
        rows
    }

    fn set_all(&mut self, expanded: bool) -> bool {
        let mut changed = 0_usize;
        for node in self.slots.iter_mut().filter_map(|s| s.node.as_mut()) {
            if node.children.is_some() && node.expanded != expanded {
                node.expanded = expanded;
                changed += 1;
            }
        }
        if changed == 0 {
            return false;
        }
        self.revision = self.revision.wrapping_add(1);
        log::debug!("outline set {changed} branches expanded={expanded}");
        true
    }

    fn alloc(&mut self, key: K, parent: Option<NodeId>, kind: NodeKind) -> NodeId {
        let node = Node {
            key: key.clone(),
            parent,
            children: match kind {
                NodeKind::Branch => Some(Children::new()),
                NodeKind::Leaf => None,
            },
            expanded: false,
        };
        let id = if let Some(idx) = self.free.pop() {
            let slot = &mut self.slots[idx as usize];
            slot.generation = slot.generation.wrapping_add(1);
            slot.node = Some(node);
            NodeId::new(idx, slot.generation)
        } else {
            #[allow(
                clippy::cast_possible_truncation,
                reason = "node counts beyond u32::MAX are not supported"
            )]
            let idx = self.slots.len() as u32;
            self.slots.push(Slot {
                generation: 1,
                node: Some(node),
            });
            NodeId::new(idx, 1)
        };
        self.by_key.insert(key, id);
        id
    }

    fn get(&self, id: NodeId) -> Option<&Node<K>> {
        self.slots
            .get(id.idx())
            .filter(|s| s.generation == id.1)
            .and_then(|s| s.node.as_ref())
    }

    fn get_mut(&mut self, id: NodeId) -> Option<&mut Node<K>> {
        self.slots
            .get_mut(id.idx())
            .filter(|s| s.generation == id.1)
            .and_then(|s| s.node.as_mut())
    }

    fn structure_changed(&mut self, change: StructureChange) {
        self.revision = self.revision.wrapping_add(1);
        if let Some(callback) = self.on_structure_changed.as_mut() {
            callback(change);
        }
    }
}
