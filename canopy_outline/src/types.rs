// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the outline: node identifiers, kinds, indicators, and rows.

/// Identifier for a node in an [`Outline`](crate::Outline).
///
/// This is a small, copyable handle consisting of a slot index and a generation
/// counter. It stays stable while the node lives and becomes stale when the node
/// is removed; a reused slot gets a higher generation, so stale ids never alias
/// a different live node.
///
/// Use [`Outline::is_alive`](crate::Outline::is_alive) to check liveness.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct NodeId(pub(crate) u32, pub(crate) u32);

impl NodeId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// Whether a node owns a child list.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum NodeKind {
    /// Has an (possibly empty) ordered child list and an indicator.
    Branch,
    /// Has neither; expand/collapse requests on it are no-ops.
    Leaf,
}

/// Orientation of the marker drawn next to a branch.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Indicator {
    /// The branch is expanded.
    Open,
    /// The branch is collapsed.
    Closed,
}

impl Indicator {
    /// Returns the indicator matching an expanded flag.
    #[must_use]
    pub const fn from_expanded(expanded: bool) -> Self {
        if expanded { Self::Open } else { Self::Closed }
    }

    /// Returns `true` for [`Indicator::Open`].
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

/// Notification passed to the structural-change callback.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum StructureChange {
    /// A node was inserted under `parent` (`None` for the root).
    Inserted {
        /// The new node.
        node: NodeId,
        /// Its parent.
        parent: Option<NodeId>,
    },
    /// A node and its whole subtree were removed. `node` is now stale.
    Removed {
        /// The removed subtree root.
        node: NodeId,
        /// Its former parent.
        parent: Option<NodeId>,
    },
}

/// One rendered row of the outline, as produced by
/// [`Outline::visible_rows`](crate::Outline::visible_rows).
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Row {
    /// The node shown on this row.
    pub node: NodeId,
    /// Distance from the root (the root has depth `0`).
    pub depth: usize,
}
