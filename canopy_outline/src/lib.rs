// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Outline: expand/collapse state over an explicit node hierarchy.
//!
//! This crate focuses on the _bookkeeping_ of a collapsible tree such as a
//! taxonomy: which branches are expanded, which way each branch's indicator
//! points, and which rows are therefore shown. It does **not** render
//! anything; a presentation layer reads [`Outline::indicators`] or
//! [`Outline::visible_rows`] and draws accordingly.
//!
//! The core type is [`Outline`], an arena of nodes addressed by generational
//! [`NodeId`]s and looked up by a caller-chosen key:
//! - Parents own their ordered child lists; children hold a non-owning link
//!   to their parent.
//! - [`NodeKind::Branch`] nodes have a child list and an [`Indicator`];
//!   [`NodeKind::Leaf`] nodes have neither, and expand/collapse requests on
//!   them are no-ops.
//! - Expansion is per branch. Collapsing a parent hides its descendants but
//!   leaves their own flags alone.
//!
//! ## Minimal example
//!
//! ```rust
//! use canopy_outline::{Indicator, NodeKind, Outline};
//!
//! let mut outline = Outline::new();
//! let domains = outline.insert_root("domains", NodeKind::Branch).unwrap();
//! let eukarya = outline.insert_child(domains, "eukarya", NodeKind::Branch).unwrap();
//! outline.insert_child(eukarya, "animalia", NodeKind::Leaf).unwrap();
//!
//! // Everything starts collapsed: only the root row is shown.
//! assert_eq!(outline.visible_rows().len(), 1);
//!
//! outline.toggle_root();
//! outline.toggle(eukarya);
//! assert_eq!(outline.indicator(eukarya), Some(Indicator::Open));
//! assert_eq!(outline.visible_rows().len(), 3);
//!
//! // Hiding the root keeps `eukarya` expanded for next time.
//! outline.toggle_root();
//! assert!(outline.is_expanded(eukarya));
//! assert!(!outline.is_visible(eukarya));
//!
//! outline.collapse_all();
//! assert!(!outline.is_expanded(eukarya));
//! ```
//!
//! ## Structural changes
//!
//! [`Outline::set_on_structure_changed`] registers a callback that receives a
//! [`StructureChange`] after every insert or removal. Nothing is registered by
//! default.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod outline;
mod types;

pub use outline::{Outline, StructureCallback};
pub use types::{Indicator, NodeId, NodeKind, Row, StructureChange};
