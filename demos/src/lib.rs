// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the Canopy demos: a JSON taxonomy loader and a surface
//! that prints what it is asked to show.

use std::collections::HashMap;
use std::fmt;

use canopy_explorer::{Cursor, Surface};
use canopy_outline::{Indicator, NodeId, NodeKind, Outline};
use serde::Deserialize;

/// One node of a taxonomy description.
///
/// A node with a `children` array (even an empty one) is a branch; a node
/// without it is a leaf.
#[derive(Clone, Debug, Deserialize)]
pub struct TaxonNode {
    /// Unique id, used as the outline key.
    pub id: String,
    /// Display label.
    pub label: String,
    /// Child taxa.
    #[serde(default)]
    pub children: Option<Vec<TaxonNode>>,
}

/// A loaded taxonomy: the outline plus the labels of its nodes.
#[derive(Debug)]
pub struct Taxonomy {
    /// Expand/collapse state keyed by node id.
    pub outline: Outline<String>,
    /// Display label per node id.
    pub labels: HashMap<String, String>,
}

impl Taxonomy {
    /// Parses a taxonomy from JSON.
    ///
    /// Nodes whose id repeats an earlier one are skipped with a warning.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let root: TaxonNode = serde_json::from_str(json)?;
        Ok(Self::from_root(root))
    }

    /// Builds a taxonomy from an already-parsed root node.
    pub fn from_root(root: TaxonNode) -> Self {
        let mut taxonomy = Self {
            outline: Outline::new(),
            labels: HashMap::new(),
        };
        let kind = kind_of(&root);
        if let Some(id) = taxonomy.outline.insert_root(root.id.clone(), kind) {
            taxonomy.labels.insert(root.id, root.label);
            let mut pending: Vec<(NodeId, Vec<TaxonNode>)> =
                vec![(id, root.children.unwrap_or_default())];
            while let Some((parent, children)) = pending.pop() {
                for child in children {
                    let kind = kind_of(&child);
                    match taxonomy.outline.insert_child(parent, child.id.clone(), kind) {
                        Some(node) => {
                            taxonomy.labels.insert(child.id, child.label);
                            pending.push((node, child.children.unwrap_or_default()));
                        }
                        None => log::warn!("skipping duplicate taxon id {:?}", child.id),
                    }
                }
            }
        }
        taxonomy
    }

    /// Returns a formatter listing the currently visible rows, indented by depth.
    pub fn rows(&self) -> VisibleRows<'_> {
        VisibleRows { taxonomy: self }
    }

    /// Renders the currently visible rows as an indented list.
    pub fn render_rows(&self) -> String {
        self.rows().to_string()
    }
}

/// Display adapter returned by [`Taxonomy::rows`].
#[derive(Clone, Copy, Debug)]
pub struct VisibleRows<'a> {
    taxonomy: &'a Taxonomy,
}

impl fmt::Display for VisibleRows<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Taxonomy { outline, labels } = self.taxonomy;
        for row in outline.visible_rows() {
            let Some(key) = outline.key(row.node) else {
                continue;
            };
            let marker = match outline.indicator(row.node) {
                Some(Indicator::Open) => "v",
                Some(Indicator::Closed) => ">",
                None => "-",
            };
            let label = labels.get(key).map_or(key.as_str(), String::as_str);
            writeln!(f, "{:indent$}{marker} {label}", "", indent = row.depth * 2)?;
        }
        Ok(())
    }
}

fn kind_of(node: &TaxonNode) -> NodeKind {
    if node.children.is_some() {
        NodeKind::Branch
    } else {
        NodeKind::Leaf
    }
}

/// Surface that logs every write to stdout and remembers the latest values.
#[derive(Debug, Default)]
pub struct ConsoleSurface {
    /// Last transform written.
    pub transform: String,
    /// Last readout written.
    pub readout: String,
    /// Last cursor set.
    pub cursor: Option<Cursor>,
    /// When set, nothing is printed.
    pub quiet: bool,
}

impl Surface<String> for ConsoleSurface {
    fn set_transform(&mut self, transform: &str) {
        transform.clone_into(&mut self.transform);
        if !self.quiet {
            println!("  transform: {transform}");
        }
    }

    fn set_readout(&mut self, text: &str) {
        text.clone_into(&mut self.readout);
        if !self.quiet {
            println!("  readout:   {text}");
        }
    }

    fn set_indicator(&mut self, key: &String, indicator: Indicator) {
        if !self.quiet {
            println!("  {key}: {indicator:?}");
        }
    }

    fn set_cursor(&mut self, cursor: Cursor) {
        if self.cursor != Some(cursor) && !self.quiet {
            println!("  cursor:    {cursor:?}");
        }
        self.cursor = Some(cursor);
    }
}
