// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use canopy_outline::Indicator;

/// Pointer cursor shown over the explorable area.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cursor {
    /// Idle: the content can be grabbed.
    Grab,
    /// A drag is in progress.
    Grabbing,
}

/// Display sink written by an [`Explorer`](crate::Explorer) after each change.
///
/// `K` is the outline key type, so implementations can find the element that
/// renders a node (for example a DOM id).
pub trait Surface<K> {
    /// Replaces the content container transform.
    fn set_transform(&mut self, transform: &str);

    /// Replaces the coordinate/zoom readout text.
    fn set_readout(&mut self, text: &str);

    /// Shows or hides the children of the branch `key` and turns its indicator.
    fn set_indicator(&mut self, key: &K, indicator: Indicator) {
        let _ = (key, indicator);
    }

    /// Changes the pointer cursor.
    fn set_cursor(&mut self, cursor: Cursor) {
        let _ = cursor;
    }
}

impl<K, S: Surface<K> + ?Sized> Surface<K> for &mut S {
    fn set_transform(&mut self, transform: &str) {
        (**self).set_transform(transform);
    }

    fn set_readout(&mut self, text: &str) {
        (**self).set_readout(text);
    }

    fn set_indicator(&mut self, key: &K, indicator: Indicator) {
        (**self).set_indicator(key, indicator);
    }

    fn set_cursor(&mut self, cursor: Cursor) {
        (**self).set_cursor(cursor);
    }
}
