// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::ToString;
use core::borrow::Borrow;
use core::hash::Hash;

use canopy_outline::{NodeId, Outline};
use canopy_viewport::{ViewportTransform, ZoomDirection};
use kurbo::Point;

use crate::event::{InputEvent, PointerButton};
use crate::keymap::{Command, Keymap};
use crate::surface::{Cursor, Surface};

/// Result of [`Explorer::handle`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The event was used; the host should suppress its default action
    /// (page scroll, space-bar paging, browser zoom).
    Handled,
    /// The event was not for us.
    Ignored,
}

impl Outcome {
    fn from_bool(handled: bool) -> Self {
        if handled { Self::Handled } else { Self::Ignored }
    }
}

/// Serialized owner of a viewport, an outline, and the surface showing them.
///
/// Every input event and every direct operation goes through `&mut self`, so a
/// drag and a zoom never interleave their updates. After each change the
/// affected parts of the [`Surface`] are rewritten.
#[derive(Debug)]
pub struct Explorer<K, S> {
    viewport: ViewportTransform,
    outline: Outline<K>,
    keymap: Keymap,
    surface: S,
}

impl<K, S> Explorer<K, S>
where
    K: Clone + Eq + Hash,
    S: Surface<K>,
{
    /// Creates an explorer, collapses the whole outline, and paints the surface once.
    pub fn new(viewport: ViewportTransform, outline: Outline<K>, surface: S) -> Self {
        let mut explorer = Self {
            viewport,
            outline,
            keymap: Keymap::default(),
            surface,
        };
        explorer.outline.collapse_all();
        explorer.refresh();
        explorer
    }

    /// Replaces the keyboard shortcuts.
    #[must_use]
    pub fn with_keymap(mut self, keymap: Keymap) -> Self {
        self.keymap = keymap;
        self
    }

    /// Returns the viewport.
    pub fn viewport(&self) -> &ViewportTransform {
        &self.viewport
    }

    /// Returns the outline.
    pub fn outline(&self) -> &Outline<K> {
        &self.outline
    }

    /// Edits the outline structure, then repaints every indicator.
    pub fn edit_outline<R>(&mut self, f: impl FnOnce(&mut Outline<K>) -> R) -> R {
        let result = f(&mut self.outline);
        self.refresh_indicators();
        result
    }

    /// Returns the keyboard shortcuts.
    pub fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    /// Returns the surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Returns the surface mutably.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Splits the explorer back into its parts.
    pub fn into_parts(self) -> (ViewportTransform, Outline<K>, S) {
        (self.viewport, self.outline, self.surface)
    }

    /// Routes one input event.
    pub fn handle(&mut self, event: &InputEvent) -> Outcome {
        match *event {
            InputEvent::PointerDown { position, button } => {
                if button != PointerButton::Primary {
                    return Outcome::Ignored;
                }
                self.begin_drag(position);
                Outcome::Handled
            }
            InputEvent::PointerMove { position } => Outcome::from_bool(self.update_drag(position)),
            InputEvent::PointerUp | InputEvent::TouchEnd => Outcome::from_bool(self.end_drag()),
            InputEvent::TouchStart { touches, position } => {
                if touches != 1 {
                    return Outcome::Ignored;
                }
                self.begin_drag(position);
                Outcome::Handled
            }
            InputEvent::TouchMove { touches, position } => {
                if touches != 1 || !self.viewport.is_dragging() {
                    return Outcome::Ignored;
                }
                self.update_drag(position);
                Outcome::Handled
            }
            InputEvent::Wheel { position, delta_y } => {
                let direction = if delta_y < 0.0 {
                    ZoomDirection::In
                } else if delta_y > 0.0 {
                    ZoomDirection::Out
                } else {
                    return Outcome::Ignored;
                };
                self.zoom(direction, Some(position));
                Outcome::Handled
            }
            InputEvent::KeyDown { key, modifiers } => match self.keymap.resolve(key, modifiers) {
                Some(command) => {
                    self.run(command);
                    Outcome::Handled
                }
                None => Outcome::Ignored,
            },
        }
    }

    /// Executes a command as if its shortcut had been pressed.
    ///
    /// Returns `true` if any state changed.
    pub fn run(&mut self, command: Command) -> bool {
        log::debug!("explorer command {command:?}");
        match command {
            Command::ResetView => self.reset(),
            Command::ZoomIn => self.zoom(ZoomDirection::In, None),
            Command::ZoomOut => self.zoom(ZoomDirection::Out, None),
            Command::ToggleRoot => self.toggle_root(),
            Command::ExpandAll => self.expand_all(),
            Command::CollapseAll => self.collapse_all(),
        }
    }

    /// Starts a pan drag at `pointer`.
    pub fn begin_drag(&mut self, pointer: Point) {
        self.viewport.begin_drag(pointer);
        self.surface.set_cursor(Cursor::Grabbing);
    }

    /// Continues a pan drag. Ignored when no drag is active.
    pub fn update_drag(&mut self, pointer: Point) -> bool {
        let changed = self.viewport.update_drag(pointer);
        if changed {
            log::trace!("explorer drag to {pointer:?}");
            self.refresh_view();
        }
        changed
    }

    /// Ends a pan drag. Returns `true` if one was active.
    pub fn end_drag(&mut self) -> bool {
        let was_dragging = self.viewport.is_dragging();
        self.viewport.end_drag();
        self.surface.set_cursor(Cursor::Grab);
        was_dragging
    }

    /// Zooms one step, around `anchor` when given.
    pub fn zoom(&mut self, direction: ZoomDirection, anchor: Option<Point>) -> bool {
        let changed = self.viewport.zoom(direction, anchor);
        if changed {
            self.refresh_view();
        }
        changed
    }

    /// Restores the initial view.
    pub fn reset(&mut self) -> bool {
        let changed = self.viewport.reset();
        if changed {
            self.refresh_view();
        }
        changed
    }

    /// Expands or collapses one branch.
    pub fn toggle_node(&mut self, node: NodeId) -> bool {
        let changed = self.outline.toggle(node);
        if changed {
            self.refresh_indicator(node);
        }
        changed
    }

    /// Expands or collapses the branch with the given key.
    pub fn toggle_key<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.outline.find(key) {
            Some(node) => self.toggle_node(node),
            None => false,
        }
    }

    /// Expands or collapses the root.
    pub fn toggle_root(&mut self) -> bool {
        match self.outline.root() {
            Some(root) => self.toggle_node(root),
            None => false,
        }
    }

    /// Expands every branch.
    pub fn expand_all(&mut self) -> bool {
        let changed = self.outline.expand_all();
        if changed {
            self.refresh_indicators();
        }
        changed
    }

    /// Collapses every branch.
    pub fn collapse_all(&mut self) -> bool {
        let changed = self.outline.collapse_all();
        if changed {
            self.refresh_indicators();
        }
        changed
    }

    /// Rewrites the whole surface.
    pub fn refresh(&mut self) {
        self.refresh_view();
        self.refresh_indicators();
        let cursor = if self.viewport.is_dragging() {
            Cursor::Grabbing
        } else {
            Cursor::Grab
        };
        self.surface.set_cursor(cursor);
    }

    fn refresh_view(&mut self) {
        let state = self.viewport.state();
        let centered = self.viewport.config().centered;
        self.surface
            .set_transform(&state.transform_css(centered).to_string());
        self.surface.set_readout(&state.readout().to_string());
    }

    fn refresh_indicator(&mut self, node: NodeId) {
        if let (Some(key), Some(indicator)) = (self.outline.key(node), self.outline.indicator(node))
        {
            self.surface.set_indicator(key, indicator);
        }
    }

    fn refresh_indicators(&mut self) {
        for (_, key, indicator) in self.outline.indicators() {
            self.surface.set_indicator(key, indicator);
        }
    }
}
