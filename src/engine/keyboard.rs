//! Discrete keyboard resize of the focused handle.
//!
//! A handle gains focus by being hovered outside an active drag and keeps it
//! until Escape, blur or a newer hover. While focused, arrow keys step the
//! dimension: plain arrows by the default step, Shift by the large step,
//! Ctrl/Meta by the small step. Keys only reach the engine while the editor
//! is editable.

use bitflags::bitflags;
use tracing::trace;

use super::{sizing, Handle, HandleKind, ResizeEngine};
use crate::element::ResizeHost;
use crate::groups::derive_table_groups;

bitflags! {
    /// Modifier keys held during a key event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Modifiers: u8 {
        const SHIFT = 1;
        const CTRL = 1 << 1;
        const META = 1 << 2;
    }
}

/// Keys the engine reacts to; everything else never reaches it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Escape,
}

fn step_for(resize: &plandoc_config::Resize, mods: Modifiers) -> f64 {
    if mods.contains(Modifiers::SHIFT) {
        resize.large_step
    } else if mods.intersects(Modifiers::CTRL | Modifiers::META) {
        resize.small_step
    } else {
        resize.default_step
    }
}

impl ResizeEngine {
    /// Handles a key event against the focused handle.
    ///
    /// Returns whether the event was consumed. Stale focus (the group or
    /// index no longer resolves) silently consumes nothing and mutates
    /// nothing.
    pub fn handle_key<H: ResizeHost>(&mut self, host: &mut H, key: Key, mods: Modifiers) -> bool {
        if !host.is_editable() {
            return false;
        }

        if key == Key::Escape {
            return self.focused_handle.take().is_some();
        }

        let Some(handle) = self.focused_handle.clone() else {
            return false;
        };
        if self.is_resizing() {
            return false;
        }

        let step = step_for(&self.options.resize, mods);
        let delta = match (handle.kind, key) {
            (HandleKind::Column, Key::ArrowRight) => step,
            (HandleKind::Column, Key::ArrowLeft) => -step,
            (HandleKind::Row, Key::ArrowDown) => step,
            (HandleKind::Row, Key::ArrowUp) => -step,
            _ => return false,
        };

        match handle.kind {
            HandleKind::Column => self.step_column(host, &handle, delta),
            HandleKind::Row => self.step_row(host, &handle, delta),
        }
    }

    fn step_column<H: ResizeHost>(&mut self, host: &mut H, handle: &Handle, delta: f64) -> bool {
        let limits = self.options.resize;

        let groups = derive_table_groups(host.elements());
        let Some(group) = groups.iter().find(|group| group.id == handle.group_id) else {
            trace!("focused column handle went stale: {:?}", handle.group_id);
            return false;
        };
        let Some(column) = group.column(handle.index) else {
            trace!("focused column handle went stale: index {}", handle.index);
            return false;
        };

        // FIXME: unlike the pointer path, keyboard resize does not enforce
        // the page width limit, so repeated steps can push the group past it.
        let target =
            (column.width + delta).clamp(limits.min_column_width, limits.max_column_width);
        if target == column.width {
            // Fully clamped; the key is consumed but nothing changed.
            return true;
        }

        sizing::apply_column_width(host, group, handle.index, target);
        host.set_dirty(true);
        true
    }

    fn step_row<H: ResizeHost>(&mut self, host: &mut H, handle: &Handle, delta: f64) -> bool {
        let limits = self.options.resize;

        let groups = derive_table_groups(host.elements());
        let Some(group) = groups.iter().find(|group| group.id == handle.group_id) else {
            trace!("focused row handle went stale: {:?}", handle.group_id);
            return false;
        };
        let Some(row) = group.row(handle.index) else {
            trace!("focused row handle went stale: index {}", handle.index);
            return false;
        };

        let target = (row.height + delta).clamp(limits.min_row_height, limits.max_row_height);
        if target == row.height {
            return true;
        }

        sizing::apply_row_height(host, group, handle.index, target);
        host.set_dirty(true);
        true
    }
}
