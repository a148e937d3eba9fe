//! Pointer-driven resize sessions.
//!
//! A session opens on pointer press over a handle, tracks motion until
//! release, and always commits the last computed geometry — there is no
//! mid-drag cancel. Motion is coalesced to one layout pass per rendered
//! frame: [`ResizeEngine::pointer_motion`] only records the latest position
//! and [`ResizeEngine::advance_frame`] applies it.

use tracing::trace;

use super::{sizing, ColumnResize, ResizeEngine, RowResize};
use crate::element::ResizeHost;
use crate::geometry::Point;
use crate::groups::derive_table_groups;

/// Offset from the pointer to the live dimension readout.
const TOOLTIP_OFFSET: Point = Point { x: 12., y: -24. };

impl ResizeEngine {
    /// Opens a column resize session at the given pointer position.
    ///
    /// No-op (returning `false`) when another session is active or the
    /// group/index doesn't resolve. Acquires the host's interaction lock for
    /// the duration of the session.
    pub fn begin_column_resize<H: ResizeHost>(
        &mut self,
        host: &mut H,
        group_id: &str,
        index: usize,
        pos: Point,
    ) -> bool {
        if self.is_resizing() {
            return false;
        }

        let groups = derive_table_groups(host.elements());
        let Some(group) = groups.iter().find(|group| group.id == group_id) else {
            trace!("begin_column_resize: no group {group_id:?}");
            return false;
        };
        let Some(column) = group.column(index) else {
            trace!("begin_column_resize: no column {index} in {group_id:?}");
            return false;
        };

        host.acquire_interaction_lock();
        self.resizing_column = Some(ColumnResize {
            group_id: group.id.clone(),
            index,
            start_x: pos.x,
            start_width: column.width,
            current_delta: 0.,
            current_width: column.width,
            tooltip: pos + TOOLTIP_OFFSET,
            changed: false,
            pending_pointer: None,
        });

        true
    }

    /// Opens a row resize session at the given pointer position.
    pub fn begin_row_resize<H: ResizeHost>(
        &mut self,
        host: &mut H,
        group_id: &str,
        index: usize,
        pos: Point,
    ) -> bool {
        if self.is_resizing() {
            return false;
        }

        let groups = derive_table_groups(host.elements());
        let Some(group) = groups.iter().find(|group| group.id == group_id) else {
            trace!("begin_row_resize: no group {group_id:?}");
            return false;
        };
        let Some(row) = group.row(index) else {
            trace!("begin_row_resize: no row {index} in {group_id:?}");
            return false;
        };

        host.acquire_interaction_lock();
        self.resizing_row = Some(RowResize {
            group_id: group.id.clone(),
            index,
            start_y: pos.y,
            start_height: row.height,
            current_delta: 0.,
            current_height: row.height,
            tooltip: pos + TOOLTIP_OFFSET,
            changed: false,
            pending_pointer: None,
        });

        true
    }

    /// Feeds pointer motion into the active session.
    ///
    /// Returns `false` when no session is active. The motion is applied on
    /// the next [`ResizeEngine::advance_frame`] call unless throttling is
    /// disabled in the options.
    pub fn pointer_motion<H: ResizeHost>(&mut self, host: &mut H, pos: Point) -> bool {
        if !self.is_resizing() {
            return false;
        }

        if self.options.disable_resize_throttling {
            return self.apply_pointer(host, pos);
        }

        if let Some(resize) = &mut self.resizing_column {
            resize.pending_pointer = Some(pos);
        } else if let Some(resize) = &mut self.resizing_row {
            resize.pending_pointer = Some(pos);
        }
        true
    }

    /// Runs the per-frame layout pass, applying any coalesced motion.
    pub fn advance_frame<H: ResizeHost>(&mut self, host: &mut H) {
        let pending = match (&mut self.resizing_column, &mut self.resizing_row) {
            (Some(resize), _) => resize.pending_pointer.take(),
            (_, Some(resize)) => resize.pending_pointer.take(),
            _ => None,
        };

        if let Some(pos) = pending {
            self.apply_pointer(host, pos);
        }
    }

    /// Commits the session: flushes pending motion, signals dirty if the
    /// drag changed any geometry, and releases the interaction lock.
    pub fn pointer_resize_end<H: ResizeHost>(&mut self, host: &mut H) {
        self.advance_frame(host);

        let changed = match (self.resizing_column.take(), self.resizing_row.take()) {
            (Some(resize), _) => resize.changed,
            (_, Some(resize)) => resize.changed,
            _ => return,
        };

        if changed {
            host.set_dirty(true);
        }
        host.release_interaction_lock();
    }

    fn apply_pointer<H: ResizeHost>(&mut self, host: &mut H, pos: Point) -> bool {
        if self.resizing_column.is_some() {
            self.apply_column_motion(host, pos)
        } else if self.resizing_row.is_some() {
            self.apply_row_motion(host, pos)
        } else {
            false
        }
    }

    fn apply_column_motion<H: ResizeHost>(&mut self, host: &mut H, pos: Point) -> bool {
        let limits = self.options.resize;
        let Some(resize) = &mut self.resizing_column else {
            return false;
        };

        let groups = derive_table_groups(host.elements());
        let Some(group) = groups.iter().find(|group| group.id == resize.group_id) else {
            trace!("column resize session went stale: {:?}", resize.group_id);
            return false;
        };
        let Some(column) = group.column(resize.index) else {
            trace!("column resize session went stale: index {}", resize.index);
            return false;
        };

        let delta = pos.x - resize.start_x;
        let candidate = (resize.start_width + delta)
            .clamp(limits.min_column_width, limits.max_column_width);
        let target = sizing::clamp_to_page(
            candidate,
            column.width,
            group.width(),
            host.page().max_table_width(),
            limits.min_column_width,
        );

        let applied = sizing::apply_column_width(host, group, resize.index, target);

        resize.current_width = target;
        resize.current_delta = target - resize.start_width;
        resize.tooltip = pos + TOOLTIP_OFFSET;
        if applied != 0. {
            resize.changed = true;
        }

        true
    }

    fn apply_row_motion<H: ResizeHost>(&mut self, host: &mut H, pos: Point) -> bool {
        let limits = self.options.resize;
        let Some(resize) = &mut self.resizing_row else {
            return false;
        };

        let groups = derive_table_groups(host.elements());
        let Some(group) = groups.iter().find(|group| group.id == resize.group_id) else {
            trace!("row resize session went stale: {:?}", resize.group_id);
            return false;
        };
        if group.row(resize.index).is_none() {
            trace!("row resize session went stale: index {}", resize.index);
            return false;
        }

        // Rows grow the page's vertical extent freely; only the dimension
        // limits apply.
        let delta = pos.y - resize.start_y;
        let target =
            (resize.start_height + delta).clamp(limits.min_row_height, limits.max_row_height);

        let applied = sizing::apply_row_height(host, group, resize.index, target);

        resize.current_height = target;
        resize.current_delta = target - resize.start_height;
        resize.tooltip = pos + TOOLTIP_OFFSET;
        if applied != 0. {
            resize.changed = true;
        }

        true
    }
}
