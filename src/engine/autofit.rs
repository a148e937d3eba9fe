//! Content-driven column sizing.

use tracing::trace;

use super::{sizing, ResizeEngine};
use crate::element::ResizeHost;
use crate::groups::derive_table_groups;

impl ResizeEngine {
    /// Sizes a column to the widest content among its members.
    ///
    /// Triggered by a discrete gesture on the handle (double activation),
    /// independent of any drag session. Content measurement comes from the
    /// host; members it can't measure are skipped, and a column with no
    /// measurable members is left alone. Idempotent: a column already at its
    /// fitted width produces no updates and no dirty signal.
    pub fn auto_fit_column<H: ResizeHost>(
        &mut self,
        host: &mut H,
        group_id: &str,
        index: usize,
    ) -> bool {
        let limits = self.options.resize;

        let groups = derive_table_groups(host.elements());
        let Some(group) = groups.iter().find(|group| group.id == group_id) else {
            trace!("auto_fit_column: no group {group_id:?}");
            return false;
        };
        let Some(column) = group.column(index) else {
            trace!("auto_fit_column: no column {index} in {group_id:?}");
            return false;
        };

        let mut required: Option<f64> = None;
        for member in group.members.iter().filter(|member| member.column == index) {
            if let Some(width) = host.content_width(&member.id) {
                required = Some(required.map_or(width, |r| r.max(width)));
            }
        }
        let Some(required) = required else {
            return false;
        };

        let target = required.clamp(limits.min_column_width, limits.max_column_width);
        if (target - column.width).abs() < 1e-6 {
            return false;
        }

        sizing::apply_column_width(host, group, index, target);
        host.set_dirty(true);
        true
    }
}
