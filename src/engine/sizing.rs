//! Cascade math shared by the pointer, keyboard and auto-fit paths.
//!
//! Setting a column's width moves every later column by the same delta, so
//! the grid stays gap-free; same for row heights along y. All writes go
//! through the host's update channel, one patch per affected element.

use crate::element::{ElementId, GeometryPatch, ResizeHost};
use crate::groups::TableGroup;

/// Sets a column's width and shifts all later columns by the delta.
///
/// Returns the applied delta (0 when the column already has this width; the
/// width patch is still issued so all members of the column line up).
pub(crate) fn apply_column_width<H: ResizeHost>(
    host: &mut H,
    group: &TableGroup<ElementId<H>>,
    index: usize,
    width: f64,
) -> f64 {
    let Some(column) = group.column(index) else {
        return 0.;
    };
    let delta = width - column.width;

    for member in &group.members {
        if member.column == index {
            host.update_element(&member.id, GeometryPatch::width(width));
        } else if member.column > index && delta != 0. {
            host.update_element(&member.id, GeometryPatch::x(member.rect.x + delta));
        }
    }

    delta
}

/// Sets a row's height and shifts all later rows by the delta.
pub(crate) fn apply_row_height<H: ResizeHost>(
    host: &mut H,
    group: &TableGroup<ElementId<H>>,
    index: usize,
    height: f64,
) -> f64 {
    let Some(row) = group.row(index) else {
        return 0.;
    };
    let delta = height - row.height;

    for member in &group.members {
        if member.row == index {
            host.update_element(&member.id, GeometryPatch::height(height));
        } else if member.row > index && delta != 0. {
            host.update_element(&member.id, GeometryPatch::y(member.rect.y + delta));
        }
    }

    delta
}

/// Clamps a candidate column width so the group total stays within the
/// printable page width, re-flooring at the minimum column width.
///
/// `current_width` is the column's width as derived right now (not the
/// session's start width): the group total already includes every earlier
/// move of this session, and projecting from the start width would count
/// that growth twice.
pub(crate) fn clamp_to_page(
    candidate: f64,
    current_width: f64,
    group_width: f64,
    max_table_width: f64,
    min_column_width: f64,
) -> f64 {
    let proposed = group_width + (candidate - current_width);
    if proposed > max_table_width {
        (candidate - (proposed - max_table_width)).max(min_column_width)
    } else {
        candidate
    }
}

#[cfg(test)]
mod tests {
    use super::clamp_to_page;

    #[test]
    fn within_the_page_is_untouched() {
        assert_eq!(clamp_to_page(250., 200., 500., 595., 30.), 250.);
    }

    #[test]
    fn overshoot_lands_exactly_on_the_limit() {
        // Group at 590, candidate would take it to 690; allowed growth is 5.
        assert_eq!(clamp_to_page(300., 200., 590., 595., 30.), 205.);
    }

    #[test]
    fn reduction_floors_at_min_width() {
        // The group is already over the limit; the clamp may not push the
        // column below the minimum width.
        assert_eq!(clamp_to_page(40., 40., 900., 595., 30.), 30.);
    }
}
