//! Pure derivation of table structure from the flat element list.
//!
//! There is no owned grid data structure anywhere: a table group is
//! reconstructed from element positions every time the engine needs one.
//! Recomputing per interaction trades a little work for immunity to staleness
//! — an externally re-rendered canvas can never leave the derivation out of
//! date, only the transient session that references it (which then no-ops).

use crate::element::CanvasElement;
use crate::geometry::Rect;

/// Tolerance when binning element positions into columns and rows.
const COORD_EPSILON: f64 = 0.5;

/// One column of a table group, ordered by `x` ascending.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableColumn {
    pub index: usize,
    pub x: f64,
    pub width: f64,
}

/// One row of a table group, ordered by `y` ascending.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableRow {
    pub index: usize,
    pub y: f64,
    pub height: f64,
}

/// An element's place within its group's grid.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupMember<Id> {
    pub id: Id,
    pub column: usize,
    pub row: usize,
    pub rect: Rect,
}

/// A cluster of elements recognized as one column/row grid.
#[derive(Debug, Clone, PartialEq)]
pub struct TableGroup<Id> {
    pub id: String,
    pub columns: Vec<TableColumn>,
    pub rows: Vec<TableRow>,
    pub members: Vec<GroupMember<Id>>,
    pub bounds: Rect,
}

impl<Id> TableGroup<Id> {
    pub fn column(&self, index: usize) -> Option<&TableColumn> {
        self.columns.get(index)
    }

    pub fn row(&self, index: usize) -> Option<&TableRow> {
        self.rows.get(index)
    }

    /// Total width of the group, `Σ column.width`.
    pub fn width(&self) -> f64 {
        self.columns.iter().map(|col| col.width).sum()
    }

    /// Total height of the group, `Σ row.height`.
    pub fn height(&self) -> f64 {
        self.rows.iter().map(|row| row.height).sum()
    }

    #[cfg(test)]
    pub fn verify_invariants(&self, resize: &plandoc_config::Resize) {
        assert!(!self.columns.is_empty(), "groups can't be empty");
        assert!(!self.rows.is_empty(), "groups can't be empty");
        assert!(!self.members.is_empty(), "groups can't be empty");

        for (i, col) in self.columns.iter().enumerate() {
            assert_eq!(col.index, i);
            assert!(
                col.width >= resize.min_column_width - 1e-6
                    && col.width <= resize.max_column_width + 1e-6,
                "column width {} out of [{}, {}]",
                col.width,
                resize.min_column_width,
                resize.max_column_width,
            );
        }
        for (i, row) in self.rows.iter().enumerate() {
            assert_eq!(row.index, i);
            assert!(
                row.height >= resize.min_row_height - 1e-6
                    && row.height <= resize.max_row_height + 1e-6,
                "row height {} out of [{}, {}]",
                row.height,
                resize.min_row_height,
                resize.max_row_height,
            );
        }

        // Contiguity: no gaps or overlaps between adjacent columns and rows.
        for pair in self.columns.windows(2) {
            assert!(
                (pair[0].x + pair[0].width - pair[1].x).abs() < 1e-6,
                "columns must be contiguous: {} + {} != {}",
                pair[0].x,
                pair[0].width,
                pair[1].x,
            );
        }
        for pair in self.rows.windows(2) {
            assert!(
                (pair[0].y + pair[0].height - pair[1].y).abs() < 1e-6,
                "rows must be contiguous: {} + {} != {}",
                pair[0].y,
                pair[0].height,
                pair[1].y,
            );
        }

        for member in &self.members {
            assert!(member.column < self.columns.len());
            assert!(member.row < self.rows.len());
        }
    }
}

/// Groups positioned elements into table groups.
///
/// Elements sharing a group id form one group, in order of first appearance.
/// Within a group, the distinct element x-positions become the columns and
/// the distinct y-positions the rows; a column's width is the widest member
/// at that x (rows analogously). Elements without a group id are skipped.
pub fn derive_table_groups<E: CanvasElement>(elements: &[E]) -> Vec<TableGroup<E::Id>> {
    let mut raw: Vec<(String, Vec<(E::Id, Rect)>)> = Vec::new();

    for element in elements {
        let Some(group_id) = element.group_id() else {
            continue;
        };

        let entry = match raw.iter_mut().find(|(id, _)| id.as_str() == group_id) {
            Some(entry) => entry,
            None => {
                raw.push((group_id.to_owned(), Vec::new()));
                raw.last_mut().unwrap()
            }
        };
        entry.1.push((element.id().clone(), element.rect()));
    }

    raw.into_iter()
        .map(|(id, members)| build_group(id, members))
        .collect()
}

fn build_group<Id>(id: String, raw_members: Vec<(Id, Rect)>) -> TableGroup<Id> {
    let xs = bin_coordinates(raw_members.iter().map(|(_, rect)| rect.x));
    let ys = bin_coordinates(raw_members.iter().map(|(_, rect)| rect.y));

    let mut columns: Vec<TableColumn> = xs
        .iter()
        .enumerate()
        .map(|(index, &x)| TableColumn {
            index,
            x,
            width: 0.,
        })
        .collect();
    let mut rows: Vec<TableRow> = ys
        .iter()
        .enumerate()
        .map(|(index, &y)| TableRow {
            index,
            y,
            height: 0.,
        })
        .collect();

    let mut members = Vec::with_capacity(raw_members.len());
    let mut bounds: Option<Rect> = None;

    for (id, rect) in raw_members {
        let column = bin_index(&xs, rect.x);
        let row = bin_index(&ys, rect.y);

        columns[column].width = columns[column].width.max(rect.w);
        rows[row].height = rows[row].height.max(rect.h);

        bounds = Some(match bounds {
            Some(b) => b.union(&rect),
            None => rect,
        });

        members.push(GroupMember {
            id,
            column,
            row,
            rect,
        });
    }

    TableGroup {
        id,
        columns,
        rows,
        members,
        bounds: bounds.unwrap_or_default(),
    }
}

/// Collects distinct coordinates (within [`COORD_EPSILON`]), sorted ascending.
fn bin_coordinates(coords: impl Iterator<Item = f64>) -> Vec<f64> {
    let mut bins: Vec<f64> = Vec::new();
    for coord in coords {
        if !bins.iter().any(|&bin| (bin - coord).abs() <= COORD_EPSILON) {
            bins.push(coord);
        }
    }
    bins.sort_by(|a, b| a.partial_cmp(b).unwrap());
    bins
}

fn bin_index(bins: &[f64], coord: f64) -> usize {
    bins.iter()
        .position(|&bin| (bin - coord).abs() <= COORD_EPSILON)
        .unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    struct El {
        id: usize,
        rect: Rect,
        group: Option<String>,
    }

    impl CanvasElement for El {
        type Id = usize;

        fn id(&self) -> &usize {
            &self.id
        }

        fn rect(&self) -> Rect {
            self.rect
        }

        fn group_id(&self) -> Option<&str> {
            self.group.as_deref()
        }
    }

    fn cell(id: usize, group: &str, x: f64, y: f64, w: f64, h: f64) -> El {
        El {
            id,
            rect: Rect::new(x, y, w, h),
            group: Some(group.to_owned()),
        }
    }

    #[test]
    fn derives_columns_and_rows_from_positions() {
        // 3×2 grid; elements deliberately out of order.
        let elements = vec![
            cell(4, "t1", 100., 75., 150., 25.),
            cell(0, "t1", 0., 50., 100., 25.),
            cell(5, "t1", 250., 75., 80., 25.),
            cell(1, "t1", 100., 50., 150., 25.),
            cell(2, "t1", 250., 50., 80., 25.),
            cell(3, "t1", 0., 75., 100., 25.),
        ];

        let groups = derive_table_groups(&elements);
        assert_eq!(groups.len(), 1);

        let group = &groups[0];
        assert_eq!(group.id, "t1");
        assert_eq!(group.columns.len(), 3);
        assert_eq!(group.rows.len(), 2);
        assert_eq!(group.members.len(), 6);

        assert_eq!(group.columns[0].x, 0.);
        assert_eq!(group.columns[0].width, 100.);
        assert_eq!(group.columns[1].x, 100.);
        assert_eq!(group.columns[1].width, 150.);
        assert_eq!(group.columns[2].x, 250.);
        assert_eq!(group.columns[2].width, 80.);

        assert_eq!(group.rows[0].y, 50.);
        assert_eq!(group.rows[1].y, 75.);
        assert_eq!(group.width(), 330.);
        assert_eq!(group.bounds, Rect::new(0., 50., 330., 50.));

        let member = group.members.iter().find(|m| m.id == 5).unwrap();
        assert_eq!((member.column, member.row), (2, 1));
    }

    #[test]
    fn ungrouped_elements_are_skipped() {
        let elements = vec![
            El {
                id: 0,
                rect: Rect::new(10., 10., 50., 50.),
                group: None,
            },
            cell(1, "t1", 0., 0., 100., 25.),
        ];

        let groups = derive_table_groups(&elements);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].members.len(), 1);
    }

    #[test]
    fn groups_keep_first_appearance_order() {
        let elements = vec![
            cell(0, "b", 0., 0., 100., 25.),
            cell(1, "a", 0., 0., 100., 25.),
            cell(2, "b", 100., 0., 100., 25.),
        ];

        let groups = derive_table_groups(&elements);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].id, "b");
        assert_eq!(groups[1].id, "a");
        assert_eq!(groups[0].members.len(), 2);
    }

    #[test]
    fn near_equal_positions_share_a_bin() {
        // Positions differing by less than the tolerance land in one column.
        let elements = vec![
            cell(0, "t1", 0., 0., 100., 25.),
            cell(1, "t1", 0.3, 25., 100., 25.),
        ];

        let groups = derive_table_groups(&elements);
        assert_eq!(groups[0].columns.len(), 1);
        assert_eq!(groups[0].rows.len(), 2);
    }

    #[test]
    fn empty_input_derives_nothing() {
        let groups = derive_table_groups::<El>(&[]);
        assert!(groups.is_empty());
    }
}
