//! Interactive resize engine for grid-structured canvas elements.
//!
//! A document canvas holds loosely-coupled positioned elements. Elements that
//! share a group id form a "table group": a grid whose columns and rows are
//! derived purely from element geometry, with no owned tree structure. This
//! crate resizes those columns and rows interactively — continuous pointer
//! drags, discrete keyboard steps on a focused handle, and content-driven
//! auto-fit — while keeping cells contiguous and tables within the printable
//! page width.
//!
//! The engine never owns the elements. It reads them through [`ResizeHost`],
//! re-derives the grid structure fresh on every interaction, and writes all
//! geometry changes back through the host's single update channel. The only
//! state it keeps between events is the transient resize session and the
//! hovered/focused handle.

mod element;
mod engine;
mod geometry;
mod groups;

pub use element::{CanvasElement, ElementId, GeometryPatch, ResizeHost};
pub use engine::{
    ColumnResize, Handle, HandleKind, Key, Modifiers, Options, ResizeEngine, RowResize,
};
pub use geometry::{Point, Rect, Size};
pub use groups::{derive_table_groups, GroupMember, TableColumn, TableGroup, TableRow};
pub use plandoc_config::{Config, Orientation, Page, PageSize, Resize};
