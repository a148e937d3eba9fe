//! The resize engine: pointer sessions, keyboard stepping and auto-fit.
//!
//! One [`ResizeEngine`] lives for the lifetime of the editor. It carries the
//! transient pointer-resize session, the hovered/focused handle, and nothing
//! else — table structure is re-derived from the host's elements on every
//! event, so external re-renders can never desynchronize it. A session whose
//! group or index no longer resolves simply stops having an effect.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::element::ResizeHost;
use crate::geometry::Point;

mod autofit;
mod keyboard;
mod session;
mod sizing;

pub use keyboard::{Key, Modifiers};

/// Which axis a resize handle controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HandleKind {
    Column,
    Row,
}

/// A column or row resize handle on a specific table group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Handle {
    pub kind: HandleKind,
    pub group_id: String,
    pub index: usize,
}

impl Handle {
    pub fn column(group_id: impl Into<String>, index: usize) -> Self {
        Self {
            kind: HandleKind::Column,
            group_id: group_id.into(),
            index,
        }
    }

    pub fn row(group_id: impl Into<String>, index: usize) -> Self {
        Self {
            kind: HandleKind::Row,
            group_id: group_id.into(),
            index,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    pub resize: plandoc_config::Resize,
    /// Apply pointer motion immediately instead of coalescing per frame.
    ///
    /// Debug option; normal operation runs one layout pass per rendered
    /// frame no matter how fast the pointer moves.
    pub disable_resize_throttling: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            resize: plandoc_config::Resize::default(),
            disable_resize_throttling: false,
        }
    }
}

/// State of an ongoing pointer-driven column resize.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnResize {
    pub group_id: String,
    pub index: usize,
    pub start_x: f64,
    pub start_width: f64,
    pub current_delta: f64,
    pub current_width: f64,
    /// Where the live dimension readout should render.
    pub tooltip: Point,
    pub(crate) changed: bool,
    pub(crate) pending_pointer: Option<Point>,
}

/// State of an ongoing pointer-driven row resize.
#[derive(Debug, Clone, PartialEq)]
pub struct RowResize {
    pub group_id: String,
    pub index: usize,
    pub start_y: f64,
    pub start_height: f64,
    pub current_delta: f64,
    pub current_height: f64,
    pub tooltip: Point,
    pub(crate) changed: bool,
    pub(crate) pending_pointer: Option<Point>,
}

#[derive(Debug, Default)]
pub struct ResizeEngine {
    options: Options,
    resizing_column: Option<ColumnResize>,
    resizing_row: Option<RowResize>,
    hovered_handle: Option<Handle>,
    focused_handle: Option<Handle>,
}

impl ResizeEngine {
    pub fn new(options: Options) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn update_options(&mut self, options: Options) {
        self.options = options;
    }

    /// Current column resize session, for overlay/tooltip rendering.
    pub fn resizing_column(&self) -> Option<&ColumnResize> {
        self.resizing_column.as_ref()
    }

    /// Current row resize session, for overlay/tooltip rendering.
    pub fn resizing_row(&self) -> Option<&RowResize> {
        self.resizing_row.as_ref()
    }

    pub fn is_resizing(&self) -> bool {
        self.resizing_column.is_some() || self.resizing_row.is_some()
    }

    pub fn hovered_handle(&self) -> Option<&Handle> {
        self.hovered_handle.as_ref()
    }

    pub fn focused_handle(&self) -> Option<&Handle> {
        self.focused_handle.as_ref()
    }

    /// Updates the hovered handle from pointer tracking.
    ///
    /// Hovering a handle also focuses it for keyboard resize. During an
    /// active drag hover changes are ignored, so the pointer and keyboard
    /// paths can't fight over the same handle mid-session.
    pub fn set_hovered_handle(&mut self, handle: Option<Handle>) {
        if self.is_resizing() {
            return;
        }

        if let Some(handle) = &handle {
            self.focused_handle = Some(handle.clone());
        }
        self.hovered_handle = handle;
    }

    /// Clears keyboard focus (Escape, or the editor losing input focus).
    pub fn clear_focused_handle(&mut self) {
        self.focused_handle = None;
    }

    /// Forced teardown: drops any session and focus state and releases the
    /// interaction lock.
    ///
    /// For callers discarding the editor mid-drag; a normal release goes
    /// through [`ResizeEngine::pointer_resize_end`] instead and commits.
    pub fn cancel_interactions<H: ResizeHost>(&mut self, host: &mut H) {
        let column = self.resizing_column.take().is_some();
        let row = self.resizing_row.take().is_some();
        if column || row {
            trace!("interactions cancelled mid-session");
            host.release_interaction_lock();
        }

        self.hovered_handle = None;
        self.focused_handle = None;
    }
}
