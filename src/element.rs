//! The seam between the engine and the surrounding editor.
//!
//! The editor owns the element collection, the document page settings and the
//! dirty flag; the engine sees all of them through [`ResizeHost`]. Geometry
//! changes flow back through [`ResizeHost::update_element`] exclusively — the
//! engine holds no independent copy of element state.

use std::fmt;

use plandoc_config::Page;
use serde::{Deserialize, Serialize};

use crate::geometry::Rect;

/// Shorthand for the element id type of a host.
pub type ElementId<H> = <<H as ResizeHost>::Element as CanvasElement>::Id;

/// A positioned element on the document canvas.
///
/// Elements that report the same `group_id` are treated as cells of one table
/// group; elements without a group id are invisible to the resize engine.
pub trait CanvasElement {
    type Id: Clone + PartialEq + fmt::Debug;

    fn id(&self) -> &Self::Id;
    fn rect(&self) -> Rect;
    fn group_id(&self) -> Option<&str>;
}

/// Partial geometry update for one element. `None` fields are left untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GeometryPatch {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
}

impl GeometryPatch {
    pub fn x(x: f64) -> Self {
        Self {
            x: Some(x),
            ..Self::default()
        }
    }

    pub fn y(y: f64) -> Self {
        Self {
            y: Some(y),
            ..Self::default()
        }
    }

    pub fn width(width: f64) -> Self {
        Self {
            width: Some(width),
            ..Self::default()
        }
    }

    pub fn height(height: f64) -> Self {
        Self {
            height: Some(height),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Convenience for hosts storing plain rectangles.
    pub fn apply_to(&self, rect: &mut Rect) {
        if let Some(x) = self.x {
            rect.x = x;
        }
        if let Some(y) = self.y {
            rect.y = y;
        }
        if let Some(w) = self.width {
            rect.w = w;
        }
        if let Some(h) = self.height {
            rect.h = h;
        }
    }
}

/// Everything the engine needs from the surrounding editor.
///
/// Lookups that come up empty make the engine abort the current handler
/// without mutation, so a host may freely add and remove elements between
/// events; the engine re-derives table structure on each one.
pub trait ResizeHost {
    type Element: CanvasElement;

    /// Current elements on the canvas.
    fn elements(&self) -> &[Self::Element];

    /// Applies a partial geometry update to one element.
    ///
    /// This is the engine's only write channel into the document.
    fn update_element(&mut self, id: &ElementId<Self>, patch: GeometryPatch);

    /// Signals that unsaved layout changes exist.
    fn set_dirty(&mut self, dirty: bool);

    /// Page settings of the current document.
    fn page(&self) -> Page;

    /// Width the element needs to show its content untruncated, if the host
    /// can measure it. Used by auto-fit; `None` skips the element.
    fn content_width(&self, _id: &ElementId<Self>) -> Option<f64> {
        None
    }

    /// Whether the editor is in an interactive mode at all. Keyboard resize
    /// is inert while this is `false`.
    fn is_editable(&self) -> bool {
        true
    }

    /// Scoped UI-interaction lock held for the duration of a pointer drag.
    ///
    /// Typically suppresses text selection. The engine releases the lock on
    /// every session exit path, including forced teardown.
    fn acquire_interaction_lock(&mut self) {}

    fn release_interaction_lock(&mut self) {}
}
