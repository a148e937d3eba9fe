//! Dimensional limits and keyboard step sizes for interactive resizing.

/// Limits and step sizes applied by the resize engine.
///
/// Column widths are additionally bounded by the printable page width during
/// pointer drags; row heights have no page-level bound.
#[derive(knuffel::Decode, Debug, Clone, Copy, PartialEq)]
pub struct Resize {
    #[knuffel(child, unwrap(argument), default = Self::default().min_column_width)]
    pub min_column_width: f64,
    #[knuffel(child, unwrap(argument), default = Self::default().max_column_width)]
    pub max_column_width: f64,
    #[knuffel(child, unwrap(argument), default = Self::default().min_row_height)]
    pub min_row_height: f64,
    #[knuffel(child, unwrap(argument), default = Self::default().max_row_height)]
    pub max_row_height: f64,
    /// Step for an unmodified arrow key.
    #[knuffel(child, unwrap(argument), default = Self::default().default_step)]
    pub default_step: f64,
    /// Step with Ctrl or Meta held.
    #[knuffel(child, unwrap(argument), default = Self::default().small_step)]
    pub small_step: f64,
    /// Step with Shift held.
    #[knuffel(child, unwrap(argument), default = Self::default().large_step)]
    pub large_step: f64,
}

impl Default for Resize {
    fn default() -> Self {
        Self {
            min_column_width: 30.,
            max_column_width: 1000.,
            min_row_height: 20.,
            max_row_height: 600.,
            default_step: 5.,
            small_step: 1.,
            large_step: 50.,
        }
    }
}
