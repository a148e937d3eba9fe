//! Printable page geometry.
//!
//! Dimensions are PostScript points (1/72 in). "Short" and "Long" are the
//! 8.5×11 and 8.5×13 bond paper sizes commonly required on government forms.

use std::fmt;
use std::str::FromStr;

/// Paper size of the document being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageSize {
    #[default]
    A4,
    Short,
    Long,
}

impl PageSize {
    /// Portrait dimensions in points, `(width, height)`.
    pub fn dimensions(self) -> (f64, f64) {
        match self {
            PageSize::A4 => (595., 842.),
            PageSize::Short => (612., 792.),
            PageSize::Long => (612., 936.),
        }
    }
}

impl FromStr for PageSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "a4" => Ok(Self::A4),
            "short" => Ok(Self::Short),
            "long" => Ok(Self::Long),
            _ => Err(format!(
                r#"invalid page size: {s:?} (expected "a4", "short" or "long")"#
            )),
        }
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PageSize::A4 => "a4",
            PageSize::Short => "short",
            PageSize::Long => "long",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl FromStr for Orientation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "portrait" => Ok(Self::Portrait),
            "landscape" => Ok(Self::Landscape),
            _ => Err(format!(
                r#"invalid orientation: {s:?} (expected "portrait" or "landscape")"#
            )),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Orientation::Portrait => "portrait",
            Orientation::Landscape => "landscape",
        };
        f.write_str(name)
    }
}

/// Page settings of the current document.
#[derive(knuffel::Decode, Debug, Clone, Copy, PartialEq, Default)]
pub struct Page {
    #[knuffel(child, unwrap(argument, str), default)]
    pub size: PageSize,
    #[knuffel(child, unwrap(argument, str), default)]
    pub orientation: Orientation,
    /// Horizontal margin per side, in points.
    #[knuffel(child, unwrap(argument), default)]
    pub margin: f64,
}

impl Page {
    /// Page dimensions in points with orientation applied.
    pub fn oriented_size(self) -> (f64, f64) {
        let (w, h) = self.size.dimensions();
        match self.orientation {
            Orientation::Portrait => (w, h),
            Orientation::Landscape => (h, w),
        }
    }

    /// Widest a table may grow without crossing the printable page width.
    pub fn max_table_width(self) -> f64 {
        let (w, _) = self.oriented_size();
        (w - 2. * self.margin).max(0.)
    }
}
