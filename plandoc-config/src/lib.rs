//! Configuration for the plandoc layout engine.
//!
//! Configuration lives in a KDL document and covers the two things the resize
//! engine needs from the outside world: the printable page geometry and the
//! dimensional limits and keyboard step sizes for interactive resizing.
//!
//! ```kdl
//! page {
//!     size "a4"
//!     orientation "landscape"
//!     margin 40
//! }
//!
//! resize {
//!     min-column-width 30
//!     large-step 50
//! }
//! ```
//!
//! Everything has a default; an empty document is a valid config.

use std::ffi::OsStr;
use std::path::Path;

use tracing::debug;

mod page;
mod resize;

pub use page::{Orientation, Page, PageSize};
pub use resize::Resize;

#[derive(knuffel::Decode, Debug, Clone, Copy, PartialEq, Default)]
pub struct Config {
    #[knuffel(child, default)]
    pub page: Page,
    #[knuffel(child, default)]
    pub resize: Resize,
}

impl Config {
    pub fn load(path: &Path) -> miette::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|err| miette::miette!("error reading {path:?}: {err}"))?;

        let filename = path
            .file_name()
            .and_then(OsStr::to_str)
            .unwrap_or("config.kdl");
        let config = Self::parse(filename, &contents)?;
        debug!("loaded config from {path:?}");
        Ok(config)
    }

    pub fn parse(filename: &str, text: &str) -> miette::Result<Self> {
        let config = knuffel::parse::<Config>(filename, text)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> miette::Result<()> {
        let r = &self.resize;
        if r.min_column_width > r.max_column_width {
            return Err(miette::miette!(
                "min-column-width ({}) is larger than max-column-width ({})",
                r.min_column_width,
                r.max_column_width,
            ));
        }
        if r.min_row_height > r.max_row_height {
            return Err(miette::miette!(
                "min-row-height ({}) is larger than max-row-height ({})",
                r.min_row_height,
                r.max_row_height,
            ));
        }
        if r.min_column_width <= 0. || r.min_row_height <= 0. {
            return Err(miette::miette!("minimum dimensions must be positive"));
        }
        if r.default_step <= 0. || r.small_step <= 0. || r.large_step <= 0. {
            return Err(miette::miette!("resize steps must be positive"));
        }
        if self.page.margin < 0. {
            return Err(miette::miette!("page margin cannot be negative"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn parse(text: &str) -> Config {
        Config::parse("test.kdl", text).unwrap()
    }

    #[test]
    fn empty_config_is_all_defaults() {
        assert_eq!(parse(""), Config::default());
    }

    #[test]
    fn parse_full_config() {
        let config = parse(
            r#"
            page {
                size "long"
                orientation "landscape"
                margin 40
            }

            resize {
                min-column-width 25
                max-column-width 800
                min-row-height 15
                max-row-height 400
                default-step 10
                small-step 2
                large-step 80
            }
            "#,
        );

        assert_eq!(
            config,
            Config {
                page: Page {
                    size: PageSize::Long,
                    orientation: Orientation::Landscape,
                    margin: 40.,
                },
                resize: Resize {
                    min_column_width: 25.,
                    max_column_width: 800.,
                    min_row_height: 15.,
                    max_row_height: 400.,
                    default_step: 10.,
                    small_step: 2.,
                    large_step: 80.,
                },
            }
        );
    }

    #[test]
    fn partial_sections_keep_defaults() {
        let config = parse(
            r#"
            page {
                orientation "landscape"
            }

            resize {
                large-step 100
            }
            "#,
        );

        assert_eq!(config.page.size, PageSize::A4);
        assert_eq!(config.page.orientation, Orientation::Landscape);
        assert_eq!(config.page.margin, 0.);
        assert_eq!(config.resize.min_column_width, 30.);
        assert_eq!(config.resize.large_step, 100.);
    }

    #[test]
    fn unknown_page_size_is_an_error() {
        assert!(Config::parse("test.kdl", r#"page { size "letter" }"#).is_err());
    }

    #[test]
    fn inverted_limits_are_an_error() {
        let text = r#"
            resize {
                min-column-width 500
                max-column-width 100
            }
        "#;
        assert!(Config::parse("test.kdl", text).is_err());
    }

    #[test]
    fn negative_margin_is_an_error() {
        assert!(Config::parse("test.kdl", "page { margin -5 }").is_err());
    }

    #[test]
    fn page_size_round_trips_through_str() {
        for size in [PageSize::A4, PageSize::Short, PageSize::Long] {
            assert_eq!(size.to_string().parse::<PageSize>().unwrap(), size);
        }
    }

    #[test]
    fn max_table_width() {
        let mut page = Page::default();
        assert_eq!(page.max_table_width(), 595.);

        page.margin = 40.;
        assert_eq!(page.max_table_width(), 515.);

        page.orientation = Orientation::Landscape;
        assert_eq!(page.max_table_width(), 762.);

        page.size = PageSize::Long;
        assert_eq!(page.max_table_width(), 856.);
    }
}
