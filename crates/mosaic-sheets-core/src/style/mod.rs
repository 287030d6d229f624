//! Cell styling types
//!
//! - [`Style`] - Complete cell style
//! - [`FillStyle`] - Background fill
//! - [`Color`] - Color representation
//! - [`StylePool`] - Style deduplication

mod color;
mod fill;
mod pool;

pub use color::Color;
pub use fill::FillStyle;
pub use pool::StylePool;

/// Complete cell style
///
/// Styles are deduplicated via [`StylePool`]; cells hold an index into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Style {
    /// Fill/background settings
    pub fill: FillStyle,
}

impl Style {
    /// Create a new default style
    pub fn new() -> Self {
        Self::default()
    }

    /// Set fill color (solid fill)
    pub fn fill_color(mut self, color: Color) -> Self {
        self.fill = FillStyle::Solid { color };
        self
    }
}
