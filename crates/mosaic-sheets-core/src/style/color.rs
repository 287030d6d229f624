//! Color representation

use std::fmt;

/// Cell color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    /// Automatic/default color
    #[default]
    Auto,

    /// Opaque RGB color
    Rgb { r: u8, g: u8, b: u8 },
}

impl Color {
    /// Create an RGB color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb { r, g, b }
    }

    /// Convert to a 6-digit uppercase hex string (without # prefix)
    pub fn to_hex(&self) -> String {
        let (r, g, b) = self.to_rgb();
        format!("{:02X}{:02X}{:02X}", r, g, b)
    }

    /// Convert to ARGB hex string (8 characters, used by XLSX)
    ///
    /// Always fully opaque, e.g., "FFFF0000" for red.
    pub fn to_argb_hex(&self) -> String {
        format!("FF{}", self.to_hex())
    }

    /// Convert to RGB tuple
    pub fn to_rgb(&self) -> (u8, u8, u8) {
        match self {
            Color::Auto => (0, 0, 0),
            Color::Rgb { r, g, b } => (*r, *g, *b),
        }
    }

    pub const BLACK: Color = Color::Rgb { r: 0, g: 0, b: 0 };
    pub const WHITE: Color = Color::Rgb {
        r: 255,
        g: 255,
        b: 255,
    };
    pub const RED: Color = Color::Rgb { r: 255, g: 0, b: 0 };
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Auto => write!(f, "auto"),
            Color::Rgb { r, g, b } => write!(f, "#{:02X}{:02X}{:02X}", r, g, b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_hex_zero_pads() {
        assert_eq!(Color::RED.to_hex(), "FF0000");
        assert_eq!(Color::rgb(1, 2, 3).to_hex(), "010203");
        assert_eq!(Color::rgb(10, 20, 30).to_argb_hex(), "FF0A141E");
    }

    #[test]
    fn test_display() {
        assert_eq!(Color::Auto.to_string(), "auto");
        assert_eq!(Color::WHITE.to_string(), "#FFFFFF");
    }
}
