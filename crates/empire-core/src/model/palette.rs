//! Medieval map palette.

use serde::Serialize;

/// A named map color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaletteColor {
    pub name: &'static str,
    /// `#RRGGBB`
    pub hex: &'static str,
}

impl PaletteColor {
    const fn new(name: &'static str, hex: &'static str) -> Self {
        Self { name, hex }
    }

    /// Red, green and blue components.
    pub fn rgb(&self) -> (u8, u8, u8) {
        let channel = |range: std::ops::Range<usize>| {
            self.hex
                .get(range)
                .and_then(|h| u8::from_str_radix(h, 16).ok())
                .unwrap_or(0)
        };
        (channel(1..3), channel(3..5), channel(5..7))
    }
}

/// Earthy tones for territory fills, in assignment order.
pub const MEDIEVAL_PALETTE: [PaletteColor; 10] = [
    PaletteColor::new("Brown", "#8C5523"),
    PaletteColor::new("Navy", "#2E4052"),
    PaletteColor::new("Olive", "#607744"),
    PaletteColor::new("Rust", "#BC4749"),
    PaletteColor::new("Gold", "#D5A021"),
    PaletteColor::new("Purple", "#5B3758"),
    PaletteColor::new("Teal", "#1D7874"),
    PaletteColor::new("Mauve", "#8E5572"),
    PaletteColor::new("Charcoal", "#3F4045"),
    PaletteColor::new("Brick", "#9B2915"),
];

/// Palette color for the `index`-th item, wrapping around.
pub fn color_for(index: usize) -> &'static PaletteColor {
    &MEDIEVAL_PALETTE[index % MEDIEVAL_PALETTE.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_after_last_color() {
        assert_eq!(color_for(0).name, "Brown");
        assert_eq!(color_for(9).name, "Brick");
        assert_eq!(color_for(10).name, "Brown");
        assert_eq!(color_for(23).name, "Rust");
    }

    #[test]
    fn rgb_components() {
        assert_eq!(MEDIEVAL_PALETTE[4].rgb(), (0xD5, 0xA0, 0x21));
    }
}
