use std::fmt;

/// A display color from the pastel palette, as a `#RRGGBB` hex string.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Color(&'static str);

impl Color {
    #[inline]
    pub fn as_hex(self) -> &'static str {
        self.0
    }

    // Index in [PALETTE]. Colors cannot be constructed outside the palette.
    pub(crate) fn palette_slot(self) -> usize {
        PALETTE
            .iter()
            .position(|&color| color == self)
            .expect("every Color comes from PALETTE")
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// The fixed palette regions are colored from, indexed by region.
pub const PALETTE: [Color; 10] = [
    Color("#FFB3BA"),
    Color("#BAFFC9"),
    Color("#BAE1FF"),
    Color("#FFFFBA"),
    Color("#FFDFBA"),
    Color("#D7BAFF"),
    Color("#F0E68C"),
    Color("#AFEEEE"),
    Color("#FFC0CB"),
    Color("#E6E6FA"),
];

/// Returns the display color for the region with the given index, cycling
/// through [PALETTE] when there are more regions than colors.
pub fn color_for(region: usize) -> Color {
    PALETTE[region % PALETTE.len()]
}
