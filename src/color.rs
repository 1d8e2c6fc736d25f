//! Color types and the fixed vector palette.
//!
//! Named colors follow the CSS/matplotlib color table so the rendered
//! figure uses the same hues as any other plotting tool would for
//! `"red"`, `"green"`, `"blue"`, `"orange"` and `"purple"`.

/// RGBA color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(C)]
pub struct Rgba {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
    /// Alpha component (0-255, 255 = fully opaque).
    pub a: u8,
}

impl Rgba {
    /// Opaque black.
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255, 255);
    /// CSS `red` (#FF0000).
    pub const RED: Self = Self::rgb(255, 0, 0);
    /// CSS `green` (#008000).
    pub const GREEN: Self = Self::rgb(0, 128, 0);
    /// CSS `blue` (#0000FF).
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    /// CSS `orange` (#FFA500).
    pub const ORANGE: Self = Self::rgb(255, 165, 0);
    /// CSS `purple` (#800080).
    pub const PURPLE: Self = Self::rgb(128, 0, 128);
    /// Light grey used for grid lines (#B0B0B0).
    pub const GRID_GREY: Self = Self::rgb(176, 176, 176);

    /// Create a new RGBA color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color (alpha = 255).
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Create a color with modified alpha.
    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    /// Multiply the alpha channel by `factor` (clamped to 0.0-1.0).
    #[must_use]
    pub fn fade(self, factor: f32) -> Self {
        let factor = factor.clamp(0.0, 1.0);
        self.with_alpha((f32::from(self.a) * factor).round() as u8)
    }

    /// Convert to array representation.
    #[must_use]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Create from array representation.
    #[must_use]
    pub const fn from_array(arr: [u8; 4]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3])
    }

    /// Whether the color is fully opaque.
    #[must_use]
    pub const fn is_opaque(self) -> bool {
        self.a == 255
    }
}

/// Colors assigned to the embeddings, in table order.
pub const VECTOR_PALETTE: [Rgba; 5] = [
    Rgba::RED,
    Rgba::GREEN,
    Rgba::BLUE,
    Rgba::ORANGE,
    Rgba::PURPLE,
];

/// Palette color for the entry at `index`. Wraps around past the fifth entry.
#[must_use]
pub const fn palette_color(index: usize) -> Rgba {
    VECTOR_PALETTE[index % VECTOR_PALETTE.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_colors_match_css_table() {
        assert_eq!(Rgba::RED.to_array(), [255, 0, 0, 255]);
        assert_eq!(Rgba::GREEN.to_array(), [0, 128, 0, 255]);
        assert_eq!(Rgba::BLUE.to_array(), [0, 0, 255, 255]);
        assert_eq!(Rgba::ORANGE.to_array(), [255, 165, 0, 255]);
        assert_eq!(Rgba::PURPLE.to_array(), [128, 0, 128, 255]);
    }

    #[test]
    fn test_palette_order() {
        assert_eq!(palette_color(0), Rgba::RED);
        assert_eq!(palette_color(4), Rgba::PURPLE);
        assert_eq!(palette_color(5), Rgba::RED);
    }

    #[test]
    fn test_palette_is_distinct() {
        for (i, a) in VECTOR_PALETTE.iter().enumerate() {
            for b in &VECTOR_PALETTE[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_fade() {
        let half = Rgba::BLACK.fade(0.5);
        assert_eq!(half.a, 128);
        assert_eq!(Rgba::BLACK.fade(2.0).a, 255);
        assert!(!half.is_opaque());
    }

    #[test]
    fn test_rgba_to_array_from_array() {
        let color = Rgba::new(10, 20, 30, 40);
        assert_eq!(Rgba::from_array(color.to_array()), color);
    }
}
