//! Ordered, hex-deduplicated palette of colors with per-entry mix ratios.

use std::collections::HashSet;
use std::fmt;

use nalgebra::DMatrix;

use crate::color::{Color, ColorSpace};

/// An ordered collection of colors, unique by hex encoding, each carrying
/// a mutable mixing ratio.
///
/// Insertion order is preserved and later duplicates are silently dropped:
/// two colors count as duplicates when their normalized hex encodings
/// ([`Color::hex()`]) are equal, regardless of alpha or metadata. The
/// ratios stored on the entries are written by [`mix()`](crate::mix()) and
/// are meaningless until a mix has run.
///
/// # Example
///
/// ```
/// use colormix::{Color, Palette};
///
/// let palette = Palette::from_colors([
///     Color::from_rgb8(255, 0, 0),
///     Color::from_rgb8(0, 255, 0),
///     Color::from_rgb8(255, 0, 0), // duplicate, dropped
/// ]);
/// assert_eq!(palette.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Palette {
    name: Option<String>,
    colors: Vec<Color>,
    seen: HashSet<String>,
}

impl Palette {
    /// Create an empty palette.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a palette from colors, deduplicating by hex encoding.
    pub fn from_colors(colors: impl IntoIterator<Item = Color>) -> Self {
        let mut palette = Self::new();
        palette.add_colors(colors);
        palette
    }

    /// Set a display name, builder style.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Append colors, preserving order and silently dropping any whose hex
    /// encoding is already present.
    pub fn add_colors(&mut self, colors: impl IntoIterator<Item = Color>) -> &mut Self {
        for color in colors {
            let key = color.hex();
            if self.seen.insert(key) {
                self.colors.push(color);
            }
        }
        self
    }

    /// The palette's display name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Set the palette's display name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    /// The colors in insertion order.
    #[inline]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// The color at `idx`, if in range.
    #[inline]
    pub fn get(&self, idx: usize) -> Option<&Color> {
        self.colors.get(idx)
    }

    /// Number of colors in the palette.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// True when the palette holds no colors.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Overwrite the ratio of the color at `idx`. Out-of-range indices are
    /// ignored.
    pub fn set_ratio(&mut self, ratio: f64, idx: usize) {
        if let Some(color) = self.colors.get_mut(idx) {
            color.set_ratio(ratio);
        }
    }

    /// Encode every color into `space`, producing the n×3 matrix consumed
    /// by the solver. Row `i` is palette entry `i`, matching ratio
    /// write-back order.
    pub fn matrix(&self, space: ColorSpace) -> DMatrix<f64> {
        let values = self
            .colors
            .iter()
            .flat_map(|color| space.encode(color))
            .collect::<Vec<f64>>();
        DMatrix::from_row_slice(self.colors.len(), 3, &values)
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{} ({} colors)", name, self.colors.len()),
            None => write!(f, "{} colors", self.colors.len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn duplicates_are_dropped_in_order() {
        let mut palette = Palette::from_colors([
            Color::from_rgb8(1, 2, 3),
            Color::from_rgb8(4, 5, 6),
            Color::from_rgb8(1, 2, 3),
        ]);
        assert_eq!(palette.len(), 2);
        assert_eq!(palette.colors()[0].hex(), "#010203");
        assert_eq!(palette.colors()[1].hex(), "#040506");

        // Re-adding an existing color is a no-op, order unchanged.
        palette.add_colors([Color::from_rgb8(4, 5, 6), Color::from_rgb8(7, 8, 9)]);
        assert_eq!(palette.len(), 3);
        assert_eq!(palette.colors()[2].hex(), "#070809");
    }

    #[test]
    fn alpha_variants_are_duplicates() {
        let palette = Palette::from_colors([
            Color::from_rgb8(10, 20, 30),
            Color::from_rgba8(10, 20, 30, 99),
        ]);
        assert_eq!(palette.len(), 1);
    }

    #[test]
    fn set_ratio_ignores_out_of_range() {
        let mut palette = Palette::from_colors([Color::from_rgb8(0, 0, 0)]);
        palette.set_ratio(0.5, 0);
        palette.set_ratio(0.9, 7);
        assert_eq!(palette.colors()[0].ratio(), 0.5);
    }

    #[test]
    fn matrix_rows_follow_palette_order() {
        let palette = Palette::from_colors([
            Color::from_rgb8(255, 0, 0),
            Color::from_rgb8(0, 0, 255),
        ]);
        let m = palette.matrix(ColorSpace::Rgb);
        assert_eq!(m.nrows(), 2);
        assert_eq!(m.ncols(), 3);
        // Linear RGB of pure red: (1, 0, 0); pure blue: (0, 0, 1).
        assert!((m[(0, 0)] - 1.0).abs() < 1e-12);
        assert!(m[(0, 2)].abs() < 1e-12);
        assert!((m[(1, 2)] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn display_mentions_name_and_size() {
        let palette = Palette::from_colors([Color::from_rgb8(0, 0, 0)]).with_name("Test");
        assert_eq!(palette.to_string(), "Test (1 colors)");
    }
}
