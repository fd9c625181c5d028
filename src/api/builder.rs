//! Mixer builder -- the ergonomic front door for repeated mixes against
//! one palette.

use crate::color::{Color, ColorSpace};
use crate::error::MixError;
use crate::mix::mix;
use crate::palette::Palette;

/// High-level mixing builder holding a palette and a color-space choice.
///
/// `Mixer` is a convenience wrapper around [`mix()`]: it owns the palette,
/// remembers the configured color space, and can be called repeatedly for
/// different targets. All semantics (ratio write-back, error behavior)
/// are exactly those of `mix()`.
///
/// # Example
///
/// ```
/// use colormix::{Color, ColorSpace, Mixer, Palette};
///
/// let palette = Palette::from_colors([
///     Color::from_rgb8(255, 0, 0),
///     Color::from_rgb8(0, 255, 0),
///     Color::from_rgb8(0, 0, 255),
///     Color::from_rgb8(255, 255, 255),
///     Color::from_rgb8(0, 0, 0),
/// ]);
///
/// let mut mixer = Mixer::new(palette).space(ColorSpace::Rgb);
/// let mixed = mixer.mix(&Color::from_rgb8(200, 100, 50)).unwrap();
///
/// assert_eq!(mixed.hex(), "#c86432");
/// for color in mixer.palette().colors() {
///     println!("{}: {:.0}%", color.hex(), color.ratio() * 100.0);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Mixer {
    palette: Palette,
    space: ColorSpace,
}

impl Mixer {
    /// Create a mixer for the given palette. The default color space is
    /// linear RGB.
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            space: ColorSpace::default(),
        }
    }

    /// Select the color space mixes are computed in.
    #[inline]
    pub fn space(mut self, space: ColorSpace) -> Self {
        self.space = space;
        self
    }

    /// Mix the palette to approximate `target`, writing ratios back onto
    /// the held palette. See [`mix()`] for semantics and errors.
    pub fn mix(&mut self, target: &Color) -> Result<Color, MixError> {
        mix(target, &mut self.palette, self.space)
    }

    /// The held palette (ratios reflect the most recent successful mix).
    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Release the palette.
    pub fn into_palette(self) -> Palette {
        self.palette
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixer_delegates_and_keeps_ratios() {
        let palette = Palette::from_colors([
            Color::from_rgb8(0, 0, 0),
            Color::from_rgb8(255, 255, 255),
        ]);
        let mut mixer = Mixer::new(palette).space(ColorSpace::Rgb);

        mixer.mix(&Color::from_rgb8(128, 128, 128)).unwrap();

        let ratios: Vec<f64> = mixer.palette().colors().iter().map(|c| c.ratio()).collect();
        let sum: f64 = ratios.iter().sum();
        assert!((sum - 1.0).abs() < 1e-9);
        assert!(ratios.iter().all(|&r| r > 0.0));

        let palette = mixer.into_palette();
        assert_eq!(palette.len(), 2);
    }

    #[test]
    fn mixer_surfaces_empty_palette_error() {
        let mut mixer = Mixer::new(Palette::new());
        let err = mixer.mix(&Color::from_rgb8(1, 2, 3)).unwrap_err();
        assert_eq!(err, MixError::EmptyPalette);
    }
}
