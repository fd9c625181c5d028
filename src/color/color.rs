//! The `Color` value type: an sRGB device color with catalog metadata and
//! a mixing ratio slot.

use std::fmt;
use std::str::FromStr;

use palette::Srgb;

use super::error::ParseColorError;
use super::meta::{ColorMeta, LabelStyle};

/// A device color with optional catalog metadata and a mixing ratio.
///
/// The color value itself is gamma-encoded sRGB with an alpha channel.
/// `ratio` is the color's share in the most recent mix computed by
/// [`mix()`](crate::mix()); it defaults to 0 and is meaningless until a mix
/// has run. Metadata is display-only and never read by the optimizer.
///
/// Identity for palette deduplication is the normalized hex encoding
/// ([`hex()`](Self::hex)); alpha and metadata do not participate.
///
/// # Example
///
/// ```
/// use colormix::Color;
///
/// let c = Color::from_rgb8(200, 100, 50);
/// assert_eq!(c.hex(), "#c86432");
/// assert_eq!(c.ratio(), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Color {
    srgb: Srgb<f64>,
    alpha: f64,
    meta: ColorMeta,
    ratio: f64,
}

impl Color {
    /// Create a color from gamma-encoded sRGB channel values in 0.0..=1.0.
    pub fn from_srgb(srgb: Srgb<f64>) -> Self {
        Self {
            srgb,
            alpha: 1.0,
            meta: ColorMeta::default(),
            ratio: 0.0,
        }
    }

    /// Create an opaque color from 8-bit sRGB channel values.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_srgb(Srgb::new(
            r as f64 / 255.0,
            g as f64 / 255.0,
            b as f64 / 255.0,
        ))
    }

    /// Create a color from 8-bit sRGB channel values plus alpha.
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        let mut color = Self::from_rgb8(r, g, b);
        color.alpha = a as f64 / 255.0;
        color
    }

    /// Parse a color from a hex string such as `#c86432`, `c86432` or `#fb0`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseColorError`] when the string (after stripping a
    /// leading `#`) is not 3 or 6 hex digits.
    pub fn from_hex(hex: &str) -> Result<Self, ParseColorError> {
        let hex = hex.trim().strip_prefix('#').unwrap_or(hex.trim());
        let (r, g, b) = match hex.len() {
            3 => {
                let r = u8::from_str_radix(&hex[0..1], 16)?;
                let g = u8::from_str_radix(&hex[1..2], 16)?;
                let b = u8::from_str_radix(&hex[2..3], 16)?;
                // Expand shorthand: f -> ff
                (r * 17, g * 17, b * 17)
            }
            6 => (
                u8::from_str_radix(&hex[0..2], 16)?,
                u8::from_str_radix(&hex[2..4], 16)?,
                u8::from_str_radix(&hex[4..6], 16)?,
            ),
            _ => return Err(ParseColorError::InvalidLength),
        };
        Ok(Self::from_rgb8(r, g, b))
    }

    /// Attach catalog metadata, builder style.
    pub fn with_meta(mut self, meta: ColorMeta) -> Self {
        self.meta = meta;
        self
    }

    /// The gamma-encoded sRGB value.
    #[inline]
    pub fn srgb(&self) -> Srgb<f64> {
        self.srgb
    }

    /// The alpha channel in 0.0..=1.0 (1.0 for opaque).
    #[inline]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// The color's share in the most recent mix (0 before any mix has run).
    #[inline]
    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    /// Overwrite the mixing ratio.
    #[inline]
    pub fn set_ratio(&mut self, ratio: f64) {
        self.ratio = ratio;
    }

    /// Catalog metadata for this color.
    #[inline]
    pub fn meta(&self) -> &ColorMeta {
        &self.meta
    }

    /// Mutable access to the catalog metadata.
    #[inline]
    pub fn meta_mut(&mut self) -> &mut ColorMeta {
        &mut self.meta
    }

    /// The color's 8-bit sRGB channels, rounded and clamped.
    pub fn to_rgb8(&self) -> [u8; 3] {
        [
            (self.srgb.red * 255.0).round().clamp(0.0, 255.0) as u8,
            (self.srgb.green * 255.0).round().clamp(0.0, 255.0) as u8,
            (self.srgb.blue * 255.0).round().clamp(0.0, 255.0) as u8,
        ]
    }

    /// The normalized lowercase hex encoding (`#rrggbb`). This is the
    /// color's identity for palette deduplication; alpha is ignored.
    pub fn hex(&self) -> String {
        let [r, g, b] = self.to_rgb8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// The display label for this color: its metadata rendered with the
    /// given style, falling back to the hex encoding when the metadata is
    /// empty or renders blank.
    pub fn label(&self, style: LabelStyle) -> String {
        let label = self.meta.label(style);
        if label.is_empty() {
            self.hex()
        } else {
            label
        }
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label(LabelStyle::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn hex_round_trip() {
        let c = Color::from_hex("#C86432").unwrap();
        assert_eq!(c.hex(), "#c86432");
        assert_eq!(c.to_rgb8(), [200, 100, 50]);

        let bare = Color::from_hex("c86432").unwrap();
        assert_eq!(bare.hex(), "#c86432");
    }

    #[test]
    fn shorthand_hex_expands() {
        let c = Color::from_hex("#fb0").unwrap();
        assert_eq!(c.hex(), "#ffbb00");
    }

    #[test]
    fn invalid_hex_is_rejected() {
        assert_eq!(
            Color::from_hex("#c8643"),
            Err(ParseColorError::InvalidLength)
        );
        assert!(matches!(
            Color::from_hex("#zzzzzz"),
            Err(ParseColorError::InvalidHex(_))
        ));
    }

    #[test]
    fn display_falls_back_to_hex() {
        let c = Color::from_rgb8(255, 0, 0);
        assert_eq!(c.to_string(), "#ff0000");

        let named = c.with_meta(ColorMeta {
            name: Some("Flat Red".into()),
            serial_no: Some("957".into()),
            ..ColorMeta::default()
        });
        assert_eq!(named.to_string(), "Flat Red#957");
    }

    #[test]
    fn alpha_does_not_affect_identity() {
        let opaque = Color::from_rgb8(10, 20, 30);
        let translucent = Color::from_rgba8(10, 20, 30, 128);
        assert_eq!(opaque.hex(), translucent.hex());
    }
}
