//! Color space selection: encode a [`Color`] into a 3-component vector in a
//! chosen space and decode such a vector back into a color.
//!
//! Conversion mathematics is delegated to the `palette` crate (and the
//! `hsluv` crate for HPLuv, which `palette` does not implement). CIE axes
//! that `palette` reports in 0..100 (L*, a*/b*, u*/v*, chroma) are divided
//! by 100 here so every space presents coordinates of order 1 to the
//! optimizer; hue axes stay in degrees. The optimizer treats every space as
//! an unconstrained 3-vector, so the documented ranges are informative, not
//! enforced: out-of-range values pass through uninterpreted and may decode
//! to out-of-gamut colors.

use palette::encoding;
use palette::white_point::D65;
use palette::{FromColor, Hsl, Hsluv, Hsv, Lab, Lch, Lchuv, LinSrgb, Luv, Srgb};

use super::color::Color;

/// The closed set of color spaces a mix can be computed in.
///
/// The order of variants is stable; adding a space means adding one
/// encode/decode arm, nothing else changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ColorSpace {
    /// Linear (gamma-expanded) RGB, all axes in [0..1].
    #[default]
    Rgb,
    /// CIE-L*a*b*: perceptually uniform, distances are meaningful.
    /// L* in [0..1], a* and b* almost in [-1..1].
    Lab,
    /// Hue in [0..360), saturation and lightness in [0..1].
    /// For legacy reasons; prefer `Hcl`.
    Hsl,
    /// Hue in [0..360), saturation and value in [0..1].
    Hsv,
    /// CIE-L*u*v*: very similar to CIE-L*a*b*, there is no consensus on
    /// which one is "better".
    Luv,
    /// CIE-L*C*h°(uv): CIE-L*u*v* in polar coordinates. Hue in [0..360),
    /// C* almost in [0..1], L* as in CIE-L*u*v*.
    Lch,
    /// HSLuv: the saner alternative to HSL. Hue in [0..360), saturation and
    /// lightness in [0..1].
    Hsluv,
    /// HPLuv: a smoother variant of HSLuv whose gamut only covers pastel
    /// colors. Saturated inputs encode to saturation values way above 1,
    /// indicating the color cannot be represented in HPLuv.
    Hpluv,
    /// CIE-L*C*h°(ab): CIE-L*a*b* in polar coordinates, a better HSV.
    /// Axes are (hue, chroma, luminance): hue in [0..360), chroma almost
    /// in [0..1], L* as in CIE-L*a*b*.
    Hcl,
}

impl ColorSpace {
    /// Every supported space, in stable declaration order.
    pub const ALL: [ColorSpace; 9] = [
        ColorSpace::Rgb,
        ColorSpace::Lab,
        ColorSpace::Hsl,
        ColorSpace::Hsv,
        ColorSpace::Luv,
        ColorSpace::Lch,
        ColorSpace::Hsluv,
        ColorSpace::Hpluv,
        ColorSpace::Hcl,
    ];

    /// Encode a color into this space's 3-component representation.
    pub fn encode(&self, color: &Color) -> [f64; 3] {
        let srgb = color.srgb();
        match self {
            ColorSpace::Rgb => {
                let lin: LinSrgb<f64> = srgb.into_linear();
                [lin.red, lin.green, lin.blue]
            }
            ColorSpace::Lab => {
                let lab: Lab<D65, f64> = Lab::from_color(srgb);
                [lab.l / 100.0, lab.a / 100.0, lab.b / 100.0]
            }
            ColorSpace::Hsl => {
                let hsl: Hsl<encoding::Srgb, f64> = Hsl::from_color(srgb);
                [
                    hsl.hue.into_positive_degrees(),
                    hsl.saturation,
                    hsl.lightness,
                ]
            }
            ColorSpace::Hsv => {
                let hsv: Hsv<encoding::Srgb, f64> = Hsv::from_color(srgb);
                [hsv.hue.into_positive_degrees(), hsv.saturation, hsv.value]
            }
            ColorSpace::Luv => {
                let luv: Luv<D65, f64> = Luv::from_color(srgb);
                [luv.l / 100.0, luv.u / 100.0, luv.v / 100.0]
            }
            ColorSpace::Lch => {
                let lch: Lchuv<D65, f64> = Lchuv::from_color(srgb);
                [
                    lch.l / 100.0,
                    lch.chroma / 100.0,
                    lch.hue.into_positive_degrees(),
                ]
            }
            ColorSpace::Hsluv => {
                let hsluv: Hsluv<D65, f64> = Hsluv::from_color(srgb);
                [
                    hsluv.hue.into_positive_degrees(),
                    hsluv.saturation / 100.0,
                    hsluv.l / 100.0,
                ]
            }
            ColorSpace::Hpluv => {
                let (h, s, l) = hsluv::rgb_to_hpluv((srgb.red, srgb.green, srgb.blue));
                [h, s / 100.0, l / 100.0]
            }
            ColorSpace::Hcl => {
                let lch: Lch<D65, f64> = Lch::from_color(srgb);
                [
                    lch.hue.into_positive_degrees(),
                    lch.chroma / 100.0,
                    lch.l / 100.0,
                ]
            }
        }
    }

    /// Decode a 3-component vector in this space back into a color.
    ///
    /// The decoded color carries no metadata and a zero ratio. Conversion
    /// is best-effort: vectors that lie outside the space's gamut decode to
    /// whatever sRGB value the conversion library produces. HPLuv is the
    /// exception: its axes are clamped into the library's accepted domain
    /// first, so out-of-gamut vectors decode to the nearest representable
    /// pastel instead of panicking.
    pub fn decode(&self, values: [f64; 3]) -> Color {
        let [v1, v2, v3] = values;
        let srgb: Srgb<f64> = match self {
            ColorSpace::Rgb => Srgb::from_linear(LinSrgb::new(v1, v2, v3)),
            ColorSpace::Lab => {
                Srgb::from_color(Lab::<D65, f64>::new(v1 * 100.0, v2 * 100.0, v3 * 100.0))
            }
            ColorSpace::Hsl => Srgb::from_color(Hsl::<encoding::Srgb, f64>::new(v1, v2, v3)),
            ColorSpace::Hsv => Srgb::from_color(Hsv::<encoding::Srgb, f64>::new(v1, v2, v3)),
            ColorSpace::Luv => {
                Srgb::from_color(Luv::<D65, f64>::new(v1 * 100.0, v2 * 100.0, v3 * 100.0))
            }
            ColorSpace::Lch => {
                Srgb::from_color(Lchuv::<D65, f64>::new(v1 * 100.0, v2 * 100.0, v3))
            }
            ColorSpace::Hsluv => {
                Srgb::from_color(Hsluv::<D65, f64>::new(v1, v2 * 100.0, v3 * 100.0))
            }
            ColorSpace::Hpluv => {
                // The hsluv crate rejects out-of-domain HPLuv input, and
                // the optimizer routinely produces saturations above 1 for
                // non-pastel mixes. Wrap the hue and clamp the other axes
                // so any finite vector decodes to the nearest
                // representable color.
                let (r, g, b) = hsluv::hpluv_to_rgb((
                    v1.rem_euclid(360.0),
                    (v2 * 100.0).clamp(0.0, 100.0),
                    (v3 * 100.0).clamp(0.0, 100.0),
                ));
                Srgb::new(r, g, b)
            }
            ColorSpace::Hcl => {
                Srgb::from_color(Lch::<D65, f64>::new(v3 * 100.0, v2 * 100.0, v1))
            }
        };
        Color::from_srgb(srgb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Maximum per-channel sRGB error tolerated on an encode/decode
    /// round trip. Conversions run in f64; the residual error comes from
    /// the conversion library's own formulas.
    const ROUND_TRIP_TOLERANCE: f64 = 1e-6;

    fn assert_round_trips(color: &Color, space: ColorSpace) {
        let decoded = space.decode(space.encode(color));
        let (a, b) = (color.srgb(), decoded.srgb());
        for (lhs, rhs) in [(a.red, b.red), (a.green, b.green), (a.blue, b.blue)] {
            assert!(
                (lhs - rhs).abs() < ROUND_TRIP_TOLERANCE,
                "{space:?} round trip drifted: {lhs} vs {rhs}"
            );
        }
    }

    #[test]
    fn round_trip_all_spaces() {
        // A moderately saturated color: inside every gamut except HPLuv's
        // and with a well-defined hue (greys have none).
        let color = Color::from_rgb8(200, 100, 50);
        for space in ColorSpace::ALL {
            if space == ColorSpace::Hpluv {
                continue;
            }
            assert_round_trips(&color, space);
        }
    }

    #[test]
    fn hpluv_decodes_out_of_gamut_vectors() {
        // Saturated colors encode to HPLuv saturations far above 1 (red is
        // around 4.3); decoding such a vector must still produce a finite
        // color rather than aborting.
        let red = Color::from_rgb8(255, 0, 0);
        let encoded = ColorSpace::Hpluv.encode(&red);
        assert!(encoded[1] > 1.0, "red should be out of HPLuv's gamut");

        let decoded = ColorSpace::Hpluv.decode(encoded);
        let srgb = decoded.srgb();
        assert!(srgb.red.is_finite() && srgb.green.is_finite() && srgb.blue.is_finite());
    }

    #[test]
    fn round_trip_hpluv_pastel() {
        // HPLuv can only represent pastel colors; use one inside its gamut.
        let pastel = Color::from_rgb8(180, 170, 190);
        assert_round_trips(&pastel, ColorSpace::Hpluv);
    }

    #[test]
    fn rgb_encode_is_linear() {
        // sRGB 0.5 is roughly linear 0.214; a gamma-naive encode would
        // report 0.5 and break downstream mixing arithmetic.
        let grey = Color::from_rgb8(128, 128, 128);
        let [r, _, _] = ColorSpace::Rgb.encode(&grey);
        assert!((r - 0.214).abs() < 0.01, "expected linear ~0.214, got {r}");
    }

    #[test]
    fn lab_axes_are_normalized() {
        let white = Color::from_rgb8(255, 255, 255);
        let [l, a, b] = ColorSpace::Lab.encode(&white);
        assert!((l - 1.0).abs() < 1e-3, "white L* should be ~1, got {l}");
        assert!(a.abs() < 1e-2 && b.abs() < 1e-2);
    }

    #[test]
    fn hue_axes_stay_in_degrees() {
        let red = Color::from_rgb8(255, 0, 0);
        let [h, s, _] = ColorSpace::Hsv.encode(&red);
        assert!((0.0..360.0).contains(&h));
        assert!((s - 1.0).abs() < 1e-9);
    }
}
