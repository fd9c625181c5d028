//! colormix: find mixing ratios that reproduce a target color from a
//! fixed palette of base colors.
//!
//! Given a palette of real-world pigments and a target color, the crate
//! solves a small inverse problem: non-negative ratios, summing to one,
//! such that the weighted combination of the palette colors in a chosen
//! color space best approximates the target.
//!
//! # Quick Start
//!
//! ```
//! use colormix::{mix, Color, ColorSpace, Palette};
//!
//! let mut palette = Palette::from_colors([
//!     Color::from_rgb8(255, 0, 0),
//!     Color::from_rgb8(0, 255, 0),
//!     Color::from_rgb8(0, 0, 255),
//!     Color::from_rgb8(255, 255, 255),
//!     Color::from_rgb8(0, 0, 0),
//! ]);
//! let target = Color::from_rgb8(200, 100, 50);
//!
//! let mixed = mix(&target, &mut palette, ColorSpace::Rgb).unwrap();
//!
//! assert_eq!(mixed.hex(), target.hex());
//! for color in palette.colors() {
//!     println!("{}: {:.0}%", color.hex(), color.ratio() * 100.0);
//! }
//! ```
//!
//! The [`Mixer`] builder wraps the same call for repeated mixes against
//! one palette, and [`catalog`] loads palettes from CSV paint catalogs.
//!
//! # Color Spaces
//!
//! Mixing arithmetic is a weighted sum of 3-component vectors, so the
//! choice of [`ColorSpace`] decides what "best approximates" means:
//!
//! - [`ColorSpace::Rgb`] (linear RGB): physically correct light mixing.
//! - [`ColorSpace::Lab`] / [`ColorSpace::Luv`]: perceptually uniform, so
//!   the matching error corresponds to perceived color difference.
//! - Hue-based spaces (HSL, HSV, LCH, HSLuv, HPLuv, HCL) are supported but
//!   note that the optimizer treats the hue axis as an ordinary linear
//!   coordinate, with no wrap-around at 360 degrees.
//!
//! Conversion mathematics is delegated to the `palette` crate (`hsluv`
//! for HPLuv); this crate only normalizes axes and dispatches per space.
//!
//! # Solution Character
//!
//! The objective carries a flat penalty for every palette color whose
//! weight falls below 1%. This deliberately biases solutions toward
//! "balanced" mixes that use every palette color a little, instead of
//! exact few-color subsets -- a modeling trade-off, not a bug: mixes that
//! would optimally drop a color to zero are harder to reach. The problem
//! is non-convex, so a good local optimum is returned, not a guaranteed
//! global one; for a deterministic configuration, repeated calls return
//! identical results.
//!
//! # Concurrency
//!
//! Everything is synchronous and single-threaded. A mix call's only side
//! effect is writing ratios onto the palette it was handed, which the
//! `&mut Palette` receiver serializes at compile time. There is no
//! cancellation; callers needing it must wrap the call at a higher level.

pub mod api;
pub mod catalog;
pub mod color;
pub mod error;
pub mod palette;

mod mix;
mod solver;


pub use api::Mixer;
pub use catalog::CatalogError;
pub use color::{Color, ColorMeta, ColorSpace, LabelStyle, ParseColorError};
pub use error::MixError;
pub use mix::mix;
pub use palette::Palette;
