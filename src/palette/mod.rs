//! The [`Palette`] store: an ordered, deduplicated collection of colors
//! with per-entry mixing ratios.

#[allow(clippy::module_inception)]
mod palette;

pub use palette::Palette;
