//! Color types: the [`Color`] value, its catalog metadata, hex parsing and
//! the [`ColorSpace`] selector.

#[allow(clippy::module_inception)]
mod color;
mod error;
mod meta;
mod space;

pub use color::Color;
pub use error::ParseColorError;
pub use meta::{ColorMeta, LabelStyle};
pub use space::ColorSpace;
