//! Public convenience API: the [`Mixer`] builder.

mod builder;

pub use builder::Mixer;
