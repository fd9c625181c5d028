//! The optimization engine: objective/gradient evaluation and the
//! minimizer driver. Internal to the crate; [`mix()`](crate::mix()) is the
//! public surface.

mod driver;
mod objective;

pub(crate) use driver::{solve, Solution};
