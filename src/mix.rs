//! The mix orchestrator: turn a target color, a palette and a color-space
//! choice into validated ratios and a reconstructed mixed color.

use nalgebra::DVector;

use crate::color::{Color, ColorSpace};
use crate::error::MixError;
use crate::palette::Palette;
use crate::solver;

/// Mix the palette colors to best approximate `target` in `space`.
///
/// Encodes the target and every palette color into `space`, solves for
/// non-negative mixing ratios summing to 1, writes the ratio for entry `i`
/// onto palette entry `i` (the call's only side effect), and returns the
/// reconstructed mixed color decoded from `space`.
///
/// The call is synchronous and runs to completion; the solver's iteration
/// budget is the only bound on runtime. Repeated calls with identical
/// inputs return identical results (the solver is deterministic).
///
/// # Errors
///
/// - [`MixError::EmptyPalette`] when the palette has no entries.
/// - [`MixError::Optimization`] when the solver fails to converge or hits
///   a numerical failure. On any error the palette's ratios are left
///   untouched; there is no partial write-back and no retry.
///
/// # Example
///
/// ```
/// use colormix::{mix, Color, ColorSpace, Palette};
///
/// let mut palette = Palette::from_colors([
///     Color::from_rgb8(255, 0, 0),
///     Color::from_rgb8(0, 255, 0),
///     Color::from_rgb8(0, 0, 255),
///     Color::from_rgb8(255, 255, 255),
///     Color::from_rgb8(0, 0, 0),
/// ]);
/// let target = Color::from_rgb8(200, 100, 50);
///
/// let mixed = mix(&target, &mut palette, ColorSpace::Rgb).unwrap();
/// assert_eq!(mixed.hex(), target.hex());
/// ```
pub fn mix(target: &Color, palette: &mut Palette, space: ColorSpace) -> Result<Color, MixError> {
    if palette.is_empty() {
        return Err(MixError::EmptyPalette);
    }

    let colors = palette.matrix(space);
    let target_vector = DVector::from_column_slice(&space.encode(target));

    tracing::debug!(
        palette_len = palette.len(),
        space = ?space,
        "Solving mix ratios"
    );
    let solution = solver::solve(&colors, &target_vector)?;
    tracing::debug!(objective = solution.objective, "Mix solved");

    for (i, &weight) in solution.weights.iter().enumerate() {
        palette.set_ratio(weight, i);
    }

    let mixed = colors.transpose() * &solution.weights;
    Ok(space.decode([mixed[0], mixed[1], mixed[2]]))
}
