//! Palette catalog ingestion from CSV.
//!
//! Paint catalogs (e.g. the Vallejo Model Color range) ship as CSV files
//! with one row per color: `serial, alternative name, name, hex`. Loading
//! returns an owned [`Palette`] -- there are no process-wide prebuilt
//! palettes; callers load the catalog they need and pass it to
//! [`mix()`](crate::mix()) explicitly.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use thiserror::Error;

use crate::color::{Color, ColorMeta, ParseColorError};
use crate::palette::Palette;

/// Error returned by the catalog loaders.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Reading or parsing the CSV stream failed.
    #[error("failed to read catalog: {0}")]
    Csv(#[from] csv::Error),

    /// Opening the catalog file failed.
    #[error("failed to open catalog: {0}")]
    Io(#[from] std::io::Error),

    /// A row carried an invalid hex color.
    #[error("invalid color in catalog: {0}")]
    ParseColor(#[from] ParseColorError),
}

/// Load a palette from CSV catalog data.
///
/// Rows are `serial, alternative name, name, hex` with no header line.
/// Rows with fewer than four fields are skipped; empty metadata fields
/// become `None`. `brand` is attached to every loaded color. Colors are
/// deduplicated by the palette itself (first occurrence wins).
///
/// # Errors
///
/// [`CatalogError`] on a malformed CSV stream or an invalid hex value.
///
/// # Example
///
/// ```
/// use colormix::catalog::load_palette;
///
/// let csv = "70.957,,Flat Red,#af2a29\n70.842,,Gloss White,#ffffff\n";
/// let palette = load_palette(csv.as_bytes(), Some("Acrylicos Vallejo")).unwrap();
/// assert_eq!(palette.len(), 2);
/// ```
pub fn load_palette(reader: impl Read, brand: Option<&str>) -> Result<Palette, CatalogError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut palette = Palette::new();
    let mut skipped = 0usize;
    for record in csv_reader.records() {
        let record = record?;
        if record.len() < 4 {
            skipped += 1;
            continue;
        }

        let field = |idx: usize| -> Option<String> {
            record
                .get(idx)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };

        let color = Color::from_hex(record.get(3).unwrap_or_default())?.with_meta(ColorMeta {
            serial_no: field(0),
            alternative_name: field(1),
            name: field(2),
            brand: brand.map(str::to_string),
        });
        palette.add_colors([color]);
    }

    tracing::debug!(
        colors = palette.len(),
        skipped,
        brand = brand.unwrap_or(""),
        "Loaded palette catalog"
    );
    Ok(palette)
}

/// Load a palette from a CSV catalog file on disk.
///
/// See [`load_palette`] for the row format and semantics.
pub fn load_palette_file(
    path: impl AsRef<Path>,
    brand: Option<&str>,
) -> Result<Palette, CatalogError> {
    let file = File::open(path)?;
    load_palette(file, brand)
}
