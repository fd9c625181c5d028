//! Catalog metadata attached to palette colors.
//!
//! Metadata is display-only: the optimizer never reads it. Label formatting
//! is a closed set of [`LabelStyle`] variants passed explicitly to
//! [`ColorMeta::label()`] rather than a closure stored on the color.

/// Descriptive metadata for a catalog color.
///
/// All fields are optional; a `Color` constructed from raw channel values
/// carries an empty `ColorMeta`. Fields are plain data so catalog loaders
/// can fill them directly.
///
/// # Example
///
/// ```
/// use colormix::{ColorMeta, LabelStyle};
///
/// let meta = ColorMeta {
///     name: Some("Scarlet".into()),
///     serial_no: Some("817".into()),
///     brand: Some("Acrylicos Vallejo".into()),
///     ..ColorMeta::default()
/// };
/// assert_eq!(meta.label(LabelStyle::NameAndSerial), "Scarlet#817");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorMeta {
    /// Primary catalog name (e.g. "Scarlet").
    pub name: Option<String>,
    /// Alternate catalog name, preferred over `name` when labelling.
    pub alternative_name: Option<String>,
    /// Catalog serial number (e.g. "70.817").
    pub serial_no: Option<String>,
    /// Manufacturer or brand name.
    pub brand: Option<String>,
}

/// How a color's metadata is rendered into a display label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LabelStyle {
    /// Preferred name (alternative over primary) followed by `#serial`
    /// when a serial number is present. The default.
    #[default]
    NameAndSerial,
    /// Preferred name only.
    NameOnly,
    /// Serial number only.
    SerialOnly,
}

impl ColorMeta {
    /// Returns true when no metadata field is set.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.alternative_name.is_none()
            && self.serial_no.is_none()
            && self.brand.is_none()
    }

    /// The name to display: the alternative name when present, otherwise
    /// the primary name, otherwise the empty string.
    fn preferred_name(&self) -> &str {
        self.alternative_name
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or("")
    }

    /// Render the metadata into a display label.
    ///
    /// Missing fields degrade gracefully: a color with no serial number
    /// under [`LabelStyle::NameAndSerial`] renders its name alone, and a
    /// fully empty `ColorMeta` renders an empty string (callers typically
    /// fall back to the hex encoding).
    pub fn label(&self, style: LabelStyle) -> String {
        match style {
            LabelStyle::NameAndSerial => match self.serial_no.as_deref() {
                Some(serial) => format!("{}#{}", self.preferred_name(), serial),
                None => self.preferred_name().to_string(),
            },
            LabelStyle::NameOnly => self.preferred_name().to_string(),
            LabelStyle::SerialOnly => self.serial_no.clone().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn label_prefers_alternative_name() {
        let meta = ColorMeta {
            name: Some("Scarlet".into()),
            alternative_name: Some("Vermillion".into()),
            serial_no: Some("817".into()),
            ..ColorMeta::default()
        };
        assert_eq!(meta.label(LabelStyle::NameAndSerial), "Vermillion#817");
        assert_eq!(meta.label(LabelStyle::NameOnly), "Vermillion");
        assert_eq!(meta.label(LabelStyle::SerialOnly), "817");
    }

    #[test]
    fn label_degrades_without_serial() {
        let meta = ColorMeta {
            name: Some("Scarlet".into()),
            ..ColorMeta::default()
        };
        assert_eq!(meta.label(LabelStyle::NameAndSerial), "Scarlet");
        assert_eq!(meta.label(LabelStyle::SerialOnly), "");
    }

    #[test]
    fn empty_meta_is_empty() {
        assert!(ColorMeta::default().is_empty());
        let named = ColorMeta {
            brand: Some("Acrylicos Vallejo".into()),
            ..ColorMeta::default()
        };
        assert!(!named.is_empty());
    }
}
