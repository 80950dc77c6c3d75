//! The catalogue record type.

use std::cmp::Ordering;
use std::fmt;

use crate::angles::{format_declination, format_right_ascension};
use crate::error::RecordError;

/// A single deep-sky object of the catalogue.
///
/// Records are immutable once constructed. Use [`CelestialObject::new`] so the distance invariant holds.
#[derive(Clone, Debug, PartialEq)]
pub struct CelestialObject {
    designation: String,
    ngc_number: String,
    common_name: String,
    category: String,
    distance_kly: f64,
    constellation: String,
    apparent_magnitude: f64,
    right_ascension: f64,
    declination: f64,
}

impl CelestialObject {
    /// Create a new record.
    ///
    /// # Arguments
    /// - `distance_kly`: Distance in thousands of light years. Must not be negative.
    /// - `right_ascension`: Decimal hours.
    /// - `declination`: Decimal degrees.
    ///
    /// # Errors
    /// [`RecordError::NegativeDistance`] if `distance_kly` is negative or NaN.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        designation: impl Into<String>,
        ngc_number: impl Into<String>,
        common_name: impl Into<String>,
        category: impl Into<String>,
        distance_kly: f64,
        constellation: impl Into<String>,
        apparent_magnitude: f64,
        right_ascension: f64,
        declination: f64,
    ) -> Result<Self, RecordError> {
        if distance_kly.is_nan() || distance_kly < 0. {
            return Err(RecordError::NegativeDistance(distance_kly));
        }

        Ok(Self {
            designation: designation.into(),
            ngc_number: ngc_number.into(),
            common_name: common_name.into(),
            category: category.into(),
            distance_kly,
            constellation: constellation.into(),
            apparent_magnitude,
            right_ascension,
            declination,
        })
    }

    /// Catalogue identifier, e.g. `M45`.
    pub fn designation(&self) -> &str {
        &self.designation
    }

    /// NGC identifier.
    pub fn ngc_number(&self) -> &str {
        &self.ngc_number
    }

    /// Common name, possibly empty.
    pub fn common_name(&self) -> &str {
        &self.common_name
    }

    /// Category label such as `Globular Cluster`.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Distance in thousands of light years.
    pub fn distance_kly(&self) -> f64 {
        self.distance_kly
    }

    /// Constellation name.
    pub fn constellation(&self) -> &str {
        &self.constellation
    }

    /// Apparent visual magnitude.
    pub fn apparent_magnitude(&self) -> f64 {
        self.apparent_magnitude
    }

    /// Right ascension in decimal hours.
    pub fn right_ascension(&self) -> f64 {
        self.right_ascension
    }

    /// Declination in decimal degrees.
    pub fn declination(&self) -> f64 {
        self.declination
    }

    /// Whether the category equals `category`, ignoring case and surrounding whitespace.
    pub fn is_category(&self, category: &str) -> bool {
        eq_ignore_case(&self.category, category)
    }

    /// Whether the constellation equals `constellation`, ignoring case and surrounding whitespace.
    pub fn is_in_constellation(&self, constellation: &str) -> bool {
        eq_ignore_case(&self.constellation, constellation)
    }

    /// Whether the designation equals `designation`, ignoring case and surrounding whitespace.
    pub fn is_designated(&self, designation: &str) -> bool {
        eq_ignore_case(&self.designation, designation)
    }

    /// Order by apparent magnitude, brightest first.
    pub fn cmp_magnitude(&self, other: &Self) -> Ordering {
        self.apparent_magnitude.total_cmp(&other.apparent_magnitude)
    }
}

fn eq_ignore_case(field: &str, filter: &str) -> bool {
    field.trim().to_lowercase() == filter.trim().to_lowercase()
}

/// Sort key for ordering by constellation: the raw field, compared case-sensitively.
pub fn constellation_key(object: &CelestialObject) -> &str {
    &object.constellation
}

/// Writes the record back in catalogue file notation.
impl fmt::Display for CelestialObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}, {}, {:.1}, {}, {:.1}, {}, {}",
            self.designation,
            self.ngc_number,
            self.common_name,
            self.category,
            self.distance_kly,
            self.constellation,
            self.apparent_magnitude,
            format_right_ascension(self.right_ascension),
            format_declination(self.declination),
        )
    }
}
