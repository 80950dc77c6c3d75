//! The fixed set of catalogue queries reported by the command line tool.

use std::fmt;

use log::info;

use crate::catalogue::Catalogue;
use crate::record::CelestialObject;

/// Parameters of a catalogue survey.
///
/// Defaults reproduce the classic questions asked of the Messier catalogue.
/// Use the `with_*` functions to change them.
///
/// Example:
/// ```rust
/// # use messier::{Catalogue, Survey};
/// let catalogue = Catalogue::new();
/// let survey = Survey::new()
///     .with_reference("M31")
///     .with_declination_constellation("Andromeda");
/// let report = survey.run(&catalogue);
/// assert!(report.nearest_to_reference.is_none());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Survey {
    /// Category whose mean apparent magnitude is reported.
    average_category: String,
    /// Category whose closest member is reported.
    nearest_category: String,
    /// Constellation whose northernmost object is reported.
    declination_constellation: String,
    /// Designation of the reference for the angular nearest-neighbour search.
    reference: String,
}

impl Default for Survey {
    fn default() -> Self {
        Self {
            average_category: "Globular Cluster".to_string(),
            nearest_category: "Open cluster".to_string(),
            declination_constellation: "Sagittarius".to_string(),
            reference: "M45".to_string(),
        }
    }
}

impl Survey {
    /// Create a survey with default parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the category to average magnitudes over.
    pub fn with_average_category(mut self, category: impl Into<String>) -> Self {
        self.average_category = category.into();
        self
    }

    /// Set the category to find the closest member of.
    pub fn with_nearest_category(mut self, category: impl Into<String>) -> Self {
        self.nearest_category = category.into();
        self
    }

    /// Set the constellation to find the highest declination in.
    pub fn with_declination_constellation(mut self, constellation: impl Into<String>) -> Self {
        self.declination_constellation = constellation.into();
        self
    }

    /// Set the reference designation.
    pub fn with_reference(mut self, designation: impl Into<String>) -> Self {
        self.reference = designation.into();
        self
    }

    /// Run all queries against `catalogue`.
    pub fn run<'a>(&'a self, catalogue: &'a Catalogue) -> SurveyReport<'a> {
        info!("Surveying {} objects.", catalogue.len());

        SurveyReport {
            survey: self,
            average_magnitude: catalogue.average_magnitude(&self.average_category),
            average_count: catalogue.count_in_category(&self.average_category),
            closest: catalogue.closest_in_category(&self.nearest_category),
            highest_declination: catalogue.highest_declination_in(&self.declination_constellation),
            nearest_to_reference: catalogue.nearest_by_angular_distance(&self.reference),
        }
    }
}

/// Results of a [`Survey`]. Its `Display` implementation is the report text.
#[derive(Clone, Debug, PartialEq)]
pub struct SurveyReport<'a> {
    survey: &'a Survey,
    /// Mean apparent magnitude, `0.` if `average_count` is zero.
    pub average_magnitude: f64,
    /// Number of objects averaged over.
    pub average_count: usize,
    /// Closest object of the nearest category.
    pub closest: Option<&'a CelestialObject>,
    /// Highest declination object of the constellation.
    pub highest_declination: Option<&'a CelestialObject>,
    /// Object closest on the sky to the reference.
    pub nearest_to_reference: Option<&'a CelestialObject>,
}

struct OrNone<'a>(Option<&'a CelestialObject>);

impl fmt::Display for OrNone<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(object) => write!(f, "{object}"),
            None => write!(f, "none"),
        }
    }
}

impl fmt::Display for SurveyReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let survey = self.survey;
        writeln!(
            f,
            "The average apparent magnitude of {} objects is ~{:.3}",
            survey.average_category.to_lowercase(),
            self.average_magnitude
        )?;
        writeln!(
            f,
            "\nThe details of the least distant {} object are: {}",
            survey.nearest_category.to_lowercase(),
            OrNone(self.closest)
        )?;
        writeln!(
            f,
            "\nThe details of the {} object with the highest declination are: {}",
            survey.declination_constellation,
            OrNone(self.highest_declination)
        )?;
        writeln!(
            f,
            "\nThe details of the closest object to {} are: {}",
            survey.reference,
            OrNone(self.nearest_to_reference)
        )
    }
}
