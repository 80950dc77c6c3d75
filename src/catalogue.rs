//! The in-memory catalogue and its queries.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use itertools::Itertools;
use log::{debug, error, info, warn};

use crate::error::{CatalogueError, RecordError};
use crate::parser::parse_record;
use crate::record::{CelestialObject, constellation_key};

/// Which end of an ordering an extremal search selects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Extremum {
    /// Smallest value.
    Min,
    /// Largest value.
    Max,
}

impl Extremum {
    /// Whether `candidate` strictly beats `current`. Ties keep `current`.
    fn prefers(self, candidate: f64, current: f64) -> bool {
        match self {
            Extremum::Min => candidate < current,
            Extremum::Max => candidate > current,
        }
    }
}

/// A line rejected during [`Catalogue::load`].
#[derive(Clone, Debug, PartialEq)]
pub struct SkippedLine {
    /// One-based line number in the source.
    pub line_number: usize,
    /// Raw line text.
    pub line: String,
    /// Why the line was rejected.
    pub error: RecordError,
}

/// Outcome of loading a line source.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoadSummary {
    /// Number of records appended to the catalogue.
    pub accepted: usize,
    /// Rejected lines in source order.
    pub skipped: Vec<SkippedLine>,
}

/// Great-circle distance between two objects in degrees.
///
/// Uses the spherical law of cosines. The cosine is clamped to `[-1, 1]`
/// as rounding can push it slightly outside the domain of `acos`.
pub fn angular_separation(a: &CelestialObject, b: &CelestialObject) -> f64 {
    let ra1 = (a.right_ascension() * 15.).to_radians();
    let dec1 = a.declination().to_radians();
    let ra2 = (b.right_ascension() * 15.).to_radians();
    let dec2 = b.declination().to_radians();

    let cos_distance = dec1.sin() * dec2.sin() + dec1.cos() * dec2.cos() * (ra1 - ra2).cos();
    cos_distance.clamp(-1., 1.).acos().to_degrees()
}

/// Select the extremal object by `key`. The first object wins ties.
fn extremal_by<'a, I, K>(objects: I, key: K, extremum: Extremum) -> Option<&'a CelestialObject>
where
    I: Iterator<Item = &'a CelestialObject>,
    K: Fn(&CelestialObject) -> f64,
{
    objects
        .fold(None::<(&'a CelestialObject, f64)>, |best, object| {
            let value = key(object);
            match best {
                Some((_, current)) if !extremum.prefers(value, current) => best,
                _ => Some((object, value)),
            }
        })
        .map(|(object, _)| object)
}

/// Ordered collection of validated [`CelestialObject`]s.
///
/// Records keep their insertion order until [`sort_by_constellation`](Catalogue::sort_by_constellation)
/// is called. Queries that select a single record resolve ties in favour of the record met first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalogue {
    objects: Vec<CelestialObject>,
}

impl Catalogue {
    /// Create an empty catalogue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an already constructed record.
    pub fn add(&mut self, object: CelestialObject) {
        self.objects.push(object);
    }

    /// Parse `line` and append the resulting record.
    ///
    /// Rejected lines are logged and leave the catalogue unchanged.
    pub fn ingest(&mut self, line: &str) -> Result<(), RecordError> {
        let object =
            parse_record(line).inspect_err(|err| warn!("Skipped line: {line} ({err})"))?;
        self.objects.push(object);
        Ok(())
    }

    /// Ingest every line of `reader` in order.
    ///
    /// Bad lines are skipped and reported in the returned [`LoadSummary`].
    /// A read failure stops the load; records ingested up to that point are kept.
    pub fn load<R: BufRead>(&mut self, reader: R) -> Result<LoadSummary, CatalogueError> {
        let mut summary = LoadSummary::default();

        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| {
                error!("Error reading line {}: {source}", index + 1);
                CatalogueError::SourceUnavailable { source }
            })?;

            match parse_record(&line) {
                Ok(object) => {
                    self.objects.push(object);
                    summary.accepted += 1;
                }
                Err(error) => {
                    warn!("Skipped line {}: {line} ({error})", index + 1);
                    summary.skipped.push(SkippedLine {
                        line_number: index + 1,
                        line,
                        error,
                    });
                }
            }
        }

        info!(
            "Loaded {} objects, skipped {} lines.",
            summary.accepted,
            summary.skipped.len()
        );
        Ok(summary)
    }

    /// Open the file at `path` and [`load`](Catalogue::load) it.
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> Result<LoadSummary, CatalogueError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| {
            error!("Error reading {}: {source}", path.display());
            CatalogueError::SourceUnavailable { source }
        })?;
        self.load(BufReader::new(file))
    }

    /// All records in catalogue order.
    pub fn objects(&self) -> &[CelestialObject] {
        &self.objects
    }

    /// Iterate over the records in catalogue order.
    pub fn iter(&self) -> std::slice::Iter<'_, CelestialObject> {
        self.objects.iter()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether the catalogue holds no records.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Stable sort by constellation name, case-sensitive.
    pub fn sort_by_constellation(&mut self) {
        self.objects.sort_by(|a, b| constellation_key(a).cmp(constellation_key(b)));
    }

    /// First record with the given designation, ignoring case.
    pub fn find(&self, designation: &str) -> Option<&CelestialObject> {
        self.objects.iter().find(|o| o.is_designated(designation))
    }

    /// Number of records of `category`.
    pub fn count_in_category(&self, category: &str) -> usize {
        self.objects.iter().filter(|o| o.is_category(category)).count()
    }

    /// Mean apparent magnitude over the records of `category`.
    ///
    /// Returns `0.` if no record matches. Use [`count_in_category`](Catalogue::count_in_category)
    /// to tell that apart from a genuine zero average.
    pub fn average_magnitude(&self, category: &str) -> f64 {
        let (sum, count) = self
            .objects
            .iter()
            .filter(|o| o.is_category(category))
            .fold((0., 0usize), |(sum, count), o| {
                (sum + o.apparent_magnitude(), count + 1)
            });

        if count == 0 {
            return 0.;
        }
        sum / count as f64
    }

    /// Nearest or farthest record of `category`.
    pub fn extremal_by_distance(
        &self,
        category: &str,
        extremum: Extremum,
    ) -> Option<&CelestialObject> {
        extremal_by(
            self.objects.iter().filter(|o| o.is_category(category)),
            CelestialObject::distance_kly,
            extremum,
        )
    }

    /// Closest record of `category`.
    pub fn closest_in_category(&self, category: &str) -> Option<&CelestialObject> {
        self.extremal_by_distance(category, Extremum::Min)
    }

    /// Record of `constellation` with the lowest or highest declination.
    pub fn extremal_by_declination(
        &self,
        constellation: &str,
        extremum: Extremum,
    ) -> Option<&CelestialObject> {
        extremal_by(
            self.objects
                .iter()
                .filter(|o| o.is_in_constellation(constellation)),
            CelestialObject::declination,
            extremum,
        )
    }

    /// Northernmost record of `constellation`.
    pub fn highest_declination_in(&self, constellation: &str) -> Option<&CelestialObject> {
        self.extremal_by_declination(constellation, Extremum::Max)
    }

    /// Record closest on the sky to the first record designated `reference`.
    ///
    /// The reference itself is excluded, other records sharing its designation are not.
    /// Returns `None` if the reference does not exist or is the only record.
    pub fn nearest_by_angular_distance(&self, reference: &str) -> Option<&CelestialObject> {
        let Some((reference_index, reference)) = self
            .objects
            .iter()
            .find_position(|o| o.is_designated(reference))
        else {
            debug!("Reference {reference} not found.");
            return None;
        };

        debug!(
            "Reference {} at RA {:.4}h, Dec {:.4}°.",
            reference.designation(),
            reference.right_ascension(),
            reference.declination()
        );

        let nearest = extremal_by(
            self.objects
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != reference_index)
                .map(|(_, o)| o),
            |o| angular_separation(reference, o),
            Extremum::Min,
        )?;

        debug!(
            "Nearest to {} is {} at {:.4}°.",
            reference.designation(),
            nearest.designation(),
            angular_separation(reference, nearest)
        );
        Some(nearest)
    }
}

impl<'a> IntoIterator for &'a Catalogue {
    type Item = &'a CelestialObject;

    type IntoIter = std::slice::Iter<'a, CelestialObject>;

    fn into_iter(self) -> Self::IntoIter {
        self.objects.iter()
    }
}

/// One record per line in catalogue file notation.
impl fmt::Display for Catalogue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for object in &self.objects {
            writeln!(f, "{object}")?;
        }
        Ok(())
    }
}
