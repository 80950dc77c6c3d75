#![warn(missing_docs)]

//! Parser and query engine for the [Messier catalogue](https://en.wikipedia.org/wiki/Messier_object). \
//! Catalogue files are plain text with one object per line. Each line is parsed into a
//! [`CelestialObject`], normalizing sexagesimal coordinates to decimal hours and degrees
//! and distance ranges to their mean.
//!
//! ## Interface
//! The central struct of this library is [`Catalogue`]. It ingests lines, either one by one
//! with [`Catalogue::ingest()`] or from any [`BufRead`](std::io::BufRead) with [`Catalogue::load()`],
//! and answers the queries:
//! - mean apparent magnitude of a category,
//! - nearest or farthest object of a category,
//! - lowest or highest declination object of a constellation,
//! - closest object on the sky to a reference object.
//!
//! Lines that cannot be parsed are skipped with a `log` warning and reported in the
//! [`LoadSummary`]; a load never aborts because of a single bad line.
//!
//! Example:
//! ```rust
//! # use messier::Catalogue;
//! let mut catalogue = Catalogue::new();
//! catalogue
//!     .ingest("M45, , Pleiades, Open cluster, 0.44, Taurus, 1.6, 3h 47m 24s, 24° 7' 0\"")
//!     .unwrap();
//! assert_eq!(catalogue.closest_in_category("open cluster").unwrap().designation(), "M45");
//! ```
//!
//! [`Survey`] bundles the standard set of queries with configurable filters.

pub mod angles;
pub mod catalogue;
pub mod error;
pub mod parser;
pub mod record;
pub mod survey;

pub use catalogue::{Catalogue, Extremum, LoadSummary, SkippedLine, angular_separation};
pub use error::{CatalogueError, RecordError};
pub use record::CelestialObject;
pub use survey::{Survey, SurveyReport};
