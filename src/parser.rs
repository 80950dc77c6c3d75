//! Conversion of raw catalogue lines into [`CelestialObject`]s.
//!
//! A line holds nine comma separated fields:
//! designation, NGC number, common name, category, distance, constellation,
//! apparent magnitude, right ascension and declination.

use itertools::Itertools;

use crate::angles::{parse_declination, parse_number, parse_right_ascension};
use crate::error::RecordError;
use crate::record::CelestialObject;

/// Number of fields of a catalogue line.
pub const FIELD_COUNT: usize = 9;

/// Split `line` at every comma that is not enclosed in double quotes.
///
/// Quote characters only toggle quoting and are kept in the field text.
/// Every field is trimmed. A line without commas yields a single field.
///
/// # Example:
/// ```
/// # use messier::parser::split_fields;
/// assert_eq!(split_fields(r#"M1, "Crab, Nebula", 6.5"#), vec!["M1", r#""Crab, Nebula""#, "6.5"]);
/// ```
pub fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut inside_quotes = false;

    for c in line.chars() {
        match c {
            '"' => {
                inside_quotes = !inside_quotes;
                current.push(c);
            }
            ',' if !inside_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(c),
        }
    }

    fields.push(current.trim().to_string());
    fields
}

/// Parse a distance in kly, either a single number or a `min-max` range.
///
/// Ranges are reduced to their mean.
pub fn parse_distance(text: &str) -> Result<f64, RecordError> {
    match text.split_once('-') {
        Some((minimum, maximum)) => {
            let minimum = parse_number("distance", minimum)?;
            let maximum = parse_number("distance", maximum)?;
            Ok((minimum + maximum) / 2.)
        }
        None => parse_number("distance", text),
    }
}

/// Parse a full catalogue line.
pub fn parse_record(line: &str) -> Result<CelestialObject, RecordError> {
    let fields = split_fields(line);
    let found = fields.len();
    let Some((
        designation,
        ngc_number,
        common_name,
        category,
        distance,
        constellation,
        magnitude,
        right_ascension,
        declination,
    )) = fields.into_iter().collect_tuple()
    else {
        return Err(RecordError::FieldCount { found });
    };

    let distance_kly = parse_distance(&distance)?;
    let apparent_magnitude = parse_number("apparent magnitude", &magnitude)?;
    let right_ascension = parse_right_ascension(&right_ascension)?;
    let declination = parse_declination(&declination)?;

    CelestialObject::new(
        designation,
        ngc_number,
        common_name,
        category,
        distance_kly,
        constellation,
        apparent_magnitude,
        right_ascension,
        declination,
    )
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    const PLEIADES: &str =
        "M45, , Pleiades, Open cluster, 0.44, Taurus, 1.6, 3h 47m 24s, 24° 7' 0\"";

    #[test]
    fn split_plain() {
        assert_eq!(split_fields(" a ,b,  c "), vec!["a", "b", "c"]);
        assert_eq!(split_fields("  single  "), vec!["single"]);
        assert_eq!(split_fields(""), vec![""]);
    }

    #[test]
    fn split_keeps_quotes() {
        let fields = split_fields(r#"M42, NGC 1976, "Great Orion Nebula, Orion", Nebula"#);
        assert_eq!(fields.len(), 4);
        assert_eq!(fields[2], r#""Great Orion Nebula, Orion""#);
    }

    #[test]
    fn field_count_follows_unquoted_commas() {
        let line = r#"a, "b, c", d, "e,f,g", h"#;
        let unquoted_commas = 4;
        assert_eq!(split_fields(line).len(), unquoted_commas + 1);
        assert_eq!(split_fields(&split_fields(line).join(",")).len(), unquoted_commas + 1);
    }

    #[test]
    fn distance() {
        assert_eq!(parse_distance("10-20").unwrap(), 15.);
        assert_eq!(parse_distance("15").unwrap(), 15.);
        assert_eq!(parse_distance(" 2.5 - 3.5 ").unwrap(), 3.);
        assert!(matches!(
            parse_distance("far"),
            Err(RecordError::InvalidNumber { field: "distance", .. })
        ));
        assert!(parse_distance("10-").is_err());
    }

    #[test]
    fn non_finite_distance() {
        for text in ["nan", "NaN", "inf", "infinity", "nan-5", "1-inf"] {
            assert!(
                matches!(
                    parse_distance(text),
                    Err(RecordError::InvalidNumber { field: "distance", .. })
                ),
                "{text}"
            );
        }
    }

    #[test]
    fn non_finite_fields_reject_the_record() {
        assert!(matches!(
            parse_record("M99, , , Open cluster, nan, Taurus, 1.6, 3h 47m 24s, 24° 7' 0\""),
            Err(RecordError::InvalidNumber { field: "distance", .. })
        ));
        assert!(matches!(
            parse_record("M99, , , Open cluster, 0.4, Taurus, inf, 3h 47m 24s, 24° 7' 0\""),
            Err(RecordError::InvalidNumber { field: "apparent magnitude", .. })
        ));
        assert!(matches!(
            parse_record("M99, , , Open cluster, 0.4, Taurus, 1.6, nanh 47m 24s, 24° 7' 0\""),
            Err(RecordError::InvalidNumber { field: "right ascension", .. })
        ));
        assert!(matches!(
            parse_record("M99, , , Open cluster, 0.4, Taurus, 1.6, 3h 47m 24s, inf° 7' 0\""),
            Err(RecordError::InvalidNumber { field: "declination", .. })
        ));
    }

    #[test]
    fn record() {
        assert_eq!(split_fields(PLEIADES).len(), FIELD_COUNT);
        let m45 = parse_record(PLEIADES).unwrap();
        assert_eq!(m45.designation(), "M45");
        assert_eq!(m45.ngc_number(), "");
        assert_eq!(m45.common_name(), "Pleiades");
        assert_eq!(m45.category(), "Open cluster");
        assert_eq!(m45.constellation(), "Taurus");
        assert_abs_diff_eq!(m45.distance_kly(), 0.44);
        assert_abs_diff_eq!(m45.apparent_magnitude(), 1.6);
        assert_abs_diff_eq!(m45.right_ascension(), 3.79, epsilon = 1e-12);
        assert_abs_diff_eq!(m45.declination(), 24. + 7. / 60., epsilon = 1e-12);
    }

    #[test]
    fn record_with_range() {
        let m4 = parse_record(
            "M4, NGC 6121, , Globular Cluster, 7.1-7.3, Scorpius, 5.6, 16h 23m 35.22s, -26° 31' 32.7\"",
        )
        .unwrap();
        assert_abs_diff_eq!(m4.distance_kly(), 7.2, epsilon = 1e-12);
        assert_abs_diff_eq!(
            m4.declination(),
            -(26. + 31. / 60. + 32.7 / 3600.),
            epsilon = 1e-12
        );
    }

    #[test]
    fn wrong_field_count() {
        assert_eq!(
            parse_record("M45, , Pleiades, Open cluster, 0.44, Taurus, 1.6, 3h 47m 24s"),
            Err(RecordError::FieldCount { found: 8 })
        );
        assert_eq!(
            parse_record(&format!("extra, {PLEIADES}")),
            Err(RecordError::FieldCount { found: 10 })
        );
    }

    #[test]
    fn round_trip_through_display() {
        let m45 = parse_record(PLEIADES).unwrap();
        let again = parse_record(&m45.to_string()).unwrap();
        assert_eq!(again.designation(), m45.designation());
        assert_abs_diff_eq!(again.right_ascension(), m45.right_ascension(), epsilon = 1e-4);
        assert_abs_diff_eq!(again.declination(), m45.declination(), epsilon = 1e-4);
    }
}
