//! Sexagesimal angle notation.
//!
//! Right ascension is written as `"<h>h <m>m <s>s"` and declination as
//! `"<deg>° <arcmin>' <arcsec>\""`. Both are converted to decimal hours and decimal degrees
//! respectively. The unit symbols only act as separators, so `"5 34 31.94"` is accepted as well.

use itertools::Itertools;

use crate::error::RecordError;

const RIGHT_ASCENSION: &str = "right ascension";
const DECLINATION: &str = "declination";

/// Parse a finite number. `nan` and `inf` are rejected like any other non-numeric token.
pub(crate) fn parse_number(field: &'static str, text: &str) -> Result<f64, RecordError> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| RecordError::InvalidNumber {
            field,
            value: text.to_string(),
        })
}

/// Split `text` at whitespace and any of `separators` into exactly three numbers.
fn sexagesimal_parts(
    text: &str,
    separators: &[char],
    field: &'static str,
) -> Result<[f64; 3], RecordError> {
    let tokens = text
        .split(|c: char| c.is_whitespace() || separators.contains(&c))
        .filter(|token| !token.is_empty())
        .collect_vec();

    if tokens.len() != 3 {
        return Err(RecordError::MalformedAngle {
            field,
            value: text.to_string(),
        });
    }

    let mut parts = [0.; 3];
    for (part, token) in parts.iter_mut().zip(tokens) {
        *part = parse_number(field, token)?;
    }
    Ok(parts)
}

/// Parse a right ascension such as `"5h 34m 31.94s"` into decimal hours.
pub fn parse_right_ascension(text: &str) -> Result<f64, RecordError> {
    let [hours, minutes, seconds] = sexagesimal_parts(text, &['h', 'm', 's'], RIGHT_ASCENSION)?;
    Ok(hours + minutes / 60. + seconds / 3600.)
}

/// Parse a declination such as `"-22° 0' 0\""` into decimal degrees.
///
/// The sign is carried by the degree component alone and applies to the whole angle,
/// so `"-2° 30' 0\""` is `-2.5`. A negative zero (`"-0° 30' 0\""`) keeps its sign.
pub fn parse_declination(text: &str) -> Result<f64, RecordError> {
    let [degrees, arcminutes, arcseconds] =
        sexagesimal_parts(text, &['°', '\'', '"'], DECLINATION)?;

    let magnitude = degrees.abs() + arcminutes / 60. + arcseconds / 3600.;
    if degrees.is_sign_negative() {
        Ok(-magnitude)
    } else {
        Ok(magnitude)
    }
}

/// Decompose `value` into sign, truncated whole units, truncated minutes and fractional seconds.
fn sexagesimal(value: f64) -> (&'static str, u64, u64, f64) {
    let sign = if value < 0. { "-" } else { "" };
    let value = value.abs();

    let whole = value.trunc();
    let minutes = (value - whole) * 60.;
    let whole_minutes = minutes.trunc();
    let seconds = (minutes - whole_minutes) * 60.;

    (sign, whole as u64, whole_minutes as u64, seconds)
}

/// Format decimal hours as `"<h>h <m>m <s.ssss>s"`.
pub fn format_right_ascension(hours: f64) -> String {
    let (sign, hours, minutes, seconds) = sexagesimal(hours);
    format!("{sign}{hours}h {minutes}m {seconds:.4}s")
}

/// Format decimal degrees as `"<deg>° <arcmin>' <arcsec.ssss>\""`.
///
/// Negative angles put the sign on the degree token only, including `"-0°"` for
/// declinations between -1° and 0°.
pub fn format_declination(degrees: f64) -> String {
    let (sign, degrees, arcminutes, arcseconds) = sexagesimal(degrees);
    format!("{sign}{degrees}° {arcminutes}' {arcseconds:.4}\"")
}
