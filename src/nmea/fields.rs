use tinyvec::ArrayVec;

use super::{NmeaError, MAX_FIELDS};

/// Token arena for one sentence: borrowed views into the sentence text,
/// so tokenizing is boundary-finding, not copying.
pub type FieldBuf<'a> = ArrayVec<[&'a str; MAX_FIELDS]>;

/// Splits a sentence on `,` into its fields.
///
/// Consecutive delimiters, and a leading or trailing delimiter, yield an
/// empty token; collapsing them would shift every index after the gap.
pub fn split_fields(sentence: &str) -> Result<FieldBuf<'_>, NmeaError> {
    let mut fields = FieldBuf::new();
    for field in sentence.split(',') {
        if fields.try_push(field).is_some() {
            return Err(NmeaError::FieldOverflow);
        }
    }
    Ok(fields)
}

/// One `DDMM.MMMM` coordinate field split into its two parts.
///
/// Components that fail to parse come out as zero, which the sentinel and
/// range checks downstream then treat as "no data".
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct RawCoord {
    pub degrees: i32,
    pub minutes: f32,
}

impl RawCoord {
    /// Decimal degrees: `whole + minutes / 60`, identical for every
    /// sentence type that carries coordinates.
    pub fn to_degrees(self) -> f64 {
        self.degrees as f64 + self.minutes as f64 / 60.0
    }
}

/// Splits a raw coordinate field. Latitudes carry two whole-degree
/// digits, longitudes three; everything after them is minutes.
pub fn split_coord(raw: &str, deg_digits: usize) -> Result<RawCoord, NmeaError> {
    let whole = raw.get(..deg_digits).ok_or(NmeaError::BadCoordinate)?;
    let frac = raw.get(deg_digits..).ok_or(NmeaError::BadCoordinate)?;
    Ok(RawCoord {
        degrees: whole.parse().unwrap_or(0),
        minutes: frac.parse().unwrap_or(0.0),
    })
}
