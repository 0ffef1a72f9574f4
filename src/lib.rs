#![cfg_attr(not(test), no_std)]

use tinyvec::ArrayVec;

pub mod nmea;

pub use nmea::{parse, NmeaError};

/// Width of the `hhmmss.ss` UTC time-of-day field.
pub const TIME_WIDTH: usize = 9;

/// UTC time of the last fix, `hhmmss.ss`, as sent by the receiver.
///
/// An empty buffer means no time has been decoded yet, or that the last
/// GGA sentence carried a truncated time field.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct TimeOfDay(pub ArrayVec<[u8; TIME_WIDTH]>);

#[cfg(feature = "defmt")]
impl defmt::Format for TimeOfDay {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}", self.0.as_slice())
    }
}

impl TimeOfDay {
    pub fn as_str(&self) -> Option<&str> {
        if self.0.is_empty() {
            None
        } else {
            core::str::from_utf8(self.0.as_slice()).ok()
        }
    }

    /// Overwrites with the first [`TIME_WIDTH`] bytes of `field`.
    /// Callers must have checked the field is long enough.
    pub(crate) fn set(&mut self, field: &str) {
        self.0.clear();
        self.0.extend_from_slice(&field.as_bytes()[..TIME_WIDTH]);
    }

    pub(crate) fn clear(&mut self) {
        self.0.clear();
    }
}

/// A GPS fix record, allocated by the caller (typically once at init) and
/// updated in place by [`parse`].
///
/// Sentences in one buffer apply cumulatively; a later sentence overwrites
/// whatever fields it shares with an earlier one.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GpsFix {
    /// Latitude in decimal degrees. GGA stores a signed value; GLL stores
    /// the magnitude and puts the hemisphere in `ns`.
    pub lat: f64,
    /// Longitude in decimal degrees, same sign convention as `lat`.
    pub lon: f64,
    /// `b'N'` or `b'S'`, as last written by a GLL sentence.
    pub ns: u8,
    /// `b'E'` or `b'W'`, as last written by a GLL sentence.
    pub ew: u8,
    /// Altitude above mean sea level, meters.
    pub altitude: f32,
    /// Horizontal dilution of precision.
    pub hdop: f32,
    /// Satellites used in the solution.
    pub satellite_count: u8,
    /// Whether the receiver reports a usable fix.
    pub fix: bool,
    /// UTC time of the last accepted fix.
    pub last_fix_time: TimeOfDay,
}
