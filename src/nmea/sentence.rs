//! Per-sentence decoders. Each one validates its whole field set before
//! touching the record, so a rejected sentence leaves no partial write.

use crate::{GpsFix, TIME_WIDTH};

use super::fields::{split_coord, FieldBuf};
use super::NmeaError;

fn require(fields: &FieldBuf<'_>, expect: usize) -> Result<(), NmeaError> {
    if fields.len() < expect {
        Err(NmeaError::MissingFields {
            expect,
            found: fields.len(),
        })
    } else {
        Ok(())
    }
}

fn indicator(field: &str, a: u8, b: u8) -> Result<u8, NmeaError> {
    match field.as_bytes().first() {
        Some(&c) if c == a || c == b => Ok(c),
        other => Err(NmeaError::BadHemisphere {
            found: other.copied().unwrap_or(0),
        }),
    }
}

/// GLL: geographic position.
///
/// Stores unsigned coordinate magnitudes and puts the hemisphere into the
/// indicator bytes. The optional trailing time field is only taken when it
/// has the full `hhmmss.ss` width; otherwise the previous time stands.
pub fn decode_gll(fix: &mut GpsFix, fields: &FieldBuf<'_>) -> Result<(), NmeaError> {
    require(fields, 5)?;

    let ns = indicator(fields[2], b'N', b'S')?;
    let ew = indicator(fields[4], b'E', b'W')?;
    let lat = split_coord(fields[1], 2)?;
    let lon = split_coord(fields[3], 3)?;

    // A zeroed component is the receiver's "no data" filler, not a real
    // reading at the equator or prime meridian.
    if lat.degrees == 0 || lat.minutes == 0.0 || lon.degrees == 0 || lon.minutes == 0.0 {
        return Err(NmeaError::BadCoordinate);
    }

    fix.lat = lat.to_degrees();
    fix.lon = lon.to_degrees();
    fix.ns = ns;
    fix.ew = ew;
    if let Some(time) = fields.get(5) {
        if time.len() >= TIME_WIDTH {
            fix.last_fix_time.set(time);
        }
    }
    Ok(())
}

/// GSA: active-satellite status. Touches only the fix flag and the count
/// of satellites in use, never the coordinates.
pub fn decode_gsa(fix: &mut GpsFix, fields: &FieldBuf<'_>) -> Result<(), NmeaError> {
    require(fields, 15)?;

    // Fix type 1 is "none"; 2D and 3D both collapse to a usable fix.
    fix.fix = fields[2].parse::<i32>().unwrap_or(0) > 1;
    fix.satellite_count = fields[3..15].iter().filter(|prn| !prn.is_empty()).count() as u8;
    Ok(())
}

/// GGA: fix data, the full field set.
///
/// Unlike GLL this stores signed coordinates (negated for S/W), rejects
/// anything outside the open intervals (0, 90) / (0, 180), and clears the
/// time field when the incoming one is truncated.
pub fn decode_gga(fix: &mut GpsFix, fields: &FieldBuf<'_>) -> Result<(), NmeaError> {
    require(fields, 10)?;

    let ns = indicator(fields[3], b'N', b'S')?;
    let lat = split_coord(fields[2], 2)?.to_degrees();
    if lat <= 0.0 || lat >= 90.0 {
        return Err(NmeaError::NoFix);
    }

    let ew = indicator(fields[5], b'E', b'W')?;
    let lon = split_coord(fields[4], 3)?.to_degrees();
    if lon <= 0.0 || lon >= 180.0 {
        return Err(NmeaError::NoFix);
    }

    fix.lat = if ns == b'S' { -lat } else { lat };
    fix.lon = if ew == b'W' { -lon } else { lon };
    fix.fix = fields[6].parse::<i32>().unwrap_or(0) > 0;
    fix.satellite_count = fields[7].parse().unwrap_or(0);

    // Zero here almost always means an empty or unparsable field, so the
    // last known value stands rather than being wiped.
    let hdop = fields[8].parse::<f32>().unwrap_or(0.0);
    if hdop != 0.0 {
        fix.hdop = hdop;
    }
    let altitude = fields[9].parse::<f32>().unwrap_or(0.0);
    if altitude != 0.0 {
        fix.altitude = altitude;
    }

    if fields[1].len() >= TIME_WIDTH {
        fix.last_fix_time.set(fields[1]);
    } else {
        fix.last_fix_time.clear();
    }
    Ok(())
}

/// GSV: satellites in view. Recognized and length-checked only; the
/// per-satellite elevation/azimuth/SNR data is not yet extracted into the
/// record, so success means "structurally valid", nothing more.
pub fn decode_gsv(_fix: &mut GpsFix, fields: &FieldBuf<'_>) -> Result<(), NmeaError> {
    require(fields, 2)
}
