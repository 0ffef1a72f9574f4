use crate::GpsFix;

use super::fields::split_fields;
use super::{sentence, verify, NmeaError};

/// Runs one dispatch pass over `buf`, updating `fix` in place.
///
/// The buffer holds zero or more complete `$...*hh\r\n` sentences as
/// handed over by the receive path, NUL-terminated. Sentences that fail
/// the frame checks or decode are skipped; the pass itself never fails,
/// so callers inspect the record afterwards to see what changed.
///
/// All working storage is on the stack, so the pass is safe to re-enter
/// from a nested interrupt as long as each call gets its own record.
pub fn parse(fix: &mut GpsFix, buf: &[u8]) {
    let len = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());

    // The `$` markers are consumed by the split, same as the sentence
    // itself: candidates start at the talker id.
    for candidate in buf[..len].split(|&b| b == b'$') {
        if candidate.is_empty() {
            continue;
        }
        if let Err(_e) = dispatch(fix, candidate) {
            #[cfg(feature = "defmt")]
            defmt::trace!("skipping sentence: {}", _e);
        }
    }
}

fn dispatch(fix: &mut GpsFix, candidate: &[u8]) -> Result<(), NmeaError> {
    if !candidate.windows(2).any(|w| w == b"\r\n") {
        return Err(NmeaError::MissingTerminator);
    }
    verify(candidate)?;

    let text = core::str::from_utf8(candidate).map_err(|_| NmeaError::NotAscii)?;
    let fields = split_fields(text)?;

    // Type tags are mutually exclusive in well-formed input, so the first
    // substring hit decides.
    if text.contains("GLL") {
        sentence::decode_gll(fix, &fields)
    } else if text.contains("GSA") {
        sentence::decode_gsa(fix, &fields)
    } else if text.contains("GGA") {
        sentence::decode_gga(fix, &fields)
    } else if text.contains("GSV") {
        sentence::decode_gsv(fix, &fields)
    } else {
        Ok(())
    }
}
