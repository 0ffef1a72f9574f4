use thiserror::Error;

pub mod fields;
pub mod parser;
pub mod sentence;

pub use parser::parse;

/// Most tokens one sentence may split into before it is rejected.
pub const MAX_FIELDS: usize = 25;

/// Anything shorter cannot hold a type tag plus a checksum tail.
pub const MIN_SENTENCE_LEN: usize = 5;

/// Running XOR over the sentence body, folded one byte at a time.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct NmeaChecksum(pub u8);

impl NmeaChecksum {
    pub fn new() -> Self {
        Self(0)
    }

    pub fn next(self, byte: u8) -> Self {
        Self(self.0 ^ byte)
    }
}

impl Default for NmeaChecksum {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq<u8> for NmeaChecksum {
    fn eq(&self, other: &u8) -> bool {
        self.0 == *other
    }
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NmeaError {
    #[error("sentence shorter than the minimum frame")]
    TooShort,
    #[error("no CR-LF terminator")]
    MissingTerminator,
    #[error("no `*hh` checksum tail")]
    MissingChecksum,
    #[error("checksum mismatch: expected {expect:#04x}, saw {saw:#04x}")]
    BadChecksum { expect: u8, saw: u8 },
    #[error("sentence is not valid ASCII text")]
    NotAscii,
    #[error("sentence splits into more fields than the arena holds")]
    FieldOverflow,
    #[error("expected at least {expect} fields, found {found}")]
    MissingFields { expect: usize, found: usize },
    #[error("invalid hemisphere indicator {found}")]
    BadHemisphere { found: u8 },
    #[error("coordinate field is malformed or a no-data sentinel")]
    BadCoordinate,
    #[error("coordinates outside the usable fix range")]
    NoFix,
}

/// Checks the `*hh` tail of one sentence against an XOR of the body.
///
/// `sentence` is everything after the `$`, terminator included. The two
/// hex digits may be either case.
pub fn verify(sentence: &[u8]) -> Result<(), NmeaError> {
    if sentence.len() < MIN_SENTENCE_LEN {
        return Err(NmeaError::TooShort);
    }

    let star = sentence
        .iter()
        .position(|&b| b == b'*')
        .ok_or(NmeaError::MissingChecksum)?;
    let tail = sentence
        .get(star + 1..star + 3)
        .ok_or(NmeaError::MissingChecksum)?;
    let saw = parse_hex_pair(tail).ok_or(NmeaError::MissingChecksum)?;

    let expect = sentence[..star]
        .iter()
        .fold(NmeaChecksum::new(), |cs, &b| cs.next(b));
    if expect == saw {
        Ok(())
    } else {
        Err(NmeaError::BadChecksum {
            expect: expect.0,
            saw,
        })
    }
}

fn parse_hex_pair(tail: &[u8]) -> Option<u8> {
    let tail = core::str::from_utf8(tail).ok()?;
    u8::from_str_radix(tail, 16).ok()
}
