use super::ber::{BerEncode, BerEncoder, LengthCache};
use crate::error::KrbError;
use std::fmt;
use tracing::error;

/// ```text
/// Microseconds    ::= INTEGER (0..999999)
///                     -- microseconds
/// ````
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Microseconds(u32);

impl Microseconds {
    pub const MAX: u32 = 999_999;

    pub fn new(usec: u32) -> Result<Self, KrbError> {
        if usec > Self::MAX {
            error!(usec, "microseconds out of range");
            return Err(KrbError::InvalidMicroseconds);
        }
        Ok(Microseconds(usec))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for Microseconds {
    type Error = KrbError;

    fn try_from(usec: u32) -> Result<Self, Self::Error> {
        Microseconds::new(usec)
    }
}

impl From<Microseconds> for u32 {
    fn from(usec: Microseconds) -> u32 {
        usec.0
    }
}

impl BerEncode for Microseconds {
    const NAME: &'static str = "Microseconds";

    fn compute_length(&self, cache: &mut LengthCache<'_>) -> Result<usize, KrbError> {
        self.0.compute_length(cache)
    }

    fn encode(&self, encoder: &mut BerEncoder<'_>) -> Result<(), KrbError> {
        self.0.encode(encoder)
    }
}

impl fmt::Display for Microseconds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
