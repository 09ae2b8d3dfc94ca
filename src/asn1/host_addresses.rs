use super::ber::{BerEncode, BerEncoder, LengthCache};
use super::host_address::HostAddress;
use crate::error::KrbError;
use std::fmt;

/// ```text
/// -- NOTE: HostAddresses is always used as an OPTIONAL field and
/// -- should not be empty.
/// HostAddresses   -- NOTE: subtly different from rfc1510,
///                 -- but has a value mapping and encodes the same
///         ::= SEQUENCE OF HostAddress
/// ````
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct HostAddresses(Vec<HostAddress>);

impl HostAddresses {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, address: HostAddress) {
        self.0.push(address);
    }

    /// Appends an empty address and hands it back for population.
    pub fn new_entry(&mut self) -> &mut HostAddress {
        let idx = self.0.len();
        self.0.push(HostAddress::default());
        &mut self.0[idx]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HostAddress> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<HostAddress>> for HostAddresses {
    fn from(value: Vec<HostAddress>) -> Self {
        HostAddresses(value)
    }
}

impl FromIterator<HostAddress> for HostAddresses {
    fn from_iter<I: IntoIterator<Item = HostAddress>>(iter: I) -> Self {
        HostAddresses(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a HostAddresses {
    type Item = &'a HostAddress;
    type IntoIter = std::slice::Iter<'a, HostAddress>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl BerEncode for HostAddresses {
    const NAME: &'static str = "HostAddresses";

    fn compute_length(&self, cache: &mut LengthCache<'_>) -> Result<usize, KrbError> {
        self.0.compute_length(cache)
    }

    fn encode(&self, encoder: &mut BerEncoder<'_>) -> Result<(), KrbError> {
        self.0.encode(encoder)
    }
}

impl fmt::Display for HostAddresses {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("HostAddresses [")?;
        for (i, addr) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{addr}")?;
        }
        f.write_str("]")
    }
}
