use super::ber::{BerEncode, BerEncoder, LengthCache};
use super::pa_data::PaData;
use crate::error::KrbError;
use std::fmt;

/// ```text
/// METHOD-DATA     ::= SEQUENCE OF PA-DATA
/// ````
///
/// Sent as the `e-data` of a KDC_ERR_PREAUTH_REQUIRED error and as the
/// `padata` of KDC requests and replies.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct MethodData(Vec<PaData>);

impl MethodData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: PaData) {
        self.0.push(entry);
    }

    /// Appends an empty entry and hands it back for population.
    pub fn new_entry(&mut self) -> &mut PaData {
        let idx = self.0.len();
        self.0.push(PaData::default());
        &mut self.0[idx]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PaData> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<PaData>> for MethodData {
    fn from(value: Vec<PaData>) -> Self {
        MethodData(value)
    }
}

impl FromIterator<PaData> for MethodData {
    fn from_iter<I: IntoIterator<Item = PaData>>(iter: I) -> Self {
        MethodData(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a MethodData {
    type Item = &'a PaData;
    type IntoIter = std::slice::Iter<'a, PaData>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl BerEncode for MethodData {
    const NAME: &'static str = "METHOD-DATA";

    fn compute_length(&self, cache: &mut LengthCache<'_>) -> Result<usize, KrbError> {
        self.0.compute_length(cache)
    }

    fn encode(&self, encoder: &mut BerEncoder<'_>) -> Result<(), KrbError> {
        self.0.encode(encoder)
    }
}

impl fmt::Display for MethodData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("METHOD-DATA [")?;
        for (i, entry) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{entry}")?;
        }
        f.write_str("]")
    }
}
