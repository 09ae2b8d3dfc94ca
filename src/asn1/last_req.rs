use super::ber::{required, BerEncode, BerEncoder, LengthCache};
use super::kerberos_time::KerberosTime;
use crate::error::KrbError;
use std::fmt;

/// One element of [`LastReq`].
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct LastReqEntry {
    pub lr_type: i32,
    pub lr_value: Option<KerberosTime>,
}

impl LastReqEntry {
    pub fn new<T: Into<i32>>(lr_type: T, lr_value: KerberosTime) -> Self {
        LastReqEntry {
            lr_type: lr_type.into(),
            lr_value: Some(lr_value),
        }
    }
}

impl BerEncode for LastReqEntry {
    const NAME: &'static str = "LastReq";

    fn compute_length(&self, cache: &mut LengthCache<'_>) -> Result<usize, KrbError> {
        let lr_value = required(&self.lr_value, Self::NAME, "lr-value")?;
        cache.sequence(|cache| Ok(cache.explicit(&self.lr_type)? + cache.explicit(lr_value)?))
    }

    fn encode(&self, encoder: &mut BerEncoder<'_>) -> Result<(), KrbError> {
        let lr_value = required(&self.lr_value, Self::NAME, "lr-value")?;
        encoder.sequence(|encoder| {
            encoder.explicit(0, &self.lr_type)?;
            encoder.explicit(1, lr_value)
        })
    }
}

impl fmt::Display for LastReqEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ lr-type: {}", self.lr_type)?;
        if let Some(lr_value) = &self.lr_value {
            write!(f, ", lr-value: {lr_value}")?;
        }
        f.write_str(" }")
    }
}

/// ```text
/// LastReq         ::=     SEQUENCE OF SEQUENCE {
///         lr-type         [0] Int32,
///         lr-value        [1] KerberosTime
/// }
/// ````
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct LastReq(Vec<LastReqEntry>);

impl LastReq {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: LastReqEntry) {
        self.0.push(entry);
    }

    /// Appends an entry with no time set yet.
    pub fn new_entry(&mut self) -> &mut LastReqEntry {
        let idx = self.0.len();
        self.0.push(LastReqEntry::default());
        &mut self.0[idx]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LastReqEntry> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<LastReqEntry>> for LastReq {
    fn from(value: Vec<LastReqEntry>) -> Self {
        LastReq(value)
    }
}

impl FromIterator<LastReqEntry> for LastReq {
    fn from_iter<I: IntoIterator<Item = LastReqEntry>>(iter: I) -> Self {
        LastReq(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a LastReq {
    type Item = &'a LastReqEntry;
    type IntoIter = std::slice::Iter<'a, LastReqEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl BerEncode for LastReq {
    const NAME: &'static str = "LastReq";

    fn compute_length(&self, cache: &mut LengthCache<'_>) -> Result<usize, KrbError> {
        self.0.compute_length(cache)
    }

    fn encode(&self, encoder: &mut BerEncoder<'_>) -> Result<(), KrbError> {
        self.0.encode(encoder)
    }
}

impl fmt::Display for LastReq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("LastReq [")?;
        for (i, entry) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{entry}")?;
        }
        f.write_str("]")
    }
}
