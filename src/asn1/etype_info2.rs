use super::ber::{BerEncode, BerEncoder, LengthCache};
use super::kerberos_string::KerberosString;
use crate::error::KrbError;
use bytes::Bytes;
use std::fmt;

/// ```text
/// ETYPE-INFO2-ENTRY       ::= SEQUENCE {
///         etype           [0] Int32,
///         salt            [1] KerberosString OPTIONAL,
///         s2kparams       [2] OCTET STRING OPTIONAL
/// }
/// ````
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct EtypeInfo2Entry {
    pub etype: i32,
    pub salt: Option<KerberosString>,
    pub s2kparams: Option<Bytes>,
}

impl EtypeInfo2Entry {
    pub fn new<T: Into<i32>>(
        etype: T,
        salt: Option<KerberosString>,
        s2kparams: Option<Bytes>,
    ) -> Self {
        EtypeInfo2Entry {
            etype: etype.into(),
            salt,
            s2kparams,
        }
    }
}

impl BerEncode for EtypeInfo2Entry {
    const NAME: &'static str = "ETYPE-INFO2-ENTRY";

    fn compute_length(&self, cache: &mut LengthCache<'_>) -> Result<usize, KrbError> {
        cache.sequence(|cache| {
            Ok(cache.explicit(&self.etype)?
                + cache.explicit_opt(&self.salt)?
                + cache.explicit_opt(&self.s2kparams)?)
        })
    }

    fn encode(&self, encoder: &mut BerEncoder<'_>) -> Result<(), KrbError> {
        encoder.sequence(|encoder| {
            encoder.explicit(0, &self.etype)?;
            encoder.explicit_opt(1, &self.salt)?;
            encoder.explicit_opt(2, &self.s2kparams)
        })
    }
}

impl fmt::Display for EtypeInfo2Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ etype: {}", self.etype)?;
        if let Some(salt) = &self.salt {
            write!(f, ", salt: {salt}")?;
        }
        if let Some(s2kparams) = &self.s2kparams {
            write!(f, ", s2kparams: {}", hex::encode(s2kparams))?;
        }
        f.write_str(" }")
    }
}

/// ```text
/// ETYPE-INFO2              ::= SEQUENCE SIZE (1..MAX) OF ETYPE-INFO2-ENTRY
/// ````
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct EtypeInfo2(Vec<EtypeInfo2Entry>);

impl EtypeInfo2 {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: EtypeInfo2Entry) {
        self.0.push(entry);
    }

    /// Appends an empty entry and hands it back for population.
    pub fn new_entry(&mut self) -> &mut EtypeInfo2Entry {
        let idx = self.0.len();
        self.0.push(EtypeInfo2Entry::default());
        &mut self.0[idx]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EtypeInfo2Entry> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<EtypeInfo2Entry>> for EtypeInfo2 {
    fn from(value: Vec<EtypeInfo2Entry>) -> Self {
        EtypeInfo2(value)
    }
}

impl FromIterator<EtypeInfo2Entry> for EtypeInfo2 {
    fn from_iter<I: IntoIterator<Item = EtypeInfo2Entry>>(iter: I) -> Self {
        EtypeInfo2(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a EtypeInfo2 {
    type Item = &'a EtypeInfo2Entry;
    type IntoIter = std::slice::Iter<'a, EtypeInfo2Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl BerEncode for EtypeInfo2 {
    const NAME: &'static str = "ETYPE-INFO2";

    fn compute_length(&self, cache: &mut LengthCache<'_>) -> Result<usize, KrbError> {
        self.0.compute_length(cache)
    }

    fn encode(&self, encoder: &mut BerEncoder<'_>) -> Result<(), KrbError> {
        self.0.encode(encoder)
    }
}

impl fmt::Display for EtypeInfo2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ETYPE-INFO2 [")?;
        for (i, entry) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{entry}")?;
        }
        f.write_str("]")
    }
}
