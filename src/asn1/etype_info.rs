use super::ber::{BerEncode, BerEncoder, LengthCache};
use crate::error::KrbError;
use bytes::Bytes;
use std::fmt;

/// ```text
/// ETYPE-INFO-ENTRY        ::= SEQUENCE {
///         etype           [0] Int32,
///         salt            [1] OCTET STRING OPTIONAL
/// }
/// ````
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct EtypeInfoEntry {
    pub etype: i32,
    pub salt: Option<Bytes>,
}

impl EtypeInfoEntry {
    pub fn new<T: Into<i32>>(etype: T, salt: Option<Bytes>) -> Self {
        EtypeInfoEntry {
            etype: etype.into(),
            salt,
        }
    }
}

impl BerEncode for EtypeInfoEntry {
    const NAME: &'static str = "ETYPE-INFO-ENTRY";

    fn compute_length(&self, cache: &mut LengthCache<'_>) -> Result<usize, KrbError> {
        cache.sequence(|cache| Ok(cache.explicit(&self.etype)? + cache.explicit_opt(&self.salt)?))
    }

    fn encode(&self, encoder: &mut BerEncoder<'_>) -> Result<(), KrbError> {
        encoder.sequence(|encoder| {
            encoder.explicit(0, &self.etype)?;
            encoder.explicit_opt(1, &self.salt)
        })
    }
}

impl fmt::Display for EtypeInfoEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ etype: {}", self.etype)?;
        if let Some(salt) = &self.salt {
            write!(f, ", salt: {}", hex::encode(salt))?;
        }
        f.write_str(" }")
    }
}

/// ```text
/// ETYPE-INFO              ::= SEQUENCE OF ETYPE-INFO-ENTRY
/// ````
///
/// Superseded by ETYPE-INFO2, still sent for the older DES enctypes.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct EtypeInfo(Vec<EtypeInfoEntry>);

impl EtypeInfo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: EtypeInfoEntry) {
        self.0.push(entry);
    }

    /// Appends an empty entry and hands it back for population.
    pub fn new_entry(&mut self) -> &mut EtypeInfoEntry {
        let idx = self.0.len();
        self.0.push(EtypeInfoEntry::default());
        &mut self.0[idx]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EtypeInfoEntry> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<EtypeInfoEntry>> for EtypeInfo {
    fn from(value: Vec<EtypeInfoEntry>) -> Self {
        EtypeInfo(value)
    }
}

impl FromIterator<EtypeInfoEntry> for EtypeInfo {
    fn from_iter<I: IntoIterator<Item = EtypeInfoEntry>>(iter: I) -> Self {
        EtypeInfo(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a EtypeInfo {
    type Item = &'a EtypeInfoEntry;
    type IntoIter = std::slice::Iter<'a, EtypeInfoEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl BerEncode for EtypeInfo {
    const NAME: &'static str = "ETYPE-INFO";

    fn compute_length(&self, cache: &mut LengthCache<'_>) -> Result<usize, KrbError> {
        self.0.compute_length(cache)
    }

    fn encode(&self, encoder: &mut BerEncoder<'_>) -> Result<(), KrbError> {
        self.0.encode(encoder)
    }
}

impl fmt::Display for EtypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ETYPE-INFO [")?;
        for (i, entry) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{entry}")?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::{EtypeInfo, EtypeInfoEntry};
    use crate::asn1::ber::BerEncode;
    use crate::asn1::constants::EncryptionType;
    use crate::asn1::testing::assert_well_formed;
    use bytes::Bytes;

    #[test]
    fn etype_info_encode() {
        let info: EtypeInfo = [
            EtypeInfoEntry::new(EncryptionType::RC4_HMAC, None),
            EtypeInfoEntry::new(
                EncryptionType::AES256_CTS_HMAC_SHA1_96,
                Some(Bytes::from_static(b"EXAMPLE.COMuser")),
            ),
        ]
        .into_iter()
        .collect();

        let der_bytes = info.serialize().expect("Failed to encode");
        assert_eq!(
            hex::encode(&der_bytes),
            "30213005a0030201173018a003020112a111040f4558414d504c452e434f4d75736572"
        );
        assert_well_formed(&der_bytes);
        assert_eq!(
            info.to_string(),
            "ETYPE-INFO [{ etype: 23 }, { etype: 18, salt: 4558414d504c452e434f4d75736572 }]"
        );
    }
}
