use super::ber::{BerEncode, BerEncoder, LengthCache};
use crate::error::KrbError;
use bytes::Bytes;
use std::fmt;

/// ```text
/// EncryptedData   ::= SEQUENCE {
///         etype   [0] Int32 -- EncryptionType --,
///         kvno    [1] UInt32 OPTIONAL,
///         cipher  [2] OCTET STRING -- ciphertext
/// }
/// ````
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct EncryptedData {
    pub etype: i32,
    /// `None` omits the member. `Some(0)` is a real key version.
    pub kvno: Option<u32>,
    pub cipher: Bytes,
}

impl EncryptedData {
    pub fn new<T: Into<i32>, C: Into<Bytes>>(etype: T, kvno: Option<u32>, cipher: C) -> Self {
        EncryptedData {
            etype: etype.into(),
            kvno,
            cipher: cipher.into(),
        }
    }

    /// Accepts the historic signed key version where any negative value meant
    /// the key version was absent.
    pub fn set_legacy_kvno(&mut self, kvno: i32) {
        self.kvno = u32::try_from(kvno).ok();
    }
}

impl BerEncode for EncryptedData {
    const NAME: &'static str = "EncryptedData";

    fn compute_length(&self, cache: &mut LengthCache<'_>) -> Result<usize, KrbError> {
        cache.sequence(|cache| {
            Ok(cache.explicit(&self.etype)?
                + cache.explicit_opt(&self.kvno)?
                + cache.explicit(&self.cipher)?)
        })
    }

    fn encode(&self, encoder: &mut BerEncoder<'_>) -> Result<(), KrbError> {
        encoder.sequence(|encoder| {
            encoder.explicit(0, &self.etype)?;
            encoder.explicit_opt(1, &self.kvno)?;
            encoder.explicit(2, &self.cipher)
        })
    }
}

impl fmt::Display for EncryptedData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EncryptedData {{ etype: {}", self.etype)?;
        if let Some(kvno) = self.kvno {
            write!(f, ", kvno: {kvno}")?;
        }
        write!(f, ", cipher: {} }}", hex::encode(&self.cipher))
    }
}

/// ```text
/// PA-ENC-TIMESTAMP        ::= EncryptedData -- PA-ENC-TS-ENC
/// ````
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct PaEncTimestamp(pub EncryptedData);

impl From<EncryptedData> for PaEncTimestamp {
    fn from(value: EncryptedData) -> Self {
        PaEncTimestamp(value)
    }
}

impl std::ops::Deref for PaEncTimestamp {
    type Target = EncryptedData;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl BerEncode for PaEncTimestamp {
    const NAME: &'static str = "PA-ENC-TIMESTAMP";

    fn compute_length(&self, cache: &mut LengthCache<'_>) -> Result<usize, KrbError> {
        self.0.compute_length(cache)
    }

    fn encode(&self, encoder: &mut BerEncoder<'_>) -> Result<(), KrbError> {
        self.0.encode(encoder)
    }
}

impl fmt::Display for PaEncTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PA-ENC-TIMESTAMP {}", self.0)
    }
}
