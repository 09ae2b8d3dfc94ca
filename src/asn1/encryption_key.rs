use super::ber::{BerEncode, BerEncoder, LengthCache};
use crate::error::KrbError;
use bytes::Bytes;
use std::fmt;

/// ```text
/// EncryptionKey   ::= SEQUENCE {
///         keytype         [0] Int32 -- actually encryption type --,
///         keyvalue        [1] OCTET STRING
/// }
/// ````
#[derive(Clone, Default, Eq, PartialEq)]
pub struct EncryptionKey {
    pub key_type: i32,
    pub key_value: Bytes,
}

impl EncryptionKey {
    pub fn new<T: Into<i32>, K: Into<Bytes>>(key_type: T, key_value: K) -> Self {
        EncryptionKey {
            key_type: key_type.into(),
            key_value: key_value.into(),
        }
    }
}

impl BerEncode for EncryptionKey {
    const NAME: &'static str = "EncryptionKey";

    fn compute_length(&self, cache: &mut LengthCache<'_>) -> Result<usize, KrbError> {
        cache.sequence(|cache| {
            Ok(cache.explicit(&self.key_type)? + cache.explicit(&self.key_value)?)
        })
    }

    fn encode(&self, encoder: &mut BerEncoder<'_>) -> Result<(), KrbError> {
        encoder.sequence(|encoder| {
            encoder.explicit(0, &self.key_type)?;
            encoder.explicit(1, &self.key_value)
        })
    }
}

// Key material is never shown in diagnostics.
impl fmt::Debug for EncryptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncryptionKey")
            .field("key_type", &self.key_type)
            .field("key_value", &format_args!("<{} bytes>", self.key_value.len()))
            .finish()
    }
}

impl fmt::Display for EncryptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "EncryptionKey {{ keytype: {}, keyvalue: <{} bytes> }}",
            self.key_type,
            self.key_value.len()
        )
    }
}
