use super::ber::{BerEncode, BerEncoder, LengthCache};
use crate::error::KrbError;
use bytes::Bytes;
use std::fmt;

/// ```text
/// TransitedEncoding       ::= SEQUENCE {
///        tr-type         [0] Int32 -- must be registered --,
///        contents        [1] OCTET STRING
///}
/// ````
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct TransitedEncoding {
    pub tr_type: i32,
    pub contents: Bytes,
}

impl TransitedEncoding {
    /// DOMAIN-X500-COMPRESS
    pub const DOMAIN_X500_COMPRESS: i32 = 1;

    pub fn new<C: Into<Bytes>>(tr_type: i32, contents: C) -> Self {
        TransitedEncoding {
            tr_type,
            contents: contents.into(),
        }
    }

    /// A ticket that did not cross any realm boundary.
    pub fn empty() -> Self {
        Self::new(Self::DOMAIN_X500_COMPRESS, Bytes::new())
    }
}

impl BerEncode for TransitedEncoding {
    const NAME: &'static str = "TransitedEncoding";

    fn compute_length(&self, cache: &mut LengthCache<'_>) -> Result<usize, KrbError> {
        cache.sequence(|cache| Ok(cache.explicit(&self.tr_type)? + cache.explicit(&self.contents)?))
    }

    fn encode(&self, encoder: &mut BerEncoder<'_>) -> Result<(), KrbError> {
        encoder.sequence(|encoder| {
            encoder.explicit(0, &self.tr_type)?;
            encoder.explicit(1, &self.contents)
        })
    }
}

impl fmt::Display for TransitedEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TransitedEncoding {{ tr-type: {}, contents: {:?} }}",
            self.tr_type,
            String::from_utf8_lossy(&self.contents)
        )
    }
}
