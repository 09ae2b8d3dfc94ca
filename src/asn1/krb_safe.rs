use super::ber::{required, BerEncode, BerEncoder, LengthCache};
use super::checksum::Checksum;
use super::constants::KrbMessageType;
use super::krb_safe_body::KrbSafeBody;
use crate::constants::PVNO;
use crate::error::KrbError;
use std::fmt;

/// ```text
/// KRB-SAFE        ::= [APPLICATION 20] SEQUENCE {
///         pvno            [0] INTEGER (5),
///         msg-type        [1] INTEGER (20),
///         safe-body       [2] KRB-SAFE-BODY,
///         cksum           [3] Checksum
/// }
/// ```
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct KrbSafe {
    pub safe_body: Option<KrbSafeBody>,
    pub cksum: Option<Checksum>,
}

impl KrbSafe {
    pub fn new(safe_body: KrbSafeBody, cksum: Checksum) -> Self {
        KrbSafe {
            safe_body: Some(safe_body),
            cksum: Some(cksum),
        }
    }
}

impl BerEncode for KrbSafe {
    const NAME: &'static str = "KRB-SAFE";

    fn compute_length(&self, cache: &mut LengthCache<'_>) -> Result<usize, KrbError> {
        let safe_body = required(&self.safe_body, Self::NAME, "safe-body")?;
        let cksum = required(&self.cksum, Self::NAME, "cksum")?;
        let msg_type: u32 = KrbMessageType::KrbSafe.into();
        cache.application(|cache| {
            Ok(cache.explicit(&PVNO)?
                + cache.explicit(&msg_type)?
                + cache.explicit(safe_body)?
                + cache.explicit(cksum)?)
        })
    }

    fn encode(&self, encoder: &mut BerEncoder<'_>) -> Result<(), KrbError> {
        let safe_body = required(&self.safe_body, Self::NAME, "safe-body")?;
        let cksum = required(&self.cksum, Self::NAME, "cksum")?;
        let msg_type: u32 = KrbMessageType::KrbSafe.into();
        encoder.application(20, |encoder| {
            encoder.explicit(0, &PVNO)?;
            encoder.explicit(1, &msg_type)?;
            encoder.explicit(2, safe_body)?;
            encoder.explicit(3, cksum)
        })
    }
}

impl fmt::Display for KrbSafe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("KRB-SAFE { pvno: 5")?;
        if let Some(safe_body) = &self.safe_body {
            write!(f, ", safe-body: {safe_body}")?;
        }
        if let Some(cksum) = &self.cksum {
            write!(f, ", cksum: {cksum}")?;
        }
        f.write_str(" }")
    }
}
