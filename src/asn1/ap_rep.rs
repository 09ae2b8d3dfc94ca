use super::ber::{required, BerEncode, BerEncoder, LengthCache};
use super::constants::KrbMessageType;
use super::encrypted_data::EncryptedData;
use crate::constants::PVNO;
use crate::error::KrbError;
use std::fmt;

/// ```text
/// AP-REP          ::= [APPLICATION 15] SEQUENCE {
///         pvno            [0] INTEGER (5),
///         msg-type        [1] INTEGER (15),
///         enc-part        [2] EncryptedData -- EncAPRepPart
/// }
/// ```
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct ApRep {
    pub enc_part: Option<EncryptedData>,
}

impl ApRep {
    pub fn new(enc_part: EncryptedData) -> Self {
        ApRep {
            enc_part: Some(enc_part),
        }
    }
}

impl BerEncode for ApRep {
    const NAME: &'static str = "AP-REP";

    fn compute_length(&self, cache: &mut LengthCache<'_>) -> Result<usize, KrbError> {
        let enc_part = required(&self.enc_part, Self::NAME, "enc-part")?;
        let msg_type: u32 = KrbMessageType::KrbApRep.into();
        cache.application(|cache| {
            Ok(cache.explicit(&PVNO)? + cache.explicit(&msg_type)? + cache.explicit(enc_part)?)
        })
    }

    fn encode(&self, encoder: &mut BerEncoder<'_>) -> Result<(), KrbError> {
        let enc_part = required(&self.enc_part, Self::NAME, "enc-part")?;
        let msg_type: u32 = KrbMessageType::KrbApRep.into();
        encoder.application(15, |encoder| {
            encoder.explicit(0, &PVNO)?;
            encoder.explicit(1, &msg_type)?;
            encoder.explicit(2, enc_part)
        })
    }
}

impl fmt::Display for ApRep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AP-REP { pvno: 5")?;
        if let Some(enc_part) = &self.enc_part {
            write!(f, ", enc-part: {enc_part}")?;
        }
        f.write_str(" }")
    }
}
