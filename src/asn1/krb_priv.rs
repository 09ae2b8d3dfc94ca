use super::ber::{required, BerEncode, BerEncoder, LengthCache};
use super::constants::KrbMessageType;
use super::encrypted_data::EncryptedData;
use crate::constants::PVNO;
use crate::error::KrbError;
use std::fmt;

/// ```text
/// KRB-PRIV        ::= [APPLICATION 21] SEQUENCE {
///         pvno            [0] INTEGER (5),
///         msg-type        [1] INTEGER (21),
///                         -- NOTE: there is no [2] tag
///         enc-part        [3] EncryptedData -- EncKrbPrivPart
/// }
/// ```
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct KrbPriv {
    pub enc_part: Option<EncryptedData>,
}

impl KrbPriv {
    pub fn new(enc_part: EncryptedData) -> Self {
        KrbPriv {
            enc_part: Some(enc_part),
        }
    }
}

impl BerEncode for KrbPriv {
    const NAME: &'static str = "KRB-PRIV";

    fn compute_length(&self, cache: &mut LengthCache<'_>) -> Result<usize, KrbError> {
        let enc_part = required(&self.enc_part, Self::NAME, "enc-part")?;
        let msg_type: u32 = KrbMessageType::KrbPriv.into();
        cache.application(|cache| {
            Ok(cache.explicit(&PVNO)? + cache.explicit(&msg_type)? + cache.explicit(enc_part)?)
        })
    }

    fn encode(&self, encoder: &mut BerEncoder<'_>) -> Result<(), KrbError> {
        let enc_part = required(&self.enc_part, Self::NAME, "enc-part")?;
        let msg_type: u32 = KrbMessageType::KrbPriv.into();
        encoder.application(21, |encoder| {
            encoder.explicit(0, &PVNO)?;
            encoder.explicit(1, &msg_type)?;
            encoder.explicit(3, enc_part)
        })
    }
}

impl fmt::Display for KrbPriv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("KRB-PRIV { pvno: 5")?;
        if let Some(enc_part) = &self.enc_part {
            write!(f, ", enc-part: {enc_part}")?;
        }
        f.write_str(" }")
    }
}

#[cfg(test)]
mod tests {
    use super::KrbPriv;
    use crate::asn1::ber::BerEncode;
    use crate::asn1::constants::EncryptionType;
    use crate::asn1::encrypted_data::EncryptedData;
    use crate::asn1::testing::assert_well_formed;

    #[test]
    fn krb_priv_encode() {
        let krb_priv = KrbPriv::new(EncryptedData::new(
            EncryptionType::AES256_CTS_HMAC_SHA1_96,
            None,
            vec![0x88; 32],
        ));
        let der_bytes = krb_priv.serialize().expect("Failed to encode");
        assert_eq!(
            hex::encode(&der_bytes),
            "75393037a003020105a103020115a32b3029a003020112a22204208888888888888888888888888888888888888888888888888888888888888888"
        );
        assert_well_formed(&der_bytes);
    }
}
