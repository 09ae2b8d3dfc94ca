use super::ber::{required, BerEncode, BerEncoder, LengthCache};
use super::encryption_key::EncryptionKey;
use super::kerberos_time::KerberosTime;
use super::microseconds::Microseconds;
use crate::error::KrbError;
use std::fmt;

/// ```text
/// EncAPRepPart    ::= [APPLICATION 27] SEQUENCE {
///         ctime           [0] KerberosTime,
///         cusec           [1] Microseconds,
///         subkey          [2] EncryptionKey OPTIONAL,
///         seq-number      [3] UInt32 OPTIONAL
/// }
/// ```
///
/// `ctime` and `cusec` are echoed from the authenticator being answered.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct EncApRepPart {
    pub ctime: Option<KerberosTime>,
    pub cusec: Microseconds,
    pub subkey: Option<EncryptionKey>,
    pub seq_number: Option<u32>,
}

impl EncApRepPart {
    pub fn new(ctime: KerberosTime, cusec: Microseconds) -> Self {
        EncApRepPart {
            ctime: Some(ctime),
            cusec,
            ..Default::default()
        }
    }
}

impl BerEncode for EncApRepPart {
    const NAME: &'static str = "EncAPRepPart";

    fn compute_length(&self, cache: &mut LengthCache<'_>) -> Result<usize, KrbError> {
        let ctime = required(&self.ctime, Self::NAME, "ctime")?;
        cache.application(|cache| {
            Ok(cache.explicit(ctime)?
                + cache.explicit(&self.cusec)?
                + cache.explicit_opt(&self.subkey)?
                + cache.explicit_opt(&self.seq_number)?)
        })
    }

    fn encode(&self, encoder: &mut BerEncoder<'_>) -> Result<(), KrbError> {
        let ctime = required(&self.ctime, Self::NAME, "ctime")?;
        encoder.application(27, |encoder| {
            encoder.explicit(0, ctime)?;
            encoder.explicit(1, &self.cusec)?;
            encoder.explicit_opt(2, &self.subkey)?;
            encoder.explicit_opt(3, &self.seq_number)
        })
    }
}

impl fmt::Display for EncApRepPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EncAPRepPart {")?;
        if let Some(ctime) = &self.ctime {
            write!(f, " ctime: {ctime},")?;
        }
        write!(f, " cusec: {}", self.cusec)?;
        if let Some(subkey) = &self.subkey {
            write!(f, ", subkey: {subkey}")?;
        }
        if let Some(seq_number) = &self.seq_number {
            write!(f, ", seq-number: {seq_number}")?;
        }
        f.write_str(" }")
    }
}

#[cfg(test)]
mod tests {
    use super::EncApRepPart;
    use crate::asn1::ber::BerEncode;
    use crate::asn1::microseconds::Microseconds;
    use crate::asn1::constants::EncryptionType;
    use crate::asn1::encryption_key::EncryptionKey;
    use crate::asn1::testing::{assert_well_formed, kerberos_time};

    #[test]
    fn enc_ap_rep_part_encode_minimal() {
        let part = EncApRepPart::new(
            kerberos_time(2024, 6, 12, 14, 51, 9),
            Microseconds::default(),
        );
        let der_bytes = part.serialize().expect("Failed to encode");
        assert_eq!(
            hex::encode(&der_bytes),
            "7b1a3018a011180f32303234303631323134353130395aa103020100"
        );
    }

    #[test]
    fn enc_ap_rep_part_encode_full() {
        let mut part = EncApRepPart::new(
            kerberos_time(2024, 6, 12, 14, 51, 9),
            Microseconds::new(123456).expect("Failed to build microseconds"),
        );
        part.subkey = Some(EncryptionKey::new(
            EncryptionType::AES128_CTS_HMAC_SHA1_96,
            vec![0x55; 16],
        ));
        // High bit set, needs a leading zero octet.
        part.seq_number = Some(0x9abc_def0);

        let der_bytes = part.serialize().expect("Failed to encode");
        assert_eq!(
            hex::encode(&der_bytes),
            "7b423040a011180f32303234303631323134353130395aa105020301e240a21b3019a003020111a112041055555555555555555555555555555555a3070205009abcdef0"
        );
        assert_well_formed(&der_bytes);
        assert_eq!(
            part.to_string(),
            "EncAPRepPart { ctime: 20240612145109Z, cusec: 123456, subkey: EncryptionKey { keytype: 17, keyvalue: <16 bytes> }, seq-number: 2596069104 }"
        );
    }
}
