use super::ber::{BerEncode, BerEncoder, LengthCache};
use crate::error::KrbError;
use bytes::Bytes;
use std::fmt;

/// ```text
/// Checksum        ::= SEQUENCE {
///         cksumtype       [0] Int32,
///         checksum        [1] OCTET STRING
/// }
/// ````
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Checksum {
    // This field indicates the algorithm used to generate the accompanying checksum.
    pub checksum_type: i32,
    // This field contains the checksum itself, encoded as an octet string.
    pub checksum: Bytes,
}

impl Checksum {
    pub fn new<T: Into<i32>, C: Into<Bytes>>(checksum_type: T, checksum: C) -> Self {
        Checksum {
            checksum_type: checksum_type.into(),
            checksum: checksum.into(),
        }
    }
}

impl BerEncode for Checksum {
    const NAME: &'static str = "Checksum";

    fn compute_length(&self, cache: &mut LengthCache<'_>) -> Result<usize, KrbError> {
        cache.sequence(|cache| {
            Ok(cache.explicit(&self.checksum_type)? + cache.explicit(&self.checksum)?)
        })
    }

    fn encode(&self, encoder: &mut BerEncoder<'_>) -> Result<(), KrbError> {
        encoder.sequence(|encoder| {
            encoder.explicit(0, &self.checksum_type)?;
            encoder.explicit(1, &self.checksum)
        })
    }
}

impl fmt::Display for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Checksum {{ cksumtype: {}, checksum: {} }}",
            self.checksum_type,
            hex::encode(&self.checksum)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::Checksum;
    use crate::asn1::ber::BerEncode;
    use crate::asn1::constants::ChecksumType;
    use crate::asn1::testing::assert_well_formed;
    use assert_hex::assert_eq_hex;

    #[test]
    fn checksum_encode() {
        let cksum = Checksum::new(ChecksumType::CRC32, vec![0x01, 0x02, 0x03]);
        let prepared = cksum.prepare().expect("Failed to prepare");
        assert_eq!(prepared.encoded_len(), 14);

        let der_bytes = prepared.to_bytes().expect("Failed to encode");
        assert_eq_hex!(
            der_bytes.as_ref(),
            [
                0x30, 0x0c, 0xa0, 0x03, 0x02, 0x01, 0x01, 0xa1, 0x05, 0x04, 0x03, 0x01, 0x02,
                0x03
            ]
        );
        assert_well_formed(&der_bytes);
        assert_eq!(cksum.to_string(), "Checksum { cksumtype: 1, checksum: 010203 }");
    }

    #[test]
    fn checksum_empty_is_still_present() {
        // An empty checksum still emits its OCTET STRING.
        let cksum = Checksum::new(ChecksumType::HMAC_MD5, Vec::new());
        let der_bytes = cksum.serialize().expect("Failed to encode");
        assert_eq!(hex::encode(&der_bytes), "300aa0040202ff76a1020400");
    }
}
