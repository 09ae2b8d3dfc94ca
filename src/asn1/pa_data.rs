use super::ber::{BerEncode, BerEncoder, LengthCache};
use crate::error::KrbError;
use bytes::Bytes;
use std::fmt;

/// ```text
/// PA-DATA         ::= SEQUENCE {
///         -- NOTE: first tag is [1], not [0]
///         padata-type     [1] Int32,
///         padata-value    [2] OCTET STRING -- might be encoded AP-REQ
/// }
/// ````
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct PaData {
    pub padata_type: i32,
    pub padata_value: Bytes,
}

impl PaData {
    pub fn new<T: Into<i32>, V: Into<Bytes>>(padata_type: T, padata_value: V) -> Self {
        PaData {
            padata_type: padata_type.into(),
            padata_value: padata_value.into(),
        }
    }

    /// Wraps an already encoded structure, such as a PA-ENC-TIMESTAMP or an
    /// AP-REQ, as the value of a pre-authentication element.
    pub fn from_encodable<T, E>(padata_type: T, value: &E) -> Result<Self, KrbError>
    where
        T: Into<i32>,
        E: BerEncode,
    {
        Ok(Self::new(padata_type, value.serialize()?))
    }
}

impl BerEncode for PaData {
    const NAME: &'static str = "PA-DATA";

    fn compute_length(&self, cache: &mut LengthCache<'_>) -> Result<usize, KrbError> {
        cache.sequence(|cache| {
            Ok(cache.explicit(&self.padata_type)? + cache.explicit(&self.padata_value)?)
        })
    }

    fn encode(&self, encoder: &mut BerEncoder<'_>) -> Result<(), KrbError> {
        encoder.sequence(|encoder| {
            encoder.explicit(1, &self.padata_type)?;
            encoder.explicit(2, &self.padata_value)
        })
    }
}

impl fmt::Display for PaData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PA-DATA {{ padata-type: {}, padata-value: {} }}",
            self.padata_type,
            hex::encode(&self.padata_value)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::PaData;
    use crate::asn1::ber::BerEncode;
    use crate::asn1::constants::{EncryptionType, PaDataType};
    use crate::asn1::encrypted_data::{EncryptedData, PaEncTimestamp};

    #[test]
    fn pa_data_tags_start_at_one() {
        let pa = PaData::new(PaDataType::PadataAsFreshness, Vec::new());
        let der_bytes = pa.serialize().expect("Failed to encode");
        assert_eq!(hex::encode(&der_bytes), "300aa10402020096a2020400");
    }

    #[test]
    fn pa_data_from_encodable() {
        let ts = PaEncTimestamp::from(EncryptedData::new(
            EncryptionType::DES_CBC_CRC,
            None,
            vec![0xaa],
        ));
        let pa = PaData::from_encodable(PaDataType::PaEncTimestamp, &ts).expect("Failed to wrap");
        assert_eq!(pa.padata_type, 2);
        assert_eq!(hex::encode(&pa.padata_value), "300aa003020101a2030401aa");
    }
}
