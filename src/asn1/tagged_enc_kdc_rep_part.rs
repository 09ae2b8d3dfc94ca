use super::ber::{BerEncode, BerEncoder, LengthCache};
use super::enc_kdc_rep_part::EncKdcRepPart;
use crate::error::KrbError;
use std::fmt;

/// ```text
///  EncASRepPart    ::= [APPLICATION 25] EncKDCRepPart
///  EncTGSRepPart   ::= [APPLICATION 26] EncKDCRepPart
/// ```
///
/// Many implementations, MIT included, send an EncASRepPart inside a TGS-REP.
/// The variant picked here only controls the tag that gets written.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum TaggedEncKdcRepPart {
    EncAsRepPart(EncKdcRepPart),
    EncTgsRepPart(EncKdcRepPart),
}

impl TaggedEncKdcRepPart {
    pub fn enc_kdc_rep_part(&self) -> &EncKdcRepPart {
        match self {
            TaggedEncKdcRepPart::EncAsRepPart(part) | TaggedEncKdcRepPart::EncTgsRepPart(part) => {
                part
            }
        }
    }
}

impl BerEncode for TaggedEncKdcRepPart {
    const NAME: &'static str = "EncKDCRepPart";

    fn compute_length(&self, cache: &mut LengthCache<'_>) -> Result<usize, KrbError> {
        let part = self.enc_kdc_rep_part();
        cache.application(|cache| part.members_length(cache))
    }

    fn encode(&self, encoder: &mut BerEncoder<'_>) -> Result<(), KrbError> {
        match self {
            TaggedEncKdcRepPart::EncAsRepPart(part) => {
                encoder.application(25, |encoder| part.encode_members(encoder))
            }
            TaggedEncKdcRepPart::EncTgsRepPart(part) => {
                encoder.application(26, |encoder| part.encode_members(encoder))
            }
        }
    }
}

impl fmt::Display for TaggedEncKdcRepPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaggedEncKdcRepPart::EncAsRepPart(part) => write!(f, "EncASRepPart {part}"),
            TaggedEncKdcRepPart::EncTgsRepPart(part) => write!(f, "EncTGSRepPart {part}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TaggedEncKdcRepPart;
    use crate::asn1::ber::BerEncode;
    use crate::asn1::constants::{EncryptionType, LastReqType, PaDataType, PrincipalNameType};
    use crate::asn1::enc_kdc_rep_part::EncKdcRepPart;
    use crate::asn1::encryption_key::EncryptionKey;
    use crate::asn1::last_req::LastReqEntry;
    use crate::asn1::method_data::MethodData;
    use crate::asn1::pa_data::PaData;
    use crate::asn1::principal_name::PrincipalName;
    use crate::asn1::testing::{assert_well_formed, kerberos_time};
    use crate::asn1::ticket_flags::TicketFlags;
    use crate::error::KrbError;

    const ENC_AS_REP_PART: &str = "7981c73081c4a02b3029a003020112a12204202222222222222222222222222222222222222222222222222222222222222222a11c301a3018a003020100a111180f32303234303631323134353130395aa2060204586155dda40703050040e10000a511180f32303234303631323134353130395aa711180f32303234303631333030343933305aa811180f32303234303631393134353130395aa90c1b0a41464f524553542e4144aa1f301da003020102a11630141b066b72627467741b0a41464f524553542e4144";

    fn sample_part() -> EncKdcRepPart {
        let mut part = EncKdcRepPart {
            key: Some(EncryptionKey::new(
                EncryptionType::AES256_CTS_HMAC_SHA1_96,
                vec![0x22; 32],
            )),
            nonce: 0x5861_55dd,
            flags: TicketFlags::Forwardable
                | TicketFlags::Renewable
                | TicketFlags::Initial
                | TicketFlags::PreAuthent
                | TicketFlags::NameCanonicalize,
            authtime: Some(kerberos_time(2024, 6, 12, 14, 51, 9)),
            endtime: Some(kerberos_time(2024, 6, 13, 0, 49, 30)),
            renew_till: Some(kerberos_time(2024, 6, 19, 14, 51, 9)),
            srealm: Some("AFOREST.AD".into()),
            sname: Some(PrincipalName::from((
                PrincipalNameType::NtSrvInst,
                "krbtgt/AFOREST.AD",
            ))),
            ..Default::default()
        };
        part.last_req.push(LastReqEntry::new(
            LastReqType::NoInformation,
            kerberos_time(2024, 6, 12, 14, 51, 9),
        ));
        part
    }

    #[test]
    fn enc_as_rep_part_encode() {
        let part = TaggedEncKdcRepPart::EncAsRepPart(sample_part());
        let der_bytes = part.serialize().expect("Failed to encode");
        assert_eq!(hex::encode(&der_bytes), ENC_AS_REP_PART);
        assert_well_formed(&der_bytes);
    }

    #[test]
    fn enc_tgs_rep_part_only_changes_the_tag() {
        let as_part = TaggedEncKdcRepPart::EncAsRepPart(sample_part())
            .serialize()
            .expect("Failed to encode");
        let tgs_part = TaggedEncKdcRepPart::EncTgsRepPart(sample_part())
            .serialize()
            .expect("Failed to encode");
        assert_eq!(tgs_part[0], 0x7a);
        assert_eq!(as_part[1..], tgs_part[1..]);
    }

    #[test]
    fn enc_kdc_rep_part_encrypted_pa_data() {
        let mut part = sample_part();
        let mut encrypted_pa_data = MethodData::new();
        encrypted_pa_data.push(PaData::new(
            PaDataType::PaSupportedEnctypes,
            vec![0x1f, 0x00, 0x00, 0x00],
        ));
        part.encrypted_pa_data = Some(encrypted_pa_data);

        let der_bytes = TaggedEncKdcRepPart::EncAsRepPart(part)
            .serialize()
            .expect("Failed to encode");
        assert_eq!(der_bytes.len(), 222);
        assert!(hex::encode(&der_bytes).ends_with("ac123010300ea104020200a5a20604041f000000"));
        assert_well_formed(&der_bytes);
    }

    #[test]
    fn enc_kdc_rep_part_requires_sname() {
        let _ = tracing_subscriber::fmt::try_init();

        let mut part = sample_part();
        part.sname = None;
        let err = TaggedEncKdcRepPart::EncTgsRepPart(part)
            .serialize()
            .expect_err("Missing sname accepted");
        assert!(matches!(
            err,
            KrbError::InvalidState {
                structure: "EncKDCRepPart",
                field: "sname"
            }
        ));
    }

    #[test]
    fn enc_kdc_rep_part_display_hides_key() {
        let shown = TaggedEncKdcRepPart::EncAsRepPart(sample_part()).to_string();
        assert!(shown.starts_with("EncASRepPart { key: "));
        assert!(!shown.contains("2222"));
        assert!(shown.contains("server: krbtgt/AFOREST.AD@AFOREST.AD"));
    }
}
