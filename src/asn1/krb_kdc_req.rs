use super::ber::{BerEncode, BerEncoder, LengthCache};
use super::constants::KrbMessageType;
use super::kdc_req::KdcReq;
use crate::error::KrbError;
use std::fmt;
use tracing::trace;

/// ```text
/// AS-REQ          ::= [APPLICATION 10] KDC-REQ
/// TGS-REQ         ::= [APPLICATION 12] KDC-REQ
/// ```
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum KrbKdcReq {
    AsReq(KdcReq),
    TgsReq(KdcReq),
}

impl KrbKdcReq {
    pub fn msg_type(&self) -> KrbMessageType {
        match self {
            KrbKdcReq::AsReq(_) => KrbMessageType::KrbAsReq,
            KrbKdcReq::TgsReq(_) => KrbMessageType::KrbTgsReq,
        }
    }

    pub fn kdc_req(&self) -> &KdcReq {
        match self {
            KrbKdcReq::AsReq(kdc_req) | KrbKdcReq::TgsReq(kdc_req) => kdc_req,
        }
    }
}

impl BerEncode for KrbKdcReq {
    const NAME: &'static str = "KDC-REQ";

    fn compute_length(&self, cache: &mut LengthCache<'_>) -> Result<usize, KrbError> {
        let msg_type = self.msg_type();
        trace!(?msg_type, "sizing kdc request");
        let kdc_req = self.kdc_req();
        cache.application(|cache| kdc_req.members_length(msg_type, cache))
    }

    fn encode(&self, encoder: &mut BerEncoder<'_>) -> Result<(), KrbError> {
        match self {
            KrbKdcReq::AsReq(asreq) => encoder.application(10, |encoder| {
                asreq.encode_members(KrbMessageType::KrbAsReq, encoder)
            }),
            KrbKdcReq::TgsReq(tgsreq) => encoder.application(12, |encoder| {
                tgsreq.encode_members(KrbMessageType::KrbTgsReq, encoder)
            }),
        }
    }
}

impl fmt::Display for KrbKdcReq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KrbKdcReq::AsReq(asreq) => write!(f, "AS-REQ {asreq}"),
            KrbKdcReq::TgsReq(tgsreq) => write!(f, "TGS-REQ {tgsreq}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::KrbKdcReq;
    use crate::asn1::ber::BerEncode;
    use crate::asn1::constants::{EncryptionType, PaDataType, PrincipalNameType};
    use crate::asn1::encrypted_data::EncryptedData;
    use crate::asn1::host_address::HostAddress;
    use crate::asn1::host_addresses::HostAddresses;
    use crate::asn1::kdc_req::KdcReq;
    use crate::asn1::kdc_req_body::KdcReqBody;
    use crate::asn1::kerberos_flags::KerberosFlags;
    use crate::asn1::kerberos_time::KerberosTime;
    use crate::asn1::method_data::MethodData;
    use crate::asn1::pa_data::PaData;
    use crate::asn1::principal_name::PrincipalName;
    use crate::asn1::testing::{assert_well_formed, kerberos_time, AS_REQ_SAMPLES};
    use crate::error::KrbError;
    use std::net::{IpAddr, Ipv4Addr};

    struct TestAsReq {
        blob: &'static str,
        principal: &'static str,
        realm: &'static str,
        padata: Vec<(PaDataType, Vec<u8>)>,
        kdc_options: KerberosFlags,
        till: KerberosTime,
        rtime: Option<KerberosTime>,
        nonce: u32,
        etype: Vec<EncryptionType>,
        addresses: Option<Vec<Ipv4Addr>>,
    }

    fn build_as_req(tasreq: &TestAsReq) -> KrbKdcReq {
        let padata: MethodData = tasreq
            .padata
            .iter()
            .map(|(padata_type, padata_value)| PaData::new(*padata_type, padata_value.clone()))
            .collect();

        let mut req_body = KdcReqBody::new(
            tasreq.kdc_options,
            tasreq.realm.into(),
            tasreq.till,
            tasreq.nonce,
        );
        req_body.cname = Some(PrincipalName::from((
            PrincipalNameType::NtPrincipal,
            tasreq.principal,
        )));
        req_body.sname = Some(PrincipalName::new(
            PrincipalNameType::NtSrvInst,
            ["krbtgt", tasreq.realm],
        ));
        req_body.rtime = tasreq.rtime;
        req_body.set_etypes(tasreq.etype.iter().copied());
        req_body.addresses = tasreq.addresses.as_ref().map(|addresses| {
            addresses
                .iter()
                .map(|ip| HostAddress::from(IpAddr::V4(*ip)))
                .collect::<HostAddresses>()
        });

        KrbKdcReq::AsReq(KdcReq::new(Some(padata), req_body))
    }

    #[test]
    fn krb_kdc_req_encode_as_req() {
        let _ = tracing_subscriber::fmt::try_init();

        let samples: Vec<TestAsReq> = vec![
            TestAsReq {
                blob: AS_REQ_SAMPLES[0],
                principal: "william",
                realm: "KKDCP.DEV",
                padata: vec![
                    (PaDataType::PadataAsFreshness, vec![]),
                    (PaDataType::EncpadataReqEncPaRep, vec![]),
                ],
                kdc_options: KerberosFlags::RenewableOk,
                till: kerberos_time(2024, 4, 17, 4, 15, 49),
                rtime: None,
                nonce: 2143135662,
                etype: vec![
                    EncryptionType::AES256_CTS_HMAC_SHA1_96,
                    EncryptionType::AES128_CTS_HMAC_SHA1_96,
                    EncryptionType::AES256_CTS_HMAC_SHA384_192,
                    EncryptionType::AES128_CTS_HMAC_SHA256_128,
                    EncryptionType::DES3_CBC_SHA1_KD,
                    EncryptionType::RC4_HMAC,
                    EncryptionType::CAMELLIA128_CTS_CMAC,
                    EncryptionType::CAMELLIA256_CTS_CMAC,
                ],
                addresses: None,
            },
            TestAsReq {
                blob: AS_REQ_SAMPLES[1],
                principal: "user1",
                realm: "AFOREST.AD",
                padata: vec![
                    (PaDataType::PadataAsFreshness, vec![]),
                    (PaDataType::EncpadataReqEncPaRep, vec![]),
                    (
                        PaDataType::PaPacRequest,
                        vec![0x30, 0x05, 0xa0, 0x03, 0x01, 0x01, 0xff],
                    ),
                ],
                kdc_options: KerberosFlags::Forwardable
                    | KerberosFlags::Proxiable
                    | KerberosFlags::Canonicalize
                    | KerberosFlags::RenewableOk,
                till: kerberos_time(2024, 6, 12, 14, 51, 9),
                rtime: None,
                nonce: 1482773981,
                etype: vec![
                    EncryptionType::AES256_CTS_HMAC_SHA384_192,
                    EncryptionType::AES128_CTS_HMAC_SHA256_128,
                    EncryptionType::AES256_CTS_HMAC_SHA1_96,
                    EncryptionType::AES128_CTS_HMAC_SHA1_96,
                    EncryptionType::CAMELLIA256_CTS_CMAC,
                    EncryptionType::CAMELLIA128_CTS_CMAC,
                ],
                addresses: Some(vec![
                    Ipv4Addr::new(192, 168, 1, 100),
                    Ipv4Addr::new(172, 17, 0, 1),
                    Ipv4Addr::new(192, 168, 101, 1),
                    Ipv4Addr::new(10, 149, 214, 90),
                ]),
            },
            TestAsReq {
                blob: AS_REQ_SAMPLES[2],
                principal: "testuser",
                realm: "EXAMPLE.COM",
                padata: vec![
                    (PaDataType::PadataAsFreshness, vec![]),
                    (PaDataType::EncpadataReqEncPaRep, vec![]),
                ],
                kdc_options: KerberosFlags::Renewable,
                till: kerberos_time(2024, 6, 16, 5, 27, 1),
                rtime: Some(kerberos_time(2024, 6, 22, 5, 27, 1)),
                nonce: 779214421,
                etype: vec![
                    EncryptionType::AES256_CTS_HMAC_SHA1_96,
                    EncryptionType::AES128_CTS_HMAC_SHA1_96,
                    EncryptionType::AES256_CTS_HMAC_SHA384_192,
                    EncryptionType::AES128_CTS_HMAC_SHA256_128,
                    EncryptionType::DES3_CBC_SHA1_KD,
                    EncryptionType::RC4_HMAC,
                    EncryptionType::CAMELLIA128_CTS_CMAC,
                    EncryptionType::CAMELLIA256_CTS_CMAC,
                ],
                addresses: None,
            },
        ];

        for tasreq in samples {
            let asreq = build_as_req(&tasreq);
            let der_bytes = asreq.serialize().expect("Failed to encode");
            assert_eq!(hex::encode(&der_bytes), tasreq.blob);
            assert_well_formed(&der_bytes);
        }
    }

    #[test]
    fn krb_kdc_req_encode_tgs_req() {
        let mut req_body = KdcReqBody::new(
            KerberosFlags::Forwardable | KerberosFlags::Renewable | KerberosFlags::Canonicalize,
            "AFOREST.AD".into(),
            kerberos_time(2024, 6, 13, 11, 48, 7),
            0x1234_5678,
        );
        req_body.sname = Some(PrincipalName::from((
            PrincipalNameType::NtSrvInst,
            "host/dc.aforest.ad",
        )));
        req_body.set_etypes([
            EncryptionType::AES256_CTS_HMAC_SHA1_96,
            EncryptionType::AES128_CTS_HMAC_SHA1_96,
        ]);
        req_body.enc_authorization_data = Some(EncryptedData::new(
            EncryptionType::AES256_CTS_HMAC_SHA1_96,
            None,
            vec![0x33; 16],
        ));

        let mut padata = MethodData::new();
        // The AP-REQ would be here, an empty one is enough for framing.
        padata.push(PaData::new(PaDataType::PaTgsReq, vec![0x6e, 0x00]));

        let tgsreq = KrbKdcReq::TgsReq(KdcReq::new(Some(padata), req_body));
        let der_bytes = tgsreq.serialize().expect("Failed to encode");
        assert_eq!(
            hex::encode(&der_bytes),
            "6c819d30819aa103020105a20302010ca30f300d300ba103020101a20404026e00a47d307ba00703050040810000a20c1b0a41464f524553542e4144a320301ea003020102a11730151b04686f73741b0d64632e61666f726573742e6164a511180f32303234303631333131343830375aa706020412345678a8083006020112020111aa1b3019a003020112a212041033333333333333333333333333333333"
        );
        assert_well_formed(&der_bytes);
    }

    #[test]
    fn krb_kdc_req_requires_body() {
        let _ = tracing_subscriber::fmt::try_init();

        let asreq = KrbKdcReq::AsReq(KdcReq::default());
        let err = asreq.serialize().expect_err("Missing req-body accepted");
        assert!(matches!(
            err,
            KrbError::InvalidState {
                structure: "KDC-REQ",
                field: "req-body"
            }
        ));
    }

    #[test]
    fn krb_kdc_req_display() {
        let asreq = build_as_req(&TestAsReq {
            blob: AS_REQ_SAMPLES[0],
            principal: "william",
            realm: "KKDCP.DEV",
            padata: vec![],
            kdc_options: KerberosFlags::RenewableOk,
            till: kerberos_time(2024, 4, 17, 4, 15, 49),
            rtime: None,
            nonce: 1,
            etype: vec![EncryptionType::AES256_CTS_HMAC_SHA1_96],
            addresses: None,
        });
        let shown = asreq.to_string();
        assert!(shown.starts_with("AS-REQ { pvno: 5"));
        assert!(shown.contains("cname: william"));
        assert!(shown.contains("till: 20240417041549Z"));
    }
}
