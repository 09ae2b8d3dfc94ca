use super::ber::{BerEncode, BerEncoder, LengthCache};
use super::host_address::HostAddress;
use super::kerberos_time::KerberosTime;
use super::krb_cred_info::KrbCredInfo;
use super::microseconds::Microseconds;
use crate::error::KrbError;
use std::fmt;

/// ```text
/// EncKrbCredPart  ::= [APPLICATION 29] SEQUENCE {
///         ticket-info     [0] SEQUENCE OF KrbCredInfo,
///         nonce           [1] UInt32 OPTIONAL,
///         timestamp       [2] KerberosTime OPTIONAL,
///         usec            [3] Microseconds OPTIONAL,
///         s-address       [4] HostAddress OPTIONAL,
///         r-address       [5] HostAddress OPTIONAL
/// }
/// ```
///
/// `ticket-info` lines up one to one with the `tickets` of the enclosing
/// KRB-CRED.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct EncKrbCredPart {
    pub ticket_info: Vec<KrbCredInfo>,
    pub nonce: Option<u32>,
    pub timestamp: Option<KerberosTime>,
    pub usec: Option<Microseconds>,
    pub s_address: Option<HostAddress>,
    pub r_address: Option<HostAddress>,
}

impl EncKrbCredPart {
    pub fn new(ticket_info: Vec<KrbCredInfo>) -> Self {
        EncKrbCredPart {
            ticket_info,
            ..Default::default()
        }
    }

    /// Appends an empty KrbCredInfo and hands it back for population.
    pub fn new_ticket_info(&mut self) -> &mut KrbCredInfo {
        let idx = self.ticket_info.len();
        self.ticket_info.push(KrbCredInfo::default());
        &mut self.ticket_info[idx]
    }
}

impl BerEncode for EncKrbCredPart {
    const NAME: &'static str = "EncKrbCredPart";

    fn compute_length(&self, cache: &mut LengthCache<'_>) -> Result<usize, KrbError> {
        cache.application(|cache| {
            Ok(cache.explicit(&self.ticket_info)?
                + cache.explicit_opt(&self.nonce)?
                + cache.explicit_opt(&self.timestamp)?
                + cache.explicit_opt(&self.usec)?
                + cache.explicit_opt(&self.s_address)?
                + cache.explicit_opt(&self.r_address)?)
        })
    }

    fn encode(&self, encoder: &mut BerEncoder<'_>) -> Result<(), KrbError> {
        encoder.application(29, |encoder| {
            encoder.explicit(0, &self.ticket_info)?;
            encoder.explicit_opt(1, &self.nonce)?;
            encoder.explicit_opt(2, &self.timestamp)?;
            encoder.explicit_opt(3, &self.usec)?;
            encoder.explicit_opt(4, &self.s_address)?;
            encoder.explicit_opt(5, &self.r_address)
        })
    }
}

impl fmt::Display for EncKrbCredPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EncKrbCredPart { ticket-info: [")?;
        for (i, info) in self.ticket_info.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{info}")?;
        }
        f.write_str("]")?;
        if let Some(nonce) = &self.nonce {
            write!(f, ", nonce: {nonce}")?;
        }
        if let Some(timestamp) = &self.timestamp {
            write!(f, ", timestamp: {timestamp}")?;
        }
        if let Some(usec) = &self.usec {
            write!(f, ", usec: {usec}")?;
        }
        if let Some(s_address) = &self.s_address {
            write!(f, ", s-address: {s_address}")?;
        }
        if let Some(r_address) = &self.r_address {
            write!(f, ", r-address: {r_address}")?;
        }
        f.write_str(" }")
    }
}

#[cfg(test)]
mod tests {
    use super::EncKrbCredPart;
    use crate::asn1::ber::BerEncode;
    use crate::asn1::microseconds::Microseconds;
    use crate::asn1::constants::EncryptionType;
    use crate::asn1::encryption_key::EncryptionKey;
    use crate::asn1::host_address::HostAddress;
    use crate::asn1::krb_cred_info::tests::{full_cred_info, FULL_CRED_INFO};
    use crate::asn1::testing::{assert_well_formed, kerberos_time};
    use crate::error::KrbError;
    use std::net::{IpAddr, Ipv4Addr};

    #[test]
    fn enc_krb_cred_part_encode() {
        let mut part = EncKrbCredPart::new(vec![full_cred_info()]);
        part.nonce = Some(0x1234);
        part.timestamp = Some(kerberos_time(2024, 6, 12, 14, 51, 9));
        part.usec = Some(Microseconds::new(5).expect("Failed to build microseconds"));
        part.s_address = Some(HostAddress::from(IpAddr::V4(Ipv4Addr::new(192, 168, 1, 100))));

        let der_bytes = part.serialize().expect("Failed to encode");
        let expected = format!(
            "7d82010f3082010ba081d93081d6{FULL_CRED_INFO}a10402021234a211180f32303234303631323134353130395aa303020105a40f300da003020102a1060404c0a80164"
        );
        assert_eq!(hex::encode(&der_bytes), expected);
        assert_well_formed(&der_bytes);
    }

    #[test]
    fn enc_krb_cred_part_builder() {
        let mut part = EncKrbCredPart::default();
        part.new_ticket_info().key = Some(EncryptionKey::new(
            EncryptionType::AES256_CTS_HMAC_SHA1_96,
            vec![0x66; 32],
        ));

        let der_bytes = part.serialize().expect("Failed to encode");
        assert_eq!(
            hex::encode(&der_bytes),
            "7d353033a031302f302da02b3029a003020112a12204206666666666666666666666666666666666666666666666666666666666666666"
        );
    }

    #[test]
    fn enc_krb_cred_part_rejects_incomplete_info() {
        let _ = tracing_subscriber::fmt::try_init();

        let mut part = EncKrbCredPart::default();
        part.new_ticket_info();
        let err = part.serialize().expect_err("Missing key accepted");
        assert!(matches!(
            err,
            KrbError::InvalidState {
                structure: "KrbCredInfo",
                field: "key"
            }
        ));
    }
}
