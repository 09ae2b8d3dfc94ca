use super::ber::{required, BerEncode, BerEncoder, LengthCache};
use super::host_address::HostAddress;
use super::kerberos_time::KerberosTime;
use super::microseconds::Microseconds;
use crate::error::KrbError;
use bytes::Bytes;
use std::fmt;

/// ```text
/// KRB-SAFE-BODY   ::= SEQUENCE {
///         user-data       [0] OCTET STRING,
///         timestamp       [1] KerberosTime OPTIONAL,
///         usec            [2] Microseconds OPTIONAL,
///         seq-number      [3] UInt32 OPTIONAL,
///         s-address       [4] HostAddress,
///         r-address       [5] HostAddress OPTIONAL
/// }
/// ```
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct KrbSafeBody {
    pub user_data: Bytes,
    pub timestamp: Option<KerberosTime>,
    pub usec: Option<Microseconds>,
    pub seq_number: Option<u32>,
    pub s_address: Option<HostAddress>,
    pub r_address: Option<HostAddress>,
}

impl KrbSafeBody {
    pub fn new<D: Into<Bytes>>(user_data: D, s_address: HostAddress) -> Self {
        KrbSafeBody {
            user_data: user_data.into(),
            s_address: Some(s_address),
            ..Default::default()
        }
    }
}

impl BerEncode for KrbSafeBody {
    const NAME: &'static str = "KRB-SAFE-BODY";

    fn compute_length(&self, cache: &mut LengthCache<'_>) -> Result<usize, KrbError> {
        let s_address = required(&self.s_address, Self::NAME, "s-address")?;
        cache.sequence(|cache| {
            Ok(cache.explicit(&self.user_data)?
                + cache.explicit_opt(&self.timestamp)?
                + cache.explicit_opt(&self.usec)?
                + cache.explicit_opt(&self.seq_number)?
                + cache.explicit(s_address)?
                + cache.explicit_opt(&self.r_address)?)
        })
    }

    fn encode(&self, encoder: &mut BerEncoder<'_>) -> Result<(), KrbError> {
        let s_address = required(&self.s_address, Self::NAME, "s-address")?;
        encoder.sequence(|encoder| {
            encoder.explicit(0, &self.user_data)?;
            encoder.explicit_opt(1, &self.timestamp)?;
            encoder.explicit_opt(2, &self.usec)?;
            encoder.explicit_opt(3, &self.seq_number)?;
            encoder.explicit(4, s_address)?;
            encoder.explicit_opt(5, &self.r_address)
        })
    }
}

impl fmt::Display for KrbSafeBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "KRB-SAFE-BODY {{ user-data: {}",
            hex::encode(&self.user_data)
        )?;
        if let Some(timestamp) = &self.timestamp {
            write!(f, ", timestamp: {timestamp}")?;
        }
        if let Some(usec) = &self.usec {
            write!(f, ", usec: {usec}")?;
        }
        if let Some(seq_number) = &self.seq_number {
            write!(f, ", seq-number: {seq_number}")?;
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
pub(crate) mod tests {
    use super::KrbSafeBody;
    use crate::asn1::ber::BerEncode;
    use crate::asn1::microseconds::Microseconds;
    use crate::asn1::host_address::HostAddress;
    use crate::asn1::testing::{assert_well_formed, kerberos_time};
    use crate::error::KrbError;
    use std::net::{IpAddr, Ipv4Addr};

    pub(crate) fn sample_safe_body() -> KrbSafeBody {
        let mut body = KrbSafeBody::new(
            b"hello".to_vec(),
            HostAddress::from(IpAddr::V4(Ipv4Addr::new(192, 168, 1, 100))),
        );
        body.timestamp = Some(kerberos_time(2024, 6, 12, 14, 51, 9));
        body.usec = Some(Microseconds::new(999_999).expect("Failed to build microseconds"));
        body.seq_number = Some(42);
        body.r_address = Some(HostAddress::from(IpAddr::V4(Ipv4Addr::new(192, 168, 1, 1))));
        body
    }

    #[test]
    fn krb_safe_body_encode() {
        let der_bytes = sample_safe_body().serialize().expect("Failed to encode");
        assert_eq!(
            hex::encode(&der_bytes),
            "304aa007040568656c6c6fa111180f32303234303631323134353130395aa20502030f423fa30302012aa40f300da003020102a1060404c0a80164a50f300da003020102a1060404c0a80101"
        );
        assert_well_formed(&der_bytes);
    }

    #[test]
    fn krb_safe_body_requires_sender_address() {
        let _ = tracing_subscriber::fmt::try_init();

        let body = KrbSafeBody {
            user_data: b"hello".to_vec().into(),
            ..Default::default()
        };
        let err = body.serialize().expect_err("Missing s-address accepted");
        assert!(matches!(
            err,
            KrbError::InvalidState {
                structure: "KRB-SAFE-BODY",
                field: "s-address"
            }
        ));
    }
}
