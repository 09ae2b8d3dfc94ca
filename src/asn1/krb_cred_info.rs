use super::ber::{required, BerEncode, BerEncoder, LengthCache};
use super::encryption_key::EncryptionKey;
use super::host_addresses::HostAddresses;
use super::kerberos_time::KerberosTime;
use super::principal_name::PrincipalName;
use super::realm::Realm;
use super::ticket_flags::TicketFlags;
use crate::error::KrbError;
use std::fmt;

/// ```text
/// KrbCredInfo     ::= SEQUENCE {
///         key             [0] EncryptionKey,
///         prealm          [1] Realm OPTIONAL,
///         pname           [2] PrincipalName OPTIONAL,
///         flags           [3] TicketFlags OPTIONAL,
///         authtime        [4] KerberosTime OPTIONAL,
///         starttime       [5] KerberosTime OPTIONAL,
///         endtime         [6] KerberosTime OPTIONAL,
///         renew-till      [7] KerberosTime OPTIONAL,
///         srealm          [8] Realm OPTIONAL,
///         sname           [9] PrincipalName OPTIONAL,
///         caddr           [10] HostAddresses OPTIONAL
/// }
/// ```
///
/// Everything but the session key is optional, a sender may choose to only
/// convey the key of each forwarded ticket.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct KrbCredInfo {
    pub key: Option<EncryptionKey>,
    pub prealm: Option<Realm>,
    pub pname: Option<PrincipalName>,
    pub flags: Option<TicketFlags>,
    pub authtime: Option<KerberosTime>,
    pub starttime: Option<KerberosTime>,
    pub endtime: Option<KerberosTime>,
    pub renew_till: Option<KerberosTime>,
    pub srealm: Option<Realm>,
    pub sname: Option<PrincipalName>,
    pub caddr: Option<HostAddresses>,
}

impl KrbCredInfo {
    pub fn new(key: EncryptionKey) -> Self {
        KrbCredInfo {
            key: Some(key),
            ..Default::default()
        }
    }
}

impl BerEncode for KrbCredInfo {
    const NAME: &'static str = "KrbCredInfo";

    fn compute_length(&self, cache: &mut LengthCache<'_>) -> Result<usize, KrbError> {
        let key = required(&self.key, Self::NAME, "key")?;
        cache.sequence(|cache| {
            Ok(cache.explicit(key)?
                + cache.explicit_opt(&self.prealm)?
                + cache.explicit_opt(&self.pname)?
                + cache.explicit_opt(&self.flags)?
                + cache.explicit_opt(&self.authtime)?
                + cache.explicit_opt(&self.starttime)?
                + cache.explicit_opt(&self.endtime)?
                + cache.explicit_opt(&self.renew_till)?
                + cache.explicit_opt(&self.srealm)?
                + cache.explicit_opt(&self.sname)?
                + cache.explicit_opt(&self.caddr)?)
        })
    }

    fn encode(&self, encoder: &mut BerEncoder<'_>) -> Result<(), KrbError> {
        let key = required(&self.key, Self::NAME, "key")?;
        encoder.sequence(|encoder| {
            encoder.explicit(0, key)?;
            encoder.explicit_opt(1, &self.prealm)?;
            encoder.explicit_opt(2, &self.pname)?;
            encoder.explicit_opt(3, &self.flags)?;
            encoder.explicit_opt(4, &self.authtime)?;
            encoder.explicit_opt(5, &self.starttime)?;
            encoder.explicit_opt(6, &self.endtime)?;
            encoder.explicit_opt(7, &self.renew_till)?;
            encoder.explicit_opt(8, &self.srealm)?;
            encoder.explicit_opt(9, &self.sname)?;
            encoder.explicit_opt(10, &self.caddr)
        })
    }
}

impl fmt::Display for KrbCredInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("KrbCredInfo {")?;
        if let Some(key) = &self.key {
            write!(f, " key: {key}")?;
        }
        if let (Some(pname), Some(prealm)) = (&self.pname, &self.prealm) {
            write!(f, ", client: {pname}@{prealm}")?;
        }
        if let Some(flags) = &self.flags {
            write!(f, ", flags: {:#010x}", flags.bits())?;
        }
        if let Some(authtime) = &self.authtime {
            write!(f, ", authtime: {authtime}")?;
        }
        if let Some(starttime) = &self.starttime {
            write!(f, ", starttime: {starttime}")?;
        }
        if let Some(endtime) = &self.endtime {
            write!(f, ", endtime: {endtime}")?;
        }
        if let Some(renew_till) = &self.renew_till {
            write!(f, ", renew-till: {renew_till}")?;
        }
        if let (Some(sname), Some(srealm)) = (&self.sname, &self.srealm) {
            write!(f, ", server: {sname}@{srealm}")?;
        }
        if let Some(caddr) = &self.caddr {
            write!(f, ", caddr: {caddr}")?;
        }
        f.write_str(" }")
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::KrbCredInfo;
    use crate::asn1::ber::BerEncode;
    use crate::asn1::constants::{EncryptionType, PrincipalNameType};
    use crate::asn1::encryption_key::EncryptionKey;
    use crate::asn1::principal_name::PrincipalName;
    use crate::asn1::testing::{assert_well_formed, kerberos_time};
    use crate::asn1::ticket_flags::TicketFlags;
    use crate::error::KrbErrorKind;

    pub(crate) const FULL_CRED_INFO: &str = "3081d3a02b3029a003020112a12204206666666666666666666666666666666666666666666666666666666666666666a10c1b0a41464f524553542e4144a2123010a003020101a10930071b057573657231a30703050060a00000a411180f32303234303631323134353130395aa511180f32303234303631323134353130395aa611180f32303234303631333030343933305aa711180f32303234303631393134353130395aa80c1b0a41464f524553542e4144a91f301da003020102a11630141b066b72627467741b0a41464f524553542e4144";

    fn session_key() -> EncryptionKey {
        EncryptionKey::new(EncryptionType::AES256_CTS_HMAC_SHA1_96, vec![0x66; 32])
    }

    pub(crate) fn full_cred_info() -> KrbCredInfo {
        KrbCredInfo {
            key: Some(session_key()),
            prealm: Some("AFOREST.AD".into()),
            pname: Some(PrincipalName::from((PrincipalNameType::NtPrincipal, "user1"))),
            flags: Some(
                TicketFlags::Forwardable
                    | TicketFlags::Forwarded
                    | TicketFlags::Renewable
                    | TicketFlags::PreAuthent,
            ),
            authtime: Some(kerberos_time(2024, 6, 12, 14, 51, 9)),
            starttime: Some(kerberos_time(2024, 6, 12, 14, 51, 9)),
            endtime: Some(kerberos_time(2024, 6, 13, 0, 49, 30)),
            renew_till: Some(kerberos_time(2024, 6, 19, 14, 51, 9)),
            srealm: Some("AFOREST.AD".into()),
            sname: Some(PrincipalName::from((
                PrincipalNameType::NtSrvInst,
                "krbtgt/AFOREST.AD",
            ))),
            caddr: None,
        }
    }

    #[test]
    fn krb_cred_info_encode_key_only() {
        let der_bytes = KrbCredInfo::new(session_key())
            .serialize()
            .expect("Failed to encode");
        assert_eq!(
            hex::encode(&der_bytes),
            "302da02b3029a003020112a12204206666666666666666666666666666666666666666666666666666666666666666"
        );
    }

    #[test]
    fn krb_cred_info_encode_full() {
        let der_bytes = full_cred_info().serialize().expect("Failed to encode");
        assert_eq!(hex::encode(&der_bytes), FULL_CRED_INFO);
        assert_well_formed(&der_bytes);
    }

    #[test]
    fn krb_cred_info_requires_key() {
        let _ = tracing_subscriber::fmt::try_init();

        let err = KrbCredInfo::default()
            .serialize()
            .expect_err("Missing key accepted");
        assert_eq!(err.kind(), KrbErrorKind::InvalidState);
    }
}
