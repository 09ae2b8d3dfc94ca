use super::ber::{required, BerEncoder, LengthCache};
use super::encryption_key::EncryptionKey;
use super::host_addresses::HostAddresses;
use super::kerberos_time::KerberosTime;
use super::last_req::LastReq;
use super::method_data::MethodData;
use super::principal_name::PrincipalName;
use super::realm::Realm;
use super::ticket_flags::TicketFlags;
use crate::error::KrbError;
use std::fmt;

/// ```text
/// EncKDCRepPart   ::= SEQUENCE {
///         key             [0] EncryptionKey,
///         last-req        [1] LastReq,
///         nonce           [2] UInt32,
///         key-expiration  [3] KerberosTime OPTIONAL,
///         flags           [4] TicketFlags,
///         authtime        [5] KerberosTime,
///         starttime       [6] KerberosTime OPTIONAL,
///         endtime         [7] KerberosTime,
///         renew-till      [8] KerberosTime OPTIONAL,
///         srealm          [9] Realm,
///         sname           [10] PrincipalName,
///         caddr           [11] HostAddresses OPTIONAL,
///         encrypted-pa-data [12] METHOD-DATA OPTIONAL -- RFC 6806
/// }
/// ```
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct EncKdcRepPart {
    pub key: Option<EncryptionKey>,
    pub last_req: LastReq,
    pub nonce: u32,
    pub key_expiration: Option<KerberosTime>,
    pub flags: TicketFlags,
    pub authtime: Option<KerberosTime>,
    pub starttime: Option<KerberosTime>,
    pub endtime: Option<KerberosTime>,
    pub renew_till: Option<KerberosTime>,
    pub srealm: Option<Realm>,
    pub sname: Option<PrincipalName>,
    pub caddr: Option<HostAddresses>,
    pub encrypted_pa_data: Option<MethodData>,
}

impl Default for EncKdcRepPart {
    fn default() -> Self {
        EncKdcRepPart {
            key: None,
            last_req: LastReq::new(),
            nonce: 0,
            key_expiration: None,
            flags: TicketFlags::none(),
            authtime: None,
            starttime: None,
            endtime: None,
            renew_till: None,
            srealm: None,
            sname: None,
            caddr: None,
            encrypted_pa_data: None,
        }
    }
}

struct Required<'a> {
    key: &'a EncryptionKey,
    authtime: &'a KerberosTime,
    endtime: &'a KerberosTime,
    srealm: &'a Realm,
    sname: &'a PrincipalName,
}

impl EncKdcRepPart {
    pub const NAME: &'static str = "EncKDCRepPart";

    fn required_members(&self) -> Result<Required<'_>, KrbError> {
        Ok(Required {
            key: required(&self.key, Self::NAME, "key")?,
            authtime: required(&self.authtime, Self::NAME, "authtime")?,
            endtime: required(&self.endtime, Self::NAME, "endtime")?,
            srealm: required(&self.srealm, Self::NAME, "srealm")?,
            sname: required(&self.sname, Self::NAME, "sname")?,
        })
    }

    pub(crate) fn members_length(&self, cache: &mut LengthCache<'_>) -> Result<usize, KrbError> {
        let req = self.required_members()?;
        Ok(cache.explicit(req.key)?
            + cache.explicit(&self.last_req)?
            + cache.explicit(&self.nonce)?
            + cache.explicit_opt(&self.key_expiration)?
            + cache.explicit(&self.flags)?
            + cache.explicit(req.authtime)?
            + cache.explicit_opt(&self.starttime)?
            + cache.explicit(req.endtime)?
            + cache.explicit_opt(&self.renew_till)?
            + cache.explicit(req.srealm)?
            + cache.explicit(req.sname)?
            + cache.explicit_opt(&self.caddr)?
            + cache.explicit_opt(&self.encrypted_pa_data)?)
    }

    pub(crate) fn encode_members(&self, encoder: &mut BerEncoder<'_>) -> Result<(), KrbError> {
        let req = self.required_members()?;
        encoder.explicit(0, req.key)?;
        encoder.explicit(1, &self.last_req)?;
        encoder.explicit(2, &self.nonce)?;
        encoder.explicit_opt(3, &self.key_expiration)?;
        encoder.explicit(4, &self.flags)?;
        encoder.explicit(5, req.authtime)?;
        encoder.explicit_opt(6, &self.starttime)?;
        encoder.explicit(7, req.endtime)?;
        encoder.explicit_opt(8, &self.renew_till)?;
        encoder.explicit(9, req.srealm)?;
        encoder.explicit(10, req.sname)?;
        encoder.explicit_opt(11, &self.caddr)?;
        encoder.explicit_opt(12, &self.encrypted_pa_data)
    }
}

impl fmt::Display for EncKdcRepPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{ ")?;
        if let Some(key) = &self.key {
            write!(f, "key: {key}, ")?;
        }
        write!(
            f,
            "last-req: {}, nonce: {}, flags: {:#010x}",
            self.last_req,
            self.nonce,
            self.flags.bits()
        )?;
        if let Some(key_expiration) = &self.key_expiration {
            write!(f, ", key-expiration: {key_expiration}")?;
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
        if let Some(encrypted_pa_data) = &self.encrypted_pa_data {
            write!(f, ", encrypted-pa-data: {encrypted_pa_data}")?;
        }
        f.write_str(" }")
    }
}
