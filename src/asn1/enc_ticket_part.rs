use super::authorization_data::AuthorizationData;
use super::ber::{required, BerEncode, BerEncoder, LengthCache};
use super::encryption_key::EncryptionKey;
use super::host_addresses::HostAddresses;
use super::kerberos_time::KerberosTime;
use super::principal_name::PrincipalName;
use super::realm::Realm;
use super::ticket_flags::TicketFlags;
use super::transited_encoding::TransitedEncoding;
use crate::error::KrbError;
use std::fmt;

/// ```text
/// -- Encrypted part of ticket
/// EncTicketPart   ::= [APPLICATION 3] SEQUENCE {
///         flags                   [0] TicketFlags,
///         key                     [1] EncryptionKey,
///         crealm                  [2] Realm,
///         cname                   [3] PrincipalName,
///         transited               [4] TransitedEncoding,
///         authtime                [5] KerberosTime,
///         starttime               [6] KerberosTime OPTIONAL,
///         endtime                 [7] KerberosTime,
///         renew-till              [8] KerberosTime OPTIONAL,
///         caddr                   [9] HostAddresses OPTIONAL,
///         authorization-data      [10] AuthorizationData OPTIONAL
/// }
/// ````
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct EncTicketPart {
    pub flags: TicketFlags,
    pub key: Option<EncryptionKey>,
    pub crealm: Option<Realm>,
    pub cname: Option<PrincipalName>,
    pub transited: Option<TransitedEncoding>,
    pub authtime: Option<KerberosTime>,
    pub starttime: Option<KerberosTime>,
    pub endtime: Option<KerberosTime>,
    pub renew_till: Option<KerberosTime>,
    pub caddr: Option<HostAddresses>,
    pub authorization_data: Option<AuthorizationData>,
}

impl Default for EncTicketPart {
    fn default() -> Self {
        EncTicketPart {
            flags: TicketFlags::none(),
            key: None,
            crealm: None,
            cname: None,
            transited: None,
            authtime: None,
            starttime: None,
            endtime: None,
            renew_till: None,
            caddr: None,
            authorization_data: None,
        }
    }
}

struct Required<'a> {
    key: &'a EncryptionKey,
    crealm: &'a Realm,
    cname: &'a PrincipalName,
    transited: &'a TransitedEncoding,
    authtime: &'a KerberosTime,
    endtime: &'a KerberosTime,
}

impl EncTicketPart {
    fn required_members(&self) -> Result<Required<'_>, KrbError> {
        Ok(Required {
            key: required(&self.key, Self::NAME, "key")?,
            crealm: required(&self.crealm, Self::NAME, "crealm")?,
            cname: required(&self.cname, Self::NAME, "cname")?,
            transited: required(&self.transited, Self::NAME, "transited")?,
            authtime: required(&self.authtime, Self::NAME, "authtime")?,
            endtime: required(&self.endtime, Self::NAME, "endtime")?,
        })
    }
}

impl BerEncode for EncTicketPart {
    const NAME: &'static str = "EncTicketPart";

    fn compute_length(&self, cache: &mut LengthCache<'_>) -> Result<usize, KrbError> {
        let req = self.required_members()?;
        cache.application(|cache| {
            Ok(cache.explicit(&self.flags)?
                + cache.explicit(req.key)?
                + cache.explicit(req.crealm)?
                + cache.explicit(req.cname)?
                + cache.explicit(req.transited)?
                + cache.explicit(req.authtime)?
                + cache.explicit_opt(&self.starttime)?
                + cache.explicit(req.endtime)?
                + cache.explicit_opt(&self.renew_till)?
                + cache.explicit_opt(&self.caddr)?
                + cache.explicit_opt(&self.authorization_data)?)
        })
    }

    fn encode(&self, encoder: &mut BerEncoder<'_>) -> Result<(), KrbError> {
        let req = self.required_members()?;
        encoder.application(3, |encoder| {
            encoder.explicit(0, &self.flags)?;
            encoder.explicit(1, req.key)?;
            encoder.explicit(2, req.crealm)?;
            encoder.explicit(3, req.cname)?;
            encoder.explicit(4, req.transited)?;
            encoder.explicit(5, req.authtime)?;
            encoder.explicit_opt(6, &self.starttime)?;
            encoder.explicit(7, req.endtime)?;
            encoder.explicit_opt(8, &self.renew_till)?;
            encoder.explicit_opt(9, &self.caddr)?;
            encoder.explicit_opt(10, &self.authorization_data)
        })
    }
}

impl fmt::Display for EncTicketPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EncTicketPart {{ flags: {:#010x}", self.flags.bits())?;
        if let Some(key) = &self.key {
            write!(f, ", key: {key}")?;
        }
        if let (Some(crealm), Some(cname)) = (&self.crealm, &self.cname) {
            write!(f, ", client: {cname}@{crealm}")?;
        }
        if let Some(transited) = &self.transited {
            write!(f, ", transited: {transited}")?;
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
        if let Some(caddr) = &self.caddr {
            write!(f, ", caddr: {caddr}")?;
        }
        if let Some(authorization_data) = &self.authorization_data {
            write!(f, ", authorization-data: {authorization_data}")?;
        }
        f.write_str(" }")
    }
}
