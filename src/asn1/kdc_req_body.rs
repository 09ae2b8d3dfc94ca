use super::ber::{required, BerEncode, BerEncoder, LengthCache};
use super::encrypted_data::EncryptedData;
use super::host_addresses::HostAddresses;
use super::kdc_options::KdcOptions;
use super::kerberos_time::KerberosTime;
use super::principal_name::PrincipalName;
use super::realm::Realm;
use super::ticket::Ticket;
use crate::error::KrbError;
use std::fmt;

/// ```text
/// KDC-REQ-BODY    ::= SEQUENCE {
///         kdc-options             [0] KDCOptions,
///         cname                   [1] PrincipalName OPTIONAL
///                                     -- Used only in AS-REQ --,
///         realm                   [2] Realm
///                                     -- Server's realm
///                                     -- Also client's in AS-REQ --,
///         sname                   [3] PrincipalName OPTIONAL,
///         from                    [4] KerberosTime OPTIONAL,
///         till                    [5] KerberosTime,
///         rtime                   [6] KerberosTime OPTIONAL,
///         nonce                   [7] UInt32,
///         etype                   [8] SEQUENCE OF Int32 -- EncryptionType
///                                     -- in preference order --,
///         addresses               [9] HostAddresses OPTIONAL,
///         enc-authorization-data  [10] EncryptedData OPTIONAL
///                                     -- AuthorizationData --,
///         additional-tickets      [11] SEQUENCE OF Ticket OPTIONAL
///                                         -- NOTE: not empty
/// }
/// ```
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct KdcReqBody {
    pub kdc_options: KdcOptions,
    pub cname: Option<PrincipalName>,
    pub realm: Option<Realm>,
    pub sname: Option<PrincipalName>,
    pub from: Option<KerberosTime>,
    pub till: Option<KerberosTime>,
    pub rtime: Option<KerberosTime>,
    pub nonce: u32,
    pub etype: Vec<i32>,
    pub addresses: Option<HostAddresses>,
    pub enc_authorization_data: Option<EncryptedData>,
    pub additional_tickets: Option<Vec<Ticket>>,
}

impl Default for KdcReqBody {
    fn default() -> Self {
        KdcReqBody {
            kdc_options: KdcOptions::none(),
            cname: None,
            realm: None,
            sname: None,
            from: None,
            till: None,
            rtime: None,
            nonce: 0,
            etype: Vec::new(),
            addresses: None,
            enc_authorization_data: None,
            additional_tickets: None,
        }
    }
}

impl KdcReqBody {
    pub fn new(kdc_options: KdcOptions, realm: Realm, till: KerberosTime, nonce: u32) -> Self {
        KdcReqBody {
            kdc_options,
            realm: Some(realm),
            till: Some(till),
            nonce,
            ..Default::default()
        }
    }

    /// Sets the etypes the client supports, most preferred first.
    pub fn set_etypes<I, E>(&mut self, etypes: I)
    where
        I: IntoIterator<Item = E>,
        E: Into<i32>,
    {
        self.etype = etypes.into_iter().map(Into::into).collect();
    }
}

impl BerEncode for KdcReqBody {
    const NAME: &'static str = "KDC-REQ-BODY";

    fn compute_length(&self, cache: &mut LengthCache<'_>) -> Result<usize, KrbError> {
        let realm = required(&self.realm, Self::NAME, "realm")?;
        let till = required(&self.till, Self::NAME, "till")?;
        cache.sequence(|cache| {
            Ok(cache.explicit(&self.kdc_options)?
                + cache.explicit_opt(&self.cname)?
                + cache.explicit(realm)?
                + cache.explicit_opt(&self.sname)?
                + cache.explicit_opt(&self.from)?
                + cache.explicit(till)?
                + cache.explicit_opt(&self.rtime)?
                + cache.explicit(&self.nonce)?
                + cache.explicit(&self.etype)?
                + cache.explicit_opt(&self.addresses)?
                + cache.explicit_opt(&self.enc_authorization_data)?
                + cache.explicit_opt(&self.additional_tickets)?)
        })
    }

    fn encode(&self, encoder: &mut BerEncoder<'_>) -> Result<(), KrbError> {
        let realm = required(&self.realm, Self::NAME, "realm")?;
        let till = required(&self.till, Self::NAME, "till")?;
        encoder.sequence(|encoder| {
            encoder.explicit(0, &self.kdc_options)?;
            encoder.explicit_opt(1, &self.cname)?;
            encoder.explicit(2, realm)?;
            encoder.explicit_opt(3, &self.sname)?;
            encoder.explicit_opt(4, &self.from)?;
            encoder.explicit(5, till)?;
            encoder.explicit_opt(6, &self.rtime)?;
            encoder.explicit(7, &self.nonce)?;
            encoder.explicit(8, &self.etype)?;
            encoder.explicit_opt(9, &self.addresses)?;
            encoder.explicit_opt(10, &self.enc_authorization_data)?;
            encoder.explicit_opt(11, &self.additional_tickets)
        })
    }
}

impl fmt::Display for KdcReqBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "KDC-REQ-BODY {{ kdc-options: {:#010x}",
            self.kdc_options.bits()
        )?;
        if let Some(cname) = &self.cname {
            write!(f, ", cname: {cname}")?;
        }
        if let Some(realm) = &self.realm {
            write!(f, ", realm: {realm}")?;
        }
        if let Some(sname) = &self.sname {
            write!(f, ", sname: {sname}")?;
        }
        if let Some(from) = &self.from {
            write!(f, ", from: {from}")?;
        }
        if let Some(till) = &self.till {
            write!(f, ", till: {till}")?;
        }
        if let Some(rtime) = &self.rtime {
            write!(f, ", rtime: {rtime}")?;
        }
        write!(f, ", nonce: {}, etype: {:?}", self.nonce, self.etype)?;
        if let Some(addresses) = &self.addresses {
            write!(f, ", addresses: {addresses}")?;
        }
        if let Some(enc_authorization_data) = &self.enc_authorization_data {
            write!(f, ", enc-authorization-data: {enc_authorization_data}")?;
        }
        if let Some(additional_tickets) = &self.additional_tickets {
            write!(f, ", additional-tickets: {}", additional_tickets.len())?;
        }
        f.write_str(" }")
    }
}
