use super::authorization_data::AuthorizationData;
use super::ber::{required, BerEncode, BerEncoder, LengthCache};
use super::checksum::Checksum;
use super::encryption_key::EncryptionKey;
use super::kerberos_time::KerberosTime;
use super::microseconds::Microseconds;
use super::principal_name::PrincipalName;
use super::realm::Realm;
use crate::constants::PVNO;
use crate::error::KrbError;
use std::fmt;
use std::time::SystemTime;

/// ```text
/// -- Unencrypted authenticator
/// Authenticator   ::= [APPLICATION 2] SEQUENCE  {
///        authenticator-vno       [0] INTEGER (5),
///        crealm                  [1] Realm,
///        cname                   [2] PrincipalName,
///        cksum                   [3] Checksum OPTIONAL,
///        cusec                   [4] Microseconds,
///        ctime                   [5] KerberosTime,
///        subkey                  [6] EncryptionKey OPTIONAL,
///        seq-number              [7] UInt32 OPTIONAL,
///        authorization-data      [8] AuthorizationData OPTIONAL
/// }
///```
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Authenticator {
    // This field contains the name of the realm in which the client is
    // registered and in which initial authentication took place.
    pub crealm: Option<Realm>,
    // This field contains the name part of the client's principal identifier.
    pub cname: Option<PrincipalName>,
    // This field contains a checksum of the application data that
    // accompanies the KRB_AP_REQ, computed using a key usage value of 10
    // in normal application exchanges, or 6 when used in the TGS-REQ
    // PA-TGS-REQ AP-DATA field.
    pub cksum: Option<Checksum>,
    // This field contains the microsecond part of the client's
    // timestamp.  Its value (before encryption) ranges from 0 to 999999.
    pub cusec: Microseconds,
    // This field contains the current time on the client's host.
    pub ctime: Option<KerberosTime>,
    // This field contains the client's choice for an encryption key to
    // be used to protect this specific application session.  Unless an
    // application specifies otherwise, if this field is left out, the
    // session key from the ticket will be used.
    pub subkey: Option<EncryptionKey>,
    // The initial sequence number to be used by the KRB_PRIV or KRB_SAFE
    // messages from the client to the server.  Sequence numbers fall in
    // the range 0 through 2^32 - 1 and wrap to zero following the value
    // 2^32 - 1.
    pub seq_number: Option<u32>,
    // Only appears when additional restrictions are to be placed on the
    // use of a ticket, beyond those carried in the ticket itself.
    pub authorization_data: Option<AuthorizationData>,
}

impl Authenticator {
    pub fn new(
        client_name: PrincipalName,
        client_realm: Realm,
        client_time: SystemTime,
        checksum: Option<Checksum>,
        subkey: Option<EncryptionKey>,
        sequence_number: Option<u32>,
        authorization_data: Option<AuthorizationData>,
    ) -> Result<Self, KrbError> {
        let (ctime, cusec) = KerberosTime::from_system_time_usec(client_time)?;
        Ok(Authenticator {
            crealm: Some(client_realm),
            cname: Some(client_name),
            cksum: checksum,
            cusec,
            ctime: Some(ctime),
            subkey,
            seq_number: sequence_number,
            authorization_data,
        })
    }
}

impl BerEncode for Authenticator {
    const NAME: &'static str = "Authenticator";

    fn compute_length(&self, cache: &mut LengthCache<'_>) -> Result<usize, KrbError> {
        let crealm = required(&self.crealm, Self::NAME, "crealm")?;
        let cname = required(&self.cname, Self::NAME, "cname")?;
        let ctime = required(&self.ctime, Self::NAME, "ctime")?;
        cache.application(|cache| {
            Ok(cache.explicit(&PVNO)?
                + cache.explicit(crealm)?
                + cache.explicit(cname)?
                + cache.explicit_opt(&self.cksum)?
                + cache.explicit(&self.cusec)?
                + cache.explicit(ctime)?
                + cache.explicit_opt(&self.subkey)?
                + cache.explicit_opt(&self.seq_number)?
                + cache.explicit_opt(&self.authorization_data)?)
        })
    }

    fn encode(&self, encoder: &mut BerEncoder<'_>) -> Result<(), KrbError> {
        let crealm = required(&self.crealm, Self::NAME, "crealm")?;
        let cname = required(&self.cname, Self::NAME, "cname")?;
        let ctime = required(&self.ctime, Self::NAME, "ctime")?;
        encoder.application(2, |encoder| {
            encoder.explicit(0, &PVNO)?;
            encoder.explicit(1, crealm)?;
            encoder.explicit(2, cname)?;
            encoder.explicit_opt(3, &self.cksum)?;
            encoder.explicit(4, &self.cusec)?;
            encoder.explicit(5, ctime)?;
            encoder.explicit_opt(6, &self.subkey)?;
            encoder.explicit_opt(7, &self.seq_number)?;
            encoder.explicit_opt(8, &self.authorization_data)
        })
    }
}

impl fmt::Display for Authenticator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Authenticator { authenticator-vno: 5")?;
        if let (Some(cname), Some(crealm)) = (&self.cname, &self.crealm) {
            write!(f, ", client: {cname}@{crealm}")?;
        }
        if let Some(cksum) = &self.cksum {
            write!(f, ", cksum: {cksum}")?;
        }
        if let Some(ctime) = &self.ctime {
            write!(f, ", ctime: {ctime}.{:06}", self.cusec)?;
        }
        if let Some(subkey) = &self.subkey {
            write!(f, ", subkey: {subkey}")?;
        }
        if let Some(seq_number) = self.seq_number {
            write!(f, ", seq-number: {seq_number}")?;
        }
        if let Some(authorization_data) = &self.authorization_data {
            write!(f, ", authorization-data: {authorization_data}")?;
        }
        f.write_str(" }")
    }
}
