use super::ber::{BerEncode, BerEncoder, LengthCache};
use super::principal_name::PrincipalName;
use super::realm::Realm;
use crate::error::KrbError;
use bytes::Bytes;
use std::fmt;

/// RFC 3244, the user-data of the KRB-PRIV in a set password request.
///
/// ```text
/// ChangePasswdData ::=  SEQUENCE {
///         newpasswd[0]   OCTET STRING,
///         targname[1]    PrincipalName OPTIONAL,
///         targrealm[2]   Realm OPTIONAL
/// }
/// ```
#[derive(Clone, Default, Eq, PartialEq)]
pub struct ChangePasswdData {
    pub newpasswd: Bytes,
    pub targname: Option<PrincipalName>,
    pub targrealm: Option<Realm>,
}

impl ChangePasswdData {
    pub fn new<P: Into<Bytes>>(newpasswd: P) -> Self {
        ChangePasswdData {
            newpasswd: newpasswd.into(),
            ..Default::default()
        }
    }

    /// Targets the password change at another principal than the requester.
    pub fn with_target(mut self, targname: PrincipalName, targrealm: Realm) -> Self {
        self.targname = Some(targname);
        self.targrealm = Some(targrealm);
        self
    }
}

impl fmt::Debug for ChangePasswdData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangePasswdData")
            .field("newpasswd", &format_args!("<{} bytes>", self.newpasswd.len()))
            .field("targname", &self.targname)
            .field("targrealm", &self.targrealm)
            .finish()
    }
}

impl BerEncode for ChangePasswdData {
    const NAME: &'static str = "ChangePasswdData";

    fn compute_length(&self, cache: &mut LengthCache<'_>) -> Result<usize, KrbError> {
        cache.sequence(|cache| {
            Ok(cache.explicit(&self.newpasswd)?
                + cache.explicit_opt(&self.targname)?
                + cache.explicit_opt(&self.targrealm)?)
        })
    }

    fn encode(&self, encoder: &mut BerEncoder<'_>) -> Result<(), KrbError> {
        encoder.sequence(|encoder| {
            encoder.explicit(0, &self.newpasswd)?;
            encoder.explicit_opt(1, &self.targname)?;
            encoder.explicit_opt(2, &self.targrealm)
        })
    }
}

impl fmt::Display for ChangePasswdData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ChangePasswdData {{ newpasswd: <{} bytes>",
            self.newpasswd.len()
        )?;
        if let Some(targname) = &self.targname {
            write!(f, ", targname: {targname}")?;
        }
        if let Some(targrealm) = &self.targrealm {
            write!(f, ", targrealm: {targrealm}")?;
        }
        f.write_str(" }")
    }
}
