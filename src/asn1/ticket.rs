use super::ber::{required, BerEncode, BerEncoder, LengthCache};
use super::encrypted_data::EncryptedData;
use super::principal_name::PrincipalName;
use super::realm::Realm;
use crate::constants::PVNO;
use crate::error::KrbError;
use std::fmt;

/// ```text
/// Ticket          ::= [APPLICATION 1] SEQUENCE {
///         tkt-vno         [0] INTEGER (5),
///         realm           [1] Realm,
///         sname           [2] PrincipalName,
///         enc-part        [3] EncryptedData -- EncTicketPart
/// }
/// ````
///
/// `tkt-vno` is always 5.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Ticket {
    pub realm: Option<Realm>,
    pub sname: Option<PrincipalName>,
    pub enc_part: Option<EncryptedData>,
}

impl Ticket {
    pub fn new(realm: Realm, sname: PrincipalName, enc_part: EncryptedData) -> Self {
        Ticket {
            realm: Some(realm),
            sname: Some(sname),
            enc_part: Some(enc_part),
        }
    }
}

impl BerEncode for Ticket {
    const NAME: &'static str = "Ticket";

    fn compute_length(&self, cache: &mut LengthCache<'_>) -> Result<usize, KrbError> {
        let realm = required(&self.realm, Self::NAME, "realm")?;
        let sname = required(&self.sname, Self::NAME, "sname")?;
        let enc_part = required(&self.enc_part, Self::NAME, "enc-part")?;
        cache.application(|cache| {
            Ok(cache.explicit(&PVNO)?
                + cache.explicit(realm)?
                + cache.explicit(sname)?
                + cache.explicit(enc_part)?)
        })
    }

    fn encode(&self, encoder: &mut BerEncoder<'_>) -> Result<(), KrbError> {
        let realm = required(&self.realm, Self::NAME, "realm")?;
        let sname = required(&self.sname, Self::NAME, "sname")?;
        let enc_part = required(&self.enc_part, Self::NAME, "enc-part")?;
        encoder.application(1, |encoder| {
            encoder.explicit(0, &PVNO)?;
            encoder.explicit(1, realm)?;
            encoder.explicit(2, sname)?;
            encoder.explicit(3, enc_part)
        })
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Ticket { tkt-vno: 5")?;
        if let Some(realm) = &self.realm {
            write!(f, ", realm: {realm}")?;
        }
        if let Some(sname) = &self.sname {
            write!(f, ", sname: {sname}")?;
        }
        if let Some(enc_part) = &self.enc_part {
            write!(f, ", enc-part: {enc_part}")?;
        }
        f.write_str(" }")
    }
}
