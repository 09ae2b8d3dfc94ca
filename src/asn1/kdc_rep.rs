use super::ber::{required, BerEncoder, LengthCache};
use super::constants::KrbMessageType;
use super::encrypted_data::EncryptedData;
use super::method_data::MethodData;
use super::principal_name::PrincipalName;
use super::realm::Realm;
use super::ticket::Ticket;
use crate::constants::PVNO;
use crate::error::KrbError;
use std::fmt;

/// ```text
///   KDC-REP         ::= SEQUENCE {
///           pvno            [0] INTEGER (5),
///           msg-type        [1] INTEGER (11 -- AS -- | 13 -- TGS --),
///           padata          [2] SEQUENCE OF PA-DATA OPTIONAL
///                                   -- NOTE: not empty --,
///           crealm          [3] Realm,
///           cname           [4] PrincipalName,
///           ticket          [5] Ticket,
///           enc-part        [6] EncryptedData
///                                   -- EncASRepPart or EncTGSRepPart,
///                                   -- as appropriate
///   }
/// ```
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct KdcRep {
    pub padata: Option<MethodData>,
    pub crealm: Option<Realm>,
    pub cname: Option<PrincipalName>,
    pub ticket: Option<Ticket>,
    pub enc_part: Option<EncryptedData>,
}

struct Required<'a> {
    crealm: &'a Realm,
    cname: &'a PrincipalName,
    ticket: &'a Ticket,
    enc_part: &'a EncryptedData,
}

impl KdcRep {
    pub const NAME: &'static str = "KDC-REP";

    pub fn new(
        padata: Option<MethodData>,
        crealm: Realm,
        cname: PrincipalName,
        ticket: Ticket,
        enc_part: EncryptedData,
    ) -> Self {
        KdcRep {
            padata,
            crealm: Some(crealm),
            cname: Some(cname),
            ticket: Some(ticket),
            enc_part: Some(enc_part),
        }
    }

    fn required_members(&self) -> Result<Required<'_>, KrbError> {
        Ok(Required {
            crealm: required(&self.crealm, Self::NAME, "crealm")?,
            cname: required(&self.cname, Self::NAME, "cname")?,
            ticket: required(&self.ticket, Self::NAME, "ticket")?,
            enc_part: required(&self.enc_part, Self::NAME, "enc-part")?,
        })
    }

    pub(crate) fn members_length(
        &self,
        msg_type: KrbMessageType,
        cache: &mut LengthCache<'_>,
    ) -> Result<usize, KrbError> {
        let req = self.required_members()?;
        let msg_type: u32 = msg_type.into();
        Ok(cache.explicit(&PVNO)?
            + cache.explicit(&msg_type)?
            + cache.explicit_opt(&self.padata)?
            + cache.explicit(req.crealm)?
            + cache.explicit(req.cname)?
            + cache.explicit(req.ticket)?
            + cache.explicit(req.enc_part)?)
    }

    pub(crate) fn encode_members(
        &self,
        msg_type: KrbMessageType,
        encoder: &mut BerEncoder<'_>,
    ) -> Result<(), KrbError> {
        let req = self.required_members()?;
        let msg_type: u32 = msg_type.into();
        encoder.explicit(0, &PVNO)?;
        encoder.explicit(1, &msg_type)?;
        encoder.explicit_opt(2, &self.padata)?;
        encoder.explicit(3, req.crealm)?;
        encoder.explicit(4, req.cname)?;
        encoder.explicit(5, req.ticket)?;
        encoder.explicit(6, req.enc_part)
    }
}

impl fmt::Display for KdcRep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{ pvno: 5")?;
        if let Some(padata) = &self.padata {
            write!(f, ", padata: {padata}")?;
        }
        if let (Some(cname), Some(crealm)) = (&self.cname, &self.crealm) {
            write!(f, ", client: {cname}@{crealm}")?;
        }
        if let Some(ticket) = &self.ticket {
            write!(f, ", ticket: {ticket}")?;
        }
        if let Some(enc_part) = &self.enc_part {
            write!(f, ", enc-part: {enc_part}")?;
        }
        f.write_str(" }")
    }
}
