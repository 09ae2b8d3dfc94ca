use super::ap_options::ApOptions;
use super::ber::{required, BerEncode, BerEncoder, LengthCache};
use super::constants::KrbMessageType;
use super::encrypted_data::EncryptedData;
use super::ticket::Ticket;
use crate::constants::PVNO;
use crate::error::KrbError;
use std::fmt;

/// ```text
/// AP-REQ          ::= [APPLICATION 14] SEQUENCE {
///            pvno            [0] INTEGER (5),
///            msg-type        [1] INTEGER (14),
///            ap-options      [2] APOptions,
///            ticket          [3] Ticket,
///            authenticator   [4] EncryptedData -- Authenticator
///    }
///```
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ApReq {
    // The flags affect the way the request is processed.
    pub ap_options: ApOptions,
    // This field is a ticket authenticating the client to the server.
    pub ticket: Option<Ticket>,
    // This contains the encrypted authenticator, which includes the client's choice of a subkey.
    pub authenticator: Option<EncryptedData>,
}

impl Default for ApReq {
    fn default() -> Self {
        ApReq {
            ap_options: ApOptions::none(),
            ticket: None,
            authenticator: None,
        }
    }
}

impl ApReq {
    pub fn new(ap_options: ApOptions, ticket: Ticket, authenticator: EncryptedData) -> Self {
        ApReq {
            ap_options,
            ticket: Some(ticket),
            authenticator: Some(authenticator),
        }
    }
}

impl BerEncode for ApReq {
    const NAME: &'static str = "AP-REQ";

    fn compute_length(&self, cache: &mut LengthCache<'_>) -> Result<usize, KrbError> {
        let ticket = required(&self.ticket, Self::NAME, "ticket")?;
        let authenticator = required(&self.authenticator, Self::NAME, "authenticator")?;
        let msg_type: u32 = KrbMessageType::KrbApReq.into();
        cache.application(|cache| {
            Ok(cache.explicit(&PVNO)?
                + cache.explicit(&msg_type)?
                + cache.explicit(&self.ap_options)?
                + cache.explicit(ticket)?
                + cache.explicit(authenticator)?)
        })
    }

    fn encode(&self, encoder: &mut BerEncoder<'_>) -> Result<(), KrbError> {
        let ticket = required(&self.ticket, Self::NAME, "ticket")?;
        let authenticator = required(&self.authenticator, Self::NAME, "authenticator")?;
        let msg_type: u32 = KrbMessageType::KrbApReq.into();
        encoder.application(14, |encoder| {
            encoder.explicit(0, &PVNO)?;
            encoder.explicit(1, &msg_type)?;
            encoder.explicit(2, &self.ap_options)?;
            encoder.explicit(3, ticket)?;
            encoder.explicit(4, authenticator)
        })
    }
}

impl fmt::Display for ApReq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AP-REQ {{ pvno: 5, ap-options: {:#010x}",
            self.ap_options.bits()
        )?;
        if let Some(ticket) = &self.ticket {
            write!(f, ", ticket: {ticket}")?;
        }
        if let Some(authenticator) = &self.authenticator {
            write!(f, ", authenticator: {authenticator}")?;
        }
        f.write_str(" }")
    }
}
