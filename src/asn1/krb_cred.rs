use super::ber::{required, BerEncode, BerEncoder, LengthCache};
use super::constants::KrbMessageType;
use super::encrypted_data::EncryptedData;
use super::ticket::Ticket;
use crate::constants::PVNO;
use crate::error::KrbError;
use std::fmt;

/// ```text
/// KRB-CRED        ::= [APPLICATION 22] SEQUENCE {
///         pvno            [0] INTEGER (5),
///         msg-type        [1] INTEGER (22),
///         tickets         [2] SEQUENCE OF Ticket,
///         enc-part        [3] EncryptedData -- EncKrbCredPart
/// }
/// ```
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct KrbCred {
    pub tickets: Vec<Ticket>,
    pub enc_part: Option<EncryptedData>,
}

impl KrbCred {
    pub fn new(tickets: Vec<Ticket>, enc_part: EncryptedData) -> Self {
        KrbCred {
            tickets,
            enc_part: Some(enc_part),
        }
    }
}

impl BerEncode for KrbCred {
    const NAME: &'static str = "KRB-CRED";

    fn compute_length(&self, cache: &mut LengthCache<'_>) -> Result<usize, KrbError> {
        let enc_part = required(&self.enc_part, Self::NAME, "enc-part")?;
        let msg_type: u32 = KrbMessageType::KrbCred.into();
        cache.application(|cache| {
            Ok(cache.explicit(&PVNO)?
                + cache.explicit(&msg_type)?
                + cache.explicit(&self.tickets)?
                + cache.explicit(enc_part)?)
        })
    }

    fn encode(&self, encoder: &mut BerEncoder<'_>) -> Result<(), KrbError> {
        let enc_part = required(&self.enc_part, Self::NAME, "enc-part")?;
        let msg_type: u32 = KrbMessageType::KrbCred.into();
        encoder.application(22, |encoder| {
            encoder.explicit(0, &PVNO)?;
            encoder.explicit(1, &msg_type)?;
            encoder.explicit(2, &self.tickets)?;
            encoder.explicit(3, enc_part)
        })
    }
}

impl fmt::Display for KrbCred {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("KRB-CRED { pvno: 5, tickets: [")?;
        for (i, ticket) in self.tickets.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{ticket}")?;
        }
        f.write_str("]")?;
        if let Some(enc_part) = &self.enc_part {
            write!(f, ", enc-part: {enc_part}")?;
        }
        f.write_str(" }")
    }
}
