use super::ber::{BerEncode, BerEncoder, LengthCache};
use super::constants::KrbMessageType;
use super::kdc_rep::KdcRep;
use crate::error::KrbError;
use std::fmt;
use tracing::trace;

/// ```text
/// AS-REP          ::= [APPLICATION 11] KDC-REP
/// TGS-REP         ::= [APPLICATION 13] KDC-REP
/// ```
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum KrbKdcRep {
    AsRep(KdcRep),
    TgsRep(KdcRep),
}

impl KrbKdcRep {
    pub fn msg_type(&self) -> KrbMessageType {
        match self {
            KrbKdcRep::AsRep(_) => KrbMessageType::KrbAsRep,
            KrbKdcRep::TgsRep(_) => KrbMessageType::KrbTgsRep,
        }
    }

    pub fn kdc_rep(&self) -> &KdcRep {
        match self {
            KrbKdcRep::AsRep(kdc_rep) | KrbKdcRep::TgsRep(kdc_rep) => kdc_rep,
        }
    }
}

impl BerEncode for KrbKdcRep {
    const NAME: &'static str = "KDC-REP";

    fn compute_length(&self, cache: &mut LengthCache<'_>) -> Result<usize, KrbError> {
        let msg_type = self.msg_type();
        trace!(?msg_type, "sizing kdc reply");
        let kdc_rep = self.kdc_rep();
        cache.application(|cache| kdc_rep.members_length(msg_type, cache))
    }

    fn encode(&self, encoder: &mut BerEncoder<'_>) -> Result<(), KrbError> {
        match self {
            KrbKdcRep::AsRep(asrep) => encoder.application(11, |encoder| {
                asrep.encode_members(KrbMessageType::KrbAsRep, encoder)
            }),
            KrbKdcRep::TgsRep(tgsrep) => encoder.application(13, |encoder| {
                tgsrep.encode_members(KrbMessageType::KrbTgsRep, encoder)
            }),
        }
    }
}

impl fmt::Display for KrbKdcRep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KrbKdcRep::AsRep(asrep) => write!(f, "AS-REP {asrep}"),
            KrbKdcRep::TgsRep(tgsrep) => write!(f, "TGS-REP {tgsrep}"),
        }
    }
}
