use super::ber::{required, BerEncoder, LengthCache};
use super::constants::KrbMessageType;
use super::kdc_req_body::KdcReqBody;
use super::method_data::MethodData;
use crate::constants::PVNO;
use crate::error::KrbError;
use std::fmt;

/// ```text
/// KDC-REQ         ::= SEQUENCE {
///         -- NOTE: first tag is [1], not [0]
///         pvno            [1] INTEGER (5) ,
///         msg-type        [2] INTEGER (10 -- AS -- | 12 -- TGS --),
///         padata          [3] SEQUENCE OF PA-DATA OPTIONAL
///                             -- NOTE: not empty --,
///         req-body        [4] KDC-REQ-BODY
/// }
/// ```
///
/// The message type is not held here, it is implied by which variant of
/// [`KrbKdcReq`](super::krb_kdc_req::KrbKdcReq) carries the request.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct KdcReq {
    pub padata: Option<MethodData>,
    pub req_body: Option<KdcReqBody>,
}

impl KdcReq {
    pub const NAME: &'static str = "KDC-REQ";

    pub fn new(padata: Option<MethodData>, req_body: KdcReqBody) -> Self {
        KdcReq {
            padata,
            req_body: Some(req_body),
        }
    }

    /// Sizes the members of the SEQUENCE for a request of `msg_type`.
    pub(crate) fn members_length(
        &self,
        msg_type: KrbMessageType,
        cache: &mut LengthCache<'_>,
    ) -> Result<usize, KrbError> {
        let req_body = required(&self.req_body, Self::NAME, "req-body")?;
        let msg_type: u32 = msg_type.into();
        Ok(cache.explicit(&PVNO)?
            + cache.explicit(&msg_type)?
            + cache.explicit_opt(&self.padata)?
            + cache.explicit(req_body)?)
    }

    pub(crate) fn encode_members(
        &self,
        msg_type: KrbMessageType,
        encoder: &mut BerEncoder<'_>,
    ) -> Result<(), KrbError> {
        let req_body = required(&self.req_body, Self::NAME, "req-body")?;
        let msg_type: u32 = msg_type.into();
        encoder.explicit(1, &PVNO)?;
        encoder.explicit(2, &msg_type)?;
        encoder.explicit_opt(3, &self.padata)?;
        encoder.explicit(4, req_body)
    }
}

impl fmt::Display for KdcReq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{ pvno: 5")?;
        if let Some(padata) = &self.padata {
            write!(f, ", padata: {padata}")?;
        }
        if let Some(req_body) = &self.req_body {
            write!(f, ", req-body: {req_body}")?;
        }
        f.write_str(" }")
    }
}
