use super::ber::{BerEncode, BerEncoder, LengthCache};
use super::kerberos_flags::{encode_flags, FLAGS_CONTENT_LEN};
use crate::error::KrbError;
use bitmask_enum::bitmask;

/// ```text
/// APOptions       ::= KerberosFlags
///         -- reserved(0),
///         -- use-session-key(1),
///         -- mutual-required(2)
/// ````
#[bitmask(u32)]
pub enum ApFlags {
    Reserved = 1 << 0,
    // The ticket is encrypted in the session key from the server's TGT
    // rather than the server's secret key.
    UseSessionKey = 1 << 1,
    // The client requires a KRB_AP_REP in response.
    MutualRequired = 1 << 2,
}

pub type ApOptions = ApFlags;

impl BerEncode for ApFlags {
    const NAME: &'static str = "APOptions";

    fn compute_length(&self, cache: &mut LengthCache<'_>) -> Result<usize, KrbError> {
        cache.primitive(FLAGS_CONTENT_LEN)
    }

    fn encode(&self, encoder: &mut BerEncoder<'_>) -> Result<(), KrbError> {
        encode_flags(self.bits(), encoder)
    }
}
