use super::ber::{tag, BerEncode, BerEncoder, LengthCache};
use crate::error::KrbError;
use bitmask_enum::bitmask;

/// Content octets of every flag BIT STRING: the unused bits octet and 32 bits.
pub(crate) const FLAGS_CONTENT_LEN: usize = 5;

/// Writes `bits` as a 32 bit BIT STRING where flag `1 << n` is bit n, counted
/// from the most significant bit of the first octet.
pub(crate) fn encode_flags(bits: u32, encoder: &mut BerEncoder<'_>) -> Result<(), KrbError> {
    let [b0, b1, b2, b3] = bits.reverse_bits().to_be_bytes();
    encoder.primitive(tag::BIT_STRING, &[0x00, b0, b1, b2, b3])
}

/// ```text
/// KerberosFlags   ::= BIT STRING (SIZE (32..MAX))
///                     -- minimum number of bits shall be sent,
///                     -- but no fewer than 32
/// ````
// NOTE: RFC4120 section 5.8.2 says at least 32 bit must be sent, so trailing
// zero bits are never stripped.
#[bitmask(u32)]
pub enum KerberosFlags {
    Reserved = 1 << 0,
    Forwardable = 1 << 1,
    Forwarded = 1 << 2,
    Proxiable = 1 << 3,
    Proxy = 1 << 4,
    AllowPostdate = 1 << 5,
    Postdated = 1 << 6,
    Unused7 = 1 << 7,
    Renewable = 1 << 8,
    Unused9 = 1 << 9,
    Unused10 = 1 << 10,
    OptHardwareAuth = 1 << 11,
    Unused12 = 1 << 12,
    Unused13 = 1 << 13,
    Unused14 = 1 << 14,
    Canonicalize = 1 << 15,
    Unused16 = 1 << 16,
    Unused17 = 1 << 17,
    Unused18 = 1 << 18,
    Unused19 = 1 << 19,
    Unused20 = 1 << 20,
    Unused21 = 1 << 21,
    Unused22 = 1 << 22,
    Unused23 = 1 << 23,
    Unused24 = 1 << 24,
    Unused25 = 1 << 25,
    // -- 26 was unused in 1510
    DisableTransitedCheck = 1 << 26,
    RenewableOk = 1 << 27,
    EncTktInSkey = 1 << 28,
    Unused29 = 1 << 29,
    Renew = 1 << 30,
    Validate = 1 << 31,
}

impl BerEncode for KerberosFlags {
    const NAME: &'static str = "KerberosFlags";

    fn compute_length(&self, cache: &mut LengthCache<'_>) -> Result<usize, KrbError> {
        cache.primitive(FLAGS_CONTENT_LEN)
    }

    fn encode(&self, encoder: &mut BerEncoder<'_>) -> Result<(), KrbError> {
        encode_flags(self.bits(), encoder)
    }
}
