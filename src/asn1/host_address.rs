use super::ber::{BerEncode, BerEncoder, LengthCache};
use super::constants::HostAddressType;
use crate::error::KrbError;
use bytes::Bytes;
use std::fmt;
use std::net::IpAddr;

/// ```text
/// HostAddress     ::= SEQUENCE  {
///         addr-type       [0] Int32,
///         address         [1] OCTET STRING
/// }
/// ````
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct HostAddress {
    pub addr_type: i32,
    pub address: Bytes,
}

impl HostAddress {
    pub fn new<T: Into<i32>, A: Into<Bytes>>(addr_type: T, address: A) -> Self {
        HostAddress {
            addr_type: addr_type.into(),
            address: address.into(),
        }
    }
}

impl From<IpAddr> for HostAddress {
    fn from(value: IpAddr) -> Self {
        match value {
            IpAddr::V4(v4) => HostAddress::new(HostAddressType::IPv4, v4.octets().to_vec()),
            IpAddr::V6(v6) => HostAddress::new(HostAddressType::IPv6, v6.octets().to_vec()),
        }
    }
}

impl BerEncode for HostAddress {
    const NAME: &'static str = "HostAddress";

    fn compute_length(&self, cache: &mut LengthCache<'_>) -> Result<usize, KrbError> {
        cache.sequence(|cache| {
            Ok(cache.explicit(&self.addr_type)? + cache.explicit(&self.address)?)
        })
    }

    fn encode(&self, encoder: &mut BerEncoder<'_>) -> Result<(), KrbError> {
        encoder.sequence(|encoder| {
            encoder.explicit(0, &self.addr_type)?;
            encoder.explicit(1, &self.address)
        })
    }
}

impl fmt::Display for HostAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "HostAddress {{ addr-type: {}, address: {} }}",
            self.addr_type,
            hex::encode(&self.address)
        )
    }
}
