use super::ber::{required, BerEncode, BerEncoder, LengthCache};
use super::host_address::HostAddress;
use super::kerberos_time::KerberosTime;
use super::microseconds::Microseconds;
use crate::error::KrbError;
use bytes::Bytes;
use std::fmt;

/// ```text
/// EncKrbPrivPart  ::= [APPLICATION 28] SEQUENCE {
///         user-data       [0] OCTET STRING,
///         timestamp       [1] KerberosTime OPTIONAL,
///         usec            [2] Microseconds OPTIONAL,
///         seq-number      [3] UInt32 OPTIONAL,
///         s-address       [4] HostAddress -- sender's addr --,
///         r-address       [5] HostAddress OPTIONAL -- recip's addr
/// }
/// ```
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct EncKrbPrivPart {
    pub user_data: Bytes,
    pub timestamp: Option<KerberosTime>,
    pub usec: Option<Microseconds>,
    pub seq_number: Option<u32>,
    pub s_address: Option<HostAddress>,
    pub r_address: Option<HostAddress>,
}

impl EncKrbPrivPart {
    pub fn new<D: Into<Bytes>>(user_data: D, s_address: HostAddress) -> Self {
        EncKrbPrivPart {
            user_data: user_data.into(),
            s_address: Some(s_address),
            ..Default::default()
        }
    }
}

impl BerEncode for EncKrbPrivPart {
    const NAME: &'static str = "EncKrbPrivPart";

    fn compute_length(&self, cache: &mut LengthCache<'_>) -> Result<usize, KrbError> {
        let s_address = required(&self.s_address, Self::NAME, "s-address")?;
        cache.application(|cache| {
            Ok(cache.explicit(&self.user_data)?
                + cache.explicit_opt(&self.timestamp)?
                + cache.explicit_opt(&self.usec)?
                + cache.explicit_opt(&self.seq_number)?
                + cache.explicit(s_address)?
                + cache.explicit_opt(&self.r_address)?)
        })
    }

    fn encode(&self, encoder: &mut BerEncoder<'_>) -> Result<(), KrbError> {
        let s_address = required(&self.s_address, Self::NAME, "s-address")?;
        encoder.application(28, |encoder| {
            encoder.explicit(0, &self.user_data)?;
            encoder.explicit_opt(1, &self.timestamp)?;
            encoder.explicit_opt(2, &self.usec)?;
            encoder.explicit_opt(3, &self.seq_number)?;
            encoder.explicit(4, s_address)?;
            encoder.explicit_opt(5, &self.r_address)
        })
    }
}

impl fmt::Display for EncKrbPrivPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The user data is the confidential payload, only its size is shown.
        write!(
            f,
            "EncKrbPrivPart {{ user-data: <{} bytes>",
            self.user_data.len()
        )?;
        if let Some(timestamp) = &self.timestamp {
            write!(f, ", timestamp: {timestamp}")?;
        }
        if let Some(usec) = &self.usec {
            write!(f, ", usec: {usec}")?;
        }
        if let Some(seq_number) = &self.seq_number {
            write!(f, ", seq-number: {seq_number}")?;
        }
        if let Some(s_address) = &self.s_address {
            write!(f, ", s-address: {s_address}")?;
        }
        if let Some(r_address) = &self.r_address {
            write!(f, ", r-address: {r_address}")?;
        }
        f.write_str(" }")
    }
}
