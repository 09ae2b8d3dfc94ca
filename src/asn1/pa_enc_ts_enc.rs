use super::ber::{required, BerEncode, BerEncoder, LengthCache};
use super::kerberos_time::KerberosTime;
use super::microseconds::Microseconds;
use crate::error::KrbError;
use std::fmt;
use std::time::SystemTime;

/// ```text
/// PA-ENC-TS-ENC           ::= SEQUENCE {
///         patimestamp     [0] KerberosTime -- client's time --,
///         pausec          [1] Microseconds OPTIONAL
/// }
/// ````
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct PaEncTsEnc {
    pub patimestamp: Option<KerberosTime>,
    pub pausec: Option<Microseconds>,
}

impl PaEncTsEnc {
    pub fn new(patimestamp: KerberosTime, pausec: Option<Microseconds>) -> Self {
        PaEncTsEnc {
            patimestamp: Some(patimestamp),
            pausec,
        }
    }

    pub fn from_system_time(time: SystemTime) -> Result<Self, KrbError> {
        let (patimestamp, pausec) = KerberosTime::from_system_time_usec(time)?;
        Ok(Self::new(patimestamp, Some(pausec)))
    }
}

impl BerEncode for PaEncTsEnc {
    const NAME: &'static str = "PA-ENC-TS-ENC";

    fn compute_length(&self, cache: &mut LengthCache<'_>) -> Result<usize, KrbError> {
        let patimestamp = required(&self.patimestamp, Self::NAME, "patimestamp")?;
        cache.sequence(|cache| Ok(cache.explicit(patimestamp)? + cache.explicit_opt(&self.pausec)?))
    }

    fn encode(&self, encoder: &mut BerEncoder<'_>) -> Result<(), KrbError> {
        let patimestamp = required(&self.patimestamp, Self::NAME, "patimestamp")?;
        encoder.sequence(|encoder| {
            encoder.explicit(0, patimestamp)?;
            encoder.explicit_opt(1, &self.pausec)
        })
    }
}

impl fmt::Display for PaEncTsEnc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PA-ENC-TS-ENC {")?;
        if let Some(ts) = &self.patimestamp {
            write!(f, " patimestamp: {ts}")?;
        }
        if let Some(usec) = self.pausec {
            write!(f, " pausec: {usec}")?;
        }
        f.write_str(" }")
    }
}
