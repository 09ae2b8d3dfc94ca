use super::ber::{tag, BerEncode, BerEncoder, LengthCache};
use super::microseconds::Microseconds;
use crate::error::KrbError;
use der::DateTime;
use std::fmt;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tracing::error;

/// ```text
/// KerberosTime    ::= GeneralizedTime -- with no fractional seconds
/// ````
///
/// Always sent as the 15 octets `YYYYMMDDHHMMSSZ`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct KerberosTime(DateTime);

impl KerberosTime {
    /// Content length of every encoded KerberosTime.
    pub const ENCODED_LEN: usize = 15;

    pub fn from_date_time(date_time: DateTime) -> Self {
        KerberosTime(date_time)
    }

    pub fn from_unix_duration(duration: Duration) -> Result<Self, KrbError> {
        DateTime::from_unix_duration(Duration::from_secs(duration.as_secs()))
            .map(KerberosTime)
            .map_err(|err| {
                error!(?err, "unable to represent time as GeneralizedTime");
                KrbError::InvalidKerberosTime
            })
    }

    /// Sub second precision is discarded.
    pub fn from_system_time(time: SystemTime) -> Result<Self, KrbError> {
        let since_epoch = time.duration_since(UNIX_EPOCH).map_err(|_| {
            error!("system time is before the unix epoch");
            KrbError::DoYouHaveATimeMachine
        })?;
        Self::from_unix_duration(since_epoch)
    }

    /// Splits a time into the `ctime`/`cusec` style pair used by authenticators.
    pub fn from_system_time_usec(time: SystemTime) -> Result<(Self, Microseconds), KrbError> {
        let since_epoch = time.duration_since(UNIX_EPOCH).map_err(|_| {
            error!("system time is before the unix epoch");
            KrbError::DoYouHaveATimeMachine
        })?;
        let kt = Self::from_unix_duration(since_epoch)?;
        Ok((kt, Microseconds::new(since_epoch.subsec_micros())?))
    }

    pub fn to_date_time(&self) -> DateTime {
        self.0
    }

    pub fn to_system_time(&self) -> SystemTime {
        self.0.to_system_time()
    }
}

impl BerEncode for KerberosTime {
    const NAME: &'static str = "KerberosTime";

    fn compute_length(&self, cache: &mut LengthCache<'_>) -> Result<usize, KrbError> {
        cache.primitive(Self::ENCODED_LEN)
    }

    fn encode(&self, encoder: &mut BerEncoder<'_>) -> Result<(), KrbError> {
        let generalized = self.to_string();
        encoder.primitive(tag::GENERALIZED_TIME, generalized.as_bytes())
    }
}

impl fmt::Display for KerberosTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}{:02}{:02}{:02}{:02}{:02}Z",
            self.0.year(),
            self.0.month(),
            self.0.day(),
            self.0.hour(),
            self.0.minutes(),
            self.0.seconds()
        )
    }
}
