use super::ber::{tag, BerEncode, BerEncoder, LengthCache};
use crate::error::KrbError;
use std::fmt;
use tracing::error;

/// ```text
/// KerberosString  ::= GeneralString (IA5String)
/// ````
///
/// The value is carried as UTF-8. Whether non IA5 characters are acceptable
/// is decided by [`EncoderConfig::ia5_strings`](crate::config::EncoderConfig).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KerberosString(String);

impl KerberosString {
    pub fn new<S: Into<String>>(value: S) -> Self {
        KerberosString(value.into())
    }

    pub fn as_str(&self) -> &str {
        self.as_ref()
    }

    pub fn is_ia5(&self) -> bool {
        self.0.is_ascii()
    }
}

impl BerEncode for KerberosString {
    const NAME: &'static str = "KerberosString";

    fn compute_length(&self, cache: &mut LengthCache<'_>) -> Result<usize, KrbError> {
        if cache.config().ia5_strings && !self.is_ia5() {
            error!("KerberosString contains non IA5 characters");
            return Err(KrbError::InvalidKerberosString);
        }
        cache.primitive(self.0.len())
    }

    fn encode(&self, encoder: &mut BerEncoder<'_>) -> Result<(), KrbError> {
        encoder.primitive(tag::GENERAL_STRING, self.0.as_bytes())
    }
}

impl fmt::Display for KerberosString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl AsRef<str> for KerberosString {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<&str> for KerberosString {
    fn from(value: &str) -> Self {
        KerberosString(value.to_string())
    }
}

impl From<String> for KerberosString {
    fn from(value: String) -> Self {
        KerberosString(value)
    }
}

impl From<&KerberosString> for String {
    fn from(value: &KerberosString) -> Self {
        value.to_string()
    }
}
