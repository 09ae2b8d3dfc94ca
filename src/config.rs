use crate::constants::DEFAULT_IO_MAX_SIZE;
use crate::error::KrbError;
use serde::Deserialize;
use std::fs;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, error};

fn default_max_message_size() -> usize {
    DEFAULT_IO_MAX_SIZE
}

/// Limits and strictness applied while encoding.
///
/// ```toml
/// max_message_size = 65536
/// ia5_strings = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EncoderConfig {
    /// Upper bound for the total encoded size of a single structure.
    #[serde(default = "default_max_message_size")]
    pub max_message_size: usize,
    /// RFC 4120 5.2.1 says KerberosString SHOULD be IA5. When set, any
    /// string containing non ascii characters is refused.
    #[serde(default)]
    pub ia5_strings: bool,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        EncoderConfig {
            max_message_size: DEFAULT_IO_MAX_SIZE,
            ia5_strings: false,
        }
    }
}

impl EncoderConfig {
    pub fn parse<P: AsRef<Path>>(path: P) -> Result<EncoderConfig, KrbError> {
        let mut contents = String::new();
        let mut f = fs::File::open(&path)?;
        f.read_to_string(&mut contents)?;

        let config = EncoderConfig::from_str(&contents)?;
        debug!(path = %path.as_ref().display(), ?config, "loaded encoder configuration");
        Ok(config)
    }
}

impl FromStr for EncoderConfig {
    type Err = KrbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        toml::from_str(s).map_err(|err| {
            error!(?err, "toml parse failure");
            KrbError::ConfigParse
        })
    }
}
