use super::authorization_data::AuthorizationData;
use super::ber::{required, BerEncode, BerEncoder, LengthCache};
use super::checksum::Checksum;
use super::principal_name::PrincipalName;
use super::realm::Realm;
use crate::error::KrbError;
use std::fmt;

/// ```text
/// AD-KDCIssued            ::= SEQUENCE {
///         ad-checksum     [0] Checksum,
///         i-realm         [1] Realm OPTIONAL,
///         i-sname         [2] PrincipalName OPTIONAL,
///         elements        [3] AuthorizationData
/// }
/// ````
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct AdKdcIssued {
    // A keyed checksum over `elements`, in the key of the ticket's session key.
    pub ad_checksum: Option<Checksum>,
    // Only present if the elements were issued by a different realm than the
    // one issuing the ticket.
    pub i_realm: Option<Realm>,
    pub i_sname: Option<PrincipalName>,
    pub elements: AuthorizationData,
}

impl AdKdcIssued {
    pub fn new(ad_checksum: Checksum, elements: AuthorizationData) -> Self {
        AdKdcIssued {
            ad_checksum: Some(ad_checksum),
            i_realm: None,
            i_sname: None,
            elements,
        }
    }
}

impl BerEncode for AdKdcIssued {
    const NAME: &'static str = "AD-KDCIssued";

    fn compute_length(&self, cache: &mut LengthCache<'_>) -> Result<usize, KrbError> {
        let ad_checksum = required(&self.ad_checksum, Self::NAME, "ad-checksum")?;
        cache.sequence(|cache| {
            Ok(cache.explicit(ad_checksum)?
                + cache.explicit_opt(&self.i_realm)?
                + cache.explicit_opt(&self.i_sname)?
                + cache.explicit(&self.elements)?)
        })
    }

    fn encode(&self, encoder: &mut BerEncoder<'_>) -> Result<(), KrbError> {
        let ad_checksum = required(&self.ad_checksum, Self::NAME, "ad-checksum")?;
        encoder.sequence(|encoder| {
            encoder.explicit(0, ad_checksum)?;
            encoder.explicit_opt(1, &self.i_realm)?;
            encoder.explicit_opt(2, &self.i_sname)?;
            encoder.explicit(3, &self.elements)
        })
    }
}

impl fmt::Display for AdKdcIssued {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AD-KDCIssued {")?;
        if let Some(ad_checksum) = &self.ad_checksum {
            write!(f, " ad-checksum: {ad_checksum}")?;
        }
        if let Some(i_realm) = &self.i_realm {
            write!(f, " i-realm: {i_realm}")?;
        }
        if let Some(i_sname) = &self.i_sname {
            write!(f, " i-sname: {i_sname}")?;
        }
        write!(f, " elements: {} }}", self.elements)
    }
}
