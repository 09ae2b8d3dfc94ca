use super::authorization_data::AuthorizationData;
use super::ber::{BerEncode, BerEncoder, LengthCache};
use crate::error::KrbError;
use std::fmt;

/// ```text
/// AD-AND-OR               ::= SEQUENCE {
///         condition-count [0] Int32,
///         elements        [1] AuthorizationData
/// }
/// ````
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct AdAndOr {
    // How many of the elements must be satisfied.
    pub condition_count: i32,
    pub elements: AuthorizationData,
}

impl AdAndOr {
    pub fn new(condition_count: i32, elements: AuthorizationData) -> Self {
        AdAndOr {
            condition_count,
            elements,
        }
    }
}

impl BerEncode for AdAndOr {
    const NAME: &'static str = "AD-AND-OR";

    fn compute_length(&self, cache: &mut LengthCache<'_>) -> Result<usize, KrbError> {
        cache.sequence(|cache| {
            Ok(cache.explicit(&self.condition_count)? + cache.explicit(&self.elements)?)
        })
    }

    fn encode(&self, encoder: &mut BerEncoder<'_>) -> Result<(), KrbError> {
        encoder.sequence(|encoder| {
            encoder.explicit(0, &self.condition_count)?;
            encoder.explicit(1, &self.elements)
        })
    }
}

impl fmt::Display for AdAndOr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AD-AND-OR {{ condition-count: {}, elements: {} }}",
            self.condition_count, self.elements
        )
    }
}
