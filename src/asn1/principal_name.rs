use super::ber::{BerEncode, BerEncoder, LengthCache};
use super::kerberos_string::KerberosString;
use crate::error::KrbError;
use std::fmt;

/// ```text
///   PrincipalName   ::= SEQUENCE {
///           name-type       [0] Int32,
///           name-string     [1] SEQUENCE OF KerberosString
///   }
/// ````
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct PrincipalName {
    // This field specifies the type of name that follows.  Pre-defined
    // values for this field are specified in Section 6.2.  The name-type
    // SHOULD be treated as a hint.
    pub name_type: i32,
    // This field encodes a sequence of components that form a name, each
    // component encoded as a KerberosString.  Taken together, a
    // PrincipalName and a Realm form a principal identifier.
    pub name_string: Vec<KerberosString>,
}

impl PrincipalName {
    pub fn new<N, I, S>(name_type: N, components: I) -> Self
    where
        N: Into<i32>,
        I: IntoIterator<Item = S>,
        S: Into<KerberosString>,
    {
        PrincipalName {
            name_type: name_type.into(),
            name_string: components.into_iter().map(Into::into).collect(),
        }
    }

    pub fn push_component<S: Into<KerberosString>>(&mut self, component: S) {
        self.name_string.push(component.into());
    }
}

impl BerEncode for PrincipalName {
    const NAME: &'static str = "PrincipalName";

    fn compute_length(&self, cache: &mut LengthCache<'_>) -> Result<usize, KrbError> {
        cache.sequence(|cache| {
            Ok(cache.explicit(&self.name_type)? + cache.explicit(&self.name_string)?)
        })
    }

    fn encode(&self, encoder: &mut BerEncoder<'_>) -> Result<(), KrbError> {
        encoder.sequence(|encoder| {
            encoder.explicit(0, &self.name_type)?;
            encoder.explicit(1, &self.name_string)
        })
    }
}

impl From<&PrincipalName> for String {
    fn from(value: &PrincipalName) -> Self {
        let v: Vec<&str> = value.name_string.iter().map(|x| x.as_ref()).collect();
        v.join("/")
    }
}

/// Splits a `service/instance` style name into its components.
impl<N, T> From<(N, T)> for PrincipalName
where
    N: Into<i32>,
    T: AsRef<str>,
{
    fn from((name_type, name_str): (N, T)) -> Self {
        PrincipalName::new(name_type, name_str.as_ref().split('/'))
    }
}

impl fmt::Display for PrincipalName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from(self))
    }
}
