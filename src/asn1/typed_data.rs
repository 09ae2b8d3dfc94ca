use super::ber::{BerEncode, BerEncoder, LengthCache};
use crate::error::KrbError;
use bytes::Bytes;
use std::fmt;

#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct TypedDataEntry {
    pub data_type: i32,
    pub data_value: Option<Bytes>,
}

impl TypedDataEntry {
    pub fn new<T: Into<i32>>(data_type: T, data_value: Option<Bytes>) -> Self {
        TypedDataEntry {
            data_type: data_type.into(),
            data_value,
        }
    }
}

impl BerEncode for TypedDataEntry {
    const NAME: &'static str = "TYPED-DATA";

    fn compute_length(&self, cache: &mut LengthCache<'_>) -> Result<usize, KrbError> {
        cache.sequence(|cache| {
            Ok(cache.explicit(&self.data_type)? + cache.explicit_opt(&self.data_value)?)
        })
    }

    fn encode(&self, encoder: &mut BerEncoder<'_>) -> Result<(), KrbError> {
        encoder.sequence(|encoder| {
            encoder.explicit(0, &self.data_type)?;
            encoder.explicit_opt(1, &self.data_value)
        })
    }
}

impl fmt::Display for TypedDataEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ data-type: {}", self.data_type)?;
        if let Some(data_value) = &self.data_value {
            write!(f, ", data-value: {}", hex::encode(data_value))?;
        }
        f.write_str(" }")
    }
}

/// ```text
/// TYPED-DATA      ::= SEQUENCE SIZE (1..MAX) OF SEQUENCE {
///         data-type       [0] Int32,
///         data-value      [1] OCTET STRING OPTIONAL
/// }
/// ````
///
/// The `e-data` of a KRB-ERROR MAY take this form for error codes other than
/// KDC_ERR_PREAUTH_REQUIRED.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct TypedData(Vec<TypedDataEntry>);

impl TypedData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: TypedDataEntry) {
        self.0.push(entry);
    }

    /// Appends an empty entry and hands it back for population.
    pub fn new_entry(&mut self) -> &mut TypedDataEntry {
        let idx = self.0.len();
        self.0.push(TypedDataEntry::default());
        &mut self.0[idx]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TypedDataEntry> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<TypedDataEntry>> for TypedData {
    fn from(value: Vec<TypedDataEntry>) -> Self {
        TypedData(value)
    }
}

impl FromIterator<TypedDataEntry> for TypedData {
    fn from_iter<I: IntoIterator<Item = TypedDataEntry>>(iter: I) -> Self {
        TypedData(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a TypedData {
    type Item = &'a TypedDataEntry;
    type IntoIter = std::slice::Iter<'a, TypedDataEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl BerEncode for TypedData {
    const NAME: &'static str = "TYPED-DATA";

    fn compute_length(&self, cache: &mut LengthCache<'_>) -> Result<usize, KrbError> {
        self.0.compute_length(cache)
    }

    fn encode(&self, encoder: &mut BerEncoder<'_>) -> Result<(), KrbError> {
        self.0.encode(encoder)
    }
}

impl fmt::Display for TypedData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TYPED-DATA [")?;
        for (i, entry) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{entry}")?;
        }
        f.write_str("]")
    }
}
