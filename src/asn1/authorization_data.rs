use super::ber::{BerEncode, BerEncoder, LengthCache};
use super::constants::AuthorizationDataType;
use crate::error::KrbError;
use bytes::Bytes;
use std::fmt;
use std::ops::{Deref, DerefMut};

/// One `ad-type`/`ad-data` element of [`AuthorizationData`].
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct AuthorizationDataEntry {
    pub ad_type: i32,
    pub ad_data: Bytes,
}

impl AuthorizationDataEntry {
    pub fn new<T: Into<i32>, D: Into<Bytes>>(ad_type: T, ad_data: D) -> Self {
        AuthorizationDataEntry {
            ad_type: ad_type.into(),
            ad_data: ad_data.into(),
        }
    }

    /// Builds an element whose `ad-data` is the encoding of `value`, as is
    /// done for AD-IF-RELEVANT, AD-KDCIssued and friends.
    pub fn from_encodable<T, E>(ad_type: T, value: &E) -> Result<Self, KrbError>
    where
        T: Into<i32>,
        E: BerEncode,
    {
        Ok(Self::new(ad_type, value.serialize()?))
    }
}

impl BerEncode for AuthorizationDataEntry {
    const NAME: &'static str = "AuthorizationData";

    fn compute_length(&self, cache: &mut LengthCache<'_>) -> Result<usize, KrbError> {
        cache.sequence(|cache| Ok(cache.explicit(&self.ad_type)? + cache.explicit(&self.ad_data)?))
    }

    fn encode(&self, encoder: &mut BerEncoder<'_>) -> Result<(), KrbError> {
        encoder.sequence(|encoder| {
            encoder.explicit(0, &self.ad_type)?;
            encoder.explicit(1, &self.ad_data)
        })
    }
}

impl fmt::Display for AuthorizationDataEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ ad-type: {}, ad-data: {} }}",
            self.ad_type,
            hex::encode(&self.ad_data)
        )
    }
}

/// ```text
/// AuthorizationData       ::= SEQUENCE OF SEQUENCE {
///         ad-type         [0] Int32,
///         ad-data         [1] OCTET STRING
/// }
/// ````
///
/// Order is significant, elements are written in the order they were added.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct AuthorizationData(Vec<AuthorizationDataEntry>);

impl AuthorizationData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: AuthorizationDataEntry) {
        self.0.push(entry);
    }

    /// Appends an element with an empty `ad-data` and returns it.
    pub fn new_entry(&mut self) -> &mut AuthorizationDataEntry {
        let idx = self.0.len();
        self.0.push(AuthorizationDataEntry::default());
        &mut self.0[idx]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AuthorizationDataEntry> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<AuthorizationDataEntry>> for AuthorizationData {
    fn from(value: Vec<AuthorizationDataEntry>) -> Self {
        AuthorizationData(value)
    }
}

impl FromIterator<AuthorizationDataEntry> for AuthorizationData {
    fn from_iter<I: IntoIterator<Item = AuthorizationDataEntry>>(iter: I) -> Self {
        AuthorizationData(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a AuthorizationData {
    type Item = &'a AuthorizationDataEntry;
    type IntoIter = std::slice::Iter<'a, AuthorizationDataEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl BerEncode for AuthorizationData {
    const NAME: &'static str = "AuthorizationData";

    fn compute_length(&self, cache: &mut LengthCache<'_>) -> Result<usize, KrbError> {
        self.0.compute_length(cache)
    }

    fn encode(&self, encoder: &mut BerEncoder<'_>) -> Result<(), KrbError> {
        self.0.encode(encoder)
    }
}

impl fmt::Display for AuthorizationData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthorizationData [")?;
        for (i, entry) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{entry}")?;
        }
        f.write_str("]")
    }
}

/// ```text
/// AD-IF-RELEVANT          ::= AuthorizationData
/// ````
///
/// Elements the receiving application may ignore when it does not understand
/// them. Carried as the `ad-data` of an element of type 1.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct AdIfRelevant(pub AuthorizationData);

impl AdIfRelevant {
    /// Wraps this value as a single element of an enclosing AuthorizationData.
    pub fn to_entry(&self) -> Result<AuthorizationDataEntry, KrbError> {
        AuthorizationDataEntry::from_encodable(AuthorizationDataType::AdIfRelevant, self)
    }
}

impl From<AuthorizationData> for AdIfRelevant {
    fn from(value: AuthorizationData) -> Self {
        AdIfRelevant(value)
    }
}

impl Deref for AdIfRelevant {
    type Target = AuthorizationData;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for AdIfRelevant {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl BerEncode for AdIfRelevant {
    const NAME: &'static str = "AD-IF-RELEVANT";

    fn compute_length(&self, cache: &mut LengthCache<'_>) -> Result<usize, KrbError> {
        self.0.compute_length(cache)
    }

    fn encode(&self, encoder: &mut BerEncoder<'_>) -> Result<(), KrbError> {
        self.0.encode(encoder)
    }
}

impl fmt::Display for AdIfRelevant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AD-IF-RELEVANT {}", self.0)
    }
}

/// ```text
/// AD-MANDATORY-FOR-KDC    ::= AuthorizationData
/// ````
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct AdMandatoryForKdc(pub AuthorizationData);

impl AdMandatoryForKdc {
    /// Wraps this value as a single element of an enclosing AuthorizationData.
    pub fn to_entry(&self) -> Result<AuthorizationDataEntry, KrbError> {
        AuthorizationDataEntry::from_encodable(AuthorizationDataType::AdMandatoryForKdc, self)
    }
}

impl From<AuthorizationData> for AdMandatoryForKdc {
    fn from(value: AuthorizationData) -> Self {
        AdMandatoryForKdc(value)
    }
}

impl Deref for AdMandatoryForKdc {
    type Target = AuthorizationData;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for AdMandatoryForKdc {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl BerEncode for AdMandatoryForKdc {
    const NAME: &'static str = "AD-MANDATORY-FOR-KDC";

    fn compute_length(&self, cache: &mut LengthCache<'_>) -> Result<usize, KrbError> {
        self.0.compute_length(cache)
    }

    fn encode(&self, encoder: &mut BerEncoder<'_>) -> Result<(), KrbError> {
        self.0.encode(encoder)
    }
}

impl fmt::Display for AdMandatoryForKdc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AD-MANDATORY-FOR-KDC {}", self.0)
    }
}
