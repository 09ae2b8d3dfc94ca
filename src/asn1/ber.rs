//! Tag-length-value primitives and the two pass encoding protocol.
//!
//! Encoding a structure happens in two passes over the same, borrowed, value:
//!
//! 1. [`BerEncode::compute_length`] walks the value and records the content
//!    length of every TLV it will emit, in emission order, into a
//!    [`LengthCache`]. A constructed TLV reserves its slot before its children
//!    are visited so the cache is in pre-order.
//! 2. [`BerEncode::encode`] walks the value again and consumes the cached
//!    lengths in the same order through a [`BerEncoder`]. Lengths are never
//!    recomputed, only checked against what was actually written.
//!
//! Neither pass can be started from outside this crate. Callers go through
//! [`Prepared`], which keeps a shared borrow of the value for as long as the
//! length plan exists, or [`BerEncode::serialize`] which runs both passes.

use crate::config::EncoderConfig;
use crate::error::KrbError;
use bytes::{Bytes, BytesMut};
use der::{Encode, EncodeValue, Length, SliceWriter, Writer};
use tracing::{error, trace};

/// Identifier octets used by the Kerberos ASN.1 module.
pub mod tag {
    pub const INTEGER: u8 = 0x02;
    pub const BIT_STRING: u8 = 0x03;
    pub const OCTET_STRING: u8 = 0x04;
    pub const GENERALIZED_TIME: u8 = 0x18;
    pub const GENERAL_STRING: u8 = 0x1b;
    pub const SEQUENCE: u8 = 0x30;

    /// `[n]` as a constructed, context specific tag.
    pub const fn context(number: u8) -> u8 {
        0xa0 | number
    }

    /// `[APPLICATION n]` as a constructed tag. Kerberos never needs n > 30.
    pub const fn application(number: u8) -> u8 {
        0x60 | number
    }
}

/// Number of octets the definite length `length` occupies on the wire.
pub fn length_of_length(length: usize) -> Result<usize, KrbError> {
    let length = Length::try_from(length)?;
    Ok(usize::try_from(length.encoded_len()?)?)
}

/// Total size of a TLV with a single identifier octet and `content` octets.
pub fn tlv_length(content: usize) -> Result<usize, KrbError> {
    Ok(1 + length_of_length(content)? + content)
}

/// Content octets `value` occupies once encoded by der.
fn value_width<V: EncodeValue>(value: &V) -> Result<usize, KrbError> {
    Ok(usize::try_from(value.value_len()?)?)
}

pub(crate) fn required<'a, T>(
    value: &'a Option<T>,
    structure: &'static str,
    field: &'static str,
) -> Result<&'a T, KrbError> {
    value.as_ref().ok_or_else(|| {
        error!(structure, field, "required field is not set");
        KrbError::InvalidState { structure, field }
    })
}

/// Content lengths of every TLV of a value, recorded by the first pass.
#[derive(Debug)]
pub struct LengthCache<'c> {
    lengths: Vec<usize>,
    config: &'c EncoderConfig,
}

impl<'c> LengthCache<'c> {
    pub(crate) fn new(config: &'c EncoderConfig) -> Self {
        LengthCache {
            lengths: Vec::new(),
            config,
        }
    }

    pub(crate) fn config(&self) -> &EncoderConfig {
        self.config
    }

    /// Reserves the slot of a constructed TLV whose content is not sized yet.
    pub(crate) fn open(&mut self) -> usize {
        self.lengths.push(0);
        self.lengths.len() - 1
    }

    /// Fills a slot from [`LengthCache::open`] and returns the full TLV size.
    pub(crate) fn close(&mut self, slot: usize, content: usize) -> Result<usize, KrbError> {
        if let Some(entry) = self.lengths.get_mut(slot) {
            *entry = content;
        }
        tlv_length(content)
    }

    pub(crate) fn primitive(&mut self, content: usize) -> Result<usize, KrbError> {
        self.lengths.push(content);
        tlv_length(content)
    }

    /// Sizes `value` wrapped in an explicit context tag.
    pub(crate) fn explicit<T: BerEncode>(&mut self, value: &T) -> Result<usize, KrbError> {
        let slot = self.open();
        let inner = value.compute_length(self)?;
        self.close(slot, inner)
    }

    /// As [`LengthCache::explicit`], an absent value contributes nothing.
    pub(crate) fn explicit_opt<T: BerEncode>(
        &mut self,
        value: &Option<T>,
    ) -> Result<usize, KrbError> {
        match value {
            Some(value) => self.explicit(value),
            None => Ok(0),
        }
    }

    /// Sizes a SEQUENCE whose members are sized by `members`.
    pub(crate) fn sequence<F>(&mut self, members: F) -> Result<usize, KrbError>
    where
        F: FnOnce(&mut Self) -> Result<usize, KrbError>,
    {
        let slot = self.open();
        let content = members(self)?;
        self.close(slot, content)
    }

    /// Sizes `[APPLICATION n] SEQUENCE { .. }`.
    pub(crate) fn application<F>(&mut self, members: F) -> Result<usize, KrbError>
    where
        F: FnOnce(&mut Self) -> Result<usize, KrbError>,
    {
        let slot = self.open();
        let inner = self.sequence(members)?;
        self.close(slot, inner)
    }

    fn into_lengths(self) -> Vec<usize> {
        self.lengths
    }
}

/// Writes TLVs into a fixed size buffer using the lengths of a [`LengthCache`].
#[derive(Debug)]
pub struct BerEncoder<'b> {
    structure: &'static str,
    writer: SliceWriter<'b>,
    pos: usize,
    capacity: usize,
    lengths: &'b [usize],
    cursor: usize,
}

impl<'b> BerEncoder<'b> {
    pub(crate) fn new(structure: &'static str, buf: &'b mut [u8], lengths: &'b [usize]) -> Self {
        BerEncoder {
            structure,
            capacity: buf.len(),
            writer: SliceWriter::new(buf),
            pos: 0,
            lengths,
            cursor: 0,
        }
    }

    /// Number of octets written so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    fn lengths_consumed(&self) -> bool {
        self.cursor == self.lengths.len()
    }

    fn mismatch(&self, expected: usize, actual: usize) -> KrbError {
        error!(
            structure = self.structure,
            expected, actual, "encoding disagrees with the computed lengths"
        );
        KrbError::LengthMismatch {
            structure: self.structure,
            expected,
            actual,
        }
    }

    /// Runs a write of exactly `len` octets against the underlying der writer.
    fn write_with<F>(&mut self, len: usize, write: F) -> Result<(), KrbError>
    where
        F: FnOnce(&mut SliceWriter<'b>) -> der::Result<()>,
    {
        let required = self.pos + len;
        write(&mut self.writer).map_err(|err| {
            error!(
                ?err,
                structure = self.structure,
                required,
                capacity = self.capacity,
                "destination buffer exhausted"
            );
            KrbError::BufferOverflow {
                structure: self.structure,
                required,
                capacity: self.capacity,
            }
        })?;
        self.pos = required;
        Ok(())
    }

    fn write_header(&mut self, tag: u8, length: usize) -> Result<(), KrbError> {
        let length = Length::try_from(length)?;
        let header_len = 1 + usize::try_from(length.encoded_len()?)?;
        self.write_with(header_len, |writer| {
            writer.write_byte(tag)?;
            length.encode(writer)
        })
    }

    fn next_length(&mut self) -> Result<usize, KrbError> {
        match self.lengths.get(self.cursor) {
            Some(length) => {
                self.cursor += 1;
                Ok(*length)
            }
            None => Err(self.mismatch(self.lengths.len(), self.cursor + 1)),
        }
    }

    /// Writes a primitive TLV.
    pub(crate) fn primitive(&mut self, tag: u8, content: &[u8]) -> Result<(), KrbError> {
        let expected = self.next_length()?;
        if expected != content.len() {
            return Err(self.mismatch(expected, content.len()));
        }
        self.write_header(tag, expected)?;
        self.write_with(expected, |writer| writer.write(content))
    }

    /// Writes a primitive TLV whose content octets der produces from `value`.
    pub(crate) fn primitive_value<V: EncodeValue>(
        &mut self,
        tag: u8,
        value: &V,
    ) -> Result<(), KrbError> {
        let expected = self.next_length()?;
        let actual = value_width(value)?;
        if expected != actual {
            return Err(self.mismatch(expected, actual));
        }
        self.write_header(tag, expected)?;
        self.write_with(expected, |writer| value.encode_value(writer))
    }

    /// Writes a constructed TLV whose content is produced by `content`.
    pub(crate) fn constructed<F>(&mut self, tag: u8, content: F) -> Result<(), KrbError>
    where
        F: FnOnce(&mut Self) -> Result<(), KrbError>,
    {
        let expected = self.next_length()?;
        self.write_header(tag, expected)?;
        let start = self.pos;
        content(self)?;
        let actual = self.pos - start;
        if actual != expected {
            return Err(self.mismatch(expected, actual));
        }
        Ok(())
    }

    pub(crate) fn sequence<F>(&mut self, members: F) -> Result<(), KrbError>
    where
        F: FnOnce(&mut Self) -> Result<(), KrbError>,
    {
        self.constructed(tag::SEQUENCE, members)
    }

    /// Writes `[APPLICATION number] SEQUENCE { .. }`.
    pub(crate) fn application<F>(&mut self, number: u8, members: F) -> Result<(), KrbError>
    where
        F: FnOnce(&mut Self) -> Result<(), KrbError>,
    {
        self.constructed(tag::application(number), |encoder| encoder.sequence(members))
    }

    /// Writes `value` wrapped in the explicit context tag `[number]`.
    pub(crate) fn explicit<T: BerEncode>(&mut self, number: u8, value: &T) -> Result<(), KrbError> {
        self.constructed(tag::context(number), |encoder| value.encode(encoder))
    }

    pub(crate) fn explicit_opt<T: BerEncode>(
        &mut self,
        number: u8,
        value: &Option<T>,
    ) -> Result<(), KrbError> {
        match value {
            Some(value) => self.explicit(number, value),
            None => Ok(()),
        }
    }
}

/// A Kerberos ASN.1 value that can be written as BER.
pub trait BerEncode {
    /// ASN.1 name of the type, used when reporting errors.
    const NAME: &'static str;

    /// Records the content length of every TLV this value emits and returns
    /// the size of the complete encoding, tag and length octets included.
    fn compute_length(&self, cache: &mut LengthCache<'_>) -> Result<usize, KrbError>;

    /// Writes the value using the lengths recorded by [`BerEncode::compute_length`].
    fn encode(&self, encoder: &mut BerEncoder<'_>) -> Result<(), KrbError>;

    fn prepare(&self) -> Result<Prepared<'_, Self>, KrbError>
    where
        Self: Sized,
    {
        Prepared::new(self)
    }

    /// Computes the lengths and encodes in one step.
    fn serialize(&self) -> Result<Bytes, KrbError>
    where
        Self: Sized,
    {
        Prepared::new(self)?.to_bytes()
    }

    fn serialize_with(&self, config: &EncoderConfig) -> Result<Bytes, KrbError>
    where
        Self: Sized,
    {
        Prepared::with_config(self, config)?.to_bytes()
    }
}

/// A value together with its computed length plan.
///
/// The value stays borrowed while this exists, so the plan can not go stale.
#[derive(Debug)]
pub struct Prepared<'a, T: BerEncode> {
    value: &'a T,
    lengths: Vec<usize>,
    encoded_len: usize,
}

impl<'a, T: BerEncode> Prepared<'a, T> {
    pub fn new(value: &'a T) -> Result<Self, KrbError> {
        Self::with_config(value, &EncoderConfig::default())
    }

    pub fn with_config(value: &'a T, config: &EncoderConfig) -> Result<Self, KrbError> {
        let mut cache = LengthCache::new(config);
        let encoded_len = value.compute_length(&mut cache)?;

        if encoded_len > config.max_message_size {
            error!(
                structure = T::NAME,
                encoded_len,
                limit = config.max_message_size,
                "encoding exceeds the configured maximum message size"
            );
            return Err(KrbError::MessageTooLarge {
                structure: T::NAME,
                length: encoded_len,
                limit: config.max_message_size,
            });
        }

        let lengths = cache.into_lengths();
        trace!(
            structure = T::NAME,
            encoded_len,
            tlvs = lengths.len(),
            "computed length plan"
        );

        Ok(Prepared {
            value,
            lengths,
            encoded_len,
        })
    }

    /// Size of the complete encoding.
    pub fn encoded_len(&self) -> usize {
        self.encoded_len
    }

    /// Encodes into the front of `buf` and returns the number of octets written.
    ///
    /// Nothing is written when `buf` is shorter than [`Prepared::encoded_len`].
    pub fn encode_to_slice(&self, buf: &mut [u8]) -> Result<usize, KrbError> {
        if buf.len() < self.encoded_len {
            error!(
                structure = T::NAME,
                required = self.encoded_len,
                capacity = buf.len(),
                "destination buffer too small"
            );
            return Err(KrbError::BufferOverflow {
                structure: T::NAME,
                required: self.encoded_len,
                capacity: buf.len(),
            });
        }

        let mut encoder = BerEncoder::new(T::NAME, buf, &self.lengths);
        self.value.encode(&mut encoder)?;

        let written = encoder.position();
        if written != self.encoded_len || !encoder.lengths_consumed() {
            return Err(encoder.mismatch(self.encoded_len, written));
        }

        trace!(structure = T::NAME, written, "encoded");
        Ok(written)
    }

    /// Appends the encoding to `buf`. On error `buf` is left as it was.
    pub fn encode_into(&self, buf: &mut BytesMut) -> Result<usize, KrbError> {
        let start = buf.len();
        buf.resize(start + self.encoded_len, 0);
        let result = self.encode_to_slice(&mut buf[start..]);
        if result.is_err() {
            buf.truncate(start);
        }
        result
    }

    pub fn to_bytes(&self) -> Result<Bytes, KrbError> {
        let mut buf = BytesMut::with_capacity(self.encoded_len);
        self.encode_into(&mut buf)?;
        Ok(buf.freeze())
    }
}

/// INTEGER, content octets are the minimal two's complement form.
impl BerEncode for i32 {
    const NAME: &'static str = "INTEGER";

    fn compute_length(&self, cache: &mut LengthCache<'_>) -> Result<usize, KrbError> {
        cache.primitive(value_width(self)?)
    }

    fn encode(&self, encoder: &mut BerEncoder<'_>) -> Result<(), KrbError> {
        encoder.primitive_value(tag::INTEGER, self)
    }
}

/// UInt32, values with the top bit set gain a leading zero octet.
impl BerEncode for u32 {
    const NAME: &'static str = "INTEGER";

    fn compute_length(&self, cache: &mut LengthCache<'_>) -> Result<usize, KrbError> {
        cache.primitive(value_width(self)?)
    }

    fn encode(&self, encoder: &mut BerEncoder<'_>) -> Result<(), KrbError> {
        encoder.primitive_value(tag::INTEGER, self)
    }
}

/// OCTET STRING
impl BerEncode for Bytes {
    const NAME: &'static str = "OCTET STRING";

    fn compute_length(&self, cache: &mut LengthCache<'_>) -> Result<usize, KrbError> {
        cache.primitive(self.len())
    }

    fn encode(&self, encoder: &mut BerEncoder<'_>) -> Result<(), KrbError> {
        encoder.primitive(tag::OCTET_STRING, self)
    }
}

/// SEQUENCE OF, elements keep their insertion order.
impl<T: BerEncode> BerEncode for Vec<T> {
    const NAME: &'static str = "SEQUENCE OF";

    fn compute_length(&self, cache: &mut LengthCache<'_>) -> Result<usize, KrbError> {
        cache.sequence(|cache| {
            self.iter()
                .try_fold(0, |acc, element| Ok(acc + element.compute_length(cache)?))
        })
    }

    fn encode(&self, encoder: &mut BerEncoder<'_>) -> Result<(), KrbError> {
        encoder.sequence(|encoder| self.iter().try_for_each(|element| element.encode(encoder)))
    }
}
