//! BER encoding of the Kerberos 5 (RFC 4120) ASN.1 structures.
//!
//! Every structure in [`asn1`] implements [`BerEncode`]. Build the value,
//! then either call [`BerEncode::serialize`] or, when the size is needed
//! before writing, [`BerEncode::prepare`] and one of the [`Prepared`] writers.
//!
//! ```
//! use libkrime_asn1::asn1::checksum::Checksum;
//! use libkrime_asn1::BerEncode;
//!
//! let cksum = Checksum::new(1, vec![0x01, 0x02, 0x03]);
//! let bytes = cksum.serialize().expect("encoding failed");
//! assert_eq!(bytes.len(), 14);
//! ```

// #![deny(warnings)]

#![warn(unused_extern_crates)]
// Enable some groups of clippy lints.
#![deny(clippy::suspicious)]
#![deny(clippy::perf)]
// Specific lints to enforce.
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::trivially_copy_pass_by_ref)]
#![deny(clippy::disallowed_types)]
#![deny(clippy::manual_let_else)]
#![allow(clippy::unreachable)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

pub mod asn1;
pub mod config;
pub mod constants;
pub mod error;

pub use crate::asn1::{BerEncode, Prepared};
pub use crate::config::EncoderConfig;
pub use crate::error::{KrbError, KrbErrorKind};
