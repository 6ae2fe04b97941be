//! QRIS payload construction.
//!
//! This module turns a merchant's static QRIS code (an EMV-QR payload issued
//! by the acquirer, terminated with a CRC16 checksum) into a dynamic payload
//! carrying a fixed transaction amount. The construction is bit-exact against
//! the payloads accepted by deployed QRIS readers: fixed-offset splicing of
//! the validated template, never a re-serialization.

pub mod crc16;
pub mod payload;
pub mod template;
pub mod tlv;

pub use crc16::crc16_ccitt_false;
pub use payload::QrisEncoder;
pub use template::StaticTemplate;

/// EMV-QR "Point of Initiation Method" field (tag 01) with value 11: static,
/// reusable code without an amount.
pub(crate) const POI_STATIC: &str = "010211";

/// Same field with value 12: dynamic, single-transaction code.
pub(crate) const POI_DYNAMIC: &str = "010212";

/// Country code field (tag 58, length 02, value ID). The transaction amount
/// field is inserted immediately before it.
pub(crate) const COUNTRY_MARKER: &str = "5802ID";
