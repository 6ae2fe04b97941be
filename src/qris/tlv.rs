//! Structured view over EMV-QR payloads.
//!
//! The encoder deliberately splices strings instead of re-serializing, so
//! this module is read-only: it parses a payload into flat tag-length-value
//! records for inspection and checksum verification. Nested merchant account
//! templates are kept as opaque values.

use super::crc16_ccitt_false;
use crate::error::{NiagaError, Result};
use serde::Serialize;

const TAG_POINT_OF_INITIATION: &str = "01";
const TAG_AMOUNT: &str = "54";
const TAG_COUNTRY_CODE: &str = "58";
const TAG_MERCHANT_NAME: &str = "59";
const TAG_CRC: &str = "63";

/// A single top-level EMV-QR field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    pub tag: String,
    pub value: String,
}

/// Parses a payload into its top-level fields.
///
/// Each field is a 2-character tag, a 2-digit decimal length, and that many
/// characters of value. Truncated or non-numeric input is an error.
pub fn parse(payload: &str) -> Result<Vec<Field>> {
    if !payload.is_ascii() {
        return Err(NiagaError::Payload(
            "payload contains non-ASCII characters".to_string(),
        ));
    }

    let mut fields = Vec::new();
    let mut pos = 0;
    while pos < payload.len() {
        if pos + 4 > payload.len() {
            return Err(NiagaError::Payload(format!(
                "truncated field header at offset {pos}"
            )));
        }
        let tag = &payload[pos..pos + 2];
        let length: usize = payload[pos + 2..pos + 4].parse().map_err(|_| {
            NiagaError::Payload(format!("non-numeric length for tag {tag} at offset {pos}"))
        })?;
        let end = pos + 4 + length;
        if end > payload.len() {
            return Err(NiagaError::Payload(format!(
                "field {tag} declares length {length} past end of payload"
            )));
        }
        fields.push(Field {
            tag: tag.to_string(),
            value: payload[pos + 4..end].to_string(),
        });
        pos = end;
    }
    Ok(fields)
}

/// Well-known fields extracted from a parsed payload, plus the result of
/// recomputing the checksum over everything preceding the CRC value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub point_of_initiation: Option<String>,
    pub merchant_name: Option<String>,
    pub amount: Option<String>,
    pub country_code: Option<String>,
    pub crc: Option<String>,
    pub crc_valid: bool,
}

pub fn summarize(payload: &str) -> Result<Summary> {
    let fields = parse(payload)?;
    let find = |tag: &str| {
        fields
            .iter()
            .find(|f| f.tag == tag)
            .map(|f| f.value.clone())
    };

    let crc = find(TAG_CRC);
    let crc_valid = match &crc {
        Some(value) if value.len() == 4 && payload.len() > 4 => {
            *value == crc16_ccitt_false(&payload[..payload.len() - 4])
        }
        _ => false,
    };

    Ok(Summary {
        point_of_initiation: find(TAG_POINT_OF_INITIATION),
        merchant_name: find(TAG_MERCHANT_NAME),
        amount: find(TAG_AMOUNT),
        country_code: find(TAG_COUNTRY_CODE),
        crc,
        crc_valid,
    })
}
