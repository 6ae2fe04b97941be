use super::{COUNTRY_MARKER, POI_DYNAMIC, POI_STATIC, StaticTemplate, crc16_ccitt_false};
use crate::domain::amount::Amount;

/// Builds dynamic QRIS payloads from a validated static template.
///
/// The template is decomposed once at construction: its trailing checksum is
/// dropped, the point of initiation is flipped from static (`11`) to dynamic
/// (`12`), and the body is split at the country-code field where the
/// transaction amount is inserted. `payload` is then a pure, infallible
/// string assembly plus a checksum.
#[derive(Debug, Clone)]
pub struct QrisEncoder {
    prefix: String,
    suffix: String,
}

impl QrisEncoder {
    pub fn new(template: StaticTemplate) -> Self {
        let body = template.body().replacen(POI_STATIC, POI_DYNAMIC, 1);
        // StaticTemplate guarantees exactly one marker in the body.
        let (prefix, suffix) = match body.split_once(COUNTRY_MARKER) {
            Some((left, right)) => (left.to_string(), right.to_string()),
            None => unreachable!("validated template always contains {COUNTRY_MARKER}"),
        };
        Self { prefix, suffix }
    }

    /// Produces the dynamic payload for a single transaction.
    ///
    /// The amount field is EMV tag `54`, a 2-digit zero-padded length, and
    /// the amount's decimal digits, followed by the reinserted country-code
    /// field. The returned string ends with the freshly computed CRC16 of
    /// everything preceding it.
    pub fn payload(&self, amount: Amount) -> String {
        let digits = amount.to_string();
        let body = format!(
            "{}54{:02}{digits}{COUNTRY_MARKER}{}",
            self.prefix,
            digits.len(),
            self.suffix
        );
        let crc = crc16_ccitt_false(&body);
        body + &crc
    }
}
