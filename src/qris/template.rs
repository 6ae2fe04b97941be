use super::{COUNTRY_MARKER, POI_STATIC};
use crate::error::{NiagaError, Result};

/// A validated static merchant QRIS template.
///
/// The template is the EMV-QR payload printed on the merchant's static QR
/// standee: point of initiation `11`, merchant account info, country/currency
/// block, terminated by a 4-character CRC16 checksum. `parse` enforces the
/// structural assumptions the encoder relies on; the trailing checksum itself
/// is not verified because it is discarded during encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticTemplate(String);

impl StaticTemplate {
    /// Validates an operator-provided template string.
    ///
    /// Rejects empty input (missing configuration), non-ASCII input, input
    /// too short to carry a checksum, a body without the static point of
    /// initiation field, and a body with zero or multiple country-code
    /// markers. A single marker is required so the amount insertion point is
    /// unambiguous.
    pub fn parse(value: &str) -> Result<Self> {
        let raw = value.trim();
        if raw.is_empty() {
            return Err(NiagaError::Configuration(
                "static QRIS template missing".to_string(),
            ));
        }
        if !raw.is_ascii() {
            return Err(NiagaError::Template(
                "template contains non-ASCII characters".to_string(),
            ));
        }
        if raw.len() <= 4 {
            return Err(NiagaError::Template(
                "template too short to carry a trailing checksum".to_string(),
            ));
        }

        let body = &raw[..raw.len() - 4];
        match body.matches(COUNTRY_MARKER).count() {
            1 => {}
            0 => {
                return Err(NiagaError::Template(format!(
                    "country code field {COUNTRY_MARKER} not found"
                )));
            }
            n => {
                return Err(NiagaError::Template(format!(
                    "country code field {COUNTRY_MARKER} occurs {n} times, expected exactly one"
                )));
            }
        }
        if !body.contains(POI_STATIC) {
            return Err(NiagaError::Template(format!(
                "static point of initiation field {POI_STATIC} not found"
            )));
        }

        Ok(Self(raw.to_string()))
    }

    /// The template without its trailing 4-character checksum.
    pub fn body(&self) -> &str {
        &self.0[..self.0.len() - 4]
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NiagaError;

    const TEMPLATE: &str =
        "00020101021129320014ID.CO.QRIS.WWW0210NIAGA1234553033605802ID5905NIAGA6007JAKARTA6304ABCD";

    #[test]
    fn test_parse_valid_template() {
        let template = StaticTemplate::parse(TEMPLATE).unwrap();
        assert_eq!(template.as_str(), TEMPLATE);
        assert_eq!(template.body(), &TEMPLATE[..TEMPLATE.len() - 4]);
    }

    #[test]
    fn test_parse_trims_surrounding_whitespace() {
        let template = StaticTemplate::parse(&format!("  {TEMPLATE}\n")).unwrap();
        assert_eq!(template.as_str(), TEMPLATE);
    }

    #[test]
    fn test_empty_template_is_configuration_error() {
        for value in ["", "   ", "\n"] {
            assert!(matches!(
                StaticTemplate::parse(value),
                Err(NiagaError::Configuration(_))
            ));
        }
    }

    #[test]
    fn test_too_short_template() {
        assert!(matches!(
            StaticTemplate::parse("ABCD"),
            Err(NiagaError::Template(_))
        ));
    }

    #[test]
    fn test_missing_country_marker() {
        let value = "00020101021129370016ID.CO.EXAMPLE.WWW5905NIAGA6304ABCD";
        assert!(matches!(
            StaticTemplate::parse(value),
            Err(NiagaError::Template(_))
        ));
    }

    #[test]
    fn test_duplicate_country_marker() {
        let value = "0002010102115802ID5802ID6304ABCD";
        assert!(matches!(
            StaticTemplate::parse(value),
            Err(NiagaError::Template(_))
        ));
    }

    #[test]
    fn test_marker_only_inside_checksum_does_not_count() {
        // The trailing 4 characters are checksum, not body; a marker that
        // straddles into them must not satisfy validation.
        let value = "0002010102115905NIAGA5802ID";
        assert!(matches!(
            StaticTemplate::parse(value),
            Err(NiagaError::Template(_))
        ));
    }

    #[test]
    fn test_missing_static_point_of_initiation() {
        let value = "00020101021229370016ID.CO.EXAMPLE.WWW5802ID5905NIAGA6304ABCD";
        assert!(matches!(
            StaticTemplate::parse(value),
            Err(NiagaError::Template(_))
        ));
    }

    #[test]
    fn test_non_ascii_template() {
        let value = "000201010211ラーメン5802ID6304ABCD";
        assert!(matches!(
            StaticTemplate::parse(value),
            Err(NiagaError::Template(_))
        ));
    }
}
