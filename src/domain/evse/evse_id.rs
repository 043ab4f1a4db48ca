//! OCPI-compliant EVSE identifier value object

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, DomainResult};

// <CountryCode>*<PartyID>*<LocalEVSEID>
// CountryCode: 2-letter ISO 3166 alpha-2 code (e.g. "US", "NL")
// PartyID: 3-character uppercase alphanumeric code (e.g. "ABC")
// LocalEVSEID: 1-30 characters, scoped within the operator
static EVSE_ID_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Z]{2}\*[A-Z0-9]{3}\*[A-Za-z0-9_-]{1,30}$").expect("EVSE ID pattern compiles")
});

/// Validated EVSE identifier.
///
/// Construction through [`EvseId::new`] is the only validation point; an
/// `EvseId` in hand is always well-formed. Equality and hashing are by the
/// canonical string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EvseId(String);

impl EvseId {
    pub fn new(text: &str) -> DomainResult<Self> {
        if EVSE_ID_PATTERN.is_match(text) {
            Ok(Self(text.to_string()))
        } else {
            Err(DomainError::InvalidEvseIdFormat(text.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EvseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_ids() {
        for text in [
            "US*ABC*EVSE123",
            "NL*TNM*041503",
            "CN*A1B*x",
            "DE*0X9*local_id-with_all-chars_09",
            "FR*123*123456789012345678901234567890", // 30-char local part
        ] {
            let id = EvseId::new(text).unwrap();
            assert_eq!(id.as_str(), text);
            assert_eq!(id.to_string(), text);
        }
    }

    #[test]
    fn rejects_bad_country_codes() {
        assert!(EvseId::new("us*ABC*EVSE123").is_err());
        assert!(EvseId::new("U*ABC*EVSE123").is_err());
        assert!(EvseId::new("USA*ABC*EVSE123").is_err());
        assert!(EvseId::new("U1*ABC*EVSE123").is_err());
    }

    #[test]
    fn rejects_bad_party_ids() {
        assert!(EvseId::new("US*AB*EVSE123").is_err());
        assert!(EvseId::new("US*ABCD*EVSE123").is_err());
        assert!(EvseId::new("US*abc*EVSE123").is_err());
        assert!(EvseId::new("US*A-C*EVSE123").is_err());
    }

    #[test]
    fn rejects_bad_local_parts() {
        assert!(EvseId::new("US*ABC*").is_err());
        // 31 characters
        assert!(EvseId::new("US*ABC*1234567890123456789012345678901").is_err());
        assert!(EvseId::new("US*ABC*EVSE 123").is_err());
        assert!(EvseId::new("US*ABC*EVSE*123").is_err());
    }

    #[test]
    fn rejects_missing_separators_and_empty_input() {
        assert!(matches!(
            EvseId::new(""),
            Err(DomainError::InvalidEvseIdFormat(_))
        ));
        assert!(EvseId::new("USABCEVSE123").is_err());
        assert!(EvseId::new("US-ABC-EVSE123").is_err());
    }

    #[test]
    fn equality_is_by_canonical_string() {
        let a = EvseId::new("US*ABC*EVSE123").unwrap();
        let b = EvseId::new("US*ABC*EVSE123").unwrap();
        let c = EvseId::new("US*ABC*EVSE124").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
