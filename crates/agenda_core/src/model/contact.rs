//! Contact record.
//!
//! # Invariants
//! - `email` must match the basic `local@domain` pattern; full RFC 5322
//!   conformance is out of scope.
//! - `photo` holds a data-URI preview when present, never a file path.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::{require_non_empty, RecordId, ValidationError};

/// Salutations offered by contact forms. The list is fixed but
/// deliberately small; the trailing entry covers everything else.
pub const SALUTATIONS: &[&str] = &["Mr.", "Mrs.", "Ms.", "Dr.", "Prof.", "Eng.", "Other"];

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("e-mail pattern compiles"));

/// Person record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: RecordId,
    pub salutation: String,
    pub full_name: String,
    /// National identification number; opaque text.
    pub id_number: String,
    pub email: String,
    pub phone: String,
    /// Data-URI photo preview, absent when none was captured.
    #[serde(default, rename = "photoUrl")]
    pub photo: Option<String>,
}

impl Contact {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty(&self.full_name, "contact", "fullName")?;
        require_non_empty(&self.id_number, "contact", "idNumber")?;
        require_non_empty(&self.email, "contact", "email")?;
        require_non_empty(&self.phone, "contact", "phone")?;
        if !EMAIL_RE.is_match(&self.email) {
            return Err(ValidationError::InvalidEmail(self.email.clone()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn sample_contact() -> Contact {
        Contact {
            id: Uuid::new_v4(),
            salutation: "Dr.".to_string(),
            full_name: "Laura Ramos".to_string(),
            id_number: "10000005".to_string(),
            email: "laura.ramos@example.com".to_string(),
            phone: "+56910000005".to_string(),
            photo: None,
        }
    }

    #[test]
    fn validate_accepts_well_formed_contact() {
        assert!(sample_contact().validate().is_ok());
    }

    #[test]
    fn validate_rejects_malformed_email() {
        let mut contact = sample_contact();
        contact.email = "laura.ramos".to_string();
        assert!(matches!(
            contact.validate(),
            Err(ValidationError::InvalidEmail(_))
        ));
    }

    #[test]
    fn photo_round_trips_under_external_name() {
        let mut contact = sample_contact();
        contact.photo = Some("data:image/png;base64,AAAA".to_string());
        let json = serde_json::to_value(&contact).unwrap();
        assert!(json["photoUrl"].is_string());
        let back: Contact = serde_json::from_value(json).unwrap();
        assert_eq!(back, contact);
    }
}
