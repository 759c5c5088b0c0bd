use std::collections::HashMap;

use serde::{Serialize, Deserialize};
use validator::{Validate, ValidationError};

pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

#[derive(Debug, Serialize, Deserialize, Validate, Clone, Default, PartialEq)]
pub struct ContactForm {
    #[validate(length(min = 1, max = 100), custom = "validate_not_blank")]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, max = 2000), custom = "validate_not_blank")]
    pub message: String,
}

fn field_message(field: &str) -> &'static str {
    match field {
        "name" => "Kerro nimesi",
        "email" => "Tarkista sähköpostiosoite",
        "message" => "Kirjoita viesti (enintään 2000 merkkiä)",
        _ => "Tarkista kenttä",
    }
}

impl ContactForm {
    /// Copy with surrounding whitespace stripped from every field.
    pub fn normalized(&self) -> Self {
        ContactForm {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }

    /// Finnish message per invalid field of the normalized form; empty when
    /// it is valid.
    pub fn field_messages(&self) -> HashMap<&'static str, &'static str> {
        match self.normalized().validate() {
            Ok(()) => HashMap::new(),
            Err(errors) => errors
                .field_errors()
                .keys()
                .map(|field| (*field, field_message(field)))
                .collect(),
        }
    }

    pub fn subject(&self) -> String {
        format!("Yhteydenotto: {}", self.name.trim())
    }

    pub fn body(&self) -> String {
        format!("{}\n\n{}\n{}", self.message.trim(), self.name.trim(), self.email.trim())
    }
}

/// `mailto:` link carrying the form as a percent-encoded subject and body.
pub fn mailto_uri(to: &str, form: &ContactForm) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        to,
        urlencoding::encode(&form.subject()),
        urlencoding::encode(&form.body())
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::CONTACT_EMAIL;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Aino Virtanen".to_string(),
            email: "aino@example.fi".to_string(),
            message: "Tarvitsemme videon & kuvat!".to_string(),
        }
    }

    #[test]
    fn test_valid_form_passes() {
        assert!(filled().validate().is_ok());
    }

    #[test]
    fn test_invalid_fields_are_reported() {
        let form = ContactForm {
            name: "   ".to_string(),
            email: "not-an-email".to_string(),
            message: String::new(),
        };
        let errors = form.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("message"));
    }

    #[test]
    fn test_field_messages() {
        assert!(filled().field_messages().is_empty());
        let form = ContactForm { email: "aino".to_string(), ..filled() };
        let messages = form.field_messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages.get("email"), Some(&"Tarkista sähköpostiosoite"));
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        let form = ContactForm {
            name: "  Aino Virtanen".to_string(),
            email: "aino@example.fi ".to_string(),
            message: "\nTarvitsemme videon & kuvat!\n".to_string(),
        };
        assert!(form.field_messages().is_empty());
        assert_eq!(form.normalized(), filled());
        assert_eq!(mailto_uri(CONTACT_EMAIL, &form), mailto_uri(CONTACT_EMAIL, &filled()));
    }

    #[test]
    fn test_inner_whitespace_in_email_is_rejected() {
        let form = ContactForm { email: "aino @example.fi".to_string(), ..filled() };
        assert_eq!(form.field_messages().get("email"), Some(&"Tarkista sähköpostiosoite"));
    }

    #[test]
    fn test_message_length_cap() {
        let form = ContactForm { message: "a".repeat(2001), ..filled() };
        assert!(form.validate().unwrap_err().field_errors().contains_key("message"));
    }

    #[test]
    fn test_mailto_percent_encodes() {
        let uri = mailto_uri(CONTACT_EMAIL, &filled());
        assert!(uri.starts_with("mailto:vili@matilda.media?subject="));
        assert!(uri.contains("subject=Yhteydenotto%3A%20Aino%20Virtanen"));
        assert!(uri.contains("&body=Tarvitsemme%20videon%20%26%20kuvat%21%0A%0AAino%20Virtanen%0Aaino%40example.fi"));
        // Exactly one query separator and one field separator survive.
        assert_eq!(uri.matches('?').count(), 1);
        assert_eq!(uri.matches('&').count(), 1);
    }
}
