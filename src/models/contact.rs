use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Contact {
    pub fn new(name: String, phone: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            phone,
            email: None,
            address: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Bump the modification stamp. Call after changing any field.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Lowercased name, the collection's sort and uniqueness key.
    pub fn sort_key(&self) -> String {
        self.name.to_lowercase()
    }
}

static PHONE_RE: OnceLock<Regex> = OnceLock::new();
static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

/// Phone numbers may contain digits, spaces, dashes, parentheses, and plus
/// signs. The empty string passes; required-field checks are separate.
pub fn is_valid_phone(phone: &str) -> bool {
    let re = PHONE_RE.get_or_init(|| Regex::new(r"^[0-9\s()+-]+$").expect("phone pattern"));
    phone.is_empty() || re.is_match(phone)
}

/// Minimal `local@domain.tld` shape. The empty string passes.
pub fn is_valid_email(email: &str) -> bool {
    let re =
        EMAIL_RE.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern"));
    email.is_empty() || re.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_contact() {
        let c = Contact::new("Ada Lovelace".to_string(), "555-0100".to_string());
        assert_eq!(c.name, "Ada Lovelace");
        assert_eq!(c.phone, "555-0100");
        assert!(c.email.is_none());
        assert!(c.address.is_none());
        assert_eq!(c.created_at, c.updated_at);
    }

    #[test]
    fn test_touch_bumps_updated_at() {
        let mut c = Contact::new("Ada".to_string(), "555".to_string());
        let before = c.updated_at;
        c.touch();
        assert!(c.updated_at >= before);
    }

    #[test]
    fn test_sort_key_lowercases() {
        let c = Contact::new("ZELDA".to_string(), "1".to_string());
        assert_eq!(c.sort_key(), "zelda");
    }

    #[test]
    fn test_valid_phone() {
        assert!(is_valid_phone("555-0100"));
        assert!(is_valid_phone("+1 (555) 010 0100"));
        assert!(is_valid_phone("0040 21 555"));
        assert!(!is_valid_phone("555-CALL"));
        assert!(!is_valid_phone("five"));
        assert!(!is_valid_phone("555_0100"));
    }

    #[test]
    fn test_empty_phone_passes_validator() {
        // The required-field check lives in the store, not here.
        assert!(is_valid_phone(""));
    }

    #[test]
    fn test_valid_email() {
        assert!(is_valid_email("test@example.com"));
        assert!(is_valid_email("user.name@domain.co.uk"));
        assert!(is_valid_email(""));
        assert!(!is_valid_email("invalid"));
        assert!(!is_valid_email("@domain.com"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("user@domain"));
        assert!(!is_valid_email("user name@domain.com"));
    }

    #[test]
    fn test_optional_fields_default_on_load() {
        let c: Contact = serde_json::from_str(
            r#"{
                "id": "67e55044-10b1-426f-9247-bb680e5fe0c8",
                "name": "Ada",
                "phone": "555",
                "created_at": "2024-01-01T00:00:00Z",
                "updated_at": "2024-01-01T00:00:00Z"
            }"#,
        )
        .unwrap();
        assert!(c.email.is_none());
        assert!(c.address.is_none());
    }
}
