use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate
// ============================================================================

/// Customer record managed by the admin side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: i32,
    pub name: String,
    pub email: String,

    #[serde(default)]
    pub phone: Option<String>,

    #[serde(default)]
    pub address: Option<String>,

    #[serde(rename = "isActive")]
    pub is_active: bool,

    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO for creating/updating a customer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerDto {
    pub id: Option<i32>,
    pub name: String,
    pub email: String,

    #[serde(default)]
    pub phone: Option<String>,

    #[serde(default)]
    pub address: Option<String>,

    #[serde(rename = "isActive")]
    pub is_active: bool,
}

impl Default for CustomerDto {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            email: String::new(),
            phone: None,
            address: None,
            is_active: true,
        }
    }
}

impl CustomerDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Name must not be empty".into());
        }
        if self.email.trim().is_empty() {
            return Err("Email must not be empty".into());
        }
        if !self.email.contains('@') {
            return Err("Email must contain '@'".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_dto_passes() {
        let dto = CustomerDto {
            name: "Acme Facilities".into(),
            email: "front-desk@acme.example".into(),
            ..Default::default()
        };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn rejects_blank_name_and_bad_email() {
        let mut dto = CustomerDto {
            name: "  ".into(),
            email: "a@b".into(),
            ..Default::default()
        };
        assert!(dto.validate().is_err());

        dto.name = "Someone".into();
        dto.email = "not-an-email".into();
        assert!(dto.validate().is_err());
    }
}
