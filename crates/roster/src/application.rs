//! Partner applications (signup requests awaiting review).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use ashroy_auth::ContactInfo;
use ashroy_core::{AccountId, DomainError, DomainResult, Entity};

/// Review lifecycle of an application.
///
/// Only `Pending` applications are ever held by a directory; reaching a terminal
/// state removes the application from the pending collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

/// Raw signup form as the partner fills it in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApplicationForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
    pub property_name: String,
    pub property_address: String,
    pub property_description: String,
    pub documents: Vec<String>,
}

impl ApplicationForm {
    /// Required-field checks performed before a submission reaches the directory.
    ///
    /// The password only has to be present and confirmed; it is not carried into
    /// the application.
    pub fn validate(&self) -> DomainResult<ApplicationDetails> {
        require(&self.name, "name")?;
        require(&self.email, "email")?;
        if !self.email.contains('@') {
            return Err(DomainError::validation("invalid email format"));
        }
        require(&self.phone, "phone")?;
        if self.password.is_empty() {
            return Err(DomainError::validation("password is required"));
        }
        if self.password != self.confirm_password {
            return Err(DomainError::validation("passwords do not match"));
        }
        require(&self.property_name, "property name")?;
        require(&self.property_address, "property address")?;
        require(&self.property_description, "property description")?;

        Ok(ApplicationDetails {
            contact: ContactInfo::new(self.name.trim(), self.email.trim(), self.phone.trim()),
            property_name: self.property_name.trim().to_string(),
            property_address: self.property_address.trim().to_string(),
            property_description: self.property_description.trim().to_string(),
            documents: self.documents.clone(),
        })
    }
}

fn require(value: &str, field: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::validation(format!("{field} is required")));
    }
    Ok(())
}

/// Validated application content, ready to be submitted.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationDetails {
    #[serde(flatten)]
    pub contact: ContactInfo,
    pub property_name: String,
    #[serde(default)]
    pub property_address: String,
    #[serde(default)]
    pub property_description: String,
    /// Opaque handles of uploaded documents.
    #[serde(default)]
    pub documents: Vec<String>,
}

/// A pending request to become a partner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerApplication {
    pub id: AccountId,
    #[serde(flatten)]
    pub details: ApplicationDetails,
    pub status: ApplicationStatus,
    pub submitted_at: DateTime<Utc>,
}

impl PartnerApplication {
    pub fn new(id: AccountId, details: ApplicationDetails, submitted_at: DateTime<Utc>) -> Self {
        Self {
            id,
            details,
            status: ApplicationStatus::Pending,
            submitted_at,
        }
    }

    pub fn contact(&self) -> &ContactInfo {
        &self.details.contact
    }

    pub fn is_pending(&self) -> bool {
        self.status == ApplicationStatus::Pending
    }
}

impl Entity for PartnerApplication {
    type Id = AccountId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> ApplicationForm {
        ApplicationForm {
            name: "Sarah Johnson".to_string(),
            email: "sarah@example.com".to_string(),
            phone: "+919876543211".to_string(),
            password: "s3cret".to_string(),
            confirm_password: "s3cret".to_string(),
            property_name: "Mountain View Resort".to_string(),
            property_address: "123 Hill Road, Manali".to_string(),
            property_description: "A beautiful resort with mountain views".to_string(),
            documents: vec!["property_deed.pdf".to_string()],
        }
    }

    #[test]
    fn valid_form_yields_details_without_password() {
        let details = form().validate().unwrap();
        assert_eq!(details.contact.name, "Sarah Johnson");
        assert_eq!(details.property_name, "Mountain View Resort");
        assert_eq!(details.documents, vec!["property_deed.pdf".to_string()]);
    }

    #[test]
    fn blank_required_field_is_rejected() {
        let f = ApplicationForm {
            property_address: "   ".to_string(),
            ..form()
        };
        assert_eq!(
            f.validate(),
            Err(DomainError::validation("property address is required"))
        );
    }

    #[test]
    fn email_must_contain_at_sign() {
        let f = ApplicationForm {
            email: "sarah.example.com".to_string(),
            ..form()
        };
        assert_eq!(f.validate(), Err(DomainError::validation("invalid email format")));
    }

    #[test]
    fn password_confirmation_must_match() {
        let f = ApplicationForm {
            confirm_password: "other".to_string(),
            ..form()
        };
        assert_eq!(f.validate(), Err(DomainError::validation("passwords do not match")));
    }

    #[test]
    fn documents_are_optional() {
        let f = ApplicationForm {
            documents: vec![],
            ..form()
        };
        assert!(f.validate().unwrap().documents.is_empty());
    }

    #[test]
    fn new_application_is_pending() {
        let app = PartnerApplication::new(
            AccountId::from_u128(3),
            form().validate().unwrap(),
            Utc::now(),
        );
        assert!(app.is_pending());
        assert_eq!(app.contact().email, "sarah@example.com");
    }

    #[test]
    fn serializes_in_signup_shape() {
        let app = PartnerApplication::new(
            AccountId::from_u128(3),
            form().validate().unwrap(),
            Utc::now(),
        );
        let v = serde_json::to_value(&app).unwrap();
        assert_eq!(v["status"], "pending");
        assert_eq!(v["propertyName"], "Mountain View Resort");
        assert_eq!(v["email"], "sarah@example.com");
        assert!(v.get("password").is_none());
    }
}
