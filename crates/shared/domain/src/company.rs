//! Company domain entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;
use validator::Validate;

use crate::document::{Document, DocumentKind};
use crate::error::DomainResult;
use crate::phone::PhoneNumber;
use crate::user::normalize_email;
use crate::validation::{validate_company_document, validate_phone};

/// Company domain entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub id: Uuid,
    pub name: String,
    pub fantasy_name: Option<String>,
    /// Bare CNPJ digits
    pub document: String,
    pub document_type: DocumentKind,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub phone_country: Option<String>,
    /// Free-form postal address
    pub address: Option<Value>,
    pub logo: Option<String>,
    pub website: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Company {
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    pub fn is_active(&self) -> bool {
        self.deleted_at.is_none()
    }

    /// Same rule as users: unrecognized numbers clear phone and country.
    pub fn assign_phone(&mut self, phone: Option<&str>, default_country: &str) {
        let parsed = phone.and_then(|raw| PhoneNumber::parse(raw, default_country));
        self.phone_country = parsed.as_ref().map(PhoneNumber::phone_country);
        self.phone = parsed.map(|p| p.e164().to_string());
    }

    /// Validate and apply `changes`, then re-derive the phone country.
    pub fn apply_update(&mut self, changes: UpdateCompany, default_country: &str) -> DomainResult<()> {
        changes.validate()?;

        if let Some(name) = changes.name {
            self.name = name.trim().to_string();
        }
        if let Some(fantasy_name) = changes.fantasy_name {
            self.fantasy_name = Some(fantasy_name.trim().to_string());
        }
        if let Some(email) = changes.email {
            self.email = Some(normalize_email(&email));
        }
        if changes.address.is_some() {
            self.address = changes.address;
        }
        if changes.logo.is_some() {
            self.logo = changes.logo;
        }
        if changes.website.is_some() {
            self.website = changes.website;
        }

        let phone = changes.phone.or_else(|| self.phone.take());
        self.assign_phone(phone.as_deref(), default_country);
        self.updated_at = Utc::now();
        Ok(())
    }

    pub fn soft_delete(&mut self) {
        let now = Utc::now();
        self.deleted_at = Some(now);
        self.updated_at = now;
    }
}

/// Company creation request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCompany {
    #[validate(length(min = 3, message = "Name must be at least 3 characters"))]
    pub name: String,
    pub fantasy_name: Option<String>,
    /// CNPJ, with or without punctuation
    #[validate(custom(function = "validate_company_document"))]
    pub document: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    #[validate(custom(function = "validate_phone"))]
    pub phone: Option<String>,
    pub address: Option<Value>,
    #[validate(url(message = "Invalid logo URL"))]
    pub logo: Option<String>,
    #[validate(url(message = "Invalid website URL"))]
    pub website: Option<String>,
}

impl CreateCompany {
    /// Validate and normalize into a record ready to persist.
    pub fn into_company(self, id: Uuid, default_country: &str) -> DomainResult<Company> {
        self.validate()?;

        let document = Document::parse_as(&self.document, DocumentKind::Cnpj)?;

        let now = Utc::now();
        let mut company = Company {
            id,
            name: self.name.trim().to_string(),
            fantasy_name: self.fantasy_name.map(|n| n.trim().to_string()),
            document_type: document.kind(),
            document: document.into_string(),
            email: self.email.as_deref().map(normalize_email),
            phone: None,
            phone_country: None,
            address: self.address,
            logo: self.logo,
            website: self.website,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };
        company.assign_phone(self.phone.as_deref(), default_country);

        Ok(company)
    }
}

/// Company update request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateCompany {
    #[validate(length(min = 3, message = "Name must be at least 3 characters"))]
    pub name: Option<String>,
    pub fantasy_name: Option<String>,
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    #[validate(custom(function = "validate_phone"))]
    pub phone: Option<String>,
    pub address: Option<Value>,
    #[validate(url(message = "Invalid logo URL"))]
    pub logo: Option<String>,
    #[validate(url(message = "Invalid website URL"))]
    pub website: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DomainError;
    use serde_json::json;

    fn acme() -> CreateCompany {
        CreateCompany {
            name: "Acme Ltda".to_string(),
            fantasy_name: Some(" Acme ".to_string()),
            document: "11.222.333/0001-81".to_string(),
            email: Some("Contact@Acme.com".to_string()),
            phone: Some("(11) 3333-4444".to_string()),
            address: Some(json!({ "city": "São Paulo", "state": "SP" })),
            logo: None,
            website: Some("https://acme.example.com".to_string()),
        }
    }

    #[test]
    fn test_into_company_normalizes() {
        let company = acme().into_company(Uuid::new_v4(), "BR").unwrap();

        assert_eq!(company.document, "11222333000181");
        assert_eq!(company.document_type, DocumentKind::Cnpj);
        assert_eq!(company.fantasy_name.as_deref(), Some("Acme"));
        assert_eq!(company.email.as_deref(), Some("contact@acme.com"));
        assert_eq!(company.phone.as_deref(), Some("+551133334444"));
        assert_eq!(company.phone_country.as_deref(), Some("BR:+55"));
        assert_eq!(company.address, Some(json!({ "city": "São Paulo", "state": "SP" })));
    }

    #[test]
    fn test_company_requires_cnpj() {
        let mut input = acme();
        input.document = "123.456.789-09".to_string();

        let err = input.into_company(Uuid::new_v4(), "BR").unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn test_company_rejects_bad_website() {
        let mut input = acme();
        input.website = Some("not a url".to_string());

        assert!(input.into_company(Uuid::new_v4(), "BR").is_err());
    }

    #[test]
    fn test_apply_update() {
        let mut company = acme().into_company(Uuid::new_v4(), "BR").unwrap();

        company
            .apply_update(
                UpdateCompany {
                    name: Some("Acme Holdings".to_string()),
                    email: Some("SALES@ACME.COM".to_string()),
                    ..Default::default()
                },
                "BR",
            )
            .unwrap();

        assert_eq!(company.name, "Acme Holdings");
        assert_eq!(company.email.as_deref(), Some("sales@acme.com"));
        assert_eq!(company.phone_country.as_deref(), Some("BR:+55"));
    }

    #[test]
    fn test_apply_update_validates() {
        let mut company = acme().into_company(Uuid::new_v4(), "BR").unwrap();

        let result = company.apply_update(
            UpdateCompany {
                name: Some("Ac".to_string()),
                ..Default::default()
            },
            "BR",
        );

        assert!(result.is_err());
        assert_eq!(company.name, "Acme Ltda");
    }
}
