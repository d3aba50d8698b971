//! User domain entity and the provisioning pipeline that produces it.
//!
//! A registration is turned into a storable record by explicit steps:
//! validate the request, normalize identifiers, hash the password, derive
//! the phone country. Updates re-run the phone step so `phone_country`
//! always matches `phone`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::document::{Document, DocumentKind};
use crate::error::DomainResult;
use crate::password::Password;
use crate::phone::PhoneNumber;
use crate::validation::{validate_document, validate_phone};

/// User domain entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    /// Bare document digits
    pub document: String,
    pub document_type: DocumentKind,
    /// E.164 phone number
    pub phone: Option<String>,
    /// `"{ISO2}:+{calling code}"` derived from `phone`
    pub phone_country: Option<String>,
    pub password_hash: String,
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Soft delete timestamp (None = active, Some = deleted)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl User {
    /// Check if user is soft deleted
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Check if user is active (not deleted)
    pub fn is_active(&self) -> bool {
        self.deleted_at.is_none()
    }

    /// Check a plain-text password against the stored hash
    pub fn password_matches(&self, plain_text: &str) -> bool {
        Password::from_hash(self.password_hash.clone()).verify(plain_text)
    }

    /// Store `phone` in E.164 form with its country, or clear both when the
    /// number is missing or unrecognized.
    pub fn assign_phone(&mut self, phone: Option<&str>, default_country: &str) {
        let parsed = phone.and_then(|raw| PhoneNumber::parse(raw, default_country));
        self.phone_country = parsed.as_ref().map(PhoneNumber::phone_country);
        self.phone = parsed.map(|p| p.e164().to_string());
    }

    /// Validate and apply `changes`, then re-derive the phone country.
    pub fn apply_update(&mut self, changes: UpdateUser, default_country: &str) -> DomainResult<()> {
        changes.validate()?;

        if let Some(name) = changes.name {
            self.name = name.trim().to_string();
        }
        if let Some(avatar) = changes.avatar {
            self.avatar = Some(avatar);
        }

        let phone = changes.phone.or_else(|| self.phone.take());
        self.assign_phone(phone.as_deref(), default_country);
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Soft delete the user
    pub fn soft_delete(&mut self) {
        let now = Utc::now();
        self.deleted_at = Some(now);
        self.updated_at = now;
    }

    /// Restore a soft-deleted user
    pub fn restore(&mut self) {
        self.deleted_at = None;
        self.updated_at = Utc::now();
    }
}

/// Lowercased, trimmed email used for storage and lookups
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// User registration request
#[derive(Clone, Deserialize, Validate)]
pub struct RegisterUser {
    #[validate(length(min = 3, message = "Name must be at least 3 characters"))]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    /// CPF or CNPJ, with or without punctuation
    #[validate(custom(function = "validate_document"))]
    pub document: String,
    #[validate(custom(function = "validate_phone"))]
    pub phone: Option<String>,
    #[validate(url(message = "Invalid avatar URL"))]
    pub avatar: Option<String>,
}

impl std::fmt::Debug for RegisterUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterUser")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("document", &self.document)
            .field("phone", &self.phone)
            .field("avatar", &self.avatar)
            .finish()
    }
}

impl RegisterUser {
    /// Validate and normalize, leaving the password unhashed so callers can
    /// check uniqueness before paying for the hash.
    pub fn prepare(self, id: Uuid, default_country: &str) -> DomainResult<PendingUser> {
        self.validate()?;

        let document = Document::parse(&self.document)?;

        let now = Utc::now();
        let mut user = User {
            id,
            name: self.name.trim().to_string(),
            email: normalize_email(&self.email),
            document_type: document.kind(),
            document: document.into_string(),
            phone: None,
            phone_country: None,
            password_hash: String::new(),
            avatar: self.avatar,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };
        user.assign_phone(self.phone.as_deref(), default_country);

        Ok(PendingUser {
            user,
            password: self.password,
        })
    }

    /// Run the whole provisioning pipeline, producing a record ready to persist.
    pub fn provision(self, id: Uuid, default_country: &str) -> DomainResult<User> {
        self.prepare(id, default_country)?.hash_password()
    }
}

/// A validated, normalized registration whose password is not hashed yet.
pub struct PendingUser {
    user: User,
    password: String,
}

impl PendingUser {
    /// Normalized document digits
    pub fn document(&self) -> &str {
        &self.user.document
    }

    /// Normalized email
    pub fn email(&self) -> &str {
        &self.user.email
    }

    /// Final pipeline step: hash the password into the record.
    pub fn hash_password(self) -> DomainResult<User> {
        let password = Password::new(&self.password)?;
        Ok(User {
            password_hash: password.into_string(),
            ..self.user
        })
    }
}

impl std::fmt::Debug for PendingUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingUser")
            .field("user", &self.user)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// User update request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateUser {
    #[validate(length(min = 3, message = "Name must be at least 3 characters"))]
    pub name: Option<String>,
    #[validate(custom(function = "validate_phone"))]
    pub phone: Option<String>,
    #[validate(url(message = "Invalid avatar URL"))]
    pub avatar: Option<String>,
}

/// User response (safe to return to client)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub document: String,
    pub document_type: DocumentKind,
    pub phone: Option<String>,
    pub phone_country: Option<String>,
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            document: user.document,
            document_type: user.document_type,
            phone: user.phone,
            phone_country: user.phone_country,
            avatar: user.avatar,
            created_at: user.created_at,
            updated_at: user.updated_at,
            deleted_at: user.deleted_at,
        }
    }
}
