//! Domain layer - Documents, people and companies.
//!
//! This crate contains pure domain logic with no infrastructure dependencies:
//! CPF/CNPJ checksum validation, phone country derivation, password hashing,
//! and the pipelines that turn requests into storable records.

pub mod company;
pub mod constants;
pub mod document;
pub mod error;
pub mod password;
pub mod phone;
pub mod user;
pub mod validation;

pub use company::{Company, CreateCompany, UpdateCompany};
pub use constants::*;
pub use document::{Document, DocumentError, DocumentKind};
pub use error::{DomainError, DomainResult};
pub use password::Password;
pub use phone::PhoneNumber;
pub use user::{PendingUser, RegisterUser, UpdateUser, User, UserResponse};
