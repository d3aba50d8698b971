//! Rendering of command results on stdout.

use serde::Serialize;

use common::{AppError, AppResult};
use domain::{Company, Document, DocumentKind, UserResponse};

use crate::cli::OutputFormat;

/// Print `value` as pretty JSON.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Stored digits with their conventional mask, falling back to the digits.
pub fn masked(digits: &str, kind: DocumentKind) -> String {
    Document::parse_as(digits, kind)
        .map(|d| d.formatted())
        .unwrap_or_else(|_| digits.to_string())
}

pub fn user_line(user: &UserResponse) -> String {
    let mut line = format!(
        "{}  {}  <{}>  {} {}",
        user.id,
        user.name,
        user.email,
        user.document_type.label(),
        masked(&user.document, user.document_type)
    );
    if let Some(phone) = &user.phone {
        line.push_str(&format!("  {phone}"));
    }
    if user.deleted_at.is_some() {
        line.push_str("  (deleted)");
    }
    line
}

pub fn company_line(company: &Company) -> String {
    let mut line = format!(
        "{}  {}  {} {}",
        company.id,
        company.name,
        company.document_type.label(),
        masked(&company.document, company.document_type)
    );
    if let Some(fantasy_name) = &company.fantasy_name {
        line.push_str(&format!("  \"{fantasy_name}\""));
    }
    if company.deleted_at.is_some() {
        line.push_str("  (deleted)");
    }
    line
}

pub fn users(users: Vec<UserResponse>, format: OutputFormat) -> AppResult<()> {
    match format {
        OutputFormat::Json => print_json(&users),
        OutputFormat::Text => {
            if users.is_empty() {
                println!("No users");
            }
            for user in &users {
                println!("{}", user_line(user));
            }
            Ok(())
        }
    }
}

pub fn user(user: UserResponse, format: OutputFormat) -> AppResult<()> {
    match format {
        OutputFormat::Json => print_json(&user),
        OutputFormat::Text => {
            println!("{}", user_line(&user));
            Ok(())
        }
    }
}

pub fn companies(companies: Vec<Company>, format: OutputFormat) -> AppResult<()> {
    match format {
        OutputFormat::Json => print_json(&companies),
        OutputFormat::Text => {
            if companies.is_empty() {
                println!("No companies");
            }
            for company in &companies {
                println!("{}", company_line(company));
            }
            Ok(())
        }
    }
}

pub fn company(company: Company, format: OutputFormat) -> AppResult<()> {
    match format {
        OutputFormat::Json => print_json(&company),
        OutputFormat::Text => {
            println!("{}", company_line(&company));
            Ok(())
        }
    }
}

/// Failure text for stderr: `error: <message>`, or the error body as JSON.
pub fn error(err: &AppError, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => serde_json::to_string(&err.to_response())
            .unwrap_or_else(|_| format!("error: {}", err.user_message())),
        OutputFormat::Text => format!("error: {}", err.user_message()),
    }
}
