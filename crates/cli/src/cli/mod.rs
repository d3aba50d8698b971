//! CLI module - Command-line interface for the application.
//!
//! Provides commands for:
//! - `check` - Validate CPF/CNPJ numbers
//! - `users` - User records
//! - `companies` - Company records

pub mod args;

pub use args::{Cli, Commands, OutputFormat};
