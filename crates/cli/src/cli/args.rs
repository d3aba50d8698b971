//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde_json::Value;
use uuid::Uuid;

use domain::DocumentKind;

/// docval - Brazilian document validation and account records
#[derive(Parser, Debug)]
#[command(name = "docval")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Record store file
    #[arg(short, long, global = true, env = "DOCVAL_STORE")]
    pub store: Option<PathBuf>,

    /// Output format
    #[arg(
        short,
        long,
        global = true,
        value_enum,
        default_value_t = OutputFormat::Text,
        env = "DOCVAL_OUTPUT"
    )]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate CPF/CNPJ numbers given as arguments or on stdin
    Check(CheckArgs),

    /// Manage user records
    Users(UsersArgs),

    /// Manage company records
    Companies(CompaniesArgs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Document format filter for `check`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindFilter {
    /// Decide by digit count
    Any,
    Cpf,
    Cnpj,
}

impl KindFilter {
    pub fn document_kind(self) -> Option<DocumentKind> {
        match self {
            KindFilter::Any => None,
            KindFilter::Cpf => Some(DocumentKind::Cpf),
            KindFilter::Cnpj => Some(DocumentKind::Cnpj),
        }
    }
}

/// Arguments for the check command
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Documents to check, with or without punctuation (reads stdin when empty)
    pub documents: Vec<String>,

    /// Require a specific document format
    #[arg(short, long, value_enum, default_value_t = KindFilter::Any)]
    pub kind: KindFilter,

    /// Read each document as a JSON value (a string or an integer)
    #[arg(long)]
    pub json_values: bool,
}

/// Arguments for the users command
#[derive(Parser, Debug)]
pub struct UsersArgs {
    #[command(subcommand)]
    pub action: UsersAction,
}

/// User record actions
#[derive(Subcommand, Debug)]
pub enum UsersAction {
    /// Register a new user
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long, env = "DOCVAL_PASSWORD", hide_env_values = true)]
        password: String,
        /// CPF or CNPJ
        #[arg(long)]
        document: String,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        avatar: Option<String>,
    },
    /// List users
    List {
        /// Include soft-deleted users
        #[arg(long)]
        with_deleted: bool,
    },
    /// Show one active user
    Get { id: Uuid },
    /// Change name, phone or avatar
    Update {
        id: Uuid,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        avatar: Option<String>,
    },
    /// Soft delete a user
    Delete { id: Uuid },
    /// Undo a soft delete
    Restore { id: Uuid },
}

/// Arguments for the companies command
#[derive(Parser, Debug)]
pub struct CompaniesArgs {
    #[command(subcommand)]
    pub action: CompaniesAction,
}

/// Company record actions
#[derive(Subcommand, Debug)]
pub enum CompaniesAction {
    /// Register a new company
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        fantasy_name: Option<String>,
        /// CNPJ
        #[arg(long)]
        document: String,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        /// Address as a JSON object
        #[arg(long, value_parser = parse_json)]
        address: Option<Value>,
        #[arg(long)]
        logo: Option<String>,
        #[arg(long)]
        website: Option<String>,
    },
    /// List companies
    List {
        /// Include soft-deleted companies
        #[arg(long)]
        with_deleted: bool,
    },
    /// Show one active company
    Get { id: Uuid },
    /// Change company details
    Update {
        id: Uuid,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        fantasy_name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        /// Address as a JSON object
        #[arg(long, value_parser = parse_json)]
        address: Option<Value>,
        #[arg(long)]
        logo: Option<String>,
        #[arg(long)]
        website: Option<String>,
    },
    /// Soft delete a company
    Delete { id: Uuid },
}

fn parse_json(raw: &str) -> Result<Value, String> {
    serde_json::from_str(raw).map_err(|e| format!("invalid JSON: {e}"))
}
