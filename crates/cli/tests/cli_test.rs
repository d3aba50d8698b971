//! Command-line parsing and document check reports.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use serde_json::json;
use uuid::Uuid;

use account_service::RecordStore;
use docval::cli::args::{CompaniesAction, KindFilter, UsersAction};
use docval::cli::{Cli, Commands, OutputFormat};
use docval::commands::check::{evaluate, evaluate_json, report, report_value};
use docval::container::Services;
use domain::document::validate_value;
use domain::{DocumentKind, RegisterUser};

// =============================================================================
// Parsing
// =============================================================================

#[test]
fn test_parse_check_with_documents() {
    let cli = Cli::try_parse_from([
        "docval",
        "check",
        "123.456.789-09",
        "11.222.333/0001-81",
        "--kind",
        "any",
    ])
    .unwrap();

    assert!(!cli.verbose);
    assert_eq!(cli.format, OutputFormat::Text);
    match cli.command {
        Commands::Check(args) => {
            assert_eq!(args.documents.len(), 2);
            assert_eq!(args.kind, KindFilter::Any);
            assert_eq!(args.kind.document_kind(), None);
        }
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn test_parse_global_flags_after_subcommand() {
    let cli = Cli::try_parse_from([
        "docval",
        "check",
        "--kind",
        "cnpj",
        "--format",
        "json",
        "--verbose",
        "--store",
        "records.json",
    ])
    .unwrap();

    assert!(cli.verbose);
    assert_eq!(cli.format, OutputFormat::Json);
    assert_eq!(cli.store, Some(PathBuf::from("records.json")));
    match cli.command {
        Commands::Check(args) => {
            assert!(args.documents.is_empty());
            assert_eq!(args.kind.document_kind(), Some(DocumentKind::Cnpj));
        }
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn test_parse_user_register() {
    let cli = Cli::try_parse_from([
        "docval",
        "users",
        "register",
        "--name",
        "Maria Silva",
        "--email",
        "maria@example.com",
        "--password",
        "s3cret-pass",
        "--document",
        "123.456.789-09",
        "--phone",
        "11987654321",
    ])
    .unwrap();

    match cli.command {
        Commands::Users(args) => match args.action {
            UsersAction::Register {
                name,
                document,
                phone,
                avatar,
                ..
            } => {
                assert_eq!(name, "Maria Silva");
                assert_eq!(document, "123.456.789-09");
                assert_eq!(phone.as_deref(), Some("11987654321"));
                assert!(avatar.is_none());
            }
            other => panic!("unexpected action: {:?}", other),
        },
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn test_parse_user_get_requires_uuid() {
    let id = Uuid::new_v4();
    let cli = Cli::try_parse_from(["docval", "users", "get", &id.to_string()]).unwrap();
    match cli.command {
        Commands::Users(args) => assert!(matches!(args.action, UsersAction::Get { id: parsed } if parsed == id)),
        other => panic!("unexpected command: {:?}", other),
    }

    assert!(Cli::try_parse_from(["docval", "users", "get", "not-a-uuid"]).is_err());
}

#[test]
fn test_parse_company_address_json() {
    let cli = Cli::try_parse_from([
        "docval",
        "companies",
        "create",
        "--name",
        "Acme Ltda",
        "--document",
        "11222333000181",
        "--address",
        r#"{"city": "São Paulo", "state": "SP"}"#,
    ])
    .unwrap();

    match cli.command {
        Commands::Companies(args) => match args.action {
            CompaniesAction::Create { address, .. } => {
                assert_eq!(address, Some(json!({"city": "São Paulo", "state": "SP"})));
            }
            other => panic!("unexpected action: {:?}", other),
        },
        other => panic!("unexpected command: {:?}", other),
    }

    assert!(Cli::try_parse_from([
        "docval",
        "companies",
        "create",
        "--name",
        "Acme Ltda",
        "--document",
        "11222333000181",
        "--address",
        "{not json",
    ])
    .is_err());
}

#[test]
fn test_parse_rejects_unknown_kind() {
    assert!(Cli::try_parse_from(["docval", "check", "--kind", "rg", "123"]).is_err());
}

// =============================================================================
// Check reports
// =============================================================================

#[test]
fn test_report_valid_cpf() {
    let report = report("123.456.789-09", None);

    assert!(report.valid);
    assert_eq!(report.normalized, "12345678909");
    assert_eq!(report.kind, Some(DocumentKind::Cpf));
    assert_eq!(report.formatted.as_deref(), Some("123.456.789-09"));
    assert_eq!(report.reason, None);
}

#[test]
fn test_report_valid_cnpj_without_mask() {
    let report = report("11222333000181", None);

    assert!(report.valid);
    assert_eq!(report.kind, Some(DocumentKind::Cnpj));
    assert_eq!(report.formatted.as_deref(), Some("11.222.333/0001-81"));
}

#[test]
fn test_report_invalid_check_digit_keeps_kind() {
    let report = report("123.456.789-08", None);

    assert!(!report.valid);
    assert_eq!(report.kind, Some(DocumentKind::Cpf));
    assert!(report.formatted.is_none());
    assert!(report.reason.is_some());
}

#[test]
fn test_report_repeated_digits() {
    let report = report("111.111.111-11", None);

    assert!(!report.valid);
    assert_eq!(report.reason.as_deref(), Some("all digits are identical"));
}

#[test]
fn test_report_unknown_length_has_no_kind() {
    let report = report("12345", None);

    assert!(!report.valid);
    assert_eq!(report.kind, None);
}

#[test]
fn test_report_required_kind_rejects_other_format() {
    let report = report("123.456.789-09", Some(DocumentKind::Cnpj));

    assert!(!report.valid);
    assert_eq!(report.kind, Some(DocumentKind::Cnpj));
}

#[test]
fn test_evaluate_keeps_input_order() {
    let reports = evaluate(&["01234567890", "00.623.904/0001-73", "abc"], None);

    let verdicts: Vec<bool> = reports.iter().map(|r| r.valid).collect();
    assert_eq!(verdicts, vec![true, true, false]);
    assert_eq!(reports[2].normalized, "");
}

#[test]
fn test_json_values_agree_with_value_validation() {
    let values = [
        json!("123.456.789-09"),
        json!(12345678909u64),
        json!(11222333000181u64),
        json!(1234567890u64),
        json!(true),
        json!(null),
        json!(["12345678909"]),
    ];

    for value in &values {
        let report = report_value(value, None);
        assert_eq!(report.valid, validate_value(value), "{value}");
        assert_eq!(report.input, value.to_string());
    }
}

#[test]
fn test_evaluate_json_rejects_non_documents() {
    let reports = evaluate_json(&["12345678909", r#""11.222.333/0001-81""#, "[1]", "{oops"], None);

    let verdicts: Vec<bool> = reports.iter().map(|r| r.valid).collect();
    assert_eq!(verdicts, vec![true, true, false, false]);
    assert_eq!(reports[2].reason.as_deref(), Some("expected a string or an integer"));
    assert!(reports[3].reason.as_deref().unwrap().starts_with("invalid JSON"));
}

#[test]
fn test_parse_check_json_values_flag() {
    let cli = Cli::try_parse_from(["docval", "check", "--json-values", "12345678909"]).unwrap();
    match cli.command {
        Commands::Check(args) => assert!(args.json_values),
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn test_report_json_shape() {
    let value = serde_json::to_value(report("12345678909", None)).unwrap();

    assert_eq!(value["kind"], "BR:CPF");
    assert_eq!(value["valid"], true);
    assert!(value.get("reason").is_none());
}

// =============================================================================
// Services
// =============================================================================

#[tokio::test]
async fn test_services_share_one_store() {
    let store = Arc::new(RecordStore::in_memory());
    let services = Services::from_store(store, "BR");

    let user = services
        .accounts()
        .register(RegisterUser {
            name: "Maria Silva".to_string(),
            email: "maria@example.com".to_string(),
            password: "s3cret-pass".to_string(),
            document: "123.456.789-09".to_string(),
            phone: None,
            avatar: None,
        })
        .await
        .unwrap();

    let found = services.accounts().get_user(user.id).await.unwrap();
    assert_eq!(found.document, "12345678909");
    assert!(services.companies().list_companies(true).await.unwrap().is_empty());
}
