//! Check command - CPF/CNPJ verdicts for arguments or stdin lines.

use serde::Serialize;
use serde_json::Value;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};

use common::{AppError, AppResult};
use domain::document::{normalize, value_text};
use domain::{Document, DocumentKind};

use crate::cli::args::CheckArgs;
use crate::cli::OutputFormat;
use crate::output;

/// Verdict for a single candidate document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckReport {
    pub input: String,
    pub normalized: String,
    pub kind: Option<DocumentKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted: Option<String>,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl CheckReport {
    fn line(&self) -> String {
        match (&self.formatted, self.kind) {
            (Some(formatted), Some(kind)) => format!("VALID    {}  {}", formatted, kind.label()),
            _ => format!(
                "INVALID  {}  ({})",
                self.input,
                self.reason.as_deref().unwrap_or("invalid")
            ),
        }
    }
}

/// Check one candidate, optionally requiring a specific format.
pub fn report(input: &str, kind: Option<DocumentKind>) -> CheckReport {
    let normalized = normalize(input);
    let parsed = match kind {
        Some(kind) => Document::parse_as(input, kind),
        None => Document::parse(input),
    };

    match parsed {
        Ok(document) => CheckReport {
            input: input.to_string(),
            normalized,
            kind: Some(document.kind()),
            formatted: Some(document.formatted()),
            valid: true,
            reason: None,
        },
        Err(e) => CheckReport {
            input: input.to_string(),
            kind: kind.or_else(|| DocumentKind::from_length(normalized.len())),
            normalized,
            formatted: None,
            valid: false,
            reason: Some(e.to_string()),
        },
    }
}

/// Check a decoded JSON value. Strings and integral numbers are candidates;
/// any other value is rejected.
pub fn report_value(value: &Value, kind: Option<DocumentKind>) -> CheckReport {
    let input = value.to_string();
    let Some(text) = value_text(value) else {
        return rejected(input, kind, "expected a string or an integer");
    };

    CheckReport {
        input,
        ..report(&text, kind)
    }
}

/// Check every candidate in order.
pub fn evaluate<S: AsRef<str>>(inputs: &[S], kind: Option<DocumentKind>) -> Vec<CheckReport> {
    inputs.iter().map(|input| report(input.as_ref(), kind)).collect()
}

/// Check every candidate in order, decoding each one as JSON first.
pub fn evaluate_json<S: AsRef<str>>(inputs: &[S], kind: Option<DocumentKind>) -> Vec<CheckReport> {
    inputs
        .iter()
        .map(|input| match serde_json::from_str::<Value>(input.as_ref()) {
            Ok(value) => report_value(&value, kind),
            Err(e) => rejected(input.as_ref().to_string(), kind, &format!("invalid JSON: {e}")),
        })
        .collect()
}

fn rejected(input: String, kind: Option<DocumentKind>, reason: &str) -> CheckReport {
    CheckReport {
        input,
        normalized: String::new(),
        kind,
        formatted: None,
        valid: false,
        reason: Some(reason.to_string()),
    }
}

/// Execute the check command
pub async fn execute(args: CheckArgs, format: OutputFormat) -> AppResult<()> {
    let inputs = if args.documents.is_empty() {
        debug!("Reading documents from stdin");
        read_lines().await?
    } else {
        args.documents
    };

    if inputs.is_empty() {
        return Err(AppError::bad_request("no documents to check"));
    }

    let kind = args.kind.document_kind();
    let reports = if args.json_values {
        evaluate_json(&inputs, kind)
    } else {
        evaluate(&inputs, kind)
    };
    match format {
        OutputFormat::Json => output::print_json(&reports)?,
        OutputFormat::Text => {
            for report in &reports {
                println!("{}", report.line());
            }
        }
    }

    let invalid = reports.iter().filter(|r| !r.valid).count();
    info!(checked = reports.len(), invalid, "Documents checked");

    if invalid > 0 {
        return Err(AppError::validation(format!(
            "{} of {} documents are invalid",
            invalid,
            reports.len()
        )));
    }
    Ok(())
}

async fn read_lines() -> AppResult<Vec<String>> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut inputs = Vec::new();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if !line.is_empty() {
            inputs.push(line.to_string());
        }
    }
    Ok(inputs)
}
