//! Brazilian taxpayer document numbers (CPF and CNPJ).
//!
//! Both formats end in two verification digits derived from a weighted
//! positional sum (mod 11) of the digits before them. Formatting is ignored:
//! every character that is not an ASCII digit is dropped, and the remaining
//! digit count decides which format applies (11 = CPF, 14 = CNPJ).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use thiserror::Error;

use crate::constants::{CNPJ_LENGTH, CPF_LENGTH, DOCUMENT_TYPE_CNPJ, DOCUMENT_TYPE_CPF};

const CPF_FIRST_WEIGHTS: [u32; 9] = [10, 9, 8, 7, 6, 5, 4, 3, 2];
const CPF_SECOND_WEIGHTS: [u32; 10] = [11, 10, 9, 8, 7, 6, 5, 4, 3, 2];
const CNPJ_FIRST_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const CNPJ_SECOND_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Largest integer a double represents exactly (2^53 - 1).
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Why a candidate failed to parse as a document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    /// Digit count does not match any (or the requested) format
    #[error("unexpected digit count {found}")]
    Length { found: usize },

    /// Every digit is the same
    #[error("all digits are identical")]
    RepeatedDigits,

    /// A verification digit does not match its checksum (1 or 2)
    #[error("verification digit {position} does not match")]
    CheckDigit { position: u8 },

    /// Unrecognized document type name
    #[error("unknown document type: {0}")]
    UnknownKind(String),
}

/// Document format, selected by digit count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentKind {
    /// Individual taxpayer ID (11 digits)
    #[serde(rename = "BR:CPF")]
    Cpf,
    /// Company taxpayer ID (14 digits)
    #[serde(rename = "BR:CNPJ")]
    Cnpj,
}

impl DocumentKind {
    /// Pick the format for a normalized digit count.
    pub fn from_length(len: usize) -> Option<Self> {
        match len {
            CPF_LENGTH => Some(DocumentKind::Cpf),
            CNPJ_LENGTH => Some(DocumentKind::Cnpj),
            _ => None,
        }
    }

    /// Number of digits, verification digits included
    pub fn length(self) -> usize {
        match self {
            DocumentKind::Cpf => CPF_LENGTH,
            DocumentKind::Cnpj => CNPJ_LENGTH,
        }
    }

    /// Stored `document_type` value
    pub fn type_code(self) -> &'static str {
        match self {
            DocumentKind::Cpf => DOCUMENT_TYPE_CPF,
            DocumentKind::Cnpj => DOCUMENT_TYPE_CNPJ,
        }
    }

    /// Short human label
    pub fn label(self) -> &'static str {
        match self {
            DocumentKind::Cpf => "CPF",
            DocumentKind::Cnpj => "CNPJ",
        }
    }

    fn weights(self) -> [&'static [u32]; 2] {
        match self {
            DocumentKind::Cpf => [&CPF_FIRST_WEIGHTS, &CPF_SECOND_WEIGHTS],
            DocumentKind::Cnpj => [&CNPJ_FIRST_WEIGHTS, &CNPJ_SECOND_WEIGHTS],
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.type_code())
    }
}

impl FromStr for DocumentKind {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "CPF" | DOCUMENT_TYPE_CPF => Ok(DocumentKind::Cpf),
            "CNPJ" | DOCUMENT_TYPE_CNPJ => Ok(DocumentKind::Cnpj),
            _ => Err(DocumentError::UnknownKind(s.to_string())),
        }
    }
}

/// A checksum-verified document number, stored as bare digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Document {
    digits: String,
    kind: DocumentKind,
}

impl Document {
    /// Parse any supported format, chosen by digit count.
    pub fn parse(raw: &str) -> Result<Self, DocumentError> {
        let digits = normalize(raw);
        let kind = DocumentKind::from_length(digits.len())
            .ok_or(DocumentError::Length { found: digits.len() })?;
        Self::verified(digits, kind)
    }

    /// Parse a specific format; other digit counts are rejected.
    pub fn parse_as(raw: &str, kind: DocumentKind) -> Result<Self, DocumentError> {
        let digits = normalize(raw);
        if digits.len() != kind.length() {
            return Err(DocumentError::Length { found: digits.len() });
        }
        Self::verified(digits, kind)
    }

    fn verified(digits: String, kind: DocumentKind) -> Result<Self, DocumentError> {
        let values: Vec<u32> = digits.bytes().map(|b| u32::from(b - b'0')).collect();

        if values.windows(2).all(|pair| pair[0] == pair[1]) {
            return Err(DocumentError::RepeatedDigits);
        }

        for (position, weights) in (1u8..).zip(kind.weights()) {
            let block = weights.len();
            if values[block] != check_digit(&values[..block], weights) {
                return Err(DocumentError::CheckDigit { position });
            }
        }

        Ok(Self { digits, kind })
    }

    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    /// Bare digits, as persisted.
    pub fn as_str(&self) -> &str {
        &self.digits
    }

    pub fn into_string(self) -> String {
        self.digits
    }

    /// Conventional mask: `000.000.000-00` or `00.000.000/0000-00`.
    pub fn formatted(&self) -> String {
        let d = &self.digits;
        match self.kind {
            DocumentKind::Cpf => format!("{}.{}.{}-{}", &d[..3], &d[3..6], &d[6..9], &d[9..]),
            DocumentKind::Cnpj => format!(
                "{}.{}.{}/{}-{}",
                &d[..2],
                &d[2..5],
                &d[5..8],
                &d[8..12],
                &d[12..]
            ),
        }
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.digits)
    }
}

impl FromStr for Document {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Document::parse(s)
    }
}

/// Drop everything that is not an ASCII digit.
pub fn normalize(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// `0` when the weighted sum leaves a remainder below 2, else `11 - remainder`.
fn check_digit(digits: &[u32], weights: &[u32]) -> u32 {
    let sum: u32 = digits.iter().zip(weights).map(|(d, w)| d * w).sum();
    match sum % 11 {
        r if r < 2 => 0,
        r => 11 - r,
    }
}

/// Whether `document` is a valid CPF or CNPJ, formatting ignored.
pub fn validate(document: &str) -> bool {
    Document::parse(document).is_ok()
}

/// Whether `document` is a valid CPF.
pub fn validate_cpf(document: &str) -> bool {
    Document::parse_as(document, DocumentKind::Cpf).is_ok()
}

/// Whether `document` is a valid CNPJ.
pub fn validate_cnpj(document: &str) -> bool {
    Document::parse_as(document, DocumentKind::Cnpj).is_ok()
}

/// Validate an untyped value such as a decoded JSON field. Only strings and
/// integral numbers can be documents; everything else is `false`.
pub fn validate_value(value: &Value) -> bool {
    value_text(value).is_some_and(|text| validate(&text))
}

/// The candidate text of an untyped value: a string as-is, an integral
/// number as its decimal digits, nothing for any other value.
pub fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => number_digits(n),
        _ => None,
    }
}

fn number_digits(n: &Number) -> Option<String> {
    if let Some(v) = n.as_u64() {
        return Some(v.to_string());
    }
    if let Some(v) = n.as_i64() {
        return Some(v.to_string());
    }
    let v = n.as_f64()?;
    (v.fract() == 0.0 && v.abs() <= MAX_SAFE_INTEGER).then(|| format!("{:.0}", v))
}
