//! Phone numbers and the country they belong to.
//!
//! Parsing and validity come from libphonenumber metadata (`phonenumber`
//! crate). The derived country is stored beside the number as
//! `"{ISO2}:+{calling code}"`, e.g. `"BR:+55"`.

use phonenumber::country::Id;
use phonenumber::Mode;

use crate::constants::DEFAULT_PHONE_COUNTRY;

/// A valid phone number with a recognized country.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumber {
    iso2: String,
    calling_code: u16,
    e164: String,
}

impl PhoneNumber {
    /// Parse `raw`, treating numbers without `+` as national numbers of
    /// `default_country` (ISO 3166 alpha-2, case-insensitive).
    pub fn parse(raw: &str, default_country: &str) -> Option<Self> {
        let region = default_country
            .trim()
            .to_ascii_uppercase()
            .parse::<Id>()
            .ok();

        let number = phonenumber::parse(region, raw.trim()).ok()?;
        if !phonenumber::is_valid(&number) {
            return None;
        }

        let iso2 = number.country().id()?;
        Some(PhoneNumber {
            iso2: iso2.as_ref().to_string(),
            calling_code: number.code().value(),
            e164: number.format().mode(Mode::E164).to_string(),
        })
    }

    pub fn country_iso2(&self) -> &str {
        &self.iso2
    }

    pub fn calling_code(&self) -> u16 {
        self.calling_code
    }

    /// Digits after the calling code
    pub fn national_number(&self) -> &str {
        let prefix_len = 1 + self.calling_code.to_string().len();
        &self.e164[prefix_len..]
    }

    /// `+5511999999999`
    pub fn e164(&self) -> &str {
        &self.e164
    }

    /// `BR:+55`
    pub fn phone_country(&self) -> String {
        format!("{}:+{}", self.iso2, self.calling_code)
    }
}

/// Whether `raw` is a valid phone number, reading national numbers as
/// Brazilian.
pub fn is_valid(raw: &str) -> bool {
    PhoneNumber::parse(raw, DEFAULT_PHONE_COUNTRY).is_some()
}
