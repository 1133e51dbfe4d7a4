use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use ledgerbook_core::{DomainError, DomainResult};

/// `YYMMDD-NNNN`, e.g. `811228-9874`.
static SHORT_FORM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\A(?<date>[0-9]{6})-[0-9]{4}\z").expect("Valid regex pattern"));

/// `DDMMYYYY-NNNNNN`, e.g. `28121981-123456`.
static LONG_FORM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\A(?<date>[0-9]{8})-[0-9]{6}\z").expect("Valid regex pattern"));

/// Account owner.
///
/// The personal identity number is private: it is only used to derive the
/// birthdate and never leaves the struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    personal_identity_number: String,
    firstname: String,
    lastname: String,
}

impl Person {
    pub fn new(
        personal_identity_number: impl Into<String>,
        firstname: impl Into<String>,
        lastname: impl Into<String>,
    ) -> Self {
        Self {
            personal_identity_number: personal_identity_number.into(),
            firstname: firstname.into(),
            lastname: lastname.into(),
        }
    }

    pub fn firstname(&self) -> &str {
        &self.firstname
    }

    pub fn lastname(&self) -> &str {
        &self.lastname
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.firstname, self.lastname)
    }

    /// Birthdate encoded in the personal identity number.
    ///
    /// Two-digit years follow chrono's `%y` pivot (00-68 → 20xx, 69-99 → 19xx).
    pub fn birthdate(&self) -> DomainResult<NaiveDate> {
        let (date, format) = self.date_part()?;
        NaiveDate::parse_from_str(date, format)
            .map_err(|e| DomainError::validation(format!("wrong date '{date}': {e}")))
    }

    fn date_part(&self) -> DomainResult<(&str, &'static str)> {
        let number = self.personal_identity_number.as_str();

        if let Some(caps) = SHORT_FORM.captures(number) {
            if let Some(m) = caps.name("date") {
                return Ok((m.as_str(), "%y%m%d"));
            }
        }
        if let Some(caps) = LONG_FORM.captures(number) {
            if let Some(m) = caps.name("date") {
                return Ok((m.as_str(), "%d%m%Y"));
            }
        }

        Err(DomainError::invalid_id(
            "personal identity number must look like YYMMDD-NNNN or DDMMYYYY-NNNNNN",
        ))
    }
}
