//! Employee contract shared by every role variant
//!
//! `EmployeeIdentity` holds the universal fields (names, id, phone, start
//! year). The `Employee` trait is the polymorphic compensation contract:
//! callers keep a `Vec<Box<dyn Employee>>` and invoke the same operations on
//! every entry without inspecting the concrete role.

use std::fmt;

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

use super::registry::ProjectRegistry;

/// The current calendar year in local time
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Format a monetary amount with thousands separators and two decimals
pub fn format_currency(amount: f64) -> String {
    let formatted = format!("{:.2}", amount.abs());
    let (whole, frac) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 && formatted.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        "-"
    } else {
        ""
    };
    format!("{}{}.{}", sign, grouped, frac)
}

/// Validate a monetary amount such as a base salary
pub(crate) fn validate_amount(field: &'static str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(Error::validation(field, "must be a finite number"));
    }
    if value < 0.0 {
        return Err(Error::validation(field, "cannot be negative"));
    }
    Ok(value)
}

fn require_non_blank(field: &'static str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::validation(field, "cannot be empty"));
    }
    Ok(trimmed.to_string())
}

fn validate_start_year(start_year: i32) -> Result<i32> {
    let now = current_year();
    if start_year > now {
        return Err(Error::validation(
            "start_year",
            format!("{} is in the future (current year is {})", start_year, now),
        ));
    }
    Ok(start_year)
}

/// Reduce a phone number to its digits; every other character is discarded
pub fn canonical_phone(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

// ─────────────────────────────────────────────────────────────────
// Role
// ─────────────────────────────────────────────────────────────────

/// The four role variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    GeneralManager,
    ProjectManager,
    Programmer,
    Staff,
}

impl Role {
    /// Tag used in one-line descriptions
    pub fn tag(&self) -> &'static str {
        match self {
            Role::GeneralManager => "GM",
            Role::ProjectManager => "PM",
            Role::Programmer => "Programmer",
            Role::Staff => "Staff",
        }
    }

}

// ─────────────────────────────────────────────────────────────────
// Employee Identity
// ─────────────────────────────────────────────────────────────────

/// Fields every employee carries
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployeeIdentity {
    first_name: String,
    last_name: String,
    employee_id: String,
    /// Digits only
    phone: String,
    start_year: i32,
}

impl EmployeeIdentity {
    /// Validate and build an identity.
    ///
    /// Checks run in order: names, employee id, phone canonicalization,
    /// start year. The first failing field is reported.
    pub fn new(
        first_name: &str,
        last_name: &str,
        employee_id: &str,
        phone: &str,
        start_year: i32,
    ) -> Result<Self> {
        let first_name = require_non_blank("first_name", first_name)?;
        let last_name = require_non_blank("last_name", last_name)?;
        let employee_id = require_non_blank("employee_id", employee_id)?;
        let phone = canonical_phone(phone);
        let start_year = validate_start_year(start_year)?;

        Ok(Self {
            first_name,
            last_name,
            employee_id,
            phone,
            start_year,
        })
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// "<first> <last>"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Read-only after construction
    pub fn employee_id(&self) -> &str {
        &self.employee_id
    }

    /// Digits-only phone number
    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn start_year(&self) -> i32 {
        self.start_year
    }

    /// Whole years since the start year, never negative
    pub fn years_of_service(&self) -> u32 {
        let years = (i64::from(current_year()) - i64::from(self.start_year)).max(0);
        u32::try_from(years).unwrap_or(u32::MAX)
    }

    pub fn set_first_name(&mut self, value: &str) -> Result<()> {
        self.first_name = require_non_blank("first_name", value)?;
        Ok(())
    }

    pub fn set_last_name(&mut self, value: &str) -> Result<()> {
        self.last_name = require_non_blank("last_name", value)?;
        Ok(())
    }

    pub fn set_phone(&mut self, value: &str) {
        self.phone = canonical_phone(value);
    }

    pub fn set_start_year(&mut self, value: i32) -> Result<()> {
        self.start_year = validate_start_year(value)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────
// Employee Trait
// ─────────────────────────────────────────────────────────────────

/// Compensation contract implemented by every role variant
///
/// The registry is passed to every compensation call, including roles that
/// ignore it, so a heterogeneous collection can be processed uniformly.
pub trait Employee: fmt::Debug + Send + Sync {
    /// Shared identity fields
    fn identity(&self) -> &EmployeeIdentity;

    /// Which role variant this is
    fn role(&self) -> Role;

    /// Total compensation under this role's rule
    fn compute_compensation(&self, registry: &ProjectRegistry) -> f64;

    /// Role-tagged one-line representation
    fn describe(&self) -> String;

    /// Whole years since the start year, never negative
    fn years_of_service(&self) -> u32 {
        self.identity().years_of_service()
    }

    /// "<describe()> | Total Compensation: $<amount>"
    fn compensation_report_line(&self, registry: &ProjectRegistry) -> String {
        format!(
            "{} | Total Compensation: ${}",
            self.describe(),
            format_currency(self.compute_compensation(registry))
        )
    }
}

/// Common "[TAG] First Last (ID x)" prefix
pub(crate) fn describe_prefix(role: Role, identity: &EmployeeIdentity) -> String {
    format!(
        "[{}] {} (ID {})",
        role.tag(),
        identity.full_name(),
        identity.employee_id()
    )
}
