//! Project value object
//!
//! A named revenue figure. Immutable once constructed; shared between the
//! registry and role instances as `Arc<Project>`.

use std::fmt;

use serde::Serialize;

use crate::error::{Error, Result};

use super::employee::format_currency;

/// An immutable named revenue figure
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Project {
    name: String,
    revenue: f64,
}

impl Project {
    /// Create a project, trimming the display name.
    ///
    /// Fails when the name is blank or the revenue is negative or non-finite.
    pub fn new(name: &str, revenue: f64) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::validation("name", "project name cannot be empty"));
        }
        if !revenue.is_finite() {
            return Err(Error::validation("revenue", "project revenue must be a finite number"));
        }
        if revenue < 0.0 {
            return Err(Error::validation("revenue", "project revenue cannot be negative"));
        }

        Ok(Self {
            name: name.to_string(),
            revenue,
        })
    }

    /// Display name (trimmed)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Revenue attributed to this project
    pub fn revenue(&self) -> f64 {
        self.revenue
    }
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Project(name={}, revenue={})",
            self.name,
            format_currency(self.revenue)
        )
    }
}
