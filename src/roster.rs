//! Roster input: builds a registry and employee list from a TOML document
//!
//! ```toml
//! [[projects]]
//! name = "Digital Wallet"
//! revenue = 500000.0
//!
//! [[employees]]
//! role = "programmer"
//! first_name = "Neha"
//! last_name = "Singh"
//! employee_id = "PR301"
//! phone = "317-555-3333"
//! start_year = 2021
//! base_salary = 95000.0
//! project = "Digital Wallet"
//! ```

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::personnel::{
    Employee, EmployeeIdentity, GeneralManager, Project, ProjectManager, ProjectRegistry,
    Programmer, Staff,
};

/// Bundled demo roster: one employee of each role
pub const DEMO_ROSTER: &str = include_str!("../config/demo-roster.toml");

// ─────────────────────────────────────────────────────────────────
// Roster Document
// ─────────────────────────────────────────────────────────────────

/// Parsed roster document
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Roster {
    pub projects: Vec<ProjectEntry>,
    pub employees: Vec<EmployeeEntry>,
}

/// A `[[projects]]` table
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectEntry {
    pub name: String,
    pub revenue: f64,
}

/// Identity fields shared by every `[[employees]]` table
#[derive(Debug, Clone, Deserialize)]
pub struct PersonEntry {
    pub first_name: String,
    pub last_name: String,
    pub employee_id: String,
    #[serde(default)]
    pub phone: String,
    pub start_year: i32,
}

/// An `[[employees]]` table, tagged by `role`
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "role", rename_all = "kebab-case")]
pub enum EmployeeEntry {
    GeneralManager {
        #[serde(flatten)]
        person: PersonEntry,
        projects: Vec<String>,
    },
    ProjectManager {
        #[serde(flatten)]
        person: PersonEntry,
        project: String,
    },
    Programmer {
        #[serde(flatten)]
        person: PersonEntry,
        project: String,
        base_salary: f64,
    },
    Staff {
        #[serde(flatten)]
        person: PersonEntry,
        base_salary: f64,
    },
}

impl EmployeeEntry {
    fn person(&self) -> &PersonEntry {
        match self {
            EmployeeEntry::GeneralManager { person, .. }
            | EmployeeEntry::ProjectManager { person, .. }
            | EmployeeEntry::Programmer { person, .. }
            | EmployeeEntry::Staff { person, .. } => person,
        }
    }
}

impl Roster {
    /// Parse a roster from TOML; `origin` names the source in errors
    pub fn parse(content: &str, origin: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::roster_parse(origin, e.to_string()))
    }

    /// Read and parse a roster file
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| Error::IoRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let roster = Self::parse(&content, &path.display().to_string())?;
        debug!(path = %path.display(), "Roster file parsed");
        Ok(roster)
    }

    /// The bundled demo roster
    pub fn demo() -> Result<Self> {
        Self::parse(DEMO_ROSTER, "<demo>")
    }

    /// Register the roster's projects and construct its employees.
    ///
    /// Projects are upserted in document order, so a repeated name keeps the
    /// first revenue. Every general manager is registered with `registry`.
    pub fn build(&self, registry: &mut ProjectRegistry) -> Result<Vec<Box<dyn Employee>>> {
        for entry in &self.projects {
            registry.upsert(&entry.name, entry.revenue)?;
        }

        let mut employees: Vec<Box<dyn Employee>> = Vec::with_capacity(self.employees.len());
        for entry in &self.employees {
            let employee = build_employee(entry, registry).map_err(|e| match e {
                Error::UnknownProject { .. } => e,
                other => Error::RosterEntry {
                    employee_id: entry.person().employee_id.trim().to_string(),
                    source: Box::new(other),
                },
            })?;
            employees.push(employee);
        }

        info!(
            projects = registry.len(),
            employees = employees.len(),
            general_managers = registry.general_manager_count(),
            "Roster built"
        );

        Ok(employees)
    }
}

fn resolve_project(
    registry: &ProjectRegistry,
    person: &PersonEntry,
    name: &str,
) -> Result<Arc<Project>> {
    registry.lookup(name).ok_or_else(|| Error::UnknownProject {
        employee_id: person.employee_id.trim().to_string(),
        project: name.trim().to_string(),
    })
}

fn build_identity(person: &PersonEntry) -> Result<EmployeeIdentity> {
    EmployeeIdentity::new(
        &person.first_name,
        &person.last_name,
        &person.employee_id,
        &person.phone,
        person.start_year,
    )
}

fn build_employee(entry: &EmployeeEntry, registry: &mut ProjectRegistry) -> Result<Box<dyn Employee>> {
    match entry {
        EmployeeEntry::GeneralManager { person, projects } => {
            let identity = build_identity(person)?;
            let projects = projects
                .iter()
                .map(|name| resolve_project(registry, person, name))
                .collect::<Result<Vec<_>>>()?;
            let gm = GeneralManager::new(identity, projects)?;
            registry.register_general_manager(&gm);
            Ok(Box::new(gm))
        }
        EmployeeEntry::ProjectManager { person, project } => {
            let identity = build_identity(person)?;
            let project = resolve_project(registry, person, project)?;
            Ok(Box::new(ProjectManager::new(identity, project)))
        }
        EmployeeEntry::Programmer {
            person,
            project,
            base_salary,
        } => {
            let identity = build_identity(person)?;
            let project = resolve_project(registry, person, project)?;
            Ok(Box::new(Programmer::new(identity, project, *base_salary)?))
        }
        EmployeeEntry::Staff {
            person,
            base_salary,
        } => {
            let identity = build_identity(person)?;
            Ok(Box::new(Staff::new(identity, *base_salary)?))
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────
