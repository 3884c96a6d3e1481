//! Role variants: GeneralManager, ProjectManager, Programmer, Staff
//!
//! Each implements `Employee::compute_compensation` with its own rule.

use std::sync::Arc;

use tracing::warn;

use crate::error::{Error, Result};

use super::employee::{
    describe_prefix, format_currency, validate_amount, Employee, EmployeeIdentity, Role,
};
use super::project::Project;
use super::registry::{ParticipantId, ProjectRegistry};

/// Share of total registry revenue pooled across general managers
pub const GM_POOL_RATE: f64 = 0.03;

/// Share of the assigned project's revenue paid to its project manager
pub const PM_REVENUE_RATE: f64 = 0.05;

/// Share of the assigned project's revenue added to a programmer's base salary
pub const PROGRAMMER_REVENUE_RATE: f64 = 0.01;

/// Staff bonus per year of service
pub const STAFF_TENURE_BONUS: f64 = 100.0;

// ─────────────────────────────────────────────────────────────────
// General Manager
// ─────────────────────────────────────────────────────────────────

/// Paid from a pool of 3% of total registry revenue, split equally across
/// registered general managers
///
/// Not `Clone`: each instance is a distinct pool participant.
#[derive(Debug)]
pub struct GeneralManager {
    identity: EmployeeIdentity,
    projects: Vec<Arc<Project>>,
    participant: ParticipantId,
}

impl GeneralManager {
    /// Requires at least one project. Repeated projects are kept as separate
    /// assignments.
    pub fn new(identity: EmployeeIdentity, projects: Vec<Arc<Project>>) -> Result<Self> {
        if projects.is_empty() {
            return Err(Error::EmptyProjectList);
        }

        Ok(Self {
            identity,
            projects,
            participant: ParticipantId::new(),
        })
    }

    /// Copy of the assigned projects
    pub fn projects(&self) -> Vec<Arc<Project>> {
        self.projects.clone()
    }

    /// Identity used by the registry to deduplicate registrations
    pub fn participant_id(&self) -> ParticipantId {
        self.participant
    }

    pub fn identity_mut(&mut self) -> &mut EmployeeIdentity {
        &mut self.identity
    }
}

impl Employee for GeneralManager {
    fn identity(&self) -> &EmployeeIdentity {
        &self.identity
    }

    fn role(&self) -> Role {
        Role::GeneralManager
    }

    fn compute_compensation(&self, registry: &ProjectRegistry) -> f64 {
        let pool = GM_POOL_RATE * registry.total_revenue();
        let count = registry.general_manager_count();
        if count == 0 {
            warn!(
                employee_id = %self.identity.employee_id(),
                "No general managers registered, pool split assumes one"
            );
        }
        pool / count.max(1) as f64
    }

    fn describe(&self) -> String {
        let names: Vec<&str> = self.projects.iter().map(|p| p.name()).collect();
        format!(
            "{} | Projects: {}",
            describe_prefix(self.role(), &self.identity),
            names.join(", ")
        )
    }
}

// ─────────────────────────────────────────────────────────────────
// Project Manager
// ─────────────────────────────────────────────────────────────────

/// Paid 5% of the single assigned project's revenue
#[derive(Debug, Clone)]
pub struct ProjectManager {
    identity: EmployeeIdentity,
    project: Arc<Project>,
}

impl ProjectManager {
    pub fn new(identity: EmployeeIdentity, project: Arc<Project>) -> Self {
        Self { identity, project }
    }

    pub fn project(&self) -> &Arc<Project> {
        &self.project
    }

    pub fn identity_mut(&mut self) -> &mut EmployeeIdentity {
        &mut self.identity
    }
}

impl Employee for ProjectManager {
    fn identity(&self) -> &EmployeeIdentity {
        &self.identity
    }

    fn role(&self) -> Role {
        Role::ProjectManager
    }

    fn compute_compensation(&self, _registry: &ProjectRegistry) -> f64 {
        PM_REVENUE_RATE * self.project.revenue()
    }

    fn describe(&self) -> String {
        format!(
            "{} | Project: {}",
            describe_prefix(self.role(), &self.identity),
            self.project.name()
        )
    }
}

// ─────────────────────────────────────────────────────────────────
// Programmer
// ─────────────────────────────────────────────────────────────────

/// Paid a base salary plus 1% of the single assigned project's revenue
#[derive(Debug, Clone)]
pub struct Programmer {
    identity: EmployeeIdentity,
    project: Arc<Project>,
    base_salary: f64,
}

impl Programmer {
    pub fn new(identity: EmployeeIdentity, project: Arc<Project>, base_salary: f64) -> Result<Self> {
        let base_salary = validate_amount("base_salary", base_salary)?;
        Ok(Self {
            identity,
            project,
            base_salary,
        })
    }

    pub fn project(&self) -> &Arc<Project> {
        &self.project
    }

    pub fn base_salary(&self) -> f64 {
        self.base_salary
    }

    /// Rejects negative or non-finite values, leaving the salary unchanged
    pub fn set_base_salary(&mut self, value: f64) -> Result<()> {
        self.base_salary = validate_amount("base_salary", value)?;
        Ok(())
    }

    pub fn identity_mut(&mut self) -> &mut EmployeeIdentity {
        &mut self.identity
    }
}

impl Employee for Programmer {
    fn identity(&self) -> &EmployeeIdentity {
        &self.identity
    }

    fn role(&self) -> Role {
        Role::Programmer
    }

    fn compute_compensation(&self, _registry: &ProjectRegistry) -> f64 {
        self.base_salary + PROGRAMMER_REVENUE_RATE * self.project.revenue()
    }

    fn describe(&self) -> String {
        format!(
            "{} | Base ${} | Project: {}",
            describe_prefix(self.role(), &self.identity),
            format_currency(self.base_salary),
            self.project.name()
        )
    }
}

// ─────────────────────────────────────────────────────────────────
// Staff
// ─────────────────────────────────────────────────────────────────

/// Paid a base salary plus $100 per year of service; no project
#[derive(Debug, Clone)]
pub struct Staff {
    identity: EmployeeIdentity,
    base_salary: f64,
}

impl Staff {
    pub fn new(identity: EmployeeIdentity, base_salary: f64) -> Result<Self> {
        let base_salary = validate_amount("base_salary", base_salary)?;
        Ok(Self {
            identity,
            base_salary,
        })
    }

    pub fn base_salary(&self) -> f64 {
        self.base_salary
    }

    /// Rejects negative or non-finite values, leaving the salary unchanged
    pub fn set_base_salary(&mut self, value: f64) -> Result<()> {
        self.base_salary = validate_amount("base_salary", value)?;
        Ok(())
    }

    pub fn identity_mut(&mut self) -> &mut EmployeeIdentity {
        &mut self.identity
    }
}

impl Employee for Staff {
    fn identity(&self) -> &EmployeeIdentity {
        &self.identity
    }

    fn role(&self) -> Role {
        Role::Staff
    }

    fn compute_compensation(&self, _registry: &ProjectRegistry) -> f64 {
        self.base_salary + STAFF_TENURE_BONUS * self.years_of_service() as f64
    }

    fn describe(&self) -> String {
        format!(
            "{} | Base ${}",
            describe_prefix(self.role(), &self.identity),
            format_currency(self.base_salary)
        )
    }
}

// ─────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────
