//! Project registry: the shared catalog of unique projects and GM participants
//!
//! Projects are deduplicated by normalized name (trimmed, case-folded) with a
//! first-write-wins policy for revenue. General managers are tracked only so
//! the revenue pool can be split between them.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

use crate::error::Result;

use super::employee::Employee;
use super::project::Project;
use super::roles::GeneralManager;

// ─────────────────────────────────────────────────────────────────
// Participant Identity
// ─────────────────────────────────────────────────────────────────

/// Identity of one general-manager instance, assigned at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ParticipantId(Uuid);

impl ParticipantId {
    /// Allocate a fresh participant identity
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ParticipantId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A general manager registered for the pool split
#[derive(Debug, Clone)]
struct Participant {
    id: ParticipantId,
    employee_id: String,
}

// ─────────────────────────────────────────────────────────────────
// Project Registry
// ─────────────────────────────────────────────────────────────────

/// Normalize a project name into its deduplication key
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Catalog of unique projects and registered general managers
///
/// Only grows: nothing is ever removed within a session.
#[derive(Debug, Default)]
pub struct ProjectRegistry {
    /// Projects in insertion order
    projects: Vec<Arc<Project>>,

    /// Normalized name -> index into `projects`
    index: HashMap<String, usize>,

    /// Registered general managers in registration order
    general_managers: Vec<Participant>,
}

impl ProjectRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a project, or return the existing one for the same normalized name.
    ///
    /// When an entry already exists the `revenue` argument is discarded.
    pub fn upsert(&mut self, name: &str, revenue: f64) -> Result<Arc<Project>> {
        let key = normalize_name(name);
        if let Some(&idx) = self.index.get(&key) {
            let existing = Arc::clone(&self.projects[idx]);
            if existing.revenue() != revenue {
                debug!(
                    project = %existing.name(),
                    kept_revenue = existing.revenue(),
                    ignored_revenue = revenue,
                    "Project already registered, revenue ignored"
                );
            }
            return Ok(existing);
        }

        let project = Arc::new(Project::new(name, revenue)?);
        self.index.insert(key, self.projects.len());
        self.projects.push(Arc::clone(&project));
        debug!(project = %project.name(), revenue = project.revenue(), "Project registered");

        Ok(project)
    }

    /// Find a project by name, ignoring case and surrounding whitespace
    pub fn lookup(&self, name: &str) -> Option<Arc<Project>> {
        self.index
            .get(&normalize_name(name))
            .map(|&idx| Arc::clone(&self.projects[idx]))
    }

    /// Register a general manager for the pool split.
    ///
    /// Idempotent per instance. Returns `true` when the manager was newly added.
    pub fn register_general_manager(&mut self, gm: &GeneralManager) -> bool {
        let id = gm.participant_id();
        if self.general_managers.iter().any(|p| p.id == id) {
            return false;
        }

        let employee_id = gm.identity().employee_id().to_string();
        debug!(employee_id = %employee_id, participant = %id, "General manager registered");
        self.general_managers.push(Participant { id, employee_id });
        true
    }

    /// Check whether a general manager instance has been registered
    pub fn is_registered(&self, gm: &GeneralManager) -> bool {
        let id = gm.participant_id();
        self.general_managers.iter().any(|p| p.id == id)
    }

    /// Sum of revenue over all unique projects
    pub fn total_revenue(&self) -> f64 {
        self.projects.iter().map(|p| p.revenue()).sum()
    }

    /// Number of registered general managers
    pub fn general_manager_count(&self) -> usize {
        self.general_managers.len()
    }

    /// Employee ids of registered general managers, in registration order
    pub fn general_manager_ids(&self) -> Vec<&str> {
        self.general_managers
            .iter()
            .map(|p| p.employee_id.as_str())
            .collect()
    }

    /// All projects in insertion order
    pub fn projects(&self) -> impl Iterator<Item = &Arc<Project>> {
        self.projects.iter()
    }

    /// Number of unique projects
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// Whether no project has been registered yet
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

// ─────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────
