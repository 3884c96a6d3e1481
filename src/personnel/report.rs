//! Compensation report
//!
//! Iterates a heterogeneous employee collection through the `Employee`
//! contract and summarizes the registry totals.

use serde::Serialize;

use super::employee::{format_currency, Employee, Role};
use super::registry::ProjectRegistry;

const HEADER: &str = "================ Compensation Report ================";
const FOOTER: &str = "====================================================";

/// One employee's row in the report
#[derive(Debug, Clone, Serialize)]
pub struct ReportLine {
    pub employee_id: String,
    pub role: Role,
    pub description: String,
    pub compensation: f64,
    /// `Employee::compensation_report_line` output
    pub line: String,
}

/// Compensation for a set of employees against one registry
#[derive(Debug, Clone, Serialize)]
pub struct CompensationReport {
    pub lines: Vec<ReportLine>,
    pub total_revenue: f64,
    pub general_manager_count: usize,
    /// Employee ids of the registered general managers
    pub general_manager_ids: Vec<String>,
    pub project_count: usize,
    pub total_compensation: f64,
}

impl CompensationReport {
    /// Build a report, preserving the order of `employees`
    pub fn build(employees: &[Box<dyn Employee>], registry: &ProjectRegistry) -> Self {
        let lines: Vec<ReportLine> = employees
            .iter()
            .map(|e| ReportLine {
                employee_id: e.identity().employee_id().to_string(),
                role: e.role(),
                description: e.describe(),
                compensation: e.compute_compensation(registry),
                line: e.compensation_report_line(registry),
            })
            .collect();

        let total_compensation: f64 = lines.iter().map(|l| l.compensation).sum();

        Self {
            lines,
            total_revenue: registry.total_revenue(),
            general_manager_count: registry.general_manager_count(),
            general_manager_ids: registry
                .general_manager_ids()
                .into_iter()
                .map(String::from)
                .collect(),
            project_count: registry.len(),
            total_compensation,
        }
    }

    /// Render the plain-text report
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        out.push_str(HEADER);
        out.push('\n');
        for line in &self.lines {
            out.push_str(&line.line);
            out.push('\n');
        }
        out.push_str(FOOTER);
        out.push_str("\n\n");
        out.push_str(&format!(
            "Total unique project revenue in registry: ${}\n",
            format_currency(self.total_revenue)
        ));
        out.push_str(&format!(
            "Registered General Managers: {}\n",
            self.general_manager_count
        ));
        out
    }

    /// Render the report as pretty-printed JSON
    pub fn render_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
