//! Personnel compensation model
//!
//! A `ProjectRegistry` holds the unique projects and registered general
//! managers. Role variants implement the `Employee` contract, and every
//! compensation call receives the registry explicitly.

pub mod employee;
pub mod project;
pub mod registry;
pub mod report;
pub mod roles;

pub use employee::{current_year, format_currency, Employee, EmployeeIdentity, Role};
pub use project::Project;
pub use registry::{ParticipantId, ProjectRegistry};
pub use report::{CompensationReport, ReportLine};
pub use roles::{GeneralManager, ProjectManager, Programmer, Staff};
