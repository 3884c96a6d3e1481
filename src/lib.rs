//! KSD Personnel - compensation model and reporting
//!
//! The `personnel` module holds the object model: a `ProjectRegistry` of
//! unique projects and four `Employee` role variants whose compensation is
//! computed against that registry. `roster` builds both from a TOML document
//! and the remaining modules carry the CLI plumbing.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod personnel;
pub mod roster;
pub mod version;

pub use error::{Error, ErrorCode, Result};
