pub mod config;
pub mod error;
pub mod platform;
pub mod process;
pub mod report;
pub mod rules;
pub mod run;
pub mod verify;

pub use config::{CheckOptions, ToolConfig};
pub use error::{Error, Result};
pub use run::orchestrator::check;

pub const TOOL_NAME: &str = "portcheck";

/// JSON schema version of portcheck reports.
/// Bump only when the serialized `Report` shape changes.
pub const SCHEMA_VERSION: &str = "0.1.0";
