pub mod config;
pub mod error;
pub mod generate;
pub mod license;
pub mod module;
pub mod project;

// Re-export commonly used types
pub use config::Config;
pub use error::{Result, ScaffoldError};
pub use license::License;
pub use module::ModuleContext;
pub use project::Project;
