pub mod compile;
pub mod config;
pub mod discovery;
pub mod error;
pub mod settings;
pub mod validation;

// Re-export main types
pub use config::*;
pub use error::*;
pub use settings::*;

// Re-export discovery, validation and compilation
pub use compile::compile_library;
pub use discovery::{ConfigDiscovery, discover, load_from};
pub use validation::{ConfigValidator, SchemaValidator, validate_schema};
