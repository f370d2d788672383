pub mod config;
pub mod tracing;
pub mod wiring;

pub use config::{default_config_path, load_config, resolve_config};
pub use wiring::{build_picker, load_caller_entries, wire_dependencies, WiringError};
