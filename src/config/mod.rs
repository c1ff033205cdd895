pub mod credentials;
pub mod loader;
pub mod types;

pub use credentials::{redact_secrets, resolve_credential};
pub use loader::{load_settings, parse_config};
pub use types::*;
