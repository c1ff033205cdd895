pub mod types;

pub use types::AzscopeError;
