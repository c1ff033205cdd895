pub mod banner;
pub mod commands;
pub mod completer;
pub mod session;
