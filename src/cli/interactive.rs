use std::path::Path;

use crate::errors::AzscopeError;
use crate::repl::session::ReplSession;

pub async fn handle_interactive(config_path: Option<&Path>) -> Result<(), AzscopeError> {
    let runtime = super::build_runtime(config_path).await?;
    ReplSession::new(runtime).run().await
}
