use std::path::Path;

use console::style;

use crate::auth::{ARM_SCOPE, GRAPH_SCOPE};
use crate::errors::AzscopeError;
use crate::reporting::{render_info, render_success};

/// Verifies the service principal can obtain tokens. The management-plane
/// token is required; a Graph failure is reported but tolerated, matching
/// the degraded principal resolution during analysis.
pub async fn handle_check(config_path: Option<&Path>) -> Result<(), AzscopeError> {
    let runtime = super::build_runtime(config_path).await?;

    println!(
        "{}",
        render_info(&format!("Tenant: {}", runtime.auth.tenant_id()))
    );

    runtime.auth.token(ARM_SCOPE).await?;
    println!("{}", render_success("Management API token acquired"));

    match runtime.auth.token(GRAPH_SCOPE).await {
        Ok(_) => println!("{}", render_success("Microsoft Graph token acquired")),
        Err(e) => println!(
            "{} {}",
            style("⚠").yellow().bold(),
            style(format!(
                "Microsoft Graph token unavailable (principals will show as Unknown): {}",
                e
            ))
            .yellow(),
        ),
    }
    Ok(())
}
