use std::path::Path;

use tracing::info;

use crate::cli::commands::SubscriptionsArgs;
use crate::errors::AzscopeError;
use crate::reporting;

pub async fn handle_subscriptions(
    args: SubscriptionsArgs,
    config_path: Option<&Path>,
) -> Result<(), AzscopeError> {
    let runtime = super::build_runtime(config_path).await?;
    let subscriptions = runtime.arm.list_subscriptions().await?;
    info!(count = subscriptions.len(), "Fetched subscriptions");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&subscriptions)?);
    } else {
        println!("{}", reporting::render_subscription_list(&subscriptions));
    }
    Ok(())
}
