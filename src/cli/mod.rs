pub mod analyze;
pub mod check;
pub mod commands;
pub mod interactive;
pub mod subscriptions;

pub use commands::{Cli, Commands};

use std::path::Path;
use std::sync::Arc;

use crate::analyzer::SubscriptionAnalyzer;
use crate::auth::Authenticator;
use crate::azure::{self, ArmClient, GraphClient};
use crate::config::{self, Settings};
use crate::errors::AzscopeError;
use crate::models::Subscription;

/// Everything a command handler needs, wired from the resolved settings.
pub(crate) struct Runtime {
    pub settings: Settings,
    pub auth: Arc<Authenticator>,
    pub arm: ArmClient,
    pub analyzer: SubscriptionAnalyzer,
}

pub(crate) async fn build_runtime(config_path: Option<&Path>) -> Result<Runtime, AzscopeError> {
    let settings = config::load_settings(config_path).await?;
    let http = azure::http_client()?;
    let auth = Arc::new(Authenticator::new(http.clone(), settings.credentials.clone()));
    let arm = ArmClient::new(http.clone(), auth.clone());
    let resolver = Arc::new(GraphClient::new(http, auth.clone()));
    let analyzer = SubscriptionAnalyzer::new(
        arm.clone(),
        resolver,
        settings.privileged_roles.clone(),
    );
    Ok(Runtime {
        settings,
        auth,
        arm,
        analyzer,
    })
}

/// Picks a subscription by GUID (case-insensitive) or exact display name.
pub(crate) fn resolve_subscription<'a>(
    subscriptions: &'a [Subscription],
    selector: &str,
) -> Result<&'a Subscription, AzscopeError> {
    subscriptions
        .iter()
        .find(|s| s.id.eq_ignore_ascii_case(selector) || s.display_name == selector)
        .ok_or_else(|| AzscopeError::UnknownSubscription(selector.to_string()))
}
