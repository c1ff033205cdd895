use std::path::Path;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::cli::commands::AnalyzeArgs;
use crate::errors::AzscopeError;
use crate::reporting::{self, AnalysisDocument};

pub async fn handle_analyze(
    args: AnalyzeArgs,
    config_path: Option<&Path>,
    quiet: bool,
) -> Result<(), AzscopeError> {
    let runtime = super::build_runtime(config_path).await?;
    let subscriptions = runtime.arm.list_subscriptions().await?;
    let subscription = super::resolve_subscription(&subscriptions, &args.subscription)?.clone();

    let spinner = if args.json || quiet {
        None
    } else {
        Some(analysis_spinner(&subscription.display_name))
    };

    let report = runtime.analyzer.analyze(&subscription.id).await;

    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    if args.json {
        let document = AnalysisDocument::new(subscription, report);
        println!("{}", serde_json::to_string_pretty(&document)?);
    } else {
        print!("{}", reporting::render_subscription_header(&subscription));
        print!("{}", reporting::render_report(&report));
    }
    Ok(())
}

pub(crate) fn analysis_spinner(subscription_name: &str) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    bar.set_style(
        ProgressStyle::default_spinner()
            .template("  {spinner:.cyan} {msg}")
            .unwrap(),
    );
    bar.set_message(format!("Analyzing {}...", subscription_name));
    bar.enable_steady_tick(Duration::from_millis(120));
    bar
}
