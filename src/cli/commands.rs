use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "azscope", version, about = "Azure subscription security inspector")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// YAML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List subscriptions visible to the service principal
    Subscriptions(SubscriptionsArgs),
    /// Run the security checks against one subscription
    Analyze(AnalyzeArgs),
    /// Verify credentials against both API planes
    Check,
    /// Interactive session with a subscription picker
    Interactive,
}

#[derive(Args, Clone)]
pub struct SubscriptionsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Clone)]
pub struct AnalyzeArgs {
    /// Subscription id or display name
    #[arg(short, long)]
    pub subscription: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
