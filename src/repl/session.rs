use console::style;
use rustyline::error::ReadlineError;
use rustyline::{Config, Editor};

use crate::cli::analyze::analysis_spinner;
use crate::cli::{self, Runtime};
use crate::errors::AzscopeError;
use crate::models::Subscription;
use crate::repl::banner;
use crate::repl::commands::{self, SlashCommand};
use crate::repl::completer::ReplHelper;
use crate::reporting;

pub struct ReplSession {
    runtime: Runtime,
    /// Fetched once at startup; /list refreshes it.
    subscriptions: Vec<Subscription>,
}

impl ReplSession {
    pub(crate) fn new(runtime: Runtime) -> Self {
        Self {
            runtime,
            subscriptions: Vec::new(),
        }
    }

    pub async fn run(mut self) -> Result<(), AzscopeError> {
        banner::show_splash();

        // Load the subscription list up front so /analyze can take a number.
        match self.runtime.arm.list_subscriptions().await {
            Ok(subs) => {
                self.subscriptions = subs;
                print!(
                    "{}",
                    reporting::render_subscription_list(&self.subscriptions)
                );
            }
            Err(e) => {
                println!(
                    "{}",
                    reporting::render_error(&format!("Could not list subscriptions: {}", e))
                );
                println!(
                    "{}",
                    reporting::render_info("Verify credentials with `azscope check`, then /list to retry.")
                );
            }
        }

        // Set up rustyline editor
        let config = Config::builder().auto_add_history(true).build();
        let mut editor = Editor::with_config(config)
            .map_err(|e| AzscopeError::Internal(format!("Failed to initialize REPL: {}", e)))?;
        editor.set_helper(Some(ReplHelper::default()));

        // Main readline loop
        loop {
            let readline = {
                // rustyline is blocking, so use spawn_blocking
                let result = tokio::task::spawn_blocking({
                    move || {
                        let term_w = console::Term::stdout().size().1 as usize;
                        let sep = format!("{}", style("─".repeat(term_w)).dim());
                        let prompt = format!("{}\n{} ", sep, style("azscope>").cyan().bold());
                        let result = editor.readline(&prompt);
                        (editor, result)
                    }
                })
                .await
                .map_err(|e| AzscopeError::Internal(format!("Readline task failed: {}", e)))?;

                editor = result.0;
                result.1
            };

            match readline {
                Ok(line) => {
                    let trimmed = line.trim();
                    if trimmed.is_empty() {
                        continue;
                    }

                    // Bottom separator, printed after rustyline fully releases the terminal
                    let term_w = console::Term::stdout().size().1 as usize;
                    println!("{}", style("─".repeat(term_w)).dim());

                    match commands::parse_command(trimmed) {
                        Ok(cmd) => {
                            let should_exit = self.handle_command(cmd).await;
                            if should_exit {
                                break;
                            }
                        }
                        Err(msg) => {
                            println!("{}", reporting::render_error(&msg));
                        }
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!();
                    break;
                }
                Err(ReadlineError::Eof) => {
                    println!();
                    break;
                }
                Err(err) => {
                    println!(
                        "{}",
                        reporting::render_error(&format!("Input error: {}", err))
                    );
                    break;
                }
            }
        }

        println!("{}", reporting::render_info("Goodbye."));
        Ok(())
    }

    async fn handle_command(&mut self, cmd: SlashCommand) -> bool {
        match cmd {
            SlashCommand::Exit => return true,

            SlashCommand::Clear => {
                print!("\x1B[2J\x1B[1;1H");
            }

            SlashCommand::Help { command } => {
                println!("{}", commands::render_help(command.as_deref()));
            }

            SlashCommand::Version => {
                println!("{}", reporting::render_version());
            }

            SlashCommand::Roles => {
                print!(
                    "{}",
                    reporting::render_privileged_roles(&self.runtime.settings.privileged_roles)
                );
            }

            SlashCommand::List => {
                if self.refresh_subscriptions().await {
                    print!(
                        "{}",
                        reporting::render_subscription_list(&self.subscriptions)
                    );
                }
            }

            SlashCommand::Analyze { selector } => {
                self.handle_analyze(selector).await;
            }
        }

        false
    }

    /// Refetch the subscription list into the session cache.
    async fn refresh_subscriptions(&mut self) -> bool {
        match self.runtime.arm.list_subscriptions().await {
            Ok(subs) => {
                self.subscriptions = subs;
                true
            }
            Err(e) => {
                println!(
                    "{}",
                    reporting::render_error(&format!("Could not list subscriptions: {}", e))
                );
                false
            }
        }
    }

    async fn handle_analyze(&mut self, selector: Option<String>) {
        let Some(selector) = selector else {
            println!(
                "{}",
                reporting::render_error("Usage: /analyze <number|id|name>")
            );
            if !self.subscriptions.is_empty() {
                print!(
                    "{}",
                    reporting::render_subscription_list(&self.subscriptions)
                );
            }
            return;
        };

        if self.subscriptions.is_empty() && !self.refresh_subscriptions().await {
            return;
        }

        // A bare number picks from the /list ordering.
        let subscription = if let Ok(n) = selector.parse::<usize>() {
            if n >= 1 && n <= self.subscriptions.len() {
                self.subscriptions[n - 1].clone()
            } else {
                println!(
                    "{}",
                    reporting::render_error(&format!(
                        "Invalid choice. Enter 1-{}.",
                        self.subscriptions.len()
                    ))
                );
                return;
            }
        } else {
            match cli::resolve_subscription(&self.subscriptions, &selector) {
                Ok(s) => s.clone(),
                Err(e) => {
                    println!("{}", reporting::render_error(&e.to_string()));
                    return;
                }
            }
        };

        let spinner = analysis_spinner(&subscription.display_name);
        let report = self.runtime.analyzer.analyze(&subscription.id).await;
        spinner.finish_and_clear();

        print!("{}", reporting::render_subscription_header(&subscription));
        print!("{}", reporting::render_report(&report));
    }
}
