use console::style;

/// All slash commands supported by the interactive session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlashCommand {
    List,
    Analyze { selector: Option<String> },
    Roles,
    Version,
    Clear,
    Help { command: Option<String> },
    Exit,
}

/// Description of a command for help display.
pub struct CommandHelp {
    pub name: &'static str,
    pub usage: &'static str,
    pub description: &'static str,
}

pub static COMMAND_HELP: &[CommandHelp] = &[
    CommandHelp {
        name: "list",
        usage: "/list",
        description: "Show the numbered subscription list",
    },
    CommandHelp {
        name: "analyze",
        usage: "/analyze <number|id|name>",
        description: "Run the security checks against a subscription",
    },
    CommandHelp {
        name: "roles",
        usage: "/roles",
        description: "Show the privileged role set in effect",
    },
    CommandHelp {
        name: "version",
        usage: "/version",
        description: "Show version and build info",
    },
    CommandHelp {
        name: "clear",
        usage: "/clear",
        description: "Clear the terminal screen",
    },
    CommandHelp {
        name: "help",
        usage: "/help [command]",
        description: "Show help for all or a specific command",
    },
    CommandHelp {
        name: "exit",
        usage: "/exit",
        description: "Quit the session",
    },
];

/// All command names for tab completion.
pub static COMMAND_NAMES: &[&str] = &[
    "/list",
    "/analyze",
    "/roles",
    "/version",
    "/clear",
    "/help",
    "/exit",
];

/// Parse a raw input line into a SlashCommand, or return an error message.
/// A bare number is the picker shortcut for /analyze.
pub fn parse_command(input: &str) -> Result<SlashCommand, String> {
    let input = input.trim();

    if !input.starts_with('/') {
        if input.chars().all(|c| c.is_ascii_digit()) && !input.is_empty() {
            return Ok(SlashCommand::Analyze {
                selector: Some(input.to_string()),
            });
        }
        return Err("Commands must start with /. Type /help for available commands.".into());
    }

    let parts: Vec<&str> = input.split_whitespace().collect();
    let cmd = parts[0];
    let args = &parts[1..];

    match cmd {
        "/list" => Ok(SlashCommand::List),
        "/analyze" => Ok(SlashCommand::Analyze {
            selector: args.first().map(|s| s.to_string()),
        }),
        "/roles" => Ok(SlashCommand::Roles),
        "/version" => Ok(SlashCommand::Version),
        "/clear" => Ok(SlashCommand::Clear),
        "/help" => Ok(SlashCommand::Help {
            command: args.first().map(|s| s.trim_start_matches('/').to_string()),
        }),
        "/exit" | "/quit" | "/q" => Ok(SlashCommand::Exit),
        other => Err(format!(
            "Unknown command: {}. Type /help for available commands.",
            other
        )),
    }
}

/// Render the help listing for all commands, or detail for one.
pub fn render_help(specific_command: Option<&str>) -> String {
    if let Some(cmd_name) = specific_command {
        if let Some(cmd) = COMMAND_HELP.iter().find(|c| c.name == cmd_name) {
            return format!(
                "\n{}\n  {}\n\n  {}\n",
                style(format!("/{}", cmd.name)).cyan().bold(),
                style(cmd.description).dim(),
                style(cmd.usage).white(),
            );
        }
        return format!("{} Unknown command: /{}", style("✗").red(), cmd_name);
    }

    let mut out = String::new();
    out.push_str(&format!(
        "\n{}\n\n",
        style("Available commands:").white().bold()
    ));
    for cmd in COMMAND_HELP {
        out.push_str(&format!(
            "  {:<12} {}\n",
            style(format!("/{}", cmd.name)).cyan().bold(),
            style(cmd.description).dim(),
        ));
    }
    out
}
