//! Login command implementation

use std::io::BufRead;

use colored::Colorize;
use dialoguer::{Input, Password, theme::ColorfulTheme};
use serde_json::json;

use crate::auth::{self, LoginOutcome};
use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, OutputFormat};
use crate::error::{Error, Result};
use crate::output::json::format_json;

/// Message shown when the account has no group with a dashboard
pub const NO_RECOGNIZED_ROLE: &str = "No recognized role for account";

/// Run the login command
pub async fn run(opts: &GlobalOptions, username: Option<String>, password_stdin: bool) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let username = match username {
        Some(u) => u,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Username")
            .interact_text()?,
    };
    let password = if password_stdin {
        read_password_line(std::io::stdin().lock())?
    } else {
        Password::with_theme(&ColorfulTheme::default())
            .with_prompt("Password")
            .interact()?
    };

    let outcome = auth::login(&*ctx.client, &*ctx.store, &username, &password)
        .await
        .map_err(|e| {
            log::debug!("Login failed: {}", e);
            Error::Login(auth::login_failure_message(&e))
        })?;

    match &outcome {
        LoginOutcome::Dashboard { role, route } => {
            if ctx.format == OutputFormat::Json {
                println!(
                    "{}",
                    format_json(&json!({ "role": role, "route": route.path() }))?
                );
            } else {
                println!("{} Signed in as {}", "✓".green(), role.to_string().bold());
                println!("  → {}", route.path().cyan());
            }
            Ok(())
        }
        LoginOutcome::NoRecognizedRole { groups } => {
            log::debug!("Groups without a dashboard: {:?}", groups);
            eprintln!("{} Redirecting to {}", "→".yellow(), outcome.route().path());
            Err(Error::Login(NO_RECOGNIZED_ROLE))
        }
    }
}

/// First line of `reader`, without the trailing newline
fn read_password_line(mut reader: impl BufRead) -> Result<String> {
    let mut line = String::new();
    reader.read_line(&mut line)?;
    let password = line.trim_end_matches(['\r', '\n']).to_string();
    if password.is_empty() {
        return Err(Error::InvalidInput("empty password on stdin".to_string()));
    }
    Ok(password)
}
