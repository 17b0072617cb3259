//! Status command implementation
//!
//! Reads the config and session files only; no network calls and no refresh.

use chrono::{DateTime, Utc};
use colored::Colorize;
use serde::Serialize;

use crate::auth::{DecodedToken, Role, resolve_role};
use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::config::Config;
use crate::error::Result;
use crate::output::json::format_json;
use crate::routes::Route;
use crate::session::{FileSessionStore, Session, SessionStore};

/// Access token state as seen from the session file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "state")]
pub enum TokenStatus {
    Missing,
    Valid {
        expires_in_secs: i64,
        expires_at: Option<DateTime<Utc>>,
    },
    Expired {
        expired_at: Option<DateTime<Utc>>,
    },
    Malformed,
}

impl TokenStatus {
    pub fn of(access_token: Option<&str>, now: DateTime<Utc>) -> Self {
        let Some(token) = access_token else {
            return TokenStatus::Missing;
        };
        match DecodedToken::decode(token) {
            Ok(decoded) if decoded.is_expired_at(now) => TokenStatus::Expired {
                expired_at: decoded.expires_at(),
            },
            Ok(decoded) => TokenStatus::Valid {
                expires_in_secs: decoded.expiration_epoch_seconds - now.timestamp(),
                expires_at: decoded.expires_at(),
            },
            Err(_) => TokenStatus::Malformed,
        }
    }
}

#[derive(Debug, Serialize)]
struct StatusReport {
    api_url: String,
    session_file: String,
    access_token: TokenStatus,
    refresh_token: bool,
    role: Role,
    dashboard: Option<&'static str>,
}

impl StatusReport {
    fn build(config: &Config, store: &FileSessionStore, session: &Session, now: DateTime<Utc>) -> Self {
        let role = resolve_role(session);
        Self {
            api_url: config.base_url().to_string(),
            session_file: store.path().display().to_string(),
            access_token: TokenStatus::of(session.access_token.as_deref(), now),
            refresh_token: session.refresh_token.is_some(),
            dashboard: Route::dashboard_for(&role).map(|r| r.path()),
            role,
        }
    }
}

fn format_instant(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M UTC").to_string()
}

/// Run the status command
pub fn run(opts: &GlobalOptions) -> Result<()> {
    let config = Config::load_at(opts.config_ref())?.with_api_url(opts.api_url_ref());
    let store = FileSessionStore::open_at(opts.session_ref())?;
    let session = store.get()?;
    let report = StatusReport::build(&config, &store, &session, Utc::now());

    if opts.format_or(config.preferences.format.as_deref()) == OutputFormat::Json {
        println!("{}", format_json(&report)?);
        return Ok(());
    }

    println!("{}\n", "Care2Connect Session Status".bold());
    println!("Backend: {}", report.api_url.cyan());
    println!("Session file: {}", report.session_file.cyan());
    println!();

    match report.access_token {
        TokenStatus::Missing => {
            println!("{} Not signed in", "✗".red());
            println!("  → Run 'c2c login' to sign in");
        }
        TokenStatus::Valid {
            expires_in_secs,
            expires_at,
        } => {
            let hours = expires_in_secs / 3600;
            let mins = (expires_in_secs % 3600) / 60;
            println!(
                "{} Access token valid (expires in {}h {}m)",
                "✓".green(),
                hours,
                mins
            );
            if let Some(at) = expires_at {
                println!("  Expires at {}", format_instant(at).dimmed());
            }
        }
        TokenStatus::Expired { expired_at } => {
            println!(
                "{} Access token expired (will refresh on next command)",
                "⚠".yellow()
            );
            if let Some(at) = expired_at {
                println!("  Expired at {}", format_instant(at).dimmed());
            }
        }
        TokenStatus::Malformed => {
            println!("{} Access token is malformed", "✗".red());
            println!("  → Run 'c2c login' to sign in again");
        }
    }

    if report.refresh_token {
        println!("{} Refresh token stored", "✓".green());
    } else if report.access_token != TokenStatus::Missing {
        println!("{} No refresh token stored", "○".dimmed());
    }

    match report.dashboard {
        Some(path) => println!("{} Role: {} ({})", "✓".green(), report.role, path),
        None => println!("{} Role: {}", "○".dimmed(), report.role),
    }
    println!();

    Ok(())
}
