//! Notifications command

use chrono::Local;
use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, OutputFormat};
use crate::error::Result;
use crate::models::HealthServiceDisplay;
use crate::notifications::{self, EMPTY_NOTICE, Notifications};
use crate::output::json::format_json;
use crate::output::table::format_table;
use crate::routes::Route;

/// Run the notifications command
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    ctx.enter(Route::Dashboard).await?;

    let today = Local::now().date_naive();
    let window = ctx.config.preferences.upcoming_window_days;

    match notifications::load(&*ctx.client, today, window).await {
        Ok(notes) if ctx.format == OutputFormat::Json => println!("{}", format_json(&notes)?),
        Ok(notes) => print_notifications(&notes),
        Err(notice) => println!("{}", notice.red()),
    }
    Ok(())
}

/// Print both lists; shared with the dashboard
pub fn print_notifications(notes: &Notifications) {
    if notes.is_empty() {
        println!("{}", EMPTY_NOTICE.dimmed());
        return;
    }

    if !notes.overdue.is_empty() {
        println!("{}", "Overdue".bold().red());
        for svc in &notes.overdue {
            println!("  {} {}", "⚠".red(), notifications::describe(svc));
        }
    }
    if !notes.upcoming.is_empty() {
        println!("{}", "Upcoming".bold());
        let rows: Vec<HealthServiceDisplay> =
            notes.upcoming.iter().map(HealthServiceDisplay::from).collect();
        println!("{}", format_table(&rows));
    }
}
