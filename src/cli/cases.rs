//! Case list command

use log::debug;

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::client::CaseApi;
use crate::error::Result;
use crate::models::CaseDisplay;
use crate::output::Formattable;
use crate::routes::Route;

/// Run the cases command
pub async fn list(opts: &GlobalOptions, filter: Option<&str>) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    ctx.enter(Route::Dashboard).await?;

    let cases = ctx.client.list_cases().await?;
    debug!("Fetched {} cases", cases.len());

    let filter = filter.unwrap_or("");
    let display: Vec<CaseDisplay> = cases
        .iter()
        .filter(|c| c.matches_filter(filter))
        .map(CaseDisplay::from)
        .collect();

    display.print(ctx.format)
}
