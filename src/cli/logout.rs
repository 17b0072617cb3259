//! Logout command implementation

use colored::Colorize;

use crate::auth;
use crate::cli::args::GlobalOptions;
use crate::error::Result;
use crate::session::FileSessionStore;

/// Clear the stored session. Works without a config or backend.
pub fn run(opts: &GlobalOptions) -> Result<()> {
    let store = FileSessionStore::open_at(opts.session_ref())?;
    let route = auth::logout(&store)?;

    println!("{} Signed out", "✓".green());
    println!("  → {}", route.path().cyan());
    Ok(())
}
