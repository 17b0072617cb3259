//! Command execution context
//!
//! Builds the shared pieces every command needs: configuration, the session
//! store, the backend client, and the route guard wired to a token refresher.

use std::io::IsTerminal;
use std::sync::Arc;

use colored::Colorize;
use log::debug;

use crate::auth::{GuardOutcome, LoadingIndicator, RouteGuard, Silent, Spinner, TokenRefresher};
use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::client::{AuthApi, CareClient};
use crate::config::Config;
use crate::error::{AuthError, Result};
use crate::routes::Route;
use crate::session::{FileSessionStore, Session, SharedSessionStore};

/// Context for command execution
pub struct CommandContext {
    pub config: Config,
    pub store: SharedSessionStore,
    /// Arc-wrapped so the refresher can share it
    pub client: Arc<CareClient>,
    pub guard: RouteGuard,
    pub format: OutputFormat,
}

impl CommandContext {
    /// Load config and open the session store. Makes no network calls.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = Config::load_at(opts.config_ref())?.with_api_url(opts.api_url_ref());
        let format = opts.format_or(config.preferences.format.as_deref());

        let store: SharedSessionStore = Arc::new(FileSessionStore::open_at(opts.session_ref())?);
        let client = Arc::new(CareClient::new(&config, store.clone())?);

        let auth_api: Arc<dyn AuthApi> = client.clone();
        let refresher = Arc::new(TokenRefresher::new(store.clone(), auth_api));
        let guard = RouteGuard::new(refresher);

        debug!("Using backend {}", config.base_url());
        Ok(Self {
            config,
            store,
            client,
            guard,
            format,
        })
    }

    /// Enter a protected route.
    ///
    /// Runs a full check cycle and returns the (possibly refreshed) session.
    /// A redirect is reported on stderr and surfaces as the auth error.
    pub async fn enter(&self, route: Route) -> Result<Session> {
        let spinner;
        let indicator: &dyn LoadingIndicator = if std::io::stderr().is_terminal() {
            spinner = Spinner::new();
            &spinner
        } else {
            &Silent
        };

        match self.guard.enter(route, indicator, || self.store.get()).await {
            GuardOutcome::Render(session) => session,
            GuardOutcome::Redirect { to, reason } => {
                eprintln!("{} Redirecting to {}", "→".yellow(), to.path());
                Err(reason.into())
            }
            // enter() always resolves the cycle before returning
            GuardOutcome::Loading => Err(AuthError::NotSignedIn.into()),
        }
    }
}
