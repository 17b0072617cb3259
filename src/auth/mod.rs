//! Session authorization
//!
//! - [`token`] decodes the access token's expiration
//! - [`refresh`] runs the check/refresh cycle
//! - [`guard`] gates protected routes on that cycle
//! - [`role`] derives the active role and its navigation
//! - [`login`] creates and clears sessions

pub mod guard;
pub mod login;
pub mod refresh;
pub mod role;
pub mod token;

pub use guard::{GuardOutcome, LoadingIndicator, RouteGuard, Silent, Spinner};
pub use login::{LoginOutcome, login, login_failure_message, logout};
pub use refresh::{AuthState, TokenRefresher};
pub use role::{NavAction, Role, resolve_role};
pub use token::DecodedToken;
