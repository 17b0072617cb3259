//! Role resolution and the role-to-navigation table

use std::fmt;

use serde::Serialize;

use crate::dashboard::FormKind;
use crate::session::Session;

/// Group names the backend hands out
pub const GROUP_SUPERVISOR: &str = "Supervisor";
pub const GROUP_CASEWORKER: &str = "Caseworker";
pub const GROUP_FOSTER_PARENT: &str = "FosterParent";

/// Role shown when the session carries no groups
pub const UNKNOWN_ROLE: &str = "Unknown";

/// Active role, taken from the first session group
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum Role {
    Supervisor,
    Caseworker,
    FosterParent,
    /// A group name with no dashboard of its own
    Other(String),
    Unknown,
}

impl Role {
    pub fn from_group(group: &str) -> Self {
        match group {
            GROUP_SUPERVISOR => Role::Supervisor,
            GROUP_CASEWORKER => Role::Caseworker,
            GROUP_FOSTER_PARENT => Role::FosterParent,
            UNKNOWN_ROLE => Role::Unknown,
            other => Role::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Role::Supervisor => GROUP_SUPERVISOR,
            Role::Caseworker => GROUP_CASEWORKER,
            Role::FosterParent => GROUP_FOSTER_PARENT,
            Role::Other(name) => name,
            Role::Unknown => UNKNOWN_ROLE,
        }
    }

    /// Whether this role has a dashboard
    pub fn is_recognized(&self) -> bool {
        matches!(
            self,
            Role::Supervisor | Role::Caseworker | Role::FosterParent
        )
    }

    /// Ordered navigation actions; empty for roles without a dashboard
    pub fn actions(&self) -> &'static [NavAction] {
        NAVIGATION
            .iter()
            .find(|(group, _)| *group == self.as_str())
            .map(|(_, actions)| *actions)
            .unwrap_or(&[])
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role = first group, or `Unknown` when there are none
pub fn resolve_role(session: &Session) -> Role {
    session
        .groups
        .first()
        .map(|g| Role::from_group(g))
        .unwrap_or(Role::Unknown)
}

/// A button in the navigation pane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavAction {
    pub label: &'static str,
    pub form: FormKind,
}

const fn action(label: &'static str, form: FormKind) -> NavAction {
    NavAction { label, form }
}

/// Navigation per group name. Adding a role is a row here.
pub const NAVIGATION: &[(&str, &[NavAction])] = &[
    (
        GROUP_SUPERVISOR,
        &[
            action("Add Child", FormKind::AddChild),
            action("Add Foster Family", FormKind::AddFosterFamily),
            action("Add Case", FormKind::AddCase),
            action("Add Placement", FormKind::AddPlacement),
        ],
    ),
    (
        GROUP_CASEWORKER,
        &[
            action("Add Case", FormKind::AddCase),
            action("Add Placement", FormKind::AddPlacement),
        ],
    ),
    (
        GROUP_FOSTER_PARENT,
        &[
            action("Enter Health Visit", FormKind::EnterHealthVisit),
            action("Update Medications", FormKind::UpdateMedications),
        ],
    ),
];
