//! Role-driven dashboard composition
//!
//! The controller owns the view state: which form is open, which case is
//! selected, and the refresh counters for the case list and detail pane. A
//! form and a selected case are never shown together; opening one clears the
//! other.

use serde::Serialize;

use crate::auth::{NavAction, Role};
use crate::client::models::Case;

mod refresh;
mod views;

pub use refresh::{RefreshCounter, RefreshObserver};
pub use views::{CaseDetail, CaseListPane, DetailPaneData, load_case_detail};

/// Forms reachable from the navigation pane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormKind {
    AddCase,
    AddPlacement,
    AddChild,
    AddFosterFamily,
    EnterHealthVisit,
    UpdateMedications,
}

impl FormKind {
    pub fn title(&self) -> &'static str {
        match self {
            FormKind::AddCase => "New Case",
            FormKind::AddPlacement => "New Placement",
            FormKind::AddChild => "New Child",
            FormKind::AddFosterFamily => "New Foster Family",
            FormKind::EnterHealthVisit => "Health Visit",
            FormKind::UpdateMedications => "Update Medications",
        }
    }

    /// What a successful submit invalidates
    pub fn invalidates(&self) -> Invalidation {
        match self {
            FormKind::AddCase | FormKind::AddChild => Invalidation::CaseList,
            FormKind::AddPlacement
            | FormKind::AddFosterFamily
            | FormKind::EnterHealthVisit
            | FormKind::UpdateMedications => Invalidation::Detail,
        }
    }
}

/// Which dependent view must re-fetch after a mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Invalidation {
    CaseList,
    Detail,
}

/// Dashboard view state
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DashboardViewState {
    pub active_form: Option<FormKind>,
    pub selected_case: Option<Case>,
    pub case_list_refresh: RefreshCounter,
    pub detail_refresh: RefreshCounter,
}

/// Right-hand pane of the dashboard
#[derive(Debug, Clone, PartialEq)]
pub enum DetailPane {
    Form(FormKind),
    Case(Case),
    /// Nothing selected: "Select a case from the list."
    Empty,
}

/// Composed dashboard for one render
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub role: Role,
    pub navigation: &'static [NavAction],
    pub case_list_refresh: RefreshCounter,
    pub detail_refresh: RefreshCounter,
    pub detail: DetailPane,
}

/// Owns [`DashboardViewState`]; the only way to change it.
#[derive(Debug, Clone)]
pub struct DashboardController {
    role: Role,
    state: DashboardViewState,
}

impl DashboardController {
    /// Mount a dashboard for `role` with default state
    pub fn new(role: Role) -> Self {
        Self {
            role,
            state: DashboardViewState::default(),
        }
    }

    pub fn role(&self) -> &Role {
        &self.role
    }

    pub fn state(&self) -> &DashboardViewState {
        &self.state
    }

    /// Navigation actions for the role; empty when the role is unknown
    pub fn navigation(&self) -> &'static [NavAction] {
        self.role.actions()
    }

    pub fn select_form(&mut self, form: FormKind) {
        self.state.active_form = Some(form);
        self.state.selected_case = None;
    }

    pub fn select_case(&mut self, case: Case) {
        self.state.selected_case = Some(case);
        self.state.active_form = None;
    }

    /// Close the form, revealing whatever selection remains
    pub fn close_form(&mut self) {
        self.state.active_form = None;
    }

    /// The case list must re-fetch
    pub fn notify_case_created(&mut self) {
        self.state.case_list_refresh.bump();
    }

    /// The detail pane must re-fetch data for the selected case
    pub fn notify_detail_updated(&mut self) {
        self.state.detail_refresh.bump();
    }

    /// Route a submit's invalidation to the right counter
    pub fn notify(&mut self, invalidation: Invalidation) {
        match invalidation {
            Invalidation::CaseList => self.notify_case_created(),
            Invalidation::Detail => self.notify_detail_updated(),
        }
    }

    /// Compose the current view
    pub fn view(&self) -> DashboardView {
        let detail = match (&self.state.active_form, &self.state.selected_case) {
            (Some(form), _) => DetailPane::Form(*form),
            (None, Some(case)) => DetailPane::Case(case.clone()),
            (None, None) => DetailPane::Empty,
        };
        DashboardView {
            role: self.role.clone(),
            navigation: self.navigation(),
            case_list_refresh: self.state.case_list_refresh,
            detail_refresh: self.state.detail_refresh,
            detail,
        }
    }
}
