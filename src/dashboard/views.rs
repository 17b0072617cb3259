//! Data-backed dashboard panes
//!
//! Each pane watches one refresh counter and re-fetches when it changes.
//! Fetch failures become an inline notice on the pane; they never touch the
//! session or the controller's view state.

use log::{debug, warn};

use super::{RefreshCounter, RefreshObserver};
use crate::client::CareApi;
use crate::client::models::{Case, Child, FosterFamily, FosterPlacement, HealthService};
use crate::error::Result;

/// Assigned-case list with a name filter
#[derive(Debug, Default)]
pub struct CaseListPane {
    observer: RefreshObserver,
    cases: Vec<Case>,
    notice: Option<String>,
    pub filter: String,
}

impl CaseListPane {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-fetch if the counter moved since the last fetch; returns whether it fetched
    pub async fn sync(&mut self, api: &dyn CareApi, counter: &RefreshCounter) -> bool {
        if !self.observer.needs_refetch(counter) {
            return false;
        }
        debug!("Fetching cases (refresh {})", counter.value());
        match api.list_cases().await {
            Ok(cases) => {
                self.cases = cases;
                self.notice = None;
            }
            Err(e) => {
                warn!("Error fetching cases: {}", e);
                self.notice = Some("Failed to load cases.".to_string());
            }
        }
        self.observer.mark_fetched(counter);
        true
    }

    /// Cases matching the current filter
    pub fn visible(&self) -> Vec<&Case> {
        self.cases
            .iter()
            .filter(|c| c.matches_filter(&self.filter))
            .collect()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}

/// Everything shown for a selected case
#[derive(Debug, Clone, PartialEq)]
pub struct CaseDetail {
    pub case: Case,
    pub child: Option<Child>,
    pub placement: Option<FosterPlacement>,
    pub family: Option<FosterFamily>,
    pub health_services: Vec<HealthService>,
}

/// Load the child, placement, family, and health records behind a case
pub async fn load_case_detail(api: &dyn CareApi, case: &Case) -> Result<CaseDetail> {
    let child_id = case.child.id();

    let (child, placements, families, services) = futures::try_join!(
        api.get_child(child_id),
        api.list_placements(),
        api.list_foster_families(),
        api.list_health_services(),
    )?;

    let placement = match case.placement {
        Some(id) => placements.into_iter().find(|p| p.id == id),
        // Fall back to the child's open placement
        None => placements
            .into_iter()
            .find(|p| p.child == Some(child_id) && p.end_date.is_none()),
    };
    let family = placement
        .as_ref()
        .and_then(|p| p.foster_family)
        .and_then(|fid| families.into_iter().find(|f| f.id == fid));
    let health_services = services
        .into_iter()
        .filter(|s| s.child.id() == child_id)
        .collect();

    Ok(CaseDetail {
        case: case.clone(),
        child: Some(child),
        placement,
        family,
        health_services,
    })
}

/// Detail pane for the selected case
#[derive(Debug, Default)]
pub struct DetailPaneData {
    observer: RefreshObserver,
    case_id: Option<i64>,
    detail: Option<CaseDetail>,
    notice: Option<String>,
}

impl DetailPaneData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-fetch when the selection or the counter changed
    pub async fn sync(
        &mut self,
        api: &dyn CareApi,
        selected: Option<&Case>,
        counter: &RefreshCounter,
    ) -> bool {
        let Some(case) = selected else {
            self.case_id = None;
            self.detail = None;
            self.observer.reset();
            return false;
        };

        if self.case_id != Some(case.id) {
            self.observer.reset();
        }
        if !self.observer.needs_refetch(counter) {
            return false;
        }

        match load_case_detail(api, case).await {
            Ok(detail) => {
                self.detail = Some(detail);
                self.notice = None;
            }
            Err(e) => {
                warn!("Error fetching case {} details: {}", case.id, e);
                self.detail = None;
                self.notice = Some("Failed to load case details.".to_string());
            }
        }
        self.case_id = Some(case.id);
        self.observer.mark_fetched(counter);
        true
    }

    pub fn detail(&self) -> Option<&CaseDetail> {
        self.detail.as_ref()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::auth::Role;
    use crate::client::MockCareClient;
    use crate::client::models::{CaseStatus, ChildRef, HealthStatus};
    use crate::dashboard::DashboardController;
    use crate::error::ApiError;

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, m, d).unwrap()
    }

    fn case(id: i64, first: &str, last: &str, child: i64) -> Case {
        Case {
            id,
            child: ChildRef::Summary {
                id: child,
                first_name: first.into(),
                last_name: last.into(),
            },
            caseworker: Some(1),
            placement: None,
            status: CaseStatus::Open,
            start_date: date(1, 1),
            end_date: None,
        }
    }

    fn child(id: i64) -> Child {
        Child {
            id,
            first_name: "Ana".into(),
            last_name: "Diaz".into(),
            dob: NaiveDate::from_ymd_opt(2019, 5, 4).unwrap(),
            medications: None,
            allergies: Some("peanuts".into()),
        }
    }

    #[tokio::test]
    async fn test_case_list_refetches_on_each_creation() {
        let api = MockCareClient::new()
            .with_cases(vec![case(1, "Ana", "Diaz", 10)])
            .await;
        let mut ctrl = DashboardController::new(Role::Caseworker);
        let mut pane = CaseListPane::new();

        assert!(pane.sync(&api, &ctrl.state().case_list_refresh).await);
        assert!(!pane.sync(&api, &ctrl.state().case_list_refresh).await);

        for _ in 0..3 {
            ctrl.notify_case_created();
            assert!(pane.sync(&api, &ctrl.state().case_list_refresh).await);
        }
        assert_eq!(api.call_counts().await.list_cases, 4);
    }

    #[tokio::test]
    async fn test_case_list_filter() {
        let api = MockCareClient::new()
            .with_cases(vec![
                case(1, "Ana", "Diaz", 10),
                case(2, "Ben", "Okafor", 11),
            ])
            .await;
        let mut pane = CaseListPane::new();
        pane.sync(&api, &RefreshCounter::new()).await;

        pane.filter = "oka".into();
        let visible = pane.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, 2);
    }

    #[tokio::test]
    async fn test_case_list_failure_is_inline_notice() {
        let api = MockCareClient::new()
            .with_error(ApiError::ServerError("down".into()))
            .await;
        let mut pane = CaseListPane::new();
        pane.sync(&api, &RefreshCounter::new()).await;

        assert_eq!(pane.notice(), Some("Failed to load cases."));
        assert!(pane.visible().is_empty());
        pane.dismiss_notice();
        assert!(pane.notice().is_none());
    }

    #[tokio::test]
    async fn test_detail_refetches_on_update_and_selection_change() {
        let api = MockCareClient::new()
            .with_children(vec![child(10), child(11)])
            .await
            .with_health_services(vec![HealthService {
                id: 1,
                child: ChildRef::Id(10),
                service: vec!["dental".into()],
                immunizations: None,
                due_date: date(6, 1),
                completed_date: None,
                status: HealthStatus::Pending,
            }])
            .await;
        let mut ctrl = DashboardController::new(Role::FosterParent);
        let mut pane = DetailPaneData::new();

        let first = case(1, "Ana", "Diaz", 10);
        ctrl.select_case(first.clone());
        assert!(pane.sync(&api, ctrl.state().selected_case.as_ref(), &ctrl.state().detail_refresh).await);
        assert_eq!(pane.detail().unwrap().health_services.len(), 1);
        assert_eq!(pane.detail().unwrap().child.as_ref().unwrap().id, 10);

        assert!(!pane.sync(&api, ctrl.state().selected_case.as_ref(), &ctrl.state().detail_refresh).await);

        ctrl.notify_detail_updated();
        assert!(pane.sync(&api, ctrl.state().selected_case.as_ref(), &ctrl.state().detail_refresh).await);

        ctrl.select_case(case(2, "Ben", "Okafor", 11));
        assert!(pane.sync(&api, ctrl.state().selected_case.as_ref(), &ctrl.state().detail_refresh).await);
        assert!(pane.detail().unwrap().health_services.is_empty());
    }

    #[tokio::test]
    async fn test_detail_failure_keeps_view_state() {
        let api = MockCareClient::new();
        let mut ctrl = DashboardController::new(Role::Caseworker);
        ctrl.select_case(case(1, "Ana", "Diaz", 99));
        let before = ctrl.state().clone();

        let mut pane = DetailPaneData::new();
        pane.sync(&api, ctrl.state().selected_case.as_ref(), &ctrl.state().detail_refresh).await;

        assert_eq!(pane.notice(), Some("Failed to load case details."));
        assert_eq!(ctrl.state(), &before);
    }
}
