//! Mock Care2Connect API client for testing
//!
//! Provides a mock implementation of the API traits for unit testing
//! without making real API calls.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::api::{AuthApi, CaseApi, ChildApi, FamilyApi, HealthApi};
use super::models::{
    Case, Child, ChildRef, ChildUpdate, FosterFamily, FosterPlacement, HealthService, NewCase,
    NewChild, NewFosterFamily, NewHealthService, NewPlacement, TokenPair,
};
use crate::error::{ApiError, Result};

/// Mock API client for testing.
///
/// Configure responses via builder methods, then hand it to the code under test.
///
/// # Example
/// ```ignore
/// let mock = MockCareClient::new().with_refreshed_access("a2").await;
/// assert_eq!(mock.refresh_access("r1").await?, "a2");
/// ```
#[derive(Default)]
pub struct MockCareClient {
    /// Token pair returned from obtain_token
    token_pair: Arc<Mutex<Option<TokenPair>>>,
    /// Access token returned from refresh_access
    refreshed_access: Arc<Mutex<Option<String>>>,
    /// Error returned from refresh_access (takes precedence)
    refresh_error: Arc<Mutex<Option<ApiError>>>,
    /// Artificial latency for refresh_access
    refresh_delay: Arc<Mutex<Option<Duration>>>,
    cases: Arc<Mutex<Vec<Case>>>,
    children: Arc<Mutex<Vec<Child>>>,
    families: Arc<Mutex<Vec<FosterFamily>>>,
    placements: Arc<Mutex<Vec<FosterPlacement>>>,
    health_services: Arc<Mutex<Vec<HealthService>>>,
    /// Error to return on the next data call - consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    call_count: Arc<Mutex<CallCounts>>,
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub obtain_token: usize,
    pub refresh_access: usize,
    pub list_cases: usize,
    pub create_case: usize,
    pub list_children: usize,
    pub create_child: usize,
    pub update_child: usize,
    pub list_foster_families: usize,
    pub create_foster_family: usize,
    pub list_placements: usize,
    pub create_placement: usize,
    pub list_health_services: usize,
    pub create_health_service: usize,
}

impl MockCareClient {
    /// Create a new mock client with default (empty) responses.
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn with_token_pair(self, pair: TokenPair) -> Self {
        *self.token_pair.lock().await = Some(pair);
        self
    }

    pub async fn with_refreshed_access(self, access: &str) -> Self {
        *self.refreshed_access.lock().await = Some(access.to_string());
        self
    }

    pub async fn with_refresh_error(self, error: ApiError) -> Self {
        *self.refresh_error.lock().await = Some(error);
        self
    }

    pub async fn with_refresh_delay(self, delay: Duration) -> Self {
        *self.refresh_delay.lock().await = Some(delay);
        self
    }

    pub async fn with_cases(self, cases: Vec<Case>) -> Self {
        *self.cases.lock().await = cases;
        self
    }

    pub async fn with_children(self, children: Vec<Child>) -> Self {
        *self.children.lock().await = children;
        self
    }

    pub async fn with_health_services(self, services: Vec<HealthService>) -> Self {
        *self.health_services.lock().await = services;
        self
    }

    /// Configure an error to return on the next data call.
    pub async fn with_error(self, error: ApiError) -> Self {
        *self.error.lock().await = Some(error);
        self
    }

    /// Get the call counts for verification in tests.
    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    async fn check_error(&self) -> Result<()> {
        if let Some(e) = self.error.lock().await.take() {
            return Err(e.into());
        }
        Ok(())
    }
}

#[async_trait]
impl AuthApi for MockCareClient {
    async fn obtain_token(&self, _username: &str, _password: &str) -> Result<TokenPair> {
        self.call_count.lock().await.obtain_token += 1;
        self.token_pair
            .lock()
            .await
            .clone()
            .ok_or_else(|| ApiError::Unauthorized.into())
    }

    async fn refresh_access(&self, _refresh_token: &str) -> Result<String> {
        self.call_count.lock().await.refresh_access += 1;

        let delay = *self.refresh_delay.lock().await;
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if let Some(e) = self.refresh_error.lock().await.clone() {
            return Err(e.into());
        }
        self.refreshed_access
            .lock()
            .await
            .clone()
            .ok_or_else(|| ApiError::Unauthorized.into())
    }
}

#[async_trait]
impl CaseApi for MockCareClient {
    async fn list_cases(&self) -> Result<Vec<Case>> {
        self.check_error().await?;
        self.call_count.lock().await.list_cases += 1;
        Ok(self.cases.lock().await.clone())
    }

    async fn get_case(&self, id: i64) -> Result<Case> {
        self.check_error().await?;
        self.cases
            .lock()
            .await
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("case {}", id)).into())
    }

    async fn create_case(&self, case: &NewCase) -> Result<Case> {
        self.check_error().await?;
        self.call_count.lock().await.create_case += 1;

        let mut cases = self.cases.lock().await;
        let created = Case {
            id: cases.len() as i64 + 1,
            child: ChildRef::Id(case.child),
            caseworker: case.caseworker,
            placement: None,
            status: case.status,
            start_date: case.start_date,
            end_date: None,
        };
        cases.push(created.clone());
        Ok(created)
    }
}

#[async_trait]
impl ChildApi for MockCareClient {
    async fn list_children(&self) -> Result<Vec<Child>> {
        self.check_error().await?;
        self.call_count.lock().await.list_children += 1;
        Ok(self.children.lock().await.clone())
    }

    async fn get_child(&self, id: i64) -> Result<Child> {
        self.check_error().await?;
        self.children
            .lock()
            .await
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("child {}", id)).into())
    }

    async fn create_child(&self, child: &NewChild) -> Result<Child> {
        self.check_error().await?;
        self.call_count.lock().await.create_child += 1;

        let mut children = self.children.lock().await;
        let created = Child {
            id: children.len() as i64 + 1,
            first_name: child.first_name.clone(),
            last_name: child.last_name.clone(),
            dob: child.dob,
            medications: child.medications.clone(),
            allergies: child.allergies.clone(),
        };
        children.push(created.clone());
        Ok(created)
    }

    async fn update_child(&self, id: i64, update: &ChildUpdate) -> Result<Child> {
        self.check_error().await?;
        self.call_count.lock().await.update_child += 1;

        let mut children = self.children.lock().await;
        let child = children
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| ApiError::NotFound(format!("child {}", id)))?;
        if let Some(ref meds) = update.medications {
            child.medications = Some(meds.clone());
        }
        if let Some(ref allergies) = update.allergies {
            child.allergies = Some(allergies.clone());
        }
        Ok(child.clone())
    }
}

#[async_trait]
impl FamilyApi for MockCareClient {
    async fn list_foster_families(&self) -> Result<Vec<FosterFamily>> {
        self.check_error().await?;
        self.call_count.lock().await.list_foster_families += 1;
        Ok(self.families.lock().await.clone())
    }

    async fn create_foster_family(&self, family: &NewFosterFamily) -> Result<FosterFamily> {
        self.check_error().await?;
        self.call_count.lock().await.create_foster_family += 1;

        let mut families = self.families.lock().await;
        let created = FosterFamily {
            id: families.len() as i64 + 1,
            family_name: family.family_name.clone(),
            parent1: family.parent1,
            parent2: family.parent2,
            max_occupancy: family.max_occupancy,
            current_occupancy: 0,
        };
        families.push(created.clone());
        Ok(created)
    }

    async fn list_placements(&self) -> Result<Vec<FosterPlacement>> {
        self.check_error().await?;
        self.call_count.lock().await.list_placements += 1;
        Ok(self.placements.lock().await.clone())
    }

    async fn create_placement(&self, placement: &NewPlacement) -> Result<FosterPlacement> {
        self.check_error().await?;
        self.call_count.lock().await.create_placement += 1;

        let mut placements = self.placements.lock().await;
        let created = FosterPlacement {
            id: placements.len() as i64 + 1,
            child: Some(placement.child),
            foster_family: Some(placement.foster_family),
            start_date: placement.start_date,
            end_date: None,
            end_reason: None,
        };
        placements.push(created.clone());
        Ok(created)
    }
}

#[async_trait]
impl HealthApi for MockCareClient {
    async fn list_health_services(&self) -> Result<Vec<HealthService>> {
        self.check_error().await?;
        self.call_count.lock().await.list_health_services += 1;
        Ok(self.health_services.lock().await.clone())
    }

    async fn create_health_service(&self, service: &NewHealthService) -> Result<HealthService> {
        self.check_error().await?;
        self.call_count.lock().await.create_health_service += 1;

        let mut services = self.health_services.lock().await;
        let created = HealthService {
            id: services.len() as i64 + 1,
            child: ChildRef::Id(service.child),
            service: service.service.clone(),
            immunizations: None,
            due_date: service.due_date,
            completed_date: service.completed_date,
            status: service.status,
        };
        services.push(created.clone());
        Ok(created)
    }
}
