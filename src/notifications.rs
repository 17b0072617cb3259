//! Upcoming and overdue health appointments

use chrono::{Duration, NaiveDate};
use log::{debug, warn};
use serde::Serialize;

use crate::client::HealthApi;
use crate::client::models::{HealthService, HealthStatus};
use crate::error::Result;

/// Shown when neither list has entries
pub const EMPTY_NOTICE: &str = "No upcoming or overdue appointments.";
/// Shown inline when loading fails
pub const FAILURE_NOTICE: &str = "Failed to load notifications";

/// Pending services due within `window_days` from `today`, inclusive on both ends
pub fn upcoming(services: &[HealthService], today: NaiveDate, window_days: i64) -> Vec<HealthService> {
    // Windows past the calendar's end just mean "everything ahead"
    let until = Duration::try_days(window_days)
        .and_then(|window| today.checked_add_signed(window))
        .unwrap_or(NaiveDate::MAX);
    let mut due: Vec<HealthService> = services
        .iter()
        .filter(|s| s.status == HealthStatus::Pending)
        .filter(|s| s.due_date >= today && s.due_date <= until)
        .cloned()
        .collect();
    due.sort_by_key(|s| s.due_date);
    due
}

/// Pending services whose due date has passed
pub fn overdue(services: &[HealthService], today: NaiveDate) -> Vec<HealthService> {
    let mut late: Vec<HealthService> = services
        .iter()
        .filter(|s| s.status == HealthStatus::Pending && s.due_date < today)
        .cloned()
        .collect();
    late.sort_by_key(|s| s.due_date);
    late
}

/// Both notification lists
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Notifications {
    pub upcoming: Vec<HealthService>,
    pub overdue: Vec<HealthService>,
}

impl Notifications {
    pub fn is_empty(&self) -> bool {
        self.upcoming.is_empty() && self.overdue.is_empty()
    }
}

/// Fetch upcoming and overdue lists concurrently
pub async fn fetch(api: &dyn HealthApi, today: NaiveDate, window_days: i64) -> Result<Notifications> {
    let upcoming_fut = async {
        let services = api.list_health_services().await?;
        Ok::<_, crate::error::Error>(upcoming(&services, today, window_days))
    };
    let overdue_fut = async {
        let services = api.list_health_services().await?;
        Ok::<_, crate::error::Error>(overdue(&services, today))
    };

    let (upcoming, overdue) = futures::try_join!(upcoming_fut, overdue_fut)?;
    debug!(
        "Notifications: {} upcoming, {} overdue",
        upcoming.len(),
        overdue.len()
    );
    Ok(Notifications { upcoming, overdue })
}

/// Fetch, converting a failure into the inline notice
pub async fn load(
    api: &dyn HealthApi,
    today: NaiveDate,
    window_days: i64,
) -> std::result::Result<Notifications, &'static str> {
    fetch(api, today, window_days).await.map_err(|e| {
        warn!("Error fetching notifications: {}", e);
        FAILURE_NOTICE
    })
}

/// One display line for a service
pub fn describe(service: &HealthService) -> String {
    format!(
        "{} for {} due {}",
        service.service_labels(),
        service.child.display_name(),
        service.due_date.format("%m/%d/%Y")
    )
}
