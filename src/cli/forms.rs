//! Dashboard forms
//!
//! Each form is prompted field by field, validated, then submitted through the
//! backend client. Prompting and submitting are separate so the submit side
//! can run without a terminal.

use chrono::{Local, NaiveDate};
use dialoguer::{Confirm, Input, MultiSelect, Select, theme::ColorfulTheme};
use log::debug;

use crate::client::CareApi;
use crate::client::models::{
    CaseStatus, ChildUpdate, HealthStatus, NewCase, NewChild, NewFosterFamily, NewHealthService,
    NewPlacement, service_label,
};
use crate::dashboard::FormKind;
use crate::error::{Error, Result};
use crate::models::display::FamilyDisplay;

/// Service codes offered by the health visit form
pub const SERVICE_CODES: &[&str] = &["well_child", "immunization(s)", "dental"];

/// A filled-in form, ready to submit
#[derive(Debug, Clone)]
pub enum FormSubmission {
    Case(NewCase),
    Placement(NewPlacement),
    Child(NewChild),
    FosterFamily(NewFosterFamily),
    HealthVisit(NewHealthService),
    Medications { child: i64, update: ChildUpdate },
}

impl FormSubmission {
    pub fn kind(&self) -> FormKind {
        match self {
            FormSubmission::Case(_) => FormKind::AddCase,
            FormSubmission::Placement(_) => FormKind::AddPlacement,
            FormSubmission::Child(_) => FormKind::AddChild,
            FormSubmission::FosterFamily(_) => FormKind::AddFosterFamily,
            FormSubmission::HealthVisit(_) => FormKind::EnterHealthVisit,
            FormSubmission::Medications { .. } => FormKind::UpdateMedications,
        }
    }

    /// Field checks the backend would otherwise reject
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: &str| Err(Error::InvalidInput(msg.to_string()));
        match self {
            FormSubmission::Child(child) => {
                if child.first_name.trim().is_empty() || child.last_name.trim().is_empty() {
                    return invalid("first and last name are required");
                }
                if child.dob > Local::now().date_naive() {
                    return invalid("date of birth is in the future");
                }
            }
            FormSubmission::FosterFamily(family) => {
                if family.family_name.trim().is_empty() {
                    return invalid("family name is required");
                }
                if family.max_occupancy < 1 {
                    return invalid("max occupancy must be at least 1");
                }
            }
            FormSubmission::HealthVisit(visit) => {
                if visit.service.is_empty() {
                    return invalid("select at least one service");
                }
            }
            FormSubmission::Medications { update, .. } => {
                if update.medications.is_none() && update.allergies.is_none() {
                    return invalid("nothing to update");
                }
            }
            FormSubmission::Case(_) | FormSubmission::Placement(_) => {}
        }
        Ok(())
    }

    /// Validate and send; returns a confirmation line
    pub async fn submit(&self, api: &dyn CareApi) -> Result<String> {
        self.validate()?;
        debug!("Submitting {:?} form", self.kind());

        let message = match self {
            FormSubmission::Case(case) => {
                let created = api.create_case(case).await?;
                format!("Case #{} opened", created.id)
            }
            FormSubmission::Placement(placement) => {
                let created = api.create_placement(placement).await?;
                format!("Placement #{} created", created.id)
            }
            FormSubmission::Child(child) => {
                let created = api.create_child(child).await?;
                format!("Child {} added", created.display_name())
            }
            FormSubmission::FosterFamily(family) => {
                let created = api.create_foster_family(family).await?;
                format!("Foster family {} added", created.family_name)
            }
            FormSubmission::HealthVisit(visit) => {
                let created = api.create_health_service(visit).await?;
                format!("{} recorded", created.service_labels())
            }
            FormSubmission::Medications { child, update } => {
                let updated = api.update_child(*child, update).await?;
                format!("Updated medications for {}", updated.display_name())
            }
        };
        Ok(message)
    }
}

/// Accepts `YYYY-MM-DD` or `MM/DD/YYYY`
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let input = input.trim();
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(input, "%m/%d/%Y"))
        .map_err(|_| Error::InvalidInput(format!("not a date: {}", input)))
}

/// Prompt for a form; `None` when the user backs out
pub async fn prompt(kind: FormKind, api: &dyn CareApi) -> Result<Option<FormSubmission>> {
    println!("\n{}", kind.title());
    let today = Local::now().date_naive();

    let submission = match kind {
        FormKind::AddChild => Some(FormSubmission::Child(NewChild {
            first_name: text("First name")?,
            last_name: text("Last name")?,
            dob: date("Date of birth", None)?,
            medications: optional_text("Medications")?,
            allergies: optional_text("Allergies")?,
        })),
        FormKind::AddFosterFamily => {
            let family_name = text("Family name")?;
            let max_occupancy: i32 = Input::with_theme(&ColorfulTheme::default())
                .with_prompt("Max occupancy")
                .default(1)
                .interact_text()?;
            Some(FormSubmission::FosterFamily(NewFosterFamily {
                family_name,
                parent1: None,
                parent2: None,
                max_occupancy,
            }))
        }
        FormKind::AddCase => match pick_child(api).await? {
            Some(child) => Some(FormSubmission::Case(NewCase {
                child,
                caseworker: None,
                start_date: date("Start date", Some(today))?,
                status: CaseStatus::Open,
            })),
            None => None,
        },
        FormKind::AddPlacement => {
            let Some(child) = pick_child(api).await? else {
                return Ok(None);
            };
            let Some(foster_family) = pick_family(api).await? else {
                return Ok(None);
            };
            Some(FormSubmission::Placement(NewPlacement {
                child,
                foster_family,
                start_date: date("Start date", Some(today))?,
            }))
        }
        FormKind::EnterHealthVisit => {
            let Some(child) = pick_child(api).await? else {
                return Ok(None);
            };
            let labels: Vec<&str> = SERVICE_CODES.iter().map(|c| service_label(c)).collect();
            let picked = MultiSelect::with_theme(&ColorfulTheme::default())
                .with_prompt("Services (space to toggle)")
                .items(&labels)
                .interact()?;
            let service = picked.iter().map(|&i| SERVICE_CODES[i].to_string()).collect();
            let due_date = date("Visit date", Some(today))?;
            let completed = Confirm::with_theme(&ColorfulTheme::default())
                .with_prompt("Visit completed?")
                .default(due_date <= today)
                .interact()?;
            Some(FormSubmission::HealthVisit(NewHealthService {
                child,
                service,
                due_date,
                completed_date: completed.then_some(due_date),
                status: if completed {
                    HealthStatus::Complete
                } else {
                    HealthStatus::Pending
                },
            }))
        }
        FormKind::UpdateMedications => match pick_child(api).await? {
            Some(child) => Some(FormSubmission::Medications {
                child,
                update: ChildUpdate {
                    medications: optional_text("Medications")?,
                    allergies: optional_text("Allergies")?,
                },
            }),
            None => None,
        },
    };
    Ok(submission)
}

fn text(prompt: &str) -> Result<String> {
    Ok(Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .interact_text()?)
}

fn optional_text(prompt: &str) -> Result<Option<String>> {
    let value: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("{} (optional)", prompt))
        .allow_empty(true)
        .interact_text()?;
    Ok(Some(value.trim().to_string()).filter(|v| !v.is_empty()))
}

fn date(prompt: &str, default: Option<NaiveDate>) -> Result<NaiveDate> {
    let theme = ColorfulTheme::default();
    let mut input = Input::<String>::with_theme(&theme)
        .with_prompt(format!("{} (YYYY-MM-DD)", prompt))
        .validate_with(|s: &String| parse_date(s).map(|_| ()).map_err(|e| e.to_string()));
    if let Some(d) = default {
        input = input.default(d.format("%Y-%m-%d").to_string());
    }
    parse_date(&input.interact_text()?)
}

async fn pick_child(api: &dyn CareApi) -> Result<Option<i64>> {
    let children = api.list_children().await?;
    if children.is_empty() {
        println!("No children on record.");
        return Ok(None);
    }
    let names: Vec<String> = children.iter().map(|c| c.display_name()).collect();
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Child")
        .items(&names)
        .default(0)
        .interact_opt()?;
    Ok(selection.map(|idx| children[idx].id))
}

async fn pick_family(api: &dyn CareApi) -> Result<Option<i64>> {
    let families: Vec<_> = api
        .list_foster_families()
        .await?
        .into_iter()
        .filter(|f| f.has_capacity())
        .collect();
    if families.is_empty() {
        println!("No foster families with open capacity.");
        return Ok(None);
    }
    let labels: Vec<String> = families
        .iter()
        .map(|f| FamilyDisplay::from(f).to_string())
        .collect();
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Foster family")
        .items(&labels)
        .default(0)
        .interact_opt()?;
    Ok(selection.map(|idx| families[idx].id))
}
