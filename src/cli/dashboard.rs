//! Interactive role dashboard

use std::io::IsTerminal;

use chrono::Local;
use colored::Colorize;
use dialoguer::{Input, Select, theme::ColorfulTheme};
use log::debug;
use serde::Serialize;

use crate::auth::{Role, logout, resolve_role};
use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, OutputFormat, forms};
use crate::dashboard::{
    CaseDetail, CaseListPane, DashboardController, DetailPane, DetailPaneData, FormKind,
};
use crate::error::Result;
use crate::models::display::{format_date, or_dash};
use crate::models::{CaseDisplay, HealthServiceDisplay, PlacementDisplay};
use crate::notifications;
use crate::output::json::format_json;
use crate::output::table::{format_record, format_table};
use crate::routes::Route;

/// Menu entries below the navigation actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    Action(FormKind),
    SelectCase,
    Filter,
    Notifications,
    Logout,
    Quit,
}

#[derive(Serialize)]
struct DashboardJson<'a> {
    role: &'a Role,
    route: Option<&'static str>,
    navigation: Vec<&'static str>,
    cases: Vec<CaseDisplay>,
}

/// Run the dashboard command
pub async fn run(opts: &GlobalOptions, once: bool) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let session = ctx.enter(Route::Dashboard).await?;

    let role = resolve_role(&session);
    let route = Route::dashboard_for(&role);
    debug!("Dashboard for role {} at {:?}", role, route.map(|r| r.path()));

    let mut ctrl = DashboardController::new(role);
    let mut cases = CaseListPane::new();
    let mut detail = DetailPaneData::new();

    cases
        .sync(&*ctx.client, &ctrl.state().case_list_refresh)
        .await;

    if ctx.format == OutputFormat::Json {
        let out = DashboardJson {
            role: ctrl.role(),
            route: route.map(|r| r.path()),
            navigation: ctrl.navigation().iter().map(|a| a.label).collect(),
            cases: cases.visible().into_iter().map(CaseDisplay::from).collect(),
        };
        println!("{}", format_json(&out)?);
        return Ok(());
    }

    if once || !std::io::stdin().is_terminal() {
        render(&ctrl, &cases, &detail);
        return Ok(());
    }

    loop {
        // Every pass re-enters the protected route
        ctx.enter(route.unwrap_or(Route::Dashboard)).await?;

        cases
            .sync(&*ctx.client, &ctrl.state().case_list_refresh)
            .await;
        detail
            .sync(
                &*ctx.client,
                ctrl.state().selected_case.as_ref(),
                &ctrl.state().detail_refresh,
            )
            .await;
        render(&ctrl, &cases, &detail);
        cases.dismiss_notice();

        let menu = menu_for(&ctrl);
        let labels: Vec<String> = menu.iter().map(|(label, _)| label.clone()).collect();
        let Some(idx) = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Choose")
            .items(&labels)
            .default(0)
            .interact_opt()?
        else {
            break;
        };

        match menu[idx].1 {
            Choice::Action(kind) => {
                ctrl.select_form(kind);
                run_form(&ctx, &mut ctrl, kind).await?;
            }
            Choice::SelectCase => {
                let visible: Vec<_> = cases.visible().into_iter().cloned().collect();
                if visible.is_empty() {
                    println!("No cases to select.");
                    continue;
                }
                let names: Vec<String> = visible
                    .iter()
                    .map(|c| format!("#{} {}", c.id, c.child.display_name()))
                    .collect();
                if let Some(i) = Select::with_theme(&ColorfulTheme::default())
                    .with_prompt("Case")
                    .items(&names)
                    .default(0)
                    .interact_opt()?
                {
                    ctrl.select_case(visible[i].clone());
                }
            }
            Choice::Filter => {
                cases.filter = Input::with_theme(&ColorfulTheme::default())
                    .with_prompt("Filter by child name")
                    .allow_empty(true)
                    .with_initial_text(cases.filter.clone())
                    .interact_text()?;
            }
            Choice::Notifications => {
                let today = Local::now().date_naive();
                let window = ctx.config.preferences.upcoming_window_days;
                match notifications::load(&*ctx.client, today, window).await {
                    Ok(notes) => super::notifications::print_notifications(&notes),
                    Err(notice) => println!("{}", notice.red()),
                }
            }
            Choice::Logout => {
                let to = logout(&*ctx.store)?;
                println!("{} Signed out", "✓".green());
                println!("  → {}", to.path().cyan());
                return Ok(());
            }
            Choice::Quit => break,
        }
    }
    Ok(())
}

/// Prompt, submit, and propagate the refresh; failures stay inline
async fn run_form(ctx: &CommandContext, ctrl: &mut DashboardController, kind: FormKind) -> Result<()> {
    let submission = match forms::prompt(kind, &*ctx.client).await {
        Ok(Some(s)) => s,
        Ok(None) => {
            ctrl.close_form();
            return Ok(());
        }
        Err(e @ crate::error::Error::Dialoguer(_)) => return Err(e),
        Err(e) => {
            println!("{} {}", "✗".red(), e);
            ctrl.close_form();
            return Ok(());
        }
    };

    match submission.submit(&*ctx.client).await {
        Ok(message) => {
            println!("{} {}", "✓".green(), message);
            ctrl.notify(kind.invalidates());
        }
        Err(e) => println!("{} Could not save: {}", "✗".red(), e),
    }
    ctrl.close_form();
    Ok(())
}

fn menu_for(ctrl: &DashboardController) -> Vec<(String, Choice)> {
    let mut menu: Vec<(String, Choice)> = ctrl
        .navigation()
        .iter()
        .map(|a| (a.label.to_string(), Choice::Action(a.form)))
        .collect();
    menu.push(("Select a case".into(), Choice::SelectCase));
    menu.push(("Filter cases".into(), Choice::Filter));
    menu.push(("Notifications".into(), Choice::Notifications));
    menu.push(("Logout".into(), Choice::Logout));
    menu.push(("Quit".into(), Choice::Quit));
    menu
}

fn render(ctrl: &DashboardController, cases: &CaseListPane, detail: &DetailPaneData) {
    let view = ctrl.view();

    println!("\n{}", format!("{} Dashboard", view.role).bold());
    if view.navigation.is_empty() {
        println!("{}", "No actions available for this role.".dimmed());
    } else {
        let labels: Vec<&str> = view.navigation.iter().map(|a| a.label).collect();
        println!("Actions: {}", labels.join(" | ").cyan());
    }

    println!("\n{}", "Cases".bold());
    if let Some(notice) = cases.notice() {
        println!("{}", notice.red());
    }
    let rows: Vec<CaseDisplay> = cases.visible().into_iter().map(CaseDisplay::from).collect();
    if !cases.filter.is_empty() {
        println!("Filter: {}", cases.filter.cyan());
    }
    println!("{}", format_table(&rows));

    println!();
    match view.detail {
        DetailPane::Form(kind) => println!("{}", kind.title().bold()),
        DetailPane::Case(_) => match (detail.detail(), detail.notice()) {
            (_, Some(notice)) => println!("{}", notice.red()),
            (Some(d), None) => render_detail(d),
            (None, None) => println!("{}", "Loading...".dimmed()),
        },
        DetailPane::Empty => println!("{}", "Select a case from the list.".dimmed()),
    }
}

fn render_detail(detail: &CaseDetail) {
    println!(
        "{}",
        format!("Case #{}: {}", detail.case.id, detail.case.child.display_name()).bold()
    );

    let mut fields = vec![
        ("Status", detail.case.status.to_string()),
        ("Opened", format_date(detail.case.start_date)),
    ];
    if let Some(child) = &detail.child {
        fields.push(("Date of birth", format_date(child.dob)));
        fields.push(("Medications", or_dash(child.medications.as_deref())));
        fields.push(("Allergies", or_dash(child.allergies.as_deref())));
    }
    println!("{}", format_record(&fields));

    if let Some(placement) = &detail.placement {
        let row = vec![PlacementDisplay::new(placement, detail.family.as_ref())];
        println!("{}", format_table(&row));
    }

    let services: Vec<HealthServiceDisplay> = detail
        .health_services
        .iter()
        .map(HealthServiceDisplay::from)
        .collect();
    println!("{}", "Health services".bold());
    println!("{}", format_table(&services));
}
