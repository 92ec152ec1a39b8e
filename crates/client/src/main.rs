//! Headless client entry point: restore the persisted session and print what
//! the signed-in role can reach.

use std::sync::Arc;

use anyhow::Context;

use spellstudy_auth::dashboard_display_name;
use spellstudy_client::config::{APP_NAME, APP_VERSION};
use spellstudy_client::{ApiClient, ClientConfig, SessionService, SqliteBackend, StorageService};
use spellstudy_navigation::{dashboard_role, quick_actions, tabs_for_role, visible_categories};
use spellstudy_state::{Action, DashboardStats, Store};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    spellstudy_observability::init();

    tracing::info!(app = APP_NAME, version = APP_VERSION, "starting");

    let config = ClientConfig::from_env()?;
    let backend = match &config.database_path {
        Some(path) => SqliteBackend::open(path).await?,
        None => SqliteBackend::in_memory().await?,
    };
    let storage = Arc::new(StorageService::new(backend));
    let api = ApiClient::new(config.api_base_url.clone(), Arc::clone(&storage));
    let sessions = SessionService::new(api.clone(), storage);
    let store = Store::new();

    if !sessions.restore(&store).await {
        tracing::info!(api = %config.api_base_url, "no saved session; sign in to continue");
        if let Some(username) = sessions.remembered_username().await {
            println!("Last signed in as {username}");
        }
        return Ok(());
    }

    let state = store.state();
    let user = state.auth.user.as_ref().context("restored session has no user")?;
    let role = dashboard_role(&state.user_role);

    println!("{} ({})", user.display_name(), dashboard_display_name(role));

    let tabs = tabs_for_role(Some(user.role.as_str()));
    let labels: Vec<&str> = tabs.iter().map(|t| t.label).collect();
    println!("Tabs: {}", labels.join(" | "));

    for action in quick_actions(role) {
        println!("Quick action: {} ({})", action.title, action.route);
    }
    for entry in visible_categories(role).iter() {
        println!("{}", entry.category.title);
        for task in &entry.tasks {
            println!("  {} {} -> {}", task.icon, task.title, task.route);
        }
    }

    let batch = api.dashboard_stats().await;
    store.dispatch(Action::SetDashboardStats(DashboardStats {
        total_classes: batch.class_count().unwrap_or_default() as u64,
        total_staff: batch.staff_count().unwrap_or_default() as u64,
        ..DashboardStats::default()
    }));
    if let Err(err) = &batch.academic_session {
        tracing::warn!("current academic session unavailable: {err}");
    }

    let snapshot = store.state();
    let stats = &snapshot.reports.dashboard_stats;
    println!("Classes: {}  Staff: {}", stats.total_classes, stats.total_staff);

    Ok(())
}
