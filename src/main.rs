//! Project Drawer demo host
//!
//! Wires the drawer to in-memory collaborators and walks through one create
//! and one edit session, printing every `closed` event the host receives.
//!
//! Notification texts can be overridden with a JSON file named by the
//! `PROJECT_DRAWER_CONFIG` environment variable.

use drawer_core::AccountId;
use drawer_ui::{DrawerConfig, InMemoryProjectStore, LogNotifier, ProjectDrawer, StaticPermissions};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Environment variable naming an optional config file
const CONFIG_ENV: &str = "PROJECT_DRAWER_CONFIG";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .pretty()
        .init();

    // Print startup banner
    println!();
    println!("╔═══════════════════════════════════════════════╗");
    println!("║   Project Drawer demo                         ║");
    println!("║   Headless create/edit panel for projects     ║");
    println!("╚═══════════════════════════════════════════════╝");
    println!();

    tracing::info!("Starting {} v{}", drawer_ui::NAME, drawer_ui::VERSION);

    let config = match std::env::var(CONFIG_ENV) {
        Ok(path) => DrawerConfig::load(&path)?,
        Err(_) => DrawerConfig::default(),
    };

    let account = AccountId::new(7);
    let store = InMemoryProjectStore::new();
    let (drawer, mut closed) = ProjectDrawer::with_config(
        store.clone(),
        StaticPermissions::allow_all(),
        LogNotifier,
        config,
    );
    drawer.set_account_context(account);

    // Create session
    drawer.set_visible(true);
    drawer.set_bound_project(None);
    drawer.set_name("Alpha");
    drawer.submit().await?;
    if let Some(event) = closed.recv().await {
        println!("closed: editing={} project={:?}", event.was_editing, event.project);
    }
    drawer.set_visible(false);

    // Edit session
    let Some(created) = store.list(account).into_iter().next() else {
        anyhow::bail!("store is empty after a successful create");
    };
    drawer.set_visible(true);
    drawer.set_bound_project(Some(created));
    drawer.set_name("Alpha (renamed)");
    drawer.submit().await?;
    if let Some(event) = closed.recv().await {
        println!("closed: editing={} project={:?}", event.was_editing, event.project);
    }

    // Cancel
    drawer.close();
    if let Some(event) = closed.recv().await {
        println!("closed: editing={} project={:?}", event.was_editing, event.project);
    }
    drawer.set_visible(false);

    for project in store.list(account) {
        println!("project {}: {}", project.id, project.name);
    }

    Ok(())
}
