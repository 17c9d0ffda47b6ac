use chrono::Utc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use complytrack_app::config::AppConfig;
use complytrack_app::services::dashboard;
use complytrack_app::session::Session;
use complytrack_app::state::AppState;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "complytrack=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = AppConfig::from_env();
    tracing::info!(data_dir = %config.data_dir.display(), "Loaded configuration");

    // --- Storage & state ---
    let today = Utc::now().date_naive();
    let state = AppState::open(&config, today)?;
    tracing::info!(
        users = state.users.len(),
        clients = state.clients.len(),
        templates = state.templates.len(),
        documents = state.documents.len(),
        requests = state.requests.len(),
        "State loaded"
    );

    // --- Session ---
    // Resume the persisted active user; otherwise start as the first user.
    let user = state
        .stored_current_user()
        .or_else(|| state.users.first().cloned())
        .ok_or_else(|| anyhow::anyhow!("no users configured"))?;
    tracing::info!(user = %user.name, role = %user.role, "Session started");
    let session = Session::new(user);

    // --- Dashboard ---
    let visible = state.visible(&session);
    let summary = dashboard::summary(&visible, &state.templates);
    tracing::info!(
        templates = summary.total_templates,
        pending_requests = summary.pending_requests,
        documents_reviewed = summary.documents_reviewed,
        active_clients = summary.active_clients,
        "Dashboard summary"
    );

    for (status, count) in dashboard::status_breakdown(&visible.documents) {
        tracing::info!(status = %status, count, "Document status");
    }

    let expiring = dashboard::expiring_notification_count(&visible.documents, today);
    if expiring > 0 {
        tracing::warn!(count = expiring, "Documents expiring within 30 days");
    }

    Ok(())
}
