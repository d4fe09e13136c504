use std::sync::Arc;

use anyhow::Context;
use dotenv::dotenv;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod terminal;

use appointment_form_cell::AppointmentCreationForm;
use shared_api::ApiClient;
use shared_config::AppConfig;
use shared_utils::SessionStore;

use terminal::{TerminalNavigator, TerminalNotifier};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Loading Env Vars
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Clínica appointment client");

    // Load configuration
    let config = AppConfig::from_env();

    // The session is persisted by the login flow; this client only reads it.
    let session = SessionStore::new(&config)
        .load()
        .context("No hay sesión activa; inicie sesión primero")?;
    let user = session.user.unwrap_or_default();

    // The patient identifier plays the role of the route parameter.
    let patient_id = std::env::args().nth(1);
    if patient_id.is_none() {
        info!("No patient id supplied; the patient field will stay empty");
    }

    let api = Arc::new(ApiClient::new(&config, session.token));

    let notifier = Arc::new(TerminalNotifier);
    let navigator = Arc::new(TerminalNavigator::default());

    let mut form = AppointmentCreationForm::new(
        user,
        api,
        patient_id,
        notifier,
        navigator.clone(),
    );

    form.mount().await;

    terminal::run(&mut form, &navigator).await
}
