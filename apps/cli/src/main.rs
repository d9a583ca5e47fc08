use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use dotenv::dotenv;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use appointment_cell::{ApiClient, HttpAppointmentRepository, Session};
use queue_cell::eligibility::is_today;
use queue_cell::{QueueSnapshot, QueueViewController, ViewState};
use shared_config::AppConfig;

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

    info!("Starting queue management client");

    // Load configuration
    let config = AppConfig::from_env();
    anyhow::ensure!(config.is_configured(), "QUEUE_API_BASE_URL must be set");

    let session = Arc::new(Session::new());
    let client = ApiClient::new(&config, Arc::clone(&session));

    if !session.is_authenticated() {
        let email = std::env::var("QUEUE_API_EMAIL").context("QUEUE_API_EMAIL not set")?;
        let password = std::env::var("QUEUE_API_PASSWORD").context("QUEUE_API_PASSWORD not set")?;
        client.login(&email, &password).await?;
        info!("Logged in as {}", email);
    }

    let repo = Arc::new(HttpAppointmentRepository::new(client));
    let mut controller = QueueViewController::new(repo, true);

    if let ViewState::Error(message) = controller.load().await {
        warn!("Initial load failed ({}), will retry on next tick", message);
    }
    render(&controller);

    let mut ticker = tokio::time::interval(Duration::from_secs(config.refresh_interval_secs));
    ticker.tick().await; // first tick fires immediately

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                controller.refresh().await;
                render(&controller);
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Shutting down, polling stopped");
                break;
            }
        }
    }

    Ok(())
}

fn render(controller: &QueueViewController) {
    match controller.state() {
        ViewState::Idle | ViewState::Loading => println!("Loading appointments..."),
        ViewState::Error(message) => println!("Could not load appointments: {}", message),
        ViewState::Ready => {
            if let Some(snapshot) = controller.snapshot() {
                render_snapshot(snapshot);
            }
        }
    }

    if let Some(notice) = controller.last_error() {
        println!("! Last refresh failed: {}", notice);
    }
}

fn render_snapshot(snapshot: &QueueSnapshot) {
    let upcoming: Vec<_> = snapshot.upcoming().collect();
    if upcoming.is_empty() {
        println!("No upcoming appointments.");
        return;
    }

    println!(
        "Appointments as of {}:",
        snapshot.taken_at.format("%Y-%m-%d %H:%M:%S")
    );
    for appointment in upcoming {
        let queue_info = match snapshot.position(appointment.id) {
            Some(p) if p.is_being_served() => "being served now".to_string(),
            Some(p) => format!(
                "position {} (~{} min wait)",
                p.position, p.estimated_wait_time
            ),
            None if appointment.status.is_in_queue()
                && is_today(&appointment.appointment_date, snapshot.taken_at.date()) =>
            {
                "queue information unavailable".to_string()
            }
            None => String::new(),
        };

        println!(
            "  {}  {}  {} {}  [{}]  {}  {}",
            appointment.ticket_number,
            appointment.appointment_type,
            appointment.appointment_date,
            appointment.scheduled_time,
            appointment.status,
            appointment.service_center.name,
            queue_info
        );
    }
}
