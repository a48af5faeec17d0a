use bistro_app::{run_demo, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bistro_app=debug,bistro_order=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let state = AppState::load()?;
    tracing::info!("Opening {}", state.settings.restaurant.name);

    let report = run_demo(&state)?;

    for snapshot in &report.snapshots {
        println!("{}", serde_json::to_string_pretty(snapshot)?);
    }
    println!("{}", report.customer_notice);
    for notice in &report.kitchen_notices {
        println!("{}", notice);
    }
    for message in &report.preparation_messages {
        println!("  -> {}", message);
    }
    println!("{}", report.invoice);

    Ok(())
}
