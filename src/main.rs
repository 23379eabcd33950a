//! Medboard demo walkthrough
//!
//! Seeds the registry and exercises the console's core operations from the
//! command line: add, search, update, and the dashboard sums.

use medboard::model::{Availability, Doctor, TransactionKind};
use medboard::registry::Registry;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "medboard=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Medboard Hospital Console v{}", env!("CARGO_PKG_VERSION"));

    // Load the sample data set
    let registry = Registry::seeded().await?;
    let stats = registry.stats().await;
    tracing::info!("Registry seeded: {}", stats);

    demo_roster(&registry).await?;
    demo_finance(&registry).await;

    tracing::info!("Demo complete (registry contents are gone once this process exits)");
    Ok(())
}

/// Add a doctor, search the roster, and flip availability
async fn demo_roster(registry: &Registry) -> medboard::RegistryResult<()> {
    let created = registry
        .doctors
        .insert(Doctor {
            id: 0,
            name: "Ira Bose".to_string(),
            specialty: "Dermatology".to_string(),
            consultation_time: "11:00 - 15:00".to_string(),
            availability: Availability::Available,
            phone: "555-0165".to_string(),
        })
        .await?;
    tracing::info!(id = created.id, "Added doctor {}", created.name);

    let hits = registry.doctors.search("derma").await;
    tracing::info!("Search 'derma' matched {} doctor(s)", hits.len());

    let mut updated = created.clone();
    updated.availability = Availability::OnLeave;
    registry.doctors.update(created.id, updated).await?;
    tracing::info!(id = created.id, "Marked doctor on leave");

    // The one validation rule the console has: required fields non-empty
    let rejected = registry
        .doctors
        .insert(Doctor {
            id: 0,
            name: String::new(),
            specialty: "Radiology".to_string(),
            consultation_time: "09:00 - 12:00".to_string(),
            availability: Availability::Available,
            phone: String::new(),
        })
        .await;
    tracing::info!("Empty-name doctor rejected: {}", rejected.unwrap_err());

    Ok(())
}

/// Print the dashboard finance sums
async fn demo_finance(registry: &Registry) {
    let transactions = registry.transactions.list().await;

    let income: f64 = transactions
        .iter()
        .filter(|t| t.kind == TransactionKind::Income)
        .map(|t| t.amount)
        .sum();
    let expense: f64 = transactions
        .iter()
        .filter(|t| t.kind == TransactionKind::Expense)
        .map(|t| t.amount)
        .sum();

    tracing::info!(
        "Finance ({} transactions): income={:.2}, expense={:.2}, balance={:.2}",
        transactions.len(),
        income,
        expense,
        income - expense
    );
}
