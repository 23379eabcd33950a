//! # Medboard
//!
//! Hospital Management Console - A full-stack Rust application serving
//! role-scoped dashboards (admin, doctor, patient) over an in-memory
//! hospital registry.
//!
//! ## Features
//!
//! - **In-memory registry**: one collection per feature domain, seeded
//!   from literal sample data at startup; nothing persists across restarts
//! - **Role-scoped REST API**: admin, doctor, patient, and public-site
//!   route trees built with Axum
//! - **Submit-time validation**: required-field presence is the only
//!   invariant, enforced once in the registry
//! - **Substring search**: case-insensitive `?q=` filter on every list
//!
//! ## Modules
//!
//! - [`registry`]: Collections, validation, and the sample data set
//! - [`model`]: Domain record types, one module per console domain
//! - [`api`]: REST API server with Axum
//! - [`config`]: TOML + environment configuration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use medboard::model::{Availability, Doctor};
//! use medboard::registry::Registry;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Start from the sample data set
//!     let registry = Registry::seeded().await?;
//!
//!     // Add a doctor the way the admin console does
//!     let created = registry
//!         .doctors
//!         .insert(Doctor {
//!             id: 0,
//!             name: "Ira Bose".to_string(),
//!             specialty: "Dermatology".to_string(),
//!             consultation_time: "11:00 - 15:00".to_string(),
//!             availability: Availability::Available,
//!             phone: String::new(),
//!         })
//!         .await?;
//!
//!     // Case-insensitive substring search
//!     let hits = registry.doctors.search("derma").await;
//!     println!("Found {} dermatologists (new id {})", hits.len(), created.id);
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod model;
pub mod registry;

// Re-export top-level types for convenience
pub use registry::{Collection, Record, Registry, RegistryError, RegistryResult, RegistryStats};

pub use api::{build_router, serve, ApiConfig, ApiError, AppState};

pub use config::{
    Config, ConfigError, ApiConfig as ConfigApiConfig, LoggingConfig, SeedConfig,
};
