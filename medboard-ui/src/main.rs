//! Medboard Console
//!
//! Hospital management console built with Leptos (WASM).
//!
//! # Features
//!
//! - Role-scoped sections: admin, doctor, patient, plus the public site
//! - Every feature page follows the same shape: fetch a collection,
//!   render it in a table, add/edit through a modal, confirm with a toast
//! - All data lives in the API's memory; reloading the server resets it
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles
//! to WebAssembly. It communicates with the Medboard API over HTTP.

use leptos::*;

mod api;
mod app;
mod components;
mod layout;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
