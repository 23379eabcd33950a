//! Feature Pages
//!
//! One module per audience section. Every page follows the same shape:
//! fetch its collection on mount, filter it client-side with the search
//! box, mutate through add/edit modals, and confirm with toasts.

pub mod admin;
pub mod doctor;
pub mod patient;

mod home;
mod login;

pub use home::Home;
pub use login::Login;
