//! UI Components
//!
//! Reusable Leptos components consumed uniformly by every feature page.

pub mod form;
pub mod loading;
pub mod modal;
pub mod search_box;
pub mod sidebar;
pub mod stat_card;
pub mod tabs;
pub mod toast;

pub use form::{DateField, NumberField, SelectField, SubmitRow, TextAreaField, TextField};
pub use loading::{ListSkeleton, Loading};
pub use modal::Modal;
pub use search_box::SearchBox;
pub use sidebar::{Sidebar, SidebarLink};
pub use stat_card::StatCard;
pub use tabs::TabButton;
pub use toast::Toast;
