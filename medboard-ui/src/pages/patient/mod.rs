//! Patient Section Pages

mod appointments;
mod dashboard;
mod invoices;
mod records;

pub use appointments::Appointments;
pub use dashboard::Dashboard;
pub use invoices::Invoices;
pub use records::Records;
