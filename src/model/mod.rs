//! Domain record types
//!
//! One module per console domain. Every type here is a flat `serde` struct
//! that lives in a [`Collection`](crate::registry::Collection); fields that
//! name people (patient, doctor, donor) are free text, as entered; the
//! console never had foreign keys between its lists.

pub mod blood_bank;
pub mod clinical;
pub mod comms;
pub mod finance;
pub mod outreach;
pub mod patients;
pub mod pharmacy;
pub mod staff;

pub use blood_bank::{BloodGroup, BloodIssue, Donor};
pub use clinical::{Appointment, AppointmentStatus, LabReport, PathologyTest, Prescription, ReportStatus};
pub use comms::{Audience, Enquiry, MailMessage, Meeting, Notice, SmsMessage};
pub use finance::{HospitalCharge, Invoice, InvoiceStatus, Transaction, TransactionKind};
pub use outreach::{MarketingVisit, RfidTag};
pub use patients::{CardStatus, Document, Patient, SmartCard};
pub use pharmacy::{Medicine, MedicineBill};
pub use staff::{Availability, Doctor, Role, StaffUser};

/// Implement [`Record`](crate::registry::Record) for a domain struct.
///
/// `required` lists the text fields checked for non-emptiness on submit,
/// `amounts` (optional) lists `f64` fields that must be finite and
/// non-negative, and `search` lists the text fields joined for substring
/// search. This is the one validation rule the console ever enforced,
/// so it is declared rather than hand-written per type.
macro_rules! impl_record {
    ($ty:ty, $kind:literal,
     required: [$($req:ident),* $(,)?],
     amounts: [$($amt:ident),* $(,)?],
     search: [$($srch:ident),* $(,)?]) => {
        impl $crate::registry::Record for $ty {
            const KIND: &'static str = $kind;

            fn id(&self) -> u32 {
                self.id
            }

            fn set_id(&mut self, id: u32) {
                self.id = id;
            }

            fn validate(&self) -> $crate::registry::RegistryResult<()> {
                $($crate::registry::require($kind, stringify!($req), &self.$req)?;)*
                $(
                    if !self.$amt.is_finite() || self.$amt < 0.0 {
                        return Err($crate::registry::RegistryError::InvalidValue {
                            kind: $kind,
                            field: stringify!($amt),
                            reason: "must be a non-negative number".to_string(),
                        });
                    }
                )*
                Ok(())
            }

            fn search_text(&self) -> String {
                [$(self.$srch.as_str()),*].join(" ")
            }
        }
    };
    ($ty:ty, $kind:literal,
     required: [$($req:ident),* $(,)?],
     search: [$($srch:ident),* $(,)?]) => {
        impl_record!($ty, $kind,
            required: [$($req),*],
            amounts: [],
            search: [$($srch),*]);
    };
}

pub(crate) use impl_record;
