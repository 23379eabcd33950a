//! Communication records: notices, meetings, enquiries, SMS and mail outboxes
//!
//! "Sending" an SMS or a mail appends a row to the outbox and nothing else.
//! No delivery path exists.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::impl_record;

/// Who a notice is addressed to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Audience {
    All,
    Doctors,
    Patients,
    Staff,
}

impl std::fmt::Display for Audience {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Audience::All => write!(f, "all"),
            Audience::Doctors => write!(f, "doctors"),
            Audience::Patients => write!(f, "patients"),
            Audience::Staff => write!(f, "staff"),
        }
    }
}

/// A notice board entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Notice {
    #[serde(default)]
    pub id: u32,
    pub title: String,
    pub body: String,
    pub audience: Audience,
    pub date: NaiveDate,
}

impl_record!(Notice, "notice",
    required: [title, body],
    search: [title, body]);

/// A scheduled staff meeting
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Meeting {
    #[serde(default)]
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub agenda: String,
    pub location: String,
    pub date: NaiveDate,
    pub time: String,
}

impl_record!(Meeting, "meeting",
    required: [title, location, time],
    search: [title, agenda, location]);

/// A public enquiry submitted from the marketing site
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Enquiry {
    #[serde(default)]
    pub id: u32,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub subject: String,
    pub message: String,
    pub date: NaiveDate,
}

impl_record!(Enquiry, "enquiry",
    required: [name, email, message],
    search: [name, email, subject]);

/// An SMS in the outbox; `sent_at` is ms since epoch
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SmsMessage {
    #[serde(default)]
    pub id: u32,
    pub recipient: String,
    pub body: String,
    pub sent_at: i64,
}

impl_record!(SmsMessage, "sms",
    required: [recipient, body],
    search: [recipient, body]);

/// A mail in the outbox; `sent_at` is ms since epoch
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MailMessage {
    #[serde(default)]
    pub id: u32,
    pub recipient: String,
    pub subject: String,
    pub body: String,
    pub sent_at: i64,
}

impl_record!(MailMessage, "mail",
    required: [recipient, subject, body],
    search: [recipient, subject]);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Record;

    #[test]
    fn test_notice_requires_body() {
        let n = Notice {
            id: 0,
            title: "Fire drill".to_string(),
            body: String::new(),
            audience: Audience::All,
            date: NaiveDate::from_ymd_opt(2026, 4, 1).unwrap(),
        };
        assert!(n.validate().is_err());
    }

    #[test]
    fn test_sms_search_matches_recipient() {
        let sms = SmsMessage {
            id: 0,
            recipient: "+91-98765-43210".to_string(),
            body: "Your appointment is confirmed".to_string(),
            sent_at: 1_770_000_000_000,
        };
        assert!(sms.search_text().contains("98765"));
    }
}
