//! Communication Routes
//!
//! Notices, meetings, and enquiries are plain collections. The SMS and
//! mail endpoints are append-only sends: the handler stamps the outbox row
//! with the server clock and nothing is ever delivered anywhere.

use chrono::Utc;

use super::crud_routes;
use super::prelude::*;
use crate::api::dto::{SendMailRequest, SendSmsRequest};
use crate::model::{Enquiry, MailMessage, Meeting, Notice, SmsMessage};

crud_routes!(Notice, notices:
    list_notices, create_notice, get_notice, update_notice, delete_notice);

crud_routes!(Meeting, meetings:
    list_meetings, create_meeting, get_meeting, update_meeting, delete_meeting);

crud_routes!(Enquiry, enquiries:
    list_enquiries, create_enquiry, get_enquiry, update_enquiry, delete_enquiry);

/// GET /sms
///
/// List the SMS outbox, filtered by `?q=` when given.
pub async fn list_sms(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> ApiResult<Json<ListResponse<SmsMessage>>> {
    let items = match params.q.as_deref() {
        Some(q) => state.registry.sms_outbox.search(q).await,
        None => state.registry.sms_outbox.list().await,
    };
    Ok(Json(ListResponse {
        total: items.len(),
        items,
    }))
}

/// POST /sms
///
/// Append an SMS to the outbox. No delivery happens.
pub async fn send_sms(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SendSmsRequest>,
) -> ApiResult<(StatusCode, Json<SmsMessage>)> {
    let message = SmsMessage {
        id: 0,
        recipient: req.recipient,
        body: req.body,
        sent_at: Utc::now().timestamp_millis(),
    };
    let stored = state.registry.sms_outbox.insert(message).await?;
    tracing::info!(id = stored.id, "sms appended to outbox");
    Ok((StatusCode::CREATED, Json(stored)))
}

/// DELETE /sms/:id
pub async fn delete_sms(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
) -> ApiResult<StatusCode> {
    state.registry.sms_outbox.remove(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /mail
///
/// List the mail outbox, filtered by `?q=` when given.
pub async fn list_mail(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> ApiResult<Json<ListResponse<MailMessage>>> {
    let items = match params.q.as_deref() {
        Some(q) => state.registry.mail_outbox.search(q).await,
        None => state.registry.mail_outbox.list().await,
    };
    Ok(Json(ListResponse {
        total: items.len(),
        items,
    }))
}

/// POST /mail
///
/// Append a mail to the outbox. No delivery happens.
pub async fn send_mail(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SendMailRequest>,
) -> ApiResult<(StatusCode, Json<MailMessage>)> {
    let message = MailMessage {
        id: 0,
        recipient: req.recipient,
        subject: req.subject,
        body: req.body,
        sent_at: Utc::now().timestamp_millis(),
    };
    let stored = state.registry.mail_outbox.insert(message).await?;
    tracing::info!(id = stored.id, "mail appended to outbox");
    Ok((StatusCode::CREATED, Json(stored)))
}

/// DELETE /mail/:id
pub async fn delete_mail(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
) -> ApiResult<StatusCode> {
    state.registry.mail_outbox.remove(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
