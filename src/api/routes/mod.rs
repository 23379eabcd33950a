//! API route handlers
//!
//! One module per console domain. Every collection exposes the same five
//! endpoints (list/search, create, get, update, delete); the original
//! console repeated that page pattern some forty times with only field
//! names changing, so the handler set is generated per record type by
//! [`crud_routes`]. Endpoints with their own semantics (auth, dashboards,
//! messaging sends, export, health) are hand-written in their modules.

pub mod auth;
pub mod blood_bank;
pub mod clinical;
pub mod comms;
pub mod dashboard;
pub mod export;
pub mod finance;
pub mod health;
pub mod outreach;
pub mod patients;
pub mod pharmacy;
pub mod staff;

/// Shared imports for the generated handlers; every route module pulls
/// this in before invoking [`crud_routes`].
pub(crate) mod prelude {
    pub(crate) use crate::api::dto::{ListResponse, SearchParams};
    pub(crate) use crate::api::error::{ApiError, ApiResult};
    pub(crate) use crate::api::state::AppState;
    pub(crate) use crate::registry::Record;
    pub(crate) use axum::extract::{Path, Query, State};
    pub(crate) use axum::http::StatusCode;
    pub(crate) use axum::Json;
    pub(crate) use std::sync::Arc;
}

/// Generate the five collection handlers for one record type.
///
/// `$field` names the registry collection; the remaining idents name the
/// generated handler functions. The invoking module must `use
/// super::prelude::*;` first.
macro_rules! crud_routes {
    ($ty:ty, $field:ident:
     $list:ident, $create:ident, $get:ident, $update:ident, $delete:ident) => {
        /// List all records, filtered by `?q=` substring search when given
        pub async fn $list(
            State(state): State<Arc<AppState>>,
            Query(params): Query<SearchParams>,
        ) -> ApiResult<Json<ListResponse<$ty>>> {
            let items = match params.q.as_deref() {
                Some(q) => state.registry.$field.search(q).await,
                None => state.registry.$field.list().await,
            };
            Ok(Json(ListResponse {
                total: items.len(),
                items,
            }))
        }

        /// Validate and insert a record; 400 on empty required fields
        pub async fn $create(
            State(state): State<Arc<AppState>>,
            Json(record): Json<$ty>,
        ) -> ApiResult<(StatusCode, Json<$ty>)> {
            let created = state.registry.$field.insert(record).await?;
            tracing::info!(kind = <$ty as Record>::KIND, id = created.id(), "record created");
            Ok((StatusCode::CREATED, Json(created)))
        }

        /// Fetch one record by id
        pub async fn $get(
            State(state): State<Arc<AppState>>,
            Path(id): Path<u32>,
        ) -> ApiResult<Json<$ty>> {
            state.registry.$field.get(id).await.map(Json).ok_or_else(|| {
                ApiError::NotFound(format!(
                    "{} with id {} not found",
                    <$ty as Record>::KIND,
                    id
                ))
            })
        }

        /// Validate and replace the record with the given id
        pub async fn $update(
            State(state): State<Arc<AppState>>,
            Path(id): Path<u32>,
            Json(record): Json<$ty>,
        ) -> ApiResult<Json<$ty>> {
            let updated = state.registry.$field.update(id, record).await?;
            tracing::info!(kind = <$ty as Record>::KIND, id, "record updated");
            Ok(Json(updated))
        }

        /// Remove the record with the given id
        pub async fn $delete(
            State(state): State<Arc<AppState>>,
            Path(id): Path<u32>,
        ) -> ApiResult<StatusCode> {
            state.registry.$field.remove(id).await?;
            tracing::info!(kind = <$ty as Record>::KIND, id, "record deleted");
            Ok(StatusCode::NO_CONTENT)
        }
    };
}

pub(crate) use crud_routes;
