//! Demo CRUD resource.
//!
//! A small in-memory item store whose model covers every JSON shape the
//! flattener handles (scalars of each kind, nulls, an array). Exists for
//! manual testing of the monitoring middleware; it carries no business
//! logic of its own.

use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{DateTime, Utc};
use dashmap::mapref::entry::Entry;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::http::server::AppState;

/// Stored item. A nil `id` on create is replaced with a fresh UUID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Item {
    pub id: Uuid,
    pub flag: bool,
    pub count: i64,
    pub ratio: f64,
    pub name: Option<String>,
    pub note: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub tags: Vec<i64>,
}

#[derive(Debug, Deserialize)]
pub struct ListFilter {
    /// Only return items whose `count` equals this value.
    pub count: Option<i64>,
}

pub async fn list_items(
    State(state): State<AppState>,
    Query(filter): Query<ListFilter>,
) -> Json<Vec<Item>> {
    let items = state
        .store
        .iter()
        .map(|entry| entry.value().clone())
        .filter(|item| filter.count.is_none_or(|count| item.count == count))
        .collect();
    Json(items)
}

pub async fn get_item(State(state): State<AppState>, Path(id): Path<Uuid>) -> Response {
    match state.store.get(&id) {
        Some(item) => Json(item.value().clone()).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

pub async fn create_item(State(state): State<AppState>, Json(mut item): Json<Item>) -> Response {
    if item.id.is_nil() {
        item.id = Uuid::new_v4();
    }

    match state.store.entry(item.id) {
        Entry::Occupied(_) => StatusCode::CONFLICT.into_response(),
        Entry::Vacant(slot) => {
            slot.insert(item.clone());
            let location = format!("/api/items/{}", item.id);
            (
                StatusCode::CREATED,
                [(header::LOCATION, location)],
                Json(item),
            )
                .into_response()
        }
    }
}

pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(item): Json<Item>,
) -> StatusCode {
    if !state.store.contains_key(&id) {
        return StatusCode::NOT_FOUND;
    }
    state.store.insert(id, Item { id, ..item });
    StatusCode::OK
}

pub async fn delete_item(State(state): State<AppState>, Path(id): Path<Uuid>) -> StatusCode {
    if state.store.remove(&id).is_some() {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    }
}
