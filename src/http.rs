use crate::backend::BookingBackend;
use crate::booking_store::BookingStore;
use crate::configuration::Configuration;
use crate::error::BookingError;
use crate::slot_validator::validate;
use crate::types::Booking;
use axum::extract::Path;
use axum::response::Response;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use axum::{
    routing::{delete, get},
    Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, error};

pub struct AppState<T: BookingBackend> {
    pub booking_store: Arc<BookingStore<T>>,
}

// Manual impl: a derive would require `T: Clone`.
impl<T: BookingBackend> Clone for AppState<T> {
    fn clone(&self) -> Self {
        Self {
            booking_store: self.booking_store.clone(),
        }
    }
}

pub fn create_app<T: BookingBackend, C: Configuration>(backend: T, configuration: C) -> Router {
    let booking_store = if configuration.serialize_writes() {
        BookingStore::serialized(backend)
    } else {
        BookingStore::new(backend)
    };
    let state = AppState {
        booking_store: Arc::new(booking_store),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/bookings", get(list_bookings::<T>).post(create_booking::<T>))
        .route("/api/bookings/:id", delete(delete_booking::<T>))
        .with_state(state)
        .layer(RequestBodyLimitLayer::new(configuration.max_body_bytes()))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

impl IntoResponse for BookingError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        match self {
            BookingError::Validation(_) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
            }
            BookingError::Conflict(conflict) => (
                StatusCode::CONFLICT,
                Json(json!({ "error": message, "conflict": conflict })),
            )
                .into_response(),
            BookingError::NotFound(id) => {
                debug!(%id, "No booking to delete");
                (StatusCode::NOT_FOUND, Json(json!({ "error": message }))).into_response()
            }
            BookingError::Persistence(err) => {
                error!(?err, "Booking storage failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to access booking storage." })),
                )
                    .into_response()
            }
        }
    }
}

async fn list_bookings<T: BookingBackend>(
    State(state): State<AppState<T>>,
) -> Result<Json<Vec<Booking>>, BookingError> {
    Ok(Json(state.booking_store.list()?))
}

async fn create_booking<T: BookingBackend>(
    State(state): State<AppState<T>>,
    Json(request): Json<Value>,
) -> Result<(StatusCode, Json<Booking>), BookingError> {
    // Any parseable body reaches the validator; missing or mistyped fields fail there.
    let slot = validate(
        text_field(&request, "date"),
        text_field(&request, "time"),
        request.get("duration").unwrap_or(&Value::Null),
    )?;
    let booking = state.booking_store.create(slot)?;
    Ok((StatusCode::CREATED, Json(booking)))
}

fn text_field<'a>(request: &'a Value, name: &str) -> &'a str {
    request.get(name).and_then(Value::as_str).unwrap_or_default()
}

async fn delete_booking<T: BookingBackend>(
    State(state): State<AppState<T>>,
    Path(id): Path<String>,
) -> Result<Json<Value>, BookingError> {
    match state.booking_store.delete(&id)? {
        true => Ok(Json(json!({ "ok": true }))),
        false => Err(BookingError::NotFound(id)),
    }
}
