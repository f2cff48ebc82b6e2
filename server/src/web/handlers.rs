use anyhow::Context;
use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::header::HOST;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use pastebin_core::ServiceError;
use serde_json::json;
use std::time::SystemTime;
use tracing::{error, info};

use crate::clock::Now;
use crate::error::{AppError, Result};
use crate::state::AppState;
use crate::web::dto::{self, BodyError, CreatedPaste, PasteBody};
use crate::web::pages::{error_page, home_page, not_found_page, paste_page};

pub async fn index() -> Html<String> {
    Html(home_page())
}

pub async fn healthz(State(state): State<AppState>) -> Response {
    let service = state.service.clone();
    match blocking(move || service.health()).await {
        Ok(()) => Json(json!({ "ok": true })).into_response(),
        Err(err) => {
            error!(error = ?err, "health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "ok": false, "error": err.to_string() })),
            )
                .into_response()
        }
    }
}

/// Creation always uses the real clock; the test clock only moves expiry checks.
pub async fn create_paste(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<CreatedPaste>)> {
    let new = dto::parse_create(&body).map_err(|err| match err {
        BodyError::Malformed(msg) => AppError::BadRequest(msg),
        BodyError::Fields(errors) => AppError::Fields(errors),
    })?;

    let service = state.service.clone();
    let paste = blocking(move || service.create(new, SystemTime::now())).await?;

    let url = format!("{}/p/{}", base_url(&state, &headers), paste.id);
    info!(id = %paste.id, %url, "paste shared");

    Ok((
        StatusCode::CREATED,
        Json(CreatedPaste {
            id: paste.id.to_string(),
            url,
        }),
    ))
}

/// Counted read.
pub async fn get_paste(
    State(state): State<AppState>,
    Now(now): Now,
    Path(id): Path<String>,
) -> Result<Json<PasteBody>> {
    let service = state.service.clone();
    let view = blocking(move || service.read_counted(&id, now)).await?;
    Ok(Json(view.into()))
}

/// Uncounted read rendered as HTML.
pub async fn view_paste(
    State(state): State<AppState>,
    Now(now): Now,
    Path(id): Path<String>,
) -> (StatusCode, Html<String>) {
    let service = state.service.clone();
    let lookup = id.clone();
    match blocking(move || service.read_uncounted(&lookup, now)).await {
        Ok(paste) => (StatusCode::OK, Html(paste_page(&paste.id, &paste.content))),
        Err(AppError::Service(ServiceError::NotFound)) => {
            (StatusCode::NOT_FOUND, Html(not_found_page()))
        }
        Err(err) => {
            error!(%id, error = ?err, "paste page failed");
            (err.status(), Html(error_page(err.public_message())))
        }
    }
}

/// Runs a synchronous service call on the blocking pool.
async fn blocking<T, F>(f: F) -> Result<T>
where
    F: FnOnce() -> std::result::Result<T, ServiceError> + Send + 'static,
    T: Send + 'static,
{
    let outcome = tokio::task::spawn_blocking(f)
        .await
        .context("blocking task failed")?;
    Ok(outcome?)
}

fn base_url(state: &AppState, headers: &HeaderMap) -> String {
    if let Some(base) = &state.public_base_url {
        return base.clone();
    }
    let host = headers
        .get(HOST)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("localhost");
    format!("http://{host}")
}
