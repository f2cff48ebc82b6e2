//! Resolves the reference time for a request.

use axum::extract::FromRequestParts;
use axum::http::HeaderMap;
use axum::http::request::Parts;
use std::convert::Infallible;
use std::time::{Duration, SystemTime};

use crate::state::AppState;

/// Header carrying an epoch-millisecond override in test mode.
pub const TEST_NOW_HEADER: &str = "x-test-now-ms";

/// "Now" for the current request, decided once at the edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Now(pub SystemTime);

impl FromRequestParts<AppState> for Now {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(Now(resolve(&parts.headers, state.test_mode, SystemTime::now())))
    }
}

/// The override when test mode is on and the header parses, `fallback` otherwise.
pub fn resolve(headers: &HeaderMap, test_mode: bool, fallback: SystemTime) -> SystemTime {
    if !test_mode {
        return fallback;
    }

    headers
        .get(TEST_NOW_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse::<u64>().ok())
        .and_then(|millis| SystemTime::UNIX_EPOCH.checked_add(Duration::from_millis(millis)))
        .unwrap_or(fallback)
}
