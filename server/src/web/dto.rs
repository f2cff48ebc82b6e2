//! Wire shapes of the JSON API.

use pastebin_core::ValidationErrors;
use pastebin_core::types::{NewPaste, PasteView};
use serde::Serialize;
use serde_json::{Map, Value};
use std::time::{SystemTime, UNIX_EPOCH};
use time::OffsetDateTime;
use time::macros::format_description;

pub const FIELD_REQUIRED: &str = "This field is required.";
pub const FIELD_NULL: &str = "This field may not be null.";
pub const NOT_A_STRING: &str = "Not a valid string.";
pub const NOT_AN_INTEGER: &str = "A valid integer is required.";

/// Why a create body could not be turned into a [`NewPaste`].
#[derive(Debug)]
pub enum BodyError {
    Malformed(String),
    Fields(ValidationErrors),
}

/// Parses a `POST /api/pastes` body.
///
/// Only shape is checked here: presence and JSON types. Value rules such as a
/// blank content or a zero TTL are left to the service.
pub fn parse_create(body: &[u8]) -> Result<NewPaste, BodyError> {
    let value: Value =
        serde_json::from_slice(body).map_err(|err| BodyError::Malformed(err.to_string()))?;
    let Value::Object(fields) = value else {
        return Err(BodyError::Malformed(
            "expected a JSON object".to_string(),
        ));
    };

    let mut errors = ValidationErrors::new();
    let content = content_field(&fields, &mut errors);
    let ttl_seconds = integer_field(&fields, "ttl_seconds", &mut errors);
    let max_views = integer_field(&fields, "max_views", &mut errors);

    if !errors.is_empty() {
        return Err(BodyError::Fields(errors));
    }

    Ok(NewPaste {
        content: content.unwrap_or_default(),
        ttl_seconds,
        max_views,
    })
}

fn content_field(fields: &Map<String, Value>, errors: &mut ValidationErrors) -> Option<String> {
    match fields.get("content") {
        None => {
            errors.add("content", FIELD_REQUIRED);
            None
        }
        Some(Value::Null) => {
            errors.add("content", FIELD_NULL);
            None
        }
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(_) => {
            errors.add("content", NOT_A_STRING);
            None
        }
    }
}

/// Integers, integral floats and integer strings are accepted. `null` means absent.
fn integer_field(
    fields: &Map<String, Value>,
    name: &str,
    errors: &mut ValidationErrors,
) -> Option<i64> {
    let parsed = match fields.get(name) {
        None | Some(Value::Null) => return None,
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(saturate)),
        Some(Value::String(s)) => parse_integer_text(s),
        Some(_) => None,
    };

    if parsed.is_none() {
        errors.add(name, NOT_AN_INTEGER);
    }
    parsed
}

/// `"5"`, `" 5 "`, `"5."` and `"5.0"` are integers; `"5.5"` is not.
fn parse_integer_text(text: &str) -> Option<i64> {
    let text = text.trim();
    let whole = match text.split_once('.') {
        Some((whole, zeros)) if zeros.bytes().all(|b| b == b'0') => whole,
        Some(_) => return None,
        None => text,
    };
    whole.parse().ok()
}

fn saturate(f: f64) -> i64 {
    // `as` saturates at the i64 bounds.
    f as i64
}

#[derive(Debug, Serialize)]
pub struct CreatedPaste {
    pub id: String,
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct PasteBody {
    pub content: String,
    pub remaining_views: Option<u64>,
    pub expires_at: Option<String>,
}

impl From<PasteView> for PasteBody {
    fn from(view: PasteView) -> Self {
        Self {
            content: view.content,
            remaining_views: view.remaining_views,
            expires_at: view.expires_at.map(format_timestamp),
        }
    }
}

/// `YYYY-MM-DDTHH:MM:SS.mmmZ` in UTC.
pub fn format_timestamp(at: SystemTime) -> String {
    let format = format_description!(
        "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z"
    );
    let nanos = match at.duration_since(UNIX_EPOCH) {
        Ok(since) => since.as_nanos() as i128,
        Err(before) => -(before.duration().as_nanos() as i128),
    };

    OffsetDateTime::from_unix_timestamp_nanos(nanos)
        .ok()
        .and_then(|at| at.format(&format).ok())
        .unwrap_or_default()
}
