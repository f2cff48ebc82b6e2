//! Text and JSON renderings of admin results.

use pastebin_core::types::{Paste, PasteId, PasteSummary};
use serde_json::{Value, json};
use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

pub trait Outputable {
    fn to_json(&self) -> Value;

    fn to_human(&self) -> String;
}

pub fn print_output<T: Outputable>(out: &mut impl Write, value: &T, json: bool) -> io::Result<()> {
    if json {
        let rendered = serde_json::to_string_pretty(&value.to_json())
            .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize: {e}\"}}"));
        writeln!(out, "{rendered}")
    } else {
        writeln!(out, "{}", value.to_human())
    }
}

pub struct ListOutput(pub Vec<PasteSummary>);

impl Outputable for ListOutput {
    fn to_json(&self) -> Value {
        Value::Array(
            self.0
                .iter()
                .map(|s| {
                    json!({
                        "id": s.id.as_str(),
                        "created_at": timestamp(s.created_at),
                        "expires_at": s.expires_at.map(timestamp),
                        "max_views": s.max_views,
                        "view_count": s.view_count,
                        "active": s.active,
                    })
                })
                .collect(),
        )
    }

    fn to_human(&self) -> String {
        if self.0.is_empty() {
            return "No pastes.".to_string();
        }
        self.0
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

pub struct RecordOutput {
    pub paste: Paste,
    pub now: SystemTime,
}

impl Outputable for RecordOutput {
    fn to_json(&self) -> Value {
        let p = &self.paste;
        json!({
            "id": p.id.as_str(),
            "content": p.content,
            "created_at": timestamp(p.created_at),
            "expires_at": p.expires_at.map(timestamp),
            "max_views": p.max_views,
            "view_count": p.view_count,
            "remaining_views": p.remaining_views(),
            "active": !p.is_expired(self.now),
        })
    }

    fn to_human(&self) -> String {
        let p = &self.paste;
        let expires = p
            .expires_at
            .map(timestamp)
            .unwrap_or_else(|| "never".to_string());
        format!(
            "{}\ncreated: {}\nexpires: {}\n---\n{}",
            p.summary(self.now),
            timestamp(p.created_at),
            expires,
            p.content
        )
    }
}

pub struct ExpiredOutput(pub Vec<PasteId>);

impl Outputable for ExpiredOutput {
    fn to_json(&self) -> Value {
        json!(self.0.iter().map(|id| id.as_str()).collect::<Vec<_>>())
    }

    fn to_human(&self) -> String {
        if self.0.is_empty() {
            return "No pastes past their TTL.".to_string();
        }
        self.0
            .iter()
            .map(|id| id.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// RFC 3339 in UTC; out-of-range instants fall back to raw epoch seconds.
fn timestamp(at: SystemTime) -> String {
    let secs = at
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or_default();
    OffsetDateTime::from_unix_timestamp(secs)
        .ok()
        .and_then(|dt| dt.format(&Rfc3339).ok())
        .unwrap_or_else(|| format!("@{secs}"))
}
