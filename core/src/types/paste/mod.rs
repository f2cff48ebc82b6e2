//! Paste records and the projections handed to callers.

use crate::policy;
use crate::types::PasteId;
use std::fmt;
use std::time::SystemTime;

pub(crate) mod versioned_value;

use versioned_value::latest_value::PasteRecord;

/// A stored paste, alive or not.
///
/// Whether it is alive is never stored: ask [`Paste::is_expired`] with a reference time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paste {
    pub id: PasteId,
    pub content: String,
    pub created_at: SystemTime,
    pub expires_at: Option<SystemTime>,
    pub max_views: Option<u64>,
    pub view_count: u64,
}

impl Paste {
    pub fn is_expired(&self, now: SystemTime) -> bool {
        policy::is_expired(self.expires_at, self.max_views, self.view_count, now)
    }

    pub fn is_ttl_expired(&self, now: SystemTime) -> bool {
        policy::is_ttl_expired(self.expires_at, now)
    }

    pub fn is_view_limit_reached(&self) -> bool {
        policy::is_view_limit_reached(self.max_views, self.view_count)
    }

    /// `None` when the paste has no view quota.
    pub fn remaining_views(&self) -> Option<u64> {
        policy::remaining_views(self.max_views, self.view_count)
    }

    /// The public projection returned by the API read path.
    pub fn view(&self) -> PasteView {
        PasteView {
            content: self.content.clone(),
            remaining_views: self.remaining_views(),
            expires_at: self.expires_at,
        }
    }

    pub fn summary(&self, now: SystemTime) -> PasteSummary {
        PasteSummary {
            id: self.id.clone(),
            created_at: self.created_at,
            expires_at: self.expires_at,
            max_views: self.max_views,
            view_count: self.view_count,
            active: !self.is_expired(now),
        }
    }

    pub(crate) fn from_record(id: PasteId, record: PasteRecord) -> Self {
        Self {
            id,
            content: record.content,
            created_at: record.created_at,
            expires_at: record.expires_at,
            max_views: record.max_views,
            view_count: record.view_count,
        }
    }

    pub(crate) fn to_record(&self) -> PasteRecord {
        PasteRecord {
            content: self.content.clone(),
            created_at: self.created_at,
            expires_at: self.expires_at,
            max_views: self.max_views,
            view_count: self.view_count,
        }
    }
}

/// What a reader of a live paste gets back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasteView {
    pub content: String,
    pub remaining_views: Option<u64>,
    pub expires_at: Option<SystemTime>,
}

/// Admin-facing snapshot of a paste at a given instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasteSummary {
    pub id: PasteId,
    pub created_at: SystemTime,
    pub expires_at: Option<SystemTime>,
    pub max_views: Option<u64>,
    pub view_count: u64,
    pub active: bool,
}

impl fmt::Display for PasteSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.active { "active" } else { "expired" };
        write!(f, "Paste {} - {} - views: {}/", self.id, status, self.view_count)?;
        match self.max_views {
            Some(max) => write!(f, "{max}"),
            None => write!(f, "unlimited"),
        }
    }
}

/// Input to paste creation, before validation.
///
/// Limits are signed so that zero and negative requests reach validation
/// instead of failing to parse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewPaste {
    pub content: String,
    pub ttl_seconds: Option<i64>,
    pub max_views: Option<i64>,
}

impl NewPaste {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    pub fn with_ttl_seconds(mut self, ttl_seconds: i64) -> Self {
        self.ttl_seconds = Some(ttl_seconds);
        self
    }

    pub fn with_max_views(mut self, max_views: i64) -> Self {
        self.max_views = Some(max_views);
        self
    }
}
