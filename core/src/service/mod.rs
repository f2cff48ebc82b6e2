//! Paste creation and reads, combining the store with the expiry policy.
//!
//! Every operation takes the reference time as a parameter. Callers decide once,
//! at their boundary, which clock "now" comes from.

use crate::id::{IdSource, OsRngIds, insert_with_fresh_id};
use crate::policy;
use crate::store::PasteStore;
use crate::types::{NewPaste, Paste, PasteId, PasteSummary, PasteView};
use error::{ServiceError, ValidationErrors};
use std::sync::Arc;
use std::time::{Duration, SystemTime};
use tracing::{debug, info};

pub mod error {
    use crate::store::error::StoreError;
    use serde::Serialize;
    use std::collections::BTreeMap;
    use std::fmt;
    use thiserror::Error;

    #[derive(Debug, Error)]
    pub enum ServiceError {
        #[error("invalid input: {0}")]
        Validation(ValidationErrors),

        /// Never issued, or issued and since expired. Deliberately the same kind.
        #[error("Paste not found")]
        NotFound,

        #[error("paste id collision")]
        Conflict,

        #[error("storage unavailable: {0}")]
        Unavailable(String),
    }

    impl From<StoreError> for ServiceError {
        fn from(err: StoreError) -> Self {
            match err {
                StoreError::NotFound => ServiceError::NotFound,
                StoreError::Conflict => ServiceError::Conflict,
                other => ServiceError::Unavailable(other.to_string()),
            }
        }
    }

    impl From<ValidationErrors> for ServiceError {
        fn from(errors: ValidationErrors) -> Self {
            ServiceError::Validation(errors)
        }
    }

    /// Field name → messages, serialized as a JSON object.
    #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
    #[serde(transparent)]
    pub struct ValidationErrors(BTreeMap<String, Vec<String>>);

    impl ValidationErrors {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
            self.0.entry(field.into()).or_default().push(message.into());
        }

        pub fn is_empty(&self) -> bool {
            self.0.is_empty()
        }

        pub fn field(&self, name: &str) -> Option<&[String]> {
            self.0.get(name).map(Vec::as_slice)
        }

        pub fn fields(&self) -> impl Iterator<Item = &str> {
            self.0.keys().map(String::as_str)
        }

        /// `Ok(())` if nothing was recorded.
        pub fn into_result(self) -> Result<(), Self> {
            if self.is_empty() { Ok(()) } else { Err(self) }
        }
    }

    impl fmt::Display for ValidationErrors {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            let mut first = true;
            for (field, messages) in &self.0 {
                for message in messages {
                    if !first {
                        write!(f, "; ")?;
                    }
                    write!(f, "{field}: {message}")?;
                    first = false;
                }
            }
            Ok(())
        }
    }
}

pub const CONTENT_EMPTY: &str = "Content cannot be empty";
pub const TTL_TOO_SMALL: &str = "TTL must be at least 1 second";
pub const TTL_TOO_LARGE: &str = "TTL is too large";
pub const MAX_VIEWS_TOO_SMALL: &str = "Max views must be at least 1";

/// First instant that no longer has a four-digit year, 10000-01-01T00:00:00Z.
const LATEST_DEADLINE: Duration = Duration::from_secs(253_402_300_800);

/// Limits of a validated [`NewPaste`], resolved against the creation time.
struct Limits {
    expires_at: Option<SystemTime>,
    max_views: Option<u64>,
}

fn validate(new: &NewPaste, now: SystemTime) -> Result<Limits, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if new.content.trim().is_empty() {
        errors.add("content", CONTENT_EMPTY);
    }

    let mut expires_at = None;
    if let Some(ttl_seconds) = new.ttl_seconds {
        match u64::try_from(ttl_seconds) {
            Ok(secs) if secs >= 1 => match now.checked_add(Duration::from_secs(secs)) {
                Some(deadline) if deadline < SystemTime::UNIX_EPOCH + LATEST_DEADLINE => {
                    expires_at = Some(deadline)
                }
                _ => errors.add("ttl_seconds", TTL_TOO_LARGE),
            },
            _ => errors.add("ttl_seconds", TTL_TOO_SMALL),
        }
    }

    let mut max_views = None;
    if let Some(requested) = new.max_views {
        match u64::try_from(requested) {
            Ok(max) if max >= 1 => max_views = Some(max),
            _ => errors.add("max_views", MAX_VIEWS_TOO_SMALL),
        }
    }

    errors.into_result()?;
    Ok(Limits {
        expires_at,
        max_views,
    })
}

/// Entry point for every paste operation.
#[derive(Clone)]
pub struct AccessService {
    store: Arc<dyn PasteStore>,
    ids: Arc<dyn IdSource>,
}

impl AccessService {
    pub fn new(store: Arc<dyn PasteStore>) -> Self {
        Self::with_id_source(store, Arc::new(OsRngIds))
    }

    pub fn with_id_source(store: Arc<dyn PasteStore>, ids: Arc<dyn IdSource>) -> Self {
        Self { store, ids }
    }

    /// Validates and stores a new paste created at `now`.
    ///
    /// Content is checked for blankness but stored exactly as given.
    pub fn create(&self, new: NewPaste, now: SystemTime) -> Result<Paste, ServiceError> {
        let limits = validate(&new, now)?;

        let paste = insert_with_fresh_id(self.ids.as_ref(), |id| {
            self.store.create(Paste {
                id,
                content: new.content.clone(),
                created_at: now,
                expires_at: limits.expires_at,
                max_views: limits.max_views,
                view_count: 0,
            })
        })?;

        info!(
            id = %paste.id,
            ttl_seconds = ?new.ttl_seconds,
            max_views = ?paste.max_views,
            "paste created"
        );
        Ok(paste)
    }

    /// Reads a paste and counts the read as a view.
    ///
    /// A paste already expired at `now` is reported as not found and its counter is
    /// left alone. Otherwise the view is counted and the policy is checked again
    /// against the count the store hands back. A reader whose view landed past the
    /// quota, because concurrent readers took the remaining views first, is told
    /// not found; its view stays recorded. The view that reaches the quota is the
    /// last one served.
    pub fn read_counted(&self, id: &str, now: SystemTime) -> Result<PasteView, ServiceError> {
        let mut paste = self.fetch_alive(id, now)?;

        paste.view_count = self.store.increment_view(&paste.id)?;

        if policy::is_expired_after_view(paste.expires_at, paste.max_views, paste.view_count, now)
        {
            debug!(id = %paste.id, view_count = paste.view_count, "view landed past quota");
            return Err(ServiceError::NotFound);
        }

        debug!(id = %paste.id, view_count = paste.view_count, "view counted");
        Ok(paste.view())
    }

    /// Reads a paste without counting a view.
    pub fn read_uncounted(&self, id: &str, now: SystemTime) -> Result<Paste, ServiceError> {
        self.fetch_alive(id, now)
    }

    /// Returns the stored record whether or not it has expired. For admin tooling only.
    pub fn inspect(&self, id: &str) -> Result<Paste, ServiceError> {
        let id = parse_id(id)?;
        Ok(self.store.get(&id)?)
    }

    /// Every stored paste with its status at `now`, newest first.
    pub fn summaries(&self, now: SystemTime) -> Result<Vec<PasteSummary>, ServiceError> {
        Ok(self
            .store
            .list()?
            .iter()
            .map(|paste| paste.summary(now))
            .collect())
    }

    /// Summaries of pastes whose id or content contains `text`, ignoring case.
    pub fn search(&self, text: &str, now: SystemTime) -> Result<Vec<PasteSummary>, ServiceError> {
        let needle = text.to_lowercase();
        Ok(self
            .store
            .list()?
            .iter()
            .filter(|paste| {
                paste.id.to_lowercase().contains(&needle)
                    || paste.content.to_lowercase().contains(&needle)
            })
            .map(|paste| paste.summary(now))
            .collect())
    }

    /// Ids whose TTL deadline has passed at `now`.
    pub fn ttl_expired(&self, now: SystemTime) -> Result<Vec<PasteId>, ServiceError> {
        Ok(self.store.ttl_expired(now)?)
    }

    pub fn health(&self) -> Result<(), ServiceError> {
        self.store
            .ping()
            .map_err(|err| ServiceError::Unavailable(err.to_string()))
    }

    fn fetch_alive(&self, id: &str, now: SystemTime) -> Result<Paste, ServiceError> {
        let id = parse_id(id)?;
        let paste = self.store.get(&id)?;

        if paste.is_expired(now) {
            return Err(ServiceError::NotFound);
        }

        Ok(paste)
    }
}

/// A malformed id cannot name any paste.
fn parse_id(id: &str) -> Result<PasteId, ServiceError> {
    PasteId::try_new(id).map_err(|_| ServiceError::NotFound)
}
