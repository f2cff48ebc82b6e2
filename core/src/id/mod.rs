//! Paste id generation.

use crate::store::error::StoreError;
use crate::types::{PASTE_ID_LENGTH, PasteId};
use rand::distributions::Alphanumeric;
use rand::rngs::OsRng;
use rand::Rng;
use tracing::warn;

/// Upper bound on draws for a single paste before giving up.
///
/// With 62^12 possible ids a second draw is already astronomically rare.
pub const MAX_ID_ATTEMPTS: usize = 16;

/// Source of candidate ids.
pub trait IdSource: Send + Sync {
    fn next_id(&self) -> PasteId;
}

/// Draws ids from the operating system's CSPRNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsRngIds;

impl IdSource for OsRngIds {
    fn next_id(&self) -> PasteId {
        let raw: String = OsRng
            .sample_iter(&Alphanumeric)
            .take(PASTE_ID_LENGTH)
            .map(char::from)
            .collect();
        PasteId::try_new(raw).expect("alphanumeric draw of PASTE_ID_LENGTH is a valid id")
    }
}

/// Runs `insert` with fresh ids until one is accepted.
///
/// Only `Conflict` triggers another draw; any other outcome is returned as is.
/// After [`MAX_ID_ATTEMPTS`] conflicts the last `Conflict` is returned.
pub(crate) fn insert_with_fresh_id<T, F>(ids: &dyn IdSource, mut insert: F) -> Result<T, StoreError>
where
    F: FnMut(PasteId) -> Result<T, StoreError>,
{
    for attempt in 1..=MAX_ID_ATTEMPTS {
        let id = ids.next_id();
        match insert(id.clone()) {
            Err(StoreError::Conflict) => {
                warn!(%id, attempt, "paste id collision, drawing another");
            }
            outcome => return outcome,
        }
    }

    Err(StoreError::Conflict)
}
