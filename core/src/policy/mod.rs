//! Expiry decisions.
//!
//! A paste is expired once its TTL deadline has been reached or once its view
//! quota has been used up. Both boundaries are inclusive. Nothing in this module
//! reads a clock: the reference time is always supplied by the caller, so the
//! same inputs always give the same answer.

use std::time::SystemTime;

/// Returns `true` if either expiry condition holds at `now`.
///
/// A missing deadline or a missing quota never causes expiry on its own.
pub fn is_expired(
    expires_at: Option<SystemTime>,
    max_views: Option<u64>,
    view_count: u64,
    now: SystemTime,
) -> bool {
    is_ttl_expired(expires_at, now) || is_view_limit_reached(max_views, view_count)
}

/// `now >= expires_at`.
pub fn is_ttl_expired(expires_at: Option<SystemTime>, now: SystemTime) -> bool {
    expires_at.is_some_and(|deadline| now >= deadline)
}

/// `view_count >= max_views`.
pub fn is_view_limit_reached(max_views: Option<u64>, view_count: u64) -> bool {
    max_views.is_some_and(|max| view_count >= max)
}

/// Expiry as seen by a counted read after its own view has been recorded.
///
/// `view_count_after` includes the reader's own view. The view that reaches the
/// quota is still served; only views counted past it, by readers that raced
/// through the earlier check, see the paste as expired.
pub fn is_expired_after_view(
    expires_at: Option<SystemTime>,
    max_views: Option<u64>,
    view_count_after: u64,
    now: SystemTime,
) -> bool {
    is_expired(expires_at, max_views, view_count_after.saturating_sub(1), now)
}

/// Views left before the quota is reached, floored at zero.
pub fn remaining_views(max_views: Option<u64>, view_count: u64) -> Option<u64> {
    max_views.map(|max| max.saturating_sub(view_count))
}

#[cfg(test)]
mod tests;
